//! Service building blocks
//!
//! A service wraps business logic over the write-side and read-side
//! aggregates. [`ServiceDeps`] is what every registered service factory
//! receives; [`complete_process`] is the service layer's one error
//! boundary: it swallows the action's failure, logs it, and reports a
//! bare success flag.

use std::future::Future;
use std::sync::Arc;

use layered_repository::{QueryRepositories, UnitOfWork};

/// Dependencies handed to every service.
#[derive(Clone)]
pub struct ServiceDeps {
    pub unit_of_work: Arc<UnitOfWork>,
    pub query_repositories: Arc<QueryRepositories>,
}

impl ServiceDeps {
    pub fn new(unit_of_work: Arc<UnitOfWork>, query_repositories: Arc<QueryRepositories>) -> Self {
        Self {
            unit_of_work,
            query_repositories,
        }
    }
}

/// A service constructible from the standard dependency pair.
///
/// Implementing this lets [`ServiceRegistry::register`] wire the service
/// up without a hand-rolled factory closure. Services with extra
/// dependencies register through
/// [`ServiceRegistry::register_with`] instead.
///
/// [`ServiceRegistry::register`]: crate::ServiceRegistry::register
/// [`ServiceRegistry::register_with`]: crate::ServiceRegistry::register_with
pub trait Service: Send + Sync + 'static {
    fn from_deps(deps: ServiceDeps) -> Self
    where
        Self: Sized;
}

/// Run a fallible async action, reporting only success or failure.
///
/// On failure the error is logged through `tracing` and `false` is
/// returned; no detail reaches the caller. Persistence errors raised
/// outside such an action propagate unmodified.
///
/// # Example
///
/// ```
/// use layered_services::complete_process;
///
/// # #[tokio::main]
/// # async fn main() {
/// let ok = complete_process(async { Ok(()) }).await;
/// assert!(ok);
///
/// let failed = complete_process(async { anyhow::bail!("constraint violated") }).await;
/// assert!(!failed);
/// # }
/// ```
pub async fn complete_process<Fut>(action: Fut) -> bool
where
    Fut: Future<Output = anyhow::Result<()>>,
{
    match action.await {
        Ok(()) => true,
        Err(error) => {
            tracing::error!(?error, "service action failed");
            false
        }
    }
}
