//! Layer provider
//!
//! Startup wiring for the whole stack. A [`LayeredBuilder`] collects the
//! data context, the repository/service registrations, and the desired
//! [`Lifetime`], then produces a [`LayeredProvider`]. The provider opens
//! [`LayerScope`]s; a scope lazily builds the unit of work, the query
//! repositories, and the service manager over the shared context.
//!
//! Lifetimes follow the usual container semantics:
//!
//! - `Singleton`: one scope for the provider's lifetime; every call to
//!   [`LayeredProvider::scope`] returns it.
//! - `Scoped` (default): one fresh scope per `scope()` call; instances are
//!   shared within the scope.
//! - `Transient`: scopes are fresh too, and every accessor on the scope
//!   builds a new instance.

use std::sync::{Arc, OnceLock};

use layered_repository::{
    DataContext, QueryRepositories, RepositoryRegistry, SpecialRepository, UnitOfWork,
};

use crate::registry::ServiceRegistry;
use crate::service::{Service, ServiceDeps};
use crate::service_manager::ServiceManager;

/// How long resolved instances live relative to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// One shared scope for the provider's lifetime.
    Singleton,
    /// One set of instances per scope.
    #[default]
    Scoped,
    /// A fresh instance on every accessor call.
    Transient,
}

/// Collects registrations and wiring for a [`LayeredProvider`].
#[derive(Default)]
pub struct LayeredBuilder {
    context: Option<Arc<DataContext>>,
    repositories: RepositoryRegistry,
    query_repositories: RepositoryRegistry,
    services: ServiceRegistry,
    lifetime: Lifetime,
}

impl LayeredBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing context instead of a fresh empty one.
    pub fn with_context(mut self, context: Arc<DataContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Register a special repository for the write-side aggregate.
    pub fn register_repository<R: SpecialRepository>(mut self) -> Self {
        self.repositories.register::<R>();
        self
    }

    pub fn register_repository_with<R, F>(mut self, factory: F) -> Self
    where
        R: Send + Sync + 'static,
        F: Fn(Arc<DataContext>) -> R + Send + Sync + 'static,
    {
        self.repositories.register_with(factory);
        self
    }

    /// Register a special repository for the read-side aggregate.
    pub fn register_query_repository<R: SpecialRepository>(mut self) -> Self {
        self.query_repositories.register::<R>();
        self
    }

    pub fn register_query_repository_with<R, F>(mut self, factory: F) -> Self
    where
        R: Send + Sync + 'static,
        F: Fn(Arc<DataContext>) -> R + Send + Sync + 'static,
    {
        self.query_repositories.register_with(factory);
        self
    }

    pub fn register_service<S: Service>(mut self) -> Self {
        self.services.register::<S>();
        self
    }

    pub fn register_service_with<S, F>(mut self, factory: F) -> Self
    where
        S: Send + Sync + 'static,
        F: Fn(ServiceDeps) -> S + Send + Sync + 'static,
    {
        self.services.register_with(factory);
        self
    }

    pub fn build(self) -> LayeredProvider {
        LayeredProvider {
            context: self.context.unwrap_or_default(),
            repositories: Arc::new(self.repositories),
            query_repositories: Arc::new(self.query_repositories),
            services: Arc::new(self.services),
            lifetime: self.lifetime,
            singleton: OnceLock::new(),
        }
    }
}

/// The built container. Cheap to share behind an `Arc`; opens scopes.
pub struct LayeredProvider {
    context: Arc<DataContext>,
    repositories: Arc<RepositoryRegistry>,
    query_repositories: Arc<RepositoryRegistry>,
    services: Arc<ServiceRegistry>,
    lifetime: Lifetime,
    singleton: OnceLock<LayerScope>,
}

impl LayeredProvider {
    pub fn context(&self) -> &Arc<DataContext> {
        &self.context
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Open a resolution scope. Under `Singleton` the same scope is
    /// returned every time; otherwise each call opens a fresh one.
    pub fn scope(&self) -> LayerScope {
        match self.lifetime {
            Lifetime::Singleton => self.singleton.get_or_init(|| self.open_scope()).clone(),
            Lifetime::Scoped | Lifetime::Transient => self.open_scope(),
        }
    }

    fn open_scope(&self) -> LayerScope {
        LayerScope {
            state: Arc::new(ScopeState {
                context: Arc::clone(&self.context),
                repositories: Arc::clone(&self.repositories),
                query_repositories: Arc::clone(&self.query_repositories),
                services: Arc::clone(&self.services),
                lifetime: self.lifetime,
                unit_of_work: OnceLock::new(),
                query: OnceLock::new(),
                manager: OnceLock::new(),
            }),
        }
    }
}

struct ScopeState {
    context: Arc<DataContext>,
    repositories: Arc<RepositoryRegistry>,
    query_repositories: Arc<RepositoryRegistry>,
    services: Arc<ServiceRegistry>,
    lifetime: Lifetime,
    unit_of_work: OnceLock<Arc<UnitOfWork>>,
    query: OnceLock<Arc<QueryRepositories>>,
    manager: OnceLock<Arc<ServiceManager>>,
}

/// One resolution scope. Clones share the same state, so instances
/// resolved through any clone are the scope's instances.
#[derive(Clone)]
pub struct LayerScope {
    state: Arc<ScopeState>,
}

impl LayerScope {
    pub fn context(&self) -> &Arc<DataContext> {
        &self.state.context
    }

    pub fn unit_of_work(&self) -> Arc<UnitOfWork> {
        match self.state.lifetime {
            Lifetime::Transient => Arc::new(self.build_unit_of_work()),
            Lifetime::Singleton | Lifetime::Scoped => Arc::clone(
                self.state
                    .unit_of_work
                    .get_or_init(|| Arc::new(self.build_unit_of_work())),
            ),
        }
    }

    pub fn query_repositories(&self) -> Arc<QueryRepositories> {
        match self.state.lifetime {
            Lifetime::Transient => Arc::new(self.build_query_repositories()),
            Lifetime::Singleton | Lifetime::Scoped => Arc::clone(
                self.state
                    .query
                    .get_or_init(|| Arc::new(self.build_query_repositories())),
            ),
        }
    }

    pub fn service_manager(&self) -> Arc<ServiceManager> {
        match self.state.lifetime {
            Lifetime::Transient => Arc::new(self.build_service_manager()),
            Lifetime::Singleton | Lifetime::Scoped => Arc::clone(
                self.state
                    .manager
                    .get_or_init(|| Arc::new(self.build_service_manager())),
            ),
        }
    }

    fn build_unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::with_registry(
            Arc::clone(&self.state.context),
            Arc::clone(&self.state.repositories),
        )
    }

    fn build_query_repositories(&self) -> QueryRepositories {
        QueryRepositories::with_registry(
            Arc::clone(&self.state.context),
            Arc::clone(&self.state.query_repositories),
        )
    }

    fn build_service_manager(&self) -> ServiceManager {
        ServiceManager::new(
            self.unit_of_work(),
            self.query_repositories(),
            Arc::clone(&self.state.services),
        )
    }
}
