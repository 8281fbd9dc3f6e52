//! Unit of work
//!
//! Owns one transactional scope over the shared [`DataContext`]: hands out
//! write repositories (one memoized instance per entity type for the
//! unit-of-work's lifetime), resolves special repositories through the
//! registry, and commits every staged change atomically through the
//! context's save operation. Intended to live for a single request/scope;
//! the repository cache never evicts before the unit of work is dropped.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layered_core::{BaseEntity, OriginEntity};

use crate::context::DataContext;
use crate::error::RepositoryResult;
use crate::registry::RepositoryRegistry;
use crate::write_origin_repository::WriteOriginRepository;
use crate::write_repository::WriteRepository;

/// Write-side aggregate over one data context.
pub struct UnitOfWork {
    context: Arc<DataContext>,
    registry: Arc<RepositoryRegistry>,
    repositories: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl UnitOfWork {
    /// A unit of work with no special-repository registrations.
    pub fn new(context: Arc<DataContext>) -> Self {
        Self::with_registry(context, Arc::new(RepositoryRegistry::new()))
    }

    pub fn with_registry(context: Arc<DataContext>, registry: Arc<RepositoryRegistry>) -> Self {
        Self {
            context,
            registry,
            repositories: Mutex::new(HashMap::new()),
        }
    }

    pub fn context(&self) -> &Arc<DataContext> {
        &self.context
    }

    /// The write repository for a soft-deletable entity type. Constructed
    /// on first call and memoized; every later call returns the same
    /// instance.
    pub fn repository<E: BaseEntity + Clone>(&self) -> Arc<WriteRepository<E>> {
        self.cached(|context| WriteRepository::<E>::new(context))
    }

    /// The write repository for an origin entity type.
    pub fn origin_repository<E: OriginEntity + Clone>(&self) -> Arc<WriteOriginRepository<E>> {
        self.cached(|context| WriteOriginRepository::<E>::new(context))
    }

    /// A hand-written repository, resolved through the registry and then
    /// memoized like the generic ones. Fails with
    /// [`RepositoryError::ImplementationNotFound`] when nothing was
    /// registered for `R`.
    ///
    /// [`RepositoryError::ImplementationNotFound`]: crate::RepositoryError::ImplementationNotFound
    pub fn special_repository<R: Send + Sync + 'static>(&self) -> RepositoryResult<Arc<R>> {
        let mut repositories = self.repositories.lock().unwrap();
        if let Some(existing) = repositories.get(&TypeId::of::<R>()) {
            if let Ok(repository) = Arc::clone(existing).downcast::<R>() {
                return Ok(repository);
            }
        }
        let repository = self.registry.resolve::<R>(&self.context)?;
        repositories.insert(
            TypeId::of::<R>(),
            Arc::clone(&repository) as Arc<dyn Any + Send + Sync>,
        );
        Ok(repository)
    }

    /// Flush every staged change through the context's save operation.
    /// This is the only durability boundary.
    pub async fn commit(&self) -> RepositoryResult<usize> {
        self.context.save_changes().await
    }

    /// Discard every staged, uncommitted change.
    pub async fn rollback(&self) {
        self.context.discard_changes().await;
    }

    fn cached<R: Send + Sync + 'static>(&self, build: impl FnOnce(&DataContext) -> R) -> Arc<R> {
        let mut repositories = self.repositories.lock().unwrap();
        if let Some(existing) = repositories.get(&TypeId::of::<R>()) {
            if let Ok(repository) = Arc::clone(existing).downcast::<R>() {
                return repository;
            }
        }
        let repository = Arc::new(build(&self.context));
        repositories.insert(
            TypeId::of::<R>(),
            Arc::clone(&repository) as Arc<dyn Any + Send + Sync>,
        );
        repository
    }
}
