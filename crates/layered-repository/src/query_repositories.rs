//! Query repositories
//!
//! The read-side counterpart of [`UnitOfWork`]: hands out read-only
//! repositories over the same shared context, with the same per-type
//! memoization and registry-based special resolution, and no commit
//! surface.
//!
//! [`UnitOfWork`]: crate::UnitOfWork

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layered_core::{BaseEntity, OriginEntity};

use crate::anonymous_repository::AnonymousRepository;
use crate::context::DataContext;
use crate::error::RepositoryResult;
use crate::read_origin_repository::ReadOriginRepository;
use crate::read_repository::ReadRepository;
use crate::registry::RepositoryRegistry;

/// Read-side aggregate over one data context.
pub struct QueryRepositories {
    context: Arc<DataContext>,
    registry: Arc<RepositoryRegistry>,
    repositories: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl QueryRepositories {
    /// Query repositories with no special-repository registrations.
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

    /// The read repository for a soft-deletable entity type, memoized per
    /// aggregate lifetime.
    pub fn repository<E: BaseEntity + Clone>(&self) -> Arc<ReadRepository<E>> {
        self.cached(|context| ReadRepository::<E>::new(context))
    }

    /// The read repository for an origin entity type.
    pub fn origin_repository<E: OriginEntity + Clone>(&self) -> Arc<ReadOriginRepository<E>> {
        self.cached(|context| ReadOriginRepository::<E>::new(context))
    }

    /// The read repository for a keyless projection type.
    pub fn anonymous_repository<T: Clone + Send + Sync + 'static>(
        &self,
    ) -> Arc<AnonymousRepository<T>> {
        self.cached(|context| AnonymousRepository::<T>::new(context))
    }

    /// A hand-written read repository resolved through the registry.
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
