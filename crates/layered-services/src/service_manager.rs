//! Service manager
//!
//! Resolves concrete services through the [`ServiceRegistry`] and memoizes
//! one instance per requested type for the manager's lifetime, exactly as
//! the unit of work does for repositories. Like the unit of work, a
//! manager is meant to live for a single request/scope.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use layered_repository::{QueryRepositories, RepositoryError, UnitOfWork};

use crate::error::{ServiceError, ServiceResult};
use crate::registry::ServiceRegistry;
use crate::service::ServiceDeps;

/// Resolves and caches services over one unit-of-work pair.
pub struct ServiceManager {
    deps: ServiceDeps,
    registry: Arc<ServiceRegistry>,
    services: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceManager {
    pub fn new(
        unit_of_work: Arc<UnitOfWork>,
        query_repositories: Arc<QueryRepositories>,
        registry: Arc<ServiceRegistry>,
    ) -> Self {
        Self {
            deps: ServiceDeps::new(unit_of_work, query_repositories),
            registry,
            services: Mutex::new(HashMap::new()),
        }
    }

    pub fn deps(&self) -> &ServiceDeps {
        &self.deps
    }

    pub fn unit_of_work(&self) -> &Arc<UnitOfWork> {
        &self.deps.unit_of_work
    }

    pub fn query_repositories(&self) -> &Arc<QueryRepositories> {
        &self.deps.query_repositories
    }

    /// The service of the requested type. Constructed through its
    /// registered factory on first call and memoized; every later call
    /// returns the same instance. Fails with
    /// [`ServiceError::ImplementationNotFound`] when nothing was
    /// registered for `S`.
    pub fn service<S: Send + Sync + 'static>(&self) -> ServiceResult<Arc<S>> {
        let mut services = self.services.lock().unwrap();
        if let Some(existing) = services.get(&TypeId::of::<S>()) {
            if let Ok(service) = Arc::clone(existing).downcast::<S>() {
                return Ok(service);
            }
        }
        let service = self.registry.resolve::<S>(&self.deps).map_err(|err| match err {
            RepositoryError::ImplementationNotFound { type_name } => {
                ServiceError::ImplementationNotFound { type_name }
            }
        })?;
        services.insert(
            TypeId::of::<S>(),
            Arc::clone(&service) as Arc<dyn Any + Send + Sync>,
        );
        Ok(service)
    }
}
