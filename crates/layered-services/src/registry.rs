//! Service registry
//!
//! The service-side registration table: the same explicit factory pattern
//! the repository layer uses, one layer up. Factories receive the
//! aggregate's [`ServiceDeps`].

use layered_repository::{FactoryRegistry, RepositoryResult};
use std::sync::Arc;

use crate::service::{Service, ServiceDeps};

/// Registry of service factories keyed by service type.
#[derive(Default)]
pub struct ServiceRegistry {
    inner: FactoryRegistry<ServiceDeps>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service constructed through [`Service::from_deps`].
    pub fn register<S: Service>(&mut self) -> &mut Self {
        self.inner
            .register_with(|deps: &ServiceDeps| S::from_deps(deps.clone()));
        self
    }

    /// Register a service with a custom factory.
    pub fn register_with<S, F>(&mut self, factory: F) -> &mut Self
    where
        S: Send + Sync + 'static,
        F: Fn(ServiceDeps) -> S + Send + Sync + 'static,
    {
        self.inner
            .register_with(move |deps: &ServiceDeps| factory(deps.clone()));
        self
    }

    pub fn resolve<S: Send + Sync + 'static>(&self, deps: &ServiceDeps) -> RepositoryResult<Arc<S>> {
        self.inner.resolve(deps)
    }

    pub fn contains<S: 'static>(&self) -> bool {
        self.inner.contains::<S>()
    }
}
