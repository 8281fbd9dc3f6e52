//! Factory registries for hand-written repositories and services
//!
//! The aggregates resolve "special" (hand-written) implementations through
//! an explicit registration table built at startup: a map from the
//! requested type to a factory closure receiving the aggregate's
//! dependencies. Registration and resolution go through the same generic
//! parameter, so the registered key and the produced type cannot drift
//! apart. Requesting a type that was never registered fails with
//! [`RepositoryError::ImplementationNotFound`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::context::DataContext;
use crate::error::{RepositoryError, RepositoryResult};

struct Factory<Deps> {
    type_name: &'static str,
    build: Box<dyn Fn(&Deps) -> Arc<dyn Any + Send + Sync> + Send + Sync>,
}

/// Type-keyed factory table. `Deps` is whatever the owning aggregate hands
/// to every factory (the data context for repositories, the unit-of-work
/// pair for services).
pub struct FactoryRegistry<Deps> {
    factories: HashMap<TypeId, Factory<Deps>>,
}

impl<Deps> Default for FactoryRegistry<Deps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Deps> FactoryRegistry<Deps> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory for `R`. A later registration for the same type
    /// replaces the earlier one.
    pub fn register_with<R, F>(&mut self, factory: F) -> &mut Self
    where
        R: Send + Sync + 'static,
        F: Fn(&Deps) -> R + Send + Sync + 'static,
    {
        self.factories.insert(
            TypeId::of::<R>(),
            Factory {
                type_name: std::any::type_name::<R>(),
                build: Box::new(move |deps| Arc::new(factory(deps))),
            },
        );
        self
    }

    /// Build a fresh `R` from its registered factory.
    pub fn resolve<R: Send + Sync + 'static>(&self, deps: &Deps) -> RepositoryResult<Arc<R>> {
        let factory = self.factories.get(&TypeId::of::<R>()).ok_or(
            RepositoryError::ImplementationNotFound {
                type_name: std::any::type_name::<R>(),
            },
        )?;
        tracing::debug!(type_name = factory.type_name, "resolving registered factory");
        match (factory.build)(deps).downcast::<R>() {
            Ok(instance) => Ok(instance),
            // Registration ties the key to the factory's product type.
            Err(_) => unreachable!("factory registered under a foreign TypeId"),
        }
    }

    pub fn contains<R: 'static>(&self) -> bool {
        self.factories.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// A hand-written repository constructible from the shared context.
///
/// Implementing this lets [`RepositoryRegistry::register`] wire the type
/// up without a hand-rolled factory closure.
pub trait SpecialRepository: Send + Sync + Sized + 'static {
    fn from_context(context: Arc<DataContext>) -> Self;
}

/// Registry of special repositories; factories receive the aggregate's
/// data context.
#[derive(Default)]
pub struct RepositoryRegistry {
    inner: FactoryRegistry<Arc<DataContext>>,
}

impl RepositoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a repository constructed through [`SpecialRepository`].
    pub fn register<R: SpecialRepository>(&mut self) -> &mut Self {
        self.inner
            .register_with(|context: &Arc<DataContext>| R::from_context(Arc::clone(context)));
        self
    }

    /// Register a repository with a custom factory.
    pub fn register_with<R, F>(&mut self, factory: F) -> &mut Self
    where
        R: Send + Sync + 'static,
        F: Fn(Arc<DataContext>) -> R + Send + Sync + 'static,
    {
        self.inner
            .register_with(move |context: &Arc<DataContext>| factory(Arc::clone(context)));
        self
    }

    pub fn resolve<R: Send + Sync + 'static>(
        &self,
        context: &Arc<DataContext>,
    ) -> RepositoryResult<Arc<R>> {
        self.inner.resolve(context)
    }

    pub fn contains<R: 'static>(&self) -> bool {
        self.inner.contains::<R>()
    }
}
