//! Service layer for layered applications
//!
//! Sits on top of `layered-repository` and provides:
//!
//! - **Services**: business-logic types built from the standard
//!   [`ServiceDeps`] pair (unit of work + query repositories), registered
//!   in a [`ServiceRegistry`] and resolved through a per-scope
//!   [`ServiceManager`]
//! - **Provider**: [`LayeredBuilder`]/[`LayeredProvider`] container wiring
//!   the whole stack with `Singleton`/`Scoped`/`Transient` [`Lifetime`]s
//! - **[`complete_process`]**: the service layer's error boundary, turning
//!   a fallible async action into a logged success flag
//!
//! # Quick start
//!
//! ```
//! use layered_services::{
//!     complete_process, LayeredBuilder, Service, ServiceDeps,
//! };
//!
//! struct GreetingService {
//!     deps: ServiceDeps,
//! }
//!
//! impl Service for GreetingService {
//!     fn from_deps(deps: ServiceDeps) -> Self {
//!         Self { deps }
//!     }
//! }
//!
//! impl GreetingService {
//!     async fn greet(&self) -> bool {
//!         complete_process(async {
//!             // business logic over self.deps.unit_of_work goes here
//!             Ok(())
//!         })
//!         .await
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = LayeredBuilder::new()
//!         .register_service::<GreetingService>()
//!         .build();
//!
//!     let scope = provider.scope();
//!     let manager = scope.service_manager();
//!     let greeting = manager.service::<GreetingService>().unwrap();
//!     assert!(greeting.greet().await);
//! }
//! ```

pub mod error;
pub mod provider;
pub mod registry;
pub mod service;
pub mod service_manager;

// Re-exports - Error
pub use error::{ServiceError, ServiceResult};

// Re-exports - Services
pub use service::{complete_process, Service, ServiceDeps};
pub use service_manager::ServiceManager;

// Re-exports - Registry
pub use registry::ServiceRegistry;

// Re-exports - Provider
pub use provider::{LayerScope, Lifetime, LayeredBuilder, LayeredProvider};
