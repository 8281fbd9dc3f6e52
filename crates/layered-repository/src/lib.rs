//! Repository layer for layered applications
//!
//! This crate provides the data-access half of the stack:
//!
//! - **Generic repositories**: read/write wrappers per entity type, in
//!   soft-deletable ([`ReadRepository`]/[`WriteRepository`]) and origin
//!   ([`ReadOriginRepository`]/[`WriteOriginRepository`]) variants, plus a
//!   keyless [`AnonymousRepository`] for projections
//! - **Unit of Work / Query Repositories**: aggregates that memoize one
//!   repository per entity type over a single change-tracked
//!   [`DataContext`] and commit all staged writes atomically
//! - **Registry**: explicit factory table resolving hand-written "special"
//!   repositories by type
//! - **Paging**: bounded page requests and page models
//! - **Localization**: copies language-suffixed entity fields onto DTOs
//!
//! # Quick start
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use layered_core::{BaseEntity, HasDelete, OriginEntity};
//! use layered_repository::{DataContext, PageReq, QueryRepositories, UnitOfWork};
//! use std::sync::Arc;
//!
//! #[derive(Clone)]
//! struct Book {
//!     id: u64,
//!     title: String,
//!     is_deleted: bool,
//!     created_date: Option<DateTime<Utc>>,
//!     updated_date: Option<DateTime<Utc>>,
//! }
//!
//! impl OriginEntity for Book {
//!     type Key = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! impl HasDelete for Book {
//!     fn is_deleted(&self) -> bool {
//!         self.is_deleted
//!     }
//!     fn set_deleted(&mut self, deleted: bool) {
//!         self.is_deleted = deleted;
//!     }
//! }
//!
//! impl BaseEntity for Book {
//!     fn created_date(&self) -> Option<DateTime<Utc>> {
//!         self.created_date
//!     }
//!     fn set_created_date(&mut self, date: DateTime<Utc>) {
//!         self.created_date = Some(date);
//!     }
//!     fn updated_date(&self) -> Option<DateTime<Utc>> {
//!         self.updated_date
//!     }
//!     fn set_updated_date(&mut self, date: DateTime<Utc>) {
//!         self.updated_date = Some(date);
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let context = Arc::new(DataContext::new());
//!
//!     // Write side: stage, then commit.
//!     let unit_of_work = UnitOfWork::new(Arc::clone(&context));
//!     let books = unit_of_work.repository::<Book>();
//!     books
//!         .add(Book {
//!             id: 1,
//!             title: "Layers".into(),
//!             is_deleted: false,
//!             created_date: None,
//!             updated_date: None,
//!         })
//!         .await;
//!     unit_of_work.commit().await.unwrap();
//!
//!     // Read side: same context, paged query.
//!     let queries = QueryRepositories::new(context);
//!     let page = queries
//!         .repository::<Book>()
//!         .get_source_paged(&PageReq::new(1))
//!         .await;
//!     assert_eq!(page.paging.total_items, 1);
//!     assert_eq!(page.source[0].title, "Layers");
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │            Service layer                 │
//! │         (layered-services)               │
//! └───────────────┬──────────────────────────┘
//!                 │
//!     ┌───────────┴───────────┐
//!     ↓                       ↓
//! ┌──────────────┐    ┌───────────────────┐
//! │ UnitOfWork   │    │ QueryRepositories │
//! │ write repos  │    │ read repos        │
//! │ commit       │    │                   │
//! └──────┬───────┘    └────────┬──────────┘
//!        │    per-type memoized │
//!        └──────────┬───────────┘
//!                   ↓
//!          ┌────────────────┐
//!          │  DataContext   │
//!          │  staged writes │
//!          │  save_changes  │
//!          └────────────────┘
//! ```

pub mod anonymous_repository;
pub mod context;
pub mod error;
pub mod localize;
pub mod paging;
pub mod query_repositories;
pub mod read_origin_repository;
pub mod read_repository;
pub mod registry;
pub mod unit_of_work;
pub mod write_origin_repository;
pub mod write_repository;

// Re-exports - Context
pub use context::{DataContext, Table};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Paging
pub use paging::{PageModel, PageReq, SourcePaged, DEFAULT_PER_PAGE, MAX_PER_PAGE};

// Re-exports - Repositories
pub use anonymous_repository::AnonymousRepository;
pub use read_origin_repository::ReadOriginRepository;
pub use read_repository::ReadRepository;
pub use write_origin_repository::WriteOriginRepository;
pub use write_repository::WriteRepository;

// Re-exports - Aggregates
pub use query_repositories::QueryRepositories;
pub use unit_of_work::UnitOfWork;

// Re-exports - Registry
pub use registry::{FactoryRegistry, RepositoryRegistry, SpecialRepository};

// Re-exports - Localization
pub use localize::{get_localized, get_localized_list};
