//! Read-only repository over keyless rows
//!
//! Some projections (reporting views, denormalized read models) have no
//! identity contract. The anonymous repository serves those from the
//! context's per-type view slot; rows are put there with
//! [`DataContext::seed_view`].

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::context::DataContext;
use crate::paging::{PageReq, SourcePaged};

/// Read-only repository for rows without identity.
pub struct AnonymousRepository<T: Clone + Send + Sync + 'static> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone + Send + Sync + 'static> AnonymousRepository<T> {
    pub fn new(context: &DataContext) -> Self {
        Self {
            rows: context.view::<T>(),
        }
    }

    /// All rows in seeded order.
    pub async fn get_all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn get_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn get_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().await.iter().find(|row| predicate(row)).cloned()
    }

    pub async fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.read().await.iter().any(|row| predicate(row))
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn get_source_paged(&self, req: &PageReq) -> SourcePaged<T> {
        SourcePaged::paged(self.get_all().await, req)
    }
}
