//! Write repository for soft-deletable entities
//!
//! Every operation stages a change against the entity's table; nothing is
//! visible to queries until [`UnitOfWork::commit`] flushes the context.
//! `add` stamps the creation timestamp, `update` stamps the update
//! timestamp and never touches the creation one, `delete` is a soft
//! delete (flag flip staged as an update), `remove` is a hard delete.
//!
//! [`UnitOfWork::commit`]: crate::UnitOfWork::commit

use std::sync::Arc;

use chrono::Utc;
use layered_core::BaseEntity;

use crate::context::{DataContext, Table};

/// Generic write repository over a soft-deletable entity.
pub struct WriteRepository<E: BaseEntity + Clone> {
    table: Arc<Table<E>>,
}

impl<E: BaseEntity + Clone> WriteRepository<E> {
    pub fn new(context: &DataContext) -> Self {
        Self {
            table: context.table::<E>(),
        }
    }

    /// Stage an insert, stamping `created_date` with the current time.
    /// Returns the stamped entity.
    pub async fn add(&self, mut entity: E) -> E {
        entity.set_created_date(Utc::now());
        self.table.stage_insert(entity.clone()).await;
        entity
    }

    pub async fn add_range(&self, entities: Vec<E>) -> Vec<E> {
        let mut added = Vec::with_capacity(entities.len());
        for entity in entities {
            added.push(self.add(entity).await);
        }
        added
    }

    /// Stage an update, stamping `updated_date` with the current time.
    /// `created_date` is left as-is.
    pub async fn update(&self, mut entity: E) -> E {
        entity.set_updated_date(Utc::now());
        self.table.stage_update(entity.clone()).await;
        entity
    }

    pub async fn update_range(&self, entities: Vec<E>) -> Vec<E> {
        let mut updated = Vec::with_capacity(entities.len());
        for entity in entities {
            updated.push(self.update(entity).await);
        }
        updated
    }

    /// Soft delete: set the delete flag and stage the row as an update.
    /// The row stays retrievable by key lookup after commit.
    pub async fn delete(&self, mut entity: E) -> E {
        entity.set_deleted(true);
        self.table.stage_update(entity.clone()).await;
        entity
    }

    pub async fn delete_range(&self, entities: Vec<E>) -> Vec<E> {
        let mut deleted = Vec::with_capacity(entities.len());
        for entity in entities {
            deleted.push(self.delete(entity).await);
        }
        deleted
    }

    /// Soft-delete every committed, non-deleted row matching the predicate.
    pub async fn delete_where(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        let matches: Vec<E> = self
            .table
            .all()
            .await
            .into_iter()
            .filter(|e| !e.is_deleted() && predicate(e))
            .collect();
        self.delete_range(matches).await
    }

    /// Soft-delete by key. Unknown ids are a no-op returning `None`; no
    /// error is raised.
    pub async fn delete_by_id(&self, id: &E::Key) -> Option<E> {
        let entity = self.table.get(id).await?;
        Some(self.delete(entity).await)
    }

    /// Hard delete: stage physical removal of the row.
    pub async fn remove(&self, entity: E) -> E {
        self.table.stage_remove(entity.id()).await;
        entity
    }

    pub async fn remove_range(&self, entities: Vec<E>) -> Vec<E> {
        let mut removed = Vec::with_capacity(entities.len());
        for entity in entities {
            removed.push(self.remove(entity).await);
        }
        removed
    }

    /// Hard-delete by key. Unknown ids are a no-op returning `None`.
    pub async fn remove_by_id(&self, id: &E::Key) -> Option<E> {
        let entity = self.table.get(id).await?;
        Some(self.remove(entity).await)
    }
}
