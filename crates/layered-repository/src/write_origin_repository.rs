//! Write repository for origin entities
//!
//! Origin entities carry no audit columns and no soft-delete flag, so
//! writes stage the entity exactly as given and the only delete is a
//! physical removal.

use std::sync::Arc;

use layered_core::OriginEntity;

use crate::context::{DataContext, Table};

/// Generic write repository over an origin entity.
pub struct WriteOriginRepository<E: OriginEntity + Clone> {
    table: Arc<Table<E>>,
}

impl<E: OriginEntity + Clone> WriteOriginRepository<E> {
    pub fn new(context: &DataContext) -> Self {
        Self {
            table: context.table::<E>(),
        }
    }

    /// Stage an insert. No timestamps are stamped.
    pub async fn add(&self, entity: E) -> E {
        self.table.stage_insert(entity.clone()).await;
        entity
    }

    pub async fn add_range(&self, entities: Vec<E>) -> Vec<E> {
        for entity in &entities {
            self.table.stage_insert(entity.clone()).await;
        }
        entities
    }

    /// Stage an update.
    pub async fn update(&self, entity: E) -> E {
        self.table.stage_update(entity.clone()).await;
        entity
    }

    pub async fn update_range(&self, entities: Vec<E>) -> Vec<E> {
        for entity in &entities {
            self.table.stage_update(entity.clone()).await;
        }
        entities
    }

    /// Stage physical removal.
    pub async fn remove(&self, entity: E) -> E {
        self.table.stage_remove(entity.id()).await;
        entity
    }

    pub async fn remove_range(&self, entities: Vec<E>) -> Vec<E> {
        for entity in &entities {
            self.table.stage_remove(entity.id()).await;
        }
        entities
    }

    /// Remove by key. Unknown ids are a no-op returning `None`.
    pub async fn remove_by_id(&self, id: &E::Key) -> Option<E> {
        let entity = self.table.get(id).await?;
        Some(self.remove(entity).await)
    }
}
