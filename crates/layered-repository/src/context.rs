//! Change-tracked data context
//!
//! The [`DataContext`] plays the role the persistence context plays in an
//! ORM: it owns one [`Table`] per entity type, repositories stage writes
//! against those tables, and nothing becomes visible to queries until
//! [`DataContext::save_changes`] flushes the staged changes. A unit of
//! work wraps exactly one context; sharing a context across units of work
//! shares its data.
//!
//! Committed rows keep insertion order, which is the ordering every query
//! and paged result observes.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indexmap::IndexMap;
use layered_core::OriginEntity;
use tokio::sync::RwLock;

use crate::error::RepositoryResult;

/// A staged write.
enum Change<E: OriginEntity> {
    Insert(E),
    Update(E),
    Remove(E::Key),
}

/// Committed rows plus staged changes for one entity type.
pub struct Table<E: OriginEntity + Clone> {
    rows: RwLock<IndexMap<E::Key, E>>,
    staged: RwLock<Vec<Change<E>>>,
}

impl<E: OriginEntity + Clone> Table<E> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(IndexMap::new()),
            staged: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of committed rows in insertion order.
    pub async fn all(&self) -> Vec<E> {
        self.rows.read().await.values().cloned().collect()
    }

    /// Committed row with the given key, soft-deleted or not.
    pub async fn get(&self, id: &E::Key) -> Option<E> {
        self.rows.read().await.get(id).cloned()
    }

    /// Number of committed rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Number of staged, uncommitted changes.
    pub async fn staged_len(&self) -> usize {
        self.staged.read().await.len()
    }

    pub async fn stage_insert(&self, entity: E) {
        self.staged.write().await.push(Change::Insert(entity));
    }

    pub async fn stage_update(&self, entity: E) {
        self.staged.write().await.push(Change::Update(entity));
    }

    pub async fn stage_remove(&self, id: E::Key) {
        self.staged.write().await.push(Change::Remove(id));
    }

    /// Seed committed rows directly, bypassing staging. Intended for test
    /// fixtures and data imports.
    pub async fn seed(&self, entities: Vec<E>) {
        let mut rows = self.rows.write().await;
        for entity in entities {
            rows.insert(entity.id(), entity);
        }
    }
}

/// Type-erased view of a [`Table`], used by the context to flush every
/// table regardless of entity type.
#[async_trait]
trait TableOps: Send + Sync {
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
    async fn flush(&self) -> usize;
    async fn discard(&self);
    async fn pending(&self) -> usize;
}

#[async_trait]
impl<E: OriginEntity + Clone> TableOps for Table<E> {
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    async fn flush(&self) -> usize {
        let mut staged = self.staged.write().await;
        let mut rows = self.rows.write().await;
        let applied = staged.len();
        for change in staged.drain(..) {
            match change {
                // Insert of an existing key replaces the row; update of an
                // unknown key inserts it. Existing keys keep their position.
                Change::Insert(entity) | Change::Update(entity) => {
                    rows.insert(entity.id(), entity);
                }
                // Removing a missing key is a no-op.
                Change::Remove(id) => {
                    rows.shift_remove(&id);
                }
            }
        }
        applied
    }

    async fn discard(&self) {
        self.staged.write().await.clear();
    }

    async fn pending(&self) -> usize {
        self.staged.read().await.len()
    }
}

/// The shared persistence context.
///
/// Tables are created lazily, one per entity type, and live as long as the
/// context. Keyless projection rows for [`AnonymousRepository`] live in a
/// separate slot per row type, see [`DataContext::view`].
///
/// [`AnonymousRepository`]: crate::AnonymousRepository
#[derive(Default)]
pub struct DataContext {
    tables: Mutex<HashMap<TypeId, Arc<dyn TableOps>>>,
    views: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl DataContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table for an entity type, created on first access.
    pub fn table<E: OriginEntity + Clone>(&self) -> Arc<Table<E>> {
        let ops = {
            let mut tables = self.tables.lock().unwrap();
            tables
                .entry(TypeId::of::<E>())
                .or_insert_with(|| Arc::new(Table::<E>::new()) as Arc<dyn TableOps>)
                .clone()
        };
        match ops.as_any_arc().downcast::<Table<E>>() {
            Ok(table) => table,
            // Entries are keyed by the entity's TypeId.
            Err(_) => unreachable!("table registered under a foreign TypeId"),
        }
    }

    /// Keyless rows for a projection type, created empty on first access.
    pub fn view<T: Clone + Send + Sync + 'static>(&self) -> Arc<RwLock<Vec<T>>> {
        let slot = {
            let mut views = self.views.lock().unwrap();
            views
                .entry(TypeId::of::<T>())
                .or_insert_with(|| {
                    Arc::new(RwLock::new(Vec::<T>::new())) as Arc<dyn Any + Send + Sync>
                })
                .clone()
        };
        match slot.downcast::<RwLock<Vec<T>>>() {
            Ok(view) => view,
            Err(_) => unreachable!("view registered under a foreign TypeId"),
        }
    }

    /// Replace the rows of a projection view.
    pub async fn seed_view<T: Clone + Send + Sync + 'static>(&self, rows: Vec<T>) {
        *self.view::<T>().write().await = rows;
    }

    /// Flush every table's staged changes into committed rows.
    ///
    /// Returns the number of changes applied. This is the only point at
    /// which staged writes become visible to queries.
    pub async fn save_changes(&self) -> RepositoryResult<usize> {
        let tables: Vec<Arc<dyn TableOps>> =
            self.tables.lock().unwrap().values().cloned().collect();
        let mut applied = 0;
        for table in &tables {
            applied += table.flush().await;
        }
        tracing::debug!(applied, "context changes saved");
        Ok(applied)
    }

    /// Drop every staged change without applying it.
    pub async fn discard_changes(&self) {
        let tables: Vec<Arc<dyn TableOps>> =
            self.tables.lock().unwrap().values().cloned().collect();
        for table in &tables {
            table.discard().await;
        }
    }

    /// Total number of staged, unflushed changes across all tables.
    pub async fn staged_changes(&self) -> usize {
        let tables: Vec<Arc<dyn TableOps>> =
            self.tables.lock().unwrap().values().cloned().collect();
        let mut pending = 0;
        for table in &tables {
            pending += table.pending().await;
        }
        pending
    }
}
