//! Entity contracts
//!
//! Entities come in two flavors. An *origin* entity carries identity only.
//! A *base* entity additionally carries audit timestamps and a soft-delete
//! flag, which the write repositories maintain automatically.

use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::hash::Hash;

/// An entity with identity and nothing else.
///
/// `Key` is the primary-key type. Repositories and the data context clone
/// keys freely, so keep them cheap (`u64`, `Uuid`, small strings).
pub trait OriginEntity: Send + Sync + 'static {
    /// Primary key type.
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// The entity's primary key.
    fn id(&self) -> Self::Key;
}

/// Soft-delete flag.
///
/// Soft-deleted rows stay in storage; the read repositories exclude them
/// from default queries but still return them from key lookups.
pub trait HasDelete {
    fn is_deleted(&self) -> bool;
    fn set_deleted(&mut self, deleted: bool);
}

/// A soft-deletable entity with audit timestamps.
///
/// `WriteRepository::add` stamps `created_date`; `update` stamps
/// `updated_date` and never touches `created_date`. Both are `None` until
/// the corresponding operation runs.
pub trait BaseEntity: OriginEntity + HasDelete {
    fn created_date(&self) -> Option<DateTime<Utc>>;
    fn set_created_date(&mut self, date: DateTime<Utc>);

    fn updated_date(&self) -> Option<DateTime<Utc>>;
    fn set_updated_date(&mut self, date: DateTime<Utc>);
}

/// Optional language tag for records that belong to a single locale.
///
/// Read repositories scope queries to one tag through `get_all_by_lang`.
pub trait HasLang {
    fn lang(&self) -> Option<&str>;
    fn set_lang(&mut self, lang: Option<String>);
}
