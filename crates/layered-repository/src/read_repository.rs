//! Read-only repository for soft-deletable entities
//!
//! Default queries exclude soft-deleted rows. Key lookups ([`find`]) are
//! tracking-inclusive and return the row regardless of its delete flag.
//!
//! [`find`]: ReadRepository::find

use std::sync::Arc;

use layered_core::{BaseEntity, HasLang, LocalizedSource, LocalizedTarget, MapFrom};

use crate::context::{DataContext, Table};
use crate::localize::get_localized;
use crate::paging::{PageReq, SourcePaged};

/// Generic read repository over a soft-deletable entity.
pub struct ReadRepository<E: BaseEntity + Clone> {
    table: Arc<Table<E>>,
}

impl<E: BaseEntity + Clone> ReadRepository<E> {
    pub fn new(context: &DataContext) -> Self {
        Self {
            table: context.table::<E>(),
        }
    }

    /// All rows in insertion order. Soft-deleted rows are excluded unless
    /// `include_deleted` is set.
    pub async fn get_all(&self, include_deleted: bool) -> Vec<E> {
        let rows = self.table.all().await;
        if include_deleted {
            rows
        } else {
            rows.into_iter().filter(|e| !e.is_deleted()).collect()
        }
    }

    /// All non-deleted rows projected to DTOs.
    pub async fn get_all_dto<D: MapFrom<E>>(&self, include_deleted: bool) -> Vec<D> {
        self.get_all(include_deleted)
            .await
            .iter()
            .map(D::map_from)
            .collect()
    }

    /// All non-deleted rows projected to DTOs and localized.
    pub async fn get_all_localized<D>(&self, language: &str, include_deleted: bool) -> Vec<D>
    where
        E: LocalizedSource,
        D: MapFrom<E> + LocalizedTarget,
    {
        self.get_all(include_deleted)
            .await
            .iter()
            .map(|entity| {
                let mut dto = D::map_from(entity);
                get_localized(entity, &mut dto, language);
                dto
            })
            .collect()
    }

    /// Non-deleted rows matching the predicate.
    pub async fn get_where(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.get_all(false)
            .await
            .into_iter()
            .filter(|e| predicate(e))
            .collect()
    }

    /// First non-deleted row matching the predicate.
    pub async fn get_first(&self, predicate: impl Fn(&E) -> bool) -> Option<E> {
        self.get_all(false).await.into_iter().find(|e| predicate(e))
    }

    /// Non-deleted rows tagged with the given language. Untagged rows are
    /// excluded.
    pub async fn get_all_by_lang(&self, language: &str) -> Vec<E>
    where
        E: HasLang,
    {
        self.get_where(|e| e.lang() == Some(language)).await
    }

    /// Row with the given key, soft-deleted or not.
    pub async fn find(&self, id: &E::Key) -> Option<E> {
        self.table.get(id).await
    }

    /// Row with the given key, projected to a DTO.
    pub async fn find_dto<D: MapFrom<E>>(&self, id: &E::Key) -> Option<D> {
        self.find(id).await.map(|e| D::map_from(&e))
    }

    /// Row with the given key, projected and localized.
    pub async fn find_localized<D>(&self, language: &str, id: &E::Key) -> Option<D>
    where
        E: LocalizedSource,
        D: MapFrom<E> + LocalizedTarget,
    {
        self.find(id).await.map(|entity| {
            let mut dto = D::map_from(&entity);
            get_localized(&entity, &mut dto, language);
            dto
        })
    }

    /// Whether any non-deleted row matches the predicate.
    pub async fn any(&self, predicate: impl Fn(&E) -> bool) -> bool {
        self.get_all(false).await.iter().any(|e| predicate(e))
    }

    /// Whether every non-deleted row matches the predicate.
    pub async fn all_match(&self, predicate: impl Fn(&E) -> bool) -> bool {
        self.get_all(false).await.iter().all(|e| predicate(e))
    }

    /// Number of non-deleted rows.
    pub async fn count(&self) -> usize {
        self.get_all(false).await.len()
    }

    /// Number of non-deleted rows matching the predicate.
    pub async fn count_where(&self, predicate: impl Fn(&E) -> bool) -> usize {
        self.get_where(predicate).await.len()
    }

    /// One page of non-deleted rows.
    pub async fn get_source_paged(&self, req: &PageReq) -> SourcePaged<E> {
        SourcePaged::paged(self.get_all(false).await, req)
    }

    /// One page of the non-deleted rows matching the predicate.
    pub async fn get_source_paged_where(
        &self,
        predicate: impl Fn(&E) -> bool,
        req: &PageReq,
    ) -> SourcePaged<E> {
        SourcePaged::paged(self.get_where(predicate).await, req)
    }

    /// One page of non-deleted rows projected to DTOs.
    pub async fn get_source_paged_dto<D: MapFrom<E>>(&self, req: &PageReq) -> SourcePaged<D> {
        self.get_source_paged(req)
            .await
            .map_source(|e| D::map_from(&e))
    }

    /// One page of non-deleted rows projected to DTOs and localized.
    pub async fn get_source_paged_localized<D>(
        &self,
        language: &str,
        req: &PageReq,
    ) -> SourcePaged<D>
    where
        E: LocalizedSource,
        D: MapFrom<E> + LocalizedTarget,
    {
        self.get_source_paged(req).await.map_source(|entity| {
            let mut dto = D::map_from(&entity);
            get_localized(&entity, &mut dto, language);
            dto
        })
    }
}
