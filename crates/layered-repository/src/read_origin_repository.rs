//! Read-only repository for origin entities
//!
//! Origin entities carry no soft-delete flag, so every committed row is in
//! scope for every query.

use std::sync::Arc;

use layered_core::{HasLang, LocalizedSource, LocalizedTarget, MapFrom, OriginEntity};

use crate::context::{DataContext, Table};
use crate::localize::get_localized;
use crate::paging::{PageReq, SourcePaged};

/// Generic read repository over an origin entity.
pub struct ReadOriginRepository<E: OriginEntity + Clone> {
    table: Arc<Table<E>>,
}

impl<E: OriginEntity + Clone> ReadOriginRepository<E> {
    pub fn new(context: &DataContext) -> Self {
        Self {
            table: context.table::<E>(),
        }
    }

    /// All rows in insertion order.
    pub async fn get_all(&self) -> Vec<E> {
        self.table.all().await
    }

    pub async fn get_all_dto<D: MapFrom<E>>(&self) -> Vec<D> {
        self.get_all().await.iter().map(D::map_from).collect()
    }

    pub async fn get_all_localized<D>(&self, language: &str) -> Vec<D>
    where
        E: LocalizedSource,
        D: MapFrom<E> + LocalizedTarget,
    {
        self.get_all()
            .await
            .iter()
            .map(|entity| {
                let mut dto = D::map_from(entity);
                get_localized(entity, &mut dto, language);
                dto
            })
            .collect()
    }

    pub async fn get_where(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.get_all()
            .await
            .into_iter()
            .filter(|e| predicate(e))
            .collect()
    }

    pub async fn get_first(&self, predicate: impl Fn(&E) -> bool) -> Option<E> {
        self.get_all().await.into_iter().find(|e| predicate(e))
    }

    /// Rows tagged with the given language. Untagged rows are excluded.
    pub async fn get_all_by_lang(&self, language: &str) -> Vec<E>
    where
        E: HasLang,
    {
        self.get_where(|e| e.lang() == Some(language)).await
    }

    pub async fn find(&self, id: &E::Key) -> Option<E> {
        self.table.get(id).await
    }

    pub async fn find_dto<D: MapFrom<E>>(&self, id: &E::Key) -> Option<D> {
        self.find(id).await.map(|e| D::map_from(&e))
    }

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

    pub async fn any(&self, predicate: impl Fn(&E) -> bool) -> bool {
        self.get_all().await.iter().any(|e| predicate(e))
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }

    pub async fn get_source_paged(&self, req: &PageReq) -> SourcePaged<E> {
        SourcePaged::paged(self.get_all().await, req)
    }

    pub async fn get_source_paged_dto<D: MapFrom<E>>(&self, req: &PageReq) -> SourcePaged<D> {
        self.get_source_paged(req)
            .await
            .map_source(|e| D::map_from(&e))
    }

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
