//! Integration tests for the generic repositories over a shared context

mod common;

use common::{Book, BookDto, Tag};
use layered_repository::{DataContext, PageReq, QueryRepositories, UnitOfWork};
use std::sync::Arc;

fn stack() -> (Arc<DataContext>, UnitOfWork, QueryRepositories) {
    let context = Arc::new(DataContext::new());
    let unit_of_work = UnitOfWork::new(Arc::clone(&context));
    let queries = QueryRepositories::new(Arc::clone(&context));
    (context, unit_of_work, queries)
}

#[tokio::test]
async fn test_add_stamps_created_date() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    let before = chrono::Utc::now();
    let added = books.add(Book::new(1, "Layers")).await;
    assert!(added.created_date.is_some());
    assert!(added.created_date.unwrap() >= before);
    assert!(added.updated_date.is_none());

    unit_of_work.commit().await.unwrap();

    let stored = queries.repository::<Book>().find(&1).await.unwrap();
    assert_eq!(stored.created_date, added.created_date);
}

#[tokio::test]
async fn test_update_stamps_updated_date_and_keeps_created() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    let added = books.add(Book::new(1, "Layers")).await;
    unit_of_work.commit().await.unwrap();

    let mut changed = added.clone();
    changed.title = "Layers, 2nd ed.".to_string();
    let updated = books.update(changed).await;
    unit_of_work.commit().await.unwrap();

    assert!(updated.updated_date.is_some());
    assert_eq!(updated.created_date, added.created_date);

    let stored = queries.repository::<Book>().find(&1).await.unwrap();
    assert_eq!(stored.title, "Layers, 2nd ed.");
    assert_eq!(stored.updated_date, updated.updated_date);
}

#[tokio::test]
async fn test_staged_changes_invisible_until_commit() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();
    let reads = queries.repository::<Book>();

    books.add(Book::new(1, "Draft")).await;
    assert_eq!(reads.count().await, 0);
    assert!(reads.find(&1).await.is_none());

    unit_of_work.commit().await.unwrap();
    assert_eq!(reads.count().await, 1);
    assert!(reads.find(&1).await.is_some());
}

#[tokio::test]
async fn test_rollback_discards_staged_changes() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    books.add(Book::new(1, "Discarded")).await;
    unit_of_work.rollback().await;
    unit_of_work.commit().await.unwrap();

    assert_eq!(queries.repository::<Book>().count().await, 0);
}

#[tokio::test]
async fn test_soft_delete_hides_from_queries_but_not_find() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();
    let reads = queries.repository::<Book>();

    let added = books.add(Book::new(1, "Gone soon")).await;
    books.add(Book::new(2, "Stays")).await;
    unit_of_work.commit().await.unwrap();

    books.delete(added).await;
    unit_of_work.commit().await.unwrap();

    let visible = reads.get_all(false).await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);

    let with_deleted = reads.get_all(true).await;
    assert_eq!(with_deleted.len(), 2);

    // Key lookup is tracking-inclusive.
    let found = reads.find(&1).await.unwrap();
    assert!(found.is_deleted);
}

#[tokio::test]
async fn test_delete_by_id_missing_is_none() {
    let (_, unit_of_work, _) = stack();
    let books = unit_of_work.repository::<Book>();

    assert!(books.delete_by_id(&99).await.is_none());
    assert!(books.remove_by_id(&99).await.is_none());
}

#[tokio::test]
async fn test_delete_where_soft_deletes_matches() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    let mut thin = Book::new(1, "Thin");
    thin.pages = 30;
    books.add(thin).await;
    books.add(Book::new(2, "Thick")).await;
    unit_of_work.commit().await.unwrap();

    let deleted = books.delete_where(|b| b.pages < 50).await;
    unit_of_work.commit().await.unwrap();

    assert_eq!(deleted.len(), 1);
    assert_eq!(queries.repository::<Book>().count().await, 1);
}

#[tokio::test]
async fn test_remove_is_physical() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    let added = books.add(Book::new(1, "Ephemeral")).await;
    unit_of_work.commit().await.unwrap();

    books.remove(added).await;
    unit_of_work.commit().await.unwrap();

    assert!(queries.repository::<Book>().find(&1).await.is_none());
    assert_eq!(queries.repository::<Book>().get_all(true).await.len(), 0);
}

#[tokio::test]
async fn test_query_predicates_and_counts() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    for i in 1..=4 {
        let mut book = Book::new(i, &format!("Book {i}"));
        book.pages = (i as u32) * 100;
        books.add(book).await;
    }
    unit_of_work.commit().await.unwrap();

    let reads = queries.repository::<Book>();
    assert!(reads.any(|b| b.pages == 300).await);
    assert!(!reads.any(|b| b.pages == 999).await);
    assert!(reads.all_match(|b| b.pages >= 100).await);
    assert_eq!(reads.count_where(|b| b.pages > 200).await, 2);

    let first = reads.get_first(|b| b.pages > 100).await.unwrap();
    assert_eq!(first.id, 2);
}

#[tokio::test]
async fn test_get_all_by_lang_filters_tagged_rows() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    let az = books.add(Book::with_lang(1, "Salam", "az")).await;
    books.add(Book::with_lang(2, "Hello", "en")).await;
    books.add(Book::new(3, "Untagged")).await;
    unit_of_work.commit().await.unwrap();

    let reads = queries.repository::<Book>();
    let az_rows = reads.get_all_by_lang("az").await;
    assert_eq!(az_rows.len(), 1);
    assert_eq!(az_rows[0].id, 1);
    assert!(reads.get_all_by_lang("fr").await.is_empty());

    // Soft-deleted rows drop out of the language scope too.
    books.delete(az).await;
    unit_of_work.commit().await.unwrap();
    assert!(reads.get_all_by_lang("az").await.is_empty());
}

#[tokio::test]
async fn test_paged_query_preserves_insertion_order() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    for i in 1..=25 {
        books.add(Book::new(i, &format!("Book {i}"))).await;
    }
    unit_of_work.commit().await.unwrap();

    let page = queries
        .repository::<Book>()
        .get_source_paged(&PageReq::with_per_page(2, 10))
        .await;

    assert_eq!(page.paging.total_items, 25);
    assert_eq!(page.paging.total_pages, 3);
    assert_eq!(page.source.len(), 10);
    assert_eq!(page.source[0].id, 11);
    assert_eq!(page.source[9].id, 20);
}

#[tokio::test]
async fn test_dto_projection() {
    let (_, unit_of_work, queries) = stack();
    let books = unit_of_work.repository::<Book>();

    books.add(Book::new(1, "Layers")).await;
    unit_of_work.commit().await.unwrap();

    let reads = queries.repository::<Book>();
    let dtos: Vec<BookDto> = reads.get_all_dto(false).await;
    assert_eq!(dtos, vec![BookDto { id: 1, title: "Layers".into() }]);

    let dto: BookDto = reads.find_dto(&1).await.unwrap();
    assert_eq!(dto.title, "Layers");
}

#[tokio::test]
async fn test_origin_repository_does_not_stamp() {
    let (_, unit_of_work, queries) = stack();
    let tags = unit_of_work.origin_repository::<Tag>();

    tags.add(Tag::new(1, "rust")).await;
    tags.add(Tag::new(2, "layers")).await;
    unit_of_work.commit().await.unwrap();

    let reads = queries.origin_repository::<Tag>();
    assert_eq!(reads.count().await, 2);
    assert_eq!(reads.find(&1).await.unwrap().label, "rust");

    tags.remove_by_id(&1).await;
    unit_of_work.commit().await.unwrap();
    assert_eq!(reads.count().await, 1);
}

#[tokio::test]
async fn test_anonymous_repository_serves_seeded_views() {
    let (context, _, queries) = stack();

    #[derive(Clone, PartialEq, Debug)]
    struct SalesRow {
        region: String,
        total: u64,
    }

    context
        .seed_view(vec![
            SalesRow { region: "north".into(), total: 10 },
            SalesRow { region: "south".into(), total: 25 },
        ])
        .await;

    let sales = queries.anonymous_repository::<SalesRow>();
    assert_eq!(sales.count().await, 2);
    let big = sales.get_where(|r| r.total > 20).await;
    assert_eq!(big.len(), 1);
    assert_eq!(big[0].region, "south");

    let page = sales.get_source_paged(&PageReq::with_per_page(1, 1)).await;
    assert_eq!(page.paging.total_pages, 2);
    assert_eq!(page.source[0].region, "north");
}

#[tokio::test]
async fn test_commit_spans_multiple_entity_types() {
    let (_, unit_of_work, queries) = stack();

    unit_of_work.repository::<Book>().add(Book::new(1, "A")).await;
    unit_of_work.origin_repository::<Tag>().add(Tag::new(1, "t")).await;

    let flushed = unit_of_work.commit().await.unwrap();
    assert_eq!(flushed, 2);

    assert_eq!(queries.repository::<Book>().count().await, 1);
    assert_eq!(queries.origin_repository::<Tag>().count().await, 1);
}
