//! Unit tests for paging request parsing and serialization

use layered_repository::{PageModel, PageReq, SourcePaged, DEFAULT_PER_PAGE};

#[test]
fn test_page_req_deserializes_with_defaults() {
    let req: PageReq = serde_json::from_str(r#"{"page": 3}"#).unwrap();
    assert_eq!(req.page(), 3);
    assert_eq!(req.per_page(), DEFAULT_PER_PAGE);

    let empty: PageReq = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.page(), 1);
}

#[test]
fn test_page_req_deserializes_explicit_per_page() {
    let req: PageReq = serde_json::from_str(r#"{"page": 2, "per_page": 50}"#).unwrap();
    assert_eq!(req.page(), 2);
    assert_eq!(req.per_page(), 50);
}

#[test]
fn test_page_model_round_trips() {
    let model = PageModel::new(25, 2, 10);
    let json = serde_json::to_string(&model).unwrap();
    let back: PageModel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_source_paged_serializes_rows_and_metadata() {
    let paged = SourcePaged::paged(vec![1u32, 2, 3], &PageReq::with_per_page(1, 2));
    let value: serde_json::Value = serde_json::to_value(&paged).unwrap();

    assert_eq!(value["source"], serde_json::json!([1, 2]));
    assert_eq!(value["paging"]["total_items"], 3);
    assert_eq!(value["paging"]["total_pages"], 2);
}
