//! Dispatch behavior of the async slice handle.

mod common;

use common::{category_json, order_json, tokens, MockReply, MockTransport};
use serde_json::json;
use sweety_admin::entities::{Category, CategoryDraft, Order, Product, ProductDraft};
use sweety_admin::http::{FailureKind, HttpMethod};
use sweety_admin::slice::{PageRequest, ResourceSlice, SliceStatus};

#[tokio::test]
async fn list_success_populates_items_with_bearer_token() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": [category_json("1", "Bras"), category_json("2", "Sleepwear")]
    })));

    let slice: ResourceSlice<Category> =
        ResourceSlice::new(transport.clone(), tokens(Some("tok-1")));
    slice.list(None).await;

    let state = slice.snapshot();
    assert_eq!(state.status, SliceStatus::Succeeded);
    assert_eq!(state.items.len(), 2);
    assert!(state.pagination.is_none());

    let captured = transport.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, HttpMethod::Get);
    assert_eq!(captured[0].path, "/category/all");
    assert_eq!(captured[0].token.as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn paginated_list_sends_page_query_and_folds_pagination() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": {
            "orders": [order_json("o1", 59.0), order_json("o2", 24.0), order_json("o3", 12.5)],
            "total": 37,
            "totalPages": 4,
            "currentPage": 1,
            "limit": 10
        }
    })));

    let slice: ResourceSlice<Order> = ResourceSlice::new(transport.clone(), tokens(Some("tok-1")));
    slice.list(Some(PageRequest { page: 1, limit: 10 })).await;

    let state = slice.snapshot();
    assert_eq!(state.status, SliceStatus::Succeeded);
    assert_eq!(state.items.len(), 3);
    let pagination = state.pagination.unwrap();
    assert_eq!(pagination.total, 37);
    assert_eq!(pagination.total_pages, 4);
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.limit, 10);

    assert_eq!(
        transport.captured()[0].path,
        "/order/admin/all?page=1&limit=10"
    );
}

#[tokio::test]
async fn list_with_query_appends_parameters() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({"data": []})));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    slice.list_with_query(&[("category", "c9")]).await;

    assert_eq!(transport.captured()[0].path, "/category/all?category=c9");
}

#[tokio::test]
async fn invalid_draft_is_rejected_without_network_or_transition() {
    let transport = MockTransport::new();
    let slice: ResourceSlice<Product> = ResourceSlice::new(transport.clone(), tokens(None));

    let draft = ProductDraft {
        name: "Lace Bralette".to_string(),
        description: String::new(),
        price: 34.5,
        discount_price: None,
        category: "c1".to_string(),
        subcategory: None,
        colors: vec![],
        featured: false,
    };

    let error = slice.create(&draft).await.unwrap_err();
    assert_eq!(error.field, "colors");
    assert_eq!(transport.call_count(), 0);
    assert_eq!(slice.snapshot().status, SliceStatus::Idle);
}

#[tokio::test]
async fn create_appends_decoded_entity() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": category_json("3", "Swim")
    })));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    let draft = CategoryDraft {
        name: "Swim".to_string(),
        image: None,
    };
    slice.create(&draft).await.unwrap();

    let state = slice.snapshot();
    assert_eq!(state.status, SliceStatus::Succeeded);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.last_created.as_ref().unwrap().name, "Swim");
    assert_eq!(transport.captured()[0].method, HttpMethod::Post);
    assert_eq!(transport.captured()[0].path, "/category");
}

#[tokio::test]
async fn update_failure_keeps_collection_and_sets_error() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": [category_json("1", "Bras")]
    })));
    transport.enqueue(MockReply::failure(
        FailureKind::ServerError,
        "boom",
        Some(500),
    ));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    slice.list(None).await;

    let draft = CategoryDraft {
        name: "Bralettes".to_string(),
        image: None,
    };
    slice.update("1", &draft).await.unwrap();

    let state = slice.snapshot();
    assert_eq!(state.status, SliceStatus::Failed);
    assert_eq!(state.error.as_ref().unwrap().kind, FailureKind::ServerError);
    assert_eq!(state.items[0].name, "Bras");
    assert!(state.last_updated.is_none());
}

#[tokio::test]
async fn delete_folds_by_dispatched_id() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": [category_json("1", "Bras"), category_json("2", "Sleepwear")]
    })));
    transport.enqueue(MockReply::success(json!({"message": "deleted"})));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    slice.list(None).await;
    slice.delete("1").await;

    let state = slice.snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "2");
    assert_eq!(state.last_deleted_id.as_deref(), Some("1"));
    assert_eq!(
        transport.captured()[1].method,
        HttpMethod::Delete
    );
    assert_eq!(transport.captured()[1].path, "/category/1");
}

#[tokio::test]
async fn get_by_id_fills_selected_cache() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({
        "data": category_json("7", "Hosiery")
    })));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    slice.get_by_id("7").await;

    let state = slice.snapshot();
    assert_eq!(state.selected.as_ref().unwrap().id, "7");
    assert_eq!(transport.captured()[0].path, "/category/7");
}

#[tokio::test]
async fn stale_list_response_is_dropped() {
    let transport = MockTransport::new();
    // The first dispatch resolves last; its fold must be discarded.
    transport.enqueue(
        MockReply::success(json!({"data": [category_json("1", "Stale")]})).with_delay(80),
    );
    transport.enqueue(MockReply::success(json!({"data": [category_json("2", "Fresh")]})));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    tokio::join!(slice.list(None), slice.list(None));

    let state = slice.snapshot();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Fresh");
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn acknowledge_returns_handle_to_idle() {
    let transport = MockTransport::new();
    transport.enqueue(MockReply::success(json!({"data": []})));

    let slice: ResourceSlice<Category> = ResourceSlice::new(transport.clone(), tokens(None));
    slice.list(None).await;
    assert_eq!(slice.snapshot().status, SliceStatus::Succeeded);

    slice.acknowledge();
    slice.acknowledge();
    let state = slice.snapshot();
    assert_eq!(state.status, SliceStatus::Idle);
    assert!(state.items.is_empty());
}
