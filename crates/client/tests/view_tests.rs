//! LogsView reconciliation against a wiremock server.

use std::num::NonZeroUsize;

use logbook_client::{LoadState, LogsClient, LogsView, ViewError};
use logbook_core::LogInput;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record_json(id: i64, owner: &str, text: &str) -> Value {
    json!({
        "id": id,
        "owner": owner,
        "log_text": text,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

fn records_json(count: i64) -> Value {
    Value::Array((1..=count).map(|id| record_json(id, "alice", &format!("entry {id}"))).collect())
}

async fn loaded_view(count: i64) -> (MockServer, LogsView) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_json(count)))
        .mount(&server)
        .await;
    let client = LogsClient::new(&format!("{}/api", server.uri())).unwrap();
    let mut view = LogsView::new(client, NonZeroUsize::new(10).unwrap());
    view.load().await.unwrap();
    (server, view)
}

#[tokio::test]
async fn test_load_populates_first_page() {
    let (_server, view) = loaded_view(25).await;
    assert_eq!(view.load_state(), &LoadState::Ready);
    assert_eq!(view.pagination().len(), 25);
    assert_eq!(view.pagination().total_pages(), 3);
    assert_eq!(view.pagination().current_page(), 1);
    assert_eq!(view.page_items().len(), 10);
}

#[tokio::test]
async fn test_load_failure_sets_error_panel_and_retry_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Internal Server Error"})),
        )
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_json(3)))
        .mount(&server)
        .await;

    let client = LogsClient::new(&format!("{}/api", server.uri())).unwrap();
    let mut view = LogsView::new(client, NonZeroUsize::new(10).unwrap());
    assert_eq!(view.load_state(), &LoadState::Idle);

    let err = view.load().await.unwrap_err();
    assert_eq!(err.user_message(), "Internal Server Error");
    assert_eq!(view.load_state(), &LoadState::Failed("Internal Server Error".to_owned()));
    assert!(view.pagination().is_empty());

    view.retry().await.unwrap();
    assert_eq!(view.load_state(), &LoadState::Ready);
    assert_eq!(view.pagination().len(), 3);
}

#[tokio::test]
async fn test_failed_reload_clears_cached_list() {
    let (server, mut view) = loaded_view(25).await;
    assert_eq!(view.go_to_page(3), 3);
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "down"})))
        .mount(&server)
        .await;

    let err = view.retry().await.unwrap_err();
    assert_eq!(err.user_message(), "down");
    assert_eq!(view.load_state(), &LoadState::Failed("down".to_owned()));
    assert!(view.pagination().is_empty());
    assert_eq!(view.pagination().current_page(), 1);
}

#[tokio::test]
async fn test_gate_clones_track_in_flight_state() {
    let (_server, view) = loaded_view(1).await;
    let add = view.add_gate().clone();
    let edit = view.edit_gate().clone();
    let delete = view.delete_gate().clone();
    let _ticket = view.edit_gate().try_begin().unwrap();
    assert!(!add.is_submitting());
    assert!(edit.is_submitting());
    assert!(!delete.is_submitting());
}

#[tokio::test]
async fn test_create_on_full_page_moves_to_new_page() {
    let (server, mut view) = loaded_view(10).await;
    Mock::given(method("POST"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(11, "bob", "eleven")))
        .mount(&server)
        .await;

    let record = view.create(&LogInput::new("bob", "eleven")).await.unwrap();
    assert_eq!(record.id, 11);
    assert_eq!(view.pagination().len(), 11);
    assert_eq!(view.pagination().total_pages(), 2);
    assert_eq!(view.pagination().current_page(), 2);
    assert_eq!(view.page_items()[0].id, 11);
    assert!(!view.add_gate().is_submitting());
}

#[tokio::test]
async fn test_create_on_partial_page_stays() {
    let (server, mut view) = loaded_view(5).await;
    Mock::given(method("POST"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(6, "bob", "six")))
        .mount(&server)
        .await;

    view.create(&LogInput::new("bob", "six")).await.unwrap();
    assert_eq!(view.pagination().current_page(), 1);
    assert_eq!(view.page_items().len(), 6);
}

#[tokio::test]
async fn test_create_failure_leaves_state_untouched() {
    let (server, mut view) = loaded_view(10).await;
    Mock::given(method("POST"))
        .and(path("/api/logs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Internal Server Error"})),
        )
        .mount(&server)
        .await;

    let before = view.pagination().clone();
    let err = view.create(&LogInput::new("bob", "eleven")).await.unwrap_err();
    assert_eq!(err.user_message(), "Internal Server Error");
    assert_eq!(view.pagination(), &before);
    assert!(!view.add_gate().is_submitting());
}

#[tokio::test]
async fn test_invalid_input_never_hits_server() {
    let (server, mut view) = loaded_view(2).await;
    Mock::given(method("POST"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(3, "bob", "three")))
        .expect(0)
        .mount(&server)
        .await;

    let err = view.create(&LogInput::new("b", " ")).await.unwrap_err();
    assert!(matches!(err, ViewError::Validation(_)));
    assert_eq!(
        err.user_message(),
        "Owner must be at least 2 characters. Log text must be at least 2 characters."
    );
    assert_eq!(view.pagination().len(), 2);
}

#[tokio::test]
async fn test_busy_gate_blocks_second_submission() {
    let (server, mut view) = loaded_view(2).await;
    Mock::given(method("POST"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(3, "bob", "three")))
        .expect(0)
        .mount(&server)
        .await;

    let gate = view.add_gate().clone();
    let ticket = gate.try_begin().unwrap();
    let err = view.create(&LogInput::new("bob", "three")).await.unwrap_err();
    assert!(matches!(err, ViewError::Busy));
    drop(ticket);
    assert!(!gate.is_submitting());
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let (server, mut view) = loaded_view(12).await;
    Mock::given(method("PUT"))
        .and(path("/api/logs/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(3, "carol", "edited")))
        .mount(&server)
        .await;

    view.go_to_page(2);
    view.update(3, &LogInput::new("carol", "edited")).await.unwrap();
    let updated = view.pagination().get(3).unwrap();
    assert_eq!(updated.owner, "carol");
    assert_eq!(view.pagination().items()[2].log_text, "edited");
    assert_eq!(view.pagination().current_page(), 2);
}

#[tokio::test]
async fn test_update_of_uncached_record_is_tolerated() {
    let (server, mut view) = loaded_view(3).await;
    Mock::given(method("PUT"))
        .and(path("/api/logs/999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(999, "carol", "ghost")))
        .mount(&server)
        .await;

    let before = view.pagination().clone();
    view.update(999, &LogInput::new("carol", "ghost")).await.unwrap();
    assert_eq!(view.pagination(), &before);
}

#[tokio::test]
async fn test_update_not_found_reports_message() {
    let (server, mut view) = loaded_view(3).await;
    Mock::given(method("PUT"))
        .and(path("/api/logs/2"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Log not found"})),
        )
        .mount(&server)
        .await;

    let before = view.pagination().clone();
    let err = view.update(2, &LogInput::new("carol", "edited")).await.unwrap_err();
    assert_eq!(err.user_message(), "Log not found");
    assert_eq!(view.pagination(), &before);
}

#[tokio::test]
async fn test_delete_lone_item_on_last_page_clamps() {
    let (server, mut view) = loaded_view(21).await;
    Mock::given(method("DELETE"))
        .and(path("/api/logs/21"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert_eq!(view.go_to_page(3), 3);
    view.delete(21).await.unwrap();
    assert_eq!(view.pagination().total_pages(), 2);
    assert_eq!(view.pagination().current_page(), 2);
}

#[tokio::test]
async fn test_delete_failure_keeps_record() {
    let (server, mut view) = loaded_view(4).await;
    Mock::given(method("DELETE"))
        .and(path("/api/logs/4"))
        .respond_with(ResponseTemplate::new(500).set_body_string(""))
        .mount(&server)
        .await;

    let err = view.delete(4).await.unwrap_err();
    assert_eq!(err.user_message(), "Request failed with status code 500");
    assert!(view.pagination().contains(4));
    assert!(!view.delete_gate().is_submitting());
}

#[tokio::test]
async fn test_edit_form_prefills_from_server() {
    let (server, view) = loaded_view(1).await;
    Mock::given(method("GET"))
        .and(path("/api/logs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(1, "dave", "latest")))
        .mount(&server)
        .await;

    let form = view.edit_form(1).await.unwrap();
    assert_eq!(form, LogInput::new("dave", "latest"));
}

#[tokio::test]
async fn test_navigation_clamps() {
    let (_server, mut view) = loaded_view(15).await;
    assert_eq!(view.next_page(), 2);
    assert_eq!(view.next_page(), 2);
    assert_eq!(view.prev_page(), 1);
    assert_eq!(view.go_to_page(0), 1);
}
