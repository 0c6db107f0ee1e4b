//! Flashcard session API tests.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{create_flashcard_session, fixtures, TestContext};

/// Test creating a session over a category.
#[tokio::test]
async fn test_create_session() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/flashcards/sessions")
        .json(&fixtures::flashcard_session_request(Some("noun")))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();

    assert!(body["session_id"].is_string());
    assert_eq!(body["total_cards"], 6);
    assert_eq!(body["current_index"], 0);
    assert_eq!(body["current_card"]["id"], "dog");
    assert_eq!(body["stats"]["new"], 6);
    assert_eq!(body["statuses"]["cat"], "new");
    assert_eq!(body["is_reviewing_card"], false);
    assert_eq!(body["settings"]["new_cards_before_review"], 2);
}

/// Test unknown session returns 404.
#[tokio::test]
async fn test_unknown_session() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/flashcards/sessions/00000000-0000-0000-0000-000000000000/advance")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test a missed word resurfaces as a review turn after two fresh cards.
#[tokio::test]
async fn test_missed_word_is_reviewed() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::immediate_review_session_request("noun"),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    let response = server
        .post(&format!("{}/mark", base))
        .json(&fixtures::mark_request("dog", "needs_review"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["statuses"]["dog"], "needs-review");
    assert_eq!(body["review_queue"].as_array().unwrap().len(), 1);

    for expected in [1, 2] {
        let body: Value = server.post(&format!("{}/advance", base)).await.json();
        assert_eq!(body["advance"]["outcome"], "next");
        assert_eq!(body["advance"]["index"], expected);
        assert_eq!(body["session"]["is_reviewing_card"], false);
    }

    let body: Value = server.post(&format!("{}/advance", base)).await.json();
    assert_eq!(body["advance"]["outcome"], "review");
    assert_eq!(body["advance"]["index"], 0);
    assert_eq!(body["session"]["is_reviewing_card"], true);
    assert_eq!(body["session"]["current_card"]["id"], "dog");
}

/// Test studying every card completes the session.
#[tokio::test]
async fn test_session_completes() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("verb")),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    for word_id in ["run", "eat"] {
        server
            .post(&format!("{}/mark", base))
            .json(&fixtures::mark_request(word_id, "studied"))
            .await
            .assert_status_ok();
    }

    let body: Value = server.post(&format!("{}/advance", base)).await.json();
    assert_eq!(body["advance"]["outcome"], "complete");
    assert_eq!(body["session"]["is_complete"], true);
    assert_eq!(body["session"]["progress_percent"], 100);
}

/// Test marking an unknown word is ignored.
#[tokio::test]
async fn test_mark_unknown_word_is_ignored() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("verb")),
    )
    .await;

    let response = server
        .post(&format!("/api/flashcards/sessions/{}/mark", id))
        .json(&fixtures::mark_request("dog", "needs_review"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["stats"]["new"], 2);
    assert!(body["review_queue"].as_array().unwrap().is_empty());
    assert!(body["statuses"].get("dog").is_none());
}

/// Test changing the selection keeps progress of overlapping words.
#[tokio::test]
async fn test_select_words_preserves_status() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("verb")),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    let body: Value = server.get(&base).await.json();
    assert_eq!(body["selection"]["category"], "verb");

    server
        .post(&format!("{}/mark", base))
        .json(&fixtures::mark_request("run", "studied"))
        .await
        .assert_status_ok();

    let response = server
        .put(&format!("{}/words", base))
        .json(&serde_json::json!({}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert!(body["selection"]["category"].is_null());

    assert_eq!(body["total_cards"], 10);
    assert_eq!(body["statuses"]["run"], "studied");
    assert_eq!(body["stats"]["studied"], 1);
    assert_eq!(body["current_index"], 0);
}

/// Test status events are drained once.
#[tokio::test]
async fn test_events_are_drained() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("verb")),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    server
        .post(&format!("{}/mark", base))
        .json(&fixtures::mark_request("eat", "studied"))
        .await
        .assert_status_ok();

    let body: Value = server.get(&format!("{}/events", base)).await.json();
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["type"], "status_changed");
    assert_eq!(events[0]["from"], "new");
    assert_eq!(events[0]["to"], "studied");
    assert_eq!(events[1]["type"], "word_studied");
    assert_eq!(events[1]["word_id"], "eat");

    let body: Value = server.get(&format!("{}/events", base)).await.json();
    assert!(body["events"].as_array().unwrap().is_empty());
}

/// Test shuffle and reset.
#[tokio::test]
async fn test_shuffle_and_reset() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("noun")),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    server
        .post(&format!("{}/mark", base))
        .json(&fixtures::mark_request("cat", "studied"))
        .await
        .assert_status_ok();
    server.post(&format!("{}/advance", base)).await.assert_status_ok();

    let body: Value = server.post(&format!("{}/shuffle", base)).await.json();
    assert_eq!(body["current_index"], 0);
    assert_eq!(body["total_cards"], 6);
    assert_eq!(body["statuses"]["cat"], "studied");

    let body: Value = server.post(&format!("{}/reset", base)).await.json();
    assert_eq!(body["stats"]["new"], 6);
    assert_eq!(body["total_processed"], 0);
}

/// Test retreat never goes below the first card.
#[tokio::test]
async fn test_retreat() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(
        &server,
        &fixtures::flashcard_session_request(Some("noun")),
    )
    .await;
    let base = format!("/api/flashcards/sessions/{}", id);

    let body: Value = server.post(&format!("{}/retreat", base)).await.json();
    assert_eq!(body["current_index"], 0);

    server.post(&format!("{}/advance", base)).await.assert_status_ok();
    let body: Value = server.post(&format!("{}/retreat", base)).await.json();
    assert_eq!(body["current_index"], 0);
    assert_eq!(body["total_processed"], 1);
}

/// Test ending a session.
#[tokio::test]
async fn test_end_session() {
    let server = TestContext::new().server();
    let id = create_flashcard_session(&server, &fixtures::flashcard_session_request(None)).await;
    let base = format!("/api/flashcards/sessions/{}", id);

    server.delete(&base).await.assert_status(StatusCode::NO_CONTENT);
    server.get(&base).await.assert_status(StatusCode::NOT_FOUND);
}
