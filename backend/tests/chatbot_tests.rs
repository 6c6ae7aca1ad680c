//! Chat assistant integration tests
//!
//! Tests for the chat endpoints including:
//! - Canned replies when no provider key is configured
//! - Live completions from an OpenAI-compatible provider
//! - Session history forwarded on follow-up turns
//! - Request validation

mod common;

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use soilsync_backend::services::SessionStore;

use common::{app, post_json, spawn_mock, test_config};

type Captured = Arc<Mutex<Vec<Value>>>;

/// Mock completion provider recording every request body
fn completion_mock(captured: Captured) -> Router {
    Router::new()
        .route(
            "/chat/completions",
            post(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                let turns = body["messages"].as_array().map(|m| m.len()).unwrap_or(0);
                captured.lock().unwrap().push(body);
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": format!("reply after {} messages", turns)}}]
                }))
            }),
        )
        .with_state(captured)
}

async fn configured_app(captured: Captured) -> Router {
    let base_url = spawn_mock(completion_mock(captured)).await;
    let mut config = test_config();
    config.llm.api_key = Some("test-key".to_string());
    config.llm.base_url = base_url;
    app(config)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Without a key the single-turn assistant answers from canned text
    #[tokio::test]
    async fn test_query_fallback_per_language() {
        let (status, body) = post_json(
            app(test_config()),
            "/api/chatbot/query",
            json!({"query": "When to sow wheat?", "language": "hi-IN"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["response"]["confidence"], 0.9);
        assert!(body["response"]["text"].as_str().unwrap().contains("When to sow wheat?"));
        assert_eq!(
            body["response"]["suggestions"],
            json!(["Disease Detection", "Weather Forecast", "Fertilizer Advice"])
        );
    }

    /// Live replies carry the higher confidence and the system prompt
    #[tokio::test]
    async fn test_query_live_completion() {
        let captured = Captured::default();
        let app = configured_app(captured.clone()).await;
        let (_, body) = post_json(app, "/api/chatbot/query", json!({"query": "Best fertilizer?"})).await;

        assert_eq!(body["response"]["confidence"], 0.95);
        assert_eq!(body["response"]["text"], "reply after 2 messages");

        let requests = captured.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["model"], "llama-3.1-8b-instant");
        assert_eq!(requests[0]["max_tokens"], 150);
        assert_eq!(requests[0]["temperature"], 0.7);
        assert_eq!(requests[0]["messages"][0]["role"], "system");
        assert_eq!(requests[0]["messages"][1]["content"], "Best fertilizer?");
    }

    /// Follow-up turns send the accumulated history
    #[tokio::test]
    async fn test_chat_forwards_session_history() {
        let captured = Captured::default();
        let app = configured_app(captured.clone()).await;

        let (_, first) = post_json(app.clone(), "/api/chat", json!({"message": "hello", "session_id": "plot-7"})).await;
        assert_eq!(first["session_id"], "plot-7");
        assert_eq!(first["reply"], "reply after 2 messages");

        let (_, second) = post_json(app, "/api/chat", json!({"message": "and rice?", "session_id": "plot-7"})).await;
        // system + user + assistant + user
        assert_eq!(second["reply"], "reply after 4 messages");

        let requests = captured.lock().unwrap();
        let messages = requests[1]["messages"].as_array().unwrap();
        assert_eq!(messages[1]["content"], "hello");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["content"], "and rice?");
        assert!(requests[1].get("max_tokens").is_none());
        assert_eq!(requests[1]["temperature"], 0.4);
    }

    /// A session id is generated when the client sends none
    #[tokio::test]
    async fn test_chat_generates_session_id() {
        let (status, body) = post_json(app(test_config()), "/api/chat", json!({"message": "namaskar", "language": "mr"})).await;

        assert_eq!(status, StatusCode::OK);
        let id = body["session_id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
        assert!(body["reply"].as_str().unwrap().contains("namaskar"));
    }

    /// Provider failures fall back to canned text
    #[tokio::test]
    async fn test_chat_provider_failure_falls_back() {
        let base_url = spawn_mock(Router::new()).await;
        let mut config = test_config();
        config.llm.api_key = Some("test-key".to_string());
        config.llm.base_url = base_url;

        let (status, body) = post_json(app(config), "/api/chat", json!({"message": "pest control"})).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reply"].as_str().unwrap().contains("pest control"));
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let (status, body) = post_json(app(test_config()), "/api/chat", json!({"message": ""})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("Message cannot be empty"));
    }

    #[tokio::test]
    async fn test_invalid_session_id_rejected() {
        let (status, body) =
            post_json(app(test_config()), "/api/chat", json!({"message": "hi", "session_id": "has spaces"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_query_rejected() {
        let (status, body) = post_json(app(test_config()), "/api/chatbot/query", json!({"language": "en-IN"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("query"));
    }

    /// The session window keeps only the most recent turns
    #[test]
    fn test_session_window() {
        let store = SessionStore::default();
        for i in 0..7 {
            store.add_message("farm", shared::ChatRole::User, format!("turn {}", i));
        }
        let turns = store.get_session("farm");

        assert_eq!(turns.len(), 6);
        let contents: Vec<_> = turns.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, ["turn 1", "turn 2", "turn 3", "turn 4", "turn 5", "turn 6"]);
    }
}
