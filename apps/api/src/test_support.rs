//! In-process stand-in for the completion endpoint, used by unit tests.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};

use crate::llm_client::CompletionClient;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// What the mock saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A completion endpoint on `127.0.0.1:<random>` that replays one canned response
/// and records every request it receives.
pub struct MockUpstream {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub async fn json(status: StatusCode, body: Value) -> Self {
        Self::spawn(status, "application/json", body.to_string()).await
    }

    pub async fn event_stream(body: &str) -> Self {
        Self::spawn(StatusCode::OK, "text/event-stream", body.to_string()).await
    }

    /// Replies with a single choice whose message content is `content`.
    pub async fn completion(content: &str) -> Self {
        Self::json(StatusCode::OK, completion_body(content)).await
    }

    async fn spawn(status: StatusCode, content_type: &'static str, body: String) -> Self {
        let state = MockState {
            status,
            content_type,
            body,
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new()
            .route(COMPLETIONS_PATH, post(record))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}{COMPLETIONS_PATH}"),
            requests,
        }
    }

    pub fn client(&self) -> CompletionClient {
        CompletionClient::new("test-key")
            .unwrap()
            .with_endpoint(&self.url)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}}
        ]
    })
}

async fn record(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header_value(&headers, header::AUTHORIZATION),
        accept: header_value(&headers, header::ACCEPT),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body.clone(),
    )
        .into_response()
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
