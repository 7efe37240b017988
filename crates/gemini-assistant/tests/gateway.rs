//! Gateway behavior against a local stand-in for the Generative Language API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use catalog::Catalog;
use gemini_assistant::{
    Assistant, ChatMessage, FallbackMessages, GatewayOutcome, GeminiAssistant, GeminiConfig,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Captured {
    path: String,
    api_key: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn generate(
    State(state): State<StubState>,
    uri: axum::http::Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.captured.lock().unwrap().push(Captured {
        path: uri.path().to_string(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, Json(state.reply.clone())).into_response()
}

/// Start a stub server answering every generateContent call with `reply`.
async fn stub(status: StatusCode, reply: Value) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        reply,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/v1beta/models/*rest", post(generate))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}

fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 900, "candidatesTokenCount": 12, "totalTokenCount": 912}
    })
}

fn gateway(addr: SocketAddr, max_history_turns: usize) -> GeminiAssistant {
    let config = GeminiConfig::builder()
        .api_key("stub-key")
        .api_url(format!("http://{}", addr))
        .model("gemini-test")
        .timeout_secs(5)
        .max_history_turns(max_history_turns)
        .build();
    GeminiAssistant::new(config, &Catalog::builtin().unwrap()).unwrap()
}

#[tokio::test]
async fn test_reply_is_returned_verbatim() {
    let (addr, captured) = stub(
        StatusCode::OK,
        text_reply("We have this vinyl record in our collection! 💿"),
    )
    .await;
    let assistant = gateway(addr, 0);

    let text = assistant.reply(&[], "Do you have Kind of Blue?").await;
    assert_eq!(text, "We have this vinyl record in our collection! 💿");
    assert_eq!(assistant.requests_sent(), 1);

    let calls = captured.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(calls[0].api_key.as_deref(), Some("stub-key"));

    let body = &calls[0].body;
    let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains("ID: tr-001, Artist: Miles Davis, Album: Kind of Blue"));
    assert_eq!(
        body["contents"],
        json!([{"role": "user", "parts": [{"text": "Do you have Kind of Blue?"}]}])
    );
    assert!(body.get("generationConfig").is_none());
}

#[tokio::test]
async fn test_empty_completion_uses_fallback() {
    let (addr, _captured) = stub(
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": ""}]}, "finishReason": "SAFETY"}]}),
    )
    .await;
    let assistant = gateway(addr, 0);

    let outcome = assistant.respond(&[], "hello").await;
    assert_eq!(outcome, GatewayOutcome::EmptyCompletion);
    assert_eq!(
        outcome.into_text(&assistant.fallbacks()),
        "I'm scratching the record... could you repeat that?"
    );
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let (addr, _captured) = stub(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": {"code": 500, "message": "backend exploded", "status": "INTERNAL"}}),
    )
    .await;
    let assistant = gateway(addr, 0);

    let outcome = assistant.respond(&[], "hello").await;
    match &outcome {
        GatewayOutcome::NetworkError(detail) => assert!(detail.contains("backend exploded")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(
        assistant.reply(&[], "hello").await,
        "My needle skipped. Please try again later."
    );
    assert_eq!(assistant.requests_sent(), 2);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let assistant = gateway(addr, 0);
    let outcome = assistant.respond(&[], "hello").await;
    assert!(matches!(outcome, GatewayOutcome::NetworkError(_)));
    assert_eq!(assistant.requests_sent(), 1);
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let (addr, captured) = stub(StatusCode::OK, text_reply("should not be seen")).await;
    let config = GeminiConfig::builder()
        .api_key_var("SPIN_GATEWAY_TEST_KEY_NEVER_SET")
        .api_url(format!("http://{}", addr))
        .build();
    let assistant = GeminiAssistant::new(config, &Catalog::builtin().unwrap()).unwrap();

    let text = assistant.reply(&[], "Do you have Kind of Blue?").await;
    assert_eq!(text, FallbackMessages::default().offline);
    assert_eq!(assistant.requests_sent(), 0);
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_history_forwarding() {
    let (addr, captured) = stub(StatusCode::OK, text_reply("Of course.")).await;
    let assistant = gateway(addr, 2);

    let history = vec![
        ChatMessage::model("Welcome! I'm Spin."),
        ChatMessage::user("first"),
        ChatMessage::model("1"),
        ChatMessage::user("second"),
        ChatMessage::model("2"),
        ChatMessage::user("third"),
        ChatMessage::model("3"),
    ];
    assistant.respond(&history, "fourth").await;

    let calls = captured.lock().unwrap();
    let contents = calls[0].body["contents"].as_array().unwrap().clone();
    let pairs: Vec<(String, String)> = contents
        .iter()
        .map(|c| {
            (
                c["role"].as_str().unwrap().to_string(),
                c["parts"][0]["text"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("user".to_string(), "second".to_string()),
            ("model".to_string(), "2".to_string()),
            ("user".to_string(), "third".to_string()),
            ("model".to_string(), "3".to_string()),
            ("user".to_string(), "fourth".to_string()),
        ]
    );
}
