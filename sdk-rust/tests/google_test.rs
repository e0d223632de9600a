use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use cognipath_sdk::{
    google::{GoogleModel, GoogleModelOptions},
    LanguageModel, LanguageModelError, LanguageModelInput, Message, ModelUsage, Part,
    ResponseFormatOption,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    env,
    sync::{Arc, Mutex},
};

#[derive(Clone, Default)]
struct Recorded {
    bodies: Arc<Mutex<Vec<Value>>>,
    keys: Arc<Mutex<Vec<String>>>,
}

/// Start a fake Gemini endpoint that answers every request with `reply`.
async fn spawn_server(status: StatusCode, reply: Value) -> (String, Recorded) {
    let recorded = Recorded::default();

    let app = Router::new()
        .route(
            "/v1beta/models/{action}",
            post(
                move |State(recorded): State<Recorded>,
                      Query(query): Query<HashMap<String, String>>,
                      Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        recorded.bodies.lock().unwrap().push(body);
                        recorded
                            .keys
                            .lock()
                            .unwrap()
                            .push(query.get("key").cloned().unwrap_or_default());
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1beta"), recorded)
}

fn model(base_url: String) -> GoogleModel {
    GoogleModel::new(
        "gemini-2.5-flash",
        GoogleModelOptions {
            api_key: "test-key".to_string(),
            base_url: Some(base_url),
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn generate_sends_contents_and_maps_candidate() {
    let (base_url, recorded) = spawn_server(
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Photosynthesis " }, { "text": "makes sugar." }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 5, "totalTokenCount": 17 }
        }),
    )
    .await;

    let response = model(base_url)
        .generate(LanguageModelInput {
            system_prompt: Some("You are an expert AI Tutor.".to_string()),
            messages: vec![Message::user([Part::text("Explain photosynthesis")])],
            ..Default::default()
        })
        .await
        .expect("generate succeeds");

    assert_eq!(
        response.text().as_deref(),
        Some("Photosynthesis makes sugar.")
    );
    assert_eq!(
        response.usage,
        Some(ModelUsage {
            input_tokens: 12,
            output_tokens: 5,
        })
    );

    let bodies = recorded.bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Explain photosynthesis" }] }],
            "systemInstruction": { "parts": [{ "text": "You are an expert AI Tutor." }] }
        })
    );
    assert_eq!(recorded.keys.lock().unwrap().as_slice(), ["test-key"]);
}

#[tokio::test]
async fn generate_forwards_json_schema() {
    let (base_url, recorded) = spawn_server(
        StatusCode::OK,
        json!({
            "candidates": [{ "content": { "parts": [{ "text": "[]" }] } }]
        }),
    )
    .await;

    let schema = json!({ "type": "array", "items": { "type": "string" } });
    model(base_url)
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("List things")])],
            response_format: Some(ResponseFormatOption::json("things", schema.clone())),
            ..Default::default()
        })
        .await
        .expect("generate succeeds");

    let body = recorded.bodies.lock().unwrap()[0].clone();
    assert_eq!(
        body["generationConfig"],
        json!({
            "responseMimeType": "application/json",
            "responseJsonSchema": schema,
        })
    );
}

#[tokio::test]
async fn generate_reports_status_errors() {
    let (base_url, _) = spawn_server(
        StatusCode::BAD_REQUEST,
        json!({ "error": { "code": 400, "message": "API key not valid" } }),
    )
    .await;

    let err = model(base_url)
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("Hi")])],
            ..Default::default()
        })
        .await
        .expect_err("generate fails");

    match err {
        LanguageModelError::StatusCode(status, body) => {
            assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn generate_without_candidates_is_an_invariant_error() {
    let (base_url, _) = spawn_server(StatusCode::OK, json!({ "candidates": [] })).await;

    let err = model(base_url)
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("Hi")])],
            ..Default::default()
        })
        .await
        .expect_err("generate fails");

    assert!(matches!(err, LanguageModelError::Invariant("google", _)));
}

#[tokio::test]
async fn generate_blocked_prompt_is_a_refusal() {
    let (base_url, _) = spawn_server(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
    )
    .await;

    let err = model(base_url)
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("Hi")])],
            ..Default::default()
        })
        .await
        .expect_err("generate fails");

    assert!(matches!(err, LanguageModelError::Refusal(_)));
}

#[tokio::test]
async fn transport_error_does_not_reveal_api_key() {
    let model = GoogleModel::new(
        "gemini-2.5-flash",
        GoogleModelOptions {
            api_key: "SECRET-KEY-123".to_string(),
            base_url: Some("http://127.0.0.1:1/v1beta".to_string()),
            ..Default::default()
        },
    );

    let err = model
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("Hi")])],
            ..Default::default()
        })
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, LanguageModelError::Transport(_)));
    let text = err.to_string();
    assert!(!text.contains("SECRET-KEY-123"), "key leaked: {text}");
    assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
}

#[tokio::test]
#[ignore = "requires GOOGLE_API_KEY and network access"]
async fn live_generate_text() {
    dotenvy::dotenv().ok();
    let api_key = env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set");
    let model = GoogleModel::new(
        "gemini-2.5-flash",
        GoogleModelOptions {
            api_key,
            ..Default::default()
        },
    );

    let response = model
        .generate(LanguageModelInput {
            messages: vec![Message::user([Part::text("Reply with the word: hello")])],
            ..Default::default()
        })
        .await
        .expect("generate succeeds");

    assert!(response
        .text()
        .unwrap_or_default()
        .to_lowercase()
        .contains("hello"));
}
