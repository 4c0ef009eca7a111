// Fake YandexART endpoints on an ephemeral port

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use actix_web::{dev::ServerHandle, web, App, HttpRequest, HttpResponse, HttpServer};
use base64::{engine::general_purpose, Engine};
use serde_json::{json, Value};

use super::{ArtClient, CREATE_PATH};
use crate::config::{ApiAuth, Credentials, PollSettings, ProviderConfig};

pub(crate) const IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0 not really a jpeg \xff\xd9";

#[derive(Clone, Copy)]
pub(crate) enum Behaviour {
    Finish,
    NeverFinish,
    RejectCreate,
    FailPoll,
    FailOperation,
    FinishWithoutImage,
}

pub(crate) struct MockState {
    behaviour: Behaviour,
    pub(crate) polls: AtomicUsize,
    pub(crate) create_body: Mutex<Option<Value>>,
    pub(crate) auth_header: Mutex<Option<String>>,
}

async fn mock_create(
    state: web::Data<MockState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    *state.auth_header.lock().unwrap() = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.create_body.lock().unwrap() = Some(body.into_inner());

    match state.behaviour {
        Behaviour::RejectCreate => HttpResponse::Unauthorized()
            .content_type("application/json")
            .body(r#"{"error":"invalid api key"}"#),
        _ => HttpResponse::Ok().json(json!({ "id": "op-42", "done": false })),
    }
}

async fn mock_operation(state: web::Data<MockState>, path: web::Path<String>) -> HttpResponse {
    state.polls.fetch_add(1, Ordering::SeqCst);
    let id = path.into_inner();

    match state.behaviour {
        Behaviour::Finish => HttpResponse::Ok().json(json!({
            "id": id,
            "done": true,
            "response": { "image": general_purpose::STANDARD.encode(IMAGE_BYTES) }
        })),
        Behaviour::NeverFinish => HttpResponse::Ok().json(json!({ "id": id, "done": false })),
        Behaviour::FailPoll => HttpResponse::ServiceUnavailable().body("upstream overloaded"),
        Behaviour::FailOperation => HttpResponse::Ok().json(json!({
            "id": id,
            "done": true,
            "error": { "code": 3, "message": "prompt rejected by moderation" }
        })),
        Behaviour::FinishWithoutImage => {
            HttpResponse::Ok().json(json!({ "id": id, "done": true, "response": {} }))
        }
        Behaviour::RejectCreate => HttpResponse::InternalServerError().finish(),
    }
}

pub(crate) async fn start_mock(behaviour: Behaviour) -> (String, web::Data<MockState>, ServerHandle) {
    let state = web::Data::new(MockState {
        behaviour,
        polls: AtomicUsize::new(0),
        create_body: Mutex::new(None),
        auth_header: Mutex::new(None),
    });
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route(CREATE_PATH, web::post().to(mock_create))
            .route("/operations/{id}", web::get().to(mock_operation))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind mock provider");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{}", addr), state, handle)
}

pub(crate) fn client_for(api_base: &str, output_dir: &Path, attempts: u32) -> ArtClient {
    let config = ProviderConfig {
        api_base: api_base.to_string(),
        credentials: Some(Credentials {
            folder_id: "b1gfolder".to_string(),
            auth: ApiAuth::ApiKey("test-key".to_string()),
        }),
        poll: PollSettings {
            attempts,
            interval: Duration::from_millis(10),
        },
        request_timeout: Duration::from_secs(5),
    };
    ArtClient::new(config, output_dir).expect("build client")
}
