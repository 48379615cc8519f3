//! Shared utilities for the integration tests: a mock downstream web app.

#![allow(dead_code)]

use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, web};
use clock_proxy::{AppConfig, AppState};
use serde_json::Value;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Bodies up to this size are accepted by the mock web app
const MOCK_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// What the mock web app answers to every POST
#[derive(Clone)]
pub enum MockReply {
    Json(u16, Value),
    Raw(u16, String),
}

struct MockState {
    calls: AtomicUsize,
    bodies: Mutex<Vec<Value>>,
    content_types: Mutex<Vec<String>>,
    reply: MockReply,
}

/// A mock Apps Script web app on an ephemeral local port that records every
/// request it receives.
pub struct MockGas {
    pub url: String,
    state: Arc<MockState>,
}

impl MockGas {
    pub async fn start(reply: MockReply) -> Self {
        let state = Arc::new(MockState {
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
            content_types: Mutex::new(Vec::new()),
            reply,
        });

        let data = web::Data::from(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .app_data(web::PayloadConfig::new(MOCK_BODY_LIMIT))
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock web app");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}/macros/s/test-deployment/exec"),
            state,
        }
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// JSON bodies received so far
    pub fn bodies(&self) -> Vec<Value> {
        self.state.bodies.lock().unwrap().clone()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.state.content_types.lock().unwrap().clone()
    }
}

async fn respond(req: actix_web::HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);

    if let Some(content_type) = req.headers().get("content-type").and_then(|v| v.to_str().ok()) {
        state.content_types.lock().unwrap().push(content_type.to_string());
    }
    if let Ok(value) = serde_json::from_slice::<Value>(&body) {
        state.bodies.lock().unwrap().push(value);
    }

    match &state.reply {
        MockReply::Json(status, value) => {
            HttpResponse::build(StatusCode::from_u16(*status).unwrap()).json(value)
        }
        MockReply::Raw(status, text) => HttpResponse::build(StatusCode::from_u16(*status).unwrap())
            .content_type("text/html; charset=utf-8")
            .body(text.clone()),
    }
}

/// A URL on a local port that nothing listens on
pub fn unreachable_url() -> String {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    format!("http://{addr}/exec")
}

/// A local URL whose listener accepts connections and never answers.
/// The listener lives as long as the returned handle.
pub fn silent_url() -> (std::net::TcpListener, String) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{addr}/exec"))
}

/// Application state pointed at `gas_url`
pub fn state_for(gas_url: &str) -> AppState {
    let config = AppConfig {
        gas_webapp_url: gas_url.to_string(),
        liff_id: "1650000000-testLiff".to_string(),
        shop_name: "Test Shop".to_string(),
        ..AppConfig::default()
    };
    AppState::new(config).expect("build app state")
}
