//! A throwaway portfolio backend served by actix-web on a random local port.
//!
//! Routes are canned `(method, path) -> (status, body)` answers. Every
//! request that reaches the server is recorded so tests can assert on what
//! the HTTP adapters actually sent.

use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};

use crate::shared::config::ApiConfig;
use crate::shared::http::ApiClient;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    method: &'static str,
    path: String,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl CannedResponse {
    pub fn json(method: &'static str, path: &str, status: u16, body: serde_json::Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn text(method: &'static str, path: &str, status: u16, body: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(method: &'static str, path: &str, body: &[u8]) -> Self {
        Self {
            method,
            path: path.to_string(),
            status: 200,
            content_type: "application/octet-stream",
            body: body.to_vec(),
        }
    }
}

/// What the fake backend saw.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct FakeState {
    routes: Arc<Vec<CannedResponse>>,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn answer(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.seen.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: body.to_vec(),
    });

    let canned = state
        .routes
        .iter()
        .find(|r| r.method == req.method().as_str() && r.path == req.path());

    match canned {
        Some(canned) => {
            let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::OK);
            HttpResponse::build(status)
                .content_type(canned.content_type)
                .body(canned.body.clone())
        }
        None => HttpResponse::NotFound().body("no such route"),
    }
}

pub struct FakeBackend {
    base_url: String,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: actix_web::dev::ServerHandle,
}

impl FakeBackend {
    /// Starts the server on the current actix runtime; use from
    /// `#[actix_web::test]`.
    pub fn start(routes: Vec<CannedResponse>) -> Self {
        let state = FakeState {
            routes: Arc::new(routes),
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let seen = state.seen.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .default_service(web::to(answer))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{addr}/api"),
            seen,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> ApiClient {
        let config = ApiConfig::new(self.base_url.as_str()).expect("valid fake backend url");
        ApiClient::new(&config).expect("client for fake backend")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
