#![allow(dead_code)]

//! In-process stand-in for a Weaviate instance.
//!
//! Routes are registered as canned `(method, path) -> (status, body)`
//! responses; every request is recorded so tests can assert on what the
//! client sent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;
use weaviate_rs::{Client, Config};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query as received, e.g. `/v1/objects?class=Pizza`
    pub uri: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Default)]
struct State {
    routes: HashMap<(String, String), (u16, String)>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone)]
pub struct FakeWeaviate {
    state: Arc<Mutex<State>>,
    pub addr: std::net::SocketAddr,
}

impl FakeWeaviate {
    /// Bind to an ephemeral port and serve on the current actix runtime
    pub fn start() -> Self {
        let state = Arc::new(Mutex::new(State::default()));
        let shared = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(shared.clone()))
                .app_data(web::PayloadConfig::new(1 << 20))
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake server");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self { state, addr }
    }

    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn config(&self) -> Config {
        Config::new("http", self.host())
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).expect("client")
    }

    /// Answer `method uri` with a JSON body; `uri` includes the `/v1` prefix
    pub fn route(&self, method: &str, uri: &str, status: u16, body: Value) -> &Self {
        self.route_raw(method, uri, status, body.to_string())
    }

    pub fn route_raw(&self, method: &str, uri: &str, status: u16, body: impl Into<String>) -> &Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method.to_string(), uri.to_string()), (status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Arc<Mutex<State>>>,
) -> HttpResponse {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let mut state = state.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        uri: uri.clone(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.routes.get(&(method, uri.clone())) {
        Some((status, body)) => {
            let status = StatusCode::from_u16(*status).expect("valid status");
            if body.is_empty() {
                HttpResponse::build(status).finish()
            } else {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body.clone())
            }
        }
        None => HttpResponse::NotFound()
            .content_type("application/json")
            .body(format!(r#"{{"error":[{{"message":"no route for {}"}}]}}"#, uri)),
    }
}
