#![allow(dead_code)]

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use devsnap::config::Config;
use devsnap::state::{State, StateOptions};
use hyper::header::AUTHORIZATION;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::oneshot;

pub const TOKEN: &str = "abc123";
pub const USER_ID: &str = "user-1";

/// What the fake backend holds and what it has seen.
#[derive(Debug, Default)]
pub struct Backend {
    pub projects: Vec<Value>,
    pub blogs: Vec<Value>,
    /// `METHOD /path` to the number of times it was requested.
    pub hits: HashMap<String, usize>,
    pub authorization: Vec<Option<String>>,
    /// Answer every request with 401.
    pub reject_all: bool,
    /// Text the AI endpoints answer with.
    pub generated: Option<String>,
    next_id: usize,
}

impl Backend {
    pub fn hits(&self, route: &str) -> usize {
        self.hits.get(route).copied().unwrap_or_default()
    }

    pub fn total_hits(&self) -> usize {
        self.hits.values().sum()
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn user(&self) -> Value {
        json!({
            "id": USER_ID,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "github_id": "42",
            "github_username": "ada",
            "bio": null,
            "profile_image": null,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00",
            "projects": self.projects,
            "blogs": self.blogs,
        })
    }
}

pub struct MockApi {
    pub addr: SocketAddr,
    pub backend: Arc<Mutex<Backend>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let backend = Arc::new(Mutex::new(Backend::default()));

        let shared = backend.clone();
        let service = make_service_fn(move |_| {
            let backend = shared.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req| handle(req, backend.clone())))
            }
        });

        let server = Server::bind(&([127, 0, 0, 1], 0).into()).serve(service);
        let addr = server.local_addr();

        let (shutdown, signal) = oneshot::channel::<()>();

        tokio::spawn(server.with_graceful_shutdown(async {
            signal.await.ok();
        }));

        Self {
            addr,
            backend,
            shutdown: Some(shutdown),
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut Backend) -> T) -> T {
        f(&mut self.backend.lock().unwrap())
    }

    pub fn config(&self) -> Config {
        let api_url = self.api_url();

        Config::from_vars(|key| match key {
            "DEVSNAP_API_URL" => Some(api_url.clone()),
            "DEVSNAP_GITHUB_CLIENT_ID" => Some("client-id".to_string()),
            "DEVSNAP_GITHUB_CALLBACK_URL" => Some(format!("{api_url}/auth/github/callback")),
            _ => None,
        })
        .unwrap()
    }

    /// A fresh state whose auth store lives in `dir`.
    pub async fn state(&self, dir: &TempDir) -> State {
        State::new(StateOptions {
            config: self.config(),
            auth_path: Some(auth_path(dir)),
        })
        .await
        .unwrap()
    }

    /// Like `state`, already holding the session token.
    pub async fn signed_in_state(&self, dir: &TempDir) -> State {
        let state = self.state(dir).await;

        state.session.set_token(TOKEN).await.unwrap();

        state
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

pub fn auth_path(dir: &TempDir) -> PathBuf {
    dir.path().join("auth.json")
}

fn reply(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn not_found() -> Response<Body> {
    reply(StatusCode::NOT_FOUND, json!({ "detail": "Not found" }))
}

fn upsert(items: &mut [Value], id: &str, update: &Value) -> Option<Value> {
    let item = items.iter_mut().find(|item| item["id"] == id)?;

    if let (Some(item), Some(update)) = (item.as_object_mut(), update.as_object()) {
        for (key, value) in update {
            item.insert(key.clone(), value.clone());
        }
    }

    Some(item.clone())
}

async fn handle(req: Request<Body>, backend: Arc<Mutex<Backend>>) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let body = hyper::body::to_bytes(req.into_body()).await.unwrap_or_default();
    let body = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);

    // lists are slow enough for concurrent reads to overlap
    if method == Method::GET && path.ends_with('/') {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let mut backend = backend.lock().unwrap();

    *backend.hits.entry(format!("{method} {path}")).or_default() += 1;
    backend.authorization.push(authorization.clone());

    let signed_in = authorization == Some(format!("Bearer {TOKEN}"));

    if backend.reject_all || (!signed_in && path != "/api/auth/logout") {
        return Ok(reply(
            StatusCode::UNAUTHORIZED,
            json!({ "detail": "Could not validate credentials" }),
        ));
    }

    let segments = path
        .trim_start_matches("/api/")
        .trim_end_matches('/')
        .split('/')
        .collect::<Vec<_>>();

    let response = match (&method, segments.as_slice()) {
        (&Method::GET, ["auth", "me"]) => reply(StatusCode::OK, backend.user()),
        (&Method::POST, ["auth", "logout"]) => {
            reply(StatusCode::OK, json!({ "message": "Successfully logged out" }))
        }

        (&Method::GET, ["projects"]) => reply(StatusCode::OK, json!(backend.projects)),
        (&Method::GET, ["blogs"]) => reply(StatusCode::OK, json!(backend.blogs)),

        (&Method::GET, [kind @ ("projects" | "blogs"), id]) => {
            let items = if *kind == "projects" { &backend.projects } else { &backend.blogs };

            match items.iter().find(|item| item["id"] == *id) {
                Some(item) => reply(StatusCode::OK, item.clone()),
                None => not_found(),
            }
        }

        (&Method::POST, [kind @ ("projects" | "blogs")]) => {
            let mut item = body;
            let id = backend.next_id(kind);

            item["id"] = json!(id);
            item["created_at"] = json!("2024-06-01T00:00:00");
            item["updated_at"] = json!("2024-06-01T00:00:00");

            if *kind == "projects" {
                backend.projects.push(item.clone());
            } else {
                backend.blogs.push(item.clone());
            }

            reply(StatusCode::CREATED, item)
        }

        (&Method::PUT, [kind @ ("projects" | "blogs"), id]) => {
            let items = if *kind == "projects" {
                &mut backend.projects
            } else {
                &mut backend.blogs
            };

            match upsert(items, id, &body) {
                Some(item) => reply(StatusCode::OK, item),
                None => not_found(),
            }
        }

        (&Method::DELETE, [kind @ ("projects" | "blogs"), id]) => {
            let items = if *kind == "projects" {
                &mut backend.projects
            } else {
                &mut backend.blogs
            };

            let before = items.len();
            items.retain(|item| item["id"] != *id);

            if items.len() == before {
                not_found()
            } else {
                Response::builder()
                    .status(StatusCode::NO_CONTENT)
                    .body(Body::empty())
                    .unwrap()
            }
        }

        (&Method::GET, ["users", id]) if *id == USER_ID => reply(StatusCode::OK, backend.user()),
        (&Method::PUT, ["users", id]) if *id == USER_ID => {
            let mut user = backend.user();

            if let (Some(user), Some(update)) = (user.as_object_mut(), body.as_object()) {
                for (key, value) in update {
                    user.insert(key.clone(), value.clone());
                }
            }

            reply(StatusCode::OK, user)
        }

        (&Method::POST, ["ai", "generate-project-summary"]) => {
            let content = backend.generated.clone().unwrap_or_else(|| {
                format!("{} in one sentence.", body["title"].as_str().unwrap_or_default())
            });

            reply(StatusCode::OK, json!({ "content": content, "success": true }))
        }
        (&Method::POST, ["ai", "generate-bio"]) => match &backend.generated {
            Some(content) => reply(StatusCode::OK, json!({ "content": content, "success": true })),
            None => reply(
                StatusCode::OK,
                json!({
                    "content": "",
                    "success": false,
                    "message": "AI service unavailable",
                }),
            ),
        },

        _ => not_found(),
    };

    Ok(response)
}

pub fn project(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": USER_ID,
        "title": title,
        "description": "A project",
        "tech_stack": ["Rust"],
        "github_link": null,
        "demo_link": null,
        "summary": null,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00",
    })
}

pub fn blog(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": USER_ID,
        "title": title,
        "content": "Some words about things",
        "summary": null,
        "created_at": "2024-01-01T00:00:00",
        "updated_at": "2024-01-01T00:00:00",
    })
}
