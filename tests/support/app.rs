use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::{header, Response, StatusCode};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use todolist::adapter::inbound::http::{serve, AppState};
use todolist::adapter::outbound::view::HtmlRenderer;
use todolist::application::TodoApp;
use todolist::infrastructure::bootstrap::build_service;
use todolist::port::inbound::todo::TodoService;
use todolist::testkit::store::MemoryStore;

/// Aborts the server task once the last handle to it is dropped.
struct ServerGuard(JoinHandle<()>);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// A running server on an ephemeral port and a client that does not follow
/// redirects.
#[derive(Clone)]
pub struct TestApp {
    base: String,
    client: reqwest::Client,
    _server: Arc<ServerGuard>,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

async fn spawn<T: TodoService>(state: AppState<T>) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    let handle = tokio::spawn(async move {
        let _ = serve(listener, state, std::future::pending()).await;
    });
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("build client");

    TestApp {
        base,
        client,
        _server: Arc::new(ServerGuard(handle)),
    }
}

/// Server backed by a SQLite file in a temporary directory.
///
/// The directory is removed when the returned guard drops.
pub async fn sqlite_app() -> (TempDir, TestApp) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("todolist.db");
    let service = build_service(path.to_str().expect("utf-8 path")).expect("build service");
    let app = spawn(AppState::new(service, HtmlRenderer::new())).await;
    (dir, app)
}

/// Server backed by the in-memory store, returned alongside it for inspection.
pub async fn memory_app() -> (MemoryStore, TestApp) {
    let store = MemoryStore::new();
    let service = TodoApp::new(store.clone(), store.clone());
    let app = spawn(AppState::new(service, HtmlRenderer::new())).await;
    (store, app)
}

pub async fn get(app: &TestApp, path: &str) -> Response {
    app.client
        .get(app.url(path))
        .send()
        .await
        .expect("send request")
}

pub async fn post_form(app: &TestApp, path: &str, body: &str) -> Response {
    app.client
        .post(app.url(path))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .send()
        .await
        .expect("send request")
}

pub async fn body_text(response: Response) -> String {
    response.text().await.expect("read body")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}

/// Assert a 302 to `expected`.
pub fn assert_redirect(response: &Response, expected: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(response), expected);
}

/// GET `path`, expecting a rendered page, and return its body.
pub async fn page(app: &TestApp, path: &str) -> String {
    let response = get(app, path).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {path}");
    body_text(response).await
}
