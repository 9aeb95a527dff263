// src/testing.rs
// =============================================================================
// Test helpers shared by the module tests.
//
// Everything network-facing is tested against axum servers running inside
// the test process on 127.0.0.1 with an OS-assigned port.
// =============================================================================

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Serves `router` in the background and returns the bound address
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

// An address nothing is listening on: bind, read the port, drop the listener
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// What a fake upstream saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub api_version: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

impl Recorder {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[derive(Clone)]
struct FakeGitHub {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    recorder: Recorder,
}

// A stand-in for api.github.com that answers every /users/:username
// request with the same status and body, recording what it received
pub fn fake_github(status: u16, body: &'static str, recorder: Recorder) -> Router {
    fake_github_slow(status, body, Duration::ZERO, recorder)
}

// Same as fake_github, but waits `delay` before answering
pub fn fake_github_slow(
    status: u16,
    body: &'static str,
    delay: Duration,
    recorder: Recorder,
) -> Router {
    let state = FakeGitHub {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        delay,
        recorder,
    };
    Router::new()
        .route("/users/:username", get(fake_user))
        .with_state(state)
}

async fn fake_user(
    State(fake): State<FakeGitHub>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let header_text = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    fake.recorder.0.lock().unwrap().push(RecordedRequest {
        path: format!("/users/{}", username),
        authorization: header_text("authorization"),
        accept: header_text("accept"),
        api_version: header_text("x-github-api-version"),
        user_agent: header_text("user-agent"),
    });

    tokio::time::sleep(fake.delay).await;

    (
        fake.status,
        [(header::CONTENT_TYPE, "application/json")],
        fake.body,
    )
}

// A bare TCP server that answers the first request on each connection with
// `head` (status line and headers) and `partial_body`, then either closes the
// socket or keeps it open for `stall` without sending the rest.
//
// Used to produce bodies that end early, which axum will not do.
pub async fn spawn_raw_http(
    head: &'static str,
    partial_body: &'static str,
    stall: Option<Duration>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                // Read until the end of the request headers
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(partial_body.as_bytes()).await;
                let _ = socket.flush().await;

                if let Some(stall) = stall {
                    tokio::time::sleep(stall).await;
                }
                // Dropping the socket closes the connection mid-body
            });
        }
    });
    addr
}

/// Canned profile the fake proxy returns for a login.
pub fn profile_json(login: &str) -> String {
    format!(
        r#"{{"login":"{login}","id":1,"avatar_url":"","html_url":"https://github.com/{login}","name":null,"bio":"Test account","location":"Earth","blog":null,"twitter_username":null,"public_repos":3,"public_gists":1,"followers":10,"following":2}}"#
    )
}

#[derive(Clone)]
struct FakeProxy {
    hits: Arc<AtomicUsize>,
}

// A stand-in for our own /api/github/user endpoint
//
// The username picks the behaviour:
//   slowpoke -> 200 after a 300ms delay
//   ghost    -> 404 with an error envelope
//   nobody   -> 404 with an empty body
//   limited  -> 403 with a GitHub style message
//   teapot   -> 418 with an empty body
//   garbled  -> 200 with a body that is not JSON
//   anything else -> 200 with profile_json(username)
pub fn fake_proxy(hits: Arc<AtomicUsize>) -> Router {
    Router::new()
        .route("/api/github/user", get(fake_lookup))
        .with_state(FakeProxy { hits })
}

async fn fake_lookup(State(fake): State<FakeProxy>, RawQuery(query): RawQuery) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    let username = url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .find(|(key, _)| key == "username")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    let (status, body) = match username.as_str() {
        "slowpoke" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            (StatusCode::OK, profile_json("slowpoke"))
        }
        "ghost" => (StatusCode::NOT_FOUND, r#"{"error":"User not found"}"#.to_string()),
        "nobody" => (StatusCode::NOT_FOUND, String::new()),
        "limited" => (
            StatusCode::FORBIDDEN,
            r#"{"message":"API rate limit exceeded"}"#.to_string(),
        ),
        "teapot" => (StatusCode::IM_A_TEAPOT, String::new()),
        "garbled" => (StatusCode::OK, "<html></html>".to_string()),
        other => (StatusCode::OK, profile_json(other)),
    };

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
