#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    extract::connect_info::MockConnectInfo,
    http::{Request, Response, header},
};
use login_tracker::{
    AppState,
    activity::ActivityLog,
    geolocation::{LocationError, LocationLookup},
    router::create_router,
    session::SessionKeys,
    views::Views,
};
use tempfile::TempDir;
use tower::ServiceExt;

pub const PEER_ADDR: ([u8; 4], u16) = ([192, 0, 2, 10], 4321);

/// 固定返回值的位置查询，记录被查询的 IP
pub struct StubLookup {
    result: Result<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StubLookup {
    pub fn found(location: &str) -> Self {
        Self {
            result: Ok(location.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            result: Err(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationLookup for StubLookup {
    async fn lookup(&self, ip: &str) -> Result<String, LocationError> {
        self.calls.lock().unwrap().push(ip.to_string());
        self.result.clone().map_err(LocationError::Lookup)
    }
}

pub struct TestApp {
    pub router: Router,
    pub log_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new(lookup: Arc<dyn LocationLookup>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("user_activity.log");
        let activity = ActivityLog::open(&log_path).await.unwrap();

        let state = AppState {
            sessions: SessionKeys::new("test-secret-key-for-tests", Duration::from_secs(3600)),
            activity: Arc::new(activity),
            geolocation: lookup,
            views: Arc::new(Views::new().unwrap()),
        };

        let router =
            create_router(state).layer(MockConnectInfo(SocketAddr::from(PEER_ADDR)));

        Self {
            router,
            log_path,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub fn log_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log_path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// 登录并返回会话 cookie（"session=<token>"）
    pub async fn login_as(&self, login_id: &str, forwarded_for: Option<&str>) -> String {
        let response = self.send(login_request(login_id, forwarded_for)).await;
        session_cookie(&response).expect("login should set a session cookie")
    }
}

/// `login_id` 需已做表单编码
pub fn login_request(login_id: &str, forwarded_for: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(value) = forwarded_for {
        builder = builder.header("x-forwarded-for", value);
    }
    builder
        .body(Body::from(format!("login_id={}", login_id)))
        .unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .filter_map(|cookie| cookie.split(';').next().map(str::to_string))
        .find(|pair| pair.starts_with("session=") && pair.len() > "session=".len())
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
