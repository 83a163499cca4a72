use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};

pub const UNKNOWN_IP: &str = "Unknown IP";

/// 客户端 IP
///
/// 优先取 `X-Forwarded-For` 的第一个地址，否则使用连接的对端地址。
/// 请求头可被伪造，只应部署在受控的反向代理之后。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // 同时支持真实连接信息和测试中的 MockConnectInfo
        let remote_ip = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(ClientIp(derive_ip(&parts.headers, remote_ip)))
    }
}

fn derive_ip(headers: &HeaderMap, remote_ip: Option<String>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or(remote_ip)
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}
