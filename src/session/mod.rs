mod model;
mod token;

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::AppState;

pub use model::{SessionClaims, SessionData};
pub use token::SessionKeys;

pub const SESSION_COOKIE: &str = "session";

/// 请求级别的会话读写能力
///
/// 会话以签名令牌的形式保存在 HttpOnly cookie 中。签名无效、过期或
/// 字段缺失的令牌一律视为没有会话。
pub struct Session {
    jar: CookieJar,
    keys: SessionKeys,
    claims: Option<SessionClaims>,
}

impl Session {
    pub fn data(&self) -> Option<SessionData> {
        self.claims.as_ref().map(SessionClaims::data)
    }

    pub fn id(&self) -> Option<&str> {
        self.claims.as_ref().map(|claims| claims.sid.as_str())
    }

    /// 签发新会话，返回需要随响应写回的 cookie
    pub fn establish(self, data: &SessionData) -> Result<CookieJar, jsonwebtoken::errors::Error> {
        let token = self.keys.issue(data)?;
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        Ok(self.jar.add(cookie))
    }

    pub fn clear(self) -> CookieJar {
        self.jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let claims = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| match state.sessions.verify(cookie.value()) {
                Ok(claims) => Some(claims),
                Err(e) => {
                    tracing::debug!("Discarding invalid session token: {}", e);
                    None
                }
            });

        Ok(Self {
            jar,
            keys: state.sessions.clone(),
            claims,
        })
    }
}
