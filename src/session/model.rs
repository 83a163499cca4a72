use serde::{Deserialize, Serialize};

/// 登录后写入会话的客户端信息，三个字段总是同时存在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub login_id: String,
    pub ip: String,
    pub location: String,
}

/// 会话令牌的声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sid: String, // 会话ID
    pub login_id: String,
    pub ip: String,
    pub location: String,
    pub iat: i64, // 签发时间
    pub exp: i64, // 过期时间
}

impl SessionClaims {
    pub fn data(&self) -> SessionData {
        SessionData {
            login_id: self.login_id.clone(),
            ip: self.ip.clone(),
            location: self.location.clone(),
        }
    }
}
