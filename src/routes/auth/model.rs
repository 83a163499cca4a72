use serde::Deserialize;

pub const INVALID_LOGIN_ID: &str = "Please enter a valid Login ID.";

// 退出时会话字段缺失的占位值
pub const UNKNOWN_USER: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub login_id: String,
}

impl LoginForm {
    /// 去除首尾空白后的登录ID，空值返回 None
    pub fn login_id(&self) -> Option<&str> {
        Some(self.login_id.trim()).filter(|id| !id.is_empty())
    }
}
