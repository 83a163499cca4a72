use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub session_secret: String,
    pub session_expiration_secs: u64,
    pub activity_log_path: PathBuf,
    pub geolocation_url: String,
    pub geolocation_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        // 会话有效期，单位小时，允许 "24h" 写法
        let session_expiration = env::var("SESSION_EXPIRATION")
            .unwrap_or_else(|_| "24h".into())
            .trim_end_matches('h')
            .parse::<u64>()
            .unwrap_or(24);

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
            session_secret: env::var("SESSION_SECRET")?,
            session_expiration_secs: session_expiration * 3600,
            activity_log_path: env::var("ACTIVITY_LOG_PATH")
                .unwrap_or_else(|_| "user_activity.log".into())
                .into(),
            geolocation_url: env::var("GEOLOCATION_URL")
                .unwrap_or_else(|_| "http://ip-api.com/json".into()),
            geolocation_timeout_secs: env::var("GEOLOCATION_TIMEOUT")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(5),
        })
    }

    pub fn session_expiration(&self) -> Duration {
        Duration::from_secs(self.session_expiration_secs)
    }

    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_secs(self.geolocation_timeout_secs)
    }
}
