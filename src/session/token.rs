use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use super::model::{SessionClaims, SessionData};

/// 会话令牌的签发与校验（HS256）
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration: Duration,
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("expiration", &self.expiration)
            .finish_non_exhaustive()
    }
}

impl SessionKeys {
    pub fn new(secret: &str, expiration: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiration,
        }
    }

    pub fn issue(&self, data: &SessionData) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sid: Uuid::new_v4().to_string(),
            login_id: data.login_id.clone(),
            ip: data.ip.clone(),
            location: data.location.clone(),
            iat: now,
            exp: now + self.expiration.as_secs() as i64,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}
