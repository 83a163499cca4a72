use std::time::Duration;

use async_trait::async_trait;

use super::model::{IpApiResponse, LocationError};

/// 根据 IP 查询地理位置
#[async_trait]
pub trait LocationLookup: Send + Sync {
    async fn lookup(&self, ip: &str) -> Result<String, LocationError>;
}

/// 基于 ip-api.com JSON 接口的查询客户端，单次请求，无重试无缓存
#[derive(Debug, Clone)]
pub struct IpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl IpApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, ip: &str) -> String {
        format!("{}/{}", self.base_url, ip)
    }
}

#[async_trait]
impl LocationLookup for IpApiClient {
    async fn lookup(&self, ip: &str) -> Result<String, LocationError> {
        let response = self.http.get(self.url_for(ip)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status(status));
        }

        let body: IpApiResponse = response.json().await?;
        body.into_location()
    }
}
