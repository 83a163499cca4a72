use serde::Deserialize;

/// ip-api.com 返回体
#[derive(Debug, Deserialize)]
pub struct IpApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "regionName")]
    pub region_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("lookup failed: {0}")]
    Lookup(String),
    #[error("response carried no location fields")]
    Empty,
}

/// 拼接 "City, Region, Country"，跳过空字段
pub fn format_location(city: &str, region: &str, country: &str) -> Option<String> {
    let parts: Vec<&str> = [city, region, country]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

impl IpApiResponse {
    pub fn into_location(self) -> Result<String, LocationError> {
        if self.status != "success" {
            return Err(LocationError::Lookup(
                self.message.unwrap_or_else(|| self.status.clone()),
            ));
        }

        format_location(
            self.city.as_deref().unwrap_or_default(),
            self.region_name.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default(),
        )
        .ok_or(LocationError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_all_segments() {
        assert_eq!(
            format_location("Paris", "Ile-de-France", "France").as_deref(),
            Some("Paris, Ile-de-France, France")
        );
    }

    #[test]
    fn skips_empty_segments() {
        assert_eq!(format_location("", "", "France").as_deref(), Some("France"));
        assert_eq!(
            format_location("Paris", " ", "France").as_deref(),
            Some("Paris, France")
        );
        assert_eq!(format_location("", "", ""), None);
    }

    #[test]
    fn failed_status_uses_service_message() {
        let response: IpApiResponse = serde_json::from_str(
            r#"{"status":"fail","message":"private range","query":"10.0.0.1"}"#,
        )
        .unwrap();
        match response.into_location() {
            Err(LocationError::Lookup(message)) => assert_eq!(message, "private range"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn success_without_fields_is_empty() {
        let response: IpApiResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(matches!(response.into_location(), Err(LocationError::Empty)));
    }
}
