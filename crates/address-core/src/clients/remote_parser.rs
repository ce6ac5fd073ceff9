//! Client for the remote address parse endpoint

use crate::config::RemoteParserConfig;
use crate::constants::REMOTE_PARSE_PATH;
use crate::error::{AddressError, Result};
use address_types::ParsedAddress;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

/// Anything that can turn free text into a `ParsedAddress` over the network
///
/// The resolver only sees this trait, so tests can swap in a mock.
#[async_trait]
pub trait RemoteAddressParser: Send + Sync {
    async fn parse_remote(&self, text: &str) -> Result<ParsedAddress>;
}

/// Response envelope of the backend
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<ParsedAddress>,
}

pub struct RemoteParserClient {
    endpoint: String,
    http_client: HttpClient,
}

impl RemoteParserClient {
    pub fn new(config: &RemoteParserConfig) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), REMOTE_PARSE_PATH),
            http_client,
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteAddressParser for RemoteParserClient {
    async fn parse_remote(&self, text: &str) -> Result<ParsedAddress> {
        log::debug!("Posting address text to {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&json!({ "fullAddress": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AddressError::ServiceUnavailable(format!(
                "Remote parser returned {}: {}",
                status, body
            )));
        }

        let envelope: Envelope = response.json().await?;
        if envelope.success == Some(false) {
            return Err(AddressError::Remote(
                envelope
                    .message
                    .unwrap_or_else(|| "Remote parser reported failure".to_string()),
            ));
        }

        let mut address = envelope
            .data
            .ok_or_else(|| AddressError::Remote("Response contains no address data".to_string()))?;
        if address.raw.is_empty() {
            address.raw = text.to_string();
        }
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = RemoteParserClient::new(&RemoteParserConfig::new("http://localhost:8081/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8081/api/addresses/parse");
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: Envelope = serde_json::from_str(r#"{"data":{"name":"张三"}}"#).unwrap();
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.data.unwrap().name, "张三");
    }
}
