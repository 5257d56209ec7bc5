use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::TranslationConfig;
use crate::error::{Result, ServiceError};
use super::interface::{TranslateRequest, TranslateResponse, TranslatorInterface};
use super::languages::Language;

/// Client for the cloud translation service.
///
/// One POST per Translate press, a fixed timeout, no retry.
pub struct TranslateClient {
    client: Client,
    endpoint: String,
    source_lang: String,
}

impl TranslateClient {
    pub fn new(config: &TranslationConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            source_lang: config.source_lang.clone(),
        })
    }

    /// Reject requests that would never translate to anything useful
    /// before touching the network.
    fn validate(text: &str, target_lang: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        if Language::from_code(target_lang).is_none() {
            return Err(ServiceError::UnknownLanguage(target_lang.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TranslatorInterface for TranslateClient {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        Self::validate(text, target_lang)?;

        let request = TranslateRequest {
            text: text.to_string(),
            source_lang: Some(self.source_lang.clone()),
            target_lang: target_lang.to_string(),
        };

        debug!("Sending translate request: target={}", target_lang);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if ServiceError::is_connectivity(&e) {
                    ServiceError::Connectivity(e.to_string())
                } else {
                    ServiceError::Translation(e.to_string())
                }
            })?;

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Translation(e.to_string()))?;

        if result.success {
            debug!("Translation successful ({} chars)", result.translated_text.len());
            Ok(result.translated_text)
        } else {
            let msg = result.error.unwrap_or_else(|| "Unknown error".to_string());
            error!("Translation failed: {}", msg);
            Err(ServiceError::Translation(msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected_before_any_request() {
        assert!(matches!(
            TranslateClient::validate("", "hi"),
            Err(ServiceError::EmptyInput)
        ));
        assert!(matches!(
            TranslateClient::validate("   \n", "hi"),
            Err(ServiceError::EmptyInput)
        ));
    }

    #[test]
    fn unknown_target_is_rejected() {
        assert!(matches!(
            TranslateClient::validate("hello", "zz"),
            Err(ServiceError::UnknownLanguage(_))
        ));
        assert!(TranslateClient::validate("hello", "kn").is_ok());
    }

    #[test]
    fn response_shape_deserializes() {
        let json = r#"{"translated_text": "नमस्ते", "success": true}"#;
        let resp: TranslateResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.translated_text, "नमस्ते");
        assert!(resp.error.is_none());
    }
}
