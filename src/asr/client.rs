use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::RecognitionConfig;
use crate::error::{Result, ServiceError};
use super::interface::{AsrInterface, AsrRequest, AsrResponse};

/// Client for the cloud speech-recognition service.
pub struct AsrClient {
    client: Client,
    endpoint: String,
}

impl AsrClient {
    pub fn new(config: &RecognitionConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl AsrInterface for AsrClient {
    async fn transcribe(&self, audio_data: Vec<f32>, sample_rate: u32) -> Result<String> {
        debug!(
            "Sending ASR request: {} samples at {} Hz",
            audio_data.len(),
            sample_rate
        );

        let request = AsrRequest {
            audio_data,
            sample_rate,
        };

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
                    ServiceError::Recognition(e.to_string())
                }
            })?;

        let result: AsrResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Recognition(e.to_string()))?;

        // A service that answered but produced nothing intelligible is the
        // "could not understand audio" case, not a transport failure.
        if !result.success {
            let msg = result.error.unwrap_or_default();
            error!("Recognition failed: {}", msg);
            return Err(ServiceError::NoSpeech);
        }
        if result.text.trim().is_empty() {
            return Err(ServiceError::NoSpeech);
        }

        debug!("Transcript: {}", result.text);
        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_deserializes() {
        let json = r#"{"text": "hello world", "success": true}"#;
        let resp: AsrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.text, "hello world");
    }

    #[test]
    fn request_serializes_samples_and_rate() {
        let req = AsrRequest {
            audio_data: vec![0.0, 0.5, -0.5],
            sample_rate: 16000,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["sample_rate"], 16000);
        assert_eq!(value["audio_data"].as_array().unwrap().len(), 3);
    }
}
