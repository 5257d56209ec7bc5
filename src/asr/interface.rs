//! ASR interface - actual implementation in the cloud recognition service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
pub struct AsrRequest {
    pub audio_data: Vec<f32>,
    pub sample_rate: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AsrResponse {
    pub text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait AsrInterface: Send + Sync {
    /// Transcribe mono f32 samples captured from the microphone.
    async fn transcribe(&self, audio_data: Vec<f32>, sample_rate: u32) -> Result<String>;
}
