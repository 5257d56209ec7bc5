//! Translate interface - actual implementation in the cloud translation service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` into the target language, auto-detecting the source
    /// unless the configuration pins one.
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}
