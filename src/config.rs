use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub service_config: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the static frontend page.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Background image for the page. Optional; the page falls back to a
    /// plain color when unset or unreadable.
    #[serde(default)]
    pub background_image: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    12390
}

fn default_static_dir() -> String {
    "web".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Cloud translation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_translation_endpoint() -> String {
    "http://localhost:8000/translate".to_string()
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Cloud speech-recognition service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    #[serde(default = "default_recognition_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How many seconds of microphone audio one Listen press captures.
    #[serde(default = "default_listen_secs")]
    pub listen_secs: u64,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_recognition_endpoint() -> String {
    "http://localhost:8000/asr".to_string()
}

fn default_listen_secs() -> u64 {
    5
}

fn default_sample_rate() -> u32 {
    16000
}

/// Local synthesizer tuning. All optional; the platform default is kept
/// for anything unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech rate, 0-100 where 50 is normal.
    #[serde(default)]
    pub rate: Option<u8>,
    /// Volume, 0-100.
    #[serde(default)]
    pub volume: Option<u8>,
    /// Voice index into the platform's voice list.
    #[serde(default)]
    pub voice: Option<usize>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            background_image: None,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            source_lang: default_source_lang(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_recognition_endpoint(),
            timeout_secs: default_timeout_secs(),
            listen_secs: default_listen_secs(),
            sample_rate: default_sample_rate(),
        }
    }
}
