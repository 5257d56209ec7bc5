use std::sync::{Arc, Mutex};

use crate::asr::{AsrClient, AsrInterface};
use crate::audio::AudioCapture;
use crate::config::Config;
use crate::translate::{TranslateClient, TranslatorInterface};
use crate::tts::{SpeechInterface, SynthFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslatorInterface>,
    pub recognizer: Arc<dyn AsrInterface>,
    pub capture: Arc<AudioCapture>,
    pub synth: Arc<Mutex<Box<dyn SpeechInterface>>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = Arc::new(TranslateClient::new(&config.service_config.translation)?);
        let recognizer = Arc::new(AsrClient::new(&config.service_config.recognition)?);
        let capture = Arc::new(AudioCapture::new());
        let synth = SynthFactory::create(&config.service_config.speech)?;

        Ok(Self {
            config,
            translator,
            recognizer,
            capture,
            synth,
        })
    }
}
