use std::sync::{Arc, Mutex};
use tracing::info;

use crate::config::SpeechConfig;
use crate::error::Result;
use super::interface::SpeechInterface;
use super::synth::NativeSynth;

/// Factory for creating the local synthesizer.
pub struct SynthFactory;

impl SynthFactory {
    /// Create the platform synthesizer behind a mutex: the speaker is one
    /// shared device, so utterances serialize on it.
    pub fn create(config: &SpeechConfig) -> Result<Arc<Mutex<Box<dyn SpeechInterface>>>> {
        info!("Initializing local speech synthesizer");
        let synth = NativeSynth::new(config)?;
        Ok(Arc::new(Mutex::new(Box::new(synth))))
    }
}
