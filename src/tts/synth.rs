//! Native speech synthesis via the tts crate
//!
//! The tts crate binds the platform engine directly: Speech Dispatcher on
//! Linux, AVFoundation on macOS, SAPI on Windows.

use tracing::{debug, warn};
use tts::Tts;

use crate::config::SpeechConfig;
use crate::error::{Result, ServiceError};
use super::interface::SpeechInterface;

pub struct NativeSynth {
    tts: Tts,
}

impl NativeSynth {
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        let mut tts = Tts::default()
            .map_err(|e| ServiceError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        let features = tts.supported_features();

        if let Some(rate) = config.rate {
            if features.rate {
                let value = scale(rate, tts.min_rate(), tts.max_rate());
                if let Err(e) = tts.set_rate(value) {
                    warn!("Failed to set speech rate: {}", e);
                }
            } else {
                warn!("Rate control not supported on this platform");
            }
        }

        if let Some(volume) = config.volume {
            if features.volume {
                let value = scale(volume, tts.min_volume(), tts.max_volume());
                if let Err(e) = tts.set_volume(value) {
                    warn!("Failed to set speech volume: {}", e);
                }
            } else {
                warn!("Volume control not supported on this platform");
            }
        }

        if let Some(idx) = config.voice {
            match tts.voices() {
                Ok(voices) => match voices.get(idx) {
                    Some(voice) => {
                        if let Err(e) = tts.set_voice(voice) {
                            warn!("Failed to set voice {}: {}", idx, e);
                        }
                    }
                    None => warn!("Voice index {} out of range ({} voices)", idx, voices.len()),
                },
                Err(e) => warn!("Failed to list voices: {}", e),
            }
        }

        Ok(Self { tts })
    }
}

impl SpeechInterface for NativeSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!("Speaking {} chars", text.len());
        self.tts
            .speak(text, true)
            .map_err(|e| ServiceError::Speech(e.to_string()))?;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.tts
            .stop()
            .map_err(|e| ServiceError::Speech(e.to_string()))?;
        Ok(())
    }
}

/// Map a 0-100 setting onto the platform's own range.
fn scale(pct: u8, min: f32, max: f32) -> f32 {
    let pct = pct.min(100) as f32 / 100.0;
    min + (max - min) * pct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints_and_midpoint() {
        assert_eq!(scale(0, 0.0, 2.0), 0.0);
        assert_eq!(scale(100, 0.0, 2.0), 2.0);
        assert_eq!(scale(50, 0.0, 2.0), 1.0);
    }

    #[test]
    fn scale_clamps_over_100() {
        assert_eq!(scale(200, 0.0, 1.0), 1.0);
    }
}
