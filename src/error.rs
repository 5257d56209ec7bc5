//! Error types for the service layer

use thiserror::Error;

/// Errors raised by the translate / listen / speak actions.
///
/// Every failure is terminal for the one action that raised it and is
/// rendered as replacement text in the relevant pane. Nothing here is
/// retried or propagated further.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown target language: {0}")]
    UnknownLanguage(String),

    #[error("could not understand audio")]
    NoSpeech,

    #[error("connection failed: {0}")]
    Connectivity(String),

    #[error("translation failed: {0}")]
    Translation(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("audio capture failed: {0}")]
    Capture(String),

    #[error("speech synthesis failed: {0}")]
    Speech(String),
}

impl ServiceError {
    /// The string shown in place of the action's normal output.
    pub fn pane_text(&self) -> String {
        match self {
            ServiceError::EmptyInput => "Please enter text to translate.".to_string(),
            ServiceError::NoSpeech => "Could not understand audio.".to_string(),
            ServiceError::Connectivity(_) => "Check your internet connection.".to_string(),
            ServiceError::UnknownLanguage(_) | ServiceError::Translation(_) => {
                format!("Error: {}", self)
            }
            ServiceError::Recognition(msg)
            | ServiceError::Capture(msg)
            | ServiceError::Speech(msg) => msg.clone(),
        }
    }

    /// True when a reqwest failure never reached the service at all.
    pub fn is_connectivity(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_prompts_for_text() {
        assert_eq!(
            ServiceError::EmptyInput.pane_text(),
            "Please enter text to translate."
        );
    }

    #[test]
    fn no_speech_and_connectivity_use_fixed_strings() {
        assert_eq!(
            ServiceError::NoSpeech.pane_text(),
            "Could not understand audio."
        );
        assert_eq!(
            ServiceError::Connectivity("dns failure".into()).pane_text(),
            "Check your internet connection."
        );
    }

    #[test]
    fn translation_errors_carry_the_message() {
        let text = ServiceError::Translation("service returned 503".into()).pane_text();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("service returned 503"));
    }
}
