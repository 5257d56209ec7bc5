use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::error::ServiceError;
use crate::state::AppState;
use crate::translate::languages::LANGUAGES;

#[derive(Debug, Deserialize)]
pub struct TranslateAction {
    pub text: String,
    pub target_lang: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakAction {
    pub text: String,
}

/// What an action writes back into a pane. Failures are pane content, not
/// transport errors, so every answer is HTTP 200.
#[derive(Debug, Serialize)]
pub struct PaneResponse {
    pub text: String,
    pub success: bool,
}

impl PaneResponse {
    fn ok(text: String) -> Json<Self> {
        Json(Self {
            text,
            success: true,
        })
    }

    fn err(e: ServiceError) -> Json<Self> {
        Json(Self {
            text: e.pane_text(),
            success: false,
        })
    }
}

/// Translate the input pane into the selected target language.
pub async fn translate(
    State(state): State<AppState>,
    Json(action): Json<TranslateAction>,
) -> Json<PaneResponse> {
    match state
        .translator
        .translate(&action.text, &action.target_lang)
        .await
    {
        Ok(translated) => PaneResponse::ok(translated),
        Err(e) => PaneResponse::err(e),
    }
}

/// Capture one window of microphone audio and transcribe it into the
/// input pane.
pub async fn listen(State(state): State<AppState>) -> Json<PaneResponse> {
    let recognition = &state.config.service_config.recognition;
    let duration = Duration::from_secs(recognition.listen_secs);
    let sample_rate = recognition.sample_rate;

    info!("Listening for {:?}", duration);

    let capture = state.capture.clone();
    let captured =
        tokio::task::spawn_blocking(move || capture.capture(duration, sample_rate)).await;

    let samples = match captured {
        Ok(Ok(samples)) => samples,
        Ok(Err(e)) => return PaneResponse::err(e),
        Err(e) => return PaneResponse::err(ServiceError::Capture(e.to_string())),
    };

    if samples.is_empty() {
        return PaneResponse::err(ServiceError::NoSpeech);
    }

    match state.recognizer.transcribe(samples, sample_rate).await {
        Ok(transcript) => PaneResponse::ok(transcript),
        Err(e) => PaneResponse::err(e),
    }
}

/// Read the output pane aloud. A blank pane is a silent no-op, as in the
/// original interface.
pub async fn speak(
    State(state): State<AppState>,
    Json(action): Json<SpeakAction>,
) -> Json<PaneResponse> {
    if action.text.trim().is_empty() {
        return PaneResponse::ok(String::new());
    }

    let synth = state.synth.clone();
    let spoken = tokio::task::spawn_blocking(move || {
        let mut synth = synth
            .lock()
            .map_err(|_| ServiceError::Speech("Synthesizer unavailable.".to_string()))?;
        synth.speak(&action.text)
    })
    .await;

    match spoken {
        Ok(Ok(())) => PaneResponse::ok(String::new()),
        Ok(Err(e)) => PaneResponse::err(e),
        Err(e) => PaneResponse::err(ServiceError::Speech(e.to_string())),
    }
}

/// The fixed language set for the dropdown.
pub async fn languages() -> Json<serde_json::Value> {
    let list: Vec<_> = LANGUAGES
        .iter()
        .map(|l| {
            serde_json::json!({
                "code": l.code,
                "label": l.label(),
            })
        })
        .collect();
    Json(serde_json::json!(list))
}
