//! Local backend for a type-or-speak translation utility.
//!
//! Serves a single page with two text panes, a target-language dropdown and
//! three buttons, each wired to one external service: cloud translation,
//! cloud speech recognition, and the local speech synthesizer.

pub mod asr;
pub mod audio;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;
