pub mod interface;
pub mod client;
pub mod languages;

pub use interface::{TranslateRequest, TranslateResponse, TranslatorInterface};
pub use client::TranslateClient;
pub use languages::Language;
