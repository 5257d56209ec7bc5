pub mod interface;
pub mod client;

pub use interface::{AsrRequest, AsrResponse, AsrInterface};
pub use client::AsrClient;
