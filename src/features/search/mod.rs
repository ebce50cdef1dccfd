pub mod client;
pub mod controller;
mod error_conversions;

pub use client::DictionaryClient;
pub use controller::SearchController;
