//! Reverse dictionary search client: validates a query, asks the
//! `/api/words/search` endpoint for matching words and renders them.

pub mod config;
pub mod data;
pub mod features;
pub mod ui;
pub mod utils;

pub use data::models::{Query, ResultsView, SearchOutcome, SearchResult};
pub use features::search::{DictionaryClient, SearchController};
