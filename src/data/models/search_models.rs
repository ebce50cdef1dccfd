use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

pub const VALIDATION_NOTICE: &str = "Please enter a word or description";
pub const FETCH_ERROR_NOTICE: &str = "An error occurred while fetching results";

// Failures of a single search request. The user only ever sees
// FETCH_ERROR_NOTICE; the variants feed the diagnostic log.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Failed to fetch data: HTTP {0}")]
    Status(StatusCode),
    #[error("Malformed search response: {0}")]
    Parse(serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl SearchError {
    /// Text shown to the user in the alert dialog.
    pub fn notice(&self) -> &'static str {
        match self {
            SearchError::Validation(_) => VALIDATION_NOTICE,
            SearchError::Request(_) => FETCH_ERROR_NOTICE,
        }
    }
}

// Client construction errors
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(url::ParseError),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),
}

/// One word/definition pair returned by `/api/words/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub definition: String,
}

impl SearchResult {
    pub fn display_text(&self) -> String {
        format!("Word: {}, Definition: {}", self.word, self.definition)
    }
}

/// A trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Query {
    #[validate(length(min = 1, message = "Please enter a word or description"))]
    text: String,
}

impl Query {
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let query = Query {
            text: raw.trim().to_string(),
        };
        query.validate()?;
        Ok(query)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}
