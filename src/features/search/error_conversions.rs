use serde_json::Error as JsonError;
use url::ParseError;
use validator::ValidationErrors;

use crate::data::models::{RequestError, SearchError, SetupError, VALIDATION_NOTICE};

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Network(err)
    }
}

impl From<JsonError> for RequestError {
    fn from(err: JsonError) -> Self {
        RequestError::Parse(err)
    }
}

impl From<ValidationErrors> for SearchError {
    fn from(err: ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| VALIDATION_NOTICE.to_string());
        SearchError::Validation(message)
    }
}

impl From<ParseError> for SetupError {
    fn from(err: ParseError) -> Self {
        SetupError::InvalidBaseUrl(err)
    }
}

impl From<reqwest::Error> for SetupError {
    fn from(err: reqwest::Error) -> Self {
        SetupError::HttpClient(err)
    }
}
