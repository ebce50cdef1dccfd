pub const BASE_URL_VAR: &str = "REVERSE_DICTIONARY_URL";
pub const LOG_VAR: &str = "REVERSE_DICTIONARY_LOG";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Base URL of the search API. Call `dotenv::dotenv()` first to pick up `.env`.
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into())
}
