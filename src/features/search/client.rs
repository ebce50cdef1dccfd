use reqwest::Client;
use url::Url;

use crate::data::models::{Query, RequestError, SearchResult, SetupError};

pub const SEARCH_PATH: &str = "api/words/search";

/// HTTP side of a search: one GET per query, no retries.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: Client,
    endpoint: Url,
}

impl DictionaryClient {
    pub fn new(base_url: &str) -> Result<Self, SetupError> {
        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(SetupError::UnsupportedScheme(base.scheme().to_string()));
        }

        // Keep any path prefix on the base URL when joining
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(SEARCH_PATH)?;

        let http = Client::builder().build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The exact URL requested for `query`.
    pub fn search_url(&self, query: &Query) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("definition", query.as_str());
        url
    }

    pub async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, RequestError> {
        let url = self.search_url(query);
        log::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status));
        }

        let body = response.bytes().await?;
        let results: Vec<SearchResult> = serde_json::from_slice(&body)?;
        log::debug!("{} results for {:?}", results.len(), query.as_str());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_to_base() {
        let client = DictionaryClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:8080/api/words/search"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        for base in ["http://example.com/dict", "http://example.com/dict/"] {
            let client = DictionaryClient::new(base).unwrap();
            assert_eq!(
                client.endpoint().as_str(),
                "http://example.com/dict/api/words/search"
            );
        }
    }

    #[test]
    fn query_goes_in_definition_param() {
        let client = DictionaryClient::new("http://localhost:8080").unwrap();
        let query = Query::parse("  happy ").unwrap();
        let url = client.search_url(&query);
        assert_eq!(url.query(), Some("definition=happy"));

        let query = Query::parse("a large body of water").unwrap();
        let url = client.search_url(&query);
        let pairs: Vec<_> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("definition".to_string(), "a large body of water".to_string())]
        );
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            DictionaryClient::new("not a url"),
            Err(SetupError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            DictionaryClient::new("ftp://example.com"),
            Err(SetupError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }
}
