//! Headline lookup against the newsdata.io API.

use crate::domain::{FetchError, FetchResult, NewsArticle};
use serde::Deserialize;
use std::time::Duration;

const API_URL: &str = "https://newsdata.io/api/1/news";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// How many headlines a brief or dashboard page shows.
pub const HEADLINE_COUNT: usize = 5;

pub struct NewsClient {
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl NewsClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { api_key, client }
    }

    /// Fetches the first five headlines matching a query, newest first as
    /// ranked by the provider.
    pub fn top_headlines(&self, query: &str) -> FetchResult<Vec<NewsArticle>> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingKey)?;
        let response = self
            .client
            .get(API_URL)
            .query(&[("apikey", api_key), ("q", query), ("language", "en")])
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(format!("status {}", response.status())));
        }

        let payload: NewsPayload = response
            .json()
            .map_err(|e| FetchError::UnexpectedPayload(e.to_string()))?;
        Ok(decode_articles(payload))
    }
}

#[derive(Debug, Deserialize)]
struct NewsPayload {
    #[serde(default)]
    results: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
}

fn decode_articles(payload: NewsPayload) -> Vec<NewsArticle> {
    payload
        .results
        .into_iter()
        .take(HEADLINE_COUNT)
        .map(|raw| NewsArticle {
            title: raw.title.unwrap_or_else(|| "No title".to_string()),
            description: raw.description.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_articles_takes_first_five() {
        let json = r#"{"results": [
            {"title": "One", "description": "a"},
            {"title": "Two", "description": "b"},
            {"title": "Three", "description": "c"},
            {"title": "Four", "description": "d"},
            {"title": "Five", "description": "e"},
            {"title": "Six", "description": "f"}
        ]}"#;
        let payload: NewsPayload = serde_json::from_str(json).unwrap();
        let articles = decode_articles(payload);
        assert_eq!(articles.len(), 5);
        assert_eq!(articles[0].title, "One");
        assert_eq!(articles[4].title, "Five");
    }

    #[test]
    fn test_decode_articles_fills_missing_fields() {
        let json = r#"{"results": [{"description": "only a description"}]}"#;
        let payload: NewsPayload = serde_json::from_str(json).unwrap();
        let articles = decode_articles(payload);
        assert_eq!(articles[0].title, "No title");
        assert_eq!(articles[0].description, "only a description");
    }

    #[test]
    fn test_decode_articles_empty_payload() {
        let payload: NewsPayload = serde_json::from_str("{}").unwrap();
        assert!(decode_articles(payload).is_empty());
    }

    #[test]
    fn test_missing_key_fails_fast() {
        let client = NewsClient::new(None);
        assert_eq!(client.top_headlines("india"), Err(FetchError::MissingKey));
    }
}
