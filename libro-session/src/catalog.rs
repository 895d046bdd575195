use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use libro_types::{BookCandidate, PLACEHOLDER_THUMBNAIL};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Read-only boundary to the book catalog. One call returns a page of
/// candidates for round selection (and for the browse screen).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_candidates(&self) -> Result<Vec<BookCandidate>, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct BooksPage {
    results: Vec<BookEntry>,
}

#[derive(Debug, Deserialize)]
struct BookEntry {
    id: u64,
    title: Option<String>,
    #[serde(default)]
    formats: HashMap<String, String>,
}

/// Catalog client for the Gutendex API (`/books/?languages=..`).
pub struct GutendexClient {
    client: Client,
    base_url: String,
    languages: String,
    timeout: Duration,
}

impl GutendexClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.catalog_base_url.clone(),
            languages: config.catalog_languages.clone(),
            timeout: Duration::from_secs(config.catalog_timeout_seconds),
        }
    }
}

#[async_trait]
impl CatalogSource for GutendexClient {
    async fn fetch_candidates(&self) -> Result<Vec<BookCandidate>, CatalogError> {
        let url = format!("{}/books/?languages={}", self.base_url, self.languages);
        debug!(%url, "fetching catalog page");

        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let page: BooksPage = response.json().await?;
        let candidates = page
            .results
            .into_iter()
            .filter_map(|entry| {
                // Entries without a title cannot be played or displayed;
                // a missing cover just falls back to the placeholder.
                let title = entry.title?;
                let thumbnail_url = entry
                    .formats
                    .get("image/jpeg")
                    .cloned()
                    .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());
                Some(BookCandidate {
                    id: entry.id,
                    title,
                    thumbnail_url,
                })
            })
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialization() {
        let body = r#"{
            "results": [
                {"id": 1, "title": "El Libro", "formats": {"image/jpeg": "https://covers/1.jpg"}},
                {"id": 2, "title": "Niebla", "formats": {}},
                {"id": 3, "formats": {"image/jpeg": "https://covers/3.jpg"}}
            ]
        }"#;

        let page: BooksPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].title.as_deref(), Some("El Libro"));
        assert!(page.results[2].title.is_none());
    }

    #[test]
    fn test_missing_thumbnail_degrades_to_placeholder() {
        let entry = BookEntry {
            id: 2,
            title: Some("Niebla".to_string()),
            formats: HashMap::new(),
        };
        let thumbnail = entry
            .formats
            .get("image/jpeg")
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string());
        assert_eq!(thumbnail, PLACEHOLDER_THUMBNAIL);
    }
}
