//! # Client Engine
//!
//! Everything a front-end needs to drive the catalog without its own
//! business logic: a transport port ([`CatalogApi`]) with a reqwest
//! implementation, the snapshot/filter state ([`view::Workspace`]), and
//! terminal card rendering ([`render`]).
//!
//! The engine fetches the full collection once, filters locally, and
//! patches its snapshot after confirmed creates and deletes instead of
//! re-fetching. Staleness against concurrent writers is accepted.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{FolioError, Result};
use crate::model::{Item, ItemDraft};

pub mod render;
pub mod view;

/// Port for the REST API the engine talks to. Abstracted so tests can
/// drive the engine without a network.
#[async_trait]
pub trait CatalogApi {
    async fn fetch_items(&self) -> Result<Vec<Item>>;
    async fn create_item(&self, draft: &ItemDraft) -> Result<Item>;
    async fn delete_item(&self, id: &Uuid) -> Result<()>;
}

/// [`CatalogApi`] over HTTP.
pub struct RemoteCatalog {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }
}

#[async_trait]
impl CatalogApi for RemoteCatalog {
    async fn fetch_items(&self) -> Result<Vec<Item>> {
        let response = self.http.get(self.items_url()).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    async fn create_item(&self, draft: &ItemDraft) -> Result<Item> {
        let response = self.http.post(self.items_url()).json(draft).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_item(&self, id: &Uuid) -> Result<()> {
        let url = format!("{}/{}", self.items_url(), id);
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into the server's `{message}` if it sent one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(FolioError::Api(error_message(status.as_u16(), &body)))
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
        .unwrap_or_else(|| format!("server returned status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_message() {
        assert_eq!(
            error_message(400, r#"{"message":"title is required"}"#),
            "title is required"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "server returned status 502");
        assert_eq!(error_message(500, r#"{"error":"oops"}"#), "server returned status 500");
    }
}
