//! Data-driven case execution support
//!
//! Static tables of {scenario, payload, expected status} expand into one
//! independent test per row (see `tests/api.rs`). The helpers here issue the
//! remote operation for a row and hand back the literal outcome; assertions
//! stay in the tests.

use reqwest::{Client, StatusCode};
use uuid::Uuid;

use crate::api::TodoListApi;
use crate::error::{HarnessError, HarnessResult};
use crate::model::{trim_quotes, SeedItem, TodoItem};

/// Description payload for a creation case.
///
/// `Unique` is suffixed with a fresh UUID at execution time so the row keeps
/// meaning "a description nobody has used" across repeated runs against the
/// same store.
#[derive(Debug, Clone)]
pub enum CreatePayload {
    Literal(&'static str),
    Unique(&'static str),
}

impl CreatePayload {
    pub fn render(&self) -> String {
        match self {
            CreatePayload::Literal(description) => (*description).to_string(),
            CreatePayload::Unique(prefix) => format!("{prefix} {}", Uuid::new_v4()),
        }
    }
}

/// POST a creation request and report the literal status code.
pub async fn create_item(
    client: &Client,
    api: &TodoListApi,
    description: &str,
) -> HarnessResult<StatusCode> {
    let response = client
        .post(api.collection_url())
        .json(&SeedItem::new(description))
        .send()
        .await?;
    Ok(response.status())
}

/// PUT the full item shape and report the literal status code.
pub async fn update_item(
    client: &Client,
    api: &TodoListApi,
    item: &TodoItem,
) -> HarnessResult<StatusCode> {
    let response = client
        .put(api.item_url(&item.id))
        .json(item)
        .send()
        .await?;
    Ok(response.status())
}

/// Current active items, straight from the default listing.
pub async fn list_active_items(client: &Client, api: &TodoListApi) -> HarnessResult<Vec<TodoItem>> {
    let response = client.get(api.collection_url()).send().await?;
    if !response.status().is_success() {
        return Err(HarnessError::Fixture(format!(
            "listing todo items returned {}",
            response.status()
        )));
    }
    Ok(response.json().await?)
}

/// Exact-match lookup in the active list.
pub async fn find_active_item(
    client: &Client,
    api: &TodoListApi,
    description: &str,
) -> HarnessResult<Option<TodoItem>> {
    let items = list_active_items(client, api).await?;
    Ok(items.into_iter().find(|item| item.description == description))
}

/// Fixture preparation for rename/completion scenarios: reuse an existing
/// active item with this description, or create one and take its id from the
/// response body (which may arrive as a quoted string).
pub async fn find_or_create_item(
    client: &Client,
    api: &TodoListApi,
    description: &str,
) -> HarnessResult<String> {
    if let Some(existing) = find_active_item(client, api, description).await? {
        return Ok(existing.id);
    }

    let response = client
        .post(api.collection_url())
        .json(&SeedItem::new(description))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(HarnessError::Fixture(format!(
            "creating fixture item {description:?} returned {}",
            response.status()
        )));
    }
    let body = response.text().await?;
    Ok(trim_quotes(&body).to_string())
}
