//! Domain model shared by the API client, seeding, and page objects

use serde::{Deserialize, Serialize};

/// One task known to the Todo application.
///
/// The remote system is the sole source of truth: `id` is assigned by it and
/// immutable once assigned, and items are never cached across tests. The
/// default listing only ever returns active items, so a listed item always
/// has `is_completed == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub description: String,
    pub is_completed: bool,
}

impl TodoItem {
    /// An item counts as active until it has been marked complete.
    pub fn is_active(&self) -> bool {
        !self.is_completed
    }
}

/// Minimal description of a baseline item the suite requires to exist.
///
/// Also the exact request body for item creation: `{"description": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub description: String,
}

impl SeedItem {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Strip one pair of surrounding double quotes from a response body.
///
/// The create endpoint returns the new id as a possibly quoted string.
pub fn trim_quotes(body: &str) -> &str {
    let trimmed = body.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}
