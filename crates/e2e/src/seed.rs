//! Idempotent baseline seeding
//!
//! Runs once per suite, before any test. Queries the current remote state and
//! creates whichever baseline items are missing, without duplicating existing
//! ones. Re-running against a populated store leaves it unchanged.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::api::TodoListApi;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::model::{SeedItem, TodoItem};

/// The baseline every suite requires. "Duplicate Task" deliberately collides
/// with the duplicate-creation cases exercised later.
pub const BASELINE_DESCRIPTIONS: [&str; 4] = ["Task 1", "Task 2", "Task 3", "Duplicate Task"];

pub fn baseline_items() -> Vec<SeedItem> {
    BASELINE_DESCRIPTIONS
        .iter()
        .copied()
        .map(SeedItem::new)
        .collect()
}

/// Seeds still missing from the remote state.
///
/// Matching is exact string equality against currently active items. A
/// completed item with the same description does not block re-seeding.
pub fn missing_seeds<'a>(existing: &[TodoItem], seeds: &'a [SeedItem]) -> Vec<&'a SeedItem> {
    seeds
        .iter()
        .filter(|seed| {
            !existing
                .iter()
                .any(|item| item.is_active() && item.description == seed.description)
        })
        .collect()
}

/// Create any missing baseline items.
///
/// The initial listing must succeed; an unreachable remote system here is
/// fatal to the suite. Individual creation failures are tolerated and logged,
/// since a concurrent suite or a prior run may already have converged the
/// state. No local state is retained.
pub async fn seed_baseline(
    client: &Client,
    api: &TodoListApi,
    seeds: &[SeedItem],
) -> HarnessResult<()> {
    let response = client.get(api.collection_url()).send().await?;
    if !response.status().is_success() {
        return Err(HarnessError::Seed(format!(
            "listing todo items returned {}",
            response.status()
        )));
    }
    let existing: Vec<TodoItem> = response.json().await?;

    for seed in missing_seeds(&existing, seeds) {
        debug!(description = %seed.description, "baseline item missing, creating");
        match client.post(api.collection_url()).json(seed).send().await {
            Ok(created) if created.status().is_success() => {
                info!(description = %seed.description, "seeded baseline item");
            }
            Ok(created) => {
                warn!(
                    description = %seed.description,
                    status = %created.status(),
                    "baseline creation rejected, continuing"
                );
            }
            Err(err) => {
                warn!(
                    description = %seed.description,
                    error = %err,
                    "baseline creation failed, continuing"
                );
            }
        }
    }

    Ok(())
}

// Holds the first fatal seeding error, if any, so every caller sees the same
// outcome. A suite cannot proceed without its baseline.
static SEED_BARRIER: OnceCell<Option<String>> = OnceCell::const_new();

/// Run-once seed barrier for a suite.
///
/// Every test awaits this before acting. The first caller performs the seed;
/// concurrent callers suspend until it completes; later callers return
/// immediately.
pub async fn ensure_seeded(config: &HarnessConfig) -> HarnessResult<()> {
    let failure = SEED_BARRIER
        .get_or_init(|| async {
            match seed_once(config).await {
                Ok(()) => None,
                Err(err) => Some(err.to_string()),
            }
        })
        .await;

    match failure {
        None => Ok(()),
        Some(message) => Err(HarnessError::Seed(message.clone())),
    }
}

async fn seed_once(config: &HarnessConfig) -> HarnessResult<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let api = TodoListApi::new(&config.api_base_url);
    seed_baseline(&client, &api, &baseline_items()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, description: &str, is_completed: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            description: description.to_string(),
            is_completed,
        }
    }

    #[test]
    fn empty_store_needs_every_seed() {
        let seeds = baseline_items();
        let missing = missing_seeds(&[], &seeds);
        assert_eq!(missing.len(), seeds.len());
    }

    #[test]
    fn fully_seeded_store_needs_nothing() {
        let seeds = baseline_items();
        let existing: Vec<TodoItem> = BASELINE_DESCRIPTIONS
            .into_iter()
            .enumerate()
            .map(|(i, d)| item(&i.to_string(), d, false))
            .collect();

        assert!(missing_seeds(&existing, &seeds).is_empty());
    }

    #[test]
    fn partial_overlap_needs_only_the_gap() {
        let seeds = baseline_items();
        let existing = vec![item("1", "Task 1", false), item("2", "Task 3", false)];

        let missing = missing_seeds(&existing, &seeds);
        let descriptions: Vec<&str> = missing.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Task 2", "Duplicate Task"]);
    }

    #[test]
    fn completed_items_do_not_satisfy_a_seed() {
        let seeds = vec![SeedItem::new("Task 1")];
        let existing = vec![item("1", "Task 1", true)];

        assert_eq!(missing_seeds(&existing, &seeds).len(), 1);
    }

    #[test]
    fn matching_is_exact() {
        let seeds = vec![SeedItem::new("Task 1")];
        let existing = vec![
            item("1", "task 1", false),
            item("2", "Task 1 ", false),
            item("3", "Task 10", false),
        ];

        assert_eq!(missing_seeds(&existing, &seeds).len(), 1);
    }

    #[test]
    fn baseline_contains_the_deliberate_duplicate() {
        assert!(BASELINE_DESCRIPTIONS.contains(&"Duplicate Task"));
        assert_eq!(baseline_items().len(), 4);
    }
}
