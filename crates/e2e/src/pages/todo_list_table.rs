//! Results table page object

use std::time::Duration;

use chromiumoxide::Page;
use serde::Deserialize;

use crate::error::HarnessResult;
use crate::model::TodoItem;
use crate::pages::locator::{Locator, Selector};

const ROW_SELECTOR: &str = "table > tbody > tr";

/// The rendered list of active items, with its manual refresh control.
///
/// The application does not re-fetch the list after mutations, so callers
/// must `refresh()` after every mutating UI action before reading rows.
pub struct TodoListTable {
    page: Page,
    refresh_button: Locator,
    body: Locator,
}

/// Shape returned by the row-extraction script.
#[derive(Debug, Deserialize)]
struct RowRecord {
    id: String,
    description: String,
}

impl TodoListTable {
    pub fn new(page: &Page, timeout: Duration) -> Self {
        Self {
            page: page.clone(),
            refresh_button: Locator::new(page, Selector::css_with_text("button", "Refresh"), timeout),
            body: Locator::new(page, Selector::css("table > tbody"), timeout),
        }
    }

    /// Wait for the refresh control and the table body.
    pub async fn is_loaded(&self) -> HarnessResult<()> {
        self.refresh_button.wait_until_visible().await?;
        self.body.wait_until_visible().await?;
        Ok(())
    }

    /// Trigger a manual re-fetch of the displayed list.
    pub async fn refresh(&self) -> HarnessResult<()> {
        self.refresh_button.click().await
    }

    /// Read every rendered row into the domain model.
    ///
    /// Completed items are never rendered in this table, so `is_completed`
    /// is always reported false; completion is inferred from absence.
    pub async fn get_todo_list(&self) -> HarnessResult<Vec<TodoItem>> {
        self.body.wait_until_visible().await?;
        let rows = self
            .page
            .evaluate(Self::rows_js())
            .await?
            .into_value::<Vec<RowRecord>>()?;

        Ok(rows
            .into_iter()
            .map(|row| TodoItem {
                id: row.id,
                description: row.description,
                is_completed: false,
            })
            .collect())
    }

    /// Scan rendered rows top-to-bottom for an exact description match and
    /// trigger that row's completion control.
    ///
    /// Returns false, without raising an error, when no row matches. When
    /// duplicate descriptions are rendered, only the first matching row is
    /// affected.
    pub async fn mark_item_complete(&self, description: &str) -> HarnessResult<bool> {
        self.body.wait_until_visible().await?;
        let clicked = self
            .page
            .evaluate(Self::mark_complete_js(description))
            .await?
            .into_value::<bool>()?;
        Ok(clicked)
    }

    fn rows_js() -> String {
        format!(
            r#"(() => {{
  const rows = Array.from(document.querySelectorAll('{ROW_SELECTOR}'));
  return rows.map(row => {{
    const cells = row.querySelectorAll('td');
    return {{
      id: cells.length > 0 ? cells[0].innerText.trim() : '',
      description: cells.length > 1 ? cells[1].innerText.trim() : '',
    }};
  }});
}})()"#
        )
    }

    fn mark_complete_js(description: &str) -> String {
        let wanted = serde_json::Value::String(description.to_owned()).to_string();
        format!(
            r#"(() => {{
  const rows = Array.from(document.querySelectorAll('{ROW_SELECTOR}'));
  for (const row of rows) {{
    const cells = row.querySelectorAll('td');
    if (cells.length > 1 && cells[1].innerText.trim() === {wanted}) {{
      const button = cells.length > 2 ? cells[2].querySelector('button') : null;
      if (button) {{
        button.click();
        return true;
      }}
      return false;
    }}
  }}
  return false;
}})()"#
        )
    }
}
