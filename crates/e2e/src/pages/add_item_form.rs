//! Item-entry form page object

use std::time::Duration;

use chromiumoxide::Page;

use crate::error::HarnessResult;
use crate::pages::locator::{Locator, Selector};

/// The form used to create new items: an input box, an "Add Item" control,
/// and a "Clear" control.
pub struct AddItemForm {
    input: Locator,
    add_button: Locator,
    clear_button: Locator,
}

impl AddItemForm {
    pub fn new(page: &Page, timeout: Duration) -> Self {
        Self {
            input: Locator::new(page, Selector::css("#formAddTodoItem"), timeout),
            add_button: Locator::new(page, Selector::css_with_text("button", "Add Item"), timeout),
            clear_button: Locator::new(page, Selector::css_with_text("button", "Clear"), timeout),
        }
    }

    /// Wait until the input, submit control, and clear control are all
    /// visible. Failing to appear within the bound fails the test.
    pub async fn is_loaded(&self) -> HarnessResult<()> {
        self.input.wait_until_visible().await?;
        self.add_button.wait_until_visible().await?;
        self.clear_button.wait_until_visible().await?;
        Ok(())
    }

    /// Type the description, then trigger submission.
    pub async fn add_item(&self, description: &str) -> HarnessResult<()> {
        self.input.type_text(description).await?;
        self.add_button.click().await
    }

    /// Trigger the clear action.
    pub async fn clear(&self) -> HarnessResult<()> {
        self.clear_button.click().await
    }
}
