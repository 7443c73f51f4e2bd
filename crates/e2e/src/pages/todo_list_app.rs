//! Application shell page object

use chromiumoxide::Page;

use crate::config::HarnessConfig;
use crate::error::HarnessResult;
use crate::pages::add_item_form::AddItemForm;
use crate::pages::locator::{Locator, Selector};
use crate::pages::todo_list_table::TodoListTable;

/// The whole rendered application: top-level chrome plus the item-entry form
/// and the results table.
pub struct TodoListApp {
    page: Page,
    url: String,
    banner: Locator,
    welcome: Locator,
    alert: Locator,
    pub add_item_form: AddItemForm,
    pub todo_list_table: TodoListTable,
}

impl TodoListApp {
    pub fn new(page: &Page, config: &HarnessConfig) -> Self {
        let timeout = config.wait_timeout();
        Self {
            page: page.clone(),
            url: config.ui_base_url.clone(),
            banner: Locator::new(
                page,
                Selector::css(r#"img[src="clearPointLogo.png"]"#),
                timeout,
            ),
            welcome: Locator::new(page, Selector::css(".alert-heading.h4"), timeout),
            alert: Locator::new(page, Selector::css(".alert-danger"), timeout),
            add_item_form: AddItemForm::new(page, timeout),
            todo_list_table: TodoListTable::new(page, timeout),
        }
    }

    /// Navigate to the application.
    pub async fn goto(&self) -> HarnessResult<()> {
        self.page.goto(self.url.as_str()).await?;
        Ok(())
    }

    /// Wait for the chrome, then delegate to the form and table.
    pub async fn is_loaded(&self) -> HarnessResult<()> {
        self.banner.wait_until_visible().await?;
        self.welcome.wait_until_visible().await?;
        self.add_item_form.is_loaded().await?;
        self.todo_list_table.is_loaded().await?;
        Ok(())
    }

    /// Wait for the error banner, shown on user-facing rejections such as a
    /// duplicate submission.
    pub async fn alert_displayed(&self) -> HarnessResult<()> {
        self.alert.wait_until_visible().await
    }
}
