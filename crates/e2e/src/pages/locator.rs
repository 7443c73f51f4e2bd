//! Locatable, awaitable UI regions
//!
//! Every page-object operation resolves through a [`Locator`]: a selector
//! bound to a live page, with a bounded wait/poll before acting. The backing
//! application renders asynchronously, so a single immediate check is never
//! enough; exceeding the bound is a hard failure for that test only.

use std::time::{Duration, Instant};

use chromiumoxide::Page;
use tokio::time::sleep;

use crate::error::{HarnessError, HarnessResult};

/// Default bound for visibility waits.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Polling interval while waiting.
pub const POLL_INTERVAL_MS: u64 = 50;

/// How a region of the rendered page is identified.
///
/// `CssWithText` matches the first element, in document order, whose trimmed
/// text equals `text` among those matching `css`. This covers controls the
/// application labels by caption only ("Add Item", "Clear", "Refresh").
#[derive(Debug, Clone)]
pub enum Selector {
    Css(String),
    CssWithText { css: String, text: String },
}

impl Selector {
    pub fn css(css: impl Into<String>) -> Self {
        Selector::Css(css.into())
    }

    pub fn css_with_text(css: impl Into<String>, text: impl Into<String>) -> Self {
        Selector::CssWithText {
            css: css.into(),
            text: text.into(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Selector::Css(css) => css.clone(),
            Selector::CssWithText { css, text } => format!("{css} (text: {text:?})"),
        }
    }

    /// JS prelude binding `el` to the first match, or `null`.
    fn resolve_js(&self) -> String {
        match self {
            Selector::Css(css) => {
                format!("const el = document.querySelector({});", js_string(css))
            }
            Selector::CssWithText { css, text } => format!(
                "const el = Array.from(document.querySelectorAll({})).find(e => e.innerText.trim() === {}) || null;",
                js_string(css),
                js_string(text)
            ),
        }
    }

    pub(crate) fn visible_js(&self) -> String {
        format!(
            r#"(() => {{
  {resolve}
  if (!el) return false;
  const rect = el.getBoundingClientRect();
  const style = window.getComputedStyle(el);
  return rect.width > 0 && rect.height > 0 && style.display !== 'none' && style.visibility !== 'hidden';
}})()"#,
            resolve = self.resolve_js()
        )
    }

    pub(crate) fn click_js(&self) -> String {
        format!(
            r#"(() => {{
  {resolve}
  if (!el) return false;
  el.click();
  return true;
}})()"#,
            resolve = self.resolve_js()
        )
    }
}

/// Embed a string in generated JS as a quoted, escaped literal.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// A selector bound to a live page, with the suite's wait bound.
#[derive(Debug, Clone)]
pub struct Locator {
    page: Page,
    selector: Selector,
    timeout: Duration,
}

impl Locator {
    pub fn new(page: &Page, selector: Selector, timeout: Duration) -> Self {
        Self {
            page: page.clone(),
            selector,
            timeout,
        }
    }

    /// One visibility probe, no waiting.
    pub async fn is_visible(&self) -> HarnessResult<bool> {
        let visible = self
            .page
            .evaluate(self.selector.visible_js())
            .await?
            .into_value::<bool>()?;
        Ok(visible)
    }

    /// Poll until the region is visible, or fail with a timeout.
    pub async fn wait_until_visible(&self) -> HarnessResult<()> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if self.is_visible().await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::Timeout {
                    what: self.selector.describe(),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }

    /// Wait for the region, then click it.
    pub async fn click(&self) -> HarnessResult<()> {
        self.wait_until_visible().await?;
        let clicked = self
            .page
            .evaluate(self.selector.click_js())
            .await?
            .into_value::<bool>()?;
        if clicked {
            Ok(())
        } else {
            Err(HarnessError::ElementNotFound(self.selector.describe()))
        }
    }

    /// Wait for the region, focus it, and type via native key events.
    ///
    /// Only plain CSS selectors can be typed into; the text-matched controls
    /// are buttons.
    pub async fn type_text(&self, text: &str) -> HarnessResult<()> {
        self.wait_until_visible().await?;
        let Selector::Css(css) = &self.selector else {
            return Err(HarnessError::Locator(format!(
                "cannot type into text-matched region {}",
                self.selector.describe()
            )));
        };
        let element = self.page.find_element(css.as_str()).await?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(())
    }
}
