//! Headless browser session management
//!
//! Each UI test owns its own session, so tests stay isolated from one
//! another. The chromiumoxide handler stream must be driven for the browser
//! to make progress; a spawned task does that for the session's lifetime.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a browser configured from the harness settings.
    pub async fn launch(config: &HarnessConfig) -> HarnessResult<Self> {
        let mut builder =
            BrowserConfig::builder().window_size(config.viewport_width, config.viewport_height);
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(HarnessError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("browser session started");
        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a fresh tab.
    pub async fn new_page(&self) -> HarnessResult<Page> {
        Ok(self.browser.new_page("about:blank").await?)
    }

    /// Shut the browser down and stop driving its event stream.
    pub async fn close(mut self) -> HarnessResult<()> {
        self.browser.close().await?;
        self.handler_task.abort();
        debug!("browser session closed");
        Ok(())
    }
}
