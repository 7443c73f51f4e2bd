//! Todo List E2E Verification Harness
//!
//! Validates the Todo List application at two boundaries: its JSON/HTTP API
//! and its browser-rendered UI. The application itself is an external
//! collaborator; this crate only assumes its published contract.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Verification Harness (Rust)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  seed::ensure_seeded()      run-once baseline per suite     │
//! │    └── api::TodoListApi     address construction only       │
//! │  pages::TodoListApp         application shell               │
//! │    ├── pages::AddItemForm   input + Add Item + Clear        │
//! │    └── pages::TodoListTable Refresh + structured row reads  │
//! │  cases                      data-driven case executors      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  tests/api.rs               API suite (reqwest)             │
//! │  tests/ui.rs                UI suite (chromiumoxide)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Seeding runs once per suite, before any test, and is idempotent. Each
//! test is an independent unit: API tests issue their own HTTP calls, UI
//! tests own a private browser session, and nothing is shared in-process.

pub mod api;
pub mod browser;
pub mod cases;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod seed;

pub use api::TodoListApi;
pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use model::{SeedItem, TodoItem};

/// Initialize tracing for a test binary. Safe to call from every test; only
/// the first call installs the subscriber.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}
