//! Address construction for the Todo application API
//!
//! Deterministic address construction only: no network I/O, no retries, no
//! caching. Tests and the seeder issue their own requests against the
//! addresses built here, which keeps test logic decoupled from endpoint
//! shapes.

/// Builds endpoint addresses from a base address.
#[derive(Debug, Clone)]
pub struct TodoListApi {
    base_url: String,
}

impl TodoListApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Address of the items collection resource.
    pub fn collection_url(&self) -> String {
        format!("{}/api/todoItems", self.base_url)
    }

    /// Address of a single item resource.
    ///
    /// `id` is not validated; a bad id simply yields an address the remote
    /// system will reject.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}
