//! Page object model for the rendered UI
//!
//! Three cooperating objects, each wrapping a region of the page with
//! operations phrased as user-observable actions: the item-entry form, the
//! results table, and the application shell composing them. All element
//! access goes through the bounded-wait [`locator::Locator`] abstraction.

pub mod add_item_form;
pub mod locator;
pub mod todo_list_app;
pub mod todo_list_table;

pub use add_item_form::AddItemForm;
pub use locator::{Locator, Selector};
pub use todo_list_app::TodoListApp;
pub use todo_list_table::TodoListTable;
