//! Popup state - the selectable list engine and its scroll viewport

pub mod list;
pub mod viewport;

pub use list::{CommitFn, ListKey, SuggestionList};
pub use viewport::ListViewport;
