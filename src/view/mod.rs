//! List renderer - projects a [`SuggestionList`] into popup rows
//!
//! The renderer knows nothing about item shape: a key extractor gives each
//! row its identity and a projection turns `(item, is_selected)` into display
//! content. It owns the scroll viewport and guarantees that after every
//! selection change the selected row lies inside it.

pub mod geometry;
pub mod paint;

use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

use crate::model::{ListViewport, SuggestionList};

pub use geometry::PopupGeometry;
pub use paint::paint_popup;

/// Visual state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Default,
    Selected,
}

/// One rendered candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Row<C> {
    /// Position in the candidate list
    pub index: usize,
    /// Caller-extracted identity, unique within the current list
    pub key: String,
    pub state: RowState,
    pub content: C,
}

impl<C> Row<C> {
    pub fn is_selected(&self) -> bool {
        self.state == RowState::Selected
    }
}

/// Output of a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum PopupFrame<C> {
    /// No candidates: a placeholder line only
    Empty { text: String },
    /// One row per candidate, in list order; `visible` is the scrolled window
    List {
        rows: Vec<Row<C>>,
        visible: Range<usize>,
    },
}

impl<C> PopupFrame<C> {
    pub fn is_empty(&self) -> bool {
        matches!(self, PopupFrame::Empty { .. })
    }

    pub fn rows(&self) -> &[Row<C>] {
        match self {
            PopupFrame::Empty { .. } => &[],
            PopupFrame::List { rows, .. } => rows,
        }
    }

    /// Rows inside the scroll window; empty if `visible` is out of range
    pub fn visible_rows(&self) -> &[Row<C>] {
        match self {
            PopupFrame::Empty { .. } => &[],
            PopupFrame::List { rows, visible } => rows.get(visible.clone()).unwrap_or(&[]),
        }
    }

    pub fn selected_row(&self) -> Option<&Row<C>> {
        self.rows().iter().find(|row| row.is_selected())
    }

    /// Number of row slots the popup needs (the placeholder takes one)
    pub fn row_slots(&self) -> usize {
        match self {
            PopupFrame::Empty { .. } => 1,
            PopupFrame::List { visible, .. } => visible.len(),
        }
    }
}

type KeyFn<T> = Box<dyn Fn(&T) -> String>;
type ProjectFn<T, C> = Box<dyn Fn(&T, bool) -> C>;

/// Renders a list engine's state as popup rows
pub struct ListRenderer<T, C> {
    item_key: KeyFn<T>,
    render_item: ProjectFn<T, C>,
    empty_text: String,
    viewport: ListViewport,
    /// (generation, selection) last revealed
    last_seen: Option<(u64, Option<usize>)>,
    keys_checked: Option<u64>,
}

impl<T, C> ListRenderer<T, C> {
    pub fn new<K, R>(item_key: K, render_item: R, visible_rows: usize) -> Self
    where
        K: Fn(&T) -> String + 'static,
        R: Fn(&T, bool) -> C + 'static,
    {
        Self {
            item_key: Box::new(item_key),
            render_item: Box::new(render_item),
            empty_text: "No results".to_string(),
            viewport: ListViewport::new(visible_rows),
            last_seen: None,
            keys_checked: None,
        }
    }

    /// Set the placeholder shown for an empty list (builder pattern)
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    pub fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    /// Bring the viewport in line with the list after a state change
    ///
    /// Reveals the selected row (nearest edge) whenever the selection or the
    /// list identity changed since the last call. Returns whether anything
    /// changed.
    pub fn sync(&mut self, list: &SuggestionList<T>) -> bool {
        let seen = (list.generation(), list.selected_index());
        if self.last_seen == Some(seen) {
            return false;
        }

        match seen.1 {
            Some(index) => self.viewport.reveal(index, list.len()),
            None => self.viewport.offset = 0,
        }
        self.last_seen = Some(seen);
        true
    }

    /// Wheel scrolling; moves the window without touching the selection
    pub fn scroll(&mut self, lines: i32, total: usize) {
        self.viewport.scroll(lines, total);
    }

    /// Map a visual row inside the scroll window to a candidate index
    pub fn index_at_visual_row(&self, visual_row: usize, total: usize) -> Option<usize> {
        if visual_row >= self.viewport.visible_rows {
            return None;
        }
        let index = self.viewport.offset + visual_row;
        (index < total).then_some(index)
    }

    /// Render the list's current state
    pub fn render(&mut self, list: &SuggestionList<T>) -> PopupFrame<C> {
        self.sync(list);

        if list.is_empty() {
            return PopupFrame::Empty {
                text: self.empty_text.clone(),
            };
        }

        let selected = list.selected_index();
        let rows: Vec<Row<C>> = list
            .candidates()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_selected = selected == Some(index);
                Row {
                    index,
                    key: (self.item_key)(item),
                    state: if is_selected {
                        RowState::Selected
                    } else {
                        RowState::Default
                    },
                    content: (self.render_item)(item, is_selected),
                }
            })
            .collect();

        if self.keys_checked != Some(list.generation()) {
            warn_duplicate_keys(&rows);
            self.keys_checked = Some(list.generation());
        }

        PopupFrame::List {
            visible: self.viewport.visible_range(rows.len()),
            rows,
        }
    }
}

fn warn_duplicate_keys<C>(rows: &[Row<C>]) {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.key.as_str()) {
            tracing::warn!(key = %row.key, index = row.index, "Duplicate suggestion key");
        }
    }
}

impl<T, C> fmt::Debug for ListRenderer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRenderer")
            .field("empty_text", &self.empty_text)
            .field("viewport", &self.viewport)
            .field("last_seen", &self.last_seen)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&'static str]) -> SuggestionList<&'static str> {
        SuggestionList::new(items.to_vec(), |_: &&'static str| Ok(()))
    }

    fn renderer(visible_rows: usize) -> ListRenderer<&'static str, String> {
        ListRenderer::new(
            |item: &&'static str| item.to_string(),
            |item: &&'static str, selected| {
                if selected {
                    format!("> {}", item)
                } else {
                    item.to_string()
                }
            },
            visible_rows,
        )
    }

    #[test]
    fn test_empty_frame_uses_placeholder() {
        let mut r = renderer(4).with_empty_text("No matching notes");
        let frame = r.render(&list(&[]));
        assert_eq!(
            frame,
            PopupFrame::Empty {
                text: "No matching notes".to_string()
            }
        );
        assert_eq!(frame.row_slots(), 1);
    }

    #[test]
    fn test_rows_in_order_with_one_selected() {
        let mut l = list(&["a", "b", "c"]);
        l.select(1);
        let frame = renderer(4).render(&l);
        let keys: Vec<_> = frame.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(frame.selected_row().map(|r| r.index), Some(1));
        assert_eq!(frame.rows()[1].content, "> b");
        assert_eq!(frame.rows()[0].state, RowState::Default);
    }

    #[test]
    fn test_sync_reports_changes_once() {
        let mut l = list(&["a", "b"]);
        let mut r = renderer(4);
        assert!(r.sync(&l));
        assert!(!r.sync(&l));
        l.select_next();
        assert!(r.sync(&l));
    }

    #[test]
    fn test_index_at_visual_row() {
        let mut l = list(&["a", "b", "c", "d", "e"]);
        let mut r = renderer(2);
        l.select(4);
        r.sync(&l);
        assert_eq!(r.viewport().offset, 3);
        assert_eq!(r.index_at_visual_row(0, l.len()), Some(3));
        assert_eq!(r.index_at_visual_row(1, l.len()), Some(4));
        assert_eq!(r.index_at_visual_row(2, l.len()), None);
    }

    #[test]
    fn test_out_of_range_window_has_no_visible_rows() {
        let frame = PopupFrame::List {
            rows: vec![Row {
                index: 0,
                key: "a".to_string(),
                state: RowState::Selected,
                content: (),
            }],
            visible: 0..5,
        };
        assert!(frame.visible_rows().is_empty());
        assert_eq!(frame.rows().len(), 1);
    }

    #[test]
    fn test_duplicate_keys_still_render() {
        let frame = renderer(4).render(&list(&["same", "same"]));
        assert_eq!(frame.rows().len(), 2);
    }
}
