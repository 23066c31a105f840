//! Generic suggestion popup: one list engine paired with its renderer
//!
//! Every state transition goes through here so the renderer's viewport is
//! re-synced in the same turn as the key event or candidate update that
//! caused it.

use std::fmt;

use crate::config::SuggestConfig;
use crate::keymap::Keystroke;
use crate::model::SuggestionList;
use crate::overlay::PopupWidth;
use crate::view::{ListRenderer, PopupFrame, PopupGeometry};

/// A mounted popup over items of type `T`, rendering rows of content `C`
pub struct SuggestionPopup<T, C> {
    list: SuggestionList<T>,
    renderer: ListRenderer<T, C>,
    width: PopupWidth,
}

impl<T, C> SuggestionPopup<T, C> {
    pub fn new(list: SuggestionList<T>, renderer: ListRenderer<T, C>, width: PopupWidth) -> Self {
        let mut popup = Self {
            list,
            renderer,
            width,
        };
        popup.renderer.sync(&popup.list);
        popup
    }

    pub fn list(&self) -> &SuggestionList<T> {
        &self.list
    }

    pub fn renderer(&self) -> &ListRenderer<T, C> {
        &self.renderer
    }

    pub fn width(&self) -> PopupWidth {
        self.width
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    /// New query results arrived; selection goes back to the first row
    pub fn set_candidates(&mut self, candidates: Vec<T>) {
        self.list.set_candidates(candidates);
        self.renderer.sync(&self.list);
    }

    /// Forward a keydown. Returns true when consumed.
    pub fn on_key_down(&mut self, stroke: &Keystroke) -> bool {
        let consumed = self.list.handle_key(stroke);
        if consumed {
            self.renderer.sync(&self.list);
        }
        consumed
    }

    /// Force the selection (wrapping) and keep it visible
    pub fn select(&mut self, index: isize) {
        self.list.select(index);
        self.renderer.sync(&self.list);
    }

    /// Pointer activation of a row: commits that item regardless of selection
    pub fn click_row(&mut self, index: usize) -> bool {
        self.list.commit_at(index)
    }

    /// Pointer activation at a pixel position inside `geometry`
    pub fn click_at(&mut self, geometry: &PopupGeometry, px: usize, py: usize) -> bool {
        let Some(visual_row) = geometry.visual_row_at(px, py) else {
            return false;
        };
        match self
            .renderer
            .index_at_visual_row(visual_row, self.list.len())
        {
            Some(index) => self.click_row(index),
            None => false,
        }
    }

    /// Wheel scrolling by whole rows
    pub fn scroll(&mut self, lines: i32) {
        self.renderer.scroll(lines, self.list.len());
    }

    pub fn render(&mut self) -> PopupFrame<C> {
        self.renderer.render(&self.list)
    }

    /// Pixel layout for the current state at a host-supplied origin
    ///
    /// Row slots come from the renderer's viewport, never from `config`, so a
    /// click on any laid-out slot maps to a candidate.
    pub fn geometry(&self, origin: (usize, usize), config: &SuggestConfig) -> PopupGeometry {
        let slots = self
            .renderer
            .viewport()
            .visible_range(self.list.len())
            .len();
        PopupGeometry::new(origin, self.width, slots, config)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SuggestionPopup<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionPopup")
            .field("list", &self.list)
            .field("renderer", &self.renderer)
            .field("width", &self.width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn popup(
        items: &[&'static str],
        visible_rows: usize,
    ) -> (SuggestionPopup<&'static str, String>, Rc<RefCell<Vec<&'static str>>>) {
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&committed);
        let list = SuggestionList::new(items.to_vec(), move |item: &&'static str| {
            sink.borrow_mut().push(*item);
            Ok(())
        });
        let renderer = ListRenderer::new(
            |item: &&'static str| item.to_string(),
            |item: &&'static str, _| item.to_string(),
            visible_rows,
        );
        (SuggestionPopup::new(list, renderer, PopupWidth::Narrow), committed)
    }

    #[test]
    fn test_key_navigation_keeps_selection_visible() {
        let (mut p, _) = popup(&["a", "b", "c", "d", "e"], 2);
        for _ in 0..3 {
            p.on_key_down(&Keystroke::key(KeyCode::Down));
        }
        assert_eq!(p.selected_index(), Some(3));
        assert!(p.renderer().viewport().contains(3));
        assert_eq!(p.renderer().viewport().offset, 2);
    }

    #[test]
    fn test_wrap_to_top_scrolls_back() {
        let (mut p, _) = popup(&["a", "b", "c", "d"], 2);
        p.select(3);
        assert_eq!(p.renderer().viewport().offset, 2);
        p.on_key_down(&Keystroke::key(KeyCode::Down));
        assert_eq!(p.selected_index(), Some(0));
        assert_eq!(p.renderer().viewport().offset, 0);
    }

    #[test]
    fn test_candidate_update_resets_viewport() {
        let (mut p, _) = popup(&["a", "b", "c", "d"], 2);
        p.select(3);
        p.set_candidates(vec!["x", "y", "z"]);
        assert_eq!(p.selected_index(), Some(0));
        assert_eq!(p.renderer().viewport().offset, 0);
    }

    #[test]
    fn test_scroll_does_not_move_selection() {
        let (mut p, _) = popup(&["a", "b", "c", "d"], 2);
        p.scroll(1);
        assert_eq!(p.renderer().viewport().offset, 1);
        assert_eq!(p.selected_index(), Some(0));
    }

    #[test]
    fn test_click_at_maps_through_viewport() {
        let config = SuggestConfig {
            max_visible_rows: 2,
            row_height: 10,
            padding: 0,
            ..SuggestConfig::default()
        };
        let (mut p, committed) = popup(&["a", "b", "c", "d"], 2);
        p.select(3);
        let geo = p.geometry((0, 0), &config);
        assert!(p.click_at(&geo, 5, 5));
        assert_eq!(*committed.borrow(), vec!["c"]);
        assert!(!p.click_at(&geo, 5, 500));
    }

    #[test]
    fn test_zero_visible_rows_still_shows_and_clicks_selection() {
        let config = SuggestConfig {
            max_visible_rows: 0,
            row_height: 10,
            padding: 0,
            ..SuggestConfig::default()
        };
        let (mut p, committed) = popup(&["A", "B"], config.max_visible_rows);
        p.on_key_down(&Keystroke::key(KeyCode::Down));

        let frame = p.render();
        let visible: Vec<_> = frame.visible_rows().iter().map(|r| r.index).collect();
        assert_eq!(visible, vec![1]);

        let geo = p.geometry((0, 0), &config);
        assert_eq!(geo.row_slots, 1);
        assert!(p.click_at(&geo, 5, 5));
        assert_eq!(*committed.borrow(), vec!["B"]);
    }

    #[test]
    fn test_geometry_slots_follow_viewport_not_config() {
        let (p, _) = popup(&["a", "b", "c", "d", "e"], 2);
        let config = SuggestConfig {
            max_visible_rows: 8,
            ..SuggestConfig::default()
        };
        assert_eq!(p.geometry((0, 0), &config).row_slots, 2);
    }

    #[test]
    fn test_geometry_for_empty_list() {
        let (p, _) = popup(&[], 4);
        let geo = p.geometry((0, 0), &SuggestConfig::default());
        assert_eq!(geo.row_slots, 1);
    }
}
