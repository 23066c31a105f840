//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use notes_suggest::keymap::{KeyCode, Keystroke};
use notes_suggest::model::SuggestionList;
use notes_suggest::overlay::PopupWidth;
use notes_suggest::popup::SuggestionPopup;
use notes_suggest::view::ListRenderer;

/// Items handed to a commit sink, in order
pub type Commits = Rc<RefCell<Vec<&'static str>>>;

/// A list over string items whose sink records every commit
pub fn recording_list(items: &[&'static str]) -> (SuggestionList<&'static str>, Commits) {
    let commits: Commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    let list = SuggestionList::new(items.to_vec(), move |item: &&'static str| {
        sink.borrow_mut().push(*item);
        Ok(())
    });
    (list, commits)
}

/// A string popup showing `visible_rows` rows at a time, with a recording sink
pub fn recording_popup(
    items: &[&'static str],
    visible_rows: usize,
) -> (SuggestionPopup<&'static str, String>, Commits) {
    let (list, commits) = recording_list(items);
    let renderer = ListRenderer::new(
        |item: &&'static str| item.to_string(),
        |item: &&'static str, _selected| item.to_string(),
        visible_rows,
    );
    (
        SuggestionPopup::new(list, renderer, PopupWidth::Narrow),
        commits,
    )
}

pub fn up() -> Keystroke {
    Keystroke::key(KeyCode::Up)
}

pub fn down() -> Keystroke {
    Keystroke::key(KeyCode::Down)
}

pub fn enter() -> Keystroke {
    Keystroke::key(KeyCode::Enter)
}
