//! Update function - applies a [`PopupMsg`] to a mounted popup

use crate::messages::{EventResult, PopupMsg};
use crate::popup::SuggestionPopup;
use crate::view::PopupGeometry;

/// Apply one message. `geometry` is the layout last painted, used for
/// pointer hit-testing; without it positional clicks are ignored.
pub fn update<T, C>(
    popup: &mut SuggestionPopup<T, C>,
    geometry: Option<&PopupGeometry>,
    msg: PopupMsg<T>,
) -> EventResult {
    match msg {
        PopupMsg::SetCandidates(candidates) => {
            popup.set_candidates(candidates);
            EventResult::redraw()
        }

        PopupMsg::Key(stroke) => {
            if popup.on_key_down(&stroke) {
                EventResult::consumed_redraw()
            } else {
                EventResult::ignored()
            }
        }

        PopupMsg::ClickRow(index) => {
            if popup.click_row(index) {
                EventResult::consumed_redraw()
            } else {
                EventResult::ignored()
            }
        }

        PopupMsg::ClickAt { x, y } => match geometry {
            Some(geometry) if geometry.bounds.contains(x, y) => {
                // Clicks on padding or the border still belong to the popup
                popup.click_at(geometry, x, y);
                EventResult::consumed_redraw()
            }
            _ => EventResult::ignored(),
        },

        PopupMsg::Scroll { lines } => {
            let before = popup.renderer().viewport().offset;
            popup.scroll(lines);
            if popup.renderer().viewport().offset != before {
                EventResult::consumed_redraw()
            } else {
                EventResult {
                    consumed: true,
                    needs_redraw: false,
                }
            }
        }

        PopupMsg::Select(index) => {
            popup.select(index);
            EventResult::redraw()
        }
    }
}
