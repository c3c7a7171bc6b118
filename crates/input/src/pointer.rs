//! Pointer mapping: clicks/taps on on-screen buttons.
//!
//! The view decides where buttons are drawn and hands back their hitboxes;
//! this module only answers "which button did that press land on".

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{ControlAction, ControlButton, Hitbox};

/// Find the button under (column, row).
pub fn hit_test(hitboxes: &[Hitbox], column: u16, row: u16) -> Option<ControlButton> {
    hitboxes
        .iter()
        .find(|h| h.rect.contains(column, row))
        .map(|h| h.button)
}

/// Map a mouse event to a control action.
///
/// Only left-button presses count; drags, releases, and scrolling are ignored.
pub fn handle_mouse_event(event: MouseEvent, hitboxes: &[Hitbox]) -> Option<ControlAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(hitboxes, event.column, event.row).map(|b| b.action())
        }
        _ => None,
    }
}
