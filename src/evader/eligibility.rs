//! Which windows the evader is allowed to move.

use crate::desktop::WindowSnapshot;

/// A window is eligible when it is visible, titled, restored (not
/// maximized) and owned by some process other than `own_process_id`.
pub fn is_eligible(window: &WindowSnapshot, own_process_id: u32) -> bool {
    window.is_visible
        && window.has_title
        && window.process_id != own_process_id
        && !window.is_maximized
}
