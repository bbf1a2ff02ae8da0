//! Window-related WinAPI wrappers.
//!
//! Provides safe abstractions for top-level window enumeration, geometry,
//! visibility and placement queries, and window moves.

use crate::desktop::WindowHandle;
use crate::geometry::{Point, Rect};
use std::ffi::c_void;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, POINT, RECT, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetCursorPos, GetWindowPlacement, GetWindowRect, GetWindowTextLengthW,
    GetWindowThreadProcessId, IsWindowVisible, MoveWindow, SW_SHOWMAXIMIZED, WINDOWPLACEMENT,
};

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

impl From<RECT> for Rect {
    fn from(rect: RECT) -> Self {
        Rect::new(rect.left, rect.top, rect.right, rect.bottom)
    }
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    handles.push(WindowHandle(hwnd.0 as isize));
    TRUE
}

/// Lists every top-level window, in the order `EnumWindows` reports them.
///
/// Returns whatever was collected before a failure; an empty list is
/// a valid result.
pub fn enumerate_windows() -> Vec<WindowHandle> {
    let mut handles: Vec<WindowHandle> = Vec::new();
    unsafe {
        if let Err(e) = EnumWindows(
            Some(collect_window),
            LPARAM(&mut handles as *mut Vec<WindowHandle> as isize),
        ) {
            tracing::trace!(?e, "EnumWindows stopped early");
        }
    }
    handles
}

/// Gets the window rectangle in screen coordinates.
pub fn get_window_rect(window: WindowHandle) -> Option<Rect> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(hwnd(window), &mut rect) }.ok()?;
    Some(rect.into())
}

pub fn is_window_visible(window: WindowHandle) -> bool {
    unsafe { IsWindowVisible(hwnd(window)) }.as_bool()
}

/// Title length in UTF-16 units. 0 for untitled windows or on failure.
pub fn get_window_title_length(window: WindowHandle) -> usize {
    let len = unsafe { GetWindowTextLengthW(hwnd(window)) };
    usize::try_from(len).unwrap_or(0)
}

/// Gets the id of the process that created the window. 0 on failure.
pub fn get_window_process_id(window: WindowHandle) -> u32 {
    let mut process_id: u32 = 0;
    unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut process_id)) };
    process_id
}

/// Whether the window's show state is `SW_SHOWMAXIMIZED`.
///
/// Returns `None` if the placement cannot be read.
pub fn is_window_maximized(window: WindowHandle) -> Option<bool> {
    let mut placement = WINDOWPLACEMENT {
        length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    };
    unsafe { GetWindowPlacement(hwnd(window), &mut placement) }.ok()?;
    Some(placement.showCmd == SW_SHOWMAXIMIZED.0 as u32)
}

/// Moves and sizes the window to `target`, asking it to repaint.
pub fn move_window(window: WindowHandle, target: Rect) -> bool {
    unsafe {
        MoveWindow(
            hwnd(window),
            target.left,
            target.top,
            target.width(),
            target.height(),
            true,
        )
    }
    .is_ok()
}

/// Current cursor position in screen coordinates.
///
/// Fails on the secure desktop (UAC prompt, lock screen).
pub fn get_cursor_position() -> Option<Point> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }.ok()?;
    Some(Point::new(point.x, point.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID: WindowHandle = WindowHandle(0);

    #[test]
    fn test_enumerate_windows_does_not_panic() {
        // Headless sessions may report no windows at all
        let _ = enumerate_windows();
    }

    #[test]
    fn test_queries_on_invalid_handle() {
        assert!(get_window_rect(INVALID).is_none());
        assert!(!is_window_visible(INVALID));
        assert_eq!(get_window_title_length(INVALID), 0);
        assert_eq!(get_window_process_id(INVALID), 0);
        assert!(is_window_maximized(INVALID).is_none());
    }

    #[test]
    fn test_move_invalid_handle_fails() {
        assert!(!move_window(INVALID, Rect::new(0, 0, 100, 100)));
    }

    #[test]
    fn test_rect_from_win32() {
        let rect = RECT {
            left: -10,
            top: 20,
            right: 30,
            bottom: 40,
        };
        assert_eq!(Rect::from(rect), Rect::new(-10, 20, 30, 40));
    }
}
