//! [`Desktop`] backed by the live Win32 window manager.

use super::monitor::enumerate_work_areas;
use super::window::*;
use crate::desktop::{Desktop, WindowHandle};
use crate::geometry::{Point, Rect};

/// The real desktop. Stateless; every call goes straight to user32.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    fn cursor_position(&self) -> Option<Point> {
        get_cursor_position()
    }

    fn top_level_windows(&self) -> Vec<WindowHandle> {
        enumerate_windows()
    }

    fn monitor_work_areas(&self) -> Vec<Rect> {
        enumerate_work_areas()
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Rect> {
        get_window_rect(window)
    }

    fn is_window_visible(&self, window: WindowHandle) -> bool {
        is_window_visible(window)
    }

    fn window_title_length(&self, window: WindowHandle) -> usize {
        get_window_title_length(window)
    }

    fn window_process_id(&self, window: WindowHandle) -> u32 {
        get_window_process_id(window)
    }

    fn is_window_maximized(&self, window: WindowHandle) -> Option<bool> {
        is_window_maximized(window)
    }

    fn move_window(&self, window: WindowHandle, target: Rect) -> bool {
        move_window(window, target)
    }
}
