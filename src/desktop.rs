//! The boundary between the evader and the OS windowing system.
//!
//! Everything the evader reads from or asks of the desktop goes through
//! the [`Desktop`] trait. The Win32 implementation lives in
//! `winapi_utils`; tests use an in-memory desktop.

use crate::geometry::{Point, Rect};

/// Opaque top-level window identity (HWND as isize on Windows).
///
/// Only valid for the tick it was enumerated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Queries and commands against the OS windowing system.
///
/// Every per-window query may fail for a handle that was destroyed after
/// enumeration; failures surface as `None`/`false` and never panic.
pub trait Desktop {
    /// Current pointer position in screen coordinates.
    fn cursor_position(&self) -> Option<Point>;

    /// All top-level windows, in OS enumeration order.
    fn top_level_windows(&self) -> Vec<WindowHandle>;

    /// Usable work area of every attached monitor.
    fn monitor_work_areas(&self) -> Vec<Rect>;

    fn window_rect(&self, window: WindowHandle) -> Option<Rect>;

    fn is_window_visible(&self, window: WindowHandle) -> bool;

    /// Length of the window title in characters; 0 when untitled.
    fn window_title_length(&self, window: WindowHandle) -> usize;

    /// Id of the process owning the window; 0 if it cannot be determined.
    fn window_process_id(&self, window: WindowHandle) -> u32;

    /// Whether the window's placement state is maximized.
    ///
    /// `None` when the placement could not be read.
    fn is_window_maximized(&self, window: WindowHandle) -> Option<bool>;

    /// Moves the window so that it occupies `target`, requesting a repaint.
    ///
    /// Returns whether the OS accepted the request.
    fn move_window(&self, window: WindowHandle, target: Rect) -> bool;
}

/// Per-tick record of one top-level window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub handle: WindowHandle,
    pub rect: Rect,
    pub has_title: bool,
    pub is_visible: bool,
    pub is_maximized: bool,
    pub process_id: u32,
}

impl WindowSnapshot {
    /// Reads everything the evader needs about `handle` from the desktop.
    ///
    /// Returns `None` if the rectangle or the placement query fails; the
    /// window is then skipped for this tick.
    pub fn capture(desktop: &impl Desktop, handle: WindowHandle) -> Option<Self> {
        let is_visible = desktop.is_window_visible(handle);
        let has_title = desktop.window_title_length(handle) > 0;
        let process_id = desktop.window_process_id(handle);
        let is_maximized = desktop.is_window_maximized(handle)?;
        let rect = desktop.window_rect(handle)?;

        Some(Self {
            handle,
            rect,
            has_title,
            is_visible,
            is_maximized,
            process_id,
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory desktop used by unit tests.

    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone)]
    pub struct FakeWindow {
        pub handle: WindowHandle,
        pub rect: Option<Rect>,
        pub title: &'static str,
        pub visible: bool,
        pub maximized: Option<bool>,
        pub process_id: u32,
    }

    impl FakeWindow {
        /// A visible, titled, restored window owned by pid 4242.
        pub fn new(id: isize, rect: Rect) -> Self {
            Self {
                handle: WindowHandle(id),
                rect: Some(rect),
                title: "Untitled - Notepad",
                visible: true,
                maximized: Some(false),
                process_id: 4242,
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeDesktop {
        pub cursor: Cell<Option<Point>>,
        pub windows: Vec<FakeWindow>,
        pub work_areas: Vec<Rect>,
        pub moves: RefCell<Vec<(WindowHandle, Rect)>>,
    }

    impl FakeDesktop {
        pub fn with_windows(windows: Vec<FakeWindow>) -> Self {
            Self {
                windows,
                ..Default::default()
            }
        }

        pub fn set_cursor(&self, point: Point) {
            self.cursor.set(Some(point));
        }

        fn find(&self, handle: WindowHandle) -> Option<&FakeWindow> {
            self.windows.iter().find(|w| w.handle == handle)
        }
    }

    impl Desktop for FakeDesktop {
        fn cursor_position(&self) -> Option<Point> {
            self.cursor.get()
        }

        fn top_level_windows(&self) -> Vec<WindowHandle> {
            self.windows.iter().map(|w| w.handle).collect()
        }

        fn monitor_work_areas(&self) -> Vec<Rect> {
            self.work_areas.clone()
        }

        fn window_rect(&self, window: WindowHandle) -> Option<Rect> {
            self.find(window)?.rect
        }

        fn is_window_visible(&self, window: WindowHandle) -> bool {
            self.find(window).is_some_and(|w| w.visible)
        }

        fn window_title_length(&self, window: WindowHandle) -> usize {
            self.find(window).map_or(0, |w| w.title.chars().count())
        }

        fn window_process_id(&self, window: WindowHandle) -> u32 {
            self.find(window).map_or(0, |w| w.process_id)
        }

        fn is_window_maximized(&self, window: WindowHandle) -> Option<bool> {
            self.find(window)?.maximized
        }

        fn move_window(&self, window: WindowHandle, target: Rect) -> bool {
            self.moves.borrow_mut().push((window, target));
            self.find(window).is_some()
        }
    }
}
