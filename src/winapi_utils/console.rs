//! Console window control.

use windows::Win32::System::Console::GetConsoleWindow;
use windows::Win32::UI::WindowsAndMessaging::{ShowWindow, SW_HIDE};

/// Hides the console window the process was launched from.
///
/// Returns `false` when there is no console to hide.
pub fn hide_console_window() -> bool {
    let console = unsafe { GetConsoleWindow() };
    if console.0.is_null() {
        return false;
    }

    let _ = unsafe { ShowWindow(console, SW_HIDE) };
    tracing::debug!("Console window hidden");
    true
}
