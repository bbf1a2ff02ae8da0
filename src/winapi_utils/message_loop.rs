//! Win32 message pump for the tray thread.
//!
//! The tray icon only receives clicks while the thread that created it
//! pumps messages. The pump runs until a `WM_QUIT` arrives, which any
//! thread can request through [`post_quit_message`].

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW, TranslateMessage, MSG,
    PM_NOREMOVE, WM_QUIT, WM_USER,
};

/// Id of the pump thread; 0 until it is registered.
static PUMP_THREAD_ID: AtomicU32 = AtomicU32::new(0);

/// Records the calling thread as the pump thread.
///
/// Call before installing anything that may call [`post_quit_message`],
/// so an early quit request reaches this thread's queue instead of being
/// dropped.
pub fn register_message_loop_thread() {
    let mut msg = MSG::default();
    unsafe {
        // Forces the thread's message queue into existence so WM_QUIT can be posted
        let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);
    }
    let thread_id = unsafe { GetCurrentThreadId() };
    PUMP_THREAD_ID.store(thread_id, Ordering::SeqCst);
}

/// Pumps messages on the calling thread until `WM_QUIT`.
///
/// Returns at once if `shutdown` is already set, covering a quit request
/// that arrived before the pump started.
///
/// # Example
/// ```no_run
/// use std::sync::atomic::AtomicBool;
/// use window_evader::winapi_utils::{register_message_loop_thread, run_message_loop};
///
/// let shutdown = AtomicBool::new(false);
/// register_message_loop_thread();
/// // Create the tray icon first, then block here
/// run_message_loop(&shutdown);
/// ```
pub fn run_message_loop(shutdown: &AtomicBool) {
    register_message_loop_thread();
    if shutdown.load(Ordering::SeqCst) {
        tracing::debug!("Shutdown requested before message loop started");
        return;
    }
    tracing::debug!(
        thread_id = PUMP_THREAD_ID.load(Ordering::SeqCst),
        "Message loop starting"
    );

    let mut msg = MSG::default();
    unsafe {
        // 0 on WM_QUIT, -1 on error; both end the pump
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    tracing::debug!("Message loop exited");
}

/// Asks the pump thread to exit. Safe to call from any thread.
pub fn post_quit_message(exit_code: i32) {
    let thread_id = PUMP_THREAD_ID.load(Ordering::SeqCst);
    if thread_id == 0 {
        tracing::warn!("Message loop not running, nothing to quit");
        return;
    }

    let posted = unsafe {
        PostThreadMessageW(
            thread_id,
            WM_QUIT,
            WPARAM(exit_code as usize),
            LPARAM(0),
        )
    };
    match posted {
        Ok(()) => tracing::debug!(exit_code, thread_id, "Posted WM_QUIT"),
        Err(e) => tracing::error!(?e, "Failed to post WM_QUIT"),
    }
}
