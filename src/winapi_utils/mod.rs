//! Safe wrappers around Windows API calls.
//!
//! This module provides safe Rust abstractions over the unsafe WinAPI
//! functions the evader needs: window and monitor enumeration, window
//! moves, console hiding and the message loop.

pub mod console;
pub mod message_loop;
pub mod monitor;
pub mod win32_desktop;
pub mod window;

pub use console::*;
pub use message_loop::*;
pub use monitor::*;
pub use win32_desktop::*;
pub use window::*;
