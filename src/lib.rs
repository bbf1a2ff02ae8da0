//! Window Evader - windows that run away from the mouse cursor.
//!
//! The platform-independent core lives in [`geometry`], [`desktop`] and
//! [`evader`]. The Win32 backend and the system tray are only built on
//! Windows.

pub mod desktop;
pub mod evader;
pub mod geometry;

#[cfg(windows)]
pub mod tray;
#[cfg(windows)]
pub mod winapi_utils;
