//! System tray module.
//!
//! The console is hidden at startup, so the tray icon is the only way to
//! pause the evader or shut it down.

pub mod icon;
pub mod menu;

pub use icon::*;
pub use menu::*;

use crate::winapi_utils::post_quit_message;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tray_icon::menu::MenuEvent;
use tray_icon::{TrayIcon, TrayIconBuilder};

/// Sets up the system tray icon and menu.
///
/// Keep the returned `TrayIcon` alive for the icon to stay visible.
pub fn setup_tray(
    shutdown: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
) -> Result<TrayIcon, Box<dyn std::error::Error>> {
    let tray = TrayIconBuilder::new()
        .with_tooltip("Window Evader")
        .with_icon(create_default_icon()?)
        .with_menu(Box::new(create_tray_menu()))
        .build()?;

    spawn_menu_handler(shutdown, paused);

    tracing::info!("System tray initialized");
    Ok(tray)
}

/// Spawns a thread that reacts to menu clicks until shutdown.
fn spawn_menu_handler(shutdown: Arc<AtomicBool>, paused: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        let receiver = MenuEvent::receiver();

        while !shutdown.load(Ordering::Relaxed) {
            if let Ok(event) = receiver.recv_timeout(Duration::from_millis(100)) {
                handle_menu_event(&event.id.0, &shutdown, &paused);
            }
        }
    });
}

fn handle_menu_event(menu_id: &str, shutdown: &AtomicBool, paused: &AtomicBool) {
    match menu_id {
        MENU_ID_PAUSE => {
            let was_paused = paused.fetch_xor(true, Ordering::SeqCst);
            if was_paused {
                tracing::info!("Evasion resumed");
            } else {
                tracing::info!("Evasion paused");
            }
        }
        MENU_ID_EXIT => {
            tracing::info!("Exit requested from tray menu");
            shutdown.store(true, Ordering::SeqCst);
            post_quit_message(0);
        }
        _ => {
            tracing::debug!(menu_id, "Unknown menu event");
        }
    }
}
