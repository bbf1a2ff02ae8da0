//! Window Evader
//!
//! Runs silently from the system tray and keeps every restored window
//! just out of the mouse cursor's reach.

#[cfg(windows)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    app::run_application()
}

#[cfg(not(windows))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    Err("window-evader moves Win32 windows and only runs on Windows".into())
}

#[cfg(windows)]
mod app {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use window_evader::evader::{spawn_evasion_thread, EvaderConfig, EvasionStats};
    use window_evader::tray::setup_tray;
    use window_evader::winapi_utils::*;

    pub fn run_application() -> Result<(), Box<dyn std::error::Error>> {
        // Initialize logging
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("window_evader=info")),
            )
            .init();

        let config = EvaderConfig::default();
        let started = Instant::now();

        println!("╔════════════════════════════════════════════════════════════╗");
        println!("║              Window Evader                                 ║");
        println!("╚════════════════════════════════════════════════════════════╝");
        println!();

        let shutdown = Arc::new(AtomicBool::new(false));
        let paused = Arc::new(AtomicBool::new(false));

        // Tray before the message loop; it is the only exit once the console is gone
        println!("🔧 Setting up system tray...");
        let tray = match setup_tray(Arc::clone(&shutdown), Arc::clone(&paused)) {
            Ok(tray) => {
                println!("   ✓ System tray icon created");
                Some(tray)
            }
            Err(e) => {
                println!("   ⚠ Failed to create system tray: {}", e);
                println!("   Continuing without tray, press Ctrl+C to quit...");
                tracing::warn!(error = %e, "Tray unavailable, keeping console visible");
                None
            }
        };

        // A Ctrl+C before the pump starts must still find its thread
        register_message_loop_thread();
        let shutdown_ctrlc = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            println!("\n🛑 Shutdown signal received...");
            shutdown_ctrlc.store(true, Ordering::SeqCst);
            post_quit_message(0);
        })?;

        println!("🔧 Starting evasion loop...");
        let evasion_handle = spawn_evasion_thread(
            Win32Desktop,
            config.clone(),
            Arc::clone(&shutdown),
            Arc::clone(&paused),
        );
        println!(
            "   ✓ Polling every {}ms, proximity {}px",
            config.tick_interval.as_millis(),
            config.repulsion.proximity_threshold
        );

        if config.hide_console && tray.is_some() {
            hide_console_window();
        }

        tracing::info!("Running message loop...");
        run_message_loop(&shutdown);

        println!("\n⏳ Shutting down...");
        shutdown.store(true, Ordering::SeqCst);
        match evasion_handle.join() {
            Ok(stats) => print_summary(&stats, started.elapsed()),
            Err(_) => tracing::error!("Evasion thread panicked"),
        }

        drop(tray);
        println!("\n👋 Window Evader has exited. Goodbye!");
        Ok(())
    }

    fn print_summary(stats: &EvasionStats, uptime: Duration) {
        tracing::info!(
            ticks = stats.ticks,
            skipped = stats.skipped_ticks,
            moved = stats.windows_moved,
            wrapped = stats.windows_wrapped,
            uptime_secs = uptime.as_secs(),
            "Evasion summary"
        );

        println!();
        println!("════════════════════════════════════════════════════════════════");
        println!("📊 Evasion Summary");
        println!("════════════════════════════════════════════════════════════════");
        println!("   Uptime:        {}s", uptime.as_secs());
        println!("   Ticks:         {}", stats.ticks);
        println!("   Skipped Ticks: {}", stats.skipped_ticks);
        println!("   Windows Moved: {}", stats.windows_moved);
        println!("   Teleports:     {}", stats.windows_wrapped);
        println!("════════════════════════════════════════════════════════════════");
    }
}
