//! The evasion polling loop.
//!
//! Every tick samples the cursor, enumerates the top-level windows and
//! pushes each eligible window in the cursor's proximity away from it.
//! Nothing survives a tick except the previous cursor sample.

use crate::desktop::{Desktop, WindowSnapshot};
use crate::evader::bounds::aggregate_screen_bounds;
use crate::evader::eligibility::is_eligible;
use crate::evader::repulsion::{cursor_speed, Repulsion};
use crate::geometry::{Point, ScreenBounds};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Configuration for the evader.
#[derive(Debug, Clone)]
pub struct EvaderConfig {
    /// Delay between ticks; also the time base for cursor speed (default: 15ms).
    pub tick_interval: Duration,

    /// Proximity margin and jump formula.
    pub repulsion: Repulsion,

    /// Hide the console window this process was started from.
    pub hide_console: bool,
}

impl Default for EvaderConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(15),
            repulsion: Repulsion::default(),
            hide_console: true,
        }
    }
}

/// Immutable per-process state every tick reads from.
#[derive(Debug, Clone)]
pub struct EvasionContext {
    pub bounds: ScreenBounds,
    pub own_process_id: u32,
    pub repulsion: Repulsion,
    pub tick_interval: Duration,
}

impl EvasionContext {
    pub fn new(bounds: ScreenBounds, own_process_id: u32, config: &EvaderConfig) -> Self {
        Self {
            bounds,
            own_process_id,
            repulsion: config.repulsion,
            tick_interval: config.tick_interval,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Top-level windows enumerated.
    pub examined: usize,
    /// Windows that passed the eligibility filter.
    pub eligible: usize,
    /// Eligible windows with the cursor inside their proximity zone.
    pub in_proximity: usize,
    /// Move requests issued.
    pub moved: usize,
    /// Move requests that teleported a window across the screen.
    pub wrapped: usize,
}

/// Totals over the lifetime of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvasionStats {
    pub ticks: u64,
    /// Ticks abandoned because the cursor position could not be read.
    pub skipped_ticks: u64,
    pub windows_moved: u64,
    pub windows_wrapped: u64,
}

impl EvasionStats {
    fn record(&mut self, outcome: Option<&TickOutcome>) {
        match outcome {
            Some(outcome) => {
                self.ticks += 1;
                self.windows_moved += outcome.moved as u64;
                self.windows_wrapped += outcome.wrapped as u64;
            }
            None => self.skipped_ticks += 1,
        }
    }
}

/// Drives ticks against a desktop, remembering the last cursor sample.
pub struct Evader<D: Desktop> {
    desktop: D,
    context: EvasionContext,
    last_cursor: Option<Point>,
    stats: EvasionStats,
}

impl<D: Desktop> Evader<D> {
    /// Aggregates the screen bounds once and takes the first cursor sample.
    pub fn new(desktop: D, config: &EvaderConfig) -> Self {
        let bounds = aggregate_screen_bounds(&desktop);
        if bounds.is_empty() {
            tracing::warn!("No monitor work areas found, edge wrapping is disabled");
        }

        let context = EvasionContext::new(bounds, std::process::id(), config);
        tracing::info!(
            left = bounds.left,
            top = bounds.top,
            right = bounds.right,
            bottom = bounds.bottom,
            own_pid = context.own_process_id,
            "Screen bounds aggregated"
        );

        Self::with_context(desktop, context)
    }

    pub fn with_context(desktop: D, context: EvasionContext) -> Self {
        let last_cursor = desktop.cursor_position();
        Self {
            desktop,
            context,
            last_cursor,
            stats: EvasionStats::default(),
        }
    }

    pub fn context(&self) -> &EvasionContext {
        &self.context
    }

    pub fn stats(&self) -> EvasionStats {
        self.stats
    }

    /// Runs one tick.
    ///
    /// Returns `None` when the cursor could not be read; the previous
    /// sample is kept for the next tick. While `paused` the cursor is still
    /// sampled so resuming does not register a burst of speed.
    pub fn tick(&mut self, paused: bool) -> Option<TickOutcome> {
        let Some(cursor) = self.desktop.cursor_position() else {
            tracing::trace!("Cursor position unavailable, skipping tick");
            self.stats.record(None);
            return None;
        };

        let speed = self
            .last_cursor
            .map_or(0.0, |last| cursor_speed(cursor, last, self.context.tick_interval));
        self.last_cursor = Some(cursor);

        let outcome = if paused {
            TickOutcome::default()
        } else {
            run_tick(&self.desktop, &self.context, cursor, speed)
        };

        self.stats.record(Some(&outcome));
        Some(outcome)
    }

    pub fn into_stats(self) -> EvasionStats {
        self.stats
    }
}

/// Pushes every eligible window near `cursor` away from it.
///
/// Windows are handled independently, in enumeration order. A window whose
/// queries fail is skipped without affecting the others.
pub fn run_tick(
    desktop: &impl Desktop,
    context: &EvasionContext,
    cursor: Point,
    speed: f64,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    for handle in desktop.top_level_windows() {
        outcome.examined += 1;

        let Some(window) = WindowSnapshot::capture(desktop, handle) else {
            continue;
        };
        if !is_eligible(&window, context.own_process_id) {
            continue;
        }
        outcome.eligible += 1;

        let repulsion = &context.repulsion;
        if !repulsion.in_proximity(&window.rect, cursor) {
            continue;
        }
        outcome.in_proximity += 1;

        let plan = repulsion.plan_move(&window.rect, cursor, speed, &context.bounds);
        if plan.is_stationary(&window.rect) {
            continue;
        }

        let accepted = desktop.move_window(handle, plan.target);
        tracing::trace!(
            hwnd = handle.0,
            from_x = window.rect.left,
            from_y = window.rect.top,
            to_x = plan.target.left,
            to_y = plan.target.top,
            distance = plan.distance,
            accepted,
            "Window moved"
        );
        if plan.wrapped {
            tracing::debug!(
                hwnd = handle.0,
                to_x = plan.target.left,
                to_y = plan.target.top,
                "Window teleported across screen edge"
            );
            outcome.wrapped += 1;
        }
        outcome.moved += 1;
    }

    outcome
}

/// Spawns the evasion thread.
///
/// The thread aggregates the screen bounds, then ticks every
/// `config.tick_interval` until `shutdown` is set. Ticks taken while
/// `paused` is set move nothing.
///
/// # Returns
/// A `JoinHandle` yielding the accumulated statistics.
///
/// # Example
/// ```ignore
/// let shutdown = Arc::new(AtomicBool::new(false));
/// let paused = Arc::new(AtomicBool::new(false));
/// let handle = spawn_evasion_thread(
///     Win32Desktop,
///     EvaderConfig::default(),
///     Arc::clone(&shutdown),
///     paused,
/// );
///
/// // ... run message loop ...
///
/// shutdown.store(true, Ordering::SeqCst);
/// let stats = handle.join().unwrap();
/// ```
pub fn spawn_evasion_thread<D>(
    desktop: D,
    config: EvaderConfig,
    shutdown: Arc<AtomicBool>,
    paused: Arc<AtomicBool>,
) -> JoinHandle<EvasionStats>
where
    D: Desktop + Send + 'static,
{
    thread::spawn(move || {
        tracing::info!(
            interval_ms = config.tick_interval.as_millis(),
            "Evasion thread started"
        );

        let mut evader = Evader::new(desktop, &config);

        while !shutdown.load(Ordering::SeqCst) {
            evader.tick(paused.load(Ordering::Relaxed));
            thread::sleep(config.tick_interval);
        }

        let stats = evader.into_stats();
        tracing::info!(
            ticks = stats.ticks,
            moved = stats.windows_moved,
            "Evasion thread shutting down"
        );
        stats
    })
}
