//! Aggregated screen bounds across all monitors.

use crate::desktop::Desktop;
use crate::geometry::{Rect, ScreenBounds};

/// Unions the work areas of every attached monitor.
///
/// Monitors whose info could not be read are already missing from
/// `Desktop::monitor_work_areas`. With no monitors at all the result is
/// an empty rectangle at the origin.
pub fn aggregate_screen_bounds(desktop: &impl Desktop) -> ScreenBounds {
    union_all(desktop.monitor_work_areas())
}

fn union_all(work_areas: impl IntoIterator<Item = Rect>) -> ScreenBounds {
    work_areas
        .into_iter()
        .fold(Rect::default(), |bounds, area| bounds.union(&area))
}
