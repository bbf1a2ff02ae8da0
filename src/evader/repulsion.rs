//! Proximity test and repulsion math.
//!
//! Given a window near the cursor, works out where the window should jump
//! to: away from the cursor along the cursor-to-center line, further when
//! the cursor is fast or close, and wrapped to the opposite screen edge
//! when the jump would leave the screen.
//!
//! All arithmetic is done in `f64` and truncated toward zero once, at the
//! point where a pixel value is produced. Reordering the truncation changes
//! displacement magnitudes at the edges, so keep it this way.

use crate::geometry::{Point, Rect, ScreenBounds};
use std::time::Duration;

/// Margin in pixels that turns a window rectangle into its proximity zone.
pub const DEFAULT_PROXIMITY_THRESHOLD: i32 = 70;

/// Minimum jump in pixels for a window in proximity.
pub const DEFAULT_BASE_MOVE_DISTANCE: i32 = 60;

/// Pixels of extra jump per pixel/second of cursor speed.
pub const DEFAULT_SPEED_FACTOR: f64 = 0.05;

/// Tunables of the repulsion formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    pub proximity_threshold: i32,
    pub base_move_distance: i32,
    pub speed_factor: f64,
}

impl Default for Repulsion {
    fn default() -> Self {
        Self {
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            base_move_distance: DEFAULT_BASE_MOVE_DISTANCE,
            speed_factor: DEFAULT_SPEED_FACTOR,
        }
    }
}

/// Where a window should go, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    /// Destination rectangle; same size as the source.
    pub target: Rect,
    /// Length of the jump before wrapping, in pixels.
    pub distance: i32,
    /// Whether an edge-wrap relocated the window on either axis.
    pub wrapped: bool,
}

impl MovePlan {
    /// True when the window would end up exactly where it is.
    pub fn is_stationary(&self, current: &Rect) -> bool {
        self.target == *current
    }
}

/// Cursor speed in pixels per second, from two samples one tick apart.
pub fn cursor_speed(current: Point, previous: Point, tick_interval: Duration) -> f64 {
    current.distance_to(previous) / tick_interval.as_secs_f64()
}

impl Repulsion {
    /// Whether `cursor` lies in the window's proximity zone (edges included).
    pub fn in_proximity(&self, window: &Rect, cursor: Point) -> bool {
        window.inflate(self.proximity_threshold).contains(cursor)
    }

    /// Jump length for a window whose center is `distance_to_center` away
    /// from a cursor moving at `speed` px/s.
    ///
    /// The proximity term goes negative once the cursor is further than the
    /// threshold from the center; the base distance then dominates.
    pub fn move_distance(&self, speed: f64, distance_to_center: f64) -> i32 {
        let proximity_term = f64::from(self.proximity_threshold) - distance_to_center;
        let raw = (speed * self.speed_factor + proximity_term) as i32;
        self.base_move_distance.max(raw)
    }

    /// Plans the jump of `window` away from `cursor`, wrapping at `bounds`.
    pub fn plan_move(
        &self,
        window: &Rect,
        cursor: Point,
        speed: f64,
        bounds: &ScreenBounds,
    ) -> MovePlan {
        let center = window.center();
        let distance = self.move_distance(speed, cursor.distance_to(center));
        let offset = displacement(cursor, center, distance);

        let landing = Point::new(window.left + offset.x, window.top + offset.y);
        let (top_left, wrapped) = wrap_to_bounds(landing, window.width(), window.height(), bounds);

        MovePlan {
            target: window.moved_to(top_left),
            distance,
            wrapped,
        }
    }
}

/// Offset of length `distance` pointing from `cursor` toward `center`.
///
/// When the cursor sits exactly on the center there is no direction to
/// flee in and the offset is zero.
pub fn displacement(cursor: Point, center: Point, distance: i32) -> Point {
    let dx = center.x - cursor.x;
    let dy = center.y - cursor.y;

    let mut length = cursor.distance_to(center);
    if length == 0.0 {
        length = 1.0;
    }

    Point::new(
        (f64::from(distance) * f64::from(dx) / length) as i32,
        (f64::from(distance) * f64::from(dy) / length) as i32,
    )
}

/// Teleports a window whose top-left would be `landing` to the opposite
/// edge if it crosses `bounds`.
///
/// Per axis: falling off the low edge snaps the far edge to the high bound,
/// overrunning the high edge snaps the near edge to the low bound.
pub fn wrap_to_bounds(
    landing: Point,
    width: i32,
    height: i32,
    bounds: &ScreenBounds,
) -> (Point, bool) {
    let (x, wrapped_x) = wrap_axis(landing.x, width, bounds.left, bounds.right);
    let (y, wrapped_y) = wrap_axis(landing.y, height, bounds.top, bounds.bottom);
    (Point::new(x, y), wrapped_x || wrapped_y)
}

fn wrap_axis(start: i32, extent: i32, low: i32, high: i32) -> (i32, bool) {
    if start < low {
        (high - extent, true)
    } else if start + extent > high {
        (low, true)
    } else {
        (start, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenBounds = Rect::new(0, 0, 1920, 1080);
    const TICK: Duration = Duration::from_millis(15);

    #[test]
    fn test_repulsion_defaults() {
        let repulsion = Repulsion::default();
        assert_eq!(repulsion.proximity_threshold, 70);
        assert_eq!(repulsion.base_move_distance, 60);
        assert_eq!(repulsion.speed_factor, 0.05);
    }

    #[test]
    fn test_proximity_zone_edges() {
        let repulsion = Repulsion::default();
        let window = Rect::new(100, 100, 300, 220);

        assert!(repulsion.in_proximity(&window, Point::new(30, 30)));
        assert!(repulsion.in_proximity(&window, Point::new(370, 290)));
        assert!(repulsion.in_proximity(&window, Point::new(200, 160)));
        assert!(!repulsion.in_proximity(&window, Point::new(29, 150)));
        assert!(!repulsion.in_proximity(&window, Point::new(200, 291)));
    }

    #[test]
    fn test_cursor_speed_per_second() {
        let speed = cursor_speed(Point::new(30, 40), Point::new(0, 0), TICK);
        assert!((speed - 50.0 / 0.015).abs() < 1e-9);
        assert_eq!(cursor_speed(Point::new(5, 5), Point::new(5, 5), TICK), 0.0);
    }

    #[test]
    fn test_move_distance_floor() {
        let repulsion = Repulsion::default();
        assert_eq!(repulsion.move_distance(0.0, 50.0), 60);
        // Cursor far from the center drives the proximity term negative.
        assert_eq!(repulsion.move_distance(0.0, 200.0), 60);
        assert_eq!(repulsion.move_distance(100.0, 69.0), 60);
    }

    #[test]
    fn test_move_distance_grows_with_speed() {
        let repulsion = Repulsion::default();
        // 2000 px/s * 0.05 = 100, plus 70 - 60.
        assert_eq!(repulsion.move_distance(2000.0, 60.0), 110);
    }

    #[test]
    fn test_move_distance_truncates_once() {
        let repulsion = Repulsion::default();
        // 50.5 + 64.5 = 115; truncating each term first would give 114.
        assert_eq!(repulsion.move_distance(1010.0, 5.5), 115);
    }

    #[test]
    fn test_displacement_is_scaled_unit_vector() {
        let offset = displacement(Point::new(0, 0), Point::new(300, 400), 100);
        assert_eq!(offset, Point::new(60, 80));

        let offset = displacement(Point::new(150, 150), Point::new(200, 160), 60);
        let length = f64::from(offset.x).hypot(f64::from(offset.y));
        assert!(length <= 60.0);
        assert!(length > 60.0 - 2.0);
    }

    #[test]
    fn test_displacement_long_jump_on_wide_window() {
        // 150000 * 40000 does not fit in an i32
        let offset = displacement(Point::new(0, 0), Point::new(40000, 0), 150_000);
        assert_eq!(offset, Point::new(150_000, 0));
    }

    #[test]
    fn test_plan_move_fast_cursor_large_window() {
        let repulsion = Repulsion::default();
        let window = Rect::new(0, 0, 200_000, 600);

        // 150000 + 70 - 40000 = 110070 px, times a 40000 px delta
        let plan = repulsion.plan_move(&window, Point::new(60_000, 300), 3.0e6, &SCREEN);

        assert_eq!(plan.distance, 110_070);
        assert!(plan.wrapped);
        assert_eq!(plan.target.left, 0);
    }

    #[test]
    fn test_displacement_zero_at_center() {
        let offset = displacement(Point::new(200, 160), Point::new(200, 160), 60);
        assert_eq!(offset, Point::new(0, 0));
    }

    #[test]
    fn test_plan_move_pushes_down_right() {
        let repulsion = Repulsion::default();
        let window = Rect::new(100, 100, 300, 220);

        let plan = repulsion.plan_move(&window, Point::new(150, 150), 0.0, &SCREEN);

        assert_eq!(plan.distance, 60);
        assert!(!plan.wrapped);
        // 60 * 50 / sqrt(2600) = 58.8, 60 * 10 / sqrt(2600) = 11.7
        assert_eq!(plan.target, Rect::new(158, 111, 358, 231));
    }

    #[test]
    fn test_plan_move_cursor_on_center_is_stationary() {
        let repulsion = Repulsion::default();
        let window = Rect::new(100, 100, 300, 220);

        let plan = repulsion.plan_move(&window, window.center(), 500.0, &SCREEN);
        assert!(plan.is_stationary(&window));
        assert!(!plan.wrapped);
    }

    #[test]
    fn test_plan_move_wraps_left_edge_to_right() {
        let repulsion = Repulsion::default();
        let window = Rect::new(40, 500, 240, 620);

        // Cursor 60px right of center pushes the window to x = -20.
        let plan = repulsion.plan_move(&window, Point::new(200, 560), 0.0, &SCREEN);

        assert!(plan.wrapped);
        assert_eq!(plan.target.left, 1720);
        assert_eq!(plan.target.right, SCREEN.right);
        assert_eq!(plan.target.top, 500);
    }

    #[test]
    fn test_wrap_right_edge_to_left() {
        let (top_left, wrapped) = wrap_to_bounds(Point::new(1800, 300), 200, 120, &SCREEN);
        assert!(wrapped);
        assert_eq!(top_left, Point::new(0, 300));
    }

    #[test]
    fn test_wrap_top_edge_to_bottom() {
        let (top_left, wrapped) = wrap_to_bounds(Point::new(400, -5), 200, 120, &SCREEN);
        assert!(wrapped);
        assert_eq!(top_left, Point::new(400, 960));
    }

    #[test]
    fn test_wrap_bottom_edge_to_top() {
        let (top_left, wrapped) = wrap_to_bounds(Point::new(400, 1000), 200, 120, &SCREEN);
        assert!(wrapped);
        assert_eq!(top_left, Point::new(400, 0));
    }

    #[test]
    fn test_wrap_inside_bounds_untouched() {
        let (top_left, wrapped) = wrap_to_bounds(Point::new(1720, 960), 200, 120, &SCREEN);
        assert!(!wrapped);
        assert_eq!(top_left, Point::new(1720, 960));
    }

    #[test]
    fn test_wrap_respects_offset_bounds() {
        let bounds = Rect::new(-1280, 0, 1920, 1040);
        let (top_left, wrapped) = wrap_to_bounds(Point::new(-1300, 100), 200, 120, &bounds);
        assert!(wrapped);
        assert_eq!(top_left, Point::new(1720, 100));
    }
}
