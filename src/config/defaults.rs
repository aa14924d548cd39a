// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the toast geometry,
//! timing and layout values. Constants are organized by category.
//!
//! # Categories
//!
//! - **Geometry**: Toast size and resting position
//! - **Timing**: Slide and hold durations
//! - **Layout**: Offsets used when painting the card

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Fixed toast height in pixels. Only x, y and width ever vary.
pub const TOAST_HEIGHT: i32 = 100;

/// Default toast width in pixels.
pub const DEFAULT_TOAST_WIDTH: i32 = 300;

/// Smallest width accepted from the settings file.
pub const MIN_TOAST_WIDTH: i32 = 160;

/// Largest width accepted from the settings file.
pub const MAX_TOAST_WIDTH: i32 = 1200;

/// Gap kept between the toast's right edge and the viewport's right edge.
pub const VIEWPORT_MARGIN: i32 = 50;

/// Default distance from the top of the viewport to the resting position.
pub const DEFAULT_TOAST_Y: i32 = 50;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of each slide leg (entry and exit), in milliseconds.
pub const SLIDE_DURATION_MS: u64 = 500;

/// Default time the toast stays at rest before retracting, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 1000;

/// Longest hold accepted from the settings file, in milliseconds.
pub const MAX_HOLD_MS: u64 = 60_000;

/// Polling interval used while the hold timer is armed, in milliseconds.
pub const HOLD_POLL_INTERVAL_MS: u64 = 10;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Height every icon is pre-scaled to when the cache is populated.
pub const ICON_HEIGHT: u32 = 80;

/// Left offset of the icon inside the card.
pub const ICON_OFFSET_X: i32 = 10;

/// Left edge of the text region inside the card.
pub const TEXT_OFFSET_X: i32 = 120;

/// Vertical padding above and below the text region.
pub const TEXT_PADDING_Y: i32 = 10;

/// Corner radius of the card background.
pub const CORNER_RADIUS: f32 = 5.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(TOAST_HEIGHT > 0);
    assert!(MIN_TOAST_WIDTH > TEXT_OFFSET_X);
    assert!(MAX_TOAST_WIDTH >= MIN_TOAST_WIDTH);
    assert!(DEFAULT_TOAST_WIDTH >= MIN_TOAST_WIDTH);
    assert!(DEFAULT_TOAST_WIDTH <= MAX_TOAST_WIDTH);

    assert!(ICON_HEIGHT as i32 <= TOAST_HEIGHT);
    assert!(2 * TEXT_PADDING_Y < TOAST_HEIGHT);
    assert!(ICON_OFFSET_X < TEXT_OFFSET_X);

    assert!(SLIDE_DURATION_MS > 0);
    assert!(DEFAULT_HOLD_MS <= MAX_HOLD_MS);
    assert!(HOLD_POLL_INTERVAL_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults_are_valid() {
        assert_eq!(TOAST_HEIGHT, 100);
        assert_eq!(DEFAULT_TOAST_WIDTH, 300);
        assert_eq!(VIEWPORT_MARGIN, 50);
        assert_eq!(DEFAULT_TOAST_Y, 50);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(SLIDE_DURATION_MS, 500);
        assert_eq!(DEFAULT_HOLD_MS, 1000);
        assert!(HOLD_POLL_INTERVAL_MS < SLIDE_DURATION_MS);
    }

    #[test]
    fn text_region_leaves_room_for_icon() {
        assert!(ICON_OFFSET_X + ICON_HEIGHT as i32 <= TEXT_OFFSET_X);
    }
}
