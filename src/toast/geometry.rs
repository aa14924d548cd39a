// SPDX-License-Identifier: MPL-2.0
//! Integer rectangle used for the toast's animated geometry.

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Interpolates every edge towards `other`. `t` is clamped to `[0, 1]`
    /// and each component is rounded to the nearest pixel.
    #[must_use]
    pub fn lerp(&self, other: &Rect, t: f32) -> Rect {
        let t = t.clamp(0.0, 1.0);
        Rect {
            x: lerp_i32(self.x, other.x, t),
            y: lerp_i32(self.y, other.y, t),
            width: lerp_i32(self.width, other.width, t),
            height: lerp_i32(self.height, other.height, t),
        }
    }
}

/// Works in `i64` so any pair of `i32` endpoints is accepted; the result
/// always lies between them.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn lerp_i32(from: i32, to: i32, t: f32) -> i32 {
    let span = i64::from(to) - i64::from(from);
    let offset = (span as f64 * f64::from(t)).round() as i64;
    let value = (i64::from(from) + offset).clamp(i64::from(from.min(to)), i64::from(from.max(to)));
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFF: Rect = Rect::new(900, -100, 300, 100);
    const REST: Rect = Rect::new(900, 50, 300, 100);

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(OFF.lerp(&REST, 0.0), OFF);
        assert_eq!(OFF.lerp(&REST, 1.0), REST);
    }

    #[test]
    fn lerp_midpoint_moves_only_y() {
        let mid = OFF.lerp(&REST, 0.5);
        assert_eq!(mid, Rect::new(900, -25, 300, 100));
    }

    #[test]
    fn lerp_clamps_progress() {
        assert_eq!(OFF.lerp(&REST, -3.0), OFF);
        assert_eq!(OFF.lerp(&REST, 7.5), REST);
    }

    #[test]
    fn lerp_handles_extreme_coordinates() {
        let low = Rect::new(i32::MIN, -100, 0, 100);
        let high = Rect::new(i32::MAX, i32::MAX, i32::MAX, 100);

        assert_eq!(low.lerp(&high, 0.0), low);
        assert_eq!(low.lerp(&high, 1.0), high);

        let mid = low.lerp(&high, 0.5);
        assert!(mid.x.abs() <= 1);
        assert!(mid.y > 1_000_000_000);
        assert!(mid.width > 1_000_000_000);
        assert_eq!(high.lerp(&low, 0.25).height, 100);
    }
}
