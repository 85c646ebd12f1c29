//! Shade square: blends a ring color toward white and black.
//!
//! # Formula
//! For a point `(x, y)` relative to the square's top-left corner:
//! ```text
//!   x_factor = 1 − x / width       (1 at the left edge → full white)
//!   y_factor = 1 − y / height      (1 at the top edge  → no darkening)
//!
//!   c = c + round((255 − c) × x_factor)
//!   c = round(c × y_factor)
//! ```
//!
//! ```text
//!   Base ──→ fade to white (x) ──→ fade to black (y) ──→ Output
//! ```
//!
//! The white fade must run first; swapping the steps changes the result.

use glam::Vec2;

use crate::color::Rgb;

/// Apply the shade at `point` (relative to the square) to `base`.
///
/// Factors are clamped to `[0, 1]`, so points outside the square behave like
/// the nearest edge.
pub fn apply(base: Rgb, point: Vec2, size: Vec2) -> Rgb {
    let x_factor = factor(point.x, size.x);
    let y_factor = factor(point.y, size.y);

    let faded = base
        .channels()
        .map(|c| {
            let c = f32::from(c);
            c + ((255.0 - c) * x_factor).round()
        })
        .map(|c| (c * y_factor).round());

    Rgb::from_f32_saturating(faded)
}

/// Approximate point (relative to the square) that reproduces `color`.
///
/// The forward map is not injective, so this is a best effort: the horizontal
/// position comes from the channel spread, the vertical one from the
/// brightest channel. Exact for ring colors, white, black and grays.
pub fn invert(color: Rgb, size: Vec2) -> Vec2 {
    let max = f32::from(color.max_channel());
    let min = f32::from(color.min_channel());
    Vec2::new(
        (max - min) / 255.0 * size.x,
        (255.0 - max) / 255.0 * size.y,
    )
}

fn factor(offset: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 1.0;
    }
    (1.0 - offset / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(50.0, 50.0);
    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_top_right_is_identity() {
        let base = Rgb::new(255, 96, 0);
        assert_eq!(apply(base, Vec2::new(50.0, 0.0), SIZE), base);
    }

    #[test]
    fn test_bottom_edge_is_black() {
        let base = Rgb::new(0, 255, 255);
        assert_eq!(apply(base, Vec2::new(0.0, 50.0), SIZE), Rgb::BLACK);
        assert_eq!(apply(base, Vec2::new(50.0, 50.0), SIZE), Rgb::BLACK);
    }

    #[test]
    fn test_top_left_is_white() {
        let base = Rgb::new(0, 0, 255);
        assert_eq!(apply(base, Vec2::ZERO, SIZE), Rgb::WHITE);
    }

    #[test]
    fn test_white_fade_runs_before_black_fade() {
        // Middle of the square: halfway to white, then halved.
        // r: 255 → 255 → 128 (127.5 rounds away from zero)
        // g:   0 → 128 → 64
        let c = apply(Rgb::new(255, 0, 0), Vec2::new(25.0, 25.0), SIZE);
        assert_eq!(c, Rgb::new(128, 64, 64));
    }

    #[test]
    fn test_out_of_bounds_point_saturates() {
        let base = Rgb::new(255, 0, 0);
        assert_eq!(apply(base, Vec2::new(-500.0, 0.0), SIZE), Rgb::WHITE);
        assert_eq!(apply(base, Vec2::new(500.0, 500.0), SIZE), Rgb::BLACK);
    }

    #[test]
    fn test_invert_pure_hue_is_top_right() {
        let p = invert(Rgb::new(255, 0, 0), SIZE);
        assert!((p - Vec2::new(50.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_invert_gray_is_left_edge() {
        let p = invert(Rgb::new(128, 128, 128), SIZE);
        assert!(p.x.abs() < EPSILON);
        assert_eq!(apply(Rgb::new(255, 0, 0), p, SIZE), Rgb::new(128, 128, 128));
    }
}
