//! Hue ring gradient: angle → fully saturated color, and back.
//!
//! The ring is a six-sector gradient defined by fixed stops expressed as
//! fractions of the circle. Each channel ramps linearly over a width of
//! [`RAMP`], holds at 255, or holds at 0:
//!
//! ```text
//!   fraction   0    .16   .33   .5    .66   .83   1
//!   R          255  ↘     0     0     ↗     255   255
//!   G          ↗    255   255   ↘     0     0     0
//!   B          0    0     ↗     255   255   ↘     0
//! ```
//!
//! Because a ramp is 0.16 wide but some sectors are 0.17 wide, a ramp can
//! overshoot before the next stop. Overshoot is clamped, which leaves a short
//! plateau of constant color in front of the stops at .33, .5, .83 and 1.0.
//!
//! The wheel reads the gradient with a half-turn offset, so in wheel degrees
//! 0° is cyan and 180° is red.

use crate::color::Rgb;
use crate::geometry::round_tenth;

/// Width of one channel ramp, as a fraction of the circle.
const RAMP: f64 = 0.16;

/// Sector boundaries, as fractions of the circle.
const S1: f64 = 0.16;
const S2: f64 = 0.33;
const S3: f64 = 0.5;
const S4: f64 = 0.66;
const S5: f64 = 0.83;

/// Offset between wheel degrees and gradient degrees.
const WHEEL_OFFSET: f64 = 180.0;

/// Fully saturated color at `degrees` on the wheel.
///
/// Any finite input is accepted; it is normalized into `[0, 360)` first.
pub fn forward(degrees: f32) -> Rgb {
    let gradient = (f64::from(degrees) + WHEEL_OFFSET).rem_euclid(360.0);
    let t = gradient / 360.0;
    Rgb::new(red(t), green(t), blue(t))
}

/// Wheel angle that reproduces the hue of `color`, rounded to one decimal.
///
/// Shading is removed first by stretching the channels over their own
/// `[min, max]` span, so any shade of a ring color maps to the same angle.
/// Returns `None` for achromatic colors, whose hue is undefined.
pub fn inverse(color: Rgb) -> Option<f32> {
    if color.is_achromatic() {
        return None;
    }

    let (max, min) = (color.max_channel(), color.min_channel());
    let span = f64::from(max - min);
    let level = |c: u8| 255.0 * f64::from(c - min) / span;
    let Rgb { r, g, b } = color;

    // Which channel sits at the top and which at the bottom selects the
    // sector; the remaining channel gives the position along its ramp.
    let t = if r == max && b == min {
        sector_position(0.0, S1, level(g))
    } else if g == max && b == min {
        sector_position(S1, S2, 255.0 - level(r))
    } else if g == max && r == min {
        sector_position(S2, S3, level(b))
    } else if b == max && r == min {
        sector_position(S3, S4, 255.0 - level(g))
    } else if b == max && g == min {
        sector_position(S4, S5, level(r))
    } else {
        // r == max && g == min
        sector_position(S5, 1.0, 255.0 - level(b))
    };

    let degrees = (t * 360.0 - WHEEL_OFFSET).rem_euclid(360.0);
    Some(round_tenth(degrees as f32).rem_euclid(360.0))
}

/// Position within the sector `[start, end]` of a ramp that has climbed to
/// `value`. A fully climbed ramp lands on `end`, the stop at the far side of
/// any plateau.
fn sector_position(start: f64, end: f64, value: f64) -> f64 {
    if value >= 255.0 {
        return end;
    }
    start + value / 255.0 * RAMP
}

/// Channel value `offset` into a rising ramp. May exceed 255 on overshoot.
fn ramp(offset: f64) -> f64 {
    (255.0 * (offset / RAMP)).round()
}

fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn red(t: f64) -> u8 {
    channel(if t < S1 {
        255.0
    } else if t <= S2 {
        255.0 - ramp(t - S1)
    } else if t < S4 {
        0.0
    } else if t <= S5 {
        ramp(t - S4)
    } else {
        255.0
    })
}

fn green(t: f64) -> u8 {
    channel(if t <= S1 {
        ramp(t)
    } else if t < S3 {
        255.0
    } else if t <= S4 {
        255.0 - ramp(t - S3)
    } else {
        0.0
    })
}

fn blue(t: f64) -> u8 {
    channel(if t < S2 {
        0.0
    } else if t <= S3 {
        ramp(t - S2)
    } else if t < S5 {
        255.0
    } else {
        255.0 - ramp(t - S5)
    })
}
