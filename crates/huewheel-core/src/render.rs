//! Software rasterization of the wheel.
//!
//! Paints the hue band, the shade square and both indicators into an RGBA
//! image. Every pixel goes through the same math as pointer input, so the
//! color under the pointer is the color the wheel reports.

use std::path::Path;

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::error::WheelError;
use crate::geometry::absolute_angle;
use crate::widget::ColorWheel;
use crate::{hue, shade};

/// Width of the ring indicator line in pixels.
const INDICATOR_WIDTH: f32 = 3.0;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const INDICATOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render `wheel` at its layout size.
pub fn rasterize(wheel: &ColorWheel) -> RgbaImage {
    let layout = wheel.layout();
    let width = layout.size.x.ceil() as u32;
    let height = layout.size.y.ceil() as u32;
    let center = layout.center();
    let [band_inner, band_outer] = layout.ring_radii;
    let square = layout.shade;
    let base = wheel.wheel_color();
    let (line_start, line_end) = wheel.ring_indicator();
    let dot = wheel.square_indicator();

    RgbaImage::from_fn(width, height, |x, y| {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

        if distance_to_segment(p, line_start, line_end) <= INDICATOR_WIDTH / 2.0
            || p.distance(dot) <= layout.dot_radius
        {
            return INDICATOR;
        }

        if square.contains(p) {
            let c = shade::apply(base, square.relative(p), square.size);
            return Rgba([c.r, c.g, c.b, 255]);
        }

        let radius = p.distance(center);
        if (band_inner..=band_outer).contains(&radius) {
            let angle = absolute_angle(Vec2::new(p.x, center.y), p, center);
            let c = hue::forward(360.0 - angle);
            return Rgba([c.r, c.g, c.b, 255]);
        }

        TRANSPARENT
    })
}

/// Render `wheel` and write it as a PNG.
pub fn save_png(wheel: &ColorWheel, path: impl AsRef<Path>) -> Result<(), WheelError> {
    let path = path.as_ref();
    rasterize(wheel).save_with_format(path, image::ImageFormat::Png)?;
    tracing::debug!("wrote wheel image to {}", path.display());
    Ok(())
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
