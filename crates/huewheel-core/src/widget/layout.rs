//! Widget geometry: overall size, shade square placement and ring radii.
//!
//! The defaults describe a 100×100 widget with a 50×50 shade square centered
//! in the ring. A layout can also be loaded from JSON, where every field is
//! optional and falls back to the default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Environment variable naming a JSON layout file.
pub const LAYOUT_ENV: &str = "HUEWHEEL_LAYOUT";

/// Axis-aligned shade square in widget space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeRect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl ShadeRect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Whether a press at `p` lands in the square.
    ///
    /// Half-open like a pixel grid: the left/top edges are inside, the
    /// right/bottom edges are not.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x < max.x && p.y >= self.origin.y && p.y < max.y
    }

    /// Closest point to `p` on or inside the square (edges inclusive).
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.origin, self.max())
    }

    /// `p` relative to the top-left corner.
    pub fn relative(&self, p: Vec2) -> Vec2 {
        p - self.origin
    }
}

/// Complete geometry of the wheel widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayout {
    /// Widget width and height in pixels.
    pub size: Vec2,
    /// Placement of the shade square.
    pub shade: ShadeRect,
    /// Inner and outer radius of the ring indicator line.
    pub indicator_radii: [f32; 2],
    /// Inner and outer radius of the painted hue band.
    pub ring_radii: [f32; 2],
    /// Radius of the shade square indicator dot.
    pub dot_radius: f32,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            size: Vec2::new(100.0, 100.0),
            shade: ShadeRect::new(Vec2::new(25.0, 25.0), Vec2::new(50.0, 50.0)),
            indicator_radii: [37.0, 46.0],
            ring_radii: [37.5, 44.0],
            dot_radius: 2.5,
        }
    }
}

impl WheelLayout {
    /// Center of the ring.
    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Check that every dimension is positive and the square fits the widget.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.size.x > 0.0 && self.size.y > 0.0) {
            return Err(LayoutError::Invalid("widget size must be positive"));
        }
        if !(self.shade.size.x > 0.0 && self.shade.size.y > 0.0) {
            return Err(LayoutError::Invalid("shade square size must be positive"));
        }
        let max = self.shade.max();
        if self.shade.origin.x < 0.0
            || self.shade.origin.y < 0.0
            || max.x > self.size.x
            || max.y > self.size.y
        {
            return Err(LayoutError::Invalid("shade square must lie inside the widget"));
        }
        for [inner, outer] in [self.indicator_radii, self.ring_radii] {
            if !(inner >= 0.0 && outer > inner) {
                return Err(LayoutError::Invalid(
                    "radii must be non-negative with inner < outer",
                ));
            }
        }
        if !(self.dot_radius > 0.0) {
            return Err(LayoutError::Invalid("dot radius must be positive"));
        }
        Ok(())
    }

    /// Parse and validate a JSON layout.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a JSON layout file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Layout from the file named by [`LAYOUT_ENV`], or the default.
    ///
    /// A file that cannot be loaded is logged and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(LAYOUT_ENV) else {
            return Self::default();
        };
        match Self::from_path(&path) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!("{LAYOUT_ENV}: {e}; using the default layout");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
