//! The color wheel: a hue ring around a shade square.
//!
//! The wheel stores exactly two values, the ring angle and the shade point.
//! The displayed color is always derived from them:
//!
//! ```text
//!   angle ──→ hue::forward(360 − angle) ──┐
//!                                         ├──→ shade::apply ──→ color
//!   point ──→ relative to shade square ───┘
//! ```
//!
//! A preset color goes the other way through [`hue::inverse`] and
//! [`shade::invert`]. That direction is lossy, so the color read back after a
//! preset may differ slightly from the preset itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::{absolute_angle, point_on_ring};
use crate::widget::events::{ColorChanged, DragTool};
use crate::widget::layout::WheelLayout;
use crate::{hue, shade};

/// Angle of a freshly constructed wheel.
const DEFAULT_ANGLE: f32 = 180.0;

/// Serializable snapshot of everything needed to draw the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelState {
    /// Ring angle in degrees, `[0, 360)`.
    pub angle: f32,
    /// Shade point in widget space.
    pub point: Vec2,
    /// Unshaded ring color at `angle`.
    pub wheel_color: Rgb,
    /// Final color.
    pub color: Rgb,
}

/// Hue ring + shade square picker state.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorWheel {
    layout: WheelLayout,
    angle: f32,
    point: Vec2,
    tool: Option<DragTool>,
    dragging: bool,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new(WheelLayout::default())
    }
}

impl ColorWheel {
    /// Wheel at the default angle with the point in the full-white corner.
    pub fn new(layout: WheelLayout) -> Self {
        let point = layout.shade.origin;
        Self {
            layout,
            angle: DEFAULT_ANGLE,
            point,
            tool: None,
            dragging: false,
        }
    }

    /// Wheel initialized from a preset color.
    pub fn with_color(layout: WheelLayout, color: Rgb) -> Self {
        let mut wheel = Self::new(layout);
        wheel.set_current_color(color);
        wheel
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    /// Ring angle in degrees, `[0, 360)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Shade point in widget space.
    pub fn point(&self) -> Vec2 {
        self.point
    }

    /// Tool of the gesture in progress, if any.
    pub fn tool(&self) -> Option<DragTool> {
        self.tool
    }

    /// True once the pointer has moved during the current gesture.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a gesture at `pos`, picking the tool from where the press lands.
    pub fn pointer_down(&mut self, pos: Vec2) -> ColorChanged {
        let tool = if self.layout.shade.contains(pos) {
            DragTool::Square
        } else {
            DragTool::Ring
        };
        tracing::debug!("gesture started at {pos} with {tool:?}");
        self.tool = Some(tool);
        self.dragging = false;
        self.apply_pointer(tool, pos)
    }

    /// Continue the current gesture. Returns `None` when no gesture is active.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<ColorChanged> {
        let tool = self.tool?;
        self.dragging = true;
        Some(self.apply_pointer(tool, pos))
    }

    /// End the current gesture.
    pub fn pointer_up(&mut self) {
        self.tool = None;
        self.dragging = false;
    }

    fn apply_pointer(&mut self, tool: DragTool, pos: Vec2) -> ColorChanged {
        match tool {
            DragTool::Square => self.place_point(pos),
            DragTool::Ring => {
                let center = self.layout.center();
                let reference = Vec2::new(pos.x, center.y);
                self.angle = absolute_angle(reference, pos, center).rem_euclid(360.0);
            }
        }
        let event = self.changed();
        tracing::trace!(
            angle = self.angle,
            point = %self.point,
            "{tool:?} update -> {}",
            event.color
        );
        event
    }

    /// Move the shade point, clamped to the square. A NaN position leaves
    /// the point unchanged.
    pub fn set_point(&mut self, pos: Vec2) -> ColorChanged {
        self.place_point(pos);
        self.changed()
    }

    /// Set the ring angle, normalized into `[0, 360)`. Non-finite values
    /// leave the angle unchanged.
    pub fn set_angle(&mut self, degrees: f32) -> ColorChanged {
        if degrees.is_finite() {
            self.angle = degrees.rem_euclid(360.0);
        }
        self.changed()
    }

    fn place_point(&mut self, pos: Vec2) {
        if pos.is_nan() {
            tracing::trace!("ignoring NaN shade point {pos}");
            return;
        }
        self.point = self.layout.shade.clamp(pos);
    }

    /// Derive angle and point from a preset color.
    ///
    /// Achromatic colors have no hue and put the ring at 0°.
    pub fn set_current_color(&mut self, color: Rgb) -> ColorChanged {
        self.angle = match hue::inverse(color) {
            Some(degrees) => (360.0 - degrees).rem_euclid(360.0),
            None => 0.0,
        };
        let shade = self.layout.shade;
        self.place_point(shade.origin + shade::invert(color, shade.size));

        let event = self.changed();
        tracing::debug!(
            "preset {color} -> angle {}, point {}, displays {}",
            self.angle,
            self.point,
            event.color
        );
        event
    }

    /// Unshaded ring color at the current angle.
    pub fn wheel_color(&self) -> Rgb {
        hue::forward(360.0 - self.angle)
    }

    /// The selected color.
    pub fn current_color(&self) -> Rgb {
        let shade = self.layout.shade;
        shade::apply(self.wheel_color(), shade.relative(self.point), shade.size)
    }

    /// `#rrggbb` name of the selected color.
    pub fn hex_name(&self) -> String {
        self.current_color().hex_name()
    }

    /// Endpoints of the ring indicator line, inner then outer.
    pub fn ring_indicator(&self) -> (Vec2, Vec2) {
        let center = self.layout.center();
        let [inner, outer] = self.layout.indicator_radii;
        (
            point_on_ring(center, self.angle, inner),
            point_on_ring(center, self.angle, outer),
        )
    }

    /// Position of the shade square indicator dot.
    pub fn square_indicator(&self) -> Vec2 {
        self.point
    }

    pub fn snapshot(&self) -> WheelState {
        WheelState {
            angle: self.angle,
            point: self.point,
            wheel_color: self.wheel_color(),
            color: self.current_color(),
        }
    }

    fn changed(&self) -> ColorChanged {
        ColorChanged {
            color: self.current_color(),
        }
    }
}
