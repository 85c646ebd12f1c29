//! Huewheel Core — color math behind a hue ring / shade square picker.
//!
//! Converts pointer positions into colors and preset colors back into
//! pointer positions. The hosting UI owns the window and forwards pointer
//! events to a [`ColorWheel`]; nothing here depends on a UI framework.

pub mod color;
pub mod error;
pub mod geometry;
pub mod hue;
pub mod render;
pub mod shade;
pub mod widget;

// Re-exports for convenience.
pub use color::Rgb;
pub use error::{ColorError, GeometryError, LayoutError, WheelError};
pub use geometry::Quadrant;
pub use widget::{ColorChanged, ColorWheel, DragTool, ShadeRect, WheelLayout, WheelState};
