//! Values exchanged with the host UI on pointer gestures.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Which control a gesture manipulates. Chosen once, when the press lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragTool {
    /// Rotating the hue ring.
    Ring,
    /// Moving the dot inside the shade square.
    Square,
}

/// Emitted after every mutation of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChanged {
    /// The wheel's color after the mutation.
    pub color: Rgb,
}
