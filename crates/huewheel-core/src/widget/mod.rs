//! Interactive wheel state: layout, pointer gestures and emitted events.

pub mod events;
pub mod layout;
pub mod wheel;

pub use events::{ColorChanged, DragTool};
pub use layout::{ShadeRect, WheelLayout};
pub use wheel::{ColorWheel, WheelState};
