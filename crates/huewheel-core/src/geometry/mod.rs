//! Planar geometry used to turn pointer positions into ring angles.

pub mod angle;

pub use angle::{Quadrant, absolute_angle, angle, distance, point_on_ring, round_tenth};
