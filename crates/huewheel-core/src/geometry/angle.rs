//! Pointer angle around the wheel center.
//!
//! Angles are measured in widget space (y grows downward), clockwise from the
//! positive x axis, in degrees. The angle of a pointer `b` is found from the
//! right triangle formed with the center `c` and the reference point `a`,
//! which sits on the horizontal line through `c` directly above/below `b`:
//!
//! ```text
//!        a ─────── c          θ = atan(|ab| / |ac|)
//!        │
//!        b
//! ```
//!
//! The quadrant then selects which branch of the circle θ belongs to.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Region of the plane around the center, used to pick the trig branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Left of the center, on or above the reference line.
    Q0,
    /// Right of (or on) the center, above the reference line.
    Q1,
    /// Right of the center, on or below the reference line.
    Q2,
    /// Left of (or on) the center, on or below the reference line.
    Q3,
}

impl Quadrant {
    /// Classify `b` against the reference point `a` and the center `c`.
    ///
    /// The predicates overlap on the boundaries; the first match in the order
    /// Q0, Q1, Q2, Q3 wins.
    pub fn classify(a: Vec2, b: Vec2, c: Vec2) -> Self {
        if b.y <= a.y && b.x < c.x {
            Self::Q0
        } else if b.y < a.y && b.x >= c.x {
            Self::Q1
        } else if b.y >= a.y && b.x > c.x {
            Self::Q2
        } else {
            // b.y >= a.y && b.x <= c.x is the only case left.
            Self::Q3
        }
    }

    pub const fn index(self) -> u32 {
        match self {
            Self::Q0 => 0,
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
        }
    }

    /// Angle used when the reference point coincides with the center.
    fn degenerate_angle(self) -> f32 {
        360.0 - 90.0 * self.index() as f32
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Round to one decimal place, half away from zero.
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Angle at `c` of the triangle `a`, `b`, `c`, in degrees.
///
/// Fails when `a` and `c` coincide, since the adjacent side has zero length.
pub fn angle(a: Vec2, b: Vec2, c: Vec2) -> Result<f32, GeometryError> {
    let adjacent = distance(a, c);
    if adjacent == 0.0 {
        return Err(GeometryError::DegenerateReference);
    }
    Ok((distance(a, b) / adjacent).atan().to_degrees())
}

/// Full-circle angle of `b` around `c`, rounded to one decimal.
///
/// Never fails: a degenerate reference (pointer straight above or below the
/// center) or a non-finite input resolves to `360 − 90 × quadrant`.
pub fn absolute_angle(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let quadrant = Quadrant::classify(a, b, c);
    let theta = match angle(a, b, c) {
        Ok(theta) if theta.is_finite() => theta,
        other => {
            tracing::trace!(?other, "no usable angle, falling back for {quadrant:?}");
            return quadrant.degenerate_angle();
        }
    };

    match quadrant {
        Quadrant::Q0 => round_tenth(180.0 + theta),
        Quadrant::Q1 => round_tenth(270.0 + (90.0 - theta)),
        Quadrant::Q2 => round_tenth(theta),
        Quadrant::Q3 => round_tenth(90.0 + (90.0 - theta)).abs(),
    }
}

/// Point at `radius` from `center` along `angle_deg` (clockwise, y down).
pub fn point_on_ring(center: Vec2, angle_deg: f32, radius: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    center + Vec2::new(cos, sin) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;
    const CENTER: Vec2 = Vec2::new(50.0, 50.0);

    /// Angle of a pointer the way the wheel computes it.
    fn pointer_angle(p: Vec2) -> f32 {
        absolute_angle(Vec2::new(p.x, CENTER.y), p, CENTER)
    }

    #[test]
    fn test_quadrant_first_match_wins() {
        let a = Vec2::new(0.0, 0.0);
        let c = Vec2::new(10.0, 10.0);
        assert_eq!(Quadrant::classify(a, Vec2::new(5.0, -5.0), c), Quadrant::Q0);
        // On the reference line, left of center: Q0 before Q3.
        assert_eq!(Quadrant::classify(a, Vec2::new(5.0, 0.0), c), Quadrant::Q0);
        // On the reference line, right of center: Q2.
        assert_eq!(Quadrant::classify(a, Vec2::new(15.0, 0.0), c), Quadrant::Q2);
        // Exactly at the center column, below: Q3.
        assert_eq!(Quadrant::classify(a, Vec2::new(10.0, 3.0), c), Quadrant::Q3);
        assert_eq!(Quadrant::classify(a, Vec2::new(10.0, -3.0), c), Quadrant::Q1);
    }

    #[test]
    fn test_quadrant_index() {
        let indices: Vec<u32> = [Quadrant::Q0, Quadrant::Q1, Quadrant::Q2, Quadrant::Q3]
            .into_iter()
            .map(Quadrant::index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_angle_degenerate_reference() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(
            angle(p, Vec2::new(9.0, 9.0), p),
            Err(GeometryError::DegenerateReference)
        );
    }

    #[test]
    fn test_angle_right_triangle() {
        let theta = angle(Vec2::new(80.0, 50.0), Vec2::new(80.0, 80.0), CENTER).unwrap();
        assert!((theta - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_absolute_angle_cardinal_directions() {
        assert_eq!(pointer_angle(Vec2::new(80.0, 50.0)), 0.0);
        assert_eq!(pointer_angle(Vec2::new(50.0, 80.0)), 90.0);
        assert_eq!(pointer_angle(Vec2::new(20.0, 50.0)), 180.0);
        assert_eq!(pointer_angle(Vec2::new(50.0, 20.0)), 270.0);
    }

    #[test]
    fn test_absolute_angle_diagonals() {
        assert!((pointer_angle(Vec2::new(80.0, 80.0)) - 45.0).abs() < EPSILON);
        assert!((pointer_angle(Vec2::new(20.0, 80.0)) - 135.0).abs() < EPSILON);
        assert!((pointer_angle(Vec2::new(20.0, 20.0)) - 225.0).abs() < EPSILON);
        assert!((pointer_angle(Vec2::new(80.0, 20.0)) - 315.0).abs() < EPSILON);
    }

    #[test]
    fn test_absolute_angle_rounds_to_one_decimal() {
        // atan(10 / 30) = 18.4349°
        assert!((pointer_angle(Vec2::new(80.0, 60.0)) - 18.4).abs() < EPSILON);
    }

    #[test]
    fn test_absolute_angle_at_center_is_finite() {
        let a = pointer_angle(CENTER);
        assert!(a.is_finite());
        assert_eq!(a, 90.0);
    }

    #[test]
    fn test_absolute_angle_non_finite_pointer_falls_back() {
        // NaN compares false everywhere and lands in Q3.
        assert_eq!(pointer_angle(Vec2::new(f32::NAN, 10.0)), 90.0);
        // inf − inf is NaN; the pointer is below and right of center, Q2.
        assert_eq!(pointer_angle(Vec2::new(f32::INFINITY, f32::INFINITY)), 180.0);
        assert!(pointer_angle(Vec2::new(f32::NEG_INFINITY, 0.0)).is_finite());
    }

    #[test]
    fn test_point_on_ring_follows_pointer_angle() {
        let p = point_on_ring(CENTER, 0.0, 10.0);
        assert!((p - Vec2::new(60.0, 50.0)).length() < EPSILON);
        let p = point_on_ring(CENTER, 90.0, 10.0);
        assert!((p - Vec2::new(50.0, 60.0)).length() < EPSILON);

        let pointer = Vec2::new(20.0, 20.0);
        let back = point_on_ring(CENTER, pointer_angle(pointer), distance(pointer, CENTER));
        assert!((back - pointer).length() < 0.1);
    }
}
