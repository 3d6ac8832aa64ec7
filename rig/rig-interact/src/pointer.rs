//! Pointer samples, world rays and the viewpoint.
//!
//! The interaction session never talks to an input device or a camera
//! directly; it works on these small value types, produced by the host
//! through the [`Viewport`](crate::Viewport) trait.

use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D pointer position in host screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerPos {
    /// Horizontal screen coordinate.
    pub x: f64,
    /// Vertical screen coordinate.
    pub y: f64,
}

impl PointerPos {
    /// Create a pointer position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A ray in world space, used to place dragged entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Point3<f64>,
    /// Unit direction.
    pub direction: Unit<Vector3<f64>>,
}

impl Ray {
    /// Create a ray from an origin and a unit direction.
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Unit<Vector3<f64>>) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from an origin and an arbitrary direction vector.
    ///
    /// Returns `None` for a degenerate (near-zero) direction.
    #[must_use]
    pub fn from_dir(origin: Point3<f64>, direction: Vector3<f64>) -> Option<Self> {
        Unit::try_new(direction, 1e-10).map(|direction| Self { origin, direction })
    }

    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction.into_inner() * t
    }
}

/// Position and orientation of the player's viewpoint.
///
/// Queried once at drag start (to capture the drag distance) and once per
/// drag sample (to anchor the projected pointer ray).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewpoint {
    /// World position of the viewpoint.
    pub position: Point3<f64>,
    /// World orientation of the viewpoint.
    pub rotation: UnitQuaternion<f64>,
}

impl Viewpoint {
    /// Create a viewpoint.
    #[must_use]
    pub const fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Create a viewpoint at a position with identity orientation.
    #[must_use]
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Distance from the viewpoint to a world point.
    #[must_use]
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        (point - self.position).norm()
    }
}
