use crate::math::{Vector2, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The classic 2:1 dimetric projection angle, `atan(0.5)`
pub const CLASSIC_PROJECTION_ANGLE: f32 = 0.463_647_6;

/// Axonometric projector mapping 3D isometric positions to 2D screen space.
///
/// This is a pure coordinate transform; the collision core never consults it.
/// Only the distance/angle/move-to helpers on [`crate::World`] use it to
/// resolve screen-space points back into the isometric plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Projector {
    /// Screen-space origin the projection is anchored to
    pub origin: Vector2,

    /// The projection angle in radians
    pub projection_angle: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            origin: Vector2::zero(),
            projection_angle: CLASSIC_PROJECTION_ANGLE,
        }
    }
}

impl Projector {
    /// Creates a projector with the given screen origin and projection angle
    pub fn new(origin: Vector2, projection_angle: f32) -> Self {
        Self { origin, projection_angle }
    }

    /// Projects an isometric 3D point into 2D screen space
    pub fn project(&self, point: &Vector3) -> Vector2 {
        Vector2::new(
            (point.x - point.y) * self.projection_angle.cos() + self.origin.x,
            (point.x + point.y) * self.projection_angle.sin() - point.z + self.origin.y,
        )
    }

    /// Unprojects a 2D screen point back into isometric 3D space at the
    /// given z elevation
    pub fn unproject(&self, point: &Vector2, z: f32) -> Vector3 {
        let a = (point.x - self.origin.x) / self.projection_angle.cos();
        let b = (point.y - self.origin.y + z) / self.projection_angle.sin();

        Vector3::new((a + b) * 0.5, (b - a) * 0.5, z)
    }
}
