use crate::core::BodyHandle;
use crate::math::Vector3;

/// The inbound surface a host scene-graph object exposes to the physics
/// world.
///
/// The world only ever reads the entity's isometric position and 2D display
/// metrics, writes its position back after a tick, and stores the body handle
/// on it. Display objects that contain other display objects expose them
/// through [`PhysicsEntity::children_mut`] so `enable` can recurse.
pub trait PhysicsEntity {
    /// The entity's isometric 3D position
    fn iso_position(&self) -> Vector3;

    /// Moves the entity to a new isometric position
    fn set_iso_position(&mut self, position: Vector3);

    /// The entity's unscaled 2D display size `(width, height)`
    fn size(&self) -> (f32, f32);

    /// The entity's display scale `(x, y)`
    fn scale(&self) -> (f32, f32) {
        (1.0, 1.0)
    }

    /// The entity's anchor point `(x, y)` in [0, 1] display-space
    fn anchor(&self) -> (f32, f32) {
        (0.5, 0.5)
    }

    /// The handle of the entity's physics body, if one has been enabled
    fn body(&self) -> Option<BodyHandle>;

    /// Stores the handle of the entity's physics body
    fn set_body(&mut self, handle: Option<BodyHandle>);

    /// The entity's child display objects
    fn children_mut(&mut self) -> Vec<&mut dyn PhysicsEntity> {
        Vec::new()
    }
}
