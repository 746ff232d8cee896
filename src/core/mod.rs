pub mod config;
pub mod storage;
pub mod entity;
pub mod world;

pub use self::config::{CheckCollision, WorldConfig};
pub use self::entity::PhysicsEntity;
pub use self::storage::BodyStorage;
pub use self::world::{CollideCallback, ProcessCallback, SphericalAngles, Target, World};

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// The raw pool index behind this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
