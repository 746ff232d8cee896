pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{World, WorldConfig, BodyHandle, CheckCollision, PhysicsEntity, Target};
pub use crate::bodies::{Body, Touching, Blocked};
pub use crate::collision::Octree;
pub use crate::math::{Vector2, Vector3, Cuboid, Projector};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid configuration: {0}")]
        InvalidConfiguration(String),

        #[error("Precondition violation: {0}")]
        PreconditionViolation(String),

        #[error("Body with handle {0:?} not found")]
        BodyNotFound(crate::core::BodyHandle),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
