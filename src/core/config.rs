use crate::math::{Cuboid, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Which contact faces are allowed to collide.
///
/// On the world this gates collisions against the world bounds (for example
/// `down = false` lets bodies fall through the floor of the bounds cuboid);
/// on a body it gates pairwise contacts on the corresponding face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CheckCollision {
    pub up: bool,
    pub down: bool,
    pub front_x: bool,
    pub front_y: bool,
    pub back_x: bool,
    pub back_y: bool,
}

impl Default for CheckCollision {
    fn default() -> Self {
        Self {
            up: true,
            down: true,
            front_x: true,
            front_y: true,
            back_x: true,
            back_y: true,
        }
    }
}

/// Configuration parameters for the physics world
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldConfig {
    /// The world gravity vector, applied to every body that allows gravity
    pub gravity: Vector3,

    /// The cuboid inside of which the physics world exists
    pub bounds: Cuboid,

    /// Which world-bounds faces bodies may collide with
    pub check_collision: CheckCollision,

    /// Maximum number of objects per octree node before it subdivides
    pub max_objects: usize,

    /// Maximum subdivision depth of the octree
    pub max_levels: usize,

    /// A bias added to the per-tick displacement when validating a computed
    /// overlap; penetrations deeper than this are treated as tunnelling and
    /// ignored
    pub overlap_bias: f32,

    /// If true, separation always resolves the X and Y axes before Z instead
    /// of consulting the gravity totals
    pub force_xy: bool,

    /// If true, the octree is never used and broad phase degrades to a linear
    /// scan; handy for small, tightly packed worlds
    pub skip_tree: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector3::zero(),
            bounds: Cuboid::new(0.0, 0.0, 0.0, 512.0, 512.0, 512.0),
            check_collision: CheckCollision::default(),
            max_objects: 10,
            max_levels: 4,
            overlap_bias: 4.0,
            force_xy: false,
            skip_tree: false,
        }
    }
}
