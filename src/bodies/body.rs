use crate::bodies::{Blocked, Touching};
use crate::core::CheckCollision;
use crate::error::PhysicsError;
use crate::math::{Cuboid, Vector3};
use crate::Result;

/// Default cap applied to each velocity component
const DEFAULT_MAX_VELOCITY: f32 = 10_000.0;

/// Default cap applied to angular velocity
const DEFAULT_MAX_ANGULAR: f32 = 1_000.0;

/// Per-entity physics state: an axis-aligned cuboid with linear and scalar
/// angular motion.
///
/// A body is created through [`crate::World::enable_body`] (one per entity)
/// and lives in the world's body pool; the owning entity keeps the handle.
/// Positions are bottom-rear-corner anchored like [`Cuboid`].
pub struct Body {
    /// Whether this body takes part in motion integration and collision
    pub enable: bool,

    /// Current position (bottom-rear corner of the bounds)
    pub pos: Vector3,

    /// Position at the start of the current tick
    prev: Vector3,

    /// Extent along the x axis
    width_x: f32,

    /// Extent along the y axis
    width_y: f32,

    /// Extent along the z axis
    height: f32,

    /// Offset from the owning entity's isometric position to `pos`
    entity_offset: Vector3,

    /// Linear velocity in units per second
    pub velocity: Vector3,

    /// Linear acceleration in units per second squared
    pub acceleration: Vector3,

    /// Deceleration applied per axis when no acceleration is set
    pub drag: Vector3,

    /// Body-local gravity, added on top of the world gravity
    pub gravity: Vector3,

    /// Per-axis restitution applied during separation, conventionally in [0, 1]
    pub bounce: Vector3,

    /// Absolute per-axis velocity cap
    pub max_velocity: Vector3,

    /// Rotation in radians
    pub rotation: f32,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Angular acceleration in radians per second squared
    pub angular_acceleration: f32,

    /// Angular deceleration applied when no angular acceleration is set
    pub angular_drag: f32,

    /// Absolute angular velocity cap
    pub max_angular: f32,

    /// Mass used by the elastic velocity exchange, always positive
    mass: f32,

    /// An immovable body never receives positional or velocity correction
    pub immovable: bool,

    /// Whether position deltas of this body drag riders along (moving platforms)
    pub moves: bool,

    /// Whether world and body-local gravity are applied
    pub allow_gravity: bool,

    /// Whether angular motion is integrated
    pub allow_rotation: bool,

    /// Whether this body collides with the world bounds cuboid
    pub collide_world_bounds: bool,

    /// Forces the linear broad-phase scan for this body
    pub skip_tree: bool,

    /// Caller-owned X-axis resolution: record overlap but do not separate
    pub custom_separate_x: bool,

    /// Caller-owned Y-axis resolution
    pub custom_separate_y: bool,

    /// Caller-owned Z-axis resolution
    pub custom_separate_z: bool,

    /// Which contact faces of this body may collide
    pub check_collision: CheckCollision,

    /// Set when this body overlapped another with no relative motion this tick
    pub embedded: bool,

    /// Faces that made contact this tick
    pub touching: Touching,

    /// Faces that made contact on the previous tick
    pub was_touching: Touching,

    /// Faces stopped by the world bounds this tick
    pub blocked: Blocked,

    /// Penetration depth recorded by the last X-axis separation
    pub overlap_x: f32,

    /// Penetration depth recorded by the last Y-axis separation
    pub overlap_y: f32,

    /// Penetration depth recorded by the last Z-axis separation
    pub overlap_z: f32,
}

impl Body {
    /// Creates a new enabled body occupying the given bounds
    pub fn new(bounds: Cuboid) -> Self {
        Self {
            enable: true,
            pos: Vector3::new(bounds.x, bounds.y, bounds.z),
            prev: Vector3::new(bounds.x, bounds.y, bounds.z),
            width_x: bounds.width_x,
            width_y: bounds.width_y,
            height: bounds.height,
            entity_offset: Vector3::zero(),
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            drag: Vector3::zero(),
            gravity: Vector3::zero(),
            bounce: Vector3::zero(),
            max_velocity: Vector3::new(
                DEFAULT_MAX_VELOCITY,
                DEFAULT_MAX_VELOCITY,
                DEFAULT_MAX_VELOCITY,
            ),
            rotation: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            angular_drag: 0.0,
            max_angular: DEFAULT_MAX_ANGULAR,
            mass: 1.0,
            immovable: false,
            moves: true,
            allow_gravity: true,
            allow_rotation: true,
            collide_world_bounds: false,
            skip_tree: false,
            custom_separate_x: false,
            custom_separate_y: false,
            custom_separate_z: false,
            check_collision: CheckCollision::default(),
            embedded: false,
            touching: Touching::empty(),
            was_touching: Touching::empty(),
            blocked: Blocked::empty(),
            overlap_x: 0.0,
            overlap_y: 0.0,
            overlap_z: 0.0,
        }
    }

    /// The body's mass
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Sets the body's mass, rejecting non-positive values
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        if mass <= 0.0 {
            return Err(PhysicsError::InvalidConfiguration(format!(
                "mass must be positive, got {mass}"
            )));
        }

        self.mass = mass;
        Ok(())
    }

    /// The extent along the x axis
    #[inline]
    pub fn width_x(&self) -> f32 {
        self.width_x
    }

    /// The extent along the y axis
    #[inline]
    pub fn width_y(&self) -> f32 {
        self.width_y
    }

    /// The extent along the z axis
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Resizes the body's bounds, rejecting negative extents
    pub fn set_size(&mut self, width_x: f32, width_y: f32, height: f32) -> Result<()> {
        if width_x < 0.0 || width_y < 0.0 || height < 0.0 {
            return Err(PhysicsError::InvalidConfiguration(format!(
                "extents must be non-negative, got ({width_x}, {width_y}, {height})"
            )));
        }

        self.width_x = width_x;
        self.width_y = width_y;
        self.height = height;
        Ok(())
    }

    /// The position at the start of the current tick
    #[inline]
    pub fn prev(&self) -> Vector3 {
        self.prev
    }

    /// The offset from the owning entity's isometric position to the body
    /// position, fixed when the body is enabled
    #[inline]
    pub fn entity_offset(&self) -> Vector3 {
        self.entity_offset
    }

    pub(crate) fn set_entity_offset(&mut self, offset: Vector3) {
        self.entity_offset = offset;
    }

    /// The x coordinate of the front face
    #[inline]
    pub fn front_x(&self) -> f32 {
        self.pos.x + self.width_x
    }

    /// The y coordinate of the front face
    #[inline]
    pub fn front_y(&self) -> f32 {
        self.pos.y + self.width_y
    }

    /// The z coordinate of the top face
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.z + self.height
    }

    /// The current bounds as a cuboid
    #[inline]
    pub fn bounds(&self) -> Cuboid {
        Cuboid::new(
            self.pos.x,
            self.pos.y,
            self.pos.z,
            self.width_x,
            self.width_y,
            self.height,
        )
    }

    /// The center of the body's bounds
    #[inline]
    pub fn center(&self) -> Vector3 {
        self.bounds().center()
    }

    /// X displacement since the start of the tick
    #[inline]
    pub fn delta_x(&self) -> f32 {
        self.pos.x - self.prev.x
    }

    /// Y displacement since the start of the tick
    #[inline]
    pub fn delta_y(&self) -> f32 {
        self.pos.y - self.prev.y
    }

    /// Z displacement since the start of the tick
    #[inline]
    pub fn delta_z(&self) -> f32 {
        self.pos.z - self.prev.z
    }

    /// Absolute X displacement since the start of the tick
    #[inline]
    pub fn delta_abs_x(&self) -> f32 {
        self.delta_x().abs()
    }

    /// Absolute Y displacement since the start of the tick
    #[inline]
    pub fn delta_abs_y(&self) -> f32 {
        self.delta_y().abs()
    }

    /// Absolute Z displacement since the start of the tick
    #[inline]
    pub fn delta_abs_z(&self) -> f32 {
        self.delta_z().abs()
    }

    /// Moves the body to a new position and zeroes all motion state
    pub fn reset(&mut self, x: f32, y: f32, z: f32) {
        self.pos.set_to(x, y, z);
        self.prev.copy_from(&self.pos);
        self.velocity = Vector3::zero();
        self.acceleration = Vector3::zero();
        self.angular_velocity = 0.0;
        self.angular_acceleration = 0.0;
    }

    /// Integrates one tick of motion.
    ///
    /// Clears the per-tick transient state, stores `prev`, advances angular
    /// then linear velocity (gravity, then acceleration or drag, then the
    /// cap) and applies the resulting displacement. The world drives this
    /// once per frame before any collision processing.
    pub fn update(&mut self, world_gravity: Vector3, delta: f32) {
        self.was_touching = self.touching;
        self.touching = Touching::empty();
        self.blocked = Blocked::empty();
        self.embedded = false;
        self.overlap_x = 0.0;
        self.overlap_y = 0.0;
        self.overlap_z = 0.0;

        if !self.moves {
            return;
        }

        self.prev.copy_from(&self.pos);

        if self.allow_rotation {
            self.angular_velocity = compute_velocity(
                self.angular_velocity,
                self.angular_acceleration,
                self.angular_drag,
                self.max_angular,
                0.0,
                delta,
            );
            self.rotation += self.angular_velocity * delta;
        }

        let gravity = if self.allow_gravity {
            world_gravity + self.gravity
        } else {
            Vector3::zero()
        };

        self.velocity.x = compute_velocity(
            self.velocity.x,
            self.acceleration.x,
            self.drag.x,
            self.max_velocity.x,
            gravity.x,
            delta,
        );
        self.velocity.y = compute_velocity(
            self.velocity.y,
            self.acceleration.y,
            self.drag.y,
            self.max_velocity.y,
            gravity.y,
            delta,
        );
        self.velocity.z = compute_velocity(
            self.velocity.z,
            self.acceleration.z,
            self.drag.z,
            self.max_velocity.z,
            gravity.z,
            delta,
        );

        self.pos.x += self.velocity.x * delta;
        self.pos.y += self.velocity.y * delta;
        self.pos.z += self.velocity.z * delta;
    }

    /// Clamps the body against the world bounds cuboid, reflecting velocity
    /// through the per-axis bounce and recording the blocked faces.
    ///
    /// Faces disabled in the world's `check_collision` config pass through.
    pub fn check_world_bounds(&mut self, bounds: &Cuboid, check: &CheckCollision) {
        if self.pos.x < bounds.x && check.back_x {
            self.pos.x = bounds.x;
            self.velocity.x *= -self.bounce.x;
            self.blocked |= Blocked::BACK_X;
        } else if self.front_x() > bounds.front_x() && check.front_x {
            self.pos.x = bounds.front_x() - self.width_x;
            self.velocity.x *= -self.bounce.x;
            self.blocked |= Blocked::FRONT_X;
        }

        if self.pos.y < bounds.y && check.back_y {
            self.pos.y = bounds.y;
            self.velocity.y *= -self.bounce.y;
            self.blocked |= Blocked::BACK_Y;
        } else if self.front_y() > bounds.front_y() && check.front_y {
            self.pos.y = bounds.front_y() - self.width_y;
            self.velocity.y *= -self.bounce.y;
            self.blocked |= Blocked::FRONT_Y;
        }

        if self.pos.z < bounds.z && check.down {
            self.pos.z = bounds.z;
            self.velocity.z *= -self.bounce.z;
            self.blocked |= Blocked::DOWN;
        } else if self.top() > bounds.top() && check.up {
            self.pos.z = bounds.top() - self.height;
            self.velocity.z *= -self.bounce.z;
            self.blocked |= Blocked::UP;
        }
    }

    /// Commits the tick: returns the net displacement for the owning entity
    /// and refreshes `prev` for the next tick
    pub fn post_update(&mut self) -> Vector3 {
        let delta = self.pos - self.prev;
        self.prev.copy_from(&self.pos);
        delta
    }

    /// True if the body rests on something below it
    #[inline]
    pub fn on_floor(&self) -> bool {
        self.touching.contains(Touching::DOWN)
    }

    /// True if either horizontal face made contact this tick
    #[inline]
    pub fn on_wall(&self) -> bool {
        self.touching.intersects(
            Touching::FRONT_X | Touching::BACK_X | Touching::FRONT_Y | Touching::BACK_Y,
        )
    }
}

/// Advances one velocity component by gravity, then acceleration or drag,
/// then clamps it to `[-max, max]`.
///
/// Drag decelerates towards zero and never overshoots it.
fn compute_velocity(
    mut velocity: f32,
    acceleration: f32,
    drag: f32,
    max: f32,
    gravity: f32,
    delta: f32,
) -> f32 {
    velocity += gravity * delta;

    if acceleration != 0.0 {
        velocity += acceleration * delta;
    } else if drag != 0.0 {
        let drag_step = drag * delta;

        if velocity - drag_step > 0.0 {
            velocity -= drag_step;
        } else if velocity + drag_step < 0.0 {
            velocity += drag_step;
        } else {
            velocity = 0.0;
        }
    }

    crate::math::clamp(velocity, -max, max)
}
