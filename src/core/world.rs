use crate::bodies::{Body, Touching};
use crate::collision::Octree;
use crate::core::{BodyHandle, BodyStorage, PhysicsEntity, WorldConfig};
use crate::error::PhysicsError;
use crate::math::{Cuboid, Projector, Vector2, Vector3};
use crate::Result;

/// A collision target: a single body or a group of bodies
#[derive(Clone, Copy)]
pub enum Target<'a> {
    /// One body
    Body(BodyHandle),
    /// A group of bodies, in the caller's order
    Group(&'a [BodyHandle]),
}

/// Callback invoked for every pair that collided (or overlapped)
pub type CollideCallback<'a, 'f> = &'a mut (dyn FnMut(BodyHandle, BodyHandle) + 'f);

/// Gate callback: runs before separation, returning false skips the pair
pub type ProcessCallback<'a, 'f> = &'a mut (dyn FnMut(&Body, &Body) -> bool + 'f);

/// Spherical-polar angles from one point to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalAngles {
    /// Radial distance
    pub r: f32,
    /// Azimuthal angle in the iso x/y plane, in radians
    pub theta: f32,
    /// Polar angle from the +z axis, in radians
    pub phi: f32,
}

/// The physics world: owns the body pool, the broad-phase octree and the
/// simulation configuration, and drives the per-frame tick.
///
/// Each frame the host calls [`World::update`] (motion integration) followed
/// by [`World::post_update`] (collision resolution and tick commit), in that
/// order, from a single thread. Iteration is always in body insertion order
/// and pair enumeration is i<j, so identical initial conditions replay
/// identically.
pub struct World {
    /// All bodies in the world
    bodies: BodyStorage,

    /// Configuration for the simulation
    config: WorldConfig,

    /// The broad-phase octree, rebuilt per query cycle
    octree: Octree,

    /// The host's clock at the last update
    time: f32,
}

impl World {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        let octree = Octree::new(config.bounds, config.max_objects, config.max_levels);

        Self {
            bodies: BodyStorage::new(),
            config,
            octree,
            time: 0.0,
        }
    }

    /// The host clock value passed to the last update
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the world configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns a mutable reference to the world configuration
    pub fn config_mut(&mut self) -> &mut WorldConfig {
        &mut self.config
    }

    /// Sets the world gravity vector
    pub fn set_gravity(&mut self, gravity: Vector3) {
        self.config.gravity = gravity;
    }

    /// The world gravity vector
    pub fn gravity(&self) -> Vector3 {
        self.config.gravity
    }

    /// Updates the extent of the physics world
    pub fn set_bounds(&mut self, x: f32, y: f32, z: f32, width_x: f32, width_y: f32, height: f32) {
        self.config.bounds.set_to(x, y, z, width_x, width_y, height);
    }

    /// Adds a body to the world and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Removes a body from the world
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        self.bodies
            .remove(handle)
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the handles of all bodies in insertion order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.bodies.handles()
    }

    /// Clears the world of all bodies, invalidating every handle
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Creates physics bodies on the entity and, when `recurse` is true, on
    /// every child reachable through the display list.
    ///
    /// Idempotent: entities that already own a body are left untouched.
    pub fn enable(&mut self, entity: &mut dyn PhysicsEntity, recurse: bool) {
        self.enable_body(entity);

        if recurse {
            for child in entity.children_mut() {
                self.enable(child, true);
            }
        }
    }

    /// Creates a physics body on a single entity, deriving its cuboid bounds
    /// from the entity's 2D display metrics.
    ///
    /// An entity can own at most one body; if one exists its handle is
    /// returned unchanged.
    pub fn enable_body(&mut self, entity: &mut dyn PhysicsEntity) -> BodyHandle {
        if let Some(handle) = entity.body() {
            return handle;
        }

        let bounds = derive_bounds(entity);
        let iso = entity.iso_position();

        let mut body = Body::new(bounds);
        body.set_entity_offset(Vector3::new(bounds.x, bounds.y, bounds.z) - iso);

        let handle = self.bodies.add(body);
        entity.set_body(Some(handle));

        handle
    }

    /// Writes a body's position back to its owning entity's iso-position
    pub fn sync_entity(&self, entity: &mut dyn PhysicsEntity) -> Result<()> {
        let handle = entity.body().ok_or_else(|| {
            PhysicsError::PreconditionViolation("entity has no physics body".into())
        })?;
        let body = self.bodies.get_body(handle)?;

        entity.set_iso_position(body.pos - body.entity_offset());
        Ok(())
    }

    /// Integrates one tick of motion for every enabled body.
    ///
    /// `time` is the host clock (stored, not consumed); `delta` is the frame
    /// time in seconds.
    pub fn update(&mut self, time: f32, delta: f32) {
        self.time = time;

        let gravity = self.config.gravity;
        let bounds = self.config.bounds;
        let check = self.config.check_collision;

        for (_, body) in self.bodies.iter_mut() {
            if !body.enable {
                continue;
            }

            body.update(gravity, delta);

            if body.collide_world_bounds {
                body.check_world_bounds(&bounds, &check);
            }
        }
    }

    /// Resolves collisions between all enabled bodies and commits the tick.
    ///
    /// Builds the octree once from the start-of-pass bounds, retrieves each
    /// body's candidates and separates every unordered pair exactly once,
    /// lower handle first. The enumeration order is deterministic, so
    /// identical initial conditions replay identically. Afterwards each
    /// body's `prev` is refreshed for the next tick; touching and overlap
    /// state written here stays readable until the next [`World::update`].
    pub fn post_update(&mut self) {
        let group: Vec<BodyHandle> = self
            .bodies
            .iter()
            .filter(|(_, body)| body.enable)
            .map(|(handle, _)| handle)
            .collect();

        let mut total = 0;

        if self.config.skip_tree {
            self.collide_group_vs_self(&group, None, None, false, &mut total);
        } else {
            self.octree.reset(
                self.config.bounds,
                self.config.max_objects,
                self.config.max_levels,
            );

            let entries = group.iter().filter_map(|&handle| {
                self.bodies.get(handle).map(|body| (handle, body.bounds()))
            });
            self.octree.populate(entries);

            for &handle in &group {
                let (skip_tree, query_bounds) = match self.bodies.get(handle) {
                    Some(body) => (body.skip_tree, body.bounds()),
                    None => continue,
                };

                let candidates = if skip_tree {
                    group.clone()
                } else {
                    self.octree.retrieve(&query_bounds)
                };

                // The lower handle of a pair owns its resolution
                for candidate in candidates {
                    if handle < candidate {
                        self.collide_body_vs_body(handle, candidate, None, None, false, &mut total);
                    }
                }
            }
        }

        for (_, body) in self.bodies.iter_mut() {
            if body.enable {
                body.post_update();
            }
        }
    }

    /// Checks for overlaps between two targets without separating them.
    ///
    /// Returns true if any pair intersected. `overlap_callback` runs per
    /// intersecting pair, gated by `process_callback` when supplied. Bodies
    /// are left byte-identical to before the call.
    pub fn overlap(
        &mut self,
        a: Target,
        b: Option<Target>,
        mut overlap_callback: Option<CollideCallback<'_, '_>>,
        mut process_callback: Option<ProcessCallback<'_, '_>>,
    ) -> bool {
        let mut total = 0;
        self.collide_handler(
            a,
            b,
            overlap_callback.as_deref_mut(),
            process_callback.as_deref_mut(),
            true,
            &mut total,
        );

        total > 0
    }

    /// Checks for collisions between two targets and separates every
    /// colliding pair.
    ///
    /// Returns true if any collision occurred. When `b` is `None` and `a` is
    /// a group, the group is collided against itself (each unordered pair
    /// once). `collide_callback` runs per colliding pair after separation,
    /// gated by `process_callback` when supplied.
    pub fn collide(
        &mut self,
        a: Target,
        b: Option<Target>,
        mut collide_callback: Option<CollideCallback<'_, '_>>,
        mut process_callback: Option<ProcessCallback<'_, '_>>,
    ) -> bool {
        let mut total = 0;
        self.collide_handler(
            a,
            b,
            collide_callback.as_deref_mut(),
            process_callback.as_deref_mut(),
            false,
            &mut total,
        );

        total > 0
    }

    /// Internal dispatch over the target variants
    fn collide_handler(
        &mut self,
        a: Target,
        b: Option<Target>,
        mut collide_cb: Option<CollideCallback<'_, '_>>,
        mut process_cb: Option<ProcessCallback<'_, '_>>,
        overlap_only: bool,
        total: &mut usize,
    ) {
        match (a, b) {
            (Target::Group(group), None) => {
                self.collide_group_vs_self(group, collide_cb, process_cb, overlap_only, total);
            }
            (Target::Body(_), None) => {}
            (Target::Body(h1), Some(Target::Body(h2))) => {
                self.collide_body_vs_body(h1, h2, collide_cb, process_cb, overlap_only, total);
            }
            (Target::Body(h), Some(Target::Group(group))) => {
                self.collide_body_vs_group(h, group, collide_cb, process_cb, overlap_only, total);
            }
            // The body is always the first callback parameter, whichever
            // side it was passed on.
            (Target::Group(group), Some(Target::Body(h))) => {
                self.collide_body_vs_group(h, group, collide_cb, process_cb, overlap_only, total);
            }
            (Target::Group(group_a), Some(Target::Group(group_b))) => {
                for &member in group_a {
                    self.collide_body_vs_group(
                        member,
                        group_b,
                        collide_cb.as_deref_mut(),
                        process_cb.as_deref_mut(),
                        overlap_only,
                        total,
                    );
                }
            }
        }
    }

    fn collide_body_vs_body(
        &mut self,
        h1: BodyHandle,
        h2: BodyHandle,
        collide_cb: Option<CollideCallback<'_, '_>>,
        process_cb: Option<ProcessCallback<'_, '_>>,
        overlap_only: bool,
        total: &mut usize,
    ) {
        if self.separate(h1, h2, process_cb, overlap_only) {
            if let Some(cb) = collide_cb {
                cb(h1, h2);
            }

            *total += 1;
        }
    }

    /// Broad phase for one body against a group: octree candidate retrieval
    /// unless the world or the body opts into the linear scan.
    fn collide_body_vs_group(
        &mut self,
        handle: BodyHandle,
        group: &[BodyHandle],
        mut collide_cb: Option<CollideCallback<'_, '_>>,
        mut process_cb: Option<ProcessCallback<'_, '_>>,
        overlap_only: bool,
        total: &mut usize,
    ) {
        if group.is_empty() {
            return;
        }

        let (skip_tree, query_bounds) = match self.bodies.get(handle) {
            Some(body) => (body.skip_tree || self.config.skip_tree, body.bounds()),
            None => return,
        };

        if skip_tree {
            for &member in group {
                if member != handle {
                    self.collide_body_vs_body(
                        handle,
                        member,
                        collide_cb.as_deref_mut(),
                        process_cb.as_deref_mut(),
                        overlap_only,
                        total,
                    );
                }
            }
            return;
        }

        self.octree.reset(
            self.config.bounds,
            self.config.max_objects,
            self.config.max_levels,
        );

        let entries = group.iter().filter_map(|&member| {
            self.bodies
                .get(member)
                .filter(|body| body.enable)
                .map(|body| (member, body.bounds()))
        });
        self.octree.populate(entries);

        let candidates = self.octree.retrieve(&query_bounds);

        for candidate in candidates {
            if candidate != handle {
                self.collide_body_vs_body(
                    handle,
                    candidate,
                    collide_cb.as_deref_mut(),
                    process_cb.as_deref_mut(),
                    overlap_only,
                    total,
                );
            }
        }
    }

    /// Collides a group against itself: every unordered i<j pair exactly once
    fn collide_group_vs_self(
        &mut self,
        group: &[BodyHandle],
        mut collide_cb: Option<CollideCallback<'_, '_>>,
        mut process_cb: Option<ProcessCallback<'_, '_>>,
        overlap_only: bool,
        total: &mut usize,
    ) {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                self.collide_body_vs_body(
                    group[i],
                    group[j],
                    collide_cb.as_deref_mut(),
                    process_cb.as_deref_mut(),
                    overlap_only,
                    total,
                );
            }
        }
    }

    /// Strict AABB intersection test on all three axes.
    ///
    /// Bodies that exactly share a face do not intersect.
    pub fn intersects(body1: &Body, body2: &Body) -> bool {
        if body1.front_x() <= body2.pos.x {
            return false;
        }

        if body1.front_y() <= body2.pos.y {
            return false;
        }

        if body1.pos.x >= body2.front_x() {
            return false;
        }

        if body1.pos.y >= body2.front_y() {
            return false;
        }

        if body1.top() <= body2.pos.z {
            return false;
        }

        if body1.pos.z >= body2.top() {
            return false;
        }

        true
    }

    /// The narrow-phase resolver for one pair.
    ///
    /// Skips disabled or non-intersecting pairs, consults the process gate,
    /// then resolves one axis: X→Y→Z when `force_xy` is set or the vertical
    /// gravity total is weaker than either horizontal total, otherwise
    /// Z→X→Y. The axis chain short-circuits, so at most one axis is
    /// corrected per call; diagonal penetrations converge over subsequent
    /// ticks.
    ///
    /// With `overlap_only` the pair is only tested, never mutated. Returns
    /// true if the bodies collided.
    pub fn separate(
        &mut self,
        h1: BodyHandle,
        h2: BodyHandle,
        process_cb: Option<ProcessCallback<'_, '_>>,
        overlap_only: bool,
    ) -> bool {
        let gravity = self.config.gravity;
        let overlap_bias = self.config.overlap_bias;
        let force_xy = self.config.force_xy;

        let Ok((body1, body2)) = self.bodies.get_pair_mut(h1, h2) else {
            return false;
        };

        if !body1.enable || !body2.enable || !Self::intersects(body1, body2) {
            return false;
        }

        if let Some(process) = process_cb {
            if !process(body1, body2) {
                return false;
            }
        }

        if overlap_only {
            return true;
        }

        let total = gravity + body1.gravity;
        let xy_first =
            force_xy || total.z.abs() < total.x.abs() || total.z.abs() < total.y.abs();

        if xy_first {
            separate_axis(body1, body2, Axis::X, overlap_bias, overlap_only)
                || separate_axis(body1, body2, Axis::Y, overlap_bias, overlap_only)
                || separate_axis(body1, body2, Axis::Z, overlap_bias, overlap_only)
        } else {
            separate_axis(body1, body2, Axis::Z, overlap_bias, overlap_only)
                || separate_axis(body1, body2, Axis::X, overlap_bias, overlap_only)
                || separate_axis(body1, body2, Axis::Y, overlap_bias, overlap_only)
        }
    }

    /// Distance between the positions of two bodies
    pub fn distance_between(&self, h1: BodyHandle, h2: BodyHandle) -> Result<f32> {
        let body1 = self.bodies.get_body(h1)?;
        let body2 = self.bodies.get_body(h2)?;

        Ok(body1.pos.distance(&body2.pos))
    }

    /// Distance from a body's position to an arbitrary point
    pub fn distance_to_xyz(&self, handle: BodyHandle, x: f32, y: f32, z: f32) -> Result<f32> {
        let body = self.bodies.get_body(handle)?;

        Ok(body.pos.distance(&Vector3::new(x, y, z)))
    }

    /// Spherical-polar angles from a body's position to a point
    pub fn angles_to_xyz(
        &self,
        handle: BodyHandle,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<SphericalAngles> {
        let body = self.bodies.get_body(handle)?;

        let r = body.pos.distance(&Vector3::new(x, y, z));
        let theta = (y - body.pos.y).atan2(x - body.pos.x);
        let phi = if r > crate::math::EPSILON {
            // Rounding can push a purely vertical ratio past 1
            crate::math::clamp((z - body.pos.z) / r, -1.0, 1.0).acos()
        } else {
            0.0
        };

        Ok(SphericalAngles { r, theta, phi })
    }

    /// Converts spherical angles and a speed into a velocity vector
    pub fn velocity_from_angles(theta: f32, phi: f32, speed: f32) -> Vector3 {
        Vector3::new(
            theta.cos() * phi.sin() * speed,
            theta.sin() * phi.sin() * speed,
            phi.cos() * speed,
        )
    }

    /// Sets a body's velocity to head towards a point at a steady speed.
    ///
    /// If `max_time_ms` is positive the speed is recomputed so the body
    /// arrives in that many milliseconds. The body does not track the target
    /// or stop on arrival. Returns the azimuthal angle of travel.
    pub fn move_to_xyz(
        &mut self,
        handle: BodyHandle,
        x: f32,
        y: f32,
        z: f32,
        mut speed: f32,
        max_time_ms: f32,
    ) -> Result<f32> {
        if max_time_ms > 0.0 {
            speed = self.distance_to_xyz(handle, x, y, z)? / (max_time_ms / 1000.0);
        }

        let angles = self.angles_to_xyz(handle, x, y, z)?;
        let velocity = Self::velocity_from_angles(angles.theta, angles.phi, speed);

        self.bodies.get_body_mut(handle)?.velocity = velocity;

        Ok(angles.theta)
    }

    /// Moves a body towards another point-like target
    pub fn move_to_target(
        &mut self,
        handle: BodyHandle,
        target: Vector3,
        speed: f32,
        max_time_ms: f32,
    ) -> Result<f32> {
        self.move_to_xyz(handle, target.x, target.y, target.z, speed, max_time_ms)
    }

    /// Sets a body's acceleration to head towards a point, capping velocity
    /// per axis. The body does not track the target or stop on arrival.
    /// Returns the azimuthal angle of travel.
    pub fn accelerate_to_xyz(
        &mut self,
        handle: BodyHandle,
        x: f32,
        y: f32,
        z: f32,
        speed: f32,
        max_speed: Vector3,
    ) -> Result<f32> {
        let angles = self.angles_to_xyz(handle, x, y, z)?;
        let acceleration = Self::velocity_from_angles(angles.theta, angles.phi, speed);

        let body = self.bodies.get_body_mut(handle)?;
        body.acceleration = acceleration;
        body.max_velocity = max_speed;

        Ok(angles.theta)
    }

    /// Isometric distance from a body to a projected screen-space point
    /// (typically a pointer), measured at the body's elevation
    pub fn distance_to_screen(
        &self,
        handle: BodyHandle,
        point: Vector2,
        projector: &Projector,
    ) -> Result<f32> {
        let body = self.bodies.get_body(handle)?;
        let iso = projector.unproject(&point, body.pos.z);

        self.distance_to_xyz(handle, iso.x, iso.y, iso.z)
    }

    /// Isometric azimuthal angle from a body to a projected screen-space
    /// point, measured at the body's elevation
    pub fn angle_to_screen(
        &self,
        handle: BodyHandle,
        point: Vector2,
        projector: &Projector,
    ) -> Result<f32> {
        let body = self.bodies.get_body(handle)?;
        let iso = projector.unproject(&point, body.pos.z);

        Ok(self.angles_to_xyz(handle, iso.x, iso.y, iso.z)?.theta)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives a body's cuboid bounds from an entity's 2D display metrics.
///
/// The footprint is half the display width on both horizontal axes and the
/// rest of the display height becomes the cuboid height, positioned so the
/// anchor point lines up with the entity's iso-position.
fn derive_bounds(entity: &dyn PhysicsEntity) -> Cuboid {
    let (width, height) = entity.size();
    let (scale_x, scale_y) = entity.scale();
    let (anchor_x, anchor_y) = entity.anchor();
    let iso = entity.iso_position();

    let asx = scale_x.abs();
    let asy = scale_y.abs();
    let half_w = width.abs() * 0.5;

    let width_x = half_w.round() * asx;
    let width_y = half_w.round() * asx;
    let body_height = ((height.abs() - half_w).round() * asy).max(0.0);

    Cuboid::new(
        iso.x + width_x * (0.5 - anchor_x),
        iso.y + width_y * (anchor_x - 0.5),
        iso.z - height.abs() * (1.0 - anchor_y) + half_w,
        width_x,
        width_y,
        body_height,
    )
}

/// The axis a single separation pass resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// Resolves one axis of a colliding pair.
///
/// Determines the leading body by comparing per-tick axis deltas, measures
/// the penetration between the leading front face and the trailing back
/// face, validates it against the tick displacement plus the overlap bias
/// (anything deeper is tunnelling and ignored), records touching flags and
/// overlap depth, then applies the positional split and the mass-weighted
/// elastic velocity exchange. Returns true if a correction was applied.
fn separate_axis(
    body1: &mut Body,
    body2: &mut Body,
    axis: Axis,
    overlap_bias: f32,
    overlap_only: bool,
) -> bool {
    //  Two immovable bodies can never be separated
    if body1.immovable && body2.immovable {
        return false;
    }

    let mut overlap = 0.0_f32;

    if !World::intersects(body1, body2) {
        return false;
    }

    let delta1 = axis_delta(body1, axis);
    let delta2 = axis_delta(body2, axis);
    let max_overlap = axis_delta_abs(body1, axis) + axis_delta_abs(body2, axis) + overlap_bias;

    if delta1 == 0.0 && delta2 == 0.0 {
        //  They overlap but neither of them is moving on this axis
        body1.embedded = true;
        body2.embedded = true;
    } else if delta1 > delta2 {
        //  Body1 is leading into body2's trailing face
        overlap = axis_front(body1, axis) - axis_back(body2, axis);

        if overlap > max_overlap
            || !check_leading(body1, axis)
            || !check_trailing(body2, axis)
        {
            overlap = 0.0;
        } else {
            set_touching(body1, axis, true);
            set_touching(body2, axis, false);
        }
    } else if delta1 < delta2 {
        //  Body2 is leading into body1's trailing face
        overlap = axis_back(body1, axis) - axis_front(body2, axis);

        if -overlap > max_overlap
            || !check_trailing(body1, axis)
            || !check_leading(body2, axis)
        {
            overlap = 0.0;
        } else {
            set_touching(body1, axis, false);
            set_touching(body2, axis, true);
        }
    }

    //  Adjust positions and velocities if there was any real overlap
    if overlap != 0.0 {
        set_overlap(body1, axis, overlap);
        set_overlap(body2, axis, overlap);

        if overlap_only || custom_separate(body1, axis) || custom_separate(body2, axis) {
            //  The caller owns resolution for this axis
            return true;
        }

        let velocity1 = axis_velocity(body1, axis);
        let velocity2 = axis_velocity(body2, axis);

        if !body1.immovable && !body2.immovable {
            overlap *= 0.5;

            *axis_pos_mut(body1, axis) -= overlap;
            *axis_pos_mut(body2, axis) += overlap;

            let mut new_velocity1 = (velocity2 * velocity2 * body2.mass() / body1.mass()).sqrt()
                * if velocity2 > 0.0 { 1.0 } else { -1.0 };
            let mut new_velocity2 = (velocity1 * velocity1 * body1.mass() / body2.mass()).sqrt()
                * if velocity1 > 0.0 { 1.0 } else { -1.0 };
            let average = (new_velocity1 + new_velocity2) * 0.5;
            new_velocity1 -= average;
            new_velocity2 -= average;

            set_axis_velocity(body1, axis, average + new_velocity1 * axis_bounce(body1, axis));
            set_axis_velocity(body2, axis, average + new_velocity2 * axis_bounce(body2, axis));
        } else if !body1.immovable {
            *axis_pos_mut(body1, axis) -= overlap;
            set_axis_velocity(body1, axis, velocity2 - velocity1 * axis_bounce(body1, axis));

            //  Riding a moving immovable platform: inherit its horizontal
            //  displacement for the tick
            if axis == Axis::Z && body2.moves {
                body1.pos.x += body2.delta_x();
                body1.pos.y += body2.delta_y();
            }
        } else if !body2.immovable {
            *axis_pos_mut(body2, axis) += overlap;
            set_axis_velocity(body2, axis, velocity1 - velocity2 * axis_bounce(body2, axis));

            if axis == Axis::Z && body1.moves {
                body2.pos.x += body1.delta_x();
                body2.pos.y += body1.delta_y();
            }
        }

        return true;
    }

    false
}

#[inline]
fn axis_delta(body: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => body.delta_x(),
        Axis::Y => body.delta_y(),
        Axis::Z => body.delta_z(),
    }
}

#[inline]
fn axis_delta_abs(body: &Body, axis: Axis) -> f32 {
    axis_delta(body, axis).abs()
}

/// The coordinate of the body's leading (far) face on the axis
#[inline]
fn axis_front(body: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => body.front_x(),
        Axis::Y => body.front_y(),
        Axis::Z => body.top(),
    }
}

/// The coordinate of the body's trailing (near) face on the axis
#[inline]
fn axis_back(body: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => body.pos.x,
        Axis::Y => body.pos.y,
        Axis::Z => body.pos.z,
    }
}

#[inline]
fn axis_velocity(body: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => body.velocity.x,
        Axis::Y => body.velocity.y,
        Axis::Z => body.velocity.z,
    }
}

#[inline]
fn set_axis_velocity(body: &mut Body, axis: Axis, value: f32) {
    match axis {
        Axis::X => body.velocity.x = value,
        Axis::Y => body.velocity.y = value,
        Axis::Z => body.velocity.z = value,
    }
}

#[inline]
fn axis_pos_mut(body: &mut Body, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut body.pos.x,
        Axis::Y => &mut body.pos.y,
        Axis::Z => &mut body.pos.z,
    }
}

#[inline]
fn axis_bounce(body: &Body, axis: Axis) -> f32 {
    match axis {
        Axis::X => body.bounce.x,
        Axis::Y => body.bounce.y,
        Axis::Z => body.bounce.z,
    }
}

#[inline]
fn set_overlap(body: &mut Body, axis: Axis, value: f32) {
    match axis {
        Axis::X => body.overlap_x = value,
        Axis::Y => body.overlap_y = value,
        Axis::Z => body.overlap_z = value,
    }
}

#[inline]
fn custom_separate(body: &Body, axis: Axis) -> bool {
    match axis {
        Axis::X => body.custom_separate_x,
        Axis::Y => body.custom_separate_y,
        Axis::Z => body.custom_separate_z,
    }
}

/// Whether the body allows contact on its leading face for the axis
#[inline]
fn check_leading(body: &Body, axis: Axis) -> bool {
    match axis {
        Axis::X => body.check_collision.front_x,
        Axis::Y => body.check_collision.front_y,
        Axis::Z => body.check_collision.up,
    }
}

/// Whether the body allows contact on its trailing face for the axis
#[inline]
fn check_trailing(body: &Body, axis: Axis) -> bool {
    match axis {
        Axis::X => body.check_collision.back_x,
        Axis::Y => body.check_collision.back_y,
        Axis::Z => body.check_collision.down,
    }
}

/// Records the contact face: the leading side touches on its far face, the
/// trailing side on its near face
#[inline]
fn set_touching(body: &mut Body, axis: Axis, leading: bool) {
    let face = match (axis, leading) {
        (Axis::X, true) => Touching::FRONT_X,
        (Axis::X, false) => Touching::BACK_X,
        (Axis::Y, true) => Touching::FRONT_Y,
        (Axis::Y, false) => Touching::BACK_Y,
        (Axis::Z, true) => Touching::UP,
        (Axis::Z, false) => Touching::DOWN,
    };

    body.touching |= face;
}
