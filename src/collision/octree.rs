use std::collections::HashSet;

use crate::core::BodyHandle;
use crate::math::{Cuboid, Vector3};

/// Broad-phase spatial index over cuboid bounds.
///
/// A node holds entries until it exceeds `max_objects`, then splits into 8
/// octants at the axis midpoints (depth permitting). An entry is inserted
/// into every child octant its bounds overlap, so `retrieve` de-duplicates
/// by handle before returning. The index may return false positives — the
/// narrow phase filters those — but never misses a pair of truly
/// overlapping bounds.
pub struct Octree {
    /// The region this node covers
    bounds: Cuboid,

    /// Maximum entries per node before it subdivides
    max_objects: usize,

    /// Maximum subdivision depth
    max_levels: usize,

    /// Depth of this node, 0 at the root
    level: usize,

    /// Entries held at this node
    objects: Vec<(BodyHandle, Cuboid)>,

    /// Child octants; empty until the node splits, then exactly 8
    nodes: Vec<Octree>,
}

impl Octree {
    /// Creates an empty root node covering the given region
    pub fn new(bounds: Cuboid, max_objects: usize, max_levels: usize) -> Self {
        Self::with_level(bounds, max_objects, max_levels, 0)
    }

    fn with_level(bounds: Cuboid, max_objects: usize, max_levels: usize, level: usize) -> Self {
        Self {
            bounds,
            max_objects,
            max_levels,
            level,
            objects: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// The region this node covers
    pub fn bounds(&self) -> &Cuboid {
        &self.bounds
    }

    /// Reinitializes the tree with new bounds and tuning, dropping all
    /// contents. Called once per broad-phase query cycle.
    pub fn reset(&mut self, bounds: Cuboid, max_objects: usize, max_levels: usize) {
        self.bounds = bounds;
        self.max_objects = max_objects;
        self.max_levels = max_levels;
        self.level = 0;
        self.clear();
    }

    /// Recursively empties this node and all children
    pub fn clear(&mut self) {
        self.objects.clear();
        self.nodes.clear();
    }

    /// Inserts every entry of the collection into the tree
    pub fn populate<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (BodyHandle, Cuboid)>,
    {
        for (handle, bounds) in entries {
            self.insert(handle, bounds);
        }
    }

    /// Inserts a single entry, splitting the node on overflow.
    ///
    /// An entry overlapping several octants goes into each of them; an entry
    /// overlapping none (degenerate zero-extent bounds) stays at this node.
    pub fn insert(&mut self, handle: BodyHandle, bounds: Cuboid) {
        if !self.nodes.is_empty() {
            if !self.insert_into_children(handle, bounds) {
                self.objects.push((handle, bounds));
            }
            return;
        }

        self.objects.push((handle, bounds));

        if self.objects.len() > self.max_objects && self.level < self.max_levels {
            self.split();

            let entries = std::mem::take(&mut self.objects);
            for (entry_handle, entry_bounds) in entries {
                if !self.insert_into_children(entry_handle, entry_bounds) {
                    self.objects.push((entry_handle, entry_bounds));
                }
            }
        }
    }

    /// Returns the de-duplicated candidate set for the query bounds, in
    /// first-seen traversal order.
    pub fn retrieve(&self, bounds: &Cuboid) -> Vec<BodyHandle> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();

        self.collect(bounds, &mut found, &mut seen);

        found
    }

    /// Total number of entries in this node and all children, counting
    /// straddlers once per octant they occupy
    pub fn total_objects(&self) -> usize {
        self.objects.len() + self.nodes.iter().map(Octree::total_objects).sum::<usize>()
    }

    fn collect(&self, bounds: &Cuboid, found: &mut Vec<BodyHandle>, seen: &mut HashSet<BodyHandle>) {
        for (handle, _) in &self.objects {
            if seen.insert(*handle) {
                found.push(*handle);
            }
        }

        for node in &self.nodes {
            if node.bounds.intersects(bounds) {
                node.collect(bounds, found, seen);
            }
        }
    }

    fn insert_into_children(&mut self, handle: BodyHandle, bounds: Cuboid) -> bool {
        let mut placed = false;

        for node in &mut self.nodes {
            if node.bounds.intersects(&bounds) {
                node.insert(handle, bounds);
                placed = true;
            }
        }

        placed
    }

    /// Splits this node into 8 octants at the axis midpoints
    fn split(&mut self) {
        let half = Vector3::new(
            self.bounds.half_width_x(),
            self.bounds.half_width_y(),
            self.bounds.half_height(),
        );

        self.nodes.reserve_exact(8);

        for octant in 0..8u8 {
            let x = self.bounds.x + if octant & 0b100 != 0 { half.x } else { 0.0 };
            let y = self.bounds.y + if octant & 0b010 != 0 { half.y } else { 0.0 };
            let z = self.bounds.z + if octant & 0b001 != 0 { half.z } else { 0.0 };

            self.nodes.push(Octree::with_level(
                Cuboid::new(x, y, z, half.x, half.y, half.z),
                self.max_objects,
                self.max_levels,
                self.level + 1,
            ));
        }
    }
}
