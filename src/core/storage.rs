use crate::bodies::Body;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Slot-based pool of bodies.
///
/// Handles index directly into the pool and stay stable across removals;
/// freed slots are not reused, so iteration always visits live bodies in
/// insertion order. The collision pass relies on that ordering for
/// reproducible pair enumeration.
pub struct BodyStorage {
    slots: Vec<Option<Body>>,
}

impl BodyStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Adds a body to the pool and returns its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.slots.len() as u32);
        self.slots.push(Some(body));
        handle
    }

    /// Removes a body from the pool, returning it if it was present
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        self.slots.get_mut(handle.index()).and_then(Option::take)
    }

    /// Gets a reference to a body by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.get(handle).ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Gets a mutable reference to a body by its handle, returning an error
    /// if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.get_mut(handle).ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Gets mutable references to two distinct bodies at once.
    ///
    /// Fails if the handles are equal or either body is missing.
    pub fn get_pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Result<(&mut Body, &mut Body)> {
        if a == b {
            return Err(PhysicsError::PreconditionViolation(format!(
                "cannot borrow body {a:?} twice"
            )));
        }

        let (low, high, swapped) = if a < b { (a, b, false) } else { (b, a, true) };

        // Stale handles can outlive the slot vector (e.g. after clear)
        if high.index() >= self.slots.len() {
            return Err(PhysicsError::BodyNotFound(high));
        }

        let (head, tail) = self.slots.split_at_mut(high.index());

        let low_body = head
            .get_mut(low.index())
            .and_then(Option::as_mut)
            .ok_or(PhysicsError::BodyNotFound(low))?;
        let high_body = tail
            .first_mut()
            .and_then(Option::as_mut)
            .ok_or(PhysicsError::BodyNotFound(high))?;

        if swapped {
            Ok((high_body, low_body))
        } else {
            Ok((low_body, high_body))
        }
    }

    /// Returns the number of live bodies in the pool
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns whether the pool holds no live bodies
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all bodies from the pool, invalidating every handle
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the handles of all live bodies in insertion order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| BodyHandle(i as u32)))
            .collect()
    }

    /// Iterates live bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|body| (BodyHandle(i as u32), body)))
    }

    /// Iterates live bodies mutably in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|body| (BodyHandle(i as u32), body)))
    }
}

impl Default for BodyStorage {
    fn default() -> Self {
        Self::new()
    }
}
