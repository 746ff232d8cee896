use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// An axis-aligned cuboid anchored at its bottom-rear corner `(x, y, z)`.
///
/// `width_x` and `width_y` extend along the two horizontal isometric axes and
/// `height` extends upwards along z. Extents are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Cuboid {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width_x: f32,
    pub width_y: f32,
    pub height: f32,
}

impl Cuboid {
    /// Creates a new cuboid from its bottom-rear corner and extents
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, width_x: f32, width_y: f32, height: f32) -> Self {
        Self { x, y, z, width_x, width_y, height }
    }

    /// Resets the corner and extents in place
    #[inline]
    pub fn set_to(&mut self, x: f32, y: f32, z: f32, width_x: f32, width_y: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.width_x = width_x;
        self.width_y = width_y;
        self.height = height;
    }

    /// The x coordinate of the front face (`x + width_x`)
    #[inline]
    pub fn front_x(&self) -> f32 {
        self.x + self.width_x
    }

    /// The y coordinate of the front face (`y + width_y`)
    #[inline]
    pub fn front_y(&self) -> f32 {
        self.y + self.width_y
    }

    /// The z coordinate of the top face (`z + height`)
    #[inline]
    pub fn top(&self) -> f32 {
        self.z + self.height
    }

    /// Half the x extent
    #[inline]
    pub fn half_width_x(&self) -> f32 {
        self.width_x * 0.5
    }

    /// Half the y extent
    #[inline]
    pub fn half_width_y(&self) -> f32 {
        self.width_y * 0.5
    }

    /// Half the height
    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// The center point of the cuboid
    #[inline]
    pub fn center(&self) -> Vector3 {
        Vector3::new(
            self.x + self.half_width_x(),
            self.y + self.half_width_y(),
            self.z + self.half_height(),
        )
    }

    /// Returns true if the point lies within the cuboid (inclusive bounds)
    #[inline]
    pub fn contains(&self, x: f32, y: f32, z: f32) -> bool {
        self.width_x > 0.0
            && self.width_y > 0.0
            && self.height > 0.0
            && x >= self.x
            && x <= self.front_x()
            && y >= self.y
            && y <= self.front_y()
            && z >= self.z
            && z <= self.top()
    }

    /// Strict intersection test against another cuboid.
    ///
    /// Boundaries are exclusive: two cuboids that exactly share a face do not
    /// intersect. This matches the narrow-phase test used for separation.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.front_x() <= other.x {
            return false;
        }

        if self.front_y() <= other.y {
            return false;
        }

        if self.x >= other.front_x() {
            return false;
        }

        if self.y >= other.front_y() {
            return false;
        }

        if self.top() <= other.z {
            return false;
        }

        if self.z >= other.top() {
            return false;
        }

        true
    }

    /// Returns the 8 corners of the cuboid in a fixed order.
    ///
    /// The order is binary over the axes with x as the most significant bit
    /// and z as the least: index `0b_xyz` selects the far extent on each set
    /// axis. Indices carry positional meaning for debug drawing: the sequence
    /// 1, 3, 2, 6, 4, 5 traces the visible silhouette faces.
    ///
    /// ```text
    /// 0 (x,    y,    z)      4 (x+wx, y,    z)
    /// 1 (x,    y,    z+h)    5 (x+wx, y,    z+h)
    /// 2 (x,    y+wy, z)      6 (x+wx, y+wy, z)
    /// 3 (x,    y+wy, z+h)    7 (x+wx, y+wy, z+h)
    /// ```
    pub fn corners(&self) -> [Vector3; 8] {
        [
            Vector3::new(self.x, self.y, self.z),
            Vector3::new(self.x, self.y, self.z + self.height),
            Vector3::new(self.x, self.y + self.width_y, self.z),
            Vector3::new(self.x, self.y + self.width_y, self.z + self.height),
            Vector3::new(self.x + self.width_x, self.y, self.z),
            Vector3::new(self.x + self.width_x, self.y, self.z + self.height),
            Vector3::new(self.x + self.width_x, self.y + self.width_y, self.z),
            Vector3::new(self.x + self.width_x, self.y + self.width_y, self.z + self.height),
        ]
    }
}
