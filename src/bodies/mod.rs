mod body;

pub use self::body::Body;
pub use self::face_flags::{Blocked, Touching};

/// Per-face contact flag sets recorded during a tick
pub mod face_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Which faces of a body made contact with another body this tick.
        ///
        /// An empty set is the "touching none" state. `FRONT_X`/`BACK_X` and
        /// `FRONT_Y`/`BACK_Y` are the horizontal faces; `UP`/`DOWN` are the
        /// top and bottom faces along z.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct Touching: u8 {
            const UP = 0x01;
            const DOWN = 0x02;
            const FRONT_X = 0x04;
            const BACK_X = 0x08;
            const FRONT_Y = 0x10;
            const BACK_Y = 0x20;
        }
    }

    bitflags! {
        /// Which faces of a body were stopped by the world bounds this tick
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct Blocked: u8 {
            const UP = 0x01;
            const DOWN = 0x02;
            const FRONT_X = 0x04;
            const BACK_X = 0x08;
            const FRONT_Y = 0x10;
            const BACK_Y = 0x20;
        }
    }

    impl Touching {
        /// Returns true if no face contact was recorded
        #[inline]
        pub fn none(&self) -> bool {
            self.is_empty()
        }
    }

    impl Blocked {
        /// Returns true if no face was blocked
        #[inline]
        pub fn none(&self) -> bool {
            self.is_empty()
        }
    }
}
