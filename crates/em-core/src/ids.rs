//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Employers, jobs, neighbourhoods and
//! job kinds are created once and never destroyed, so their IDs double as `Vec`
//! indices.  `IndividualId`s are handed out monotonically and never reused,
//! which keeps creation order equal to ID order.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Stable handle of one individual in the population arena.
    pub struct IndividualId(u32);
}

typed_id! {
    /// Index of an employer.
    pub struct EmployerId(u32);
}

typed_id! {
    /// Index of a job slot in the flat job table (employer-major order).
    pub struct JobId(u32);
}

typed_id! {
    /// Index of a job kind in the society's job table.
    pub struct JobKindId(u8);
}

typed_id! {
    /// Index of a neighbourhood in the society's neighbourhood grid.
    pub struct NeighbourhoodId(u16);
}
