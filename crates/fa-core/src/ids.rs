//! Strongly typed node index.
//!
//! `NodeIdx` is `Copy + Ord + Hash` so it can key maps and sort without
//! ceremony.  The inner integer is `pub` for direct matrix addressing, but
//! callers should prefer [`NodeIdx::index`] for clarity.

use std::fmt;

use crate::{FaError, FaResult};

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a matrix row/column.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
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
    /// Dense position of a node in the catalog: stores first, then
    /// residential areas, then intersections.
    pub struct NodeIdx(u32);
}

impl NodeIdx {
    /// Checked conversion from a dense position.
    pub fn from_position(pos: usize) -> FaResult<NodeIdx> {
        NodeIdx::try_from(pos).map_err(|_| FaError::IndexOverflow(pos))
    }
}
