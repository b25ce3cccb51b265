//! Tagged distance value used in every matrix cell.
//!
//! A missing edge (in the adjacency matrix) and a missing path (in the
//! distance matrix) are the same thing: [`Distance::Unreachable`].  It is a
//! variant, not a numeric stand-in, so it can never leak into a sum or a
//! comparison as if it were zero or a large finite number.
//!
//! # Arithmetic rules
//!
//! | `a`           | `b`           | `a.join(b)`         | `a.min(b)`          |
//! |---------------|---------------|---------------------|---------------------|
//! | `Finite(x)`   | `Finite(y)`   | `Finite(x + y)`     | `Finite(min(x, y))` |
//! | `Finite(x)`   | `Unreachable` | `Unreachable`       | `Finite(x)`         |
//! | `Unreachable` | `Finite(y)`   | `Unreachable`       | `Finite(y)`         |
//! | `Unreachable` | `Unreachable` | `Unreachable`       | `Unreachable`       |

use std::fmt;

/// A path or edge length, or the absence of one.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// A known, finite, non-negative length in edge-weight units.
    Finite(f64),
    /// No edge / no path known.
    #[default]
    Unreachable,
}

impl Distance {
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite length, or `None` for `Unreachable`.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Length of the path formed by walking `self` then `next`.
    ///
    /// Only two finite legs combine; any sentinel leg makes the whole path
    /// unreachable.
    #[inline]
    pub fn join(self, next: Distance) -> Distance {
        match (self, next) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a + b),
            _ => Distance::Unreachable,
        }
    }

    /// The shorter of two distances; `Unreachable` loses to any finite value.
    #[inline]
    pub fn min(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => {
                if b < a { Distance::Finite(b) } else { Distance::Finite(a) }
            }
            (Distance::Finite(a), Distance::Unreachable) => Distance::Finite(a),
            (Distance::Unreachable, other) => other,
        }
    }
}

impl From<f64> for Distance {
    fn from(d: f64) -> Self {
        Distance::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("-"),
        }
    }
}
