//! Finite-or-unbounded priority values.
//!
//! `Bound::Unbounded` stands in for "infinity" in f-limits, exhausted
//! subtrees and dead ends. It never takes part in arithmetic; every
//! comparison spells out both directions explicitly.

use std::fmt;

use crate::space::contract::Cost;

/// A priority or f-value that may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// A concrete value.
    Finite(Cost),
    /// Larger than every finite value.
    Unbounded,
}

impl Bound {
    /// Strictly lower than `other`. `Unbounded` is never lower than anything;
    /// every finite value is lower than `Unbounded`.
    #[must_use]
    pub const fn is_lower_than(self, other: Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a < b,
            (Self::Finite(_), Self::Unbounded) => true,
            (Self::Unbounded, _) => false,
        }
    }

    /// Strictly higher than `other`. `Unbounded` is higher than every finite
    /// value and not higher than itself.
    #[must_use]
    pub const fn is_higher_than(self, other: Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a > b,
            (Self::Unbounded, Self::Finite(_)) => true,
            (_, Self::Unbounded) => false,
        }
    }

    /// Whether this value is over `limit` (an RBFS f-limit, for example).
    #[must_use]
    pub const fn exceeds(self, limit: Self) -> bool {
        self.is_higher_than(limit)
    }

    /// The lower of two values.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if other.is_lower_than(self) {
            other
        } else {
            self
        }
    }

    /// The higher of two values.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if other.is_higher_than(self) {
            other
        } else {
            self
        }
    }

    /// The finite value, if any.
    #[must_use]
    pub const fn finite(self) -> Option<Cost> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Unbounded => None,
        }
    }

    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl From<Cost> for Bound {
    fn from(value: Cost) -> Self {
        Self::Finite(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}
