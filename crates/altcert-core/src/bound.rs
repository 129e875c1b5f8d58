//! Extended integer bounds.
//!
//! Certificates cover the whole integer line, so interval endpoints need the
//! two infinities. They are modelled as tagged variants rather than sentinel
//! integers, which keeps every `i64` usable as a sequence value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point of the extended integer line.
///
/// Variant order gives the total order `NegInf < Finite(_) < PosInf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    NegInf,
    Finite(i64),
    PosInf,
}

impl Bound {
    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(self) -> Option<i64> {
        match self {
            Bound::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// Next integer after `self`.
    ///
    /// `Finite(i64::MAX)` has no integer successor and maps to `PosInf`;
    /// both infinities are fixed points.
    pub fn successor(self) -> Bound {
        match self {
            Bound::Finite(v) => v.checked_add(1).map_or(Bound::PosInf, Bound::Finite),
            other => other,
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Finite(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-∞"),
            Bound::Finite(v) => write!(f, "{v}"),
            Bound::PosInf => write!(f, "+∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(Bound::NegInf < Bound::Finite(i64::MIN));
        assert!(Bound::Finite(i64::MIN) < Bound::Finite(0));
        assert!(Bound::Finite(i64::MAX) < Bound::PosInf);
        assert_eq!(
            [Bound::Finite(3), Bound::PosInf, Bound::NegInf]
                .into_iter()
                .max(),
            Some(Bound::PosInf)
        );
    }

    #[test]
    fn test_successor_saturates_into_pos_inf() {
        assert_eq!(Bound::Finite(4).successor(), Bound::Finite(5));
        assert_eq!(Bound::Finite(i64::MAX).successor(), Bound::PosInf);
        assert_eq!(Bound::NegInf.successor(), Bound::NegInf);
        assert_eq!(Bound::PosInf.successor(), Bound::PosInf);
    }

    #[test]
    fn test_display_uses_infinity_symbols() {
        assert_eq!(Bound::NegInf.to_string(), "-∞");
        assert_eq!(Bound::PosInf.to_string(), "+∞");
        assert_eq!(Bound::Finite(-7).to_string(), "-7");
    }
}
