//! Purse model
//!
//! A purse is a named budget envelope holding an allocation of money. The
//! allocated balance is the only field the transfer engine mutates; spent
//! amounts are informational and maintained elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PurseId;
use super::money::Money;

/// Kind of purse, governing transfer eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurseKind {
    /// Everyday envelope, freely transferable
    #[default]
    Flexible,
    /// Committed money (rent, bills); usually paired with the locked flag
    Locked,
    /// Emergency reserve, intended for break-glass access only
    Emergency,
}

impl PurseKind {
    /// The stored representation (matches the `type` column)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flexible => "FLEXIBLE",
            Self::Locked => "LOCKED",
            Self::Emergency => "EMERGENCY",
        }
    }

    /// Parse a purse kind from user input or a stored value
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "FLEXIBLE" => Some(Self::Flexible),
            "LOCKED" => Some(Self::Locked),
            "EMERGENCY" => Some(Self::Emergency),
            _ => None,
        }
    }
}

impl fmt::Display for PurseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flexible => write!(f, "Flexible"),
            Self::Locked => write!(f, "Locked"),
            Self::Emergency => write!(f, "Emergency"),
        }
    }
}

/// A budget envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purse {
    /// Store-assigned identifier
    pub id: PurseId,

    /// Human-readable label, unique across purses
    pub name: String,

    /// Kind of purse
    #[serde(rename = "type")]
    pub kind: PurseKind,

    /// Money currently assigned to this purse; never negative after a
    /// committed transfer
    pub allocated: Money,

    /// Money already consumed from the allocation; never touched by transfers
    pub spent: Money,

    /// When true, this purse may not be the source of a transfer without an
    /// explicit break-glass override
    pub locked: bool,

    /// Soft-overdraft margin, informational only
    pub buffer_allowance: Money,
}

impl Purse {
    /// Funds still available to spend from the allocation
    pub fn available(&self) -> Money {
        self.allocated - self.spent
    }

    /// Fraction of the allocation already spent (0.0 when nothing allocated)
    pub fn progress(&self) -> f64 {
        if self.allocated.is_positive() {
            self.spent.cents() as f64 / self.allocated.cents() as f64
        } else {
            0.0
        }
    }
}

/// Description of a purse to be created; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewPurse {
    pub name: String,
    pub kind: PurseKind,
    pub allocated: Money,
    pub locked: bool,
    pub buffer_allowance: Money,
}

impl NewPurse {
    /// Create a description with an initial allocation and defaults elsewhere
    pub fn new(name: impl Into<String>, kind: PurseKind, allocated: Money) -> Self {
        Self {
            name: name.into(),
            kind,
            allocated,
            locked: false,
            buffer_allowance: Money::zero(),
        }
    }

    /// Mark the purse as locked from creation
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Set the soft-overdraft margin
    pub fn with_buffer(mut self, buffer: Money) -> Self {
        self.buffer_allowance = buffer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_purse() -> Purse {
        Purse {
            id: PurseId::new(1),
            name: "Groceries".into(),
            kind: PurseKind::Flexible,
            allocated: Money::from_cents(40000),
            spent: Money::from_cents(10000),
            locked: false,
            buffer_allowance: Money::from_cents(5000),
        }
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [PurseKind::Flexible, PurseKind::Locked, PurseKind::Emergency] {
            assert_eq!(PurseKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PurseKind::parse("flexible"), Some(PurseKind::Flexible));
        assert_eq!(PurseKind::parse("vault"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PurseKind::Emergency.to_string(), "Emergency");
    }

    #[test]
    fn test_available() {
        let purse = sample_purse();
        assert_eq!(purse.available(), Money::from_cents(30000));
    }

    #[test]
    fn test_progress() {
        let mut purse = sample_purse();
        assert!((purse.progress() - 0.25).abs() < f64::EPSILON);

        purse.allocated = Money::zero();
        assert_eq!(purse.progress(), 0.0);
    }

    #[test]
    fn test_new_purse_builder() {
        let new = NewPurse::new("Rent", PurseKind::Locked, Money::from_cents(120000))
            .locked()
            .with_buffer(Money::from_cents(2500));

        assert_eq!(new.name, "Rent");
        assert!(new.locked);
        assert_eq!(new.buffer_allowance, Money::from_cents(2500));
    }
}
