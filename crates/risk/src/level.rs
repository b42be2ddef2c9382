//! Ordinal risk levels.

use serde::Serialize;

/// Four-level flood risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum RiskLevel {
    /// Coupled value at or below the first quartile.
    Low = 1,
    /// Coupled value in `(Q1, Q2]`.
    Moderate = 2,
    /// Coupled value in `(Q2, Q3]`.
    High = 3,
    /// Coupled value above the third quartile.
    VeryHigh = 4,
}

impl RiskLevel {
    /// All four levels in ascending order.
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Moderate, Self::High, Self::VeryHigh];

    /// Returns the level for a 1-based number, or `None` outside 1..=4.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Low),
            2 => Some(Self::Moderate),
            3 => Some(Self::High),
            4 => Some(Self::VeryHigh),
            _ => None,
        }
    }

    /// Returns the 1-based level number (matches the `#[repr(u8)]` discriminant).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Display name, e.g. `"Very High Risk"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::from_number(level.number()), Some(level));
        }
        assert_eq!(RiskLevel::from_number(0), None);
        assert_eq!(RiskLevel::from_number(5), None);
    }

    #[test]
    fn names() {
        assert_eq!(RiskLevel::Low.name(), "Low Risk");
        assert_eq!(RiskLevel::Moderate.name(), "Moderate Risk");
        assert_eq!(RiskLevel::High.name(), "High Risk");
        assert_eq!(RiskLevel::VeryHigh.name(), "Very High Risk");
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::High < RiskLevel::VeryHigh);
    }
}
