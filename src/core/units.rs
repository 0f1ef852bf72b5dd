//! Units of measure for product quantities.
//!
//! Discrete units (pieces) display quantities with 0 decimals; measured
//! units with 2. Each unit carries its UN/CEFACT Rec 20 code for
//! interchange with e-invoicing formats.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of measure for a product quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Piece — discrete, counted quantity.
    Pcs,
    /// Kilogram.
    Kg,
    /// Litre.
    Ltr,
    /// Metre.
    Mtr,
    /// Hour.
    Hur,
}

impl Unit {
    /// Whether quantities in this unit are counted rather than measured.
    /// Counted quantities display with 0 decimals, measured with 2.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Pcs)
    }

    /// Short display label, as printed in the invoice table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pcs => "pcs",
            Self::Kg => "kg",
            Self::Ltr => "l",
            Self::Mtr => "m",
            Self::Hur => "h",
        }
    }

    /// UN/CEFACT Rec 20 unit code.
    pub fn rec20_code(&self) -> &'static str {
        match self {
            Self::Pcs => "C62",
            Self::Kg => "KGM",
            Self::Ltr => "LTR",
            Self::Mtr => "MTR",
            Self::Hur => "HUR",
        }
    }

    /// Parse from a UN/CEFACT Rec 20 code.
    pub fn from_rec20_code(code: &str) -> Option<Self> {
        match code {
            "C62" => Some(Self::Pcs),
            "KGM" => Some(Self::Kg),
            "LTR" => Some(Self::Ltr),
            "MTR" => Some(Self::Mtr),
            "HUR" => Some(Self::Hur),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pieces_are_discrete() {
        assert!(Unit::Pcs.is_discrete());
        assert!(!Unit::Kg.is_discrete());
        assert!(!Unit::Ltr.is_discrete());
        assert!(!Unit::Mtr.is_discrete());
        assert!(!Unit::Hur.is_discrete());
    }

    #[test]
    fn rec20_roundtrip() {
        for unit in [Unit::Pcs, Unit::Kg, Unit::Ltr, Unit::Mtr, Unit::Hur] {
            assert_eq!(Unit::from_rec20_code(unit.rec20_code()), Some(unit));
        }
        assert_eq!(Unit::from_rec20_code("XYZ"), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Unit::Pcs.to_string(), "pcs");
        assert_eq!(Unit::Kg.to_string(), "kg");
    }
}
