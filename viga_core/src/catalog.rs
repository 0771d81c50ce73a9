//! Reinforcing Bar Catalog
//!
//! Commercial rebar sizes with their nominal cross-sectional areas and
//! physical diameters, as stocked for cast-in-place construction in the
//! kg/cm unit system.
//!
//! ## Lookup Contract
//!
//! The label-based lookups ([`area_cm2_for`], [`diameter_cm_for`]) are total:
//! an unknown or empty label contributes area 0 and diameter 0 instead of an
//! error. Partially filled rebar rows (e.g. a quantity with no size selected
//! yet) must flow through the layout and area computations without failing.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::catalog::{BarSize, area_cm2_for};
//!
//! let bar = BarSize::from_label("5/8\"").unwrap();
//! assert_eq!(bar.diameter_cm(), 1.59);
//!
//! // Unknown labels degrade to zero, never an error
//! assert_eq!(area_cm2_for("bogus"), 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Commercial reinforcing bar size designation
///
/// Metric sizes are named by diameter; imperial sizes by the fractional-inch
/// label stamped in supplier catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarSize {
    /// 8 mm (0.80 cm, 0.50 cm²)
    M8,
    /// 3/8" (0.95 cm, 0.71 cm²)
    D3_8,
    /// 1/2" (1.27 cm, 1.29 cm²)
    D1_2,
    /// 5/8" (1.59 cm, 1.99 cm²)
    D5_8,
    /// 3/4" (1.91 cm, 2.84 cm²)
    D3_4,
    /// 1" (2.54 cm, 5.10 cm²)
    D1,
}

impl BarSize {
    /// All catalog sizes in ascending diameter order
    pub const ALL: [BarSize; 6] = [
        BarSize::M8,
        BarSize::D3_8,
        BarSize::D1_2,
        BarSize::D5_8,
        BarSize::D3_4,
        BarSize::D1,
    ];

    /// Sizes offered for stirrups
    pub const STIRRUPS: [BarSize; 3] = [BarSize::M8, BarSize::D3_8, BarSize::D1_2];

    /// Sizes offered for longitudinal reinforcement
    pub const LONGITUDINAL: [BarSize; 4] =
        [BarSize::D1_2, BarSize::D5_8, BarSize::D3_4, BarSize::D1];

    /// Parse from a catalog label (e.g. `8mm`, `5/8"`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "8mm" => Some(BarSize::M8),
            "3/8\"" => Some(BarSize::D3_8),
            "1/2\"" => Some(BarSize::D1_2),
            "5/8\"" => Some(BarSize::D5_8),
            "3/4\"" => Some(BarSize::D3_4),
            "1\"" => Some(BarSize::D1),
            _ => None,
        }
    }

    /// Catalog label for display and persistence
    pub fn label(&self) -> &'static str {
        match self {
            BarSize::M8 => "8mm",
            BarSize::D3_8 => "3/8\"",
            BarSize::D1_2 => "1/2\"",
            BarSize::D5_8 => "5/8\"",
            BarSize::D3_4 => "3/4\"",
            BarSize::D1 => "1\"",
        }
    }

    /// Physical bar diameter (cm)
    pub fn diameter_cm(&self) -> f64 {
        match self {
            BarSize::M8 => 0.80,
            BarSize::D3_8 => 0.95,
            BarSize::D1_2 => 1.27,
            BarSize::D5_8 => 1.59,
            BarSize::D3_4 => 1.91,
            BarSize::D1 => 2.54,
        }
    }

    /// Nominal cross-sectional area (cm²)
    pub fn area_cm2(&self) -> f64 {
        match self {
            BarSize::M8 => 0.50,
            BarSize::D3_8 => 0.71,
            BarSize::D1_2 => 1.29,
            BarSize::D5_8 => 1.99,
            BarSize::D3_4 => 2.84,
            BarSize::D1 => 5.10,
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Total area lookup by label: unknown or empty labels yield 0.0
pub fn area_cm2_for(label: &str) -> f64 {
    BarSize::from_label(label).map_or(0.0, |b| b.area_cm2())
}

/// Total diameter lookup by label: unknown or empty labels yield 0.0
pub fn diameter_cm_for(label: &str) -> f64 {
    BarSize::from_label(label).map_or(0.0, |b| b.diameter_cm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for size in BarSize::ALL {
            assert_eq!(BarSize::from_label(size.label()), Some(size));
        }
    }

    #[test]
    fn test_catalog_values() {
        assert_eq!(BarSize::D1_2.diameter_cm(), 1.27);
        assert_eq!(BarSize::D5_8.diameter_cm(), 1.59);
        assert_eq!(BarSize::D3_4.diameter_cm(), 1.91);
        assert_eq!(BarSize::D3_8.diameter_cm(), 0.95);
        assert_eq!(BarSize::D1.area_cm2(), 5.10);
    }

    #[test]
    fn test_unknown_label_yields_zero() {
        assert_eq!(area_cm2_for("bogus"), 0.0);
        assert_eq!(diameter_cm_for("bogus"), 0.0);
        assert_eq!(area_cm2_for(""), 0.0);
        assert_eq!(diameter_cm_for(""), 0.0);
    }

    #[test]
    fn test_known_label_lookup() {
        assert_eq!(area_cm2_for("5/8\""), 1.99);
        assert_eq!(diameter_cm_for("3/8\""), 0.95);
        // Labels are trimmed before matching
        assert_eq!(diameter_cm_for(" 1/2\" "), 1.27);
    }

    #[test]
    fn test_size_groups() {
        assert!(BarSize::STIRRUPS.contains(&BarSize::D3_8));
        assert!(!BarSize::STIRRUPS.contains(&BarSize::D1));
        assert!(BarSize::LONGITUDINAL.contains(&BarSize::D5_8));
        assert!(!BarSize::LONGITUDINAL.contains(&BarSize::M8));
    }

    #[test]
    fn test_ascending_diameters() {
        let diams: Vec<f64> = BarSize::ALL.iter().map(|b| b.diameter_cm()).collect();
        assert!(diams.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&BarSize::D5_8).unwrap();
        let roundtrip: BarSize = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, BarSize::D5_8);
    }
}
