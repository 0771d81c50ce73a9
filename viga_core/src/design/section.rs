//! # Design Data Model
//!
//! Input types shared by the flexural design pipeline: the six control points
//! along the span, the per-section rebar rows a user edits live, the beam
//! geometry, and the material properties.
//!
//! All types are JSON-serializable so a front-end or project file can hold a
//! full design session snapshot.
//!
//! ## Degraded-input policy
//!
//! User-facing constructors never fail: unparseable quantity text becomes 0,
//! an unrecognized bar label becomes "no size" (contributing zero area and
//! diameter), and an out-of-range layer snaps into 1..=4. A partially filled
//! row therefore flows through every calculator as a zero contribution.

use serde::{Deserialize, Serialize};

use crate::catalog::BarSize;

/// Maximum number of bar layers within a section
pub const MAX_LAYERS: u8 = 4;

/// Maximum number of rebar rows per section
pub const MAX_ENTRIES: usize = 4;

/// One of the six design control points along the beam span.
///
/// Three negative-moment sections (supports) and three positive-moment
/// sections (spans), checked independently against the same geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlPoint {
    M1Neg,
    M2Neg,
    M3Neg,
    M1Pos,
    M2Pos,
    M3Pos,
}

impl ControlPoint {
    /// All control points in reporting order (negatives first)
    pub const ALL: [ControlPoint; 6] = [
        ControlPoint::M1Neg,
        ControlPoint::M2Neg,
        ControlPoint::M3Neg,
        ControlPoint::M1Pos,
        ControlPoint::M2Pos,
        ControlPoint::M3Pos,
    ];

    /// Display label (e.g. "M1-")
    pub fn label(&self) -> &'static str {
        match self {
            ControlPoint::M1Neg => "M1-",
            ControlPoint::M2Neg => "M2-",
            ControlPoint::M3Neg => "M3-",
            ControlPoint::M1Pos => "M1+",
            ControlPoint::M2Pos => "M2+",
            ControlPoint::M3Pos => "M3+",
        }
    }

    /// True for the negative-moment (top steel) sections
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            ControlPoint::M1Neg | ControlPoint::M2Neg | ControlPoint::M3Neg
        )
    }

    /// Index into a six-element per-point array (ALL order)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

impl std::fmt::Display for ControlPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One user-edited rebar row: a bar count, a size, and the layer it sits in.
///
/// `size` is `None` while the user has not picked a diameter yet; such a row
/// contributes zero area and zero diameter everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarEntry {
    /// Number of bars (0 disables the row)
    pub quantity: u32,

    /// Selected bar size, if any
    pub size: Option<BarSize>,

    /// Layer index, 1 (closest to the tension face) through 4
    pub layer: u8,
}

impl RebarEntry {
    /// Create an entry, snapping the layer into 1..=MAX_LAYERS
    pub fn new(quantity: u32, size: Option<BarSize>, layer: u8) -> Self {
        RebarEntry {
            quantity,
            size,
            layer: layer.clamp(1, MAX_LAYERS),
        }
    }

    /// Build from raw UI text. Unparseable quantities become 0, unknown
    /// labels become no-size, missing layers default to 1.
    pub fn from_labels(quantity: &str, size_label: &str, layer: &str) -> Self {
        let quantity = quantity.trim().parse().unwrap_or(0);
        let size = BarSize::from_label(size_label);
        let layer = layer.trim().parse().unwrap_or(1);
        RebarEntry::new(quantity, size, layer)
    }

    /// Total steel area of this row (cm²)
    pub fn area_cm2(&self) -> f64 {
        self.quantity as f64 * self.size.map_or(0.0, |s| s.area_cm2())
    }

    /// Diameter of this row's bars (cm), 0 when no size is selected
    pub fn diameter_cm(&self) -> f64 {
        self.size.map_or(0.0, |s| s.diameter_cm())
    }

    /// True when the row actually places steel
    pub fn is_effective(&self) -> bool {
        self.quantity > 0 && self.size.is_some()
    }
}

impl Default for RebarEntry {
    /// The row a freshly added section starts with: 2 bars of 1/2" in layer 1
    fn default() -> Self {
        RebarEntry::new(2, Some(BarSize::D1_2), 1)
    }
}

/// Reinforcement state of one control point: its design moment and the
/// ordered, user-editable list of rebar rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// Design moment at this control point (T·m, signed)
    pub moment_tnm: f64,

    /// Ordered rebar rows; never empty, at most [`MAX_ENTRIES`]
    pub rebar: Vec<RebarEntry>,
}

impl SectionInput {
    /// Create a section with the default single rebar row
    pub fn new(moment_tnm: f64) -> Self {
        SectionInput {
            moment_tnm,
            rebar: vec![RebarEntry::default()],
        }
    }

    /// Add a row; refused (returns false) once the section holds MAX_ENTRIES
    pub fn add_entry(&mut self, entry: RebarEntry) -> bool {
        if self.rebar.len() >= MAX_ENTRIES {
            return false;
        }
        self.rebar.push(entry);
        true
    }

    /// Remove the row at `index`; the last remaining row is never removed
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if self.rebar.len() <= 1 || index >= self.rebar.len() {
            return false;
        }
        self.rebar.remove(index);
        true
    }

    /// Total provided steel area across all rows (cm²)
    pub fn provided_area_cm2(&self) -> f64 {
        self.rebar.iter().map(|e| e.area_cm2()).sum()
    }

    /// Per-bar diameters in row order, one value per physical bar.
    ///
    /// This is the ordered sequence renderers lay out; rows with no size or
    /// zero quantity contribute nothing.
    pub fn bar_diameters_cm(&self) -> Vec<f64> {
        let mut diams = Vec::new();
        for entry in &self.rebar {
            if !entry.is_effective() {
                continue;
            }
            diams.extend(std::iter::repeat(entry.diameter_cm()).take(entry.quantity as usize));
        }
        diams
    }
}

/// Cross-section geometry shared by all six control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamGeometry {
    /// Section width b (cm)
    pub b_cm: f64,

    /// Section height h (cm)
    pub h_cm: f64,

    /// Concrete cover r (cm)
    pub cover_cm: f64,

    /// Stirrup bar size
    pub stirrup: Option<BarSize>,

    /// Default longitudinal bar size (fallback diameter for empty layers)
    pub bar: Option<BarSize>,
}

impl BeamGeometry {
    /// Stirrup diameter (cm), 0 when unselected
    pub fn stirrup_diameter_cm(&self) -> f64 {
        self.stirrup.map_or(0.0, |s| s.diameter_cm())
    }

    /// Default longitudinal bar diameter (cm), 0 when unselected
    pub fn bar_diameter_cm(&self) -> f64 {
        self.bar.map_or(0.0, |s| s.diameter_cm())
    }
}

impl Default for BeamGeometry {
    /// The application's form defaults: 30x50 section, 4 cm cover,
    /// 3/8" stirrups, 5/8" longitudinal bars.
    fn default() -> Self {
        BeamGeometry {
            b_cm: 30.0,
            h_cm: 50.0,
            cover_cm: 4.0,
            stirrup: Some(BarSize::D3_8),
            bar: Some(BarSize::D5_8),
        }
    }
}

/// Material properties shared by all six control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete compressive strength f'c (kg/cm²)
    pub fc_kgcm2: f64,

    /// Steel yield strength fy (kg/cm²)
    pub fy_kgcm2: f64,

    /// Strength-reduction factor φ for flexure
    pub phi: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties {
            fc_kgcm2: 210.0,
            fy_kgcm2: 4200.0,
            phi: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_point_order_and_labels() {
        assert_eq!(ControlPoint::ALL[0].label(), "M1-");
        assert_eq!(ControlPoint::ALL[5].label(), "M3+");
        assert!(ControlPoint::M2Neg.is_negative());
        assert!(!ControlPoint::M2Pos.is_negative());
        assert_eq!(ControlPoint::M1Pos.index(), 3);
    }

    #[test]
    fn test_entry_from_labels_degrades() {
        let entry = RebarEntry::from_labels("abc", "bogus", "");
        assert_eq!(entry.quantity, 0);
        assert_eq!(entry.size, None);
        assert_eq!(entry.layer, 1);
        assert_eq!(entry.area_cm2(), 0.0);
        assert_eq!(entry.diameter_cm(), 0.0);
    }

    #[test]
    fn test_entry_layer_snapped_into_range() {
        assert_eq!(RebarEntry::new(1, None, 0).layer, 1);
        assert_eq!(RebarEntry::new(1, None, 9).layer, 4);
    }

    #[test]
    fn test_entry_area() {
        let entry = RebarEntry::new(3, Some(BarSize::D3_4), 1);
        assert!((entry.area_cm2() - 3.0 * 2.84).abs() < 1e-9);
    }

    #[test]
    fn test_section_row_limits() {
        let mut section = SectionInput::new(5.0);
        assert_eq!(section.rebar.len(), 1);

        // The last row cannot be removed
        assert!(!section.remove_entry(0));
        assert_eq!(section.rebar.len(), 1);

        for _ in 0..3 {
            assert!(section.add_entry(RebarEntry::default()));
        }
        // Row count caps at four
        assert!(!section.add_entry(RebarEntry::default()));
        assert_eq!(section.rebar.len(), 4);

        assert!(section.remove_entry(3));
        assert_eq!(section.rebar.len(), 3);
    }

    #[test]
    fn test_provided_area_sums_rows() {
        let mut section = SectionInput::new(0.0);
        section.rebar = vec![
            RebarEntry::new(2, Some(BarSize::D5_8), 1),
            RebarEntry::new(2, Some(BarSize::D1_2), 2),
        ];
        let expected = 2.0 * 1.99 + 2.0 * 1.29;
        assert!((section.provided_area_cm2() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bar_diameters_follow_row_order() {
        let mut section = SectionInput::new(0.0);
        section.rebar = vec![
            RebarEntry::new(2, Some(BarSize::D3_4), 1),
            RebarEntry::new(0, Some(BarSize::D1), 1),
            RebarEntry::new(1, Some(BarSize::D1_2), 1),
        ];
        assert_eq!(section.bar_diameters_cm(), vec![1.91, 1.91, 1.27]);
    }

    #[test]
    fn test_geometry_defaults() {
        let g = BeamGeometry::default();
        assert_eq!(g.stirrup_diameter_cm(), 0.95);
        assert_eq!(g.bar_diameter_cm(), 1.59);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut section = SectionInput::new(-8.25);
        section.add_entry(RebarEntry::new(2, Some(BarSize::D3_4), 2));
        let json = serde_json::to_string(&section).unwrap();
        let roundtrip: SectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(section, roundtrip);
    }
}
