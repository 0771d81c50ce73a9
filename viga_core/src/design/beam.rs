//! # Beam Design Check
//!
//! Aggregates the whole flexural design of one beam: the six control points,
//! their required and provided steel areas, the shared effective depth, and
//! the base-width verification.
//!
//! [`check`] is a total pure function over a design snapshot. It is re-run in
//! full on every user edit; results are never cached or mutated in place.
//! Invalid numeric input does not error — it degrades to an all-zero summary
//! the caller can still render.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::design::beam::{check, BeamDesign};
//!
//! let design = BeamDesign::new("V-101").with_moments(
//!     [-8.0, -3.5, -8.0],
//!     [4.2, 6.0, 4.2],
//! );
//!
//! let summary = check(&design);
//! println!("d = {:.2} cm", summary.effective_depth_cm);
//! for point in &summary.checks {
//!     println!("{}: As req {:.2} cm², provided {:.2} cm²",
//!         point.point.label(), point.required_cm2, point.provided_cm2);
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::depth::{effective_depth, LayerSummary};
use super::flexure::{reinforcement_limits, required_area, ReinforcementLimits};
use super::layout::{required_base_width_cm, BaseWidthStatus};
use super::section::{BeamGeometry, ControlPoint, MaterialProperties, SectionInput};

/// Full input snapshot for one beam design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesign {
    /// User label for this beam (e.g. "V-101", "Eje B tramo 2")
    pub label: String,

    /// Cross-section geometry, shared by all control points
    pub geometry: BeamGeometry,

    /// Concrete/steel properties, shared by all control points
    pub materials: MaterialProperties,

    /// The six control points in [`ControlPoint::ALL`] order
    pub sections: [SectionInput; 6],
}

impl BeamDesign {
    /// Create a design with default geometry, materials, rebar and zero moments
    pub fn new(label: impl Into<String>) -> Self {
        BeamDesign {
            label: label.into(),
            geometry: BeamGeometry::default(),
            materials: MaterialProperties::default(),
            sections: std::array::from_fn(|_| SectionInput::new(0.0)),
        }
    }

    /// Set the analysis moments: three negative (supports), three positive
    /// (spans), in span order.
    pub fn with_moments(mut self, negative_tnm: [f64; 3], positive_tnm: [f64; 3]) -> Self {
        for (i, m) in negative_tnm.into_iter().chain(positive_tnm).enumerate() {
            self.sections[i].moment_tnm = m;
        }
        self
    }

    /// Section at a control point
    pub fn section(&self, point: ControlPoint) -> &SectionInput {
        &self.sections[point.index()]
    }

    /// Mutable section at a control point
    pub fn section_mut(&mut self, point: ControlPoint) -> &mut SectionInput {
        &mut self.sections[point.index()]
    }

    /// All rebar rows across the six sections, in section order
    pub fn all_entries(&self) -> impl Iterator<Item = &super::section::RebarEntry> {
        self.sections.iter().flat_map(|s| s.rebar.iter())
    }

    fn scalar_inputs_finite(&self) -> bool {
        [
            self.geometry.b_cm,
            self.geometry.h_cm,
            self.geometry.cover_cm,
            self.materials.fc_kgcm2,
            self.materials.fy_kgcm2,
            self.materials.phi,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.sections.iter().all(|s| s.moment_tnm.is_finite())
    }
}

/// Verification of one control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionCheck {
    /// Which control point this row describes
    pub point: ControlPoint,

    /// Design moment (T·m, signed)
    pub moment_tnm: f64,

    /// Required area straight from the formula (cm²)
    pub required_raw_cm2: f64,

    /// Required area governed by As_min/As_max (cm²)
    pub required_cm2: f64,

    /// Steel area actually placed (cm²)
    pub provided_cm2: f64,

    /// Base width this section's bar arrangement needs (cm)
    pub base_width_cm: f64,

    /// True when provided ≥ required
    pub meets_area: bool,
}

/// Results of a full design check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Effective depth d (cm), shared by all control points
    pub effective_depth_cm: f64,

    /// Detected number of active bar layers
    pub active_layers: usize,

    /// β1, ρ_bal, ρ_max, As_min, As_max for this section
    pub limits: ReinforcementLimits,

    /// One verification row per control point, in [`ControlPoint::ALL`] order
    pub checks: Vec<SectionCheck>,

    /// Total provided steel across all six points (cm²)
    pub provided_total_cm2: f64,

    /// Governing base-width demand across all six points (cm)
    pub required_base_cm: f64,

    /// Whether the governing demand fits the actual width b
    pub base_status: BaseWidthStatus,
}

impl DesignSummary {
    /// True when every control point has enough steel and the bars fit
    pub fn passes(&self) -> bool {
        self.base_status == BaseWidthStatus::Ok && self.checks.iter().all(|c| c.meets_area)
    }

    /// Control points that still need steel
    pub fn deficient_points(&self) -> Vec<ControlPoint> {
        self.checks
            .iter()
            .filter(|c| !c.meets_area)
            .map(|c| c.point)
            .collect()
    }

    /// All-zero summary used when scalar inputs are unusable
    fn zeroed() -> Self {
        DesignSummary {
            effective_depth_cm: 0.0,
            active_layers: 1,
            limits: ReinforcementLimits {
                beta1: 0.0,
                rho_bal: 0.0,
                rho_max: 0.0,
                as_min_cm2: 0.0,
                as_max_cm2: 0.0,
            },
            checks: ControlPoint::ALL
                .iter()
                .map(|&point| SectionCheck {
                    point,
                    moment_tnm: 0.0,
                    required_raw_cm2: 0.0,
                    required_cm2: 0.0,
                    provided_cm2: 0.0,
                    base_width_cm: 0.0,
                    meets_area: true,
                })
                .collect(),
            provided_total_cm2: 0.0,
            required_base_cm: 0.0,
            base_status: BaseWidthStatus::Ok,
        }
    }
}

/// Run the full design check over a snapshot.
///
/// Pure and stateless: every derived value is recomputed from the current
/// inputs. Non-finite scalar inputs (a half-typed field upstream) yield the
/// zeroed summary instead of an error.
pub fn check(design: &BeamDesign) -> DesignSummary {
    if !design.scalar_inputs_finite() {
        return DesignSummary::zeroed();
    }

    let geometry = &design.geometry;
    let materials = &design.materials;
    let stirrup_cm = geometry.stirrup_diameter_cm();

    // One effective depth for the whole beam, from every section's rows
    let summary = LayerSummary::from_entries(design.all_entries(), geometry.bar_diameter_cm());
    let depth = effective_depth(geometry, &summary);

    let limits = reinforcement_limits(
        materials.fc_kgcm2,
        materials.fy_kgcm2,
        geometry.b_cm,
        depth.d_cm,
    );

    let mut checks = Vec::with_capacity(ControlPoint::ALL.len());
    let mut provided_total_cm2 = 0.0;
    let mut required_base_cm: f64 = 0.0;

    for point in ControlPoint::ALL {
        let section = design.section(point);
        let required = required_area(
            section.moment_tnm,
            materials.fc_kgcm2,
            geometry.b_cm,
            depth.d_cm,
            materials.fy_kgcm2,
            materials.phi,
            &limits,
        );
        let provided_cm2 = section.provided_area_cm2();
        let base_width_cm =
            required_base_width_cm(&section.rebar, geometry.cover_cm, stirrup_cm);

        provided_total_cm2 += provided_cm2;
        required_base_cm = required_base_cm.max(base_width_cm);

        checks.push(SectionCheck {
            point,
            moment_tnm: section.moment_tnm,
            required_raw_cm2: required.raw_cm2,
            required_cm2: required.governed_cm2,
            provided_cm2,
            base_width_cm,
            meets_area: provided_cm2 >= required.governed_cm2,
        });
    }

    DesignSummary {
        effective_depth_cm: depth.d_cm,
        active_layers: depth.active_layers,
        limits,
        checks,
        provided_total_cm2,
        required_base_cm,
        base_status: BaseWidthStatus::check(required_base_cm, geometry.b_cm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BarSize;
    use crate::design::section::RebarEntry;

    /// 30x50 beam with 2 x 5/8" in every section and moderate moments
    fn demo_design() -> BeamDesign {
        let mut design =
            BeamDesign::new("V-101").with_moments([-8.0, -3.5, -8.0], [4.2, 6.0, 4.2]);
        for section in &mut design.sections {
            section.rebar = vec![RebarEntry::new(2, Some(BarSize::D5_8), 1)];
        }
        design
    }

    #[test]
    fn test_effective_depth_for_demo() {
        // d = 50 - 4 - 0.95 - 0.5*1.59 = 44.255
        let summary = check(&demo_design());
        assert!((summary.effective_depth_cm - 44.255).abs() < 1e-9);
        assert_eq!(summary.active_layers, 1);
    }

    #[test]
    fn test_check_produces_six_rows_in_order() {
        let summary = check(&demo_design());
        assert_eq!(summary.checks.len(), 6);
        for (row, point) in summary.checks.iter().zip(ControlPoint::ALL) {
            assert_eq!(row.point, point);
        }
        assert_eq!(summary.checks[0].moment_tnm, -8.0);
        assert_eq!(summary.checks[4].moment_tnm, 6.0);
    }

    #[test]
    fn test_required_respects_limits() {
        let summary = check(&demo_design());
        for row in &summary.checks {
            assert!(row.required_cm2 >= summary.limits.as_min_cm2);
            assert!(row.required_cm2 <= summary.limits.as_max_cm2);
        }
    }

    #[test]
    fn test_provided_total_is_sum_of_rows() {
        let summary = check(&demo_design());
        let expected: f64 = summary.checks.iter().map(|c| c.provided_cm2).sum();
        assert!((summary.provided_total_cm2 - expected).abs() < 1e-9);
        // 6 sections x 2 x 1.99 cm²
        assert!((summary.provided_total_cm2 - 6.0 * 2.0 * 1.99).abs() < 1e-9);
    }

    #[test]
    fn test_adding_steel_flips_deficient_point() {
        let mut design = demo_design();
        // M1-: 8 T·m needs more than 2 x 5/8" (≈ 3.98 cm²)
        let summary = check(&design);
        assert!(!summary.checks[0].meets_area);
        assert!(summary.deficient_points().contains(&ControlPoint::M1Neg));

        design.sections[0].rebar = vec![
            RebarEntry::new(2, Some(BarSize::D5_8), 1),
            RebarEntry::new(2, Some(BarSize::D3_4), 1),
        ];
        let summary = check(&design);
        assert!(summary.checks[0].meets_area);
    }

    #[test]
    fn test_base_width_governs_across_sections() {
        let mut design = demo_design();
        design.sections[2].rebar = vec![RebarEntry::new(6, Some(BarSize::D1), 1)];
        let summary = check(&design);

        // 2*4 + 2*0.95 + 5*2.5 + 6*2.54 = 37.64, wider than b = 30
        assert!((summary.required_base_cm - 37.64).abs() < 1e-9);
        assert_eq!(summary.base_status, BaseWidthStatus::IncreaseBaseOrLayers);
        assert!(!summary.passes());
    }

    #[test]
    fn test_demo_base_width_fits() {
        let summary = check(&demo_design());
        // 2*4 + 2*0.95 + 1*2.5 + 2*1.59 = 15.58
        assert!((summary.required_base_cm - 15.58).abs() < 1e-9);
        assert_eq!(summary.base_status, BaseWidthStatus::Ok);
    }

    #[test]
    fn test_non_finite_input_degrades_to_zeroed() {
        let mut design = demo_design();
        design.geometry.b_cm = f64::NAN;
        let summary = check(&design);
        assert_eq!(summary.effective_depth_cm, 0.0);
        assert_eq!(summary.limits.as_min_cm2, 0.0);
        assert_eq!(summary.provided_total_cm2, 0.0);
        assert!(summary.checks.iter().all(|c| c.required_cm2 == 0.0));
    }

    #[test]
    fn test_reordering_rows_never_changes_results() {
        let mut design = demo_design();
        design.sections[1].rebar = vec![
            RebarEntry::new(2, Some(BarSize::D1), 1),
            RebarEntry::new(2, Some(BarSize::D1_2), 1),
        ];
        let before = check(&design);

        design.sections[1].rebar.swap(0, 1);
        let after = check(&design);

        assert_eq!(before.provided_total_cm2, after.provided_total_cm2);
        assert_eq!(before.required_base_cm, after.required_base_cm);
        assert_eq!(before.effective_depth_cm, after.effective_depth_cm);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let design = demo_design();
        let json = serde_json::to_string_pretty(&design).unwrap();
        let roundtrip: BeamDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(design, roundtrip);

        let summary = check(&design);
        let json = serde_json::to_string(&summary).unwrap();
        let roundtrip: DesignSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
