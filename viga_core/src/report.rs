//! # Calculation Report Data
//!
//! Structured data for the calculation memory: the input echo table, the
//! derived design values and the per-point verification rows. Rendering
//! (HTML, PDF, CAD callouts) happens downstream — this module only assembles
//! the numbers a template consumes.

use serde::{Deserialize, Serialize};

use crate::design::beam::{check, BeamDesign, DesignSummary};

/// One row of the verification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRow {
    /// Control point label (e.g. "M1-")
    pub point: String,

    /// Design moment (T·m)
    pub moment_tnm: f64,

    /// Required steel area after limits (cm²)
    pub required_cm2: f64,

    /// Provided steel area (cm²)
    pub provided_cm2: f64,

    /// Human-readable verdict
    pub status: String,
}

/// Everything a report template needs for one beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Report heading built from the section dimensions
    pub title: String,

    /// Input echo table as (label, value) pairs
    pub inputs: Vec<(String, String)>,

    /// Full design summary (d, β1, ρ's, limits, base width)
    pub summary: DesignSummary,

    /// Per-control-point verification rows
    pub verification: Vec<VerificationRow>,
}

/// Format a dimension without trailing decimals (30, not 30.0; 27.5 stays)
fn fmt_dim(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Assemble the report data for a design snapshot.
///
/// Runs the full [`check`] internally so the report always reflects the
/// current inputs.
pub fn build_report(design: &BeamDesign) -> ReportData {
    let summary = check(design);
    let geometry = &design.geometry;
    let materials = &design.materials;

    let title = format!(
        "FLEXURAL DESIGN - BEAM {}x{}",
        fmt_dim(geometry.b_cm),
        fmt_dim(geometry.h_cm)
    );

    let stirrup_label = geometry.stirrup.map_or("-", |s| s.label());
    let bar_label = geometry.bar.map_or("-", |s| s.label());

    let inputs = vec![
        ("b (cm)".to_string(), fmt_dim(geometry.b_cm)),
        ("h (cm)".to_string(), fmt_dim(geometry.h_cm)),
        ("r (cm)".to_string(), fmt_dim(geometry.cover_cm)),
        ("f'c (kg/cm²)".to_string(), fmt_dim(materials.fc_kgcm2)),
        ("fy (kg/cm²)".to_string(), fmt_dim(materials.fy_kgcm2)),
        ("φ".to_string(), format!("{}", materials.phi)),
        ("φ stirrup".to_string(), stirrup_label.to_string()),
        ("φ bar".to_string(), bar_label.to_string()),
        (
            "d (cm)".to_string(),
            format!("{:.2}", summary.effective_depth_cm),
        ),
    ];

    let verification = summary
        .checks
        .iter()
        .map(|row| VerificationRow {
            point: row.point.label().to_string(),
            moment_tnm: row.moment_tnm,
            required_cm2: row.required_cm2,
            provided_cm2: row.provided_cm2,
            status: if row.meets_area {
                "Meets".to_string()
            } else {
                "Deficient".to_string()
            },
        })
        .collect();

    ReportData {
        title,
        inputs,
        summary,
        verification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BarSize;
    use crate::design::section::RebarEntry;

    fn demo_design() -> BeamDesign {
        let mut design =
            BeamDesign::new("V-101").with_moments([-8.0, -3.5, -8.0], [4.2, 6.0, 4.2]);
        for section in &mut design.sections {
            section.rebar = vec![RebarEntry::new(2, Some(BarSize::D5_8), 1)];
        }
        design
    }

    #[test]
    fn test_title_from_dimensions() {
        let report = build_report(&demo_design());
        assert_eq!(report.title, "FLEXURAL DESIGN - BEAM 30x50");

        let mut wide = demo_design();
        wide.geometry.b_cm = 27.5;
        assert_eq!(build_report(&wide).title, "FLEXURAL DESIGN - BEAM 27.5x50");
    }

    #[test]
    fn test_inputs_echo_geometry_and_materials() {
        let report = build_report(&demo_design());
        assert!(report
            .inputs
            .contains(&("b (cm)".to_string(), "30".to_string())));
        assert!(report
            .inputs
            .contains(&("f'c (kg/cm²)".to_string(), "210".to_string())));
        assert!(report
            .inputs
            .contains(&("φ stirrup".to_string(), "3/8\"".to_string())));
    }

    #[test]
    fn test_verification_mirrors_check() {
        let design = demo_design();
        let report = build_report(&design);
        let summary = check(&design);

        assert_eq!(report.verification.len(), 6);
        for (row, chk) in report.verification.iter().zip(&summary.checks) {
            assert_eq!(row.point, chk.point.label());
            assert_eq!(row.required_cm2, chk.required_cm2);
            assert_eq!(row.provided_cm2, chk.provided_cm2);
            assert_eq!(row.status == "Meets", chk.meets_area);
        }
    }

    #[test]
    fn test_deficient_point_reported() {
        let report = build_report(&demo_design());
        // M1- is under-reinforced in the demo
        assert_eq!(report.verification[0].status, "Deficient");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let report = build_report(&demo_design());
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: ReportData = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
