//! # Effective-Depth Calculator
//!
//! Derives the effective depth `d` of the tension reinforcement from the
//! multi-layer bar arrangement: each layer's centroid distance from the
//! compression face follows the cover/stirrup/bar-stack geometry with an
//! assumed 2.5 cm clear spacing between layers, and `d` is the area-weighted
//! average over the active layers.
//!
//! Layer buckets are built from every rebar row of the design session, not a
//! single section: all six control points share one `d`.
//!
//! ## Example
//!
//! ```rust
//! use viga_core::catalog::BarSize;
//! use viga_core::design::depth::{effective_depth, LayerSummary};
//! use viga_core::design::section::{BeamGeometry, RebarEntry};
//!
//! let geometry = BeamGeometry::default(); // 30x50, r=4, 3/8" stirrups
//! let rows = [RebarEntry::new(2, Some(BarSize::D1_2), 1)];
//! let summary = LayerSummary::from_entries(rows.iter(), geometry.bar_diameter_cm());
//!
//! let result = effective_depth(&geometry, &summary);
//! assert!((result.d_cm - 44.415).abs() < 1e-9);
//! assert_eq!(result.active_layers, 1);
//! ```

use serde::{Deserialize, Serialize};

use super::layout::BAR_CLEAR_SPACING_CM;
use super::section::{BeamGeometry, RebarEntry, MAX_LAYERS};

/// Vertical drop from layer 3 to layer 4 centroids (cm).
///
/// Layer 4 is not stacked from the bar diameters like layers 2 and 3; it sits
/// a flat 3 cm below layer 3.
const LAYER4_OFFSET_CM: f64 = 3.0;

/// Per-layer reinforcement buckets feeding the effective-depth formulas.
///
/// Each layer is characterized by the single rebar row with the largest total
/// area in that layer: that row's area is the layer's weight and its diameter
/// the layer's representative diameter. Layers with no rows keep zero weight
/// and fall back to the shared longitudinal-bar diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSummary {
    /// Governing row area per layer (cm²), index 0 = layer 1
    pub areas: [f64; MAX_LAYERS as usize],

    /// Representative diameter per layer (cm)
    pub diameters: [f64; MAX_LAYERS as usize],
}

impl LayerSummary {
    /// Build the buckets from rebar rows (typically all rows of all six
    /// sections). `fallback_diameter_cm` seeds every layer's diameter.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = &'a RebarEntry>,
        fallback_diameter_cm: f64,
    ) -> Self {
        let mut areas = [0.0; MAX_LAYERS as usize];
        let mut diameters = [fallback_diameter_cm; MAX_LAYERS as usize];

        for entry in entries {
            let idx = (entry.layer.clamp(1, MAX_LAYERS) - 1) as usize;
            let area = entry.area_cm2();
            if area > areas[idx] {
                areas[idx] = area;
                diameters[idx] = entry.diameter_cm();
            }
        }

        LayerSummary { areas, diameters }
    }

    /// Greatest layer index (1-based) holding any steel; 1 when none do
    pub fn active_layers(&self) -> usize {
        self.areas
            .iter()
            .rposition(|&a| a > 0.0)
            .map_or(1, |i| i + 1)
    }
}

/// Result of the effective-depth computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDepth {
    /// Effective depth d (cm)
    pub d_cm: f64,

    /// Detected number of active bar layers (1..=4), shown in the UI
    pub active_layers: usize,
}

/// Centroid distances from the tension face for each layer (cm).
///
/// Offset 1 clears cover and stirrup; offsets 2 and 3 stack the previous
/// layers' diameters plus the 2.5 cm clear spacing; offset 4 is a flat
/// 3 cm below offset 3. `d_k = h - offset_k`. Renderers use the same
/// offsets for bar y-coordinates (bottom steel at `offset`, top steel at
/// `h - offset`).
pub fn layer_centroid_offsets_cm(cover_cm: f64, stirrup_cm: f64, diameters: &[f64; 4]) -> [f64; 4] {
    let [db1, db2, db3, _] = *diameters;
    let base = cover_cm + stirrup_cm;
    let off1 = base + 0.5 * db1;
    let off2 = base + db1 + BAR_CLEAR_SPACING_CM + 0.5 * db2;
    let off3 = base + db1 + BAR_CLEAR_SPACING_CM + db2 + BAR_CLEAR_SPACING_CM + 0.5 * db3;
    let off4 = off3 + LAYER4_OFFSET_CM;
    [off1, off2, off3, off4]
}

/// Compute the effective depth from the layer buckets.
///
/// Only layers 1 through the detected active maximum contribute; if their
/// total weight is zero (degenerate), `d` falls back to the layer-1 depth.
/// Never fails: degenerate geometry yields a degenerate (possibly ≤ 0)
/// depth rather than an error.
pub fn effective_depth(geometry: &BeamGeometry, summary: &LayerSummary) -> EffectiveDepth {
    let h = geometry.h_cm;
    let offsets =
        layer_centroid_offsets_cm(geometry.cover_cm, geometry.stirrup_diameter_cm(), &summary.diameters);

    let active_layers = summary.active_layers();
    let d1 = h - offsets[0];

    let d_cm = if active_layers == 1 {
        d1
    } else {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for k in 0..active_layers {
            weighted += (h - offsets[k]) * summary.areas[k];
            total += summary.areas[k];
        }
        if total > 0.0 {
            weighted / total
        } else {
            d1
        }
    };

    EffectiveDepth {
        d_cm,
        active_layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BarSize;

    fn geometry() -> BeamGeometry {
        // 30x50 section, 4 cm cover, 3/8" stirrup, 5/8" default bar
        BeamGeometry::default()
    }

    #[test]
    fn test_single_layer_depth() {
        // d1 = 50 - 4 - 0.95 - 0.5*1.27 = 44.415
        let rows = [RebarEntry::new(2, Some(BarSize::D1_2), 1)];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        let result = effective_depth(&geometry(), &summary);
        assert!((result.d_cm - 44.415).abs() < 1e-9);
        assert_eq!(result.active_layers, 1);
    }

    #[test]
    fn test_two_layer_equal_areas_average() {
        // Same bars in both layers: d is the arithmetic mean of d1 and d2
        let rows = [
            RebarEntry::new(2, Some(BarSize::D5_8), 1),
            RebarEntry::new(2, Some(BarSize::D5_8), 2),
        ];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        let result = effective_depth(&geometry(), &summary);

        let d1 = 50.0 - 4.0 - 0.95 - 0.5 * 1.59;
        let d2 = 50.0 - 4.0 - 0.95 - 1.59 - 2.5 - 0.5 * 1.59;
        assert!((result.d_cm - 0.5 * (d1 + d2)).abs() < 1e-9);
        assert_eq!(result.active_layers, 2);
    }

    #[test]
    fn test_two_layer_weighting() {
        let rows = [
            RebarEntry::new(4, Some(BarSize::D3_4), 1),
            RebarEntry::new(2, Some(BarSize::D1_2), 2),
        ];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        let result = effective_depth(&geometry(), &summary);

        let a1 = 4.0 * 2.84;
        let a2 = 2.0 * 1.29;
        let d1 = 50.0 - 4.0 - 0.95 - 0.5 * 1.91;
        let d2 = 50.0 - 4.0 - 0.95 - 1.91 - 2.5 - 0.5 * 1.27;
        let expected = (d1 * a1 + d2 * a2) / (a1 + a2);
        assert!((result.d_cm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_layer_bucket_takes_largest_row() {
        // Two rows in layer 1: the bucket keeps the larger row's area and
        // diameter, not the sum of both rows.
        let rows = [
            RebarEntry::new(2, Some(BarSize::D1_2), 1), // 2.58 cm²
            RebarEntry::new(2, Some(BarSize::D3_4), 1), // 5.68 cm²
        ];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        assert!((summary.areas[0] - 5.68).abs() < 1e-9);
        assert_eq!(summary.diameters[0], 1.91);
    }

    #[test]
    fn test_active_layers_detection() {
        let rows = [
            RebarEntry::new(2, Some(BarSize::D1_2), 1),
            RebarEntry::new(2, Some(BarSize::D1_2), 3),
        ];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        assert_eq!(summary.active_layers(), 3);

        // No steel anywhere defaults to a single layer
        let no_rows: [RebarEntry; 0] = [];
        let empty = LayerSummary::from_entries(no_rows.iter(), geometry().bar_diameter_cm());
        assert_eq!(empty.active_layers(), 1);
    }

    #[test]
    fn test_no_steel_falls_back_to_layer1_depth() {
        let no_rows: [RebarEntry; 0] = [];
        let empty = LayerSummary::from_entries(no_rows.iter(), geometry().bar_diameter_cm());
        let result = effective_depth(&geometry(), &empty);
        // d1 with the 5/8" fallback diameter
        assert!((result.d_cm - (50.0 - 4.0 - 0.95 - 0.5 * 1.59)).abs() < 1e-9);
        assert_eq!(result.active_layers, 1);
    }

    #[test]
    fn test_fourth_layer_flat_offset() {
        let diams = [1.59, 1.59, 1.59, 1.59];
        let offsets = layer_centroid_offsets_cm(4.0, 0.95, &diams);
        assert!((offsets[3] - (offsets[2] + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_four_layer_depth() {
        let rows = [
            RebarEntry::new(2, Some(BarSize::D5_8), 1),
            RebarEntry::new(2, Some(BarSize::D5_8), 2),
            RebarEntry::new(2, Some(BarSize::D5_8), 3),
            RebarEntry::new(2, Some(BarSize::D5_8), 4),
        ];
        let summary = LayerSummary::from_entries(rows.iter(), geometry().bar_diameter_cm());
        let result = effective_depth(&geometry(), &summary);
        assert_eq!(result.active_layers, 4);

        let offsets = layer_centroid_offsets_cm(4.0, 0.95, &summary.diameters);
        let expected: f64 = offsets.iter().map(|o| 50.0 - o).sum::<f64>() / 4.0;
        assert!((result.d_cm - expected).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_geometry_degrades_not_errors() {
        let bad = BeamGeometry {
            h_cm: 0.0,
            ..geometry()
        };
        let rows = [RebarEntry::new(2, Some(BarSize::D1_2), 1)];
        let summary = LayerSummary::from_entries(rows.iter(), bad.bar_diameter_cm());
        let result = effective_depth(&bad, &summary);
        assert!(result.d_cm < 0.0);
    }
}
