//! # Rebar Layout Engine
//!
//! Geometric placement of bars within a section: per-layer width demand
//! (cover + stirrup legs + bar diameters + clear spacing) and the horizontal
//! positions a renderer draws bars at.
//!
//! Width demand is order-independent; the x-positions preserve the
//! user-chosen bar order, which is purely cosmetic — reordering bars never
//! changes any area or width result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::RebarEntry;

/// Assumed clear spacing between adjacent bars and between layers (cm)
pub const BAR_CLEAR_SPACING_CM: f64 = 2.5;

/// Bars of one layer, grouped in entry order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerBars {
    /// Total bar count in the layer
    pub count: u32,

    /// Sum of the bar diameters (cm)
    pub sum_diameter_cm: f64,

    /// Per-bar diameters in entry order (cm)
    pub diameters_cm: Vec<f64>,
}

impl LayerBars {
    /// Width this layer needs: cover and stirrup legs on both sides, clear
    /// spacing between adjacent bars, plus the bars themselves.
    pub fn base_width_cm(&self, cover_cm: f64, stirrup_cm: f64) -> f64 {
        let spacing = (self.count.saturating_sub(1)) as f64 * BAR_CLEAR_SPACING_CM;
        2.0 * cover_cm + 2.0 * stirrup_cm + spacing + self.sum_diameter_cm
    }
}

/// Group a section's rebar rows by layer, preserving entry order within
/// each layer. Rows with no size or zero quantity contribute nothing.
pub fn group_by_layer(entries: &[RebarEntry]) -> BTreeMap<u8, LayerBars> {
    let mut layers: BTreeMap<u8, LayerBars> = BTreeMap::new();
    for entry in entries {
        if !entry.is_effective() {
            continue;
        }
        let group = layers.entry(entry.layer).or_default();
        let dia = entry.diameter_cm();
        group.count += entry.quantity;
        group.sum_diameter_cm += entry.quantity as f64 * dia;
        group
            .diameters_cm
            .extend(std::iter::repeat(dia).take(entry.quantity as usize));
    }
    layers
}

/// Base width the section needs: the max demand over its layers, or the
/// bare cover-plus-stirrup width when no bars are placed.
pub fn required_base_width_cm(entries: &[RebarEntry], cover_cm: f64, stirrup_cm: f64) -> f64 {
    group_by_layer(entries)
        .values()
        .map(|layer| layer.base_width_cm(cover_cm, stirrup_cm))
        .fold(2.0 * cover_cm + 2.0 * stirrup_cm, f64::max)
}

/// Outcome of comparing required base width against the actual section width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseWidthStatus {
    /// The bars fit in the section width
    Ok,
    /// The section is too narrow for this arrangement
    IncreaseBaseOrLayers,
}

impl BaseWidthStatus {
    /// Compare a width demand against the available width b
    pub fn check(required_cm: f64, b_cm: f64) -> Self {
        if required_cm <= b_cm {
            BaseWidthStatus::Ok
        } else {
            BaseWidthStatus::IncreaseBaseOrLayers
        }
    }

    /// Status label for tables and the UI
    pub fn label(&self) -> &'static str {
        match self {
            BaseWidthStatus::Ok => "OK",
            BaseWidthStatus::IncreaseBaseOrLayers => "Increase base width or add a layer",
        }
    }
}

/// Horizontal bar centers for one layer, left to right in input order.
///
/// Bars spread across the inner width between the stirrup legs,
/// `[r+de, b−r−de]`: a lone bar sits at mid-width; otherwise the first and
/// last bars run tangent to the inner edges and the centers in between are
/// evenly spaced.
pub fn layout_positions_cm(
    diameters_cm: &[f64],
    b_cm: f64,
    cover_cm: f64,
    stirrup_cm: f64,
) -> Vec<f64> {
    let n = diameters_cm.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![b_cm / 2.0];
    }

    let left = cover_cm + stirrup_cm + 0.5 * diameters_cm[0];
    let right = b_cm - cover_cm - stirrup_cm - 0.5 * diameters_cm[n - 1];
    let step = (right - left) / (n - 1) as f64;
    (0..n).map(|i| left + step * i as f64).collect()
}
