//! # Flexural Steel Requirements
//!
//! Required steel area for a singly-reinforced rectangular section, plus the
//! code-mandated minimum/maximum reinforcement limits that govern it.
//!
//! ## Formula
//!
//! With stresses in kg/cm², lengths in cm and the moment converted from T·m
//! to kg·cm:
//!
//! ```text
//! term = 1.7·fc·b·d / (2·fy)
//! root = 2.89·(fc·b·d)²/fy² − 6.8·fc·b·Mu/(φ·fy²)
//! As   = term − 0.5·√max(root, 0)
//! ```
//!
//! The radicand clamp is a numerical guard, not a capacity check: a moment
//! beyond what the closed form can resolve degrades to `As = term` instead of
//! producing a NaN. Likewise β1 keeps decreasing above 280 kg/cm² with no
//! lower floor. Both behaviors are deliberate and must not be "corrected".
//!
//! ## Example
//!
//! ```rust
//! use viga_core::design::flexure::{reinforcement_limits, required_area};
//!
//! let limits = reinforcement_limits(210.0, 4200.0, 30.0, 44.255);
//! let area = required_area(10.0, 210.0, 30.0, 44.255, 4200.0, 0.9, &limits);
//! assert!(area.governed_cm2 >= limits.as_min_cm2);
//! assert!(area.governed_cm2 <= limits.as_max_cm2);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{KgCm, TonneMeters};

/// Code-mandated reinforcement limits for a section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLimits {
    /// Stress-block depth coefficient β1
    pub beta1: f64,

    /// Balanced reinforcement ratio ρ_bal
    pub rho_bal: f64,

    /// Maximum permitted ratio ρ_max = 0.75·ρ_bal
    pub rho_max: f64,

    /// Minimum steel area As_min (cm²)
    pub as_min_cm2: f64,

    /// Maximum steel area As_max (cm²)
    pub as_max_cm2: f64,
}

/// Required steel area at one control point.
///
/// Both the raw formula output and the limit-governed value are kept: the
/// report shows the raw area next to the governed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredArea {
    /// Area straight out of the closed-form formula (cm²)
    pub raw_cm2: f64,

    /// Raw area governed by As_min/As_max (cm²)
    pub governed_cm2: f64,
}

/// Compute β1 and the min/max steel areas for the section.
///
/// β1 is 0.85 up to fc = 280 kg/cm² and drops 0.05 per 70 kg/cm² beyond,
/// with no lower floor.
pub fn reinforcement_limits(
    fc_kgcm2: f64,
    fy_kgcm2: f64,
    b_cm: f64,
    d_cm: f64,
) -> ReinforcementLimits {
    let beta1 = if fc_kgcm2 <= 280.0 {
        0.85
    } else {
        0.85 - ((fc_kgcm2 - 280.0) / 70.0) * 0.05
    };

    let as_min_cm2 = 0.7 * (fc_kgcm2.sqrt() / fy_kgcm2) * b_cm * d_cm;
    let rho_bal = (0.85 * fc_kgcm2 * beta1 / fy_kgcm2) * (6000.0 / (6000.0 + fy_kgcm2));
    let rho_max = 0.75 * rho_bal;
    let as_max_cm2 = rho_max * b_cm * d_cm;

    ReinforcementLimits {
        beta1,
        rho_bal,
        rho_max,
        as_min_cm2,
        as_max_cm2,
    }
}

/// Required steel area for one design moment (T·m, sign ignored).
///
/// The governed value applies the lower bound first, so a pathological
/// As_min > As_max resolves to As_max.
pub fn required_area(
    moment_tnm: f64,
    fc_kgcm2: f64,
    b_cm: f64,
    d_cm: f64,
    fy_kgcm2: f64,
    phi: f64,
    limits: &ReinforcementLimits,
) -> RequiredArea {
    let KgCm(mu_kgcm) = TonneMeters(moment_tnm.abs()).into();

    let term = 1.7 * fc_kgcm2 * b_cm * d_cm / (2.0 * fy_kgcm2);
    let root = 2.89 * (fc_kgcm2 * b_cm * d_cm).powi(2) / fy_kgcm2.powi(2)
        - 6.8 * fc_kgcm2 * b_cm * mu_kgcm / (phi * fy_kgcm2.powi(2));
    let raw_cm2 = term - 0.5 * root.max(0.0).sqrt();

    RequiredArea {
        raw_cm2,
        governed_cm2: raw_cm2.max(limits.as_min_cm2).min(limits.as_max_cm2),
    }
}
