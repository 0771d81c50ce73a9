//! # Unit Types
//!
//! Type-safe wrappers for the metric design units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - RC beam design uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! VigaCalc works in the kg/cm system used by the governing concrete code:
//! - Length: centimetres (cm), metres (m)
//! - Area: square centimetres (cm²)
//! - Stress: kilograms per square centimetre (kg/cm²)
//! - Moment: tonne-metres (T·m) at the analysis boundary,
//!   kilogram-centimetres (kg·cm) inside the area formula
//!
//! ## Example
//!
//! ```rust
//! use viga_core::units::{TonneMeters, KgCm, Meters, Centimeters};
//!
//! let mu = TonneMeters(10.0);
//! let mu_kgcm: KgCm = mu.into();
//! assert_eq!(mu_kgcm.0, 1_000_000.0);
//!
//! let span = Meters(5.0);
//! let span_cm: Centimeters = span.into();
//! assert_eq!(span_cm.0, 500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm2(pub f64);

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilograms per square centimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCm2(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in tonnes (metric)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Force in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in tonne-metres (analysis output, signed)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonneMeters(pub f64);

/// Moment in kilogram-centimetres (area-formula units)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCm(pub f64);

impl From<TonneMeters> for KgCm {
    fn from(tm: TonneMeters) -> Self {
        // 1 T·m = 1000 kg x 100 cm
        KgCm(tm.0 * 100_000.0)
    }
}

impl From<KgCm> for TonneMeters {
    fn from(kgcm: KgCm) -> Self {
        TonneMeters(kgcm.0 / 100_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Cm2);
impl_arithmetic!(KgPerCm2);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Kilograms);
impl_arithmetic!(TonneMeters);
impl_arithmetic!(KgCm);
