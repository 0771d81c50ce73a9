//! # Shear Diagram
//!
//! The shear design stage works from a linear shear diagram: the user enters
//! the support shear Vu and the clear span, the effective depth comes from
//! the flexural stage, and the design value is read at the critical section a
//! distance `d` from the support face.
//!
//! Two span configurations are supported: a simply supported span with the
//! antisymmetric ±Vu diagram, and a cantilever tapering from Vu at the
//! support to zero at the free end.

use serde::{Deserialize, Serialize};

use crate::units::{Centimeters, Meters};

/// Span configuration for the shear diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShearSupport {
    /// Simply supported span: V runs from +Vu to −Vu
    #[default]
    Supported,
    /// Cantilever: V runs from Vu at the support to 0 at the tip
    Cantilever,
}

/// Input for the shear check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearInput {
    /// User label for this span
    pub label: String,

    /// Shear at the support face Vu (tonnes)
    pub vu_tn: f64,

    /// Clear span Ln (m)
    pub clear_span_m: f64,

    /// Effective depth d (cm), carried over from the flexural design
    pub d_cm: f64,

    /// Span configuration
    pub support: ShearSupport,
}

/// Shear diagram and the critical-section value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearResult {
    /// Shear at the support face (tonnes)
    pub vu_face_tn: f64,

    /// Design shear at the critical section (tonnes)
    pub vu_critical_tn: f64,

    /// Distance from the support face to the critical section (m)
    pub critical_offset_m: f64,

    /// Diagram polyline as (x in m, V in tonnes) pairs for rendering
    pub diagram: Vec<(f64, f64)>,
}

/// Evaluate the diagram ordinate at `x` metres from the support face.
fn shear_at(vu_tn: f64, span_m: f64, support: ShearSupport, x_m: f64) -> f64 {
    match support {
        ShearSupport::Supported => vu_tn * (1.0 - 2.0 * x_m / span_m),
        ShearSupport::Cantilever => vu_tn * (1.0 - x_m / span_m),
    }
}

/// Build the shear diagram and read the critical-section value.
///
/// Degenerate spans (Ln ≤ 0, or the critical section falling outside the
/// span) degrade to an all-zero result rather than an error.
pub fn calculate(input: &ShearInput) -> ShearResult {
    let span_m = input.clear_span_m;
    let Meters(d_m) = Centimeters(input.d_cm).into();

    if !(span_m.is_finite() && input.vu_tn.is_finite() && d_m.is_finite())
        || span_m <= 0.0
        || d_m < 0.0
        || d_m > span_m
    {
        return ShearResult {
            vu_face_tn: 0.0,
            vu_critical_tn: 0.0,
            critical_offset_m: 0.0,
            diagram: Vec::new(),
        };
    }

    let vu_critical_tn = shear_at(input.vu_tn, span_m, input.support, d_m);

    // Endpoints plus the critical section are enough for a linear diagram
    let diagram = vec![
        (0.0, shear_at(input.vu_tn, span_m, input.support, 0.0)),
        (d_m, vu_critical_tn),
        (span_m, shear_at(input.vu_tn, span_m, input.support, span_m)),
    ];

    ShearResult {
        vu_face_tn: input.vu_tn,
        vu_critical_tn,
        critical_offset_m: d_m,
        diagram,
    }
}
