//! # Beam Design Calculations
//!
//! The calculation pipeline for one reinforced-concrete beam. Each stage
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / `*Summary` - Results (JSON-serializable)
//! - a pure function mapping one to the other
//!
//! The flexural pipeline is total by design: bad or missing numeric input
//! degrades to zero-valued results so a half-edited form upstream never
//! crashes a recompute.
//!
//! ## Stages
//!
//! - [`section`] - Input data model (control points, rebar rows, geometry, materials)
//! - [`depth`] - Effective depth from the multi-layer bar arrangement
//! - [`flexure`] - Required steel areas and code min/max limits
//! - [`layout`] - Base-width demand and bar placement for rendering
//! - [`beam`] - Whole-beam aggregation: the six-point verification table
//! - [`shear`] - Linear shear diagram and critical-section value

pub mod beam;
pub mod depth;
pub mod flexure;
pub mod layout;
pub mod section;
pub mod shear;

// Re-export commonly used types
pub use beam::{check, BeamDesign, DesignSummary, SectionCheck};
pub use depth::{effective_depth, EffectiveDepth, LayerSummary};
pub use flexure::{reinforcement_limits, required_area, ReinforcementLimits, RequiredArea};
pub use layout::{layout_positions_cm, required_base_width_cm, BaseWidthStatus};
pub use section::{BeamGeometry, ControlPoint, MaterialProperties, RebarEntry, SectionInput};
pub use shear::{ShearInput, ShearResult, ShearSupport};
