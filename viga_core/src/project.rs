//! # Project Data Structures
//!
//! The `Project` struct is the root container for a design session.
//! Projects serialize to `.vgc` (VigaCalc) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (code reference, default materials)
//! └── items: HashMap<Uuid, BeamDesign> (all beams in the job)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use viga_core::project::Project;
//! use viga_core::design::beam::BeamDesign;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let id = project.add_beam(BeamDesign::new("V-101"));
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(project.get_beam(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::beam::BeamDesign;
use crate::design::section::MaterialProperties;

/// Current schema version for .vgc files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.vgc` files.
/// Beams are stored in a flat UUID-keyed map for O(1) lookups and stable
/// references when the list is reordered in a front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (code reference, default materials)
    pub settings: GlobalSettings,

    /// All beam designs, keyed by UUID
    pub items: HashMap<Uuid, BeamDesign>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use viga_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a beam design to the project.
    ///
    /// Returns the UUID assigned to the beam.
    pub fn add_beam(&mut self, beam: BeamDesign) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, beam);
        self.touch();
        id
    }

    /// Remove a beam by UUID.
    ///
    /// Returns the removed design if it existed.
    pub fn remove_beam(&mut self, id: &Uuid) -> Option<BeamDesign> {
        let beam = self.items.remove(id);
        if beam.is_some() {
            self.touch();
        }
        beam
    }

    /// Get a beam by UUID.
    pub fn get_beam(&self, id: &Uuid) -> Option<&BeamDesign> {
        self.items.get(id)
    }

    /// Get a mutable reference to a beam by UUID.
    ///
    /// Getting a mutable reference marks the project as modified.
    pub fn get_beam_mut(&mut self, id: &Uuid) -> Option<&mut BeamDesign> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of beams in the project
    pub fn beam_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Governing concrete code reference (e.g., "E.060")
    pub code: String,

    /// Default material properties for new beams
    pub default_materials: MaterialProperties,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "E.060".to_string(),
            default_materials: MaterialProperties::default(),
        }
    }
}
