//! Hazard descriptors injected into the active mission.

use serde::{Deserialize, Serialize};

use crate::enums::{HazardType, Severity};
use crate::types::GeoCoordinate;

/// An immutable, severity-tagged risk event.
///
/// Identity is the `id` field. The engine does not deduplicate by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: String,
    /// Mission-time stamp of the report, e.g. `T+72:14:30`.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: HazardType,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<GeoCoordinate>,
}

impl Hazard {
    pub fn new(
        id: impl Into<String>,
        kind: HazardType,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: String::new(),
            kind,
            severity,
            description: description.into(),
            coordinates: None,
        }
    }
}
