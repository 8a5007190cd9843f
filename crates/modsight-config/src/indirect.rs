//! Policy for reconciling `// indirect` markers with the build graph.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which indirect-marker mismatches the analyzer reports.
///
/// A requirement can disagree with the build graph in two directions: it is
/// marked `// indirect` although project code imports it directly, or it lacks
/// the marker although it is only reached through other dependencies.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IndirectCheck {
    /// Report stale markers and missing markers.
    #[default]
    Both,
    /// Report only requirements marked indirect that are imported directly.
    StaleMarkerOnly,
    /// Do not compare indirect markers at all.
    Disabled,
}

impl IndirectCheck {
    /// Returns true when a `// indirect` marker on a direct dependency is reported.
    #[must_use]
    pub const fn reports_stale_marker(self) -> bool {
        matches!(self, Self::Both | Self::StaleMarkerOnly)
    }

    /// Returns true when a transitive-only dependency without a marker is reported.
    #[must_use]
    pub const fn reports_missing_marker(self) -> bool {
        matches!(self, Self::Both)
    }
}
