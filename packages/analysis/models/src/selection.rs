//! Route selection output types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use saferoute_routing_models::Route;

use crate::{ExposureProfile, RiskLevel};

/// How a selection concluded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionOutcome {
    /// One or more routes were selected.
    Selected,
    /// Candidates existed but none met the requested safety policy.
    /// A typed terminal state, not an error: the narrator explains it.
    NoSafeAlternative,
    /// No candidates were available to choose from.
    NoCandidates,
}

/// One selected route with its exposure analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRoute {
    /// The candidate route.
    pub route: Route,
    /// Its exposure profile and risk classification.
    pub exposure: ExposureProfile,
}

/// The routes surfaced for one query: at most one per risk tier,
/// ordered safest first.
///
/// Built fresh per query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSelection {
    /// Selected routes, ordered Low → Medium → High.
    pub entries: Vec<SelectedRoute>,
    /// How the selection concluded.
    pub outcome: SelectionOutcome,
}

impl RouteSelection {
    /// An empty selection with the given terminal outcome.
    #[must_use]
    pub const fn empty(outcome: SelectionOutcome) -> Self {
        Self {
            entries: Vec::new(),
            outcome,
        }
    }

    /// The entry for a specific risk tier, if one was selected.
    #[must_use]
    pub fn entry_for(&self, level: RiskLevel) -> Option<&SelectedRoute> {
        self.entries
            .iter()
            .find(|entry| entry.exposure.risk_level == level)
    }

    /// The safest selected route (entries are ordered safest first).
    #[must_use]
    pub fn best(&self) -> Option<&SelectedRoute> {
        self.entries.first()
    }

    /// Number of selected routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no routes were selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
