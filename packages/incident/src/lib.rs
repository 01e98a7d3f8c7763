#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident classification and the shared read-only incident snapshot.
//!
//! Raw records from the upstream incident source are classified exactly
//! once into [`Incident`]s and frozen into an [`IncidentSnapshot`]. The
//! snapshot is immutable: a data refresh builds a new snapshot and swaps
//! it into the [`SnapshotStore`] atomically, so queries already running
//! keep the consistent view they started with.

mod classify;
mod snapshot;

pub use classify::{ClassificationStats, classify_record};
pub use snapshot::{IncidentSnapshot, SnapshotStore};

pub use saferoute_incident_models::{Incident, RawIncidentRecord, SeverityTier, TimeOfDay};
