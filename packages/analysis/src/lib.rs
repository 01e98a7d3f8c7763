#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Route exposure analysis, risk classification, selection, and
//! narration.
//!
//! Given a candidate route and the classified incident snapshot, the
//! analyzer computes how much of the route lies within the proximity
//! radius of high- and medium-severity incidents, classifies the
//! resulting exposure profile into a risk level, and the selector and
//! narrator turn the scored candidates into the routes surfaced to the
//! traveler.

mod exposure;
mod index;
mod narrator;
mod selector;

pub use exposure::ExposureAnalyzer;
pub use index::IncidentIndex;
pub use narrator::narrate;
pub use selector::select_routes;
