//! Raw record classification.
//!
//! Malformed records are recovered, not rejected: a missing category
//! defaults to Low severity and a missing time to Night, so every record
//! with usable coordinates is always classifiable. Records without
//! coordinates cannot participate in proximity analysis and are skipped.

use saferoute_incident_models::{Incident, RawIncidentRecord, SeverityTier, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Counts of how a batch of raw records classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationStats {
    /// Records classified into incidents.
    pub classified: u64,
    /// Records skipped for missing or unusable coordinates.
    pub skipped_missing_location: u64,
    /// Classified records whose category was missing (defaulted to Low).
    pub defaulted_category: u64,
    /// Classified records whose time was missing (defaulted to Night).
    pub defaulted_time: u64,
}

/// Classifies one raw record, returning `None` when it has no usable
/// coordinates.
///
/// Missing category text or occurrence time is recovered via the
/// Low/Night defaults and counted in `stats`.
pub fn classify_record(
    record: &RawIncidentRecord,
    stats: &mut ClassificationStats,
) -> Option<Incident> {
    let Some((latitude, longitude)) = usable_coordinates(record) else {
        stats.skipped_missing_location += 1;
        return None;
    };

    let severity = match record.category.as_deref() {
        Some(text) if !text.trim().is_empty() => SeverityTier::from_category(text),
        _ => {
            stats.defaulted_category += 1;
            SeverityTier::Low
        }
    };

    let time_of_day = record.time_occurred.map_or_else(
        || {
            stats.defaulted_time += 1;
            TimeOfDay::Night
        },
        TimeOfDay::from_hhmm,
    );

    stats.classified += 1;

    Some(Incident {
        latitude,
        longitude,
        area_name: record.area_name.clone(),
        category: record.category.clone(),
        severity,
        time_of_day,
    })
}

/// Extracts finite, in-range WGS84 coordinates from a raw record.
///
/// A (0, 0) pair is treated as unusable: sources emit it as a null-island
/// placeholder for un-geocoded records.
fn usable_coordinates(record: &RawIncidentRecord) -> Option<(f64, f64)> {
    let lat = record.latitude?;
    let lon = record.longitude?;

    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    if lat == 0.0 && lon == 0.0 {
        return None;
    }

    Some((lat, lon))
}
