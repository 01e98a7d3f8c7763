//! Immutable classified incident snapshot with atomic replace-on-refresh.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use saferoute_incident_models::{Incident, RawIncidentRecord, TimeOfDay};

use crate::classify::{ClassificationStats, classify_record};

/// An immutable set of classified incidents built from one batch of raw
/// records.
///
/// Built once, then shared read-only across concurrently executing
/// queries. Area centers (mean coordinates of each reporting area's
/// incidents) are precomputed so area names can be resolved to query
/// endpoints without rescanning.
#[derive(Debug)]
pub struct IncidentSnapshot {
    incidents: Vec<Incident>,
    /// area name -> (mean latitude, mean longitude)
    area_centers: BTreeMap<String, (f64, f64)>,
    stats: ClassificationStats,
}

impl IncidentSnapshot {
    /// Classifies a batch of raw records into a new snapshot.
    ///
    /// Records without usable coordinates are skipped and counted;
    /// missing category/time fields are recovered via the Low/Night
    /// defaults. Never fails: an all-malformed (or empty) batch yields
    /// an empty snapshot.
    #[must_use]
    pub fn build(records: &[RawIncidentRecord]) -> Self {
        let mut stats = ClassificationStats::default();
        let mut incidents = Vec::with_capacity(records.len());

        for record in records {
            if let Some(incident) = classify_record(record, &mut stats) {
                incidents.push(incident);
            }
        }

        if stats.skipped_missing_location > 0 {
            log::warn!(
                "Skipped {} of {} incident records with missing location data",
                stats.skipped_missing_location,
                records.len()
            );
        }
        if stats.defaulted_category > 0 || stats.defaulted_time > 0 {
            log::info!(
                "Recovered malformed incident records: {} defaulted category, {} defaulted time",
                stats.defaulted_category,
                stats.defaulted_time
            );
        }

        let area_centers = compute_area_centers(&incidents);

        Self {
            incidents,
            area_centers,
            stats,
        }
    }

    /// An empty snapshot (no incidents, no areas).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            incidents: Vec::new(),
            area_centers: BTreeMap::new(),
            stats: ClassificationStats::default(),
        }
    }

    /// All classified incidents, in classification order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Incidents matching a time-of-day filter; `None` means all.
    #[must_use]
    pub fn incidents_for(&self, time: Option<TimeOfDay>) -> Vec<&Incident> {
        match time {
            None => self.incidents.iter().collect(),
            Some(bucket) => self
                .incidents
                .iter()
                .filter(|incident| incident.time_of_day == bucket)
                .collect(),
        }
    }

    /// Mean (latitude, longitude) of the named area's incidents.
    #[must_use]
    pub fn area_center(&self, area_name: &str) -> Option<(f64, f64)> {
        self.area_centers.get(area_name).copied()
    }

    /// All area names with resolvable centers, sorted.
    #[must_use]
    pub fn area_names(&self) -> Vec<&str> {
        self.area_centers.keys().map(String::as_str).collect()
    }

    /// Classification statistics for this snapshot's build.
    #[must_use]
    pub const fn stats(&self) -> ClassificationStats {
        self.stats
    }

    /// Number of classified incidents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Whether the snapshot holds no incidents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

fn compute_area_centers(incidents: &[Incident]) -> BTreeMap<String, (f64, f64)> {
    let mut sums: BTreeMap<String, (f64, f64, u64)> = BTreeMap::new();

    for incident in incidents {
        let Some(area) = incident.area_name.as_deref() else {
            continue;
        };
        if area.trim().is_empty() {
            continue;
        }
        let entry = sums.entry(area.to_string()).or_insert((0.0, 0.0, 0));
        entry.0 += incident.latitude;
        entry.1 += incident.longitude;
        entry.2 += 1;
    }

    sums.into_iter()
        .map(|(area, (lat_sum, lon_sum, count))| {
            #[allow(clippy::cast_precision_loss)]
            let n = count as f64;
            (area, (lat_sum / n, lon_sum / n))
        })
        .collect()
}

/// Holds the current [`IncidentSnapshot`] and swaps it atomically on
/// refresh.
///
/// Readers clone the inner [`Arc`] and keep a consistent view for the
/// lifetime of their query, even while a refresh replaces the store's
/// current snapshot.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<IncidentSnapshot>>,
}

impl SnapshotStore {
    /// Creates a store holding the given snapshot.
    #[must_use]
    pub fn new(snapshot: IncidentSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The current snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    #[must_use]
    pub fn current(&self) -> Arc<IncidentSnapshot> {
        Arc::clone(&self.current.read().expect("snapshot lock poisoned"))
    }

    /// Replaces the current snapshot, returning the previous one.
    ///
    /// In-flight readers holding the previous `Arc` are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    pub fn replace(&self, snapshot: IncidentSnapshot) -> Arc<IncidentSnapshot> {
        let mut guard = self.current.write().expect("snapshot lock poisoned");
        std::mem::replace(&mut *guard, Arc::new(snapshot))
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(IncidentSnapshot::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saferoute_incident_models::SeverityTier;

    fn raw(lat: f64, lon: f64, category: &str, time: u16, area: &str) -> RawIncidentRecord {
        RawIncidentRecord {
            latitude: Some(lat),
            longitude: Some(lon),
            category: Some(category.to_string()),
            time_occurred: Some(time),
            area_name: Some(area.to_string()),
        }
    }

    #[test]
    fn build_classifies_and_counts() {
        let records = vec![
            raw(34.05, -118.25, "ROBBERY", 2200, "Central"),
            raw(34.06, -118.26, "PETTY THEFT", 900, "Central"),
            RawIncidentRecord {
                latitude: None,
                longitude: None,
                category: Some("ASSAULT".to_string()),
                time_occurred: Some(100),
                area_name: Some("Central".to_string()),
            },
        ];

        let snapshot = IncidentSnapshot::build(&records);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.stats().classified, 2);
        assert_eq!(snapshot.stats().skipped_missing_location, 1);
        assert_eq!(snapshot.incidents()[0].severity, SeverityTier::High);
    }

    #[test]
    fn time_filter_selects_matching_bucket() {
        let records = vec![
            raw(34.05, -118.25, "ROBBERY", 2200, "Central"),
            raw(34.06, -118.26, "ROBBERY", 900, "Central"),
        ];
        let snapshot = IncidentSnapshot::build(&records);

        assert_eq!(snapshot.incidents_for(None).len(), 2);
        assert_eq!(snapshot.incidents_for(Some(TimeOfDay::Night)).len(), 1);
        assert_eq!(snapshot.incidents_for(Some(TimeOfDay::Morning)).len(), 1);
        assert_eq!(snapshot.incidents_for(Some(TimeOfDay::Evening)).len(), 0);
    }

    #[test]
    fn area_centers_average_coordinates() {
        let records = vec![
            raw(34.00, -118.00, "THEFT", 900, "Central"),
            raw(34.10, -118.20, "THEFT", 900, "Central"),
            raw(33.00, -117.00, "THEFT", 900, "Harbor"),
        ];
        let snapshot = IncidentSnapshot::build(&records);

        let (lat, lon) = snapshot.area_center("Central").unwrap();
        assert!((lat - 34.05).abs() < 1e-9);
        assert!((lon - -118.10).abs() < 1e-9);
        assert!(snapshot.area_center("Nowhere").is_none());
        assert_eq!(snapshot.area_names(), vec!["Central", "Harbor"]);
    }

    #[test]
    fn replace_swaps_without_disturbing_readers() {
        let store = SnapshotStore::new(IncidentSnapshot::build(&[raw(
            34.05, -118.25, "ROBBERY", 2200, "Central",
        )]));

        let before = store.current();
        assert_eq!(before.len(), 1);

        let previous = store.replace(IncidentSnapshot::empty());
        assert_eq!(previous.len(), 1);

        // The reader's view is unchanged; new readers see the refresh.
        assert_eq!(before.len(), 1);
        assert_eq!(store.current().len(), 0);
    }
}
