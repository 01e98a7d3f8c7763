#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident severity tiers, time-of-day buckets, and record types.
//!
//! This crate defines how a raw crime report is interpreted for route
//! safety scoring: its severity tier is derived from keyword matching on
//! the category text, and its time-of-day bucket from the numeric HHMM
//! occurrence time. All downstream analysis consumes the classified
//! [`Incident`] form; raw records never flow past the classifier.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Category keywords that classify an incident as High severity.
///
/// Checked before [`MEDIUM_SEVERITY_KEYWORDS`]; a description matching
/// both sets is High.
pub const HIGH_SEVERITY_KEYWORDS: &[&str] = &[
    "ROBBERY",
    "ASSAULT",
    "BURGLARY",
    "RAPE",
    "HOMICIDE",
    "MURDER",
    "KIDNAPPING",
    "ARSON",
    "SHOTS FIRED",
    "CRIMINAL THREATS",
    "BATTERY",
];

/// Category keywords that classify an incident as Medium severity.
pub const MEDIUM_SEVERITY_KEYWORDS: &[&str] = &[
    "THEFT",
    "VANDALISM",
    "FRAUD",
    "SHOPLIFTING",
    "VEHICLE",
    "STOLEN",
    "TRESPASSING",
    "PICKPOCKET",
];

/// Severity tier of a crime incident, derived from its category text.
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
pub enum SeverityTier {
    /// Violent or otherwise serious offenses (robbery, assault, homicide).
    High,
    /// Property and financial offenses (theft, vandalism, fraud).
    Medium,
    /// Everything else, including unclassifiable records.
    Low,
}

impl SeverityTier {
    /// Classifies a raw category description into a severity tier.
    ///
    /// High-severity keywords are checked first, then Medium; a
    /// description matching neither set is Low. Matching is
    /// case-insensitive substring containment, mirroring how source
    /// category fields mix phrasing (e.g. "ROBBERY, ARMED" or
    /// "ATTEMPTED ROBBERY" both classify High).
    #[must_use]
    pub fn from_category(description: &str) -> Self {
        let upper = description.to_uppercase();

        if HIGH_SEVERITY_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            Self::High
        } else if MEDIUM_SEVERITY_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Contribution of one route point near this tier to the weighted
    /// ranking score. Low-severity incidents carry no exposure weight.
    #[must_use]
    pub const fn exposure_weight(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 1,
            Self::Low => 0,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

/// Time-of-day bucket an incident occurred in.
///
/// The hour ranges are intentionally asymmetric: Evening is a narrow
/// two-hour window and Night spans the remaining ten hours. Downstream
/// messaging depends on this split (night travel warnings cover the long
/// bucket), so the boundaries must not be "evened out".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOfDay {
    /// 06:00–11:59.
    Morning,
    /// 12:00–15:59.
    Afternoon,
    /// 16:00–17:59.
    Evening,
    /// 18:00–05:59.
    Night,
}

impl TimeOfDay {
    /// Buckets an hour of day (0–23) into a [`TimeOfDay`].
    ///
    /// Hours outside 0–23 bucket to Night, matching the classifier's
    /// default for malformed time fields.
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=15 => Self::Afternoon,
            16 | 17 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Buckets a numeric HHMM occurrence time (e.g. `1430`) into a
    /// [`TimeOfDay`].
    #[must_use]
    pub const fn from_hhmm(time_occurred: u16) -> Self {
        Self::from_hour((time_occurred / 100) as u8)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Morning, Self::Afternoon, Self::Evening, Self::Night]
    }
}

/// A raw incident record as supplied by the upstream incident source.
///
/// Every field is optional at this boundary; the classifier decides what
/// is recoverable (missing category or time) and what is not (missing
/// coordinates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncidentRecord {
    /// Latitude (WGS84). `None` or non-finite means the record cannot
    /// participate in proximity analysis.
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// Free-text crime category description (e.g. "ROBBERY, STREET").
    pub category: Option<String>,
    /// Numeric HHMM occurrence time (e.g. `1430` for 2:30 PM).
    pub time_occurred: Option<u16>,
    /// Reporting area name (e.g. "Hollywood").
    pub area_name: Option<String>,
}

/// A crime incident classified for route safety analysis.
///
/// Immutable once built: data refreshes produce a whole new snapshot of
/// classified incidents rather than mutating these in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Reporting area name, if the source provided one.
    pub area_name: Option<String>,
    /// Original category description, if the source provided one.
    pub category: Option<String>,
    /// Severity tier derived from the category text.
    pub severity: SeverityTier,
    /// Time-of-day bucket derived from the occurrence time.
    pub time_of_day: TimeOfDay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_keywords_classify_high() {
        for kw in HIGH_SEVERITY_KEYWORDS {
            assert_eq!(
                SeverityTier::from_category(kw),
                SeverityTier::High,
                "{kw} should classify High"
            );
        }
    }

    #[test]
    fn medium_keywords_classify_medium() {
        for kw in MEDIUM_SEVERITY_KEYWORDS {
            assert_eq!(
                SeverityTier::from_category(kw),
                SeverityTier::Medium,
                "{kw} should classify Medium"
            );
        }
    }

    #[test]
    fn high_beats_medium_on_multiple_matches() {
        // "VEHICLE" is a Medium keyword, "ROBBERY" is High.
        assert_eq!(
            SeverityTier::from_category("ROBBERY OF VEHICLE"),
            SeverityTier::High
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            SeverityTier::from_category("attempted burglary"),
            SeverityTier::High
        );
        assert_eq!(
            SeverityTier::from_category("petty theft"),
            SeverityTier::Medium
        );
    }

    #[test]
    fn unmatched_descriptions_classify_low() {
        assert_eq!(
            SeverityTier::from_category("LOST PROPERTY"),
            SeverityTier::Low
        );
        assert_eq!(SeverityTier::from_category(""), SeverityTier::Low);
    }

    #[test]
    fn time_bucket_boundaries() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(15), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn hhmm_uses_hour_component() {
        assert_eq!(TimeOfDay::from_hhmm(630), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hhmm(1159), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hhmm(1600), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hhmm(2359), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hhmm(0), TimeOfDay::Night);
    }

    #[test]
    fn out_of_range_hours_bucket_to_night() {
        assert_eq!(TimeOfDay::from_hour(24), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hhmm(9999), TimeOfDay::Night);
    }

    #[test]
    fn exposure_weights() {
        assert_eq!(SeverityTier::High.exposure_weight(), 3);
        assert_eq!(SeverityTier::Medium.exposure_weight(), 1);
        assert_eq!(SeverityTier::Low.exposure_weight(), 0);
    }
}
