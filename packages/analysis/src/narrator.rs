//! Safety narration.
//!
//! Turns a route selection into a status and message for the traveler.
//! The narrator never fabricates a route: an empty selection always
//! produces a distinct, explicit explanation.

use saferoute_analysis_models::{
    AdvisoryStatus, RiskLevel, RouteSelection, SafetyAdvisory, SafetyPriority, SelectionOutcome,
    TimeFilter,
};

/// Composes the safety advisory for a completed selection.
///
/// `candidate_count` is how many candidates the generator produced; a
/// single-candidate query gets the "only route available" framing
/// regardless of its risk.
#[must_use]
pub fn narrate(
    selection: &RouteSelection,
    priority: SafetyPriority,
    time_filter: TimeFilter,
    candidate_count: usize,
) -> SafetyAdvisory {
    let (status, mut message) = match selection.outcome {
        SelectionOutcome::NoCandidates => (
            AdvisoryStatus::Error,
            "No route could be generated between the requested locations. \
             Try different areas or a different travel mode."
                .to_string(),
        ),
        SelectionOutcome::NoSafeAlternative => (
            AdvisoryStatus::Warning,
            "No alternate routes available. This is the only available route \
             despite the requested safety level. Consider changing your area \
             or time of travel."
                .to_string(),
        ),
        SelectionOutcome::Selected => narrate_selected(selection, priority, candidate_count),
    };

    if !selection.is_empty() || selection.outcome == SelectionOutcome::NoSafeAlternative {
        if let Some(qualifier) = time_qualifier(time_filter) {
            message.push(' ');
            message.push_str(qualifier);
        }
    }

    SafetyAdvisory { status, message }
}

fn narrate_selected(
    selection: &RouteSelection,
    priority: SafetyPriority,
    candidate_count: usize,
) -> (AdvisoryStatus, String) {
    // The selection is non-empty here; the safest entry leads.
    let Some(best) = selection.best() else {
        return (
            AdvisoryStatus::Error,
            "No route could be generated between the requested locations.".to_string(),
        );
    };

    let exposure_note = format!(
        "The recommended route passes {:.1}% of its points through \
         high-crime zones.",
        best.exposure.high_pct
    );

    if candidate_count == 1 {
        return (
            AdvisoryStatus::Info,
            format!(
                "This is the only route available irrespective of the safety \
                 level. {exposure_note}"
            ),
        );
    }

    match best.exposure.risk_level {
        RiskLevel::Low => (
            AdvisoryStatus::Success,
            format!(
                "It is safe to travel on this route. No significant crime \
                 zones detected along the way. {exposure_note}"
            ),
        ),
        RiskLevel::Medium => (
            AdvisoryStatus::Warning,
            format!(
                "This route passes through some medium-risk areas. Exercise \
                 normal caution while traveling. {exposure_note}"
            ),
        ),
        RiskLevel::High => {
            let message = if priority == SafetyPriority::SpeedPriority {
                format!(
                    "High risk: this is the fastest option but it crosses \
                     high-crime zones. {exposure_note} It is recommended to \
                     change to a safer route, or re-run the query at maximum \
                     safety."
                )
            } else {
                format!(
                    "Every surfaced route has high crime risk. {exposure_note} \
                     Consider a different area or re-run the query at maximum \
                     safety."
                )
            };
            (AdvisoryStatus::Error, message)
        }
    }
}

/// Time-of-day qualifier appended to non-empty outcomes.
const fn time_qualifier(time_filter: TimeFilter) -> Option<&'static str> {
    match time_filter {
        TimeFilter::Night => Some(
            "Night travel alert: crime rates are higher during nighttime \
             hours. Extra precautions recommended.",
        ),
        TimeFilter::Morning => Some("Morning is generally the safest time period for travel."),
        TimeFilter::Evening => Some(
            "Evening is a moderate risk period. Stay alert and prefer \
             well-lit routes.",
        ),
        TimeFilter::Any | TimeFilter::Afternoon => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saferoute_analysis_models::{ExposureProfile, RiskThresholds, SelectedRoute};
    use saferoute_routing_models::{GeoPoint, Route, RouteOrigin, RoutePattern};

    fn selection_with(high: usize, medium: usize, safe: usize) -> RouteSelection {
        RouteSelection {
            entries: vec![SelectedRoute {
                route: Route::new(
                    RouteOrigin::Pattern {
                        pattern: RoutePattern::Direct,
                    },
                    vec![GeoPoint::new(34.0, -118.4), GeoPoint::new(34.1, -118.2)],
                ),
                exposure: ExposureProfile::from_counts(
                    high,
                    medium,
                    safe,
                    &RiskThresholds::default(),
                ),
            }],
            outcome: SelectionOutcome::Selected,
        }
    }

    #[test]
    fn safe_selection_is_success_with_exposure() {
        let advisory = narrate(
            &selection_with(0, 0, 10),
            SafetyPriority::Balanced,
            TimeFilter::Any,
            8,
        );

        assert_eq!(advisory.status, AdvisoryStatus::Success);
        assert!(advisory.message.contains("safe to travel"));
        assert!(advisory.message.contains("0.0%"));
    }

    #[test]
    fn no_safe_alternative_is_explicit() {
        let advisory = narrate(
            &RouteSelection::empty(SelectionOutcome::NoSafeAlternative),
            SafetyPriority::MaximumSafety,
            TimeFilter::Any,
            8,
        );

        assert_eq!(advisory.status, AdvisoryStatus::Warning);
        assert!(advisory.message.contains("only available route"));
        assert!(advisory.message.contains("despite the requested safety level"));
    }

    #[test]
    fn empty_selection_is_never_silent() {
        let advisory = narrate(
            &RouteSelection::empty(SelectionOutcome::NoCandidates),
            SafetyPriority::Balanced,
            TimeFilter::Any,
            0,
        );

        assert_eq!(advisory.status, AdvisoryStatus::Error);
        assert!(advisory.message.contains("No route could be generated"));
    }

    #[test]
    fn night_appends_warning_and_morning_reassures() {
        let night = narrate(
            &selection_with(0, 0, 10),
            SafetyPriority::Balanced,
            TimeFilter::Night,
            8,
        );
        assert!(night.message.contains("Night travel alert"));

        let morning = narrate(
            &selection_with(0, 0, 10),
            SafetyPriority::Balanced,
            TimeFilter::Morning,
            8,
        );
        assert!(morning.message.contains("safest time period"));

        let any = narrate(
            &selection_with(0, 0, 10),
            SafetyPriority::Balanced,
            TimeFilter::Any,
            8,
        );
        assert!(!any.message.contains("Night travel alert"));
    }

    #[test]
    fn speed_priority_high_risk_gets_prominent_warning() {
        let advisory = narrate(
            &selection_with(10, 0, 0),
            SafetyPriority::SpeedPriority,
            TimeFilter::Any,
            8,
        );

        assert_eq!(advisory.status, AdvisoryStatus::Error);
        assert!(advisory.message.contains("High risk"));
        assert!(advisory.message.contains("maximum safety"));
    }

    #[test]
    fn single_candidate_gets_only_route_framing() {
        let advisory = narrate(
            &selection_with(10, 0, 0),
            SafetyPriority::Balanced,
            TimeFilter::Any,
            1,
        );

        assert_eq!(advisory.status, AdvisoryStatus::Info);
        assert!(advisory.message.contains("only route available"));
    }

    #[test]
    fn no_candidates_skips_time_qualifier() {
        let advisory = narrate(
            &RouteSelection::empty(SelectionOutcome::NoCandidates),
            SafetyPriority::Balanced,
            TimeFilter::Night,
            0,
        );
        assert!(!advisory.message.contains("Night travel alert"));
    }
}
