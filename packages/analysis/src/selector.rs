//! Safety-priority-driven route selection.

use saferoute_analysis_models::{
    RiskLevel, RouteSelection, SafetyPriority, SelectedRoute, SelectionOutcome,
};

/// Selects which scored candidates to surface, per the requested safety
/// priority.
///
/// Candidates must be in generation order: ties within a tier break on
/// lowest `weighted_risk_score` first, then earliest generation.
///
/// * `MaximumSafety` keeps at most one Low and one Medium route and
///   drops every High candidate. When neither tier is populated the
///   result is the dedicated `NoSafeAlternative` terminal state, never
///   a silent fallback to a risky route.
/// * `Balanced` keeps the best candidate from each populated tier.
/// * `SpeedPriority` keeps the best candidate from each populated tier,
///   which necessarily includes a High-risk route whenever one exists;
///   the narrator surfaces the warning.
#[must_use]
pub fn select_routes(candidates: Vec<SelectedRoute>, priority: SafetyPriority) -> RouteSelection {
    if candidates.is_empty() {
        return RouteSelection::empty(SelectionOutcome::NoCandidates);
    }

    let mut entries: Vec<SelectedRoute> = Vec::with_capacity(3);

    let tiers: &[RiskLevel] = match priority {
        SafetyPriority::MaximumSafety => &[RiskLevel::Low, RiskLevel::Medium],
        SafetyPriority::Balanced | SafetyPriority::SpeedPriority => RiskLevel::all(),
    };

    for tier in tiers {
        if let Some(best) = best_in_tier(&candidates, *tier) {
            entries.push(best.clone());
        }
    }

    if entries.is_empty() {
        // Only reachable under MaximumSafety with every candidate High.
        log::info!("No candidate met the maximum safety policy; returning terminal state");
        return RouteSelection::empty(SelectionOutcome::NoSafeAlternative);
    }

    RouteSelection {
        entries,
        outcome: SelectionOutcome::Selected,
    }
}

/// The tier's best candidate: lowest weighted score, earliest generated
/// on ties. The generation index participates in the key because
/// `min_by_key` keeps the last of equal elements.
fn best_in_tier(candidates: &[SelectedRoute], tier: RiskLevel) -> Option<&SelectedRoute> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.exposure.risk_level == tier)
        .min_by_key(|(index, candidate)| (candidate.exposure.weighted_risk_score, *index))
        .map(|(_, candidate)| candidate)
}
