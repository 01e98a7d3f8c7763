//! HTTP handler functions for the saferoute API.

use actix_web::{HttpResponse, web};
use saferoute_incident::IncidentSnapshot;
use saferoute_incident_models::RawIncidentRecord;
use saferoute_planner::{PlanError, RouteQuery};
use saferoute_server_models::{ApiHealth, ApiRoutePlan, ApiSnapshotRefresh, PlanRouteRequest};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/incidents`
///
/// Classifies the submitted batch of raw records and atomically
/// replaces the incident snapshot. Queries already running keep the
/// snapshot they started with.
pub async fn refresh_incidents(
    state: web::Data<AppState>,
    records: web::Json<Vec<RawIncidentRecord>>,
) -> HttpResponse {
    let records = records.into_inner();
    let snapshot = IncidentSnapshot::build(&records);
    let response = ApiSnapshotRefresh {
        incidents: snapshot.len(),
        areas: snapshot.area_names().len(),
        stats: snapshot.stats(),
    };

    state.snapshots.replace(snapshot);
    log::info!(
        "Snapshot refreshed: {} incidents across {} areas",
        response.incidents,
        response.areas
    );

    HttpResponse::Ok().json(response)
}

/// `GET /api/areas`
///
/// Lists area names resolvable as query endpoints.
pub async fn areas(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.snapshots.current();
    let names: Vec<String> = snapshot
        .area_names()
        .into_iter()
        .map(String::from)
        .collect();
    HttpResponse::Ok().json(names)
}

/// `POST /api/routes/plan`
///
/// Runs the full planning pipeline for one query. An unmet safety
/// policy is a `200` with an explained empty selection; only an
/// unresolvable endpoint is a client error.
pub async fn plan_route(
    state: web::Data<AppState>,
    request: web::Json<PlanRouteRequest>,
) -> HttpResponse {
    let query = RouteQuery {
        start: request.start,
        end: request.end,
        travel_mode: request.travel_mode,
        safety_priority: request.safety_priority,
        time_filter: request.time_of_day,
    };

    match state.planner.plan_safe_routes(&query).await {
        Ok(plan) => {
            let routes = plan.selection.entries.iter().map(Into::into).collect();
            HttpResponse::Ok().json(ApiRoutePlan {
                routes,
                outcome: plan.selection.outcome,
                advisory: plan.advisory,
                time_of_day: plan.time_filter,
            })
        }
        Err(PlanError::MissingLocationData { reason }) => {
            log::warn!("Rejected route query: {reason}");
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "MISSING_LOCATION_DATA",
                "reason": reason,
            }))
        }
    }
}
