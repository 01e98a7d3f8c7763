#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for crime-aware route planning.
//!
//! Exposes the planning pipeline to the presentation layer: incident
//! snapshot refresh, area listing, and the route planning query. The
//! server starts with an empty snapshot; the upstream incident source
//! pushes batches through `POST /api/incidents`, each of which replaces
//! the snapshot atomically without disturbing in-flight queries.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use saferoute_incident::SnapshotStore;
use saferoute_planner::RoutePlanner;

/// Shared application state.
pub struct AppState {
    /// Current classified incident snapshot.
    pub snapshots: Arc<SnapshotStore>,
    /// The planning pipeline.
    pub planner: RoutePlanner,
}

/// Starts the saferoute API server.
///
/// Binds to `BIND_ADDR`/`PORT` (default `127.0.0.1:8080`). This is a
/// regular async function — the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let snapshots = Arc::new(SnapshotStore::default());
    let planner = RoutePlanner::with_defaults(Arc::clone(&snapshots));

    let state = web::Data::new(AppState { snapshots, planner });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");
    log::info!("Snapshot is empty until incidents are pushed to /api/incidents");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/incidents", web::post().to(handlers::refresh_incidents))
                    .route("/areas", web::get().to(handlers::areas))
                    .route("/routes/plan", web::post().to(handlers::plan_route)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
