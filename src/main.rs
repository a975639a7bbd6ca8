//! Rentsense server binary.
//!
//! Composition root: loads configuration, wires the in-memory repositories
//! into the application handlers, assembles the axum router, and serves the
//! API together with the static frontend.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rentsense::adapters::http::{
    self, AnalysisHandlers, FloorplanHandlers, PropertyHandlers, ScenarioHandlers,
};
use rentsense::adapters::storage::{
    seed_sample_data, InMemoryAnalysisRepository, InMemoryFloorplanRepository,
    InMemoryPropertyRepository, InMemoryScenarioRepository,
};
use rentsense::application::handlers::analysis::{
    CreateAnalysisHandler, DuplicateAnalysisHandler, GetAnalysisHandler, ListAnalysesHandler,
};
use rentsense::application::handlers::floorplan::{
    CreateFloorplanHandler, DeleteFloorplanHandler, UpdateFloorplanHandler,
};
use rentsense::application::handlers::property::{
    CreatePropertyHandler, GetPropertyHandler, ListPropertiesHandler,
};
use rentsense::application::handlers::scenario::{
    CalculateScenarioHandler, CreateScenarioHandler, GetWaterfallHandler, UpdateScenarioHandler,
};
use rentsense::config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("rentsense failed to start: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    // Repositories (process-lifetime, shared across handlers).
    let properties = Arc::new(InMemoryPropertyRepository::new());
    let floorplans = Arc::new(InMemoryFloorplanRepository::new());
    let analyses = Arc::new(InMemoryAnalysisRepository::new());
    let scenarios = Arc::new(InMemoryScenarioRepository::new());

    seed_sample_data(
        properties.as_ref(),
        floorplans.as_ref(),
        analyses.as_ref(),
        scenarios.as_ref(),
    )
    .await?;

    let property_handlers = PropertyHandlers::new(
        Arc::new(CreatePropertyHandler::new(properties.clone())),
        Arc::new(GetPropertyHandler::new(
            properties.clone(),
            floorplans.clone(),
        )),
        Arc::new(ListPropertiesHandler::new(
            properties.clone(),
            floorplans.clone(),
        )),
    );

    let floorplan_handlers = FloorplanHandlers::new(
        Arc::new(CreateFloorplanHandler::new(
            properties.clone(),
            floorplans.clone(),
        )),
        Arc::new(UpdateFloorplanHandler::new(floorplans.clone())),
        Arc::new(DeleteFloorplanHandler::new(floorplans.clone())),
    );

    let analysis_handlers = AnalysisHandlers::new(
        Arc::new(CreateAnalysisHandler::new(
            properties.clone(),
            analyses.clone(),
        )),
        Arc::new(GetAnalysisHandler::new(analyses.clone(), scenarios.clone())),
        Arc::new(ListAnalysesHandler::new(
            analyses.clone(),
            scenarios.clone(),
        )),
        Arc::new(DuplicateAnalysisHandler::new(
            analyses.clone(),
            scenarios.clone(),
        )),
    );

    let scenario_handlers = ScenarioHandlers::new(
        Arc::new(CreateScenarioHandler::new(
            analyses.clone(),
            scenarios.clone(),
        )),
        Arc::new(UpdateScenarioHandler::new(scenarios.clone())),
        Arc::new(CalculateScenarioHandler::new(
            scenarios.clone(),
            analyses.clone(),
            floorplans.clone(),
        )),
        Arc::new(GetWaterfallHandler::new(
            scenarios.clone(),
            analyses.clone(),
            floorplans.clone(),
        )),
    );

    let api = http::api_router(
        property_handlers,
        floorplan_handlers,
        analysis_handlers,
        scenario_handlers,
    );

    // Built frontend assets, with index.html fallback for client-side routes.
    let static_service = ServeDir::new(config.static_files.dir())
        .not_found_service(ServeFile::new(config.static_files.index_path()));

    let app = Router::new()
        .nest("/api", api)
        .fallback_service(static_service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    info!(%addr, environment = ?config.server.environment, "starting rentsense server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config
        .server
        .cors_origins_list()
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
