//! Integration tests for the HTTP API.
//!
//! Each test builds the full router over freshly-seeded in-memory
//! repositories and drives it with `tower::ServiceExt::oneshot`, verifying
//! the wire-level behavior end to end: routing, DTO shapes, status codes,
//! and the calculator results the scenario endpoints surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

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

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Builds the API router over seeded in-memory repositories.
async fn seeded_app() -> Router {
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
    .await
    .expect("seeding failed");

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
            scenarios,
            analyses,
            floorplans,
        )),
    );

    Router::new().nest(
        "/api",
        http::api_router(
            property_handlers,
            floorplan_handlers,
            analysis_handlers,
            scenario_handlers,
        ),
    )
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Finds the seeded analysis and a scenario in it by name.
async fn seeded_scenario_id(app: &Router, scenario_name: &str) -> String {
    let (status, analyses) = get(app, "/api/analyses").await;
    assert_eq!(status, StatusCode::OK);
    let scenarios = analyses[0]["scenarios"].as_array().unwrap();
    scenarios
        .iter()
        .find(|s| s["name"] == scenario_name)
        .unwrap_or_else(|| panic!("seeded scenario '{}' missing", scenario_name))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

// =============================================================================
// Health and property CRUD
// =============================================================================

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn list_properties_returns_seeded_set_with_floorplans() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/api/properties").await;

    assert_eq!(status, StatusCode::OK);
    let properties = body.as_array().unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0]["name"], "Campus View Apartments");
    assert_eq!(properties[0]["floorplans"].as_array().unwrap().len(), 4);
    assert_eq!(properties[1]["floorplans"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_and_fetch_property_roundtrips() {
    let app = seeded_app().await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/properties",
        json!({
            "name": "The Quad",
            "address": "789 Campus Dr, Austin, TX",
            "total_units": 120
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["floorplans"], json!([]));

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/properties/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "The Quad");
}

#[tokio::test]
async fn unknown_property_yields_404_and_bad_id_400() {
    let app = seeded_app().await;

    let (status, _) = get(
        &app,
        "/api/properties/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/api/properties/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn empty_property_name_is_rejected() {
    let app = seeded_app().await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/properties",
        json!({ "name": "", "address": "somewhere", "total_units": 10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Floorplan CRUD
// =============================================================================

#[tokio::test]
async fn floorplan_lifecycle_create_update_delete() {
    let app = seeded_app().await;
    let (_, properties) = get(&app, "/api/properties").await;
    let property_id = properties[0]["id"].as_str().unwrap().to_string();

    // Create
    let (status, created) = send_json(
        &app,
        "POST",
        "/api/floorplans",
        json!({
            "property_id": property_id,
            "name": "E1 - Penthouse",
            "unit_type": "2BR",
            "unit_count": 10,
            "square_footage": 1100.0,
            "floor_level": "7",
            "view_type": "Skyline",
            "base_rent": 2800.0,
            "amenity_rent": 200.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let floorplan_id = created["id"].as_str().unwrap().to_string();

    // Update
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/floorplans/{}", floorplan_id),
        json!({
            "property_id": property_id,
            "name": "E1 - Penthouse",
            "unit_type": "2BR",
            "unit_count": 10,
            "square_footage": 1100.0,
            "base_rent": 2950.0,
            "amenity_rent": 200.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["base_rent"], 2950.0);

    // The property now lists 5 floorplans.
    let (_, property) = get(&app, &format!("/api/properties/{}", property_id)).await;
    assert_eq!(property["floorplans"].as_array().unwrap().len(), 5);

    // Delete, then the record is gone.
    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/floorplans/{}", floorplan_id),
        Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Floorplan deleted");

    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/api/floorplans/{}", floorplan_id),
        Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn floorplan_for_unknown_property_is_rejected() {
    let app = seeded_app().await;
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/floorplans",
        json!({
            "property_id": "00000000-0000-0000-0000-000000000000",
            "name": "Orphan",
            "unit_type": "1BR",
            "unit_count": 1,
            "square_footage": 500.0,
            "base_rent": 1000.0,
            "amenity_rent": 0.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Scenario calculation
// =============================================================================

#[tokio::test]
async fn calculate_baseline_scenario_returns_reference_metrics() {
    let app = seeded_app().await;
    let scenario_id = seeded_scenario_id(&app, "Baseline").await;

    let (status, body) = get(&app, &format!("/api/scenarios/{}/calculate", scenario_id)).await;
    assert_eq!(status, StatusCode::OK);

    // Campus View at 95% occupancy, no adjustments:
    // monthly gross = 1250*40 + 1525*80 + 2000*90 + 2525*30 = 427750
    // annual = 427750 * 0.95 * 12 = 4876350
    let results = &body["results"];
    assert_eq!(results["total_annual_revenue"], 4_876_350.0);
    assert_eq!(results["weighted_avg_rent"], 1_782.29);
    assert_eq!(results["avg_rent_per_unit"], 1_693.18);
    assert_eq!(results["revenue_per_sqft"], 25.27);
}

#[tokio::test]
async fn calculate_persists_results_on_the_scenario() {
    let app = seeded_app().await;
    let scenario_id = seeded_scenario_id(&app, "Baseline").await;

    let (_, before) = get(&app, "/api/analyses").await;
    let scenario_before = before[0]["scenarios"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == scenario_id.as_str())
        .unwrap()
        .clone();
    assert!(scenario_before.get("results").is_none());

    get(&app, &format!("/api/scenarios/{}/calculate", scenario_id)).await;

    let (_, after) = get(&app, "/api/analyses").await;
    let scenario_after = after[0]["scenarios"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == scenario_id.as_str())
        .unwrap()
        .clone();
    assert!(scenario_after["results"]["total_annual_revenue"].is_number());
}

#[tokio::test]
async fn free_month_concession_scales_revenue_by_eleven_twelfths() {
    let app = seeded_app().await;
    let baseline_id = seeded_scenario_id(&app, "Baseline").await;
    let pessimistic_id = seeded_scenario_id(&app, "Pessimistic (1 month free)").await;

    let (_, baseline) = get(&app, &format!("/api/scenarios/{}/calculate", baseline_id)).await;
    let (_, pessimistic) =
        get(&app, &format!("/api/scenarios/{}/calculate", pessimistic_id)).await;

    let baseline_total = baseline["results"]["total_annual_revenue"].as_f64().unwrap();
    let pessimistic_total = pessimistic["results"]["total_annual_revenue"]
        .as_f64()
        .unwrap();

    assert!((pessimistic_total - baseline_total * 11.0 / 12.0).abs() < 0.01);
}

#[tokio::test]
async fn calculate_unknown_scenario_yields_404() {
    let app = seeded_app().await;
    let (status, _) = get(
        &app,
        "/api/scenarios/00000000-0000-0000-0000-000000000000/calculate",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calculate_without_floorplans_yields_400() {
    let app = seeded_app().await;

    // A property with no floorplans, plus an analysis and scenario on it.
    let (_, property) = send_json(
        &app,
        "POST",
        "/api/properties",
        json!({ "name": "Empty Lot", "address": "0 Nowhere Rd", "total_units": 0 }),
    )
    .await;
    let (_, analysis) = send_json(
        &app,
        "POST",
        "/api/analyses",
        json!({ "property_id": property["id"], "name": "Empty Analysis" }),
    )
    .await;
    let (_, scenario) = send_json(
        &app,
        "POST",
        "/api/scenarios",
        json!({ "analysis_id": analysis["id"], "name": "Baseline" }),
    )
    .await;

    let (status, body) = get(
        &app,
        &format!("/api/scenarios/{}/calculate", scenario["id"].as_str().unwrap()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("No floorplans"));
}

#[tokio::test]
async fn scenario_update_clears_results_and_accepts_unknown_concession() {
    let app = seeded_app().await;
    let scenario_id = seeded_scenario_id(&app, "Baseline").await;
    get(&app, &format!("/api/scenarios/{}/calculate", scenario_id)).await;

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/scenarios/{}", scenario_id),
        json!({
            "analysis_id": "00000000-0000-0000-0000-000000000000",
            "name": "Reworked",
            "base_rent_pct_adj": 0.03,
            "concession_type": "mystery_discount",
            "concession_value": 0.5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Reworked");
    // Unknown concession strings degrade to "none".
    assert_eq!(updated["concession_type"], "none");
    assert!(updated.get("results").is_none());
}

// =============================================================================
// Waterfall
// =============================================================================

#[tokio::test]
async fn waterfall_decomposes_optimistic_versus_baseline() {
    let app = seeded_app().await;
    let baseline_id = seeded_scenario_id(&app, "Baseline").await;
    let optimistic_id = seeded_scenario_id(&app, "Optimistic (+5%)").await;

    let (status, body) = get(
        &app,
        &format!(
            "/api/scenarios/{}/waterfall?baseline_scenario_id={}",
            optimistic_id, baseline_id
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let steps = body["waterfall"].as_array().unwrap();
    assert_eq!(steps.len(), 5);

    let labels: Vec<&str> = steps.iter().map(|s| s["label"].as_str().unwrap()).collect();
    assert_eq!(
        labels,
        vec!["Baseline", "Base Rent Adj", "Amenity Rent Adj", "Concessions", "Final"]
    );
    assert_eq!(steps[0]["type"], "base");
    assert_eq!(steps[1]["type"], "delta");
    assert_eq!(steps[4]["type"], "final");

    // Both rent groups move +5%, no concession change.
    assert_eq!(steps[0]["value"], 4_876_350.0);
    assert_eq!(steps[1]["value"], 231_990.0);
    assert_eq!(steps[2]["value"], 11_827.5);
    assert_eq!(steps[3]["value"], 0.0);
    assert_eq!(steps[4]["value"], 5_120_167.5);

    // Closure invariant at the wire level.
    let baseline = steps[0]["value"].as_f64().unwrap();
    let deltas: f64 = steps[1..4].iter().map(|s| s["value"].as_f64().unwrap()).sum();
    let final_value = steps[4]["value"].as_f64().unwrap();
    assert!((baseline + deltas - final_value).abs() < 0.01);
}

#[tokio::test]
async fn waterfall_with_unknown_baseline_yields_404() {
    let app = seeded_app().await;
    let optimistic_id = seeded_scenario_id(&app, "Optimistic (+5%)").await;

    let (status, _) = get(
        &app,
        &format!(
            "/api/scenarios/{}/waterfall?baseline_scenario_id=00000000-0000-0000-0000-000000000000",
            optimistic_id
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Analysis CRUD and duplication
// =============================================================================

#[tokio::test]
async fn create_analysis_defaults_occupancy() {
    let app = seeded_app().await;
    let (_, properties) = get(&app, "/api/properties").await;
    let property_id = properties[1]["id"].as_str().unwrap();

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/analyses",
        json!({ "property_id": property_id, "name": "Heights Fall 2024" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["occupancy_rate"], 0.95);
    assert_eq!(created["scenarios"], json!([]));
}

#[tokio::test]
async fn create_analysis_rejects_invalid_occupancy() {
    let app = seeded_app().await;
    let (_, properties) = get(&app, "/api/properties").await;
    let property_id = properties[0]["id"].as_str().unwrap();

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/analyses",
        json!({ "property_id": property_id, "name": "Bad", "occupancy_rate": 1.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_analysis_copies_scenarios_and_links_parent() {
    let app = seeded_app().await;
    let (_, analyses) = get(&app, "/api/analyses").await;
    let analysis_id = analyses[0]["id"].as_str().unwrap();

    let (status, copy) = send_json(
        &app,
        "POST",
        &format!(
            "/api/analyses/{}/duplicate?new_name=Spring%202025",
            analysis_id
        ),
        Value::Null,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(copy["name"], "Spring 2025");
    assert_eq!(copy["parent_analysis_id"], analysis_id);
    assert_eq!(
        copy["description"],
        "Duplicated from: Fall 2024 Leasing Analysis"
    );
    assert_eq!(copy["scenarios"].as_array().unwrap().len(), 3);

    // Both analyses now listed.
    let (_, all) = get(&app, "/api/analyses").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}
