//! Sample data set loaded at startup.
//!
//! Two student-housing properties with their floorplans, plus one analysis
//! with baseline, optimistic, and pessimistic scenarios for the first
//! property. Gives the API something to serve before any records are created.

use tracing::info;

use crate::domain::analysis::{Analysis, Scenario};
use crate::domain::foundation::{DomainError, OccupancyRate};
use crate::domain::property::{Floorplan, Property};
use crate::domain::revenue::{AdjustmentParameters, ConcessionType};
use crate::ports::{
    AnalysisRepository, FloorplanRepository, PropertyRepository, ScenarioRepository,
};

/// Seeds the repositories with the sample data set.
pub async fn seed_sample_data(
    properties: &dyn PropertyRepository,
    floorplans: &dyn FloorplanRepository,
    analyses: &dyn AnalysisRepository,
    scenarios: &dyn ScenarioRepository,
) -> Result<(), DomainError> {
    // Property 1: Campus View Apartments
    let campus_view = Property::new(
        "Campus View Apartments",
        "123 University Ave, Austin, TX 78705",
        240,
    )?;
    properties.save(&campus_view).await?;

    let campus_view_floorplans = [
        Floorplan::new(campus_view.id(), "A1 - Studio", "Studio", 40, 450.0, 1200.0, 50.0)?
            .with_floor_level("1-4")
            .with_view_type("Courtyard"),
        Floorplan::new(campus_view.id(), "B1 - One Bedroom", "1BR", 80, 650.0, 1450.0, 75.0)?
            .with_floor_level("1-6")
            .with_view_type("Mixed"),
        Floorplan::new(campus_view.id(), "C1 - Two Bedroom", "2BR", 90, 950.0, 1900.0, 100.0)?
            .with_floor_level("1-6")
            .with_view_type("Mixed"),
        Floorplan::new(campus_view.id(), "D1 - Three Bedroom", "3BR", 30, 1250.0, 2400.0, 125.0)?
            .with_floor_level("2-6")
            .with_view_type("City"),
    ];
    for floorplan in &campus_view_floorplans {
        floorplans.save(floorplan).await?;
    }

    // Property 2: University Heights
    let university_heights = Property::new(
        "University Heights",
        "456 College Blvd, Austin, TX 78712",
        180,
    )?;
    properties.save(&university_heights).await?;

    let university_heights_floorplans = [
        Floorplan::new(university_heights.id(), "Studio Deluxe", "Studio", 30, 500.0, 1350.0, 60.0)?
            .with_floor_level("1-5")
            .with_view_type("Park"),
        Floorplan::new(university_heights.id(), "One Bed Premium", "1BR", 60, 700.0, 1600.0, 85.0)?
            .with_floor_level("1-5")
            .with_view_type("Park"),
        Floorplan::new(university_heights.id(), "Two Bed Luxury", "2BR", 70, 1050.0, 2200.0, 110.0)?
            .with_floor_level("1-5")
            .with_view_type("Mixed"),
        Floorplan::new(
            university_heights.id(),
            "Four Bed Townhouse",
            "4BR",
            20,
            1600.0,
            3200.0,
            150.0,
        )?
        .with_floor_level("Ground")
        .with_view_type("Street"),
    ];
    for floorplan in &university_heights_floorplans {
        floorplans.save(floorplan).await?;
    }

    // Sample analysis with three scenarios for Campus View.
    let analysis = Analysis::new(
        campus_view.id(),
        "Fall 2024 Leasing Analysis",
        Some("Baseline analysis for fall semester leasing period".to_string()),
        OccupancyRate::new(0.95)?,
    )?;
    analyses.save(&analysis).await?;

    let baseline = Scenario::new(analysis.id(), "Baseline", AdjustmentParameters::default())?;
    scenarios.save(&baseline).await?;

    let optimistic = Scenario::new(
        analysis.id(),
        "Optimistic (+5%)",
        AdjustmentParameters::default()
            .with_base_rent_adjustments(0.05, 0.0)
            .with_amenity_rent_adjustments(0.05, 0.0),
    )?;
    scenarios.save(&optimistic).await?;

    let pessimistic = Scenario::new(
        analysis.id(),
        "Pessimistic (1 month free)",
        AdjustmentParameters::default().with_concession(ConcessionType::FreeMonths, 1.0),
    )?;
    scenarios.save(&pessimistic).await?;

    info!("seeded 2 properties, 8 floorplans, 1 analysis, 3 scenarios");
    Ok(())
}
