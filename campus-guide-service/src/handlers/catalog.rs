use crate::catalog;
use crate::models::{College, Location};
use axum::Json;

pub async fn list_locations() -> Json<&'static [Location]> {
    let locations = catalog::locations();
    tracing::info!(count = locations.len(), "Returning campus locations");
    Json(locations)
}

pub async fn college_info() -> Json<&'static College> {
    tracing::info!("Returning college information");
    Json(catalog::college())
}
