use crate::models::{GuideRequest, GuideResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

pub async fn campus_guide(
    State(state): State<AppState>,
    Json(request): Json<GuideRequest>,
) -> Result<Json<GuideResponse>, AppError> {
    request.validate()?;

    tracing::info!(query_len = request.query.len(), "Campus guide query received");

    let response = state.guide.answer(&request.query).await?;

    Ok(Json(response))
}
