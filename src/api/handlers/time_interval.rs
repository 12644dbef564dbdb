use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::SetTimeIntervalsRequest;
use crate::api::dtos::responses::TimeIntervalResponse;
use crate::domain::models::time_interval::{NormalizedInterval, UserTimeInterval};
use crate::domain::services::intervals::validate_intervals;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn set_time_intervals(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<SetTimeIntervalsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let intervals: Vec<NormalizedInterval> = payload.intervals
        .iter()
        .map(|iv| NormalizedInterval {
            week_day: iv.week_day,
            start_time_in_minutes: iv.start_time_in_minutes,
            end_time_in_minutes: iv.end_time_in_minutes,
        })
        .collect();

    // Same rules the onboarding form applies before submitting.
    validate_intervals(&intervals)?;

    let rows: Vec<UserTimeInterval> = intervals
        .iter()
        .map(|iv| UserTimeInterval::new(user.user_id.clone(), iv))
        .collect();

    state.interval_repo.create_batch(&rows).await?;

    info!("Stored {} time intervals for user {}", rows.len(), user.user_id);

    Ok(StatusCode::CREATED)
}

pub async fn list_time_intervals(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_username(&username).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let intervals = state.interval_repo.list_by_user(&user.id).await?;
    let response: Vec<TimeIntervalResponse> = intervals.into_iter().map(Into::into).collect();

    Ok(Json(response))
}
