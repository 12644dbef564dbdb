use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{RegisterUserRequest, UpdateProfileRequest};
use crate::api::dtos::responses::PublicProfileResponse;
use crate::domain::models::user::User;
use std::sync::Arc;
use crate::error::AppError;
use argon2::{password_hash::{SaltString, PasswordHasher}, Argon2};
use rand::rngs::OsRng;
use tracing::info;

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.trim().to_lowercase();

    if username.is_empty() || !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::Validation(
            "Username may only contain letters, digits and hyphens".into(),
        ));
    }

    if state.user_repo.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict("Username already taken".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(username, payload.name, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("Registered user: {}", created.id);

    Ok((StatusCode::CREATED, Json(PublicProfileResponse::from(created))))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.user_repo
        .update_profile(&user.user_id, payload.bio.as_deref())
        .await?;

    info!("Updated profile for user: {}", updated.id);

    Ok(Json(PublicProfileResponse::from(updated)))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_username(&username).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(PublicProfileResponse::from(user)))
}
