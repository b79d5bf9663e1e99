use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_user::aggregate::{CreateUserDto, UpdateUserDto, User};
use contracts::domain::common::RecordId;

use crate::domain::a001_user::service;
use crate::shared::config::validation_policy;
use crate::shared::data::store::get_store;
use crate::shared::error::AppError;

/// GET /api/users
pub async fn list_all() -> Json<Vec<User>> {
    Json(service::list_all(get_store()).await)
}

/// POST /api/users
pub async fn create(Json(dto): Json<CreateUserDto>) -> Result<(StatusCode, Json<User>), AppError> {
    let user = service::create(get_store(), validation_policy(), dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id
pub async fn update(
    Path(id): Path<RecordId>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    service::update(get_store(), validation_policy(), id, dto)
        .await
        .map(Json)
}

/// DELETE /api/users/:id
pub async fn delete(Path(id): Path<RecordId>) -> Result<StatusCode, AppError> {
    service::delete(get_store(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
