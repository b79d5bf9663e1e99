use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_post::aggregate::{CreatePostDto, Post, PostAction, UpdatePostDto};
use contracts::domain::common::RecordId;

use crate::domain::a002_post::service;
use crate::shared::config::validation_policy;
use crate::shared::data::store::get_store;
use crate::shared::error::AppError;

/// GET /api/posts
pub async fn list_all() -> Json<Vec<Post>> {
    Json(service::list_all(get_store()).await)
}

/// POST /api/posts
pub async fn create(Json(dto): Json<CreatePostDto>) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = service::create(get_store(), validation_policy(), dto).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/posts/:id
pub async fn update(
    Path(id): Path<RecordId>,
    Json(dto): Json<UpdatePostDto>,
) -> Result<Json<Post>, AppError> {
    service::update(get_store(), validation_policy(), id, dto)
        .await
        .map(Json)
}

/// DELETE /api/posts/:id
pub async fn delete(Path(id): Path<RecordId>) -> Result<StatusCode, AppError> {
    service::delete(get_store(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn transition(id: RecordId, action: PostAction) -> Result<Json<Post>, AppError> {
    service::transition(get_store(), id, action).await.map(Json)
}

/// POST /api/posts/:id/publish
pub async fn publish(Path(id): Path<RecordId>) -> Result<Json<Post>, AppError> {
    transition(id, PostAction::Publish).await
}

/// POST /api/posts/:id/archive
pub async fn archive(Path(id): Path<RecordId>) -> Result<Json<Post>, AppError> {
    transition(id, PostAction::Archive).await
}

/// POST /api/posts/:id/restore
pub async fn restore(Path(id): Path<RecordId>) -> Result<Json<Post>, AppError> {
    transition(id, PostAction::Restore).await
}
