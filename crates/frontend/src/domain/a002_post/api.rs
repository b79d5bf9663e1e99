use async_trait::async_trait;
use contracts::domain::a002_post::aggregate::{CreatePostDto, Post, PostAction, UpdatePostDto};
use contracts::domain::common::{EntityType, RecordId};
use contracts::shared::error::ServiceError;
use gloo_net::http::Request;

use crate::pages::management::services::PostService;
use crate::shared::api_utils::{api_url, collection_path, expect_ok, item_path, read_json, transport_error};

/// Post records over the backend HTTP API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPostService;

#[async_trait(?Send)]
impl PostService for HttpPostService {
    async fn get_all(&self) -> Result<Vec<Post>, ServiceError> {
        let response = Request::get(&api_url(&collection_path(EntityType::Post)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn create(&self, dto: CreatePostDto) -> Result<Post, ServiceError> {
        let response = Request::post(&api_url(&collection_path(EntityType::Post)))
            .json(&dto)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn update(&self, id: RecordId, dto: UpdatePostDto) -> Result<Post, ServiceError> {
        let response = Request::put(&api_url(&item_path(EntityType::Post, id)))
            .json(&dto)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        let response = Request::delete(&api_url(&item_path(EntityType::Post, id)))
            .send()
            .await
            .map_err(transport_error)?;
        expect_ok(response).await
    }

    async fn transition(&self, id: RecordId, action: PostAction) -> Result<Post, ServiceError> {
        let url = format!("{}/{}", api_url(&item_path(EntityType::Post, id)), action.code());
        let response = Request::post(&url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}
