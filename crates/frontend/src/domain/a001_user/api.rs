use async_trait::async_trait;
use contracts::domain::a001_user::aggregate::{CreateUserDto, UpdateUserDto, User};
use contracts::domain::common::{EntityType, RecordId};
use contracts::shared::error::ServiceError;
use gloo_net::http::Request;

use crate::pages::management::services::UserService;
use crate::shared::api_utils::{api_url, collection_path, expect_ok, item_path, read_json, transport_error};

/// User records over the backend HTTP API
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpUserService;

#[async_trait(?Send)]
impl UserService for HttpUserService {
    async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
        let response = Request::get(&api_url(&collection_path(EntityType::User)))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn create(&self, dto: CreateUserDto) -> Result<User, ServiceError> {
        let response = Request::post(&api_url(&collection_path(EntityType::User)))
            .json(&dto)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn update(&self, id: RecordId, dto: UpdateUserDto) -> Result<User, ServiceError> {
        let response = Request::put(&api_url(&item_path(EntityType::User, id)))
            .json(&dto)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        let response = Request::delete(&api_url(&item_path(EntityType::User, id)))
            .send()
            .await
            .map_err(transport_error)?;
        expect_ok(response).await
    }
}
