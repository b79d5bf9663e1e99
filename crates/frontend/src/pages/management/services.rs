//! Record service seams used by the management controller.
//!
//! The browser build talks HTTP (`HttpUserService`, `HttpPostService`);
//! tests plug in in-memory fakes.

use async_trait::async_trait;
use contracts::domain::a001_user::aggregate::{CreateUserDto, UpdateUserDto, User};
use contracts::domain::a002_post::aggregate::{CreatePostDto, Post, PostAction, UpdatePostDto};
use contracts::domain::common::RecordId;
use contracts::shared::error::ServiceError;

#[async_trait(?Send)]
pub trait UserService {
    async fn get_all(&self) -> Result<Vec<User>, ServiceError>;
    async fn create(&self, dto: CreateUserDto) -> Result<User, ServiceError>;
    async fn update(&self, id: RecordId, dto: UpdateUserDto) -> Result<User, ServiceError>;
    async fn delete(&self, id: RecordId) -> Result<(), ServiceError>;
}

#[async_trait(?Send)]
pub trait PostService {
    async fn get_all(&self) -> Result<Vec<Post>, ServiceError>;
    async fn create(&self, dto: CreatePostDto) -> Result<Post, ServiceError>;
    async fn update(&self, id: RecordId, dto: UpdatePostDto) -> Result<Post, ServiceError>;
    async fn delete(&self, id: RecordId) -> Result<(), ServiceError>;

    /// Lifecycle step: publish, archive or restore
    async fn transition(&self, id: RecordId, action: PostAction) -> Result<Post, ServiceError>;

    async fn publish(&self, id: RecordId) -> Result<Post, ServiceError> {
        self.transition(id, PostAction::Publish).await
    }

    async fn archive(&self, id: RecordId) -> Result<Post, ServiceError> {
        self.transition(id, PostAction::Archive).await
    }

    async fn restore(&self, id: RecordId) -> Result<Post, ServiceError> {
        self.transition(id, PostAction::Restore).await
    }
}
