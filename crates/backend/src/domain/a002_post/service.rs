use contracts::domain::a002_post::aggregate::{
    CreatePostDto, Post, PostAction, PostFormData, UpdatePostDto,
};
use contracts::domain::a002_post::validation::validate_post_form;
use contracts::domain::common::RecordId;
use contracts::shared::validation::FormPolicy;
use tokio::sync::RwLock;

use crate::shared::data::store::Store;
use crate::shared::error::AppError;

fn not_found(id: RecordId) -> AppError {
    AppError::NotFound(format!("게시글을 찾을 수 없습니다 (ID: {id})"))
}

fn check(form: &PostFormData, policy: &FormPolicy) -> Result<(), AppError> {
    validate_post_form(form, policy)
        .into_result()
        .map_err(AppError::Validation)
}

pub async fn list_all(store: &RwLock<Store>) -> Vec<Post> {
    store.read().await.posts.clone()
}

pub async fn create(
    store: &RwLock<Store>,
    policy: &FormPolicy,
    dto: CreatePostDto,
) -> Result<Post, AppError> {
    check(&dto.as_form(), policy)?;

    let mut store = store.write().await;
    let post = Post {
        id: store.next_post_id(),
        title: dto.title,
        content: dto.content,
        author: dto.author,
        category: dto.category,
        status: dto.status,
        views: 0,
        created_at: chrono::Local::now().date_naive(),
    };
    store.posts.push(post.clone());
    tracing::info!("Post created: id={} status={}", post.id, post.status.code());
    Ok(post)
}

pub async fn update(
    store: &RwLock<Store>,
    policy: &FormPolicy,
    id: RecordId,
    dto: UpdatePostDto,
) -> Result<Post, AppError> {
    let mut store = store.write().await;
    let slot = store
        .posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;

    let mut updated = slot.clone();
    updated.apply_update(&dto);
    check(&PostFormData::from_post(&updated), policy)?;
    *slot = updated.clone();

    tracing::info!("Post updated: id={}", id);
    Ok(updated)
}

pub async fn delete(store: &RwLock<Store>, id: RecordId) -> Result<(), AppError> {
    let mut store = store.write().await;
    let before = store.posts.len();
    store.posts.retain(|p| p.id != id);
    if store.posts.len() == before {
        return Err(not_found(id));
    }
    tracing::info!("Post deleted: id={}", id);
    Ok(())
}

/// Move a post along its lifecycle; disallowed moves leave it unchanged
pub async fn transition(
    store: &RwLock<Store>,
    id: RecordId,
    action: PostAction,
) -> Result<Post, AppError> {
    let mut store = store.write().await;
    let post = store
        .posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found(id))?;

    let from = post.status;
    post.status = from.transition(action)?;
    tracing::info!(
        "Post {}: id={} {} -> {}",
        action.code(),
        id,
        from.code(),
        post.status.code()
    );
    Ok(post.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_post::aggregate::PostStatus;
    use contracts::domain::a002_post::rules::TransitionError;

    fn dto(title: &str) -> CreatePostDto {
        CreatePostDto {
            title: title.into(),
            content: String::new(),
            author: "kim".into(),
            category: "design".into(),
            status: PostStatus::Draft,
        }
    }

    fn status_of(store: &Store, id: RecordId) -> Option<PostStatus> {
        store.posts.iter().find(|p| p.id == id).map(|p| p.status)
    }

    #[tokio::test]
    async fn create_starts_with_zero_views() {
        let store = RwLock::new(Store::empty());
        let post = create(&store, &FormPolicy::default(), dto("새 게시글 제목"))
            .await
            .unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.views, 0);
        assert_eq!(post.status, PostStatus::Draft);
    }

    #[tokio::test]
    async fn create_validates_title() {
        let store = RwLock::new(Store::empty());
        let err = create(&store, &FormPolicy::default(), dto("짧음"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "제목은 5자 이상이어야 합니다");
        assert!(list_all(&store).await.is_empty());
    }

    #[tokio::test]
    async fn update_keeps_unsent_fields() {
        let store = RwLock::new(Store::seeded());
        let before = list_all(&store).await.into_iter().find(|p| p.id == 1).unwrap();
        let updated = update(
            &store,
            &FormPolicy::default(),
            1,
            UpdatePostDto {
                category: Some("development".into()),
                ..UpdatePostDto::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.category, "development");
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.views, before.views);
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_untouched() {
        let store = RwLock::new(Store::seeded());
        let before = list_all(&store).await;
        let result = update(
            &store,
            &FormPolicy::default(),
            1,
            UpdatePostDto {
                title: Some("x".into()),
                ..UpdatePostDto::default()
            },
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(list_all(&store).await, before);
    }

    #[tokio::test]
    async fn lifecycle_round_trip() {
        let store = RwLock::new(Store::empty());
        let post = create(&store, &FormPolicy::default(), dto("라이프사이클 테스트"))
            .await
            .unwrap();

        let published = transition(&store, post.id, PostAction::Publish).await.unwrap();
        assert_eq!(published.status, PostStatus::Published);
        let archived = transition(&store, post.id, PostAction::Archive).await.unwrap();
        assert_eq!(archived.status, PostStatus::Archived);
        let restored = transition(&store, post.id, PostAction::Restore).await.unwrap();
        assert_eq!(restored.status, PostStatus::Published);
    }

    #[tokio::test]
    async fn disallowed_transition_is_conflict() {
        let store = RwLock::new(Store::empty());
        let post = create(&store, &FormPolicy::default(), dto("보관 불가 게시글"))
            .await
            .unwrap();
        let err = transition(&store, post.id, PostAction::Archive).await.unwrap_err();
        assert!(matches!(err, AppError::Transition(TransitionError::NotPublished)));
        assert_eq!(status_of(&*store.read().await, post.id), Some(PostStatus::Draft));
    }

    #[tokio::test]
    async fn unknown_post() {
        let store = RwLock::new(Store::empty());
        assert!(matches!(
            transition(&store, 42, PostAction::Publish).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(delete(&store, 42).await, Err(AppError::NotFound(_))));
    }
}
