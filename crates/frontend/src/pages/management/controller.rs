//! Async orchestration of the management page: load, create, update,
//! delete and post lifecycle steps against the record services.
//!
//! Every outcome goes through [`ManagementState::apply`]; the controller
//! itself holds no UI state.

use std::cell::RefCell;

use contracts::domain::a001_user::validation::validate_user_form;
use contracts::domain::a002_post::aggregate::PostAction;
use contracts::domain::a002_post::validation::validate_post_form;
use contracts::domain::common::{EntityType, Record, RecordId, Records};
use contracts::shared::error::ServiceError;
use contracts::shared::validation::FormPolicy;
use leptos::prelude::*;

use super::services::{PostService, UserService};
use super::state::{ManagementAction, ManagementState};

pub const LOAD_FAILED: &str = "데이터를 불러오는데 실패했습니다";
pub const CREATE_FAILED: &str = "생성에 실패했습니다";
pub const UPDATE_FAILED: &str = "수정에 실패했습니다";
pub const DELETE_FAILED: &str = "삭제에 실패했습니다";
pub const TRANSITION_FAILED: &str = "작업에 실패했습니다";
pub const DELETE_CONFIRM: &str = "정말 삭제하시겠습니까?";

/// Where the controller keeps [`ManagementState`]
pub trait StateStore {
    fn read<R>(&self, f: impl FnOnce(&ManagementState) -> R) -> R;
    fn dispatch(&self, action: ManagementAction);
}

impl StateStore for RwSignal<ManagementState> {
    fn read<R>(&self, f: impl FnOnce(&ManagementState) -> R) -> R {
        self.with_untracked(f)
    }

    fn dispatch(&self, action: ManagementAction) {
        self.update(|state| state.apply(action));
    }
}

impl StateStore for RefCell<ManagementState> {
    fn read<R>(&self, f: impl FnOnce(&ManagementState) -> R) -> R {
        f(&self.borrow())
    }

    fn dispatch(&self, action: ManagementAction) {
        self.borrow_mut().apply(action);
    }
}

#[derive(Clone)]
pub struct ManagementController<U, P, S> {
    users: U,
    posts: P,
    store: S,
    policy: FormPolicy,
}

impl<U, P, S> ManagementController<U, P, S>
where
    U: UserService,
    P: PostService,
    S: StateStore,
{
    pub fn new(users: U, posts: P, store: S) -> Self {
        Self {
            users,
            posts,
            store,
            policy: FormPolicy::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn entity_type(&self) -> EntityType {
        self.store.read(|s| s.entity_type)
    }

    pub async fn switch_entity(&self, entity_type: EntityType) {
        log::debug!("switching to {}", entity_type.code());
        self.store.dispatch(ManagementAction::SwitchEntity(entity_type));
        let _ = self.load().await;
    }

    /// Fetch the active list. The error is also returned so callers that
    /// report afterwards can keep it visible.
    pub async fn load(&self) -> Result<(), ServiceError> {
        let entity_type = self.entity_type();
        let result = match entity_type {
            EntityType::User => self.users.get_all().await.map(Records::Users),
            EntityType::Post => self.posts.get_all().await.map(Records::Posts),
        };

        match result {
            Ok(records) => {
                log::debug!("loaded {} {} records", records.len(), entity_type.code());
                self.store.dispatch(ManagementAction::RecordsLoaded(records));
                Ok(())
            }
            Err(e) => {
                log::warn!("loading {} records failed: {}", entity_type.code(), e);
                self.store.dispatch(ManagementAction::LoadFailed(e.message_or(LOAD_FAILED)));
                Err(e)
            }
        }
    }

    /// Reload, then report success; a failure keeps modals and drafts as they are.
    /// A failed reload stays on screen next to the success message.
    async fn finish(&self, result: Result<(), ServiceError>, success: String, fallback: &str) {
        match result {
            Ok(()) => {
                log::info!("{}", success);
                let reload = self.load().await;
                self.store.dispatch(ManagementAction::Succeeded(success));
                if let Err(e) = reload {
                    self.store.dispatch(ManagementAction::ReloadFailed(e.message_or(LOAD_FAILED)));
                }
            }
            Err(e) => {
                log::warn!("{}: {}", fallback, e);
                self.store.dispatch(ManagementAction::Failed(e.message_or(fallback)));
            }
        }
    }

    fn reject(&self, message: String) {
        log::debug!("form rejected: {}", message);
        self.store.dispatch(ManagementAction::Failed(message));
    }

    pub fn open_create(&self) {
        self.store.dispatch(ManagementAction::OpenCreate);
    }

    pub fn close_create(&self) {
        self.store.dispatch(ManagementAction::CloseCreate);
    }

    pub async fn create(&self) {
        let entity_type = self.entity_type();
        let result = match entity_type {
            EntityType::User => {
                let form = self.store.read(|s| s.user_form.clone());
                if let Err(message) = validate_user_form(&form, &self.policy).into_result() {
                    return self.reject(message);
                }
                match form.to_create_dto() {
                    Some(dto) => self.users.create(dto).await.map(|_| ()),
                    None => return self.reject(CREATE_FAILED.to_string()),
                }
            }
            EntityType::Post => {
                let form = self.store.read(|s| s.post_form.clone());
                if let Err(message) = validate_post_form(&form, &self.policy).into_result() {
                    return self.reject(message);
                }
                match form.to_create_dto() {
                    Some(dto) => self.posts.create(dto).await.map(|_| ()),
                    None => return self.reject(CREATE_FAILED.to_string()),
                }
            }
        };

        let success = format!("{}가 생성되었습니다", entity_type.noun());
        self.finish(result, success, CREATE_FAILED).await;
    }

    /// Open the edit modal for a record of the current list
    pub fn open_edit(&self, id: RecordId) {
        match self.store.read(|s| s.records.find(id)) {
            Some(record) => self.store.dispatch(ManagementAction::OpenEdit(record)),
            None => log::warn!("edit requested for unknown record {}", id),
        }
    }

    pub fn close_edit(&self) {
        self.store.dispatch(ManagementAction::CloseEdit);
    }

    pub async fn update(&self) {
        let Some(selected) = self.store.read(|s| s.selected.clone()) else {
            return;
        };

        let result = match &selected {
            Record::User(user) => {
                let form = self.store.read(|s| s.user_form.clone());
                if let Err(message) = validate_user_form(&form, &self.policy).into_result() {
                    return self.reject(message);
                }
                self.users
                    .update(user.id, form.to_update_dto())
                    .await
                    .map(|_| ())
            }
            Record::Post(post) => {
                let form = self.store.read(|s| s.post_form.clone());
                if let Err(message) = validate_post_form(&form, &self.policy).into_result() {
                    return self.reject(message);
                }
                self.posts
                    .update(post.id, form.to_update_dto())
                    .await
                    .map(|_| ())
            }
        };

        let success = format!("{}가 수정되었습니다", selected.entity_type().noun());
        self.finish(result, success, UPDATE_FAILED).await;
    }

    /// First step of deleting: ask for confirmation
    pub fn request_delete(&self, id: RecordId) {
        self.store.dispatch(ManagementAction::RequestDelete(id));
    }

    pub fn cancel_delete(&self) {
        self.store.dispatch(ManagementAction::CancelDelete);
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.store.read(|s| s.pending_delete) else {
            return;
        };
        self.store.dispatch(ManagementAction::CancelDelete);

        let result = match self.entity_type() {
            EntityType::User => self.users.delete(id).await,
            EntityType::Post => self.posts.delete(id).await,
        };
        self.finish(result, "삭제되었습니다".to_string(), DELETE_FAILED).await;
    }

    /// Publish, archive or restore a post. Does nothing on the user list.
    pub async fn transition(&self, id: RecordId, action: PostAction) {
        if !self.entity_type().supports_transitions() {
            return;
        }
        let result = self.posts.transition(id, action).await.map(|_| ());
        let success = format!("{}되었습니다", action.verb());
        self.finish(result, success, TRANSITION_FAILED).await;
    }

    pub async fn publish(&self, id: RecordId) {
        self.transition(id, PostAction::Publish).await;
    }

    pub async fn archive(&self, id: RecordId) {
        self.transition(id, PostAction::Archive).await;
    }

    pub async fn restore(&self, id: RecordId) {
        self.transition(id, PostAction::Restore).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::a001_user::aggregate::{
        CreateUserDto, UpdateUserDto, User, UserFormData, UserRole,
    };
    use contracts::domain::a002_post::aggregate::{
        CreatePostDto, Post, PostFormData, PostStatus, UpdatePostDto,
    };
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeUsers {
        rows: RefCell<Vec<User>>,
        calls: Cell<usize>,
        fail_with: Option<ServiceError>,
    }

    #[async_trait(?Send)]
    impl UserService for FakeUsers {
        async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, dto: CreateUserDto) -> Result<User, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            let user = User {
                id: self.rows.borrow().len() as i64 + 1,
                username: dto.username,
                email: dto.email,
                role: dto.role,
                status: dto.status,
                ..User::default()
            };
            self.rows.borrow_mut().push(user.clone());
            Ok(user)
        }

        async fn update(&self, id: RecordId, dto: UpdateUserDto) -> Result<User, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            let mut rows = self.rows.borrow_mut();
            let user = rows
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| ServiceError::new("사용자를 찾을 수 없습니다"))?;
            user.apply_update(&dto);
            Ok(user.clone())
        }

        async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.rows.borrow_mut().retain(|u| u.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakePosts {
        rows: RefCell<Vec<Post>>,
        loads: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl PostService for FakePosts {
        async fn get_all(&self) -> Result<Vec<Post>, ServiceError> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, dto: CreatePostDto) -> Result<Post, ServiceError> {
            let post = Post {
                id: self.rows.borrow().len() as i64 + 1,
                title: dto.title,
                content: dto.content,
                author: dto.author,
                category: dto.category,
                status: dto.status,
                ..Post::default()
            };
            self.rows.borrow_mut().push(post.clone());
            Ok(post)
        }

        async fn update(&self, id: RecordId, dto: UpdatePostDto) -> Result<Post, ServiceError> {
            let mut rows = self.rows.borrow_mut();
            let post = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(ServiceError::without_reason)?;
            post.apply_update(&dto);
            Ok(post.clone())
        }

        async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
            self.rows.borrow_mut().retain(|p| p.id != id);
            Ok(())
        }

        async fn transition(&self, id: RecordId, action: PostAction) -> Result<Post, ServiceError> {
            let mut rows = self.rows.borrow_mut();
            let post = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(ServiceError::without_reason)?;
            post.status = post
                .status
                .transition(action)
                .map_err(|e| ServiceError::new(e.to_string()))?;
            Ok(post.clone())
        }
    }

    type Controller = ManagementController<FakeUsers, FakePosts, RefCell<ManagementState>>;

    fn controller(entity_type: EntityType) -> Controller {
        ManagementController::new(
            FakeUsers::default(),
            FakePosts::default(),
            RefCell::new(ManagementState::new(entity_type)),
        )
    }

    fn seeded_posts() -> Vec<Post> {
        vec![
            Post {
                id: 1,
                title: "디자인 시스템 소개".into(),
                status: PostStatus::Draft,
                ..Post::default()
            },
            Post {
                id: 2,
                title: "접근성 체크리스트".into(),
                status: PostStatus::Published,
                ..Post::default()
            },
        ]
    }

    fn state(c: &Controller) -> ManagementState {
        c.store().borrow().clone()
    }

    #[test]
    fn create_with_empty_username_never_calls_service() {
        let c = controller(EntityType::User);
        c.open_create();
        c.store().dispatch(ManagementAction::UserFormChanged(UserFormData {
            username: Some(String::new()),
            email: Some("a@b.co".into()),
            ..UserFormData::default()
        }));

        block_on(c.create());

        assert_eq!(c.users.calls.get(), 0);
        let s = state(&c);
        assert_eq!(s.error_message.as_deref(), Some("사용자명과 이메일은 필수입니다"));
        assert!(s.is_create_modal_open);
    }

    #[test]
    fn create_user_reloads_and_reports() {
        let c = controller(EntityType::User);
        c.open_create();
        c.store().dispatch(ManagementAction::UserFormChanged(UserFormData {
            username: Some("new_user".into()),
            email: Some("new@example.com".into()),
            ..UserFormData::default()
        }));

        block_on(c.create());

        let s = state(&c);
        assert_eq!(s.success_message.as_deref(), Some("사용자가 생성되었습니다"));
        assert!(!s.is_create_modal_open);
        assert_eq!(s.user_form, UserFormData::default());
        match &s.records {
            Records::Users(users) => {
                assert_eq!(users.len(), 1);
                assert_eq!(users[0].role, UserRole::User);
            }
            other => panic!("unexpected records {:?}", other),
        }
    }

    #[test]
    fn create_post_message_keeps_literal_suffix() {
        let c = controller(EntityType::Post);
        c.store().dispatch(ManagementAction::PostFormChanged(PostFormData {
            title: Some("새로운 게시글 제목".into()),
            author: Some("홍길동".into()),
            category: Some("design".into()),
            ..PostFormData::default()
        }));

        block_on(c.create());

        let s = state(&c);
        assert_eq!(s.success_message.as_deref(), Some("게시글가 생성되었습니다"));
        assert_eq!(c.posts.rows.borrow()[0].status, PostStatus::Draft);
        assert_eq!(c.posts.rows.borrow()[0].content, "");
    }

    #[test]
    fn service_error_reason_is_shown_verbatim() {
        let mut c = controller(EntityType::User);
        c.users.fail_with = Some(ServiceError::new("이미 존재하는 사용자명입니다"));
        c.store().dispatch(ManagementAction::UserFormChanged(UserFormData {
            username: Some("dup_user".into()),
            email: Some("dup@example.com".into()),
            ..UserFormData::default()
        }));

        block_on(c.create());
        assert_eq!(
            state(&c).error_message.as_deref(),
            Some("이미 존재하는 사용자명입니다")
        );
    }

    #[test]
    fn service_error_without_reason_uses_fallback() {
        let mut c = controller(EntityType::User);
        c.users.rows.borrow_mut().push(User {
            id: 1,
            ..User::default()
        });
        c.users.fail_with = Some(ServiceError::without_reason());
        c.request_delete(1);

        block_on(c.confirm_delete());
        let s = state(&c);
        assert_eq!(s.error_message.as_deref(), Some(DELETE_FAILED));
        assert_eq!(s.pending_delete, None);
    }

    #[test]
    fn switching_resets_engine_and_loads_users() {
        let c = controller(EntityType::Post);
        *c.posts.rows.borrow_mut() = seeded_posts();
        c.users.rows.borrow_mut().push(User {
            id: 1,
            username: "admin".into(),
            ..User::default()
        });
        assert!(block_on(c.load()).is_ok());
        c.store().dispatch(ManagementAction::EngineChanged(
            crate::shared::table_engine::EngineState {
                current_page: 2,
                search_term: "접근성".into(),
                ..Default::default()
            },
        ));

        block_on(c.switch_entity(EntityType::User));

        let s = state(&c);
        assert_eq!(s.engine.search_term, "");
        assert_eq!(s.engine.current_page, 1);
        assert_eq!(c.users.calls.get(), 1);
        assert_eq!(s.records.entity_type(), EntityType::User);
        assert_eq!(s.records.len(), 1);
    }

    #[test]
    fn edit_sends_draft_and_reports() {
        let c = controller(EntityType::Post);
        *c.posts.rows.borrow_mut() = seeded_posts();
        assert!(block_on(c.load()).is_ok());

        c.open_edit(1);
        let mut draft = state(&c).post_form;
        draft.title = Some("디자인 시스템 소개 (개정)".into());
        c.store().dispatch(ManagementAction::PostFormChanged(draft));
        block_on(c.update());

        let s = state(&c);
        assert_eq!(s.success_message.as_deref(), Some("게시글가 수정되었습니다"));
        assert!(!s.is_edit_modal_open);
        assert_eq!(c.posts.rows.borrow()[0].title, "디자인 시스템 소개 (개정)");
    }

    #[test]
    fn delete_needs_confirmation() {
        let c = controller(EntityType::Post);
        *c.posts.rows.borrow_mut() = seeded_posts();
        assert!(block_on(c.load()).is_ok());

        c.request_delete(2);
        c.cancel_delete();
        block_on(c.confirm_delete());
        assert_eq!(c.posts.rows.borrow().len(), 2);

        c.request_delete(2);
        block_on(c.confirm_delete());
        let s = state(&c);
        assert_eq!(c.posts.rows.borrow().len(), 1);
        assert_eq!(s.records.len(), 1);
        assert_eq!(s.success_message.as_deref(), Some("삭제되었습니다"));
    }

    #[test]
    fn transitions_only_on_post_list() {
        let c = controller(EntityType::Post);
        *c.posts.rows.borrow_mut() = seeded_posts();
        assert!(block_on(c.load()).is_ok());

        block_on(c.publish(1));
        assert_eq!(state(&c).success_message.as_deref(), Some("게시되었습니다"));
        block_on(c.archive(1));
        assert_eq!(state(&c).success_message.as_deref(), Some("보관되었습니다"));
        block_on(c.restore(1));
        assert_eq!(state(&c).success_message.as_deref(), Some("복원되었습니다"));
        assert_eq!(c.posts.rows.borrow()[0].status, PostStatus::Published);

        // archive from draft is refused by the service
        c.posts.rows.borrow_mut()[0].status = PostStatus::Draft;
        block_on(c.archive(1));
        assert_eq!(
            state(&c).error_message.as_deref(),
            Some("게시된 게시글만 보관할 수 있습니다")
        );

        let users = controller(EntityType::User);
        *users.posts.rows.borrow_mut() = seeded_posts();
        block_on(users.publish(1));
        assert_eq!(users.posts.rows.borrow()[0].status, PostStatus::Draft);
        assert_eq!(state(&users).success_message, None);
    }

    #[test]
    fn load_failure_uses_load_fallback() {
        struct Down;

        #[async_trait(?Send)]
        impl PostService for Down {
            async fn get_all(&self) -> Result<Vec<Post>, ServiceError> {
                Err(ServiceError::without_reason())
            }
            async fn create(&self, _: CreatePostDto) -> Result<Post, ServiceError> {
                Err(ServiceError::without_reason())
            }
            async fn update(&self, _: RecordId, _: UpdatePostDto) -> Result<Post, ServiceError> {
                Err(ServiceError::without_reason())
            }
            async fn delete(&self, _: RecordId) -> Result<(), ServiceError> {
                Err(ServiceError::without_reason())
            }
            async fn transition(&self, _: RecordId, _: PostAction) -> Result<Post, ServiceError> {
                Err(ServiceError::without_reason())
            }
        }

        let c = ManagementController::new(
            FakeUsers::default(),
            Down,
            RefCell::new(ManagementState::default()),
        );
        assert!(block_on(c.load()).is_err());
        assert_eq!(c.store().borrow().error_message.as_deref(), Some(LOAD_FAILED));
    }

    #[test]
    fn failed_reload_after_delete_stays_visible() {
        struct FlakyPosts {
            inner: FakePosts,
        }

        #[async_trait(?Send)]
        impl PostService for FlakyPosts {
            async fn get_all(&self) -> Result<Vec<Post>, ServiceError> {
                if self.inner.loads.get() > 0 {
                    return Err(ServiceError::without_reason());
                }
                self.inner.get_all().await
            }
            async fn create(&self, dto: CreatePostDto) -> Result<Post, ServiceError> {
                self.inner.create(dto).await
            }
            async fn update(&self, id: RecordId, dto: UpdatePostDto) -> Result<Post, ServiceError> {
                self.inner.update(id, dto).await
            }
            async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
                self.inner.delete(id).await
            }
            async fn transition(&self, id: RecordId, action: PostAction) -> Result<Post, ServiceError> {
                self.inner.transition(id, action).await
            }
        }

        let posts = FlakyPosts {
            inner: FakePosts::default(),
        };
        *posts.inner.rows.borrow_mut() = seeded_posts();
        let c = ManagementController::new(
            FakeUsers::default(),
            posts,
            RefCell::new(ManagementState::new(EntityType::Post)),
        );
        assert!(block_on(c.load()).is_ok());

        c.request_delete(1);
        block_on(c.confirm_delete());

        let s = c.store().borrow().clone();
        assert_eq!(s.success_message.as_deref(), Some("삭제되었습니다"));
        assert_eq!(s.error_message.as_deref(), Some(LOAD_FAILED));
        assert_eq!(s.records.len(), 2);
        assert_eq!(c.posts.inner.rows.borrow().len(), 1);
    }
}
