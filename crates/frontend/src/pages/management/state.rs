//! Management page state and its single update entry point

use contracts::domain::a001_user::aggregate::UserFormData;
use contracts::domain::a001_user::stats::calculate_user_stats;
use contracts::domain::a002_post::aggregate::PostFormData;
use contracts::domain::a002_post::stats::calculate_post_stats;
use contracts::domain::common::{EntityType, Record, RecordId, Records};
use contracts::shared::stats::Stats;

use crate::shared::table_engine::EngineState;

#[derive(Debug, Clone, PartialEq)]
pub struct ManagementState {
    pub entity_type: EntityType,
    pub records: Records,
    pub engine: EngineState,
    pub is_create_modal_open: bool,
    pub is_edit_modal_open: bool,
    /// Record being edited
    pub selected: Option<Record>,
    pub user_form: UserFormData,
    pub post_form: PostFormData,
    /// Record awaiting delete confirmation
    pub pending_delete: Option<RecordId>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl Default for ManagementState {
    fn default() -> Self {
        Self::new(EntityType::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ManagementAction {
    SwitchEntity(EntityType),
    RecordsLoaded(Records),
    LoadFailed(String),
    /// The list could not be refreshed after a mutation; the success stays
    ReloadFailed(String),
    OpenCreate,
    CloseCreate,
    OpenEdit(Record),
    CloseEdit,
    UserFormChanged(UserFormData),
    PostFormChanged(PostFormData),
    /// A mutation went through and the records were reloaded
    Succeeded(String),
    Failed(String),
    RequestDelete(RecordId),
    CancelDelete,
    EngineChanged(EngineState),
    DismissSuccess,
    DismissError,
}

impl ManagementState {
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            records: Records::empty(entity_type),
            engine: EngineState::default(),
            is_create_modal_open: false,
            is_edit_modal_open: false,
            selected: None,
            user_form: UserFormData::default(),
            post_form: PostFormData::default(),
            pending_delete: None,
            success_message: None,
            error_message: None,
        }
    }

    pub fn apply(&mut self, action: ManagementAction) {
        match action {
            ManagementAction::SwitchEntity(entity_type) => {
                *self = Self::new(entity_type);
            }
            ManagementAction::RecordsLoaded(records) => {
                // a response for the previous record type arrives after a switch
                if records.entity_type() == self.entity_type {
                    self.records = records;
                }
            }
            ManagementAction::LoadFailed(message) | ManagementAction::Failed(message) => {
                self.success_message = None;
                self.error_message = Some(message);
            }
            ManagementAction::ReloadFailed(message) => self.error_message = Some(message),
            ManagementAction::OpenCreate => {
                self.user_form = UserFormData::default();
                self.post_form = PostFormData::default();
                self.is_create_modal_open = true;
            }
            ManagementAction::CloseCreate => {
                self.is_create_modal_open = false;
                self.clear_forms();
            }
            ManagementAction::OpenEdit(record) => {
                match &record {
                    Record::User(user) => self.user_form = UserFormData::from_user(user),
                    Record::Post(post) => self.post_form = PostFormData::from_post(post),
                }
                self.selected = Some(record);
                self.is_edit_modal_open = true;
            }
            ManagementAction::CloseEdit => {
                self.is_edit_modal_open = false;
                self.selected = None;
                self.clear_forms();
            }
            ManagementAction::UserFormChanged(form) => self.user_form = form,
            ManagementAction::PostFormChanged(form) => self.post_form = form,
            ManagementAction::Succeeded(message) => {
                self.is_create_modal_open = false;
                self.is_edit_modal_open = false;
                self.selected = None;
                self.pending_delete = None;
                self.clear_forms();
                self.error_message = None;
                self.success_message = Some(message);
            }
            ManagementAction::RequestDelete(id) => self.pending_delete = Some(id),
            ManagementAction::CancelDelete => self.pending_delete = None,
            ManagementAction::EngineChanged(engine) => self.engine = engine,
            ManagementAction::DismissSuccess => self.success_message = None,
            ManagementAction::DismissError => self.error_message = None,
        }
    }

    fn clear_forms(&mut self) {
        self.user_form = UserFormData::default();
        self.post_form = PostFormData::default();
    }

    /// Aggregates of the current records, recomputed on every call
    pub fn stats(&self) -> Stats {
        match &self.records {
            Records::Users(users) => calculate_user_stats(users),
            Records::Posts(posts) => calculate_post_stats(posts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::User;
    use contracts::domain::a002_post::aggregate::{Post, PostStatus};

    fn posts() -> Records {
        Records::Posts(vec![
            Post {
                id: 1,
                status: PostStatus::Published,
                views: 40,
                ..Post::default()
            },
            Post {
                id: 2,
                views: 2,
                ..Post::default()
            },
        ])
    }

    #[test]
    fn switch_resets_everything_transient() {
        let mut state = ManagementState::default();
        state.apply(ManagementAction::RecordsLoaded(posts()));
        state.apply(ManagementAction::EngineChanged(EngineState {
            current_page: 3,
            search_term: "abc".into(),
            ..EngineState::default()
        }));
        state.apply(ManagementAction::OpenCreate);
        state.apply(ManagementAction::RequestDelete(1));
        state.apply(ManagementAction::Failed("x".into()));

        state.apply(ManagementAction::SwitchEntity(EntityType::User));
        assert_eq!(state, ManagementState::new(EntityType::User));
        assert_eq!(state.engine.current_page, 1);
        assert!(state.engine.search_term.is_empty());
    }

    #[test]
    fn stale_load_for_other_type_is_dropped() {
        let mut state = ManagementState::new(EntityType::User);
        state.apply(ManagementAction::RecordsLoaded(posts()));
        assert_eq!(state.records, Records::Users(Vec::new()));
    }

    #[test]
    fn open_edit_copies_record_into_draft() {
        let mut state = ManagementState::new(EntityType::User);
        let user = User {
            id: 9,
            username: "lee".into(),
            ..User::default()
        };
        state.apply(ManagementAction::OpenEdit(Record::User(user.clone())));
        assert!(state.is_edit_modal_open);
        assert_eq!(state.user_form.username.as_deref(), Some("lee"));
        assert_eq!(state.selected, Some(Record::User(user)));

        state.apply(ManagementAction::CloseEdit);
        assert_eq!(state.selected, None);
        assert_eq!(state.user_form, UserFormData::default());
    }

    #[test]
    fn success_closes_modals_and_replaces_error() {
        let mut state = ManagementState::default();
        state.apply(ManagementAction::OpenCreate);
        state.apply(ManagementAction::Failed("제목은 5자 이상이어야 합니다".into()));
        assert!(state.is_create_modal_open);

        state.apply(ManagementAction::Succeeded("게시글가 생성되었습니다".into()));
        assert!(!state.is_create_modal_open);
        assert_eq!(state.error_message, None);
        assert_eq!(state.success_message.as_deref(), Some("게시글가 생성되었습니다"));
    }

    #[test]
    fn reload_failure_keeps_success_message() {
        let mut state = ManagementState::default();
        state.apply(ManagementAction::Succeeded("삭제되었습니다".into()));
        state.apply(ManagementAction::ReloadFailed("데이터를 불러오는데 실패했습니다".into()));
        assert_eq!(state.success_message.as_deref(), Some("삭제되었습니다"));
        assert_eq!(state.error_message.as_deref(), Some("데이터를 불러오는데 실패했습니다"));
    }

    #[test]
    fn form_edits_leave_records_untouched() {
        let mut state = ManagementState::default();
        state.apply(ManagementAction::RecordsLoaded(posts()));
        let before = state.records.clone();
        state.apply(ManagementAction::OpenCreate);
        state.apply(ManagementAction::PostFormChanged(PostFormData {
            title: Some("입력 중".into()),
            ..PostFormData::default()
        }));
        assert_eq!(state.records, before);
    }

    #[test]
    fn stats_follow_current_records() {
        let mut state = ManagementState::default();
        state.apply(ManagementAction::RecordsLoaded(posts()));
        let stats = state.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.stat1.value, 1);
        assert_eq!(stats.stat4.value, 42);
    }
}
