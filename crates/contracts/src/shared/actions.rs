//! Action buttons: style and label derived from the action kind

use crate::domain::a001_user::rules::{can_delete_user, can_edit_user};
use crate::domain::a002_post::rules::{can_archive_post, can_publish_post, can_restore_post};
use crate::domain::common::{EntityType, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityAction {
    Create,
    Edit,
    Delete,
    Publish,
    Archive,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Ghost,
}

impl ButtonVariant {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Danger => "button--danger",
            ButtonVariant::Success => "button--success",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

pub fn button_variant_for_action(action: EntityAction) -> ButtonVariant {
    match action {
        EntityAction::Delete => ButtonVariant::Danger,
        EntityAction::Publish => ButtonVariant::Success,
        EntityAction::Archive => ButtonVariant::Secondary,
        _ => ButtonVariant::Primary,
    }
}

pub fn button_label_for_action(action: EntityAction, entity: Option<EntityType>) -> String {
    match action {
        EntityAction::Create => {
            let noun = match entity {
                Some(EntityType::User) => "사용자",
                _ => "게시글",
            };
            format!("새 {} 만들기", noun)
        }
        EntityAction::Edit => "수정".to_string(),
        EntityAction::Delete => "삭제".to_string(),
        EntityAction::Publish => "게시".to_string(),
        EntityAction::Archive => "보관".to_string(),
        EntityAction::Restore => "복원".to_string(),
    }
}

/// Whether `action` may be taken on `record` right now
pub fn is_action_enabled(action: EntityAction, record: &Record) -> bool {
    match (record, action) {
        (Record::User(user), EntityAction::Edit) => can_edit_user(user),
        (Record::User(user), EntityAction::Delete) => can_delete_user(user),
        (Record::User(_), EntityAction::Publish | EntityAction::Archive | EntityAction::Restore) => {
            false
        }
        (Record::Post(post), EntityAction::Publish) => can_publish_post(post),
        (Record::Post(post), EntityAction::Archive) => can_archive_post(post),
        (Record::Post(post), EntityAction::Restore) => can_restore_post(post),
        _ => true,
    }
}
