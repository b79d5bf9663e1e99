//! Post lifecycle: draft -> published -> archived -> (restore) -> published

use thiserror::Error;

use super::aggregate::{Post, PostAction, PostStatus};

pub fn can_publish_post(post: &Post) -> bool {
    post.status != PostStatus::Published
}

pub fn can_archive_post(post: &Post) -> bool {
    post.status == PostStatus::Published
}

pub fn can_restore_post(post: &Post) -> bool {
    post.status == PostStatus::Archived
}

/// Whether `action` is currently offered for `post`
pub fn is_action_allowed(post: &Post, action: PostAction) -> bool {
    match action {
        PostAction::Publish => can_publish_post(post),
        PostAction::Archive => can_archive_post(post),
        PostAction::Restore => can_restore_post(post),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("이미 게시된 게시글입니다")]
    AlreadyPublished,
    #[error("게시된 게시글만 보관할 수 있습니다")]
    NotPublished,
    #[error("보관된 게시글만 복원할 수 있습니다")]
    NotArchived,
}

impl PostStatus {
    /// Target state of `action`, or why it is not allowed from here
    pub fn transition(self, action: PostAction) -> Result<PostStatus, TransitionError> {
        match (action, self) {
            (PostAction::Publish, PostStatus::Published) => Err(TransitionError::AlreadyPublished),
            (PostAction::Publish, _) => Ok(PostStatus::Published),
            (PostAction::Archive, PostStatus::Published) => Ok(PostStatus::Archived),
            (PostAction::Archive, _) => Err(TransitionError::NotPublished),
            (PostAction::Restore, PostStatus::Archived) => Ok(PostStatus::Published),
            (PostAction::Restore, _) => Err(TransitionError::NotArchived),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn with_status(status: PostStatus) -> Post {
        Post {
            id: 1,
            title: "Sample title".into(),
            content: String::new(),
            author: "kim".into(),
            category: "development".into(),
            status,
            views: 0,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn lifecycle_predicates() {
        assert!(can_publish_post(&with_status(PostStatus::Draft)));
        assert!(!can_archive_post(&with_status(PostStatus::Draft)));
        assert!(can_archive_post(&with_status(PostStatus::Published)));
        assert!(!can_publish_post(&with_status(PostStatus::Published)));
        assert!(can_restore_post(&with_status(PostStatus::Archived)));
        assert!(!can_restore_post(&with_status(PostStatus::Published)));
    }

    #[test]
    fn transitions_follow_predicates() {
        for status in PostStatus::ALL {
            let post = with_status(status);
            for action in [PostAction::Publish, PostAction::Archive, PostAction::Restore] {
                assert_eq!(
                    status.transition(action).is_ok(),
                    is_action_allowed(&post, action),
                    "{:?} via {:?}",
                    status,
                    action
                );
            }
        }
    }

    #[test]
    fn no_path_back_to_draft_or_straight_to_archive() {
        assert_eq!(
            PostStatus::Draft.transition(PostAction::Archive),
            Err(TransitionError::NotPublished)
        );
        assert_eq!(
            PostStatus::Archived.transition(PostAction::Restore),
            Ok(PostStatus::Published)
        );
        assert!(PostStatus::ALL
            .iter()
            .flat_map(|s| [PostAction::Publish, PostAction::Archive, PostAction::Restore]
                .map(|a| s.transition(a)))
            .all(|r| r != Ok(PostStatus::Draft)));
    }
}
