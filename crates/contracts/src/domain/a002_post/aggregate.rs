use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::shared::badge::{category_variant, status_badge, BadgeMeta, BadgeVariant};

// ============================================================================
// Enumerations
// ============================================================================

/// Post lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [PostStatus::Draft, PostStatus::Published, PostStatus::Archived];

    pub fn code(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "archived" => Some(PostStatus::Archived),
            _ => None,
        }
    }

    pub fn badge(&self) -> BadgeMeta {
        status_badge(self.code())
    }
}

/// Lifecycle moves exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostAction {
    Publish,
    Archive,
    Restore,
}

impl PostAction {
    pub fn code(&self) -> &'static str {
        match self {
            PostAction::Publish => "publish",
            PostAction::Archive => "archive",
            PostAction::Restore => "restore",
        }
    }

    /// Verb stem used in "...되었습니다" alerts
    pub fn verb(&self) -> &'static str {
        match self {
            PostAction::Publish => "게시",
            PostAction::Archive => "보관",
            PostAction::Restore => "복원",
        }
    }
}

/// Known categories offered by the form; posts may carry any string
pub const POST_CATEGORIES: [(&str, &str); 3] = [
    ("development", "Development"),
    ("design", "Design"),
    ("accessibility", "Accessibility"),
];

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub status: PostStatus,
    pub views: u64,
    pub created_at: NaiveDate,
}

impl Post {
    pub fn apply_update(&mut self, dto: &UpdatePostDto) {
        if let Some(title) = &dto.title {
            self.title = title.clone();
        }
        if let Some(content) = &dto.content {
            self.content = content.clone();
        }
        if let Some(author) = &dto.author {
            self.author = author.clone();
        }
        if let Some(category) = &dto.category {
            self.category = category.clone();
        }
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn category_variant(&self) -> BadgeVariant {
        category_variant(&self.category)
    }
}

// ============================================================================
// Form draft and DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostFormData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub status: Option<PostStatus>,
}

impl PostFormData {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: Some(post.title.clone()),
            content: Some(post.content.clone()),
            author: Some(post.author.clone()),
            category: Some(post.category.clone()),
            status: Some(post.status),
        }
    }

    pub fn to_create_dto(&self) -> Option<CreatePostDto> {
        Some(CreatePostDto {
            title: self.title.clone()?,
            content: self.content.clone().unwrap_or_default(),
            author: self.author.clone()?,
            category: self.category.clone()?,
            status: self.status.unwrap_or_default(),
        })
    }

    pub fn to_update_dto(&self) -> UpdatePostDto {
        UpdatePostDto {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub status: PostStatus,
}

impl CreatePostDto {
    pub fn as_form(&self) -> PostFormData {
        PostFormData {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            author: Some(self.author.clone()),
            category: Some(self.category.clone()),
            status: Some(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePostDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_defaults_content_and_status() {
        let form = PostFormData {
            title: Some("Hello world".into()),
            author: Some("kim".into()),
            category: Some("design".into()),
            ..Default::default()
        };
        let dto = form.to_create_dto().unwrap();
        assert_eq!(dto.content, "");
        assert_eq!(dto.status, PostStatus::Draft);
    }

    #[test]
    fn update_dto_skips_missing_fields_on_the_wire() {
        let dto = UpdatePostDto {
            title: Some("New title".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "New title" }));
    }

    #[test]
    fn status_codes_round_trip_through_from_code() {
        for status in PostStatus::ALL {
            assert_eq!(PostStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PostStatus::from_code("deleted"), None);
    }
}
