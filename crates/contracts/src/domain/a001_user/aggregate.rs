use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;
use crate::shared::badge::{status_badge, user_role_badge, BadgeMeta};

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    #[default]
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Moderator, UserRole::Admin];

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Moderator => "moderator",
            UserRole::User => "user",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "moderator" => Some(UserRole::Moderator),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }

    /// Select option label
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "관리자",
            UserRole::Moderator => "운영자",
            UserRole::User => "사용자",
        }
    }

    pub fn badge(&self) -> BadgeMeta {
        user_role_badge(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [UserStatus::Active, UserStatus::Inactive, UserStatus::Suspended];

    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "활성",
            UserStatus::Inactive => "비활성",
            UserStatus::Suspended => "정지",
        }
    }

    /// User states are displayed with the content status palette
    pub fn badge(&self) -> BadgeMeta {
        let content_code = match self {
            UserStatus::Active => "published",
            UserStatus::Inactive => "draft",
            UserStatus::Suspended => "rejected",
        };
        status_badge(content_code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: NaiveDate,
    pub last_login: Option<NaiveDateTime>,
}

impl User {
    /// Apply a partial update; absent fields keep their value
    pub fn apply_update(&mut self, dto: &UpdateUserDto) {
        if let Some(username) = &dto.username {
            self.username = username.clone();
        }
        if let Some(email) = &dto.email {
            self.email = email.clone();
        }
        if let Some(role) = dto.role {
            self.role = role;
        }
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn last_login_display(&self) -> String {
        self.last_login
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

// ============================================================================
// Form draft and DTOs
// ============================================================================

/// Draft input of the user form. Every field may still be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserFormData {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFormData {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: Some(user.username.clone()),
            email: Some(user.email.clone()),
            role: Some(user.role),
            status: Some(user.status),
        }
    }

    /// Build a create request; `None` when required fields are missing
    pub fn to_create_dto(&self) -> Option<CreateUserDto> {
        Some(CreateUserDto {
            username: self.username.clone()?,
            email: self.email.clone()?,
            role: self.role.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        })
    }

    pub fn to_update_dto(&self) -> UpdateUserDto {
        UpdateUserDto {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl CreateUserDto {
    pub fn as_form(&self) -> UserFormData {
        UserFormData {
            username: Some(self.username.clone()),
            email: Some(self.email.clone()),
            role: Some(self.role),
            status: Some(self.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}
