//! Mapping of domain codes to badge style and label.
//!
//! Every mapper is total: an unknown code falls back to the primary variant
//! and is shown with its raw code as label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl BadgeVariant {
    pub fn code(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeMeta {
    pub variant: BadgeVariant,
    pub label: String,
}

impl BadgeMeta {
    fn known(variant: BadgeVariant, label: &str) -> Self {
        Self {
            variant,
            label: label.to_string(),
        }
    }

    fn fallback(code: &str) -> Self {
        Self {
            variant: BadgeVariant::Primary,
            label: code.to_string(),
        }
    }
}

/// published / draft / archived / pending / rejected
pub fn status_badge(code: &str) -> BadgeMeta {
    use BadgeVariant::*;
    match code {
        "published" => BadgeMeta::known(Success, "게시됨"),
        "draft" => BadgeMeta::known(Warning, "임시저장"),
        "archived" => BadgeMeta::known(Secondary, "보관됨"),
        "pending" => BadgeMeta::known(Info, "대기중"),
        "rejected" => BadgeMeta::known(Danger, "거부됨"),
        other => BadgeMeta::fallback(other),
    }
}

/// admin / moderator / user / guest
pub fn user_role_badge(code: &str) -> BadgeMeta {
    use BadgeVariant::*;
    match code {
        "admin" => BadgeMeta::known(Danger, "관리자"),
        "moderator" => BadgeMeta::known(Warning, "운영자"),
        "user" => BadgeMeta::known(Primary, "사용자"),
        "guest" => BadgeMeta::known(Secondary, "게스트"),
        other => BadgeMeta::fallback(other),
    }
}

/// high / medium / low
pub fn priority_badge(code: &str) -> BadgeMeta {
    use BadgeVariant::*;
    match code {
        "high" => BadgeMeta::known(Danger, "높음"),
        "medium" => BadgeMeta::known(Warning, "보통"),
        "low" => BadgeMeta::known(Info, "낮음"),
        other => BadgeMeta::fallback(other),
    }
}

/// paid / pending / failed / refunded
pub fn payment_status_badge(code: &str) -> BadgeMeta {
    use BadgeVariant::*;
    match code {
        "paid" => BadgeMeta::known(Success, "결제완료"),
        "pending" => BadgeMeta::known(Warning, "결제대기"),
        "failed" => BadgeMeta::known(Danger, "결제실패"),
        "refunded" => BadgeMeta::known(Secondary, "환불됨"),
        other => BadgeMeta::fallback(other),
    }
}

/// Post categories are free text; the known ones get a color
pub fn category_variant(category: &str) -> BadgeVariant {
    match category {
        "development" => BadgeVariant::Primary,
        "design" => BadgeVariant::Info,
        "accessibility" => BadgeVariant::Danger,
        _ => BadgeVariant::Secondary,
    }
}
