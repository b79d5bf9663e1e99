use serde::{Deserialize, Serialize};

/// Tag of a manageable record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    User,
    #[default]
    Post,
}

impl EntityType {
    pub const ALL: [EntityType; 2] = [EntityType::Post, EntityType::User];

    pub fn code(&self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Post => "post",
        }
    }

    /// Display noun used in titles and alerts
    pub fn noun(&self) -> &'static str {
        match self {
            EntityType::User => "사용자",
            EntityType::Post => "게시글",
        }
    }

    /// Label of the tab that selects this type
    pub fn tab_label(&self) -> &'static str {
        self.noun()
    }

    /// Only posts have a status lifecycle
    pub fn supports_transitions(&self) -> bool {
        matches!(self, EntityType::Post)
    }
}
