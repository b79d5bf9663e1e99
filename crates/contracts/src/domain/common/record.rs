use super::EntityType;
use crate::domain::a001_user::aggregate::User;
use crate::domain::a002_post::aggregate::Post;
use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// One manageable record, closed over the known record types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entityType", rename_all = "lowercase")]
pub enum Record {
    User(User),
    Post(Post),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Record::User(u) => u.id,
            Record::Post(p) => p.id,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Record::User(_) => EntityType::User,
            Record::Post(_) => EntityType::Post,
        }
    }
}

/// A loaded collection of one record type
#[derive(Debug, Clone, PartialEq)]
pub enum Records {
    Users(Vec<User>),
    Posts(Vec<Post>),
}

impl Records {
    pub fn empty(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::User => Records::Users(Vec::new()),
            EntityType::Post => Records::Posts(Vec::new()),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Records::Users(_) => EntityType::User,
            Records::Posts(_) => EntityType::Post,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Records::Users(v) => v.len(),
            Records::Posts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: RecordId) -> Option<Record> {
        match self {
            Records::Users(v) => v.iter().find(|u| u.id == id).cloned().map(Record::User),
            Records::Posts(v) => v.iter().find(|p| p.id == id).cloned().map(Record::Post),
        }
    }
}
