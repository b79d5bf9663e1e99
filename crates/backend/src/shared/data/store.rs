//! In-memory record store shared by all handlers

use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_post::aggregate::Post;
use contracts::domain::common::RecordId;
use once_cell::sync::OnceCell;
use tokio::sync::RwLock;

use super::seed::{seed_posts, seed_users};

static STORE: OnceCell<RwLock<Store>> = OnceCell::new();

#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    last_user_id: RecordId,
    last_post_id: RecordId,
}

impl Store {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let users = seed_users();
        let posts = seed_posts();
        Self {
            last_user_id: users.iter().map(|u| u.id).max().unwrap_or(0),
            last_post_id: posts.iter().map(|p| p.id).max().unwrap_or(0),
            users,
            posts,
        }
    }

    /// Ids are never reused after a delete
    pub fn next_user_id(&mut self) -> RecordId {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_post_id(&mut self) -> RecordId {
        self.last_post_id += 1;
        self.last_post_id
    }
}

/// Replace the store contents at startup
pub async fn initialize_store(seed: bool) {
    let mut store = get_store().write().await;
    *store = if seed { Store::seeded() } else { Store::empty() };
    tracing::info!(
        "Store initialized: {} users, {} posts",
        store.users.len(),
        store.posts.len()
    );
}

pub fn get_store() -> &'static RwLock<Store> {
    STORE.get_or_init(|| RwLock::new(Store::empty()))
}
