//! Permission rules for users

use super::aggregate::{User, UserRole};

/// Admin accounts are protected from deletion
pub fn can_delete_user(user: &User) -> bool {
    user.role != UserRole::Admin
}

pub fn can_edit_user(user: &User) -> bool {
    user.role != UserRole::Admin
}
