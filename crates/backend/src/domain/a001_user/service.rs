use contracts::domain::a001_user::aggregate::{CreateUserDto, UpdateUserDto, User, UserFormData};
use contracts::domain::a001_user::validation::validate_user_form;
use contracts::domain::common::RecordId;
use contracts::shared::validation::FormPolicy;
use tokio::sync::RwLock;

use crate::shared::data::store::Store;
use crate::shared::error::AppError;

fn not_found(id: RecordId) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다 (ID: {id})"))
}

fn check(form: &UserFormData, policy: &FormPolicy) -> Result<(), AppError> {
    validate_user_form(form, policy)
        .into_result()
        .map_err(AppError::Validation)
}

fn ensure_unique(store: &Store, username: &str, except: Option<RecordId>) -> Result<(), AppError> {
    let taken = store
        .users
        .iter()
        .any(|u| Some(u.id) != except && u.username == username);
    if taken {
        return Err(AppError::Validation("이미 존재하는 사용자명입니다".to_string()));
    }
    Ok(())
}

pub async fn list_all(store: &RwLock<Store>) -> Vec<User> {
    store.read().await.users.clone()
}

pub async fn create(
    store: &RwLock<Store>,
    policy: &FormPolicy,
    dto: CreateUserDto,
) -> Result<User, AppError> {
    check(&dto.as_form(), policy)?;

    let mut store = store.write().await;
    ensure_unique(&store, &dto.username, None)?;

    let user = User {
        id: store.next_user_id(),
        username: dto.username,
        email: dto.email,
        role: dto.role,
        status: dto.status,
        created_at: chrono::Local::now().date_naive(),
        last_login: None,
    };
    store.users.push(user.clone());
    tracing::info!("User created: id={} username={}", user.id, user.username);
    Ok(user)
}

/// Partial update; the merged record must still pass validation
pub async fn update(
    store: &RwLock<Store>,
    policy: &FormPolicy,
    id: RecordId,
    dto: UpdateUserDto,
) -> Result<User, AppError> {
    let mut store = store.write().await;
    let current = store
        .users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .ok_or_else(|| not_found(id))?;

    let mut updated = current;
    updated.apply_update(&dto);
    check(&UserFormData::from_user(&updated), policy)?;
    ensure_unique(&store, &updated.username, Some(id))?;

    if let Some(slot) = store.users.iter_mut().find(|u| u.id == id) {
        *slot = updated.clone();
    }
    tracing::info!("User updated: id={}", id);
    Ok(updated)
}

pub async fn delete(store: &RwLock<Store>, id: RecordId) -> Result<(), AppError> {
    let mut store = store.write().await;
    let before = store.users.len();
    store.users.retain(|u| u.id != id);
    if store.users.len() == before {
        return Err(not_found(id));
    }
    tracing::info!("User deleted: id={}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_user::aggregate::{UserRole, UserStatus};

    fn dto(username: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.into(),
            email: email.into(),
            role: UserRole::User,
            status: UserStatus::Active,
        }
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let store = RwLock::new(Store::seeded());
        let count = list_all(&store).await.len();
        let user = create(&store, &FormPolicy::default(), dto("newbie", "newbie@example.com"))
            .await
            .unwrap();
        assert_eq!(user.id, count as i64 + 1);
        assert_eq!(user.last_login, None);
        assert_eq!(list_all(&store).await.len(), count + 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_and_duplicate() {
        let store = RwLock::new(Store::seeded());
        let policy = FormPolicy::default();

        let err = create(&store, &policy, dto("", "a@example.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "사용자명과 이메일은 필수입니다");

        let err = create(&store, &policy, dto("admin", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "이미 존재하는 사용자명입니다");
    }

    #[tokio::test]
    async fn create_applies_configured_policy() {
        let store = RwLock::new(Store::empty());
        let policy = FormPolicy {
            reserved_usernames: vec!["root".into()],
            ..FormPolicy::default()
        };
        let err = create(&store, &policy, dto("root", "root@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_merges_and_keeps_own_username() {
        let store = RwLock::new(Store::seeded());
        let updated = update(
            &store,
            &FormPolicy::default(),
            2,
            UpdateUserDto {
                username: Some("user1".into()),
                role: Some(UserRole::Moderator),
                ..UpdateUserDto::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.role, UserRole::Moderator);
        assert_eq!(updated.email, "user1@example.com");
    }

    #[tokio::test]
    async fn update_rejects_taken_username_and_bad_email() {
        let store = RwLock::new(Store::seeded());
        let policy = FormPolicy::default();
        let taken = UpdateUserDto {
            username: Some("admin".into()),
            ..UpdateUserDto::default()
        };
        assert!(update(&store, &policy, 2, taken).await.is_err());

        let bad_email = UpdateUserDto {
            email: Some("not-an-email".into()),
            ..UpdateUserDto::default()
        };
        let err = update(&store, &policy, 2, bad_email).await.unwrap_err();
        assert_eq!(err.to_string(), "올바른 이메일 형식이 아닙니다");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = RwLock::new(Store::seeded());
        let err = update(&store, &FormPolicy::default(), 999, UpdateUserDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(matches!(delete(&store, 999).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = RwLock::new(Store::seeded());
        delete(&store, 3).await.unwrap();
        assert!(list_all(&store).await.iter().all(|u| u.id != 3));
    }
}
