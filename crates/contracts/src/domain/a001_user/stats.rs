use super::aggregate::{User, UserRole, UserStatus};
use crate::shared::stats::{ColorToken, StatItem, Stats};

pub fn calculate_user_stats(users: &[User]) -> Stats {
    let count = |pred: &dyn Fn(&User) -> bool| users.iter().filter(|u| pred(u)).count() as u64;

    Stats {
        total: users.len() as u64,
        stat1: StatItem::new(
            "활성",
            count(&|u| u.status == UserStatus::Active),
            ColorToken::Success,
        ),
        stat2: StatItem::new(
            "비활성",
            count(&|u| u.status == UserStatus::Inactive),
            ColorToken::Warning,
        ),
        stat3: StatItem::new(
            "정지",
            count(&|u| u.status == UserStatus::Suspended),
            ColorToken::Danger,
        ),
        stat4: StatItem::new(
            "관리자",
            count(&|u| u.role == UserRole::Admin),
            ColorToken::Primary,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(id: i64, role: UserRole, status: UserStatus) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            role,
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn counts_by_status_and_role() {
        let users = vec![
            user(1, UserRole::Admin, UserStatus::Active),
            user(2, UserRole::User, UserStatus::Active),
            user(3, UserRole::Moderator, UserStatus::Inactive),
            user(4, UserRole::User, UserStatus::Suspended),
            user(5, UserRole::Admin, UserStatus::Suspended),
        ];
        let stats = calculate_user_stats(&users);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.stat1.value, 2);
        assert_eq!(stats.stat2.value, 1);
        assert_eq!(stats.stat3.value, 2);
        assert_eq!(stats.stat4.value, 2);
        assert_eq!(stats.stat4.label, "관리자");
        assert_eq!(stats.stat3.color, ColorToken::Danger);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let stats = calculate_user_stats(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.items().iter().all(|s| s.value == 0));
    }
}
