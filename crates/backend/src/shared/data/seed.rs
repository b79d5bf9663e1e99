use chrono::NaiveDate;
use contracts::domain::a001_user::aggregate::{User, UserRole, UserStatus};
use contracts::domain::a002_post::aggregate::{Post, PostStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn seed_users() -> Vec<User> {
    let rows = [
        ("admin", "admin@example.com", UserRole::Admin, UserStatus::Active, date(2024, 1, 1), Some((2024, 1, 20, 10, 0))),
        ("user1", "user1@example.com", UserRole::User, UserStatus::Active, date(2024, 1, 2), Some((2024, 1, 19, 14, 30))),
        ("user2", "user2@example.com", UserRole::Moderator, UserStatus::Active, date(2024, 1, 3), Some((2024, 1, 18, 9, 15))),
        ("user3", "user3@example.com", UserRole::User, UserStatus::Inactive, date(2024, 1, 4), None),
        ("user4", "user4@example.com", UserRole::User, UserStatus::Suspended, date(2024, 1, 5), Some((2024, 1, 10, 16, 45))),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (username, email, role, status, created_at, login))| User {
            id: i as i64 + 1,
            username: username.to_string(),
            email: email.to_string(),
            role,
            status,
            created_at,
            last_login: login.and_then(|(y, m, d, h, min)| date(y, m, d).and_hms_opt(h, min, 0)),
        })
        .collect()
}

pub fn seed_posts() -> Vec<Post> {
    let rows = [
        ("디자인 시스템 구축 가이드", "디자인 토큰과 컴포넌트 설계 원칙", "kim", "design", PostStatus::Published, 1250, date(2024, 1, 10)),
        ("React 성능 최적화 팁", "메모이제이션과 렌더링 최소화", "lee", "development", PostStatus::Published, 980, date(2024, 1, 11)),
        ("웹 접근성 체크리스트", "스크린 리더와 키보드 탐색 점검", "park", "accessibility", PostStatus::Draft, 0, date(2024, 1, 12)),
        ("TypeScript 타입 설계", "유니온 타입과 제네릭 활용", "kim", "development", PostStatus::Archived, 430, date(2024, 1, 13)),
        ("컬러 팔레트 정리하기", "브랜드 색상과 시맨틱 컬러", "choi", "design", PostStatus::Published, 760, date(2024, 1, 14)),
        ("폼 컴포넌트 리팩토링", "검증 로직 분리와 재사용", "lee", "development", PostStatus::Draft, 15, date(2024, 1, 15)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (title, content, author, category, status, views, created_at))| Post {
            id: i as i64 + 1,
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            status,
            views,
            created_at,
        })
        .collect()
}
