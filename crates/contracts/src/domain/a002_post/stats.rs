use super::aggregate::{Post, PostStatus};
use crate::shared::stats::{ColorToken, StatItem, Stats};

pub fn calculate_post_stats(posts: &[Post]) -> Stats {
    let with_status =
        |status: PostStatus| posts.iter().filter(|p| p.status == status).count() as u64;

    Stats {
        total: posts.len() as u64,
        stat1: StatItem::new("게시됨", with_status(PostStatus::Published), ColorToken::Success),
        stat2: StatItem::new("임시저장", with_status(PostStatus::Draft), ColorToken::Warning),
        stat3: StatItem::new(
            "보관됨",
            with_status(PostStatus::Archived),
            ColorToken::TextDisabled,
        ),
        stat4: StatItem::new(
            "총 조회수",
            posts.iter().map(|p| p.views).sum(),
            ColorToken::Primary,
        ),
    }
}
