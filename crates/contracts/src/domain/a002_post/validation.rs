use super::aggregate::PostFormData;
use crate::shared::validation::{present, FormPolicy, ValidationResult, ValidationRules};

pub const TITLE_RULES: ValidationRules = ValidationRules::length(
    5,
    100,
    "제목은 5자 이상이어야 합니다",
    "제목은 100자 이하여야 합니다",
);

pub fn validate_post_form(data: &PostFormData, policy: &FormPolicy) -> ValidationResult {
    check_post_form(data, policy).into()
}

fn check_post_form(data: &PostFormData, policy: &FormPolicy) -> Result<(), String> {
    let (Some(title), Some(_), Some(_)) = (
        present(&data.title),
        present(&data.author),
        present(&data.category),
    ) else {
        return Err("제목, 작성자, 카테고리는 필수입니다".to_string());
    };

    TITLE_RULES.validate_length(title)?;
    policy.check_title(title)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, author: &str, category: &str) -> PostFormData {
        PostFormData {
            title: Some(title.into()),
            author: Some(author.into()),
            category: Some(category.into()),
            ..Default::default()
        }
    }

    #[test]
    fn required_fields() {
        let r = validate_post_form(&form("Valid title", "", "design"), &FormPolicy::default());
        assert_eq!(r.error.as_deref(), Some("제목, 작성자, 카테고리는 필수입니다"));
        let r = validate_post_form(&PostFormData::default(), &FormPolicy::default());
        assert!(!r.is_valid);
    }

    #[test]
    fn title_bounds() {
        let policy = FormPolicy::default();
        assert_eq!(
            validate_post_form(&form("Tiny", "kim", "design"), &policy).error.as_deref(),
            Some("제목은 5자 이상이어야 합니다")
        );
        assert_eq!(
            validate_post_form(&form(&"x".repeat(101), "kim", "design"), &policy)
                .error
                .as_deref(),
            Some("제목은 100자 이하여야 합니다")
        );
        assert!(validate_post_form(&form("다섯글자다", "kim", "design"), &policy).is_valid);
    }

    #[test]
    fn banned_words_checked_last() {
        let policy = FormPolicy {
            banned_title_words: vec!["casino".into()],
            ..Default::default()
        };
        assert_eq!(
            validate_post_form(&form("Casino", "kim", "design"), &policy).error.as_deref(),
            Some("제목에 금지어가 포함되어 있습니다")
        );
        // too short wins over banned word
        assert_eq!(
            validate_post_form(&form("spam", "kim", "design"), &FormPolicy {
                banned_title_words: vec!["spam".into()],
                ..Default::default()
            })
            .error
            .as_deref(),
            Some("제목은 5자 이상이어야 합니다")
        );
    }
}
