//! User form validation: required fields, then format, then policy

use once_cell::sync::Lazy;
use regex::Regex;

use super::aggregate::UserFormData;
use crate::shared::validation::{present, FormPolicy, ValidationResult, ValidationRules};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

pub const USERNAME_RULES: ValidationRules = ValidationRules::length(
    3,
    20,
    "사용자명은 3자 이상이어야 합니다",
    "사용자명은 20자 이하여야 합니다",
);

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_user_form(data: &UserFormData, policy: &FormPolicy) -> ValidationResult {
    check_user_form(data, policy).into()
}

fn check_user_form(data: &UserFormData, policy: &FormPolicy) -> Result<(), String> {
    let (Some(username), Some(email)) = (present(&data.username), present(&data.email)) else {
        return Err("사용자명과 이메일은 필수입니다".to_string());
    };

    if !is_valid_email(email) {
        return Err("올바른 이메일 형식이 아닙니다".to_string());
    }

    USERNAME_RULES.validate_length(username)?;

    if !USERNAME_RE.is_match(username) {
        return Err("영문, 숫자, 언더스코어만 사용 가능합니다".to_string());
    }

    policy.check_username(username)?;
    policy.check_email(email)?;

    Ok(())
}
