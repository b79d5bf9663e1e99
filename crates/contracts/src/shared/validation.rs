//! Building blocks shared by the form validators

use serde::{Deserialize, Serialize};

/// Outcome of validating a form draft. Only the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(e) if !self.is_valid => Err(e),
            _ => Ok(()),
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e),
        }
    }
}

/// Length bounds of a text field, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub too_short: Option<&'static str>,
    pub too_long: Option<&'static str>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            min_length: None,
            max_length: None,
            too_short: None,
            too_long: None,
        }
    }

    pub const fn length(
        min: usize,
        max: usize,
        too_short: &'static str,
        too_long: &'static str,
    ) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            too_short: Some(too_short),
            too_long: Some(too_long),
        }
    }

    pub fn validate_length(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(self
                    .too_short
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}자 이상이어야 합니다", min)));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(self
                    .too_long
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}자 이하여야 합니다", max)));
            }
        }

        Ok(())
    }
}

/// A draft field counts as missing when absent or empty
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Optional business rules layered on top of the format checks.
/// Every rule is disabled by default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormPolicy {
    #[serde(default)]
    pub reserved_usernames: Vec<String>,
    #[serde(default)]
    pub allowed_email_domain: Option<String>,
    #[serde(default)]
    pub banned_title_words: Vec<String>,
}

impl FormPolicy {
    pub fn check_username(&self, username: &str) -> Result<(), String> {
        let reserved = self
            .reserved_usernames
            .iter()
            .any(|r| r.eq_ignore_ascii_case(username));
        if reserved {
            return Err("사용할 수 없는 사용자명입니다".to_string());
        }
        Ok(())
    }

    pub fn check_email(&self, email: &str) -> Result<(), String> {
        let Some(domain) = self.allowed_email_domain.as_deref() else {
            return Ok(());
        };
        let domain = domain.trim_start_matches('@');
        let suffix = format!("@{}", domain.to_lowercase());
        if !email.to_lowercase().ends_with(&suffix) {
            return Err(format!("{} 도메인 이메일만 사용할 수 있습니다", domain));
        }
        Ok(())
    }

    pub fn check_title(&self, title: &str) -> Result<(), String> {
        let lower = title.to_lowercase();
        let banned = self
            .banned_title_words
            .iter()
            .filter(|w| !w.is_empty())
            .any(|w| lower.contains(&w.to_lowercase()));
        if banned {
            return Err("제목에 금지어가 포함되어 있습니다".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = ValidationRules::length(3, 5, "short", "long");
        assert!(rules.validate_length("가나다").is_ok());
        assert_eq!(rules.validate_length("가나").unwrap_err(), "short");
        assert_eq!(rules.validate_length("가나다라마바").unwrap_err(), "long");
    }

    #[test]
    fn no_rules_accept_anything() {
        assert!(ValidationRules::none().validate_length("").is_ok());
    }

    #[test]
    fn empty_string_is_missing() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some("a".into())), Some("a"));
    }

    #[test]
    fn default_policy_allows_everything() {
        let policy = FormPolicy::default();
        assert!(policy.check_username("admin").is_ok());
        assert!(policy.check_email("a@b.c").is_ok());
        assert!(policy.check_title("spam spam").is_ok());
    }

    #[test]
    fn policy_rules_are_case_insensitive() {
        let policy = FormPolicy {
            reserved_usernames: vec!["root".into()],
            allowed_email_domain: Some("@Company.com".into()),
            banned_title_words: vec!["SPAM".into()],
        };
        assert!(policy.check_username("ROOT").is_err());
        assert!(policy.check_email("kim@company.COM").is_ok());
        assert_eq!(
            policy.check_email("kim@gmail.com").unwrap_err(),
            "Company.com 도메인 이메일만 사용할 수 있습니다"
        );
        assert!(policy.check_title("Cheap spam offer").is_err());
    }

    #[test]
    fn result_conversion_keeps_first_message() {
        let r: ValidationResult = Err::<(), _>("bad".to_string()).into();
        assert!(!r.is_valid);
        assert_eq!(r.into_result().unwrap_err(), "bad");
    }
}
