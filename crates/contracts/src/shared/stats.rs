//! Dashboard statistics shape

use serde::{Deserialize, Serialize};

/// Design token a statistic is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Primary,
    Success,
    Warning,
    Danger,
    TextDisabled,
}

impl ColorToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            ColorToken::Primary => "var(--color-primary)",
            ColorToken::Success => "var(--color-success)",
            ColorToken::Warning => "var(--color-warning)",
            ColorToken::Danger => "var(--color-danger)",
            ColorToken::TextDisabled => "var(--color-text-disabled)",
        }
    }

    /// Modifier used by the stat tile CSS
    pub fn modifier(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::TextDisabled => "muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: u64,
    pub color: ColorToken,
}

impl StatItem {
    pub fn new(label: &'static str, value: u64, color: ColorToken) -> Self {
        Self { label, value, color }
    }
}

/// Total plus four record-type specific counters
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: u64,
    pub stat1: StatItem,
    pub stat2: StatItem,
    pub stat3: StatItem,
    pub stat4: StatItem,
}

impl Stats {
    pub fn items(&self) -> [&StatItem; 4] {
        [&self.stat1, &self.stat2, &self.stat3, &self.stat4]
    }
}
