use contracts::shared::validation::FormPolicy;
use once_cell::sync::OnceCell;
use serde::Deserialize;

static VALIDATION_POLICY: OnceCell<FormPolicy> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    /// Business rules enforced on create and update
    #[serde(default)]
    pub validation: FormPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[seed]
enabled = true

[validation]
reserved_usernames = []
banned_title_words = []
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Install the policy once at startup; later calls are ignored
pub fn set_validation_policy(policy: FormPolicy) {
    if VALIDATION_POLICY.set(policy).is_err() {
        tracing::warn!("Validation policy already set, keeping the first one");
    }
}

/// Policy in effect, all rules off until configured
pub fn validation_policy() -> &'static FormPolicy {
    VALIDATION_POLICY.get_or_init(FormPolicy::default)
}
