use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::CategoryKey;
use crate::error::{HeraldError, Result};

/// Represents the complete configuration for herald.
///
/// Contains the repository to compare, hosting API settings, and the ordered
/// release-note sections.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

/// Which repository to compare and which revisions to default to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// `owner/name` on the hosting service; detected from the git remote when unset
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_to")]
    pub default_to: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_to() -> String {
    "master".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            slug: None,
            remote: default_remote(),
            default_to: default_to(),
        }
    }
}

/// Hosting API connection settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("herald/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// One release-note section.
///
/// `show_when_empty` decides whether the section is printed with a
/// placeholder or left out when no commit was filed under it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CategoryConfig {
    pub key: CategoryKey,
    pub title: String,

    #[serde(default = "default_show_when_empty")]
    pub show_when_empty: bool,
}

fn default_show_when_empty() -> bool {
    true
}

impl CategoryConfig {
    pub fn new(key: CategoryKey, title: impl Into<String>) -> Self {
        CategoryConfig {
            key,
            title: title.into(),
            show_when_empty: true,
        }
    }
}

/// Returns the default release-note sections in presentation order.
fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(CategoryKey::Security, "SECURITY"),
        CategoryConfig::new(CategoryKey::Breaking, "BREAKING"),
        CategoryConfig::new(CategoryKey::Feature, "FEATURE / ENHANCEMENT"),
        CategoryConfig::new(CategoryKey::Vpat, "VPAT"),
        CategoryConfig::new(CategoryKey::Bugfix, "BUGFIX"),
        CategoryConfig::new(CategoryKey::Refactor, "REFACTOR"),
        CategoryConfig::new(
            CategoryKey::Dependency,
            "SUPPORTING REPOSITORIES & VENDOR PACKAGES",
        ),
        CategoryConfig::new(CategoryKey::Testing, "TESTING / BUILD"),
        CategoryConfig::new(CategoryKey::Documentation, "DOCUMENTATION"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: RepositoryConfig::default(),
            api: ApiConfig::default(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Section keys in presentation order.
    pub fn category_order(&self) -> Vec<CategoryKey> {
        self.categories.iter().map(|c| c.key).collect()
    }

    /// Checks that every section key is declared exactly once.
    pub fn validate(&self) -> Result<()> {
        for key in CategoryKey::ALL {
            match self.categories.iter().filter(|c| c.key == key).count() {
                1 => {}
                0 => {
                    return Err(HeraldError::config(format!(
                        "category '{}' is not declared",
                        key
                    )))
                }
                n => {
                    return Err(HeraldError::config(format!(
                        "category '{}' is declared {} times",
                        key, n
                    )))
                }
            }
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `herald.toml` in current directory
/// 3. `.herald.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or fails validation
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./herald.toml").exists() {
        fs::read_to_string("./herald.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".herald.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| HeraldError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
