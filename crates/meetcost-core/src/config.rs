use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MeetcostError;
use crate::types::{default_role_rates, DateRange, RoleRate};

/// Top-level configuration loaded from `.meetcost.toml`.
///
/// Supports layered resolution: `--config` flag > local `.meetcost.toml` > defaults.
/// Role rates and settings saved through the dashboard live in the store;
/// this file only decides where the store lives and what the fallbacks are.
///
/// # Examples
///
/// ```
/// use meetcost_core::MeetcostConfig;
///
/// let config = MeetcostConfig::default();
/// assert_eq!(config.dashboard.list_limit, 50);
/// assert_eq!(config.fallback_rates().len(), 7);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetcostConfig {
    /// Where the key-value store lives.
    #[serde(default)]
    pub store: StoreConfig,
    /// Defaults for dashboard operations.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Rate table used until one is saved. Empty means the built-in seven roles.
    #[serde(default)]
    pub default_rates: Vec<RoleRate>,
}

impl MeetcostConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Io`] if the file cannot be read, or
    /// [`MeetcostError::Toml`] if the content is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, MeetcostError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Toml`] if parsing fails, or
    /// [`MeetcostError::Config`] if a configured default rate is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use meetcost_core::MeetcostConfig;
    ///
    /// let toml = r#"
    /// [dashboard]
    /// list_limit = 20
    /// "#;
    /// let config = MeetcostConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.dashboard.list_limit, 20);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, MeetcostError> {
        let config: Self = toml::from_str(content)?;
        if let Some(bad) = config.default_rates.iter().find(|r| r.hourly_rate < 0.0) {
            return Err(MeetcostError::Config(format!(
                "default rate for '{}' is negative",
                bad.role_id
            )));
        }
        Ok(config)
    }

    /// The rate table to use when the store holds none.
    pub fn fallback_rates(&self) -> Vec<RoleRate> {
        if self.default_rates.is_empty() {
            default_role_rates()
        } else {
            self.default_rates.clone()
        }
    }
}

/// Key-value store location.
///
/// # Examples
///
/// ```
/// use meetcost_core::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert!(config.path.ends_with("meetcost.db"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite file backing the store (default: `.meetcost/meetcost.db`).
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".meetcost/meetcost.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Defaults applied when a dashboard operation omits a parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Meetings returned by `list` (default: 50).
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    /// Range for stats and summaries (default: last-month).
    #[serde(default)]
    pub date_range: DateRange,
}

fn default_list_limit() -> usize {
    50
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            date_range: DateRange::default(),
        }
    }
}
