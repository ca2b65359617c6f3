//! Planner configuration
//!
//! Loaded from an optional TOML file; command-line flags override file values.
//!
//! ```toml
//! daily_limit_minutes = 360
//! overflow_policy = "report"   # or "last_day"
//! unique_names = true
//! ```

use crate::scheduler::OverflowPolicy;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Daily study budget used when neither the file nor the caller sets one (6h)
pub const DEFAULT_DAILY_LIMIT_MINUTES: u32 = 360;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Budget applied when a plan request does not name one
    pub daily_limit_minutes: u32,
    /// Handling of tasks that do not fit in the date range
    pub overflow_policy: OverflowPolicy,
    /// Reject sibling names that differ only in case; `false` enables lenient mode
    pub unique_names: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_limit_minutes: DEFAULT_DAILY_LIMIT_MINUTES,
            overflow_policy: OverflowPolicy::Report,
            unique_names: true,
        }
    }
}

impl PlannerConfig {
    /// Read and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: PlannerConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.daily_limit_minutes > 0,
            "daily_limit_minutes must be a positive number of minutes"
        );
        Ok(())
    }
}
