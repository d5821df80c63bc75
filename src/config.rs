//! Analyzer configuration.
//!
//! Both knobs that change classification outcomes live here: the sample plan
//! (which depends on the landmark topology) and the undertone rule. Every
//! field has a default, so a partial or empty JSON object is valid:
//!
//! ```
//! use skin_tone::{AnalyzerConfig, UndertoneRule};
//!
//! let config: AnalyzerConfig =
//!     serde_json::from_str(r#"{"undertone_rule": "channel-dominance"}"#)?;
//! assert_eq!(config.undertone_rule, UndertoneRule::ChannelDominance);
//! assert_eq!(config.plan.name, "ibug-68");
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::SamplePlan;
use crate::tone::UndertoneRule;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Where to sample skin, per landmark topology.
    pub plan: SamplePlan,

    /// How the undertone is derived from the average skin color.
    pub undertone_rule: UndertoneRule,
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.plan.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
