//! Per-mapper resolution configuration.
//!
//! Configuration is passed explicitly into registry construction rather
//! than read from ambient state, so independent resolution passes in the
//! same run cannot interfere.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Severity;

/// Configuration for one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Discover user mapping methods that carry no explicit marker.
    ///
    /// When disabled, only explicitly marked methods participate in
    /// automatic resolution; unmarked methods stay directly callable by
    /// explicit reference.
    pub auto_user_mappings: bool,

    /// Severity of the diagnostic emitted when several eligible candidates
    /// compete for one type pair without an explicit default.
    pub implicit_conflict_severity: Severity,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            auto_user_mappings: true,
            implicit_conflict_severity: Severity::Note,
        }
    }
}

impl ResolutionConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
