//! # Validation Configuration
//!
//! Toggles for the checks run by `validate_block`. The individual check
//! operations always run when called directly.
//!
//! ## Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DS_VERIFY_TX_ROOT` | `true` |
//! | `DS_VERIFY_SIGNATURES` | `true` |

use tracing::warn;

/// Environment variable toggling the transaction root check.
pub const ENV_VERIFY_TX_ROOT: &str = "DS_VERIFY_TX_ROOT";

/// Environment variable toggling the sig list check.
pub const ENV_VERIFY_SIGNATURES: &str = "DS_VERIFY_SIGNATURES";

/// Configuration for the validation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Recompute and compare the transaction root (default: true).
    pub verify_transactions_root: bool,

    /// Verify every signature in the sig list (default: true).
    pub verify_signatures: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            verify_transactions_root: true,
            verify_signatures: true,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with both checks enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the transaction root check.
    pub fn with_verify_transactions_root(mut self, enabled: bool) -> Self {
        self.verify_transactions_root = enabled;
        self
    }

    /// Enable or disable the sig list check.
    pub fn with_verify_signatures(mut self, enabled: bool) -> Self {
        self.verify_signatures = enabled;
        self
    }

    /// Load from `DS_VERIFY_TX_ROOT` / `DS_VERIFY_SIGNATURES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset keys keep their default;
    /// unparsable values keep their default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            verify_transactions_root: read_flag(
                &lookup,
                ENV_VERIFY_TX_ROOT,
                defaults.verify_transactions_root,
            ),
            verify_signatures: read_flag(
                &lookup,
                ENV_VERIFY_SIGNATURES,
                defaults.verify_signatures,
            ),
        }
    }
}

fn read_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => {
            warn!(key, value = %raw, default, "Ignoring unparsable validation flag");
            default
        }
    }
}
