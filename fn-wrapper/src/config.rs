//! Wrapper configuration types
//!
//! The wrapper only needs the two lines it prints around the wrapped call.
//! Both default to the fixed messages in [`crate::types`].

use crate::types::{Result, WrapError, AFTER_MESSAGE, BEFORE_MESSAGE};
use serde::{Deserialize, Serialize};

/// Messages emitted around each invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperConfig {
    /// Line emitted before the wrapped callable runs
    #[serde(default = "default_before")]
    pub before: String,

    /// Line emitted after the wrapped callable returns successfully
    #[serde(default = "default_after")]
    pub after: String,
}

fn default_before() -> String {
    BEFORE_MESSAGE.to_string()
}

fn default_after() -> String {
    AFTER_MESSAGE.to_string()
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            before: default_before(),
            after: default_after(),
        }
    }
}

impl WrapperConfig {
    /// Create a configuration with the default messages
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the before-message
    pub fn with_before(mut self, message: impl Into<String>) -> Self {
        self.before = message.into();
        self
    }

    /// Builder method: set the after-message
    pub fn with_after(mut self, message: impl Into<String>) -> Self {
        self.after = message.into();
        self
    }

    /// Check that each message fits on a single output line
    pub fn validate(&self) -> Result<()> {
        for (name, message) in [("before", &self.before), ("after", &self.after)] {
            if message.contains(['\n', '\r']) {
                return Err(WrapError::InvalidConfig(format!(
                    "{name} message must be a single line"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_messages() {
        let config = WrapperConfig::new();
        assert_eq!(config.before, BEFORE_MESSAGE);
        assert_eq!(config.after, AFTER_MESSAGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = WrapperConfig::new()
            .with_before("enter")
            .with_after("leave");

        assert_eq!(config.before, "enter");
        assert_eq!(config.after, "leave");
    }

    #[test]
    fn test_rejects_multiline_message() {
        let err = WrapperConfig::new()
            .with_after("first\nsecond")
            .validate()
            .unwrap_err();

        assert!(matches!(err, WrapError::InvalidConfig(msg) if msg.contains("after")));
    }
}
