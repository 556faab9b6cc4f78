//! Flag uniqueness registry.
//!
//! Restates the process-wide uniqueness constraint as an explicit registry
//! owned by whatever constructs parameter specs, so tests can reset it by
//! creating a fresh one. The registry is append-only; collisions fail the
//! spec construction eagerly, never at parse time.

use std::collections::HashSet;

use crate::error::ConfigError;

#[derive(Debug, Default)]
pub struct FlagRegistry {
    used: HashSet<String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a short flag for the named parameter.
    pub fn claim_short(&mut self, flag: char, name: &str) -> Result<(), ConfigError> {
        if !self.used.insert(format!("-{}", flag)) {
            return Err(ConfigError::DuplicateShortFlag {
                flag,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Claim a long flag for the named parameter.
    pub fn claim_long(&mut self, flag: &str, name: &str) -> Result<(), ConfigError> {
        if !self.used.insert(format!("--{}", flag)) {
            return Err(ConfigError::DuplicateLongFlag {
                flag: flag.to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn is_used(&self, formatted: &str) -> bool {
        self.used.contains(formatted)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
