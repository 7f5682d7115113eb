//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading payment
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PaymentPolicy;

/// Loads and provides access to a payment policy.
///
/// The `PolicyLoader` reads a YAML policy file, applies field defaults
/// during deserialization, and validates the result once at construction.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policies/default.yaml").unwrap();
/// let policy = loader.policy();
/// println!("weekly offs: {:?}", policy.working_days.weekly_offs);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PaymentPolicy,
}

impl PolicyLoader {
    /// Loads a payment policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policies/default.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file is missing (`PolicyNotFound`)
    /// - The file contains invalid YAML (`PolicyParseError`)
    /// - The parsed policy fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy: PaymentPolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PaymentPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PL-001: missing file returns PolicyNotFound
    #[test]
    fn test_missing_file_returns_not_found() {
        let result = PolicyLoader::load("/nonexistent/policy.yaml");
        assert!(matches!(
            result.unwrap_err(),
            EngineError::PolicyNotFound { .. }
        ));
    }

    /// PL-002: the shipped default policy loads and validates
    #[test]
    fn test_default_policy_loads() {
        let loader = PolicyLoader::load("./config/policies/default.yaml").unwrap();
        let policy = loader.policy();
        assert!(policy.working_days.weekly_offs.contains(&0));
        assert!(policy.validate().is_ok());
    }

    /// PL-003: invalid YAML returns PolicyParseError
    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("payslip_engine_bad_policy.yaml");
        fs::write(&path, "working_days: [not, a, mapping").unwrap();

        let result = PolicyLoader::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::PolicyParseError { .. }
        ));

        let _ = fs::remove_file(&path);
    }
}
