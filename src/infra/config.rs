//! Configuration management infrastructure.
//!
//! Settings controlling context construction: arena sizing and the default
//! digest algorithm. Persisted as TOML and validated before use.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::crypto::DigestAlgorithm;
use crate::infra::arena::{DEFAULT_CAPACITY, DEFAULT_CHUNK_SIZE};
use crate::infra::error::{CmsError, CmsResult};

/// Context construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Arena chunk size in bytes
    pub arena_chunk_size: usize,

    /// Total arena capacity cap in bytes
    pub arena_capacity: usize,

    /// Default digest algorithm
    pub digest_algorithm: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            arena_chunk_size: DEFAULT_CHUNK_SIZE,
            arena_capacity: DEFAULT_CAPACITY,
            digest_algorithm: "sha256".to_string(),
        }
    }
}

impl CmsConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CmsResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            CmsError::Configuration(format!(
                "failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| CmsError::Configuration(format!("failed to parse config file: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CmsResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CmsError::Configuration(format!("failed to serialize config: {e}")))?;

        fs::write(&path, content).map_err(|e| {
            CmsError::Configuration(format!(
                "failed to write config file {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CmsResult<()> {
        if self.arena_chunk_size == 0 {
            return Err(CmsError::Configuration(
                "arena chunk size must be greater than 0".to_string(),
            ));
        }

        if self.arena_capacity < self.arena_chunk_size {
            return Err(CmsError::Configuration(
                "arena capacity must hold at least one chunk".to_string(),
            ));
        }

        self.digest_algorithm()?;
        Ok(())
    }

    /// Parsed form of the configured digest algorithm.
    pub fn digest_algorithm(&self) -> CmsResult<DigestAlgorithm> {
        self.digest_algorithm.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_configuration() {
        let config = CmsConfig::default();
        assert_eq!(config.arena_chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(
            config.digest_algorithm().unwrap(),
            DigestAlgorithm::Sha256
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cms.toml");

        let config = CmsConfig {
            arena_chunk_size: 512,
            arena_capacity: 4096,
            digest_algorithm: "sha384".to_string(),
        };
        config.save(&config_path).unwrap();

        let loaded = CmsConfig::load(&config_path).unwrap();
        assert_eq!(loaded.arena_chunk_size, 512);
        assert_eq!(loaded.arena_capacity, 4096);
        assert_eq!(loaded.digest_algorithm().unwrap(), DigestAlgorithm::Sha384);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = CmsConfig::default();
        config.arena_chunk_size = 0;
        assert!(config.validate().is_err());

        let mut config = CmsConfig::default();
        config.arena_capacity = config.arena_chunk_size - 1;
        assert!(config.validate().is_err());

        let mut config = CmsConfig::default();
        config.digest_algorithm = "md5".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let err = CmsConfig::load("/nonexistent/cms.toml").unwrap_err();
        assert!(matches!(err, CmsError::Configuration(_)));
    }
}
