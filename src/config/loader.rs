//! Configuration file loader.

use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::types::BenchConfig;

/// TOML configuration loader.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new configuration loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// the TOML is malformed.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str(&content)
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn load_str(&self, content: &str) -> ConfigResult<BenchConfig> {
        let config: BenchConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration or return default if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default<P: AsRef<Path>>(&self, path: P) -> ConfigResult<BenchConfig> {
        let path = path.as_ref();
        if path.exists() {
            self.load(path)
        } else {
            Ok(BenchConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_str_overrides_defaults() {
        let config = ConfigLoader::new()
            .load_str("[bench]\noperations = 500\n\n[report]\njson = true\n")
            .unwrap();
        assert_eq!(config.bench.operations, 500);
        assert!(config.report.json);
    }

    #[test]
    fn test_load_str_empty_is_default() {
        let config = ConfigLoader::new().load_str("").unwrap();
        assert_eq!(config.bench.operations, 10_000);
    }

    #[test]
    fn test_load_str_malformed() {
        let result = ConfigLoader::new().load_str("[bench\noperations = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::new().load("/nonexistent/seqbench.toml");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::new()
            .load_or_default("/nonexistent/seqbench.toml")
            .unwrap();
        assert_eq!(config.bench.operations, 10_000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[bench]\noperations = 42\n").unwrap();

        let config = ConfigLoader::new().load(file.path()).unwrap();
        assert_eq!(config.bench.operations, 42);
    }
}
