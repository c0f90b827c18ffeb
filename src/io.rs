//! Loading and saving benchmark configuration files.

use std::fs;
use std::path::Path;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};

/// Save a benchmark configuration to a JSON file.
///
/// # Errors
/// Returns an error if serialization or file writing fails
pub fn save_bench_config<P: AsRef<Path>>(config: &BenchConfig, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| BenchError::Io(format!("Failed to serialize config: {e}")))?;

    fs::write(path, json)
        .map_err(|e| BenchError::Io(format!("Failed to write config file: {e}")))?;

    Ok(())
}

/// Load and validate a benchmark configuration from a JSON file.
///
/// # Errors
/// Returns an error if file reading, deserialization or validation fails
pub fn load_bench_config<P: AsRef<Path>>(path: P) -> Result<BenchConfig> {
    let json = fs::read_to_string(path)
        .map_err(|e| BenchError::Io(format!("Failed to read config file: {e}")))?;

    let config: BenchConfig = serde_json::from_str(&json)
        .map_err(|e| BenchError::Io(format!("Failed to parse config: {e}")))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("bench.json");

        let config = BenchConfig {
            openfst_bench_dir: PathBuf::from("/opt/openfst/benches"),
            warmup_runs: 1,
            iterations: 5,
            ..Default::default()
        };

        save_bench_config(&config, &config_path)?;
        assert!(config_path.exists());

        let loaded = load_bench_config(&config_path)?;
        assert_eq!(config, loaded);

        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("bench.json");
        fs::write(
            &config_path,
            r#"{ "openfst_bench_dir": "benches", "iterations": 0 }"#,
        )?;

        let result = load_bench_config(&config_path);
        assert!(matches!(result, Err(BenchError::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_bench_config("/nonexistent/bench.json");
        assert!(matches!(result, Err(BenchError::Io(_))));
    }
}
