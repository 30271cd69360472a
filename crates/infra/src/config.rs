// crates/infra/src/config.rs
//! Loading [`AnalyzerConfig`] from disk.

use std::{fs, path::Path};

use log::debug;
use statfy_domain::AnalyzerConfig;
use statfy_shared_kernel::{InfrastructureError, Result};

/// Reads and validates a configuration file.
///
/// `.yaml`/`.yml` files are parsed as YAML when the `yaml` feature is on;
/// everything else is parsed as JSON. Missing keys take their defaults.
///
/// # Errors
///
/// Read, parse and validation failures are reported as
/// [`InfrastructureError::ConfigLoad`] naming the file.
pub fn load_config(path: &Path) -> Result<AnalyzerConfig> {
    let contents = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
    let config = parse(path, &contents)?;
    config.validate().map_err(|e| config_error(path, e))?;
    debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

fn parse(path: &Path, contents: &str) -> Result<AnalyzerConfig> {
    if is_yaml(path) {
        return parse_yaml(path, contents);
    }
    serde_json::from_str(contents).map_err(|e| config_error(path, e))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Path, contents: &str) -> Result<AnalyzerConfig> {
    serde_yaml::from_str(contents).map_err(|e| config_error(path, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Path, _contents: &str) -> Result<AnalyzerConfig> {
    Err(config_error(path, "YAML support is disabled (enable the `yaml` feature)"))
}

fn config_error(path: &Path, details: impl ToString) -> statfy_shared_kernel::StatfyError {
    InfrastructureError::ConfigLoad { path: path.to_path_buf(), details: details.to_string() }.into()
}
