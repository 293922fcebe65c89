//! Configuration file support for dtrack-publish.
//!
//! Provides YAML-based configuration through `dtrack-publish.config.yml`
//! files and layers it under the command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use dtrack_bom_publish::adapters::outbound::network::DependencyTrackClient;
use dtrack_bom_publish::publishing::domain::PublishConfig;
use dtrack_bom_publish::shared::Result;

const CONFIG_FILENAME: &str = "dtrack-publish.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub use_https: Option<bool>,
    pub host: Option<String>,
    pub realm: Option<String>,
    pub api_key: Option<String>,
    pub project_uuid: Option<String>,
    pub bom_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub fail_on_network_error: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Everything the CLI needs for one run.
#[derive(Debug)]
pub struct Settings {
    pub publish: PublishConfig,
    pub timeout: Duration,
    pub fail_on_network_error: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merge command-line arguments over the config file over the defaults.
pub fn resolve(args: &Args, file: Option<ConfigFile>) -> Settings {
    let file = file.unwrap_or_default();
    let mut builder = PublishConfig::builder()
        .use_https(args.https_flag().or(file.use_https).unwrap_or(false));

    if let Some(host) = args.host.clone().or(file.host) {
        builder = builder.host(host);
    }
    if let Some(realm) = args.realm.clone().or(file.realm) {
        builder = builder.realm(realm);
    }
    if let Some(api_key) = args.api_key.clone().or(file.api_key) {
        builder = builder.api_key(api_key);
    }
    if let Some(project_uuid) = args.project_uuid.clone().or(file.project_uuid) {
        builder = builder.project_uuid(project_uuid);
    }
    if let Some(bom_file) = args.bom_file.clone().or(file.bom_file) {
        builder = builder.bom_file(bom_file);
    }

    let timeout_secs = args
        .timeout
        .or(file.timeout_secs)
        .unwrap_or(DependencyTrackClient::DEFAULT_TIMEOUT_SECONDS);

    Settings {
        publish: builder.build(),
        timeout: Duration::from_secs(timeout_secs),
        fail_on_network_error: args
            .fail_on_network_error_flag()
            .or(file.fail_on_network_error)
            .unwrap_or(false),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref realm) = config.realm {
        if realm.trim().is_empty() {
            bail!(
                "Invalid config: realm must not be empty.\n\n\
                 💡 Hint: Remove the 'realm' field to use the default \"api/v1/bom\"."
            );
        }
    }
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the 'timeout_secs' field to use the default of 30 seconds."
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["dtrack-publish"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
use_https: true
host: dtrack.example.com
realm: /api/v1/bom/
api_key: odt_from_file
project_uuid: 3f5e2a7c-6c1d-4b8e-9f0a-1b2c3d4e5f60
bom_file: target/bom.json
timeout_secs: 10
fail_on_network_error: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.use_https, Some(true));
        assert_eq!(config.host.as_deref(), Some("dtrack.example.com"));
        assert_eq!(config.realm.as_deref(), Some("/api/v1/bom/"));
        assert_eq!(config.api_key.as_deref(), Some("odt_from_file"));
        assert_eq!(config.bom_file, Some(PathBuf::from("target/bom.json")));
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.fail_on_network_error, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "host: localhost:8081\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.host.as_deref(), Some("localhost:8081"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_blank_realm_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "realm: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("realm must not be empty"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
host: localhost
useInternalCycloneDx: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("useInternalCycloneDx"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = resolve(&args(&["--host", "h", "--api-key", "k"]), None);

        assert!(!settings.publish.use_https());
        assert_eq!(settings.publish.realm(), "api/v1/bom");
        assert_eq!(settings.publish.bom_file(), Path::new("build/reports/bom.xml"));
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(!settings.fail_on_network_error);
    }

    #[test]
    fn test_resolve_args_override_file() {
        let file = ConfigFile {
            host: Some("file-host".to_string()),
            realm: Some("file/realm".to_string()),
            api_key: Some("file-key".to_string()),
            project_uuid: Some("file-project".to_string()),
            timeout_secs: Some(12),
            ..Default::default()
        };

        let settings = resolve(
            &args(&[
                "--host",
                "cli-host",
                "--api-key",
                "cli-key",
                "--project-uuid",
                "cli-project",
                "--timeout",
                "3",
            ]),
            Some(file),
        );

        assert_eq!(settings.publish.host(), "cli-host");
        assert_eq!(settings.publish.realm(), "file/realm");
        assert_eq!(settings.publish.api_key(), "cli-key");
        assert_eq!(settings.publish.project_uuid(), "cli-project");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_resolve_flags_from_file() {
        let file = ConfigFile {
            use_https: Some(true),
            fail_on_network_error: Some(true),
            bom_file: Some(PathBuf::from("out/bom.json")),
            ..Default::default()
        };

        let settings = resolve(&args(&["--host", "h", "--api-key", "k"]), Some(file));

        assert!(settings.publish.use_https());
        assert!(settings.fail_on_network_error);
        assert_eq!(settings.publish.bom_file(), Path::new("out/bom.json"));
    }

    #[test]
    fn test_resolve_negated_flags_override_file() {
        let file = ConfigFile {
            use_https: Some(true),
            fail_on_network_error: Some(true),
            ..Default::default()
        };

        let settings = resolve(
            &args(&[
                "--host",
                "h",
                "--api-key",
                "k",
                "--no-https",
                "--no-fail-on-network-error",
            ]),
            Some(file),
        );

        assert!(!settings.publish.use_https());
        assert!(!settings.fail_on_network_error);
    }

    #[test]
    fn test_resolve_https_flag_over_file_false() {
        let file = ConfigFile {
            use_https: Some(false),
            ..Default::default()
        };

        let settings = resolve(&args(&["--host", "h", "--https"]), Some(file));

        assert!(settings.publish.use_https());
    }
}
