use clap::Parser;
use std::path::PathBuf;

/// Publish a generated SBOM to a Dependency-Track server
#[derive(Parser, Debug)]
#[command(name = "dtrack-publish")]
#[command(version)]
#[command(about = "Publish a generated SBOM to a Dependency-Track server", long_about = None)]
pub struct Args {
    /// Use https instead of http
    #[arg(long, overrides_with = "no_https")]
    pub https: bool,

    /// Use http even when the config file enables https
    #[arg(long, overrides_with = "https")]
    pub no_https: bool,

    /// Dependency-Track server: host[:port], e.g. localhost:8080
    #[arg(long, env = "DTRACK_HOST")]
    pub host: Option<String>,

    /// Path of the upload endpoint on the server [default: api/v1/bom]
    #[arg(long)]
    pub realm: Option<String>,

    /// API key with BOM upload permission
    #[arg(long, env = "DTRACK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// UUID of the Dependency-Track project receiving the BOM
    #[arg(long, env = "DTRACK_PROJECT_UUID")]
    pub project_uuid: Option<String>,

    /// BOM file to upload [default: build/reports/bom.xml]
    #[arg(short, long, value_name = "PATH")]
    pub bom_file: Option<PathBuf>,

    /// Config file (defaults to dtrack-publish.config.yml in the current directory, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Exit with code 1 when the upload fails instead of only logging it
    #[arg(long, overrides_with = "no_fail_on_network_error")]
    pub fail_on_network_error: bool,

    /// Only log a failed upload, even when the config file asks to fail
    #[arg(long, overrides_with = "fail_on_network_error")]
    pub no_fail_on_network_error: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// `--https` / `--no-https`, `None` when neither was given.
    pub fn https_flag(&self) -> Option<bool> {
        flag(self.https, self.no_https)
    }

    /// `--fail-on-network-error` / `--no-fail-on-network-error`.
    pub fn fail_on_network_error_flag(&self) -> Option<bool> {
        flag(self.fail_on_network_error, self.no_fail_on_network_error)
    }
}

fn flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
