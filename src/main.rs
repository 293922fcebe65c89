mod cli;
mod config;

use cli::Args;
use dtrack_bom_publish::adapters::outbound::console::{TracingLogger, LOG_TARGET};
use dtrack_bom_publish::adapters::outbound::filesystem::FileSystemReader;
use dtrack_bom_publish::adapters::outbound::network::DependencyTrackClient;
use dtrack_bom_publish::application::dto::PublishOutcome;
use dtrack_bom_publish::application::use_cases::PublishBomUseCase;
use dtrack_bom_publish::ports::inbound::PublishBomPort;
use dtrack_bom_publish::shared::error::ExitCode;
use dtrack_bom_publish::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::path::Path;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "DTRACK_PUBLISH_LOG";

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!(
                "\n{}\n",
                "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
            );
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Layer CLI arguments over the config file
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = config::resolve(&args, config_file);
    tracing::debug!(target: LOG_TARGET, "Resolved {}", settings.publish);

    // Create adapters (Dependency Injection)
    let bom_reader = FileSystemReader::new();
    let uploader = DependencyTrackClient::with_timeout(settings.timeout)?;
    let logger = TracingLogger::new();

    let use_case = PublishBomUseCase::new(bom_reader, uploader, logger);

    let outcome = use_case.publish(&settings.publish)?;

    Ok(match outcome {
        PublishOutcome::Failed { error }
            if settings.fail_on_network_error && error.is_network() =>
        {
            ExitCode::PublishFailed
        }
        _ => ExitCode::Success,
    })
}
