use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use tracing_subscriber::EnvFilter;

use soilcard::{load_config, Config, PipelineConfig, SoilAnalysisPipeline, SoilReport};

#[derive(Parser, Debug)]
#[command(
    name = "soilcard",
    version,
    about = "Extract and classify soil parameters from soil-health cards"
)]
struct Cli {
    /// Config file; defaults to <config dir>/soilcard/config.json when present
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline on a card image or PDF
    Analyze {
        file: PathBuf,

        /// Declared media type; guessed from the extension when omitted
        #[arg(long, value_name = "TYPE")]
        mime: Option<String>,

        /// Run OCR on the original image
        #[arg(long)]
        no_preprocess: bool,

        #[arg(long)]
        pretty: bool,
    },
    /// Extract parameters from text that was already recognized
    Parse {
        file: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs, cli.verbose)?;

    info!("soilcard v{}", env!("CARGO_PKG_VERSION"));
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze {
            file,
            mime,
            no_preprocess,
            pretty,
        } => {
            let mime = mime.unwrap_or_else(|| guess_mime(&file));
            let mut pipeline_config = PipelineConfig::from_config(&config);
            if no_preprocess {
                pipeline_config.preprocess = false;
            }

            let mut pipeline = SoilAnalysisPipeline::from_config(pipeline_config);
            let report = pipeline
                .analyze(&file, &mime)
                .with_context(|| format!("Failed to analyze {}", file.display()))?;
            print_report(&report, pretty)
        }
        Command::Parse { file, pretty } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let pipeline = SoilAnalysisPipeline::new(PipelineConfig::from_config(&config), None);
            let report = pipeline.analyze_text(&text);
            print_report(&report, pretty)
        }
    }
}

/// Logs go to stderr so the report on stdout stays machine-readable.
fn init_logging(json: bool, verbose: bool) -> Result<()> {
    tracing_log::LogTracer::init().context("Failed to bridge log records into tracing")?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to install tracing subscriber")
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("soilcard").join("config.json"))
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!("Using config {}", path.display());
            load_config(&path).with_context(|| format!("Failed to load config {}", path.display()))
        }
        _ => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn print_report(report: &SoilReport, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", json);
    Ok(())
}
