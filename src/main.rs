//! Attendance audit CLI.
//!
//! Analyzes an attendance CSV export or serves the analysis over HTTP.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use attendance_audit::analysis::analyze_file;
use attendance_audit::api::{AppState, create_router};
use attendance_audit::config::ConfigLoader;
use attendance_audit::error::AuditResult;
use attendance_audit::logging;
use attendance_audit::report::render_text;

#[derive(Parser)]
#[command(name = "attendance-audit")]
#[command(about = "Flag attendance patterns in employee time logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an attendance CSV file and print the report
    Analyze {
        /// Input CSV file path
        #[arg(long)]
        file: PathBuf,

        /// Configuration directory holding rules.yaml and columns.yaml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,

        /// Configuration directory holding rules.yaml and columns.yaml
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(dir: Option<&Path>) -> AuditResult<ConfigLoader> {
    match dir {
        Some(dir) => ConfigLoader::load(dir),
        None => Ok(ConfigLoader::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            config,
            format,
        } => {
            let loader = load_config(config.as_deref())?;
            let report = analyze_file(&file, loader.config())?;

            match format {
                OutputFormat::Text => print!("{}", render_text(&report, loader.rules())),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Serve { addr, config } => {
            let loader = load_config(config.as_deref())?;
            let app = create_router(AppState::new(loader));

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!(addr = %addr, "Starting attendance audit API");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
