mod commands;
mod output;

use anyhow::Result;
use cdss_api::{Client, Config};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cdss")]
#[command(about = "Query Colorado water data from the CDSS REST API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Log every request URL
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List surface water, telemetry or climate stations
    Stations(commands::stations::StationsArgs),
    /// Fetch a station time series
    Readings(commands::readings::ReadingsArgs),
    /// List administrative structures
    Structures(commands::structures::StructuresArgs),
    /// Fetch diversion, release or stage/volume records
    Diversions(commands::diversions::DiversionsArgs),
    /// List water rights net amounts or transactions
    WaterRights(commands::water_rights::WaterRightsArgs),
    /// List administrative calls
    Calls(commands::calls::CallsArgs),
    /// List wells or well measurements
    Wells(commands::wells::WellsArgs),
    /// Analyse when a right was out of priority
    CallAnalysis(commands::analysis::CallAnalysisArgs),
    /// Show a reference table
    Reference(commands::reference::ReferenceArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.debug { "cdss_api=info" } else { "cdss_api=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = Config::default().with_debug(cli.debug);
    if let Ok(base_url) = std::env::var("CDSS_BASE_URL") {
        config = config.with_base_url(&base_url);
    }
    if let Ok(api_key) = std::env::var("CDSS_API_KEY") {
        if !api_key.trim().is_empty() {
            config = config.with_api_key(api_key.trim());
        }
    }
    let client = Client::with_config(config)?;

    match &cli.command {
        Commands::Stations(args) => commands::stations::run(args, &client, &format)?,
        Commands::Readings(args) => commands::readings::run(args, &client, &format)?,
        Commands::Structures(args) => commands::structures::run(args, &client, &format)?,
        Commands::Diversions(args) => commands::diversions::run(args, &client, &format)?,
        Commands::WaterRights(args) => commands::water_rights::run(args, &client, &format)?,
        Commands::Calls(args) => commands::calls::run(args, &client, &format)?,
        Commands::Wells(args) => commands::wells::run(args, &client, &format)?,
        Commands::CallAnalysis(args) => commands::analysis::run(args, &client, &format)?,
        Commands::Reference(args) => commands::reference::run(args, &client, &format)?,
    }

    Ok(())
}
