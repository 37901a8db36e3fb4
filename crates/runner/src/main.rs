//! Signalfeed Binary
//!
//! Uploads a TradingView "List of Trades" export as backtest signals, or
//! deletes the signals of a strategy.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use signalfeed_core::{StrategyId, UtcOffset, Weight};
use signalfeed_gateway::{CsvTradeReader, Environment, HttpSignalPublisher, RowOrder};
use signalfeed_runner::{
    UploaderConfig, delete_backtest_signals, load_config, load_default_config, transform_only,
    upload_tradingview_signal,
};
use signalfeed_transformer::TransformParams;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "signalfeed", version)]
#[command(about = "Upload TradingView backtest signals to the strategy-signal endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Uploader configuration JSON (embedded default when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Deployment to talk to (dev, uat, prd)
    #[arg(long = "env", global = true)]
    environment: Option<Environment>,

    /// Explicit endpoint URL, overrides --env and FINNIZE_ENDPOINT
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload the signals of a trade list export
    Upload(UploadArgs),

    /// Delete every signal of a strategy
    Delete {
        #[arg(long)]
        strategy_id: u64,
    },
}

#[derive(Args)]
struct UploadArgs {
    /// Path to the exported CSV
    #[arg(long)]
    path: PathBuf,

    #[arg(long)]
    strategy_id: u64,

    /// Position size in (0, 1]; 1 is a full long or short
    #[arg(long)]
    weight: f64,

    /// Offset the export's timestamps are written in, e.g. UTC+7
    #[arg(long)]
    utc: Option<UtcOffset>,

    /// Row order of the export
    #[arg(long, default_value_t = RowOrder::NewestFirst)]
    order: RowOrder,

    /// Print the JSON payload instead of uploading it
    #[arg(long)]
    dry_run: bool,
}

fn resolve_config(cli: &Cli) -> Result<UploaderConfig> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_default_config()?,
    };
    Ok(config
        .with_process_env()?
        .with_cli_overrides(cli.environment, cli.endpoint.clone()))
}

async fn upload(config: &UploaderConfig, args: UploadArgs) -> Result<()> {
    let params = TransformParams::new(StrategyId::new(args.strategy_id)?, Weight::new(args.weight)?)
        .with_utc(args.utc.unwrap_or(config.utc));
    let source = CsvTradeReader::new(args.path).with_order(args.order);

    if args.dry_run {
        let batch = transform_only(&source, &params)?;
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let publisher = HttpSignalPublisher::new(&config.publisher_config())?;
    let report = upload_tradingview_signal(&source, &publisher, &params).await?;
    info!(
        "Done: {} rows read, {} signals, published: {}",
        report.rows_read, report.signals, report.published
    );
    Ok(())
}

async fn delete(config: &UploaderConfig, strategy_id: u64) -> Result<()> {
    let publisher = HttpSignalPublisher::new(&config.publisher_config())?;
    delete_backtest_signals(&publisher, StrategyId::new(strategy_id)?).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("signalfeed=info"))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(
        "Environment: {}, endpoint: {}",
        config.environment,
        config.endpoint()
    );

    match cli.command {
        Commands::Upload(args) => upload(&config, args).await,
        Commands::Delete { strategy_id } => delete(&config, strategy_id).await,
    }
}
