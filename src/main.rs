use std::process::ExitCode;

use clap::Parser;
use slots::SlotLoader;
use slotpicker::config::parse_stale_policy;
use slotpicker::harness::{render_json, render_plain, replay_changes};
use slotpicker::{HarnessError, ReqwestSlotSource, SlotsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slotpicker", about = "Replay date changes against a slots endpoint and print the time options")]
struct Cli {
    /// Server base URL (overrides `SLOTS_BASE_URL`).
    #[arg(long)]
    base_url: Option<String>,

    /// Endpoint path (overrides `SLOTS_ENDPOINT_PATH`).
    #[arg(long)]
    endpoint: Option<String>,

    /// `discard` or `last_wins` (overrides `SLOTS_STALE_POLICY`).
    #[arg(long)]
    stale_policy: Option<String>,

    /// Print options as JSON instead of one label per line.
    #[arg(long)]
    json: bool,

    /// Date values, dispatched in order as successive changes.
    #[arg(required = true)]
    dates: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "slotpicker failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, HarnessError> {
    let mut config = SlotsConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    if let Some(endpoint) = cli.endpoint.as_deref() {
        config = config.with_endpoint_path(endpoint);
    }
    if let Some(raw) = cli.stale_policy.as_deref() {
        config = config.with_stale_policy(parse_stale_policy(Some(raw))?);
    }

    tracing::info!(
        base_url = %config.base_url,
        endpoint = %config.endpoint_path,
        policy = config.stale_policy.as_str(),
        dates = cli.dates.len(),
        "replaying date changes"
    );

    let policy = config.stale_policy;
    let loader = SlotLoader::new(ReqwestSlotSource::new(config)?).with_policy(policy);
    let select = replay_changes(&loader, &cli.dates).await?;
    let options = select.options();

    if cli.json { render_json(&options) } else { Ok(render_plain(&options)) }
}
