// wOBA dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Load the newest data file and compute wOBA
// 4. Run the TUI until the user quits

use woba_core::config;
use woba_core::data_source::DataSource;
use woba_tui::app::{Dashboard, Dataset};
use woba_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("wOBA dashboard starting up");

    // 2. Load config
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = config::load_config(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: data dir={}, prefix={}, default min PA={}",
        config.data.dir, config.data.file_prefix, config.display.default_min_pa
    );

    // 3. Load data
    let source = DataSource::from_config(&config.data, &base_dir);
    let dashboard = Dashboard::new(source, config.weights, config.display.default_min_pa);
    match dashboard.dataset() {
        Dataset::Ready { file, table } => {
            info!("Using data file {} ({} batters)", file.file_name, table.len())
        }
        Dataset::NoPlateAppearances { file } => {
            info!("Using data file {} (no plate appearances)", file.file_name)
        }
        Dataset::NoDataFiles { dir } => info!("No data files in {}", dir),
        Dataset::LoadFailed { message } => error!("Initial load failed: {}", message),
    }

    // 4. Run the TUI (blocks until the user presses 'q' or Ctrl+C)
    if let Err(e) = tui::run(dashboard).await {
        error!("TUI error: {:#}", e);
        return Err(e);
    }

    info!("wOBA dashboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("woba-dashboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("woba=info,woba_tui=info,woba_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
