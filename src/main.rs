use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

use contribution_stats::error::AppError;
use contribution_stats::logging;
use contribution_stats::server::ServiceConfig;

/// Yearly GitHub contribution statistics over HTTP
#[derive(Debug, Parser)]
#[command(name = "contribution-stats", version, about)]
struct Cli {
    /// Directory containing settings.yaml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, value_name = "ADDR")]
    bind: Option<IpAddr>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Loads settings.yaml, then applies environment and CLI overrides
///
/// An unreadable or invalid file falls back to defaults; the error is handed
/// back so it can be logged once the logger is up.
fn load_config(cli: &Cli) -> Result<(ServiceConfig, Option<AppError>), AppError> {
    let (mut config, fallback) = match cli
        .config_dir
        .clone()
        .or_else(ServiceConfig::default_config_dir)
    {
        Some(dir) => match ServiceConfig::load(&dir) {
            Ok(config) => (config, None),
            Err(e) => (ServiceConfig::default(), Some(e)),
        },
        None => (ServiceConfig::default(), None),
    };

    config.apply_env(|key| std::env::var(key).ok())?;

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    Ok((config, fallback))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let (config, fallback) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    logging::init(&config.log_level, cli.log_level.is_some());
    if let Some(e) = fallback {
        log::warn!("{}; using default settings", e);
    }

    if let Err(e) = contribution_stats::run(config).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
