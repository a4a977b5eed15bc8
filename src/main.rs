use readmegen::cli::CliArgs;
use readmegen::config::AppConfig;
use readmegen::server::{start_server, AppState};
use readmegen::util::logging::{init_from_env, init_logging, parse_level, LoggingConfig};
use readmegen::VERSION;

use clap::Parser;
use std::env;
use std::sync::Arc;
use tracing::{debug, error, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("readmegen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = AppConfig::default();
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    let port = args.port.unwrap_or(config.port);
    let state = Arc::new(AppState::from_config(config));

    if let Err(e) = start_server(state, port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging_from_args(args: &CliArgs) {
    if args.log_level.is_none() && !args.verbose && !args.quiet {
        init_from_env();
        return;
    }

    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };

    let use_json = env::var("READMEGEN_LOG_JSON")
        .ok()
        .and_then(|value| value.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}
