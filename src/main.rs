//! Zoom transform service.
//!
//! Usage:
//!   zoom-transform --port 8000
//!
//! Every flag can also be set through its environment variable
//! (`PORT`, `LOG_LEVEL`, `ZOOM_CLIENT_ID`, ...).

use clap::Parser;
use log::{error, info};
use std::process;
use zoom_transform::{ServiceArgs, server};

#[tokio::main]
async fn main() {
    let args = ServiceArgs::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    info!("Starting {} with {:?}", config.service_name, config);
    if !config.oauth_configured() {
        info!("Zoom OAuth credentials not configured");
    }

    if let Err(e) = server::serve(config).await {
        error!("{}", e);
        process::exit(1);
    }
}
