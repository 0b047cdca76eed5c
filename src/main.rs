//! prepare-config — build-pipeline entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger
//!   3. Load config from `DEST` / `PROXY_URL`
//!   4. Emit `trello-player-config.js` into `DEST`
//!   5. Print the written path

use prepare_config::{config, emitter, error, logger};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), error::AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    logger::init("info")?;

    let config = config::load()?;

    info!(
        dest = %config.dest.display(),
        proxy_url_len = config.proxy_url.len(),
        "config loaded"
    );

    let path = emitter::emit(&config)?;

    println!("Config file '{}' created successfully.", path.display());

    Ok(())
}
