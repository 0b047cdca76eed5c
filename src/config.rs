//! Configuration loading from the process environment.
//!
//! Both `DEST` and `PROXY_URL` are required. Empty values count as set;
//! an empty `DEST` resolves to the current directory.

use std::{env, ffi::OsString, path::PathBuf};

use crate::error::AppError;

pub const DEST_VAR: &str = "DEST";
pub const PROXY_URL_VAR: &str = "PROXY_URL";

/// Fully-resolved emitter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the config file is written into. Must already exist.
    pub dest: PathBuf,
    /// Value assigned to `window.trelloPlayerConfig.proxyUrl`, unvalidated.
    pub proxy_url: String,
}

/// Load config from `DEST` and `PROXY_URL`.
pub fn load() -> Result<Config, AppError> {
    load_from(env::var_os(DEST_VAR), env::var_os(PROXY_URL_VAR))
}

/// Internal loader — accepts the raw values as read from the environment.
/// Tests pass them directly instead of mutating env vars.
pub fn load_from(dest: Option<OsString>, proxy_url: Option<OsString>) -> Result<Config, AppError> {
    let mut missing = Vec::new();
    if dest.is_none() {
        missing.push(DEST_VAR);
    }
    if proxy_url.is_none() {
        missing.push(PROXY_URL_VAR);
    }

    let (Some(dest), Some(proxy_url)) = (dest, proxy_url) else {
        return Err(AppError::MissingConfig(missing));
    };

    // DEST stays an OS string; PROXY_URL ends up inside a JS literal.
    let proxy_url = proxy_url
        .into_string()
        .map_err(|_| AppError::NonUnicodeConfig(PROXY_URL_VAR))?;

    // An empty DEST means the current directory.
    let dest = if dest.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(dest)
    };

    Ok(Config { dest, proxy_url })
}
