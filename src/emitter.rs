//! Config emitter — renders and writes `trello-player-config.js`.
//!
//! Generated file:
//! ```text
//! window.trelloPlayerConfig = window.trelloPlayerConfig || {};
//! window.trelloPlayerConfig.proxyUrl = "<escaped PROXY_URL>";
//! ```
//!
//! The URL is encoded as an ASCII-only JSON string literal: quotes,
//! backslashes and control characters use JSON escapes, and anything outside
//! printable ASCII becomes `\uXXXX` (surrogate pairs above the BMP). The
//! output is plain ASCII and parses as JavaScript in every engine, including
//! ones that reject raw U+2028/U+2029 inside literals.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use tracing::{debug, info};

use crate::{config::Config, error::AppError};

/// File name written under `DEST`.
pub const CONFIG_FILE_NAME: &str = "trello-player-config.js";

const NAMESPACE_LINE: &str = "window.trelloPlayerConfig = window.trelloPlayerConfig || {};\n";

/// Write the config file into `config.dest`, replacing any previous one.
/// Returns the path that was written.
pub fn emit(config: &Config) -> Result<PathBuf, AppError> {
    if !config.dest.is_dir() {
        return Err(AppError::InvalidDestination(config.dest.clone()));
    }

    let contents = render(&config.proxy_url)?;
    let path = config.dest.join(CONFIG_FILE_NAME);
    fs::write(&path, &contents)?;

    info!(path = %path.display(), bytes = contents.len(), "config file written");
    Ok(path)
}

/// Render the full file contents for `proxy_url`.
pub fn render(proxy_url: &str) -> Result<String, AppError> {
    let literal = js_string_literal(proxy_url)?;
    debug!(%literal, "proxy url encoded");
    Ok(format!(
        "{NAMESPACE_LINE}window.trelloPlayerConfig.proxyUrl = {literal};\n"
    ))
}

/// Encode `value` as a double-quoted, ASCII-only JSON string literal.
pub fn js_string_literal(value: &str) -> Result<String, AppError> {
    let mut buf = Vec::with_capacity(value.len() + 2);
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| AppError::Render(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| AppError::Render(e.to_string()))
}

/// Compact JSON formatter that escapes every character outside `0x20..=0x7E`.
///
/// `serde_json` already escapes `"`, `\` and C0 controls before handing the
/// remaining runs to [`Formatter::write_string_fragment`], so only DEL and
/// non-ASCII are left to handle here.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if matches!(ch, ' '..='~') {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
