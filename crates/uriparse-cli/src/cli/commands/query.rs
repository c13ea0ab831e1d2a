//! `uriparse query <qs>` – decode a bare query string.

use anyhow::Result;
use uriparse_core::config::UriparseConfig;
use uriparse_core::query;

use super::to_json;

/// JSON for a query string; `{}` when it has no usable pairs.
pub(crate) fn decode_to_json(raw: &str, pretty: bool) -> Result<String> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    match query::decode(raw) {
        Some(decoded) => to_json(&decoded, pretty),
        None => Ok("{}".to_string()),
    }
}

pub fn run_query(cfg: &UriparseConfig, raw: &str, compact: bool) -> Result<()> {
    println!("{}", decode_to_json(raw, cfg.pretty && !compact)?);
    Ok(())
}
