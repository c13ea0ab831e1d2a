//! CLI command handlers. Each command is in its own file.

mod completions;
mod flags;
mod man;
mod parse;
mod query;

pub use completions::run_completions;
pub use flags::run_flags;
pub use man::run_man;
pub use parse::{run_parse, ParseArgs};
pub use query::run_query;

use anyhow::Result;
use serde::Serialize;

/// Serialize `value` as JSON, pretty unless `pretty` is false.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
