//! Front-end for loosely typed callers (scripting bindings, JSON RPC).
//!
//! Mirrors the classic `parse(url, options?)` call: the first argument must be
//! a string, the second is used as a bitmask only when it is a number.

use serde_json::Value;

use crate::assemble::ParsedUrl;
use crate::error::ParseError;
use crate::options::SelectionMask;
use crate::parser::parse;

/// Parses `args[0]` as a URL using `args[1]` (if numeric) as the selection mask.
pub fn parse_args(args: &[Value]) -> Result<ParsedUrl, ParseError> {
    let url = match args.first() {
        Some(Value::String(url)) => url.as_str(),
        _ => return Err(ParseError::InvalidArgument),
    };
    parse(url, options_from_value(args.get(1)))
}

/// Coerces an optional options argument into a mask.
///
/// Numbers keep their integral part (negative values wrap to their low bits);
/// anything else, including a missing argument, selects everything.
pub fn options_from_value(value: Option<&Value>) -> SelectionMask {
    let bits = value
        .filter(|v| v.is_number())
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)));
    match bits {
        Some(bits) => SelectionMask::from_bits_truncate(bits),
        None => SelectionMask::ALL,
    }
}
