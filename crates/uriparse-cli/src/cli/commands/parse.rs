//! `uriparse parse <url>` – split a URL and print the selected components.

use anyhow::{Context, Result};
use std::borrow::Cow;
use uriparse_core::config::UriparseConfig;
use uriparse_core::{parse, ParsedUrl, SelectionMask};

use super::to_json;

/// Arguments of the parse command, borrowed from the parsed CLI.
#[derive(Debug)]
pub struct ParseArgs<'a> {
    pub url: &'a str,
    pub only: Option<&'a str>,
    pub options: Option<i64>,
    pub compact: bool,
}

/// Mask from `--only`, else `--options`, else the configured default.
pub(crate) fn resolve_mask(cfg: &UriparseConfig, args: &ParseArgs<'_>) -> Result<SelectionMask> {
    match (args.only, args.options) {
        (Some(names), _) => Ok(names.parse::<SelectionMask>()?),
        (None, Some(bits)) => Ok(SelectionMask::from_bits_truncate(bits)),
        (None, None) => cfg.default_mask(),
    }
}

/// `url` with any `user:password@` replaced by `***@`, for log output.
pub(crate) fn redact_userinfo(url: &str) -> Cow<'_, str> {
    let start = match url.find("//") {
        Some(i) => i + 2,
        None => return Cow::Borrowed(url),
    };
    let end = url[start..]
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .map_or(url.len(), |i| start + i);
    match url[start..end].rfind('@') {
        Some(at) => Cow::Owned(format!("{}***{}", &url[..start], &url[start + at..])),
        None => Cow::Borrowed(url),
    }
}

pub(crate) fn parse_url(cfg: &UriparseConfig, args: &ParseArgs<'_>) -> Result<ParsedUrl> {
    let mask = resolve_mask(cfg, args)?;
    tracing::info!("parsing url with mask {}", mask);
    tracing::debug!("url: {}", redact_userinfo(args.url));
    parse(args.url, mask).with_context(|| format!("cannot parse {:?}", args.url))
}

pub fn run_parse(cfg: &UriparseConfig, args: &ParseArgs<'_>) -> Result<()> {
    let parsed = parse_url(cfg, args)?;
    println!("{}", to_json(&parsed, cfg.pretty && !args.compact)?);
    Ok(())
}
