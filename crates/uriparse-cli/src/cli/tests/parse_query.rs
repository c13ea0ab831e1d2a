//! Tests for parse and query subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["uriparse", "parse", "https://example.com/x?a=1"]) {
        CliCommand::Parse {
            url,
            only,
            options,
            compact,
        } => {
            assert_eq!(url, "https://example.com/x?a=1");
            assert!(only.is_none());
            assert!(options.is_none());
            assert!(!compact);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_only() {
    match parse(&[
        "uriparse",
        "parse",
        "https://example.com/",
        "--only",
        "host,port",
        "--compact",
    ]) {
        CliCommand::Parse { only, compact, .. } => {
            assert_eq!(only.as_deref(), Some("host,port"));
            assert!(compact);
        }
        _ => panic!("expected Parse with --only"),
    }
}

#[test]
fn cli_parse_parse_options_negative() {
    match parse(&["uriparse", "parse", "https://example.com/", "--options", "-1"]) {
        CliCommand::Parse { options, .. } => assert_eq!(options, Some(-1)),
        _ => panic!("expected Parse with --options"),
    }
}

#[test]
fn cli_parse_only_conflicts_with_options() {
    let res = Cli::try_parse_from([
        "uriparse",
        "parse",
        "https://example.com/",
        "--only",
        "host",
        "--options",
        "4",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_parse_requires_url() {
    assert!(Cli::try_parse_from(["uriparse", "parse"]).is_err());
}

#[test]
fn cli_parse_query() {
    match parse(&["uriparse", "query", "a[]=1&a[]=2"]) {
        CliCommand::Query { query, compact } => {
            assert_eq!(query, "a[]=1&a[]=2");
            assert!(!compact);
        }
        _ => panic!("expected Query"),
    }
}
