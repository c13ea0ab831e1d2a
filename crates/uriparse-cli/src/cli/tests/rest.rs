//! Tests for flags, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_flags() {
    match parse(&["uriparse", "flags"]) {
        CliCommand::Flags => {}
        _ => panic!("expected Flags"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["uriparse", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_unknown_shell() {
    assert!(Cli::try_parse_from(["uriparse", "completions", "cmd"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["uriparse", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
