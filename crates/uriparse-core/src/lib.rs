//! URL component splitting with an array-aware query-string decoder.
//!
//! [`parse`] splits a URL with the [`grammar`] collaborator, decodes the query
//! with [`query::decode`], and assembles a [`ParsedUrl`] limited to the
//! components chosen by a [`SelectionMask`].

pub mod assemble;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod options;
pub mod parser;
pub mod query;

pub use assemble::{Auth, ParsedUrl};
pub use error::ParseError;
pub use options::SelectionMask;
pub use parser::{parse, parse_with};
