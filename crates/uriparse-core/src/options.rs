//! Selection mask: which URL components the assembler populates.
//!
//! Bit values match the historical `parseOptions` constants so numeric masks
//! coming from existing callers keep their meaning.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use thiserror::Error;

/// Set of component flags. `Default` is [`SelectionMask::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionMask(u8);

impl SelectionMask {
    pub const NONE: SelectionMask = SelectionMask(0);
    pub const PROTOCOL: SelectionMask = SelectionMask(1);
    pub const AUTH: SelectionMask = SelectionMask(1 << 1);
    pub const HOST: SelectionMask = SelectionMask(1 << 2);
    pub const PORT: SelectionMask = SelectionMask(1 << 3);
    pub const QUERY: SelectionMask = SelectionMask(1 << 4);
    pub const FRAGMENT: SelectionMask = SelectionMask(1 << 5);
    pub const PATH: SelectionMask = SelectionMask(1 << 6);
    pub const ALL: SelectionMask = SelectionMask(127);

    /// Named single flags, in bit order.
    pub const FLAGS: [(&'static str, SelectionMask); 7] = [
        ("protocol", Self::PROTOCOL),
        ("auth", Self::AUTH),
        ("host", Self::HOST),
        ("port", Self::PORT),
        ("query", Self::QUERY),
        ("fragment", Self::FRAGMENT),
        ("path", Self::PATH),
    ];

    /// Builds a mask from raw bits, ignoring bits that name no component.
    ///
    /// Takes an `i64` so integers from loosely typed callers (including
    /// negative ones, whose low bits are all set) map without a fallible cast.
    pub const fn from_bits_truncate(bits: i64) -> Self {
        SelectionMask((bits & Self::ALL.0 as i64) as u8)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every flag in `other` is also set in `self`.
    pub const fn contains(self, other: SelectionMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// `self` with every flag in `other` cleared.
    pub const fn without(self, other: SelectionMask) -> Self {
        SelectionMask(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the flags set in this mask, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::FLAGS
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }
}

impl Default for SelectionMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for SelectionMask {
    type Output = SelectionMask;

    fn bitor(self, rhs: SelectionMask) -> SelectionMask {
        SelectionMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for SelectionMask {
    fn bitor_assign(&mut self, rhs: SelectionMask) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SelectionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("all");
        }
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join(","))
    }
}

/// A component name that is not one of the known flags (or `all`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown url component {0:?} (expected one of protocol, auth, host, port, query, fragment, path, all)")]
pub struct UnknownComponent(pub String);

impl FromStr for SelectionMask {
    type Err = UnknownComponent;

    /// Parses a comma-separated list of component names, e.g. `"protocol,host"`.
    /// Names are case-insensitive; blank entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = SelectionMask::NONE;
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if name.eq_ignore_ascii_case("all") {
                mask |= SelectionMask::ALL;
                continue;
            }
            let flag = Self::FLAGS
                .iter()
                .find(|(known, _)| name.eq_ignore_ascii_case(known))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| UnknownComponent(name.to_string()))?;
            mask |= flag;
        }
        Ok(mask)
    }
}
