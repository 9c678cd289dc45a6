//! # Segment Parsing
//!
//! Splits a raw field value into its numeric segments. Pattern matching is
//! the only concern here; bounds and canonical formatting live in
//! [`crate::field::address`].

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::field::kind::FieldKind;

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("address pattern is valid")
});

// Each separator position is matched on its own, so "a:b-c.d:e:f" is accepted.
static MAC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([0-9a-f]+)[:.\-]([0-9a-f]+)[:.\-]([0-9a-f]+)[:.\-]([0-9a-f]+)[:.\-]([0-9a-f]+)[:.\-]([0-9a-f]+)$",
    )
    .expect("mac pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value does not match the expected address layout")]
    Malformed,
    #[error("segment {position} is not a number")]
    NotANumber { position: usize },
    #[error("segment {position} is too large to represent")]
    Overflow { position: usize },
}

fn pattern(kind: FieldKind) -> &'static Regex {
    match kind {
        FieldKind::MacAddress => &MAC_RE,
        FieldKind::IPv4Address | FieldKind::Netmask => &ADDRESS_RE,
    }
}

/// Parses `raw` into its ordered segments using the radix of `kind`.
///
/// Positions in errors are 1-indexed.
pub fn parse_segments(kind: FieldKind, raw: &str) -> Result<Vec<u32>, ParseError> {
    let Some(captures) = pattern(kind).captures(raw) else {
        debug!(%kind, raw, "value doesn't match");
        return Err(ParseError::Malformed);
    };

    captures
        .iter()
        .skip(1)
        .enumerate()
        .map(|(idx, group)| {
            let position = idx + 1;
            let text = group.map(|m| m.as_str()).ok_or(ParseError::Malformed)?;
            u32::from_str_radix(text, kind.radix()).map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => ParseError::Overflow { position },
                _ => {
                    debug!(position, text, "can't parse segment");
                    ParseError::NotANumber { position }
                }
            })
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
