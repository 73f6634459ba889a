//! The textual boundary: parsing attribute and dependency input into
//! constructs, and rendering constructs back to attribute names. No
//! algorithm module ever touches raw text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::construct::{AttributeSet, Fd, Universe};
use crate::error::{RelnormError, Result};

lazy_static! {
    static ref DEPENDENCY: Regex = Regex::new(r"^(?P<lhs>.+?)->(?P<rhs>.+)$").unwrap();
}

/// Parse a separated list of attribute names into a universe. Bit positions
/// follow input order; names are trimmed. Duplicate names and more than
/// [`MAX_ATTRS`](crate::construct::MAX_ATTRS) names are rejected.
pub fn parse_attributes(text: &str, separator: char) -> Result<Universe> {
    let names: Vec<String> = text
        .split(separator)
        .map(|name| name.trim().to_owned())
        .collect();
    Universe::new(names)
}

/// Parse one dependency per non-blank line, each of the form `lhs -> rhs`
/// with comma-separated attribute names on both sides. A line without a
/// two-sided arrow is rejected, as is any name the universe does not know.
pub fn parse_fds(text: &str, universe: &Universe) -> Result<Vec<Fd>> {
    let mut fds = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let captures = DEPENDENCY
            .captures(line)
            .ok_or_else(|| RelnormError::MalformedDependency(line.to_owned()))?;
        let lhs = parse_side(&captures["lhs"], line, universe)?;
        let rhs = parse_side(&captures["rhs"], line, universe)?;
        fds.push(Fd::new(lhs, rhs));
    }
    Ok(fds)
}

// Sides accumulate by union, so a repeated attribute within one side is
// harmless.
fn parse_side(side: &str, line: &str, universe: &Universe) -> Result<AttributeSet> {
    let mut attrs = AttributeSet::EMPTY;
    for name in side.split(',').map(str::trim) {
        match universe.get(name) {
            Some(attr) => attrs |= attr,
            None => {
                return Err(RelnormError::UnknownAttribute {
                    name: name.to_owned(),
                    line: line.to_owned(),
                });
            }
        }
    }
    Ok(attrs)
}

/// Render a set as `{A, B}` using the universe's names, in bit order.
pub fn stringify_attrs(attrs: AttributeSet, universe: &Universe) -> String {
    let names: Vec<&str> = (0..universe.len())
        .filter(|&position| AttributeSet::single(position).is_subset_of(attrs))
        .map(|position| universe.name_at(position))
        .collect();
    format!("{{{}}}", names.join(", "))
}

/// Render dependencies as `lhs -> rhs` entries joined by `splitter`.
pub fn stringify_fds(fds: &[Fd], universe: &Universe, splitter: &str) -> String {
    fds.iter()
        .map(|fd| {
            format!(
                "{} -> {}",
                stringify_attrs(fd.lhs(), universe),
                stringify_attrs(fd.rhs(), universe)
            )
        })
        .collect::<Vec<_>>()
        .join(splitter)
}
