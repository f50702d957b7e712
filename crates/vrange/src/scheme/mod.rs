//! Per-ecosystem range grammars

mod gem;
mod maven;
mod npm;

use std::fmt;

use thiserror::Error;

use crate::constraint::{Constraint, ConstraintError};
use crate::interval::Interval;
use crate::range::VersionRange;
use crate::version::{Version, VersionError};

/// Error type for native range syntax
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid version: {0}")]
    Version(#[from] VersionError),
    #[error("invalid constraint: {0}")]
    Constraint(#[from] ConstraintError),
    #[error("unsupported token \"{0}\"")]
    UnsupportedToken(String),
    #[error("mismatched brackets in \"{0}\"")]
    MismatchedBrackets(String),
    #[error("malformed range \"{0}\"")]
    Malformed(String),
    #[error("invalid vers uri \"{0}\"")]
    InvalidUri(String),
}

/// A supported versioning scheme, with a fallback arm for anything else
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Npm,
    Gem,
    Pypi,
    Maven,
    Nuget,
    Deb,
    Rpm,
    Other(String),
}

impl Scheme {
    pub fn as_str(&self) -> &str {
        match self {
            Scheme::Npm => "npm",
            Scheme::Gem => "gem",
            Scheme::Pypi => "pypi",
            Scheme::Maven => "maven",
            Scheme::Nuget => "nuget",
            Scheme::Deb => "deb",
            Scheme::Rpm => "rpm",
            Scheme::Other(token) => token,
        }
    }
}

impl From<&str> for Scheme {
    fn from(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "npm" => Scheme::Npm,
            "gem" => Scheme::Gem,
            "pypi" => Scheme::Pypi,
            "maven" => Scheme::Maven,
            "nuget" => Scheme::Nuget,
            "deb" | "debian" => Scheme::Deb,
            "rpm" => Scheme::Rpm,
            other => Scheme::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a range written in a scheme's native syntax
pub fn parse_native(text: &str, scheme: &Scheme) -> Result<VersionRange, SyntaxError> {
    match scheme {
        Scheme::Npm => npm::parse(text),
        Scheme::Gem => gem::parse(text),
        Scheme::Maven | Scheme::Nuget => maven::parse(text),
        Scheme::Deb | Scheme::Rpm => {
            // Debian's >> and << are plain strict comparisons
            let folded = text.replace(">>", ">").replace("<<", "<");
            parse_constraint_list(&folded)
        }
        Scheme::Pypi | Scheme::Other(_) => parse_constraint_list(text),
    }
}

// Shared grammar for comma or pipe separated constraint lists
pub(crate) fn parse_constraint_list(text: &str) -> Result<VersionRange, SyntaxError> {
    let mut intervals = Vec::new();
    let mut exclusions = Vec::new();
    for token in text.split([',', '|']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let constraint = Constraint::parse(token)?;
        if constraint.is_exclusion() {
            exclusions.push(Version::parse(constraint.version())?);
        } else if let Some(interval) = constraint.to_interval()? {
            intervals.push(interval);
        }
    }
    Ok(build_range(intervals, exclusions))
}

/// Combine positive intervals into a normalized range, then carve out the
/// accumulated `!=` exclusions. A list with only exclusions starts from the
/// unbounded range.
pub(crate) fn build_range(intervals: Vec<Interval>, exclusions: Vec<Version>) -> VersionRange {
    let mut range = if intervals.is_empty() && !exclusions.is_empty() {
        VersionRange::unbounded()
    } else {
        VersionRange::new(intervals)
    };
    for version in &exclusions {
        range = range.exclude(version);
    }
    range
}
