//! Canonical `vers:` URI codec and the public parsing facade

use crate::constraint::Constraint;
use crate::range::VersionRange;
use crate::scheme::{self, Scheme, SyntaxError};
use crate::version::Version;

/// Facade for the canonical wire format and native-syntax parsing.
///
/// A vers URI is `vers:<scheme>/<constraint>[|<constraint>...]`, or the
/// literal `*` for the range matching everything. Constraints are
/// `<operator><version>` tokens; a missing operator is an implicit `=`.
pub struct Vers;

impl Vers {
    /// Parse a canonical vers URI into a normalized range
    pub fn parse(uri: &str) -> Result<VersionRange, SyntaxError> {
        let text = uri.trim();
        if text == "*" {
            return Ok(VersionRange::unbounded());
        }
        let rest = text
            .strip_prefix("vers:")
            .ok_or_else(|| SyntaxError::InvalidUri(uri.to_string()))?;
        let (scheme_token, constraints) = rest
            .split_once('/')
            .ok_or_else(|| SyntaxError::InvalidUri(uri.to_string()))?;
        if scheme_token.is_empty() {
            return Err(SyntaxError::InvalidUri(uri.to_string()));
        }

        let mut intervals = Vec::new();
        let mut exclusions = Vec::new();
        for token in constraints.split('|') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let constraint = Constraint::parse(token)?;
            match constraint.to_interval()? {
                Some(interval) => intervals.push(interval),
                None => exclusions.push(Version::parse(constraint.version())?),
            }
        }
        if intervals.is_empty() && exclusions.is_empty() {
            return Ok(VersionRange::empty());
        }
        Ok(scheme::build_range(intervals, exclusions))
    }

    /// Parse a range written in an ecosystem's native syntax
    pub fn parse_native(text: &str, scheme: &str) -> Result<VersionRange, SyntaxError> {
        scheme::parse_native(text, &Scheme::from(scheme))
    }

    /// Encode a range in the canonical wire format.
    ///
    /// The unbounded range is the literal `*`; the empty range is a URI
    /// with no constraints. Degenerate intervals encode as `=<version>`,
    /// everything else as its present bounds.
    pub fn to_vers_string(range: &VersionRange, scheme: &str) -> String {
        if range.is_unbounded() {
            return "*".to_string();
        }
        let scheme = Scheme::from(scheme);
        let mut parts = Vec::new();
        for interval in range.intervals() {
            if interval.is_point() {
                if let Some(version) = interval.min() {
                    parts.push(format!("={}", version));
                }
                continue;
            }
            if let Some(min) = interval.min() {
                let op = if interval.min_inclusive() { ">=" } else { ">" };
                parts.push(format!("{}{}", op, min));
            }
            if let Some(max) = interval.max() {
                let op = if interval.max_inclusive() { "<=" } else { "<" };
                parts.push(format!("{}{}", op, max));
            }
        }
        format!("vers:{}/{}", scheme, parts.join("|"))
    }
}
