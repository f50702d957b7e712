//! npm range grammar: caret, tilde, hyphen, wildcards, space-AND, `||`-OR

use lazy_static::lazy_static;
use regex::Regex;

use super::SyntaxError;
use crate::constraint::Constraint;
use crate::interval::Interval;
use crate::range::VersionRange;
use crate::version::Version;

lazy_static! {
    // "*", "x", "X" and dotted repetitions thereof
    static ref WILDCARD_RE: Regex = Regex::new(r"^[vV]?[xX*](\.[xX*])*$").unwrap();
    // Partial versions and x-ranges: "1", "1.2", "1.x", "1.2.x", "1.2.3"
    static ref X_RANGE_RE: Regex =
        Regex::new(r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.[xX*])*$").unwrap();
}

const REJECTED_PREFIXES: &[&str] = &["git+", "git://", "http://", "https://", "file:"];

enum Token {
    Interval(Interval),
    Exclusion(Version),
}

pub(crate) fn parse(text: &str) -> Result<VersionRange, SyntaxError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(VersionRange::unbounded());
    }

    let mut intervals = Vec::new();
    let mut exclusions = Vec::new();
    for group in text.split("||") {
        let tokens: Vec<&str> = group.split_whitespace().collect();
        if tokens.is_empty() {
            // an empty alternative matches everything
            intervals.push(Interval::unbounded());
            continue;
        }

        if let Some(position) = tokens.iter().position(|t| *t == "-") {
            if position != 1 || tokens.len() != 3 {
                return Err(SyntaxError::Malformed(group.trim().to_string()));
            }
            let low = Version::parse(tokens[0])?;
            let high = Version::parse(tokens[2])?;
            intervals.push(Interval::new(Some(low), true, Some(high), true));
            continue;
        }

        // whitespace between tokens is conjunction
        let mut current = Interval::unbounded();
        for token in tokens {
            match parse_token(token)? {
                Token::Interval(interval) => current = current.intersect(&interval),
                Token::Exclusion(version) => exclusions.push(version),
            }
        }
        intervals.push(current);
    }
    Ok(super::build_range(intervals, exclusions))
}

fn parse_token(token: &str) -> Result<Token, SyntaxError> {
    for prefix in REJECTED_PREFIXES {
        if token.starts_with(prefix) {
            return Err(SyntaxError::UnsupportedToken(token.to_string()));
        }
    }

    if let Some(rest) = token.strip_prefix('^') {
        return Ok(Token::Interval(caret(rest)?));
    }
    if let Some(rest) = token.strip_prefix('~') {
        return Ok(Token::Interval(tilde(rest)?));
    }
    if token.starts_with(['<', '>', '=', '!']) {
        let constraint = Constraint::parse(token)?;
        return match constraint.to_interval()? {
            Some(interval) => Ok(Token::Interval(interval)),
            None => Ok(Token::Exclusion(Version::parse(constraint.version())?)),
        };
    }
    if WILDCARD_RE.is_match(token) {
        return Ok(Token::Interval(Interval::unbounded()));
    }
    if let Some(caps) = X_RANGE_RE.captures(token) {
        let number = |idx: usize| -> Result<Option<u64>, SyntaxError> {
            caps.get(idx)
                .map(|m| m.as_str().parse::<u64>())
                .transpose()
                .map_err(|_| SyntaxError::UnsupportedToken(token.to_string()))
        };
        let (major, minor, patch) = (number(1)?.unwrap_or(0), number(2)?, number(3)?);
        let interval = match (minor, patch) {
            (Some(_), Some(_)) => Interval::point(Version::new(major, minor, patch)),
            (Some(minor), None) => Interval::new(
                Some(Version::new(major, Some(minor), Some(0))),
                true,
                Some(Version::new(major, Some(minor + 1), Some(0))),
                false,
            ),
            _ => Interval::new(
                Some(Version::new(major, Some(0), Some(0))),
                true,
                Some(Version::new(major + 1, Some(0), Some(0))),
                false,
            ),
        };
        return Ok(Token::Interval(interval));
    }

    // prerelease and build forms fall through to the full version parser
    match Version::parse(token) {
        Ok(version) => Ok(Token::Interval(Interval::point(version))),
        Err(_) => Err(SyntaxError::UnsupportedToken(token.to_string())),
    }
}

// ^ locks the leftmost non-zero component
fn caret(rest: &str) -> Result<Interval, SyntaxError> {
    let base = Version::parse(rest)?;
    let upper = if base.major() > 0 {
        Version::new(base.major() + 1, Some(0), Some(0))
    } else if base.minor().unwrap_or(0) > 0 {
        Version::new(base.major(), Some(base.minor().unwrap_or(0) + 1), Some(0))
    } else {
        Version::new(
            base.major(),
            Some(base.minor().unwrap_or(0)),
            Some(base.patch().unwrap_or(0) + 1),
        )
    };
    Ok(Interval::new(Some(base), true, Some(upper), false))
}

// ~ locks major.minor when a minor is given, major alone otherwise
fn tilde(rest: &str) -> Result<Interval, SyntaxError> {
    let base = Version::parse(rest)?;
    let upper = match base.minor() {
        Some(minor) => Version::new(base.major(), Some(minor + 1), Some(0)),
        None => Version::new(base.major() + 1, Some(0), Some(0)),
    };
    Ok(Interval::new(Some(base), true, Some(upper), false))
}
