//! RubyGems requirement grammar: `~>` plus comma-separated constraints

use super::SyntaxError;
use crate::constraint::Constraint;
use crate::interval::Interval;
use crate::range::VersionRange;
use crate::version::Version;

pub(crate) fn parse(text: &str) -> Result<VersionRange, SyntaxError> {
    let mut intervals = Vec::new();
    let mut exclusions = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(rest) = token.strip_prefix("~>") {
            let base = Version::parse(rest.trim())?;
            let upper = base.pessimistic_upper();
            intervals.push(Interval::new(Some(base), true, Some(upper), false));
            continue;
        }
        let constraint = Constraint::parse(token)?;
        match constraint.to_interval()? {
            Some(interval) => intervals.push(interval),
            None => exclusions.push(Version::parse(constraint.version())?),
        }
    }
    Ok(super::build_range(intervals, exclusions))
}
