//! Maven and NuGet bracket-notation grammar

use super::SyntaxError;
use crate::interval::Interval;
use crate::range::VersionRange;
use crate::version::Version;

pub(crate) fn parse(text: &str) -> Result<VersionRange, SyntaxError> {
    let mut intervals = Vec::new();
    for group in split_groups(text)? {
        intervals.push(parse_group(group)?);
    }
    Ok(VersionRange::new(intervals))
}

// Split a multi-range spec on the commas between bracket groups. Commas
// inside brackets separate the two bounds of one group.
fn split_groups(text: &str) -> Result<Vec<&str>, SyntaxError> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '[' | '(' => {
                if depth > 0 {
                    return Err(SyntaxError::MismatchedBrackets(text.to_string()));
                }
                depth += 1;
            }
            ']' | ')' => {
                if depth == 0 {
                    return Err(SyntaxError::MismatchedBrackets(text.to_string()));
                }
                depth -= 1;
            }
            ',' if depth == 0 => {
                let group = text[start..idx].trim();
                if !group.is_empty() {
                    groups.push(group);
                }
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(SyntaxError::MismatchedBrackets(text.to_string()));
    }
    let group = text[start..].trim();
    if !group.is_empty() {
        groups.push(group);
    }
    Ok(groups)
}

fn parse_group(group: &str) -> Result<Interval, SyntaxError> {
    if group.starts_with(['[', '(']) {
        let min_inclusive = group.starts_with('[');
        let max_inclusive = match group.as_bytes()[group.len() - 1] {
            b']' => true,
            b')' => false,
            _ => return Err(SyntaxError::MismatchedBrackets(group.to_string())),
        };
        let inner = &group[1..group.len() - 1];
        return match inner.split_once(',') {
            None => {
                // a single version is only valid fully inclusive: [1.0.0]
                if min_inclusive && max_inclusive {
                    Ok(Interval::point(Version::parse(inner.trim())?))
                } else {
                    Err(SyntaxError::MismatchedBrackets(group.to_string()))
                }
            }
            Some((low, high)) => {
                let low = low.trim();
                let high = high.trim();
                let min = if low.is_empty() {
                    None
                } else {
                    Some(Version::parse(low)?)
                };
                let max = if high.is_empty() {
                    None
                } else {
                    Some(Version::parse(high)?)
                };
                Ok(Interval::new(min, min_inclusive, max, max_inclusive))
            }
        };
    }

    // a bare version is a minimum, not an exact pin
    let floor = Version::parse(group)?;
    Ok(Interval::new(Some(floor), true, None, false))
}
