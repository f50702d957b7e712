//! String-level version comparison utilities

use std::cmp::Ordering;

use crate::version::{Version, VersionError};

/// Comparator for comparing version strings without handling parse results
/// at every call site. The relational helpers return `false` when either
/// side fails to parse.
pub struct Comparator;

impl Comparator {
    /// Compare two version strings in the version order
    pub fn compare(a: &str, b: &str) -> Result<Ordering, VersionError> {
        Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
    }

    pub fn greater_than(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Greater))
    }

    pub fn greater_than_or_equal_to(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Greater | Ordering::Equal))
    }

    pub fn less_than(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Less))
    }

    pub fn less_than_or_equal_to(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Less | Ordering::Equal))
    }

    pub fn equal_to(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Equal))
    }

    pub fn not_equal_to(a: &str, b: &str) -> bool {
        matches!(Self::compare(a, b), Ok(Ordering::Less | Ordering::Greater))
    }

    /// Canonical text form of a version
    pub fn normalize(version: &str) -> Result<String, VersionError> {
        Ok(Version::parse(version)?.to_string())
    }

    /// Whether the text parses as a version
    pub fn valid(version: &str) -> bool {
        Version::parse(version).is_ok()
    }

    /// Sort version strings ascending. Unparseable entries are dropped.
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::sorted(versions, true)
    }

    /// Sort version strings descending. Unparseable entries are dropped.
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::sorted(versions, false)
    }

    fn sorted(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(idx, text)| Some((Version::parse(text).ok()?, idx)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let ord = a.cmp(b);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, idx)| versions[idx].to_string())
            .collect()
    }
}
