//! Caller-owned memoization for parsed versions and ranges

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::range::VersionRange;
use crate::scheme::SyntaxError;
use crate::version::{Version, VersionError};

/// A bounded cache for parse results.
///
/// The cache is explicitly owned by the caller and safe to share across
/// threads. When a map reaches capacity it is cleared rather than evicted
/// entry by entry. Only successful parses are stored; parsing behaves
/// identically with or without the cache.
#[derive(Debug)]
pub struct ParseCache {
    capacity: usize,
    versions: Mutex<HashMap<String, Version>>,
    ranges: Mutex<HashMap<(String, String), VersionRange>>,
}

impl ParseCache {
    pub fn new(capacity: usize) -> Self {
        ParseCache {
            capacity: capacity.max(1),
            versions: Mutex::new(HashMap::new()),
            ranges: Mutex::new(HashMap::new()),
        }
    }

    /// Parse a version, memoized by its exact input text
    pub fn version(&self, text: &str) -> Result<Version, VersionError> {
        {
            let versions = self.versions.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = versions.get(text) {
                return Ok(hit.clone());
            }
        }
        let parsed = Version::parse(text)?;
        let mut versions = self.versions.lock().unwrap_or_else(PoisonError::into_inner);
        if versions.len() >= self.capacity {
            versions.clear();
        }
        versions.insert(text.to_string(), parsed.clone());
        Ok(parsed)
    }

    /// Parse a native range, memoized by scheme and input text
    pub fn parse_native(&self, text: &str, scheme: &str) -> Result<VersionRange, SyntaxError> {
        let key = (scheme.to_string(), text.to_string());
        {
            let ranges = self.ranges.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = ranges.get(&key) {
                return Ok(hit.clone());
            }
        }
        let parsed = crate::vers::Vers::parse_native(text, scheme)?;
        let mut ranges = self.ranges.lock().unwrap_or_else(PoisonError::into_inner);
        if ranges.len() >= self.capacity {
            ranges.clear();
        }
        ranges.insert(key, parsed.clone());
        Ok(parsed)
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.versions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.ranges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
