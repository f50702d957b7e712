//! Version parsing and total ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Error type for version parsing and manipulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version string \"{0}\"")]
    InvalidFormat(String),
    #[error("invalid version component \"{0}\", expected one of: major, minor, patch")]
    InvalidComponent(String),
}

lazy_static! {
    // Anchored shape: major[.minor][.patch][-prerelease][+build], optional leading v
    static ref VERSION_RE: Regex = Regex::new(
        r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z][0-9A-Za-z.-]*))?(?:\+([0-9A-Za-z][0-9A-Za-z.-]*))?$"
    )
    .unwrap();
}

/// A version component that can be incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl FromStr for Component {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Component::Major),
            "minor" => Ok(Component::Minor),
            "patch" => Ok(Component::Patch),
            _ => Err(VersionError::InvalidComponent(s.to_string())),
        }
    }
}

/// An immutable parsed version.
///
/// Absent minor/patch components compare as `0` but are preserved for
/// round-tripping the input text. Build metadata never participates in
/// ordering or equality.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: Option<String>,
    build: Option<String>,
}

impl Version {
    /// Create a release version from numeric components
    pub fn new(major: u64, minor: Option<u64>, patch: Option<u64>) -> Self {
        // A patch without a minor is not representable in text form
        let patch = if minor.is_some() { patch } else { None };
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(VersionError::InvalidFormat(input.to_string()));
        }

        // Pure digits resolve to a bare major
        if text.bytes().all(|b| b.is_ascii_digit()) {
            let major = text
                .parse()
                .map_err(|_| VersionError::InvalidFormat(input.to_string()))?;
            return Ok(Version::new(major, None, None));
        }

        if let Some(caps) = VERSION_RE.captures(text) {
            let number = |idx: usize| -> Result<Option<u64>, VersionError> {
                caps.get(idx)
                    .map(|m| m.as_str().parse())
                    .transpose()
                    .map_err(|_| VersionError::InvalidFormat(input.to_string()))
            };
            return Ok(Version {
                major: number(1)?.unwrap_or(0),
                minor: number(2)?,
                patch: number(3)?,
                prerelease: caps.get(4).map(|m| m.as_str().to_string()),
                build: caps.get(5).map(|m| m.as_str().to_string()),
            });
        }

        Self::parse_loose(text).ok_or_else(|| VersionError::InvalidFormat(input.to_string()))
    }

    // Fallback for inputs the anchored shape rejects, e.g. "1.2.3.4" or
    // "1.0.0rc1". Splits on dots and dashes; the first non-numeric segment
    // and everything after it become the prerelease.
    fn parse_loose(text: &str) -> Option<Self> {
        let (body, build) = match text.split_once('+') {
            Some((_, meta)) if meta.is_empty() => return None,
            Some((body, meta)) => (body, Some(meta.to_string())),
            None => (text, None),
        };
        let body = body
            .strip_prefix('v')
            .or_else(|| body.strip_prefix('V'))
            .unwrap_or(body);

        let segments: Vec<&str> = body.split(['.', '-']).collect();
        let major: u64 = segments.first()?.parse().ok()?;

        let mut minor = None;
        let mut patch = None;
        let mut rest = 1;
        if let Some(seg) = segments.get(1) {
            if let Ok(n) = seg.parse() {
                minor = Some(n);
                rest = 2;
                if let Some(seg) = segments.get(2) {
                    if let Ok(n) = seg.parse() {
                        patch = Some(n);
                        rest = 3;
                    }
                }
            }
        }

        let prerelease = if segments.len() > rest {
            let joined = segments[rest..].join(".");
            if joined.is_empty() {
                return None;
            }
            Some(joined)
        } else {
            None
        };

        Some(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Return a copy with the given component incremented and every lower
    /// component reset to zero
    pub fn increment(&self, component: Component) -> Version {
        match component {
            Component::Major => Version::new(self.major + 1, Some(0), Some(0)),
            Component::Minor => {
                Version::new(self.major, Some(self.minor.unwrap_or(0) + 1), Some(0))
            }
            Component::Patch => Version::new(
                self.major,
                Some(self.minor.unwrap_or(0)),
                Some(self.patch.unwrap_or(0) + 1),
            ),
        }
    }

    /// Exclusive upper bound of a pessimistic (`~>`) constraint with this
    /// version as its base.
    ///
    /// Three-component bases lock major.minor (`~> 1.2.3` caps at `1.3.0`);
    /// one- and two-component bases lock the major alone (`~> 1.2` caps at
    /// `2.0.0`).
    pub fn pessimistic_upper(&self) -> Version {
        if self.patch.is_some() {
            Version::new(self.major, Some(self.minor.unwrap_or(0) + 1), Some(0))
        } else {
            Version::new(self.major + 1, Some(0), Some(0))
        }
    }

    /// Check whether this version falls in the pessimistic range of `base`
    pub fn satisfies_pessimistic(&self, base: &Version) -> bool {
        self.cmp(base) != Ordering::Less && self.cmp(&base.pessimistic_upper()) == Ordering::Less
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.unwrap_or(0).cmp(&other.minor.unwrap_or(0)))
            .then_with(|| self.patch.unwrap_or(0).cmp(&other.patch.unwrap_or(0)))
            .then_with(|| {
                compare_prerelease(self.prerelease.as_deref(), other.prerelease.as_deref())
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(ref prerelease) = self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(ref build) = self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

// A version without a prerelease is greater than the same numeric version
// with one. Prerelease identifiers compare numerically when both are pure
// digits, byte-wise otherwise; the side that runs out of identifiers first
// is lesser.
fn compare_prerelease(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let mut a_ids = a.split('.');
            let mut b_ids = b.split('.');
            loop {
                match (a_ids.next(), b_ids.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(x), Some(y)) => {
                        let ord = compare_identifier(x, y);
                        if ord != Ordering::Equal {
                            return ord;
                        }
                    }
                }
            }
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u64>().ok()
        } else {
            None
        }
    };
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_bare_major() {
        let version = v("42");
        assert_eq!(version.major(), 42);
        assert_eq!(version.minor(), None);
        assert_eq!(version.patch(), None);
        assert_eq!(version.prerelease(), None);
    }

    #[test]
    fn test_parse_full() {
        let version = v("1.2.3-beta.1+build.5");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), Some(2));
        assert_eq!(version.patch(), Some(3));
        assert_eq!(version.prerelease(), Some("beta.1"));
        assert_eq!(version.build(), Some("build.5"));
    }

    #[test]
    fn test_parse_partial() {
        let version = v("1.2");
        assert_eq!(version.minor(), Some(2));
        assert_eq!(version.patch(), None);
    }

    #[test]
    fn test_parse_v_prefix() {
        assert_eq!(v("v1.2.3"), v("1.2.3"));
        assert_eq!(v("V2.0"), v("2.0"));
        assert_eq!(v("v1.2.3").to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_loose_four_segments() {
        let version = v("1.2.3.4");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), Some(2));
        assert_eq!(version.patch(), Some(3));
        assert_eq!(version.prerelease(), Some("4"));
    }

    #[test]
    fn test_parse_loose_embedded_prerelease() {
        let version = v("1.0.0rc1");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), Some(0));
        assert_eq!(version.patch(), None);
        assert_eq!(version.prerelease(), Some("0rc1"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("blerg").is_err());
        assert!(Version::parse("x.y.z").is_err());
        assert!(Version::parse("~1.2").is_err());
        assert!(matches!(
            Version::parse("not a version"),
            Err(VersionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_order_basic() {
        assert!(v("1.0.0") < v("2.0.0"));
        assert!(v("2.0.0") < v("10.0.0"));
        assert!(v("1.2.0") < v("1.10.0"));
        assert!(v("1.0.0") < v("1.0.1"));
    }

    #[test]
    fn test_order_missing_components_are_zero() {
        assert_eq!(v("1"), v("1.0.0"));
        assert_eq!(v("1.2"), v("1.2.0"));
        assert!(v("1.2") < v("1.2.1"));
    }

    #[test]
    fn test_order_prerelease_below_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
        assert!(v("1.0.0") > v("1.0.0-zzz"));
    }

    #[test]
    fn test_order_prerelease_identifiers() {
        assert!(v("1.0.0-alpha") < v("1.0.0-beta"));
        assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.2"));
        assert!(v("1.0.0-alpha.2") < v("1.0.0-alpha.10"));
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
        assert!(v("1.0.0-1") < v("1.0.0-a"));
    }

    #[test]
    fn test_order_ignores_build() {
        assert_eq!(v("1.2.3+build.1"), v("1.2.3+build.2"));
        assert_eq!(v("1.2.3+anything"), v("1.2.3"));
    }

    #[test]
    fn test_order_is_antisymmetric() {
        let pairs = [
            ("1.0.0", "2.0.0"),
            ("1.0.0-alpha", "1.0.0"),
            ("1.2", "1.2.0"),
            ("0.9", "0.10"),
        ];
        for (a, b) in pairs {
            assert_eq!(v(a).cmp(&v(b)), v(b).cmp(&v(a)).reverse());
            assert_eq!(v(a).cmp(&v(a)), Ordering::Equal);
        }
    }

    #[test]
    fn test_increment() {
        assert_eq!(v("1.2.3").increment(Component::Major).to_string(), "2.0.0");
        assert_eq!(v("1.2.3").increment(Component::Minor).to_string(), "1.3.0");
        assert_eq!(v("1.2.3").increment(Component::Patch).to_string(), "1.2.4");
        assert_eq!(v("1").increment(Component::Patch).to_string(), "1.0.1");
        assert_eq!(v("1").increment(Component::Minor).to_string(), "1.1.0");
    }

    #[test]
    fn test_component_from_str() {
        assert_eq!("major".parse::<Component>().unwrap(), Component::Major);
        assert!(matches!(
            "epoch".parse::<Component>(),
            Err(VersionError::InvalidComponent(_))
        ));
    }

    #[test]
    fn test_pessimistic_upper() {
        assert_eq!(v("1.2.3").pessimistic_upper().to_string(), "1.3.0");
        assert_eq!(v("1.2.0").pessimistic_upper().to_string(), "1.3.0");
        assert_eq!(v("1.2").pessimistic_upper().to_string(), "2.0.0");
        assert_eq!(v("1").pessimistic_upper().to_string(), "2.0.0");
    }

    #[test]
    fn test_satisfies_pessimistic() {
        assert!(v("1.2.0").satisfies_pessimistic(&v("1.2")));
        assert!(v("1.9.9").satisfies_pessimistic(&v("1.2")));
        assert!(!v("2.0.0").satisfies_pessimistic(&v("1.2")));
        assert!(v("1.2.5").satisfies_pessimistic(&v("1.2.3")));
        assert!(!v("1.3.0").satisfies_pessimistic(&v("1.2.3")));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["1", "1.2", "1.2.3", "1.2.3-beta.1", "1.2.3+b", "1.2.3-rc.1+build"] {
            assert_eq!(v(text).to_string(), text);
        }
    }

    #[cfg(test)]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn version_strategy() -> impl Strategy<Value = Version> {
            (
                0u64..100,
                proptest::option::of(0u64..100),
                proptest::option::of(0u64..100),
                proptest::option::of("[a-z]{1,4}(\\.[0-9]{1,2}){0,2}"),
            )
                .prop_map(|(major, minor, patch, prerelease)| {
                    let mut version = Version::new(major, minor, patch);
                    version.prerelease = prerelease;
                    version
                })
        }

        proptest! {
            #[test]
            fn compare_self_is_equal(version in version_strategy()) {
                prop_assert_eq!(version.cmp(&version), Ordering::Equal);
            }

            #[test]
            fn compare_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
                prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            }

            #[test]
            fn compare_is_transitive(
                a in version_strategy(),
                b in version_strategy(),
                c in version_strategy(),
            ) {
                if a <= b && b <= c {
                    prop_assert!(a <= c);
                }
            }

            #[test]
            fn normalize_is_idempotent(version in version_strategy()) {
                let once = version.to_string();
                let twice = Version::parse(&once).unwrap().to_string();
                prop_assert_eq!(once, twice);
            }
        }
    }
}
