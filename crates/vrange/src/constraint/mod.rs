//! Single `<operator><version>` constraint tokens

mod operator;

pub use operator::{InvalidOperatorError, Operator};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::interval::Interval;
use crate::version::{Version, VersionError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("missing version in constraint \"{0}\"")]
    MissingVersion(String),
}

/// A single version constraint such as `>=1.0.0`.
///
/// The version text is kept verbatim; it is only parsed when the constraint
/// is converted to an interval or evaluated against a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    operator: Operator,
    version: String,
}

impl Constraint {
    pub fn new(operator: Operator, version: impl Into<String>) -> Self {
        Constraint {
            operator,
            version: version.into(),
        }
    }

    /// Parse a constraint token. The longest operator prefix wins; a token
    /// with no operator prefix is an exact-match literal.
    pub fn parse(text: &str) -> Result<Self, ConstraintError> {
        let (operator, rest) = Operator::split(text.trim());
        let version = rest.trim();
        if version.is_empty() {
            return Err(ConstraintError::MissingVersion(text.to_string()));
        }
        Ok(Constraint {
            operator,
            version: version.to_string(),
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether this constraint is a `!=` point exclusion
    pub fn is_exclusion(&self) -> bool {
        self.operator == Operator::NotEqual
    }

    /// Convert to an interval.
    ///
    /// A `!=` constraint yields `None`: exclusions cannot be expressed as a
    /// single interval and are applied by the range builder after the
    /// positive intervals have been combined.
    pub fn to_interval(&self) -> Result<Option<Interval>, VersionError> {
        let version = Version::parse(&self.version)?;
        Ok(match self.operator {
            Operator::Equal => Some(Interval::point(version)),
            Operator::NotEqual => None,
            Operator::GreaterThanOrEqual => {
                Some(Interval::new(Some(version), true, None, false))
            }
            Operator::GreaterThan => Some(Interval::new(Some(version), false, None, false)),
            Operator::LessThanOrEqual => Some(Interval::new(None, false, Some(version), true)),
            Operator::LessThan => Some(Interval::new(None, false, Some(version), false)),
        })
    }

    /// Evaluate the constraint against a candidate version
    pub fn satisfies(&self, candidate: &Version) -> Result<bool, VersionError> {
        let version = Version::parse(&self.version)?;
        let ord = candidate.cmp(&version);
        Ok(match self.operator {
            Operator::Equal => ord == Ordering::Equal,
            Operator::NotEqual => ord != Ordering::Equal,
            Operator::LessThan => ord == Ordering::Less,
            Operator::LessThanOrEqual => ord != Ordering::Greater,
            Operator::GreaterThan => ord == Ordering::Greater,
            Operator::GreaterThanOrEqual => ord != Ordering::Less,
        })
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_operators() {
        let constraint = Constraint::parse(">=1.2.3").unwrap();
        assert_eq!(constraint.operator(), Operator::GreaterThanOrEqual);
        assert_eq!(constraint.version(), "1.2.3");

        let constraint = Constraint::parse("!=1.5.0").unwrap();
        assert!(constraint.is_exclusion());
    }

    #[test]
    fn test_parse_with_spaces() {
        let constraint = Constraint::parse(">= 1.2.3").unwrap();
        assert_eq!(constraint.operator(), Operator::GreaterThanOrEqual);
        assert_eq!(constraint.version(), "1.2.3");

        let constraint = Constraint::parse("  <2.0  ").unwrap();
        assert_eq!(constraint.operator(), Operator::LessThan);
        assert_eq!(constraint.version(), "2.0");
    }

    #[test]
    fn test_parse_implicit_equality() {
        let constraint = Constraint::parse("1.2.3").unwrap();
        assert_eq!(constraint.operator(), Operator::Equal);
        assert_eq!(constraint.version(), "1.2.3");
    }

    #[test]
    fn test_parse_literal_with_leading_punctuation() {
        // not an operator prefix, so the whole token is the version text
        let constraint = Constraint::parse("~1.2").unwrap();
        assert_eq!(constraint.operator(), Operator::Equal);
        assert_eq!(constraint.version(), "~1.2");
        assert!(constraint.to_interval().is_err());
    }

    #[test]
    fn test_parse_missing_version() {
        assert!(matches!(
            Constraint::parse(">="),
            Err(ConstraintError::MissingVersion(_))
        ));
        assert!(matches!(
            Constraint::parse(">=   "),
            Err(ConstraintError::MissingVersion(_))
        ));
        assert!(Constraint::parse("").is_err());
    }

    #[test]
    fn test_to_interval() {
        let exact = Constraint::parse("=1.2.3").unwrap().to_interval().unwrap().unwrap();
        assert!(exact.is_point());

        let floor = Constraint::parse(">=1.0.0").unwrap().to_interval().unwrap().unwrap();
        assert_eq!(floor.min(), Some(&v("1.0.0")));
        assert!(floor.min_inclusive());
        assert_eq!(floor.max(), None);

        let ceiling = Constraint::parse("<2.0.0").unwrap().to_interval().unwrap().unwrap();
        assert_eq!(ceiling.max(), Some(&v("2.0.0")));
        assert!(!ceiling.max_inclusive());
        assert_eq!(ceiling.min(), None);

        let exclusion = Constraint::parse("!=1.5.0").unwrap().to_interval().unwrap();
        assert!(exclusion.is_none());
    }

    #[test]
    fn test_satisfies() {
        let constraint = Constraint::parse(">=1.2.3").unwrap();
        assert!(constraint.satisfies(&v("1.2.3")).unwrap());
        assert!(constraint.satisfies(&v("2.0.0")).unwrap());
        assert!(!constraint.satisfies(&v("1.2.2")).unwrap());

        let constraint = Constraint::parse("!=1.5.0").unwrap();
        assert!(constraint.satisfies(&v("1.4.0")).unwrap());
        assert!(!constraint.satisfies(&v("1.5.0")).unwrap());

        let constraint = Constraint::parse("<1.0.0").unwrap();
        assert!(constraint.satisfies(&v("1.0.0-alpha")).unwrap());
        assert!(!constraint.satisfies(&v("1.0.0")).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Constraint::parse(">= 1.2.3").unwrap().to_string(), ">=1.2.3");
        assert_eq!(Constraint::parse("1.2.3").unwrap().to_string(), "=1.2.3");
    }
}
