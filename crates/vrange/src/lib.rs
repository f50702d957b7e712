//! Universal version range parsing, normalization and interval algebra
//!
//! This crate parses version ranges written in the native syntaxes of
//! several package ecosystems (npm caret and tilde ranges, RubyGems
//! pessimistic constraints, Maven and NuGet bracket notation, Debian and
//! RPM relations, pypi specifier lists) into one exact interval algebra,
//! and encodes any range in the canonical `vers:<scheme>/<constraints>`
//! wire format.
//!
//! ```
//! use vrange::{Vers, Version};
//!
//! let range = Vers::parse_native("^1.2.3", "npm").unwrap();
//! assert!(range.contains(&Version::parse("1.9.9").unwrap()));
//! assert_eq!(Vers::to_vers_string(&range, "npm"), "vers:npm/>=1.2.3|<2.0.0");
//! ```

pub mod constraint;
pub mod scheme;

mod cache;
mod comparator;
mod interval;
mod range;
mod vers;
mod version;

pub use cache::ParseCache;
pub use comparator::Comparator;
pub use constraint::{Constraint, ConstraintError, InvalidOperatorError, Operator};
pub use interval::Interval;
pub use range::VersionRange;
pub use scheme::{Scheme, SyntaxError};
pub use vers::Vers;
pub use version::{Component, Version, VersionError};
