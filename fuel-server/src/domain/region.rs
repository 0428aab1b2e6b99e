//! Region code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest region code accepted.
const MAX_LEN: usize = 8;

/// Error returned when parsing an invalid region code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid region code {input:?}: {reason}")]
pub struct InvalidRegion {
    input: String,
    reason: &'static str,
}

/// A short administrative region code, such as a province ("MI", "RM").
///
/// Region codes are 1 to 8 ASCII letters or digits. They are stored in upper
/// case, and every comparison against user input ignores case.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::Region;
///
/// let mi = Region::parse("mi").unwrap();
/// assert_eq!(mi.as_str(), "MI");
/// assert!(mi.matches("Mi"));
///
/// assert!(Region::parse("").is_err());
/// assert!(Region::parse("M I").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Parse a region code, normalising it to upper case.
    pub fn parse(s: &str) -> Result<Self, InvalidRegion> {
        let reject = |reason| InvalidRegion {
            input: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(reject("must not be empty"));
        }
        if s.len() > MAX_LEN {
            return Err(reject("must be at most 8 characters"));
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(reject("must be ASCII letters or digits"));
        }

        Ok(Region(s.to_ascii_uppercase()))
    }

    /// Whether `query` names this region, ignoring case.
    ///
    /// Queries that are not valid region codes never match.
    pub fn matches(&self, query: &str) -> bool {
        self.0.eq_ignore_ascii_case(query)
    }

    /// Returns the canonical (upper case) code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Region {
    type Error = InvalidRegion;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Region::parse(&s)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
