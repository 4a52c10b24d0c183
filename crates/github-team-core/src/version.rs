//! Version token codec.
//!
//! A version token is what the orchestrator stores between polls. It has two
//! accepted shapes:
//!
//! ```text
//! <fingerprint>                       bare
//! <fingerprint>-<unix seconds>        disambiguated
//! ```
//!
//! New versions are always disambiguated. Bare tokens are still decoded so
//! that previously persisted versions keep working: they are simply versions
//! without a disambiguator.
//!
//! Decoding never fails. Whatever follows the first separator is kept as-is,
//! and [`fmt::Display`] reproduces the original token exactly, which lets the
//! check operation echo a previous version verbatim.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::VERSION_SEPARATOR;
use crate::fingerprint::Fingerprint;

/// Structured form of a version token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Version {
    fingerprint: Fingerprint,
    disambiguator: Option<String>,
}

impl Version {
    /// Create a disambiguated version captured at `captured_at_secs`.
    pub fn new(fingerprint: Fingerprint, captured_at_secs: u64) -> Self {
        Self {
            fingerprint,
            disambiguator: Some(captured_at_secs.to_string()),
        }
    }

    /// Create a version carrying only a fingerprint.
    pub fn bare(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            disambiguator: None,
        }
    }

    /// Decode a persisted token.
    ///
    /// ```
    /// use github_team_core::Version;
    ///
    /// let v = Version::decode("12a14115-1583625600");
    /// assert_eq!(v.fingerprint().as_str(), "12a14115");
    /// assert_eq!(v.captured_at_secs(), Some(1_583_625_600));
    ///
    /// let bare = Version::decode("12a14115");
    /// assert_eq!(bare.fingerprint().as_str(), "12a14115");
    /// assert_eq!(bare.disambiguator(), None);
    /// ```
    pub fn decode(token: &str) -> Self {
        match token.split_once(VERSION_SEPARATOR) {
            Some((fingerprint, disambiguator)) => Self {
                fingerprint: Fingerprint::from(fingerprint),
                disambiguator: Some(disambiguator.to_string()),
            },
            None => Self::bare(Fingerprint::from(token)),
        }
    }

    /// Fingerprint component.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Raw disambiguator component, if any.
    pub fn disambiguator(&self) -> Option<&str> {
        self.disambiguator.as_deref()
    }

    /// Disambiguator as Unix seconds, when it is numeric.
    pub fn captured_at_secs(&self) -> Option<u64> {
        self.disambiguator.as_deref().and_then(|d| d.parse().ok())
    }

    /// Render the token.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.disambiguator {
            Some(disambiguator) => write!(f, "{}{}{}", self.fingerprint, VERSION_SEPARATOR, disambiguator),
            None => write!(f, "{}", self.fingerprint),
        }
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self::decode(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}
