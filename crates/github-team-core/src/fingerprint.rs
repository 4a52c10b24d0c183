//! Order-independent fingerprinting of team membership.
//!
//! A [`MembershipSnapshot`] is the sorted list of logins observed at one point
//! in time. Its [`Fingerprint`] is the lowercase hex SHA-256 of the logins
//! concatenated with no delimiter, so the digest depends only on which logins
//! are present and never on the order the API happened to return them in.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

use crate::constants::SHORT_FINGERPRINT_LEN;

/// Hex digest identifying one membership state.
///
/// Fingerprints decoded from persisted version tokens are not validated, so a
/// `Fingerprint` may hold any string. Comparison is plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of an already sorted list of logins.
    fn of_sorted(logins: &[String]) -> Self {
        let mut hasher = Sha256::new();
        for login in logins {
            hasher.update(login.as_bytes());
        }
        Self(hex::encode(hasher.finalize()))
    }

    /// The full digest string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters of the digest for log and error messages.
    ///
    /// ```
    /// use github_team_core::Fingerprint;
    ///
    /// let fp = Fingerprint::from("12a14115c9b3f5027ed3b983f1b9315c");
    /// assert_eq!(fp.short(), "12a14115");
    /// assert_eq!(Fingerprint::from("abc").short(), "abc");
    /// ```
    pub fn short(&self) -> String {
        self.0.chars().take(SHORT_FINGERPRINT_LEN).collect()
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sorted, deduplicated member logins of a team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSnapshot {
    logins: Vec<String>,
}

impl MembershipSnapshot {
    /// Build a snapshot from logins in any order.
    ///
    /// Logins are sorted by byte order. Duplicates (which the team API should
    /// never return, but can appear when pages shift mid-pagination) are
    /// collapsed.
    pub fn from_logins<I, S>(logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut logins: Vec<String> = logins.into_iter().map(Into::into).collect();
        logins.sort_unstable();
        logins.dedup();
        Self { logins }
    }

    /// Logins in sorted order.
    pub fn logins(&self) -> &[String] {
        &self.logins
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.logins.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    /// Fingerprint of this membership state.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of_sorted(&self.logins)
    }

    /// Render the member list file: one login per line, each newline-terminated.
    pub fn to_member_list(&self) -> String {
        let capacity = self.logins.iter().map(|login| login.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for login in &self.logins {
            out.push_str(login);
            out.push('\n');
        }
        out
    }
}
