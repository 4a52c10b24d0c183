//! Staleness test for the in operation.

use crate::fingerprint::Fingerprint;
use crate::version::Version;

/// Whether a requested version still describes the current membership.
///
/// Only the fingerprint component is compared: the disambiguator records when
/// a version was minted, not what it contains.
///
/// # Example
///
/// ```
/// use github_team_core::Fingerprint;
/// use github_team_core::Version;
/// use github_team_core::verified::is_requested_version_current;
///
/// let requested = Version::decode("aaaa-1583625600");
/// assert!(is_requested_version_current(&requested, &Fingerprint::from("aaaa")));
/// assert!(!is_requested_version_current(&requested, &Fingerprint::from("bbbb")));
/// ```
#[inline]
pub fn is_requested_version_current(requested: &Version, current: &Fingerprint) -> bool {
    requested.fingerprint() == current
}
