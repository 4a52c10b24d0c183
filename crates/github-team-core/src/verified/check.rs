//! Version selection for the check operation.

use crate::fingerprint::Fingerprint;
use crate::version::Version;

/// Result of comparing the current membership against the previous version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No previous version was supplied; a new version was minted.
    First(Version),
    /// Membership differs from the previous version; a new version was minted.
    Changed(Version),
    /// Membership matches; the previous version is echoed verbatim.
    Unchanged(Version),
}

impl CheckOutcome {
    /// The version to report.
    pub fn version(&self) -> &Version {
        match self {
            Self::First(v) | Self::Changed(v) | Self::Unchanged(v) => v,
        }
    }

    /// Consume the outcome, keeping the version to report.
    pub fn into_version(self) -> Version {
        match self {
            Self::First(v) | Self::Changed(v) | Self::Unchanged(v) => v,
        }
    }
}

/// Choose the disambiguator for a newly minted version.
///
/// The result is strictly greater than the previous version's numeric
/// disambiguator. When the wall clock has not moved past it (a clock stepping
/// backwards, or two checks within the same second) the previous value is
/// bumped by one, so a membership that reverts still gets a distinct token.
///
/// # Example
///
/// ```
/// use github_team_core::verified::next_disambiguator;
///
/// assert_eq!(next_disambiguator(200, None), 200);
/// assert_eq!(next_disambiguator(200, Some(100)), 200);
/// assert_eq!(next_disambiguator(100, Some(200)), 201);
/// assert_eq!(next_disambiguator(200, Some(200)), 201);
/// ```
#[inline]
pub const fn next_disambiguator(now_secs: u64, previous_secs: Option<u64>) -> u64 {
    match previous_secs {
        Some(previous) if previous >= now_secs => previous.saturating_add(1),
        _ => now_secs,
    }
}

/// Decide which version a check reports.
///
/// If there is no previous version, or its fingerprint differs from
/// `current`, a new version `current-<disambiguator>` is minted. Otherwise the
/// previous version is returned unchanged, which is the only way the
/// orchestrator can recognise "no change" once tokens carry a timestamp.
///
/// # Example
///
/// ```
/// use github_team_core::Fingerprint;
/// use github_team_core::Version;
/// use github_team_core::verified::CheckOutcome;
/// use github_team_core::verified::decide_check_version;
///
/// let current = Fingerprint::from("aaaa");
///
/// let first = decide_check_version(&current, None, 10);
/// assert_eq!(first, CheckOutcome::First(Version::decode("aaaa-10")));
///
/// let again = decide_check_version(&current, Some(first.version()), 20);
/// assert_eq!(again, CheckOutcome::Unchanged(Version::decode("aaaa-10")));
///
/// let changed = decide_check_version(&Fingerprint::from("bbbb"), Some(again.version()), 30);
/// assert_eq!(changed, CheckOutcome::Changed(Version::decode("bbbb-30")));
/// ```
pub fn decide_check_version(current: &Fingerprint, previous: Option<&Version>, now_secs: u64) -> CheckOutcome {
    match previous {
        None => CheckOutcome::First(Version::new(current.clone(), now_secs)),
        Some(previous) if previous.fingerprint() == current => CheckOutcome::Unchanged(previous.clone()),
        Some(previous) => {
            let disambiguator = next_disambiguator(now_secs, previous.captured_at_secs());
            CheckOutcome::Changed(Version::new(current.clone(), disambiguator))
        }
    }
}
