//! The check operation: report the current version of the team.
//!
//! The orchestrator calls check on every poll with the last version it saw.
//! Exactly one version is returned. When membership is unchanged it is the
//! previous version verbatim; otherwise it is a freshly stamped
//! `fingerprint-seconds` token, so even a membership that reverts to an
//! earlier state is reported as new.

use github_team_core::Clock;
use github_team_core::verified::CheckOutcome;
use github_team_core::verified::decide_check_version;
use tracing::debug;
use tracing::info;

use crate::error::Result;
use crate::github::MembershipSource;
use crate::github::fetch_snapshot;
use crate::protocol::CheckRequest;
use crate::protocol::CheckResponse;
use crate::protocol::VersionRef;

/// Run a check.
///
/// The source is validated before any request is made.
pub async fn check<S, C>(members: &S, clock: &C, request: CheckRequest) -> Result<CheckResponse>
where
    S: MembershipSource + ?Sized,
    C: Clock + ?Sized,
{
    let source = request.source.unwrap_or_default().validate()?;
    let previous = request.version.map(|v| v.hash);

    let snapshot = fetch_snapshot(members, &source).await?;
    let current = snapshot.fingerprint();
    debug!(
        current = %current,
        previous = ?previous.as_ref().map(ToString::to_string),
        "comparing membership fingerprints"
    );

    let outcome = decide_check_version(&current, previous.as_ref(), clock.now_unix_secs());
    match &outcome {
        CheckOutcome::First(version) => info!(version = %version, "no previous version, reporting current membership"),
        CheckOutcome::Changed(version) => info!(version = %version, "team membership changed"),
        CheckOutcome::Unchanged(version) => info!(version = %version, "team membership unchanged"),
    }

    Ok(vec![VersionRef::from(outcome.into_version())])
}
