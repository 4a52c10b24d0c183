//! The in operation: materialise a version's member list.
//!
//! Membership is fetched again and compared with the requested version before
//! anything is written. If the team changed since check reported the version,
//! the fetch fails rather than writing a member list that does not belong to
//! that version; the orchestrator then re-runs check.

use std::path::Path;
use std::path::PathBuf;

use github_team_core::MembershipSnapshot;
use github_team_core::verified::is_requested_version_current;
use snafu::OptionExt;
use snafu::ResultExt;
use snafu::ensure;
use tokio::fs;
use tracing::info;

use crate::constants::MEMBERS_FILE_NAME;
use crate::error::CreateDestinationSnafu;
use crate::error::MissingVersionSnafu;
use crate::error::Result;
use crate::error::StaleVersionSnafu;
use crate::error::WriteMembersSnafu;
use crate::github::MembershipSource;
use crate::github::fetch_snapshot;
use crate::protocol::InRequest;
use crate::protocol::InResponse;
use crate::protocol::MetadataField;

/// Run an in operation, writing `team-members` into `destination`.
pub async fn fetch<S>(members: &S, destination: &Path, request: InRequest) -> Result<InResponse>
where
    S: MembershipSource + ?Sized,
{
    let source = request.source.unwrap_or_default().validate()?;
    let requested = request.version.context(MissingVersionSnafu)?;

    let snapshot = fetch_snapshot(members, &source).await?;
    let current = snapshot.fingerprint();
    ensure!(
        is_requested_version_current(&requested.hash, &current),
        StaleVersionSnafu {
            requested: requested.hash.fingerprint().clone(),
            current,
        }
    );

    let path = write_member_list(destination, &snapshot).await?;
    info!(path = %path.display(), count = snapshot.len(), "wrote team members");

    Ok(InResponse {
        version: requested,
        metadata: vec![
            MetadataField::new("organisation", source.org),
            MetadataField::new("team", source.team),
        ],
    })
}

/// Write the member list atomically: a temporary file in `destination` is
/// renamed over the final name, so a failed write never leaves a partial list.
/// The temporary file is removed if either step fails.
async fn write_member_list(destination: &Path, snapshot: &MembershipSnapshot) -> Result<PathBuf> {
    fs::create_dir_all(destination).await.context(CreateDestinationSnafu {
        path: destination.to_path_buf(),
    })?;

    let path = destination.join(MEMBERS_FILE_NAME);
    let tmp_path = destination.join(format!(".{MEMBERS_FILE_NAME}.tmp"));

    let written = match fs::write(&tmp_path, snapshot.to_member_list()).await {
        Ok(()) => fs::rename(&tmp_path, &path).await.map_err(|e| (e, path.clone())),
        Err(e) => Err((e, tmp_path.clone())),
    };

    if let Err((source, failed)) = written {
        // A failed write can leave a partial temporary file behind.
        let _ = fs::remove_file(&tmp_path).await;
        return Err(source).context(WriteMembersSnafu { path: failed });
    }

    Ok(path)
}
