//! Constants for talking to the GitHub API and laying out fetched output.

use std::time::Duration;

/// API base used when the source does not override `api_url`.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type pinning the REST API version.
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a user agent.
pub const USER_AGENT: &str = concat!("github-team-resource/", env!("CARGO_PKG_VERSION"));

// Tiger Style: bounded resource limits
/// Timeout for a single page request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Members requested per page (the API maximum).
pub const MEMBERS_PER_PAGE: u32 = 100;
/// Maximum pages followed for one team (10 000 members).
pub const MAX_MEMBER_PAGES: u32 = 100;

/// File written into the destination directory by the in operation.
pub const MEMBERS_FILE_NAME: &str = "team-members";
