//! Error types for the team membership resource.
//!
//! Every failure is terminal for the invocation: the binary prints
//! `[ERROR] <message>` to stderr and exits with status 1. Messages for the
//! configuration, transport and staleness cases are part of the resource's
//! user-facing contract and are asserted in tests.

use std::path::PathBuf;

use github_team_core::Fingerprint;
use snafu::Snafu;

/// Result type for resource operations.
pub type Result<T, E = ResourceError> = std::result::Result<T, E>;

/// Team membership resource errors.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ResourceError {
    // ========================================================================
    // Request Errors
    // ========================================================================
    /// A required `source` field is absent, null or empty.
    #[snafu(display("{field} is not set"))]
    MissingSourceField {
        /// Name of the field as it appears in the request JSON.
        field: &'static str,
    },

    /// The in request carries no version.
    #[snafu(display("version is not set"))]
    MissingVersion,

    /// Failed to read the request from stdin.
    #[snafu(display("failed to read request from stdin: {source}"))]
    ReadRequest {
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The request is not valid JSON of the expected shape.
    #[snafu(display("malformed request JSON: {source}"))]
    ParseRequest {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// `source.api_url` is not a usable base URL.
    #[snafu(display("invalid GitHub API URL {url}: {reason}"))]
    InvalidApiUrl {
        /// URL as supplied.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Failed to construct the HTTP client.
    #[snafu(display("failed to build HTTP client: {source}"))]
    BuildHttpClient {
        /// Underlying client error.
        source: reqwest::Error,
    },

    /// The request never produced a response.
    #[snafu(display("HTTPError when calling GitHub API: {source}"))]
    HttpRequest {
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[snafu(display("HTTPError when calling GitHub API: {status} for url: {url}"))]
    HttpStatus {
        /// Status returned by the API.
        status: reqwest::StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// The response body is not a list of members.
    #[snafu(display("failed to decode team members from {url}: {source}"))]
    DecodeMembers {
        /// URL that was requested.
        url: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },

    /// Pagination did not terminate within the page bound.
    #[snafu(display("team membership exceeds {max_pages} pages"))]
    TooManyPages {
        /// Maximum pages followed.
        max_pages: u32,
    },

    /// A pagination link points away from the configured API host.
    #[snafu(display("refusing to follow pagination link to another host: {url}"))]
    ForeignPageLink {
        /// Link target.
        url: String,
    },

    // ========================================================================
    // Consistency Errors
    // ========================================================================
    /// Membership changed between check and in.
    #[snafu(display(
        "Requested version ({}) does not match current version ({}). \
         The team membership was probably updated between the check and the get.",
        requested.short(),
        current.short()
    ))]
    StaleVersion {
        /// Fingerprint decoded from the requested version.
        requested: Fingerprint,
        /// Fingerprint of the membership observed now.
        current: Fingerprint,
    },

    // ========================================================================
    // Output Errors
    // ========================================================================
    /// Failed to create the destination directory.
    #[snafu(display("failed to create destination directory {}: {source}", path.display()))]
    CreateDestination {
        /// Destination directory.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to write the member list.
    #[snafu(display("failed to write member list to {}: {source}", path.display()))]
    WriteMembers {
        /// File being written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to serialize the response.
    #[snafu(display("failed to encode response: {source}"))]
    EncodeResponse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to write the response to stdout.
    #[snafu(display("failed to write response to stdout: {source}"))]
    WriteResponse {
        /// Underlying IO error.
        source: std::io::Error,
    },
}
