//! GitHub team membership resource.
//!
//! Exposes the membership of one GitHub team as a versioned pipeline
//! resource with two operations:
//!
//! - [`check`](check::check): report the current version, echoing the previous
//!   one when nothing changed
//! - [`fetch`](fetch::fetch): write the member list for a requested version,
//!   refusing if membership moved on since check
//!
//! Version derivation lives in [`github_team_core`]; this crate adds the
//! request/response protocol, the GitHub client, and the file output.

pub mod check;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod github;
pub mod logging;
pub mod protocol;
pub mod source;

pub use error::ResourceError;
pub use error::Result;
pub use github::GithubClient;
pub use github::MembershipSource;
