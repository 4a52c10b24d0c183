//! Team membership source backed by the GitHub REST API.
//!
//! # Architecture
//!
//! ```text
//! check / in                    GithubClient
//! ┌──────────────────┐          ┌─────────────────────────────────────┐
//! │ fetch_snapshot() │─────────►│ GET /orgs/{org}/teams/{team}/members│
//! └──────────────────┘          │   basic auth, pinned Accept header  │
//!          │                    │   follow Link: rel="next"           │
//!          ▼                    └─────────────────────────────────────┘
//!  MembershipSnapshot
//! ```
//!
//! [`MembershipSource`] is the seam tests use to substitute a fake API.

use async_trait::async_trait;
use github_team_core::MembershipSnapshot;
use reqwest::Url;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderMap;
use reqwest::header::LINK;
use serde::Deserialize;
use snafu::ResultExt;
use snafu::ensure;
use tracing::debug;
use tracing::info;

use crate::constants::GITHUB_ACCEPT_HEADER;
use crate::constants::MAX_MEMBER_PAGES;
use crate::constants::REQUEST_TIMEOUT;
use crate::constants::USER_AGENT;
use crate::error::BuildHttpClientSnafu;
use crate::error::DecodeMembersSnafu;
use crate::error::ForeignPageLinkSnafu;
use crate::error::HttpRequestSnafu;
use crate::error::HttpStatusSnafu;
use crate::error::Result;
use crate::error::TooManyPagesSnafu;
use crate::source::ValidatedSource;

/// Something that can list the logins of a team.
#[async_trait]
pub trait MembershipSource: Send + Sync {
    /// Logins of every member of the team described by `source`, in any order.
    async fn list_team_members(&self, source: &ValidatedSource) -> Result<Vec<String>>;
}

/// Fetch a team's membership and normalise it into a snapshot.
pub async fn fetch_snapshot<S>(members: &S, source: &ValidatedSource) -> Result<MembershipSnapshot>
where
    S: MembershipSource + ?Sized,
{
    info!(org = %source.org, team = %source.team, "Fetching team membership");
    let logins = members.list_team_members(source).await?;
    let snapshot = MembershipSnapshot::from_logins(logins);
    info!(count = snapshot.len(), members = ?snapshot.logins(), "Team members");
    Ok(snapshot)
}

/// One entry of the team members listing. Only the login is used.
#[derive(Debug, Deserialize)]
struct TeamMember {
    login: String,
}

/// HTTP client for the team members endpoint.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    max_pages: u32,
}

impl GithubClient {
    /// Create a client with the default timeout and page bound.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context(BuildHttpClientSnafu)?;
        Ok(Self {
            http,
            max_pages: MAX_MEMBER_PAGES,
        })
    }

    /// Override the maximum number of pages followed.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    async fn fetch_page(&self, source: &ValidatedSource, url: &Url) -> Result<(Vec<TeamMember>, Option<Url>)> {
        let response = self
            .http
            .get(url.clone())
            .basic_auth(&source.auth_user, Some(&source.auth_token))
            .header(ACCEPT, GITHUB_ACCEPT_HEADER)
            .send()
            .await
            .context(HttpRequestSnafu)?;

        let status = response.status();
        ensure!(
            status.is_success(),
            HttpStatusSnafu {
                status,
                url: url.as_str(),
            }
        );

        let next = next_page_url(response.headers(), url);
        let members = response.json().await.context(DecodeMembersSnafu { url: url.as_str() })?;
        Ok((members, next))
    }
}

#[async_trait]
impl MembershipSource for GithubClient {
    async fn list_team_members(&self, source: &ValidatedSource) -> Result<Vec<String>> {
        let first = source.members_url();
        let mut url = first.clone();
        let mut logins = Vec::new();

        for page in 1..=self.max_pages {
            let (members, next) = self.fetch_page(source, &url).await?;
            debug!(page, count = members.len(), "fetched team members page");
            logins.extend(members.into_iter().map(|m| m.login));

            let Some(next) = next else {
                return Ok(logins);
            };
            // Credentials are attached to every page request.
            ensure!(next.origin() == first.origin(), ForeignPageLinkSnafu { url: next.as_str() });
            url = next;
        }

        TooManyPagesSnafu {
            max_pages: self.max_pages,
        }
        .fail()
    }
}

/// Extract the `rel="next"` target from a `Link` header.
///
/// Relative targets are resolved against the URL of the page that carried the
/// header.
pub fn next_page_url(headers: &HeaderMap, current: &Url) -> Option<Url> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|link| parse_next_link(link, current))
}

fn parse_next_link(link: &str, current: &Url) -> Option<Url> {
    let mut parts = link.split(';');
    let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;
    let is_next = parts.any(|param| {
        let Some((key, value)) = param.split_once('=') else {
            return false;
        };
        key.trim().eq_ignore_ascii_case("rel")
            && value.trim().trim_matches('"').split_whitespace().any(|rel| rel == "next")
    });
    if is_next { current.join(target).ok() } else { None }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn current() -> Url {
        Url::parse("https://api.github.com/orgs/o/teams/t/members?per_page=100").unwrap()
    }

    fn headers(link: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        headers
    }

    #[test]
    fn no_link_header_means_last_page() {
        assert_eq!(next_page_url(&HeaderMap::new(), &current()), None);
    }

    #[test]
    fn github_style_link_header() {
        let link = "<https://api.github.com/organizations/1/team/2/members?per_page=100&page=2>; rel=\"next\", \
                    <https://api.github.com/organizations/1/team/2/members?per_page=100&page=5>; rel=\"last\"";
        let next = next_page_url(&headers(link), &current()).unwrap();
        assert_eq!(next.as_str(), "https://api.github.com/organizations/1/team/2/members?per_page=100&page=2");
    }

    #[test]
    fn last_page_has_only_prev_and_first() {
        let link = "<https://api.github.com/x?page=4>; rel=\"prev\", <https://api.github.com/x?page=1>; rel=\"first\"";
        assert_eq!(next_page_url(&headers(link), &current()), None);
    }

    #[test]
    fn relative_target_is_resolved() {
        let next = next_page_url(&headers("</orgs/o/teams/t/members?page=2>; rel=next"), &current()).unwrap();
        assert_eq!(next.as_str(), "https://api.github.com/orgs/o/teams/t/members?page=2");
    }

    #[test]
    fn rel_with_multiple_values() {
        let next = next_page_url(&headers("<https://api.github.com/x?page=2>; rel=\"next last\""), &current());
        assert!(next.is_some());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let link = "garbage, <https://api.github.com/x?page=2>; rel=\"next\"";
        assert!(next_page_url(&headers(link), &current()).is_some());
    }
}
