//! Resource source configuration.
//!
//! The orchestrator passes the pipeline's `source:` block verbatim in every
//! request. All fields are optional at parse time so that a missing field is
//! reported by name instead of as a JSON error.
//!
//! ```yaml
//! resources:
//!   - name: reviewers
//!     type: github-team
//!     source:
//!       auth_user: ci-bot
//!       auth_token: ((github-token))
//!       org: my-org
//!       team: reviewers
//!       # api_url: https://github.example.com/api/v3
//! ```

use std::fmt;

use reqwest::Url;
use serde::Deserialize;
use snafu::ensure;

use crate::constants::DEFAULT_API_URL;
use crate::constants::MEMBERS_PER_PAGE;
use crate::error::InvalidApiUrlSnafu;
use crate::error::MissingSourceFieldSnafu;
use crate::error::Result;

/// Raw `source` block as supplied by the orchestrator.
///
/// A required field set to the empty string is treated the same as an absent
/// or `null` one: [`Source::validate`] reports it as not set.
#[derive(Clone, Default, Deserialize)]
pub struct Source {
    /// Basic-auth user.
    #[serde(default)]
    pub auth_user: Option<String>,
    /// Basic-auth password or personal access token.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Organisation slug.
    #[serde(default)]
    pub org: Option<String>,
    /// Team slug.
    #[serde(default)]
    pub team: Option<String>,
    /// API base URL, for GitHub Enterprise.
    #[serde(default)]
    pub api_url: Option<String>,
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("auth_user", &self.auth_user)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("org", &self.org)
            .field("team", &self.team)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Source {
    /// Check that every required field is present.
    ///
    /// Fields are checked in the order `auth_user`, `auth_token`, `org`,
    /// `team`; the first missing one is reported. Empty strings count as
    /// missing.
    pub fn validate(&self) -> Result<ValidatedSource> {
        let auth_user = required(&self.auth_user, "auth_user")?;
        let auth_token = required(&self.auth_token, "auth_token")?;
        let org = required(&self.org, "org")?;
        let team = required(&self.team, "team")?;
        let api_url = parse_api_url(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;

        Ok(ValidatedSource {
            auth_user,
            auth_token,
            org,
            team,
            api_url,
        })
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => MissingSourceFieldSnafu { field }.fail(),
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        InvalidApiUrlSnafu {
            url: raw,
            reason: e.to_string(),
        }
        .build()
    })?;
    ensure!(
        matches!(url.scheme(), "http" | "https"),
        InvalidApiUrlSnafu {
            url: raw,
            reason: "scheme must be http or https",
        }
    );
    ensure!(
        !url.cannot_be_a_base(),
        InvalidApiUrlSnafu {
            url: raw,
            reason: "not a base URL",
        }
    );
    Ok(url)
}

/// Source with every required field present.
#[derive(Clone)]
pub struct ValidatedSource {
    /// Basic-auth user.
    pub auth_user: String,
    /// Basic-auth password or token. Never logged.
    pub auth_token: String,
    /// Organisation slug.
    pub org: String,
    /// Team slug.
    pub team: String,
    /// API base URL.
    pub api_url: Url,
}

impl ValidatedSource {
    /// URL of the first page of team members.
    ///
    /// ```
    /// use github_team_resource::source::Source;
    ///
    /// let source = Source {
    ///     auth_user: Some("u".into()),
    ///     auth_token: Some("t".into()),
    ///     org: Some("Flamingo".into()),
    ///     team: Some("John".into()),
    ///     api_url: None,
    /// };
    /// let url = source.validate().unwrap().members_url();
    /// assert_eq!(url.as_str(), "https://api.github.com/orgs/Flamingo/teams/John/members?per_page=100");
    /// ```
    pub fn members_url(&self) -> Url {
        let mut url = self.api_url.clone();
        // validate() rejects URLs that cannot be a base, so path_segments_mut succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["orgs", self.org.as_str(), "teams", self.team.as_str(), "members"]);
        }
        url.query_pairs_mut().clear().append_pair("per_page", &MEMBERS_PER_PAGE.to_string());
        url
    }
}

impl fmt::Debug for ValidatedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedSource")
            .field("auth_user", &self.auth_user)
            .field("auth_token", &"<redacted>")
            .field("org", &self.org)
            .field("team", &self.team)
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}
