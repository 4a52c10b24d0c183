//! In-process stand-in for the GitHub team members endpoint.
//!
//! Serves `GET /orgs/{org}/teams/{team}/members?page=N` from a fixed list of
//! pages, emitting GitHub-style `Link: <...>; rel="next"` headers, and records
//! the headers of every request it receives.

use std::sync::Arc;
use std::sync::Mutex;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

/// Headers and query of one received request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub org: String,
    pub team: String,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

/// How the fake server behaves.
#[derive(Debug, Clone, Default)]
pub struct FakeGithubConfig {
    /// Member logins per page.
    pub pages: Vec<Vec<String>>,
    /// Fail every request with this status instead.
    pub status: Option<StatusCode>,
    /// Point the first page's `next` link at another host.
    pub foreign_next_link: bool,
}

impl FakeGithubConfig {
    /// Serve the given pages.
    pub fn with_pages(pages: &[&[&str]]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.iter().map(|m| m.to_string()).collect()).collect(),
            ..Self::default()
        }
    }

    /// Fail with `status`.
    pub fn failing(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

struct FakeState {
    config: FakeGithubConfig,
    base_url: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u32>,
    per_page: Option<u32>,
}

/// Running fake server.
pub struct FakeGithub {
    /// Base URL to use as `source.api_url`.
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeGithub {
    /// Bind to an ephemeral localhost port and start serving.
    pub async fn start(config: FakeGithubConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake github");
        let addr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{addr}");

        let state = Arc::new(FakeState {
            config,
            base_url: base_url.clone(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/orgs/:org/teams/:team/members", get(list_members))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake github server");
        });

        Self { base_url, state }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock poisoned").clone()
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

async fn list_members(
    State(state): State<Arc<FakeState>>,
    Path((org, team)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().expect("requests lock poisoned").push(RecordedRequest {
        org: org.clone(),
        team: team.clone(),
        page: query.page,
        per_page: query.per_page,
        authorization: header_string(&headers, header::AUTHORIZATION),
        accept: header_string(&headers, header::ACCEPT),
        user_agent: header_string(&headers, header::USER_AGENT),
    });

    if let Some(status) = state.config.status {
        return (status, "Oh no...").into_response();
    }

    let page = query.page.unwrap_or(1).max(1) as usize;
    let logins = state.config.pages.get(page - 1).cloned().unwrap_or_default();
    let body = Json(logins.iter().map(|login| json!({ "login": login, "type": "User" })).collect::<Vec<_>>());

    if page < state.config.pages.len() {
        let host = if state.config.foreign_next_link {
            "http://elsewhere.invalid"
        } else {
            state.base_url.as_str()
        };
        let link = format!(
            "<{host}/orgs/{org}/teams/{team}/members?per_page=100&page={next}>; rel=\"next\", \
             <{host}/orgs/{org}/teams/{team}/members?per_page=100&page={last}>; rel=\"last\"",
            next = page + 1,
            last = state.config.pages.len(),
        );
        ([(header::LINK, link)], body).into_response()
    } else {
        body.into_response()
    }
}
