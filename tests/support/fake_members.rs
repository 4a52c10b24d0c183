//! Scripted membership source.
//!
//! Responses are served in order; the last one repeats once the script is
//! exhausted. Every call is counted so tests can assert that validation
//! failures never reach the network.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use github_team_resource::MembershipSource;
use github_team_resource::ResourceError;
use github_team_resource::Result;
use github_team_resource::source::ValidatedSource;
use reqwest::StatusCode;

#[derive(Debug, Clone)]
enum Scripted {
    Members(Vec<String>),
    Status(StatusCode),
}

/// In-memory [`MembershipSource`].
#[derive(Debug)]
pub struct FakeMembers {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl FakeMembers {
    fn from_script(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always return the same members.
    pub fn returning(members: &[&str]) -> Self {
        Self::sequence(&[members])
    }

    /// Return each membership in turn, repeating the last.
    pub fn sequence(responses: &[&[&str]]) -> Self {
        Self::from_script(
            responses
                .iter()
                .map(|members| Scripted::Members(members.iter().map(|m| m.to_string()).collect())),
        )
    }

    /// Fail every call with an HTTP status.
    pub fn failing(status: StatusCode) -> Self {
        Self::from_script([Scripted::Status(status)])
    }

    /// Number of times the source was queried.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MembershipSource for FakeMembers {
    async fn list_team_members(&self, source: &ValidatedSource) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = {
            let mut script = self.script.lock().expect("script lock poisoned");
            if script.len() > 1 { script.pop_front() } else { script.front().cloned() }
        };

        match next.expect("FakeMembers has an empty script") {
            Scripted::Members(members) => Ok(members),
            Scripted::Status(status) => Err(ResourceError::HttpStatus {
                status,
                url: source.members_url().to_string(),
            }),
        }
    }
}
