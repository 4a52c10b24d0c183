//! Test support utilities for the team membership resource.
//!
//! - [`fake_members`]: scripted in-memory membership source
//! - [`fake_github`]: in-process HTTP server speaking the team members API
//! - request builders shared by the check and in tests

#![allow(dead_code)]

pub mod fake_github;
pub mod fake_members;

use github_team_resource::protocol::CheckRequest;
use github_team_resource::protocol::InRequest;
use serde_json::Value;
use serde_json::json;

/// Fingerprint of `{"Sarah", "Duck", "Bread Man"}`.
pub const SARAH_DUCK_BREAD_MAN: &str = "12a14115c9b3f5027ed3b983f1b9315cdf48239d807f5c50294e95312c6ae0c1";

/// Source block used throughout the tests.
pub fn source_json() -> Value {
    json!({
        "auth_user": "Scarf Lady",
        "auth_token": "shhhhh",
        "org": "Flamingo",
        "team": "John"
    })
}

/// Build a check request from a source and an optional previous version token.
pub fn check_request(source: Value, version: Option<&str>) -> CheckRequest {
    let mut request = json!({ "source": source });
    if let Some(hash) = version {
        request["version"] = json!({ "hash": hash });
    }
    serde_json::from_value(request).expect("valid check request")
}

/// Build an in request from a source and an optional requested version token.
pub fn in_request(source: Value, version: Option<&str>) -> InRequest {
    let mut request = json!({ "source": source, "params": {} });
    if let Some(hash) = version {
        request["version"] = json!({ "hash": hash });
    }
    serde_json::from_value(request).expect("valid in request")
}

/// The source with one field nulled out.
pub fn source_without(field: &str) -> Value {
    let mut source = source_json();
    source[field] = Value::Null;
    source
}
