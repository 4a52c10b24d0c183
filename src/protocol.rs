//! Request and response shapes exchanged with the orchestrator.
//!
//! Requests arrive as one JSON document on stdin and responses leave as one
//! JSON document on stdout, newline-terminated. Nothing else may be written
//! to stdout.

use std::io::Read;
use std::io::Write;

use github_team_core::Version;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;

use crate::error::EncodeResponseSnafu;
use crate::error::ParseRequestSnafu;
use crate::error::ReadRequestSnafu;
use crate::error::Result;
use crate::error::WriteResponseSnafu;
use crate::source::Source;

/// Version object as the orchestrator stores it: `{"hash": "<token>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRef {
    /// Version token.
    pub hash: Version,
}

impl From<Version> for VersionRef {
    fn from(hash: Version) -> Self {
        Self { hash }
    }
}

/// Input to the check operation.
#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    /// Resource configuration.
    #[serde(default)]
    pub source: Option<Source>,
    /// Latest version the orchestrator knows about, absent on the first check.
    #[serde(default)]
    pub version: Option<VersionRef>,
}

/// Output of the check operation: the versions to record, oldest first.
pub type CheckResponse = Vec<VersionRef>;

/// Input to the in operation.
#[derive(Debug, Default, Deserialize)]
pub struct InRequest {
    /// Resource configuration.
    #[serde(default)]
    pub source: Option<Source>,
    /// Version to fetch.
    #[serde(default)]
    pub version: Option<VersionRef>,
    /// Step parameters. Accepted for protocol compatibility; none are defined.
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Name/value pair shown by the orchestrator next to a fetched version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    /// Label.
    pub name: String,
    /// Value.
    pub value: String,
}

impl MetadataField {
    /// Create a metadata entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Output of the in operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InResponse {
    /// Version that was fetched.
    pub version: VersionRef,
    /// Display metadata.
    pub metadata: Vec<MetadataField>,
}

/// Read and parse a request document.
pub fn read_request<T: DeserializeOwned>(mut reader: impl Read) -> Result<T> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).context(ReadRequestSnafu)?;
    serde_json::from_str(&raw).context(ParseRequestSnafu)
}

/// Serialize a response document followed by a newline.
pub fn write_response<T: Serialize>(mut writer: impl Write, response: &T) -> Result<()> {
    let mut encoded = serde_json::to_vec(response).context(EncodeResponseSnafu)?;
    encoded.push(b'\n');
    writer.write_all(&encoded).context(WriteResponseSnafu)?;
    writer.flush().context(WriteResponseSnafu)
}
