// src/failure.rs
use serde::{Deserialize, Serialize};

/// Structured detail payloads attached to a wire status.
///
/// Several error kinds share a status code; the payload tag is what tells
/// them apart on the decode side. A variant with no fields is a pure marker:
/// the tag alone carries the meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Failure {
    DomainAlreadyExistsFailure {},
    WorkflowExecutionAlreadyStartedFailure {
        start_request_id: String,
        run_id: String,
    },
}

impl Failure {
    pub fn domain_already_exists() -> Self {
        Failure::DomainAlreadyExistsFailure {}
    }
}
