// src/status.rs
use crate::failure::Failure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status codes carried on the wire by the error family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Code {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    DeadlineExceeded,
    Internal,
    Unavailable,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::InvalidArgument => "invalid-argument",
            Code::NotFound => "not-found",
            Code::AlreadyExists => "already-exists",
            Code::PermissionDenied => "permission-denied",
            Code::DeadlineExceeded => "deadline-exceeded",
            Code::Internal => "internal",
            Code::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level status: a code, a human-readable message, and zero or more
/// structured detail payloads.
///
/// Details are kept in their serialized form. A status decoded off the wire
/// re-encodes byte-identically, and payloads this crate does not know about
/// (attached by a newer peer) pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub code: Code,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Value>,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Appends the given failure payloads in serialized form.
    ///
    /// A payload that fails to serialize is logged and dropped; the status is
    /// still returned so the code and message always make it onto the wire.
    /// The decode side will then miss that discriminant, so callers relying
    /// on kind dispatch see a plain status instead.
    #[must_use]
    pub fn with_details<I>(mut self, failures: I) -> Self
    where
        I: IntoIterator<Item = Failure>,
    {
        for failure in failures {
            match serde_json::to_value(&failure) {
                Ok(value) => self.details.push(value),
                Err(err) => {
                    tracing::warn!(error = %err, "dropping unserializable status detail");
                }
            }
        }
        self
    }

    /// First attached detail that is a known failure payload, if any.
    pub fn failure(&self) -> Option<Failure> {
        self.details
            .iter()
            .find_map(|detail| serde_json::from_value(detail.clone()).ok())
    }
}
