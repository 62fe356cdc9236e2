// src/domain_already_exists.rs
use crate::failure::Failure;
use crate::status::{Code, Status};
use std::fmt;

/// Raised when a caller tries to register a domain that already exists.
///
/// The value is immutable after construction. A freshly raised error carries
/// only its message; an error decoded off the wire also keeps the original
/// status, so re-encoding it returns the sender's status unchanged, extra
/// details and all.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainAlreadyExists {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Fresh { message: String },
    Decoded { message: String, status: Status },
}

impl DomainAlreadyExists {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            repr: Repr::Fresh {
                message: message.into(),
            },
        }
    }

    pub fn message(&self) -> &str {
        match &self.repr {
            Repr::Fresh { message } | Repr::Decoded { message, .. } => message,
        }
    }

    /// Wire status for this error.
    ///
    /// Decoded instances return the received status as-is. Fresh instances
    /// build an `already-exists` status carrying this kind's marker payload.
    pub fn to_status(&self) -> Status {
        match &self.repr {
            Repr::Decoded { status, .. } => status.clone(),
            Repr::Fresh { message } => Status::new(Code::AlreadyExists, message.clone())
                .with_details([Failure::domain_already_exists()]),
        }
    }

    /// Reconstructs the error from a received status.
    ///
    /// Claims the status only when both the code and an attached marker
    /// payload match this kind; anything else is `None` so that sibling
    /// decoders sharing the code can have their turn.
    pub fn from_status(status: &Status) -> Option<Self> {
        if status.code != Code::AlreadyExists {
            return None;
        }
        match status.failure() {
            Some(Failure::DomainAlreadyExistsFailure {}) => Some(Self {
                repr: Repr::Decoded {
                    message: status.message.clone(),
                    status: status.clone(),
                },
            }),
            _ => None,
        }
    }
}

impl fmt::Display for DomainAlreadyExists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for DomainAlreadyExists {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_passes_through_verbatim() {
        let err = DomainAlreadyExists::new("domain 'billing' already registered");
        assert_eq!(err.message(), "domain 'billing' already registered");
        assert_eq!(err.to_string(), "domain 'billing' already registered");

        let empty = DomainAlreadyExists::new("");
        assert_eq!(empty.message(), "");
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn fresh_status_carries_one_marker_payload() {
        let status = DomainAlreadyExists::new("taken").to_status();
        assert_eq!(status.code, Code::AlreadyExists);
        assert_eq!(status.message, "taken");
        assert_eq!(status.details.len(), 1);
        assert_eq!(status.failure(), Some(Failure::domain_already_exists()));
    }

    #[test]
    fn from_status_rejects_other_codes() {
        let status =
            Status::new(Code::NotFound, "taken").with_details([Failure::domain_already_exists()]);
        assert_eq!(DomainAlreadyExists::from_status(&status), None);
    }

    #[test]
    fn from_status_rejects_missing_or_foreign_payloads() {
        let bare = Status::new(Code::AlreadyExists, "taken");
        assert_eq!(DomainAlreadyExists::from_status(&bare), None);

        let sibling = Status::new(Code::AlreadyExists, "taken").with_details([
            Failure::WorkflowExecutionAlreadyStartedFailure {
                start_request_id: "req-1".into(),
                run_id: "run-1".into(),
            },
        ]);
        assert_eq!(DomainAlreadyExists::from_status(&sibling), None);
    }

    #[test]
    fn decoded_instance_re_encodes_the_original_status() {
        let mut wire = DomainAlreadyExists::new("taken").to_status();
        // Extra metadata from the sender must survive the round trip.
        wire.details.push(serde_json::json!({ "requestId": "r-9" }));

        let decoded = DomainAlreadyExists::from_status(&wire).unwrap();
        assert_eq!(decoded.message(), "taken");

        let first = serde_json::to_vec(&decoded.to_status()).unwrap();
        let second = serde_json::to_vec(&decoded.to_status()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, serde_json::to_vec(&wire).unwrap());
    }
}
