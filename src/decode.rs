// src/decode.rs
use crate::domain_already_exists::DomainAlreadyExists;
use crate::status::Status;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// The typed error family raised by the domain registry.
///
/// Open by design: new kinds add a variant here and a decoder to `DECODERS`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    DomainAlreadyExists(#[from] DomainAlreadyExists),
}

impl ServiceError {
    pub fn to_status(&self) -> Status {
        match self {
            ServiceError::DomainAlreadyExists(err) => err.to_status(),
        }
    }
}

type DecodeFn = fn(&Status) -> Option<ServiceError>;

/// Ordered decode registry, one entry per kind. Kinds sharing a status code
/// are disambiguated by their failure payload, so each entry either claims
/// the status or cleanly passes.
const DECODERS: &[DecodeFn] = &[decode_domain_already_exists];

fn decode_domain_already_exists(status: &Status) -> Option<ServiceError> {
    DomainAlreadyExists::from_status(status).map(ServiceError::from)
}

/// Reconstructs a typed error from a received status, if any kind claims it.
///
/// An absent status or one no registered kind recognizes yields `None`;
/// callers fall back to treating the status as an untyped failure.
pub fn decode(status: Option<&Status>) -> Option<ServiceError> {
    let status = status?;
    DECODERS.iter().find_map(|decoder| decoder(status))
}
