mod decode;
mod domain_already_exists;
mod failure;
mod status;

pub use crate::decode::{ServiceError, ServiceResult, decode};
pub use crate::domain_already_exists::DomainAlreadyExists;
pub use crate::failure::Failure;
pub use crate::status::{Code, Status};
