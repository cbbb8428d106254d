use axum::extract::rejection::JsonRejection;
use color_eyre::eyre::Report;
use thiserror::Error;

use super::{MemberId, MemberName, MemberStoreError};

#[derive(Debug, Error)]
pub enum MembershipError {
    #[error("Member name already registered: {0}")]
    DuplicateName(MemberName),
    #[error("Member store error")]
    StoreError(#[from] MemberStoreError),
}

impl PartialEq for MembershipError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateName(a), Self::DuplicateName(b)) => a == b,
            (Self::StoreError(a), Self::StoreError(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum MemberAPIError {
    #[error("Member name already registered: {0}")]
    DuplicateNameError(MemberName),
    #[error("Member with ID not found: {0}")]
    IDNotFoundError(MemberId),
    #[error("Malformed request body")]
    MalformedRequestError(#[from] JsonRejection),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
