use super::{Member, MemberId, MemberName};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Keyed storage of members with identifier generation.
///
/// `save` assigns the next identifier to a member without one. Identifiers
/// start at 1, grow by 1 and are never handed out twice by the same store.
/// The store performs no name uniqueness check; that rule belongs to
/// `MembershipService`. Lookups report absence as `Ok(None)`.
#[async_trait::async_trait]
pub trait MemberStore {
    async fn save(&mut self, member: Member) -> Result<Member, MemberStoreError>;
    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError>;
    /// First match in insertion order.
    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError>;
    /// All members in insertion order.
    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
