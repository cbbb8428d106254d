use color_eyre::eyre::eyre;

use crate::{
    app_state::MemberStoreType,
    domain::{Member, MemberId, MemberStore, MemberStoreError, MembershipError},
};

/// Registration and lookup of members on top of a shared `MemberStore`.
///
/// `register` holds the store's write lock across the duplicate check and the
/// save, so two registrations of the same name through handles that share
/// one store can never both succeed. Separate processes writing to the same
/// database are not covered by that lock.
#[derive(Clone)]
pub struct MembershipService {
    member_store: MemberStoreType,
}

impl MembershipService {
    pub fn new(member_store: MemberStoreType) -> Self {
        Self { member_store }
    }

    #[tracing::instrument(name = "Registering member", skip_all)]
    pub async fn register(
        &self,
        member: Member,
    ) -> Result<MemberId, MembershipError> {
        let mut member_store = self.member_store.write().await;

        validate_duplicate_member(&*member_store, &member).await?;

        // Ids are always assigned by the store, never taken from the caller
        let saved = member_store.save(Member::new(member.name)).await?;
        let id = saved.id.ok_or_else(|| {
            MemberStoreError::UnexpectedError(eyre!(
                "store returned a member without an id"
            ))
        })?;

        tracing::info!(member_id = %id, "member registered");
        Ok(id)
    }

    #[tracing::instrument(name = "Listing members", skip_all)]
    pub async fn list_members(&self) -> Result<Vec<Member>, MembershipError> {
        Ok(self.member_store.read().await.find_all().await?)
    }

    #[tracing::instrument(name = "Finding member", skip(self))]
    pub async fn find_one(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MembershipError> {
        Ok(self.member_store.read().await.find_by_id(id).await?)
    }
}

async fn validate_duplicate_member(
    member_store: &(dyn MemberStore + Send + Sync),
    member: &Member,
) -> Result<(), MembershipError> {
    match member_store.find_by_name(&member.name).await? {
        Some(_) => {
            tracing::debug!(name = %member.name, "duplicate member name");
            Err(MembershipError::DuplicateName(member.name.clone()))
        }
        None => Ok(()),
    }
}
