use crate::domain::{Member, MemberId, MemberName, MemberStore, MemberStoreError};
use color_eyre::eyre::eyre;
use std::collections::HashMap;

/// In-process member store. `members` keeps insertion order, `index` maps
/// each id to its slot in `members`.
#[derive(Default)]
pub struct HashmapMemberStore {
    members: Vec<Member>,
    index: HashMap<MemberId, usize>,
    sequence: i64,
}

impl HashmapMemberStore {
    /// Drops every member. The id sequence is kept, so ids are never reused.
    pub fn clear_store(&mut self) {
        self.members.clear();
        self.index.clear();
    }
}

#[async_trait::async_trait]
impl MemberStore for HashmapMemberStore {
    #[tracing::instrument(name = "Saving member in memory", skip_all)]
    async fn save(&mut self, member: Member) -> Result<Member, MemberStoreError> {
        let id = match member.id {
            Some(id) => {
                self.sequence = self.sequence.max(*id.as_ref());
                id
            }
            None => {
                self.sequence = self.sequence.checked_add(1).ok_or_else(|| {
                    MemberStoreError::UnexpectedError(eyre!(
                        "member id sequence exhausted"
                    ))
                })?;
                MemberId::new(self.sequence)
            }
        };
        let member = Member::with_id(id, member.name);

        match self.index.get(&id) {
            Some(&slot) => self.members[slot] = member.clone(),
            None => {
                self.index.insert(id, self.members.len());
                self.members.push(member.clone());
            }
        }

        Ok(member)
    }

    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError> {
        Ok(self
            .index
            .get(id)
            .map(|&slot| self.members[slot].clone()))
    }

    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError> {
        Ok(self
            .members
            .iter()
            .find(|member| &member.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        Ok(self.members.clone())
    }
}
