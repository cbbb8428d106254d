use super::{MemberId, MemberName};

/// A registered person. `id` stays `None` until a store persists the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Option<MemberId>,
    pub name: MemberName,
}

impl Member {
    pub fn new(name: MemberName) -> Self {
        Self { id: None, name }
    }

    pub fn with_id(id: MemberId, name: MemberName) -> Self {
        Self { id: Some(id), name }
    }
}
