use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{domain::MemberStore, services::MembershipService};

pub type MemberStoreType = Arc<RwLock<dyn MemberStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub membership_service: MembershipService,
}

impl AppState {
    pub fn new(membership_service: MembershipService) -> Self {
        Self { membership_service }
    }
}
