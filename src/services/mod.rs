pub mod data_stores;
pub mod membership_service;

pub use membership_service::MembershipService;
