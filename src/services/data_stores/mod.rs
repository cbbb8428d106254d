mod hashmap_member_store;
mod postgres_member_store;

pub use hashmap_member_store::HashmapMemberStore;
pub use postgres_member_store::PostgresMemberStore;
