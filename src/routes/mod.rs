mod get_member;
mod get_members;
mod register_member;

pub use get_member::*;
pub use get_members::*;
pub use register_member::*;
