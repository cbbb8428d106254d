mod get_member;
mod get_members;
mod register_member;
