//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{
    delete_member, find_all_members, find_member, health_check, join_member, login_member,
    logout_member, update_member,
};
