//! Core data model definitions shared across UserManage crates.

pub mod api;
pub mod query;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use api::{
    ApiErrorDetail, LoginRequest, LoginResponse, ProfileUpdate,
    RegisterErrors, RegisterRequest, UserPage,
};
pub use query::{ListQuery, RoleFilter, SortOrder, PAGE_SIZE};
pub use user::{Profile, RoleTier, UserRow};
