//! Backend trait for server communication.
//!
//! The domain state machines depend on this seam rather than on the HTTP
//! client directly, so tests can drive them against a scripted backend.

use crate::errors::ClientResult;
use async_trait::async_trait;
use usermanage_model::{
    LoginRequest, LoginResponse, Profile, ProfileUpdate, RegisterRequest,
    UserPage, UserRow,
};

/// Operations the REST backend exposes to this client.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Exchange credentials for a token and role flags.
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// Invalidate the current token server-side.
    async fn logout(&self) -> ClientResult<()>;

    /// Create a new account.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;

    /// Fetch the authenticated user's profile.
    async fn get_profile(&self) -> ClientResult<Profile>;

    /// Full-replace update of the profile; returns the server's copy.
    async fn put_profile(&self, update: &ProfileUpdate) -> ClientResult<Profile>;

    /// One server page of users for the given page number and search term.
    async fn list_users(&self, page: u64, search: &str) -> ClientResult<UserPage>;

    /// Delete one user by id.
    async fn delete_user(&self, id: u64) -> ClientResult<()>;

    /// Partial update carrying the full edited row; returns the server's
    /// authoritative copy.
    async fn patch_user(&self, id: u64, row: &UserRow) -> ClientResult<UserRow>;
}

impl std::fmt::Debug for dyn Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Backend")
    }
}
