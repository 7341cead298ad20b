//! Session state: the auth token and role flags every view reads.

mod state;
mod storage;

pub use state::{Session, SessionStore};
pub use storage::SessionStorage;
