//! Client for the UserManage admin backend.
//!
//! Presentation-free port of the admin panel's state layer: a persisted
//! session store with subscribe/notify, a reqwest API client, and one
//! state machine per view (login, registration, logout, profile, and the
//! dashboard user list with search, role filter, sort, and pagination).
//! All business logic lives in the REST backend; this crate only
//! synchronizes client state with it.

pub mod config;
pub mod domains;
pub mod errors;
pub mod infra;
pub mod session;
pub mod shell;

pub use config::Config;
pub use errors::{ClientError, ClientResult};
pub use infra::{ApiClient, Backend};
pub use session::{Session, SessionStore};
pub use shell::Route;
