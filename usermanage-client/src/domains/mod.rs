//! Domain state machines, one module per view.

pub mod auth;
pub mod dashboard;
pub mod profile;
