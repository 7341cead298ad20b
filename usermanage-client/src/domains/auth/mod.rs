//! Auth domain: login, registration, and logout.
//!
//! Each view is a single request/response machine that moves
//! `Idle -> Submitting -> {Success, Failed}` and surfaces failures as an
//! inline message; retries are manual.

mod login;
mod logout;
mod register;

pub use login::LoginView;
pub use logout::logout;
pub use register::{RegisterForm, RegisterView, REDIRECT_DELAY};

/// Progress of a single request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}
