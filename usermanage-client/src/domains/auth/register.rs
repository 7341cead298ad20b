//! Registration view state machine.

use super::SubmitState;
use crate::errors::ClientError;
use crate::infra::Backend;
use crate::shell::Route;
use log::warn;
use std::time::Duration;
use usermanage_model::RegisterRequest;

/// How long the success message stays up before navigating to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

const SUCCESS_MESSAGE: &str =
    "Registration successful! Please check your email for confirmation.";
const MISMATCH_MESSAGE: &str = "Passwords do not match!";
const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to the server!";

/// Registration form fields.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

/// State of the registration view.
#[derive(Debug, Clone, Default)]
pub struct RegisterView {
    pub form: RegisterForm,
    pub state: SubmitState,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl RegisterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. The password/confirm check runs before any network
    /// call. On success the form is cleared and the caller navigates to
    /// the returned route after [`REDIRECT_DELAY`].
    pub async fn submit(&mut self, backend: &dyn Backend) -> Option<Route> {
        self.error = None;
        self.success = None;

        if self.form.password != self.form.confirm_password {
            self.state = SubmitState::Failed;
            self.error = Some(MISMATCH_MESSAGE.to_string());
            return None;
        }

        self.state = SubmitState::Submitting;
        match backend.register(&self.form.to_request()).await {
            Ok(()) => {
                self.state = SubmitState::Success;
                self.success = Some(SUCCESS_MESSAGE.to_string());
                self.form = RegisterForm::default();
                Some(Route::Login)
            }
            Err(ClientError::ValidationFailed(message)) => {
                self.state = SubmitState::Failed;
                self.error = Some(message);
                None
            }
            Err(err) => {
                warn!("Registration request failed: {err}");
                self.state = SubmitState::Failed;
                self.error = Some(CONNECT_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}
