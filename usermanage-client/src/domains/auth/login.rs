//! Login view state machine.

use super::SubmitState;
use crate::errors::ClientError;
use crate::infra::Backend;
use crate::session::SessionStore;
use crate::shell::Route;
use log::{info, warn};
use usermanage_model::LoginRequest;

const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// State of the login form.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    pub state: SubmitState,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the credentials. On success the session store is written and
    /// the caller navigates to the returned route.
    pub async fn submit(
        &mut self,
        backend: &dyn Backend,
        session: &SessionStore,
    ) -> Option<Route> {
        self.state = SubmitState::Submitting;
        self.error = None;

        let request = LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };

        match backend.login(&request).await {
            Ok(response) => {
                session.set_session(
                    response.token,
                    response.is_superuser,
                    response.is_staff,
                );
                info!("Login succeeded for {}", self.username);
                self.state = SubmitState::Success;
                Some(Route::Home)
            }
            Err(ClientError::ValidationFailed(message)) => {
                self.state = SubmitState::Failed;
                self.error = Some(message);
                None
            }
            Err(err) => {
                warn!("Login request failed: {err}");
                self.state = SubmitState::Failed;
                self.error = Some(GENERIC_ERROR.to_string());
                None
            }
        }
    }
}
