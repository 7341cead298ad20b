//! Profile view: fetch and full-replace save of the own-account profile.
//!
//! Username and email are displayed but not editable; they still travel in
//! the submitted payload because the backend expects the full object.

use crate::errors::ClientError;
use crate::infra::Backend;
use crate::session::SessionStore;
use log::warn;
use usermanage_model::{Profile, ProfileUpdate};

pub const LOGIN_FIRST_MESSAGE: &str = "Please login first!";
pub const FORBIDDEN_MESSAGE: &str = "Access forbidden. Please login again.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch profile data!";
pub const UPDATE_LOGIN_MESSAGE: &str =
    "You must be logged in to update your profile!";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile!";
pub const UPDATED_MESSAGE: &str = "Profile updated successfully!";

/// Editable form state; only the two name fields are user-editable.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }

    fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// State of the profile view.
#[derive(Debug, Clone, Default)]
pub struct ProfileView {
    pub profile: Option<Profile>,
    pub form: ProfileForm,
    pub edit_mode: bool,
    pub loading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ProfileView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the profile. A forbidden response gets its own message; a
    /// missing token fails without a network call.
    pub async fn load(&mut self, backend: &dyn Backend, session: &SessionStore) {
        self.error = None;
        if session.token().is_none() {
            self.error = Some(LOGIN_FIRST_MESSAGE.to_string());
            return;
        }
        match backend.get_profile().await {
            Ok(profile) => {
                self.form = ProfileForm::from_profile(&profile);
                self.profile = Some(profile);
            }
            Err(ClientError::Forbidden) => {
                warn!("Profile fetch forbidden");
                self.error = Some(FORBIDDEN_MESSAGE.to_string());
            }
            Err(err) => {
                warn!("Profile fetch failed: {err}");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn begin_edit(&mut self) {
        self.edit_mode = true;
        self.message = None;
    }

    /// Leave edit mode, discarding unsaved changes.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = false;
        if let Some(profile) = &self.profile {
            self.form = ProfileForm::from_profile(profile);
        }
    }

    /// Save the form as a full-replace update. On success the local
    /// profile is replaced by the server's returned object.
    pub async fn save(&mut self, backend: &dyn Backend, session: &SessionStore) {
        self.error = None;
        self.message = None;
        if session.token().is_none() {
            self.error = Some(UPDATE_LOGIN_MESSAGE.to_string());
            return;
        }
        self.loading = true;
        match backend.put_profile(&self.form.to_update()).await {
            Ok(updated) => {
                self.form = ProfileForm::from_profile(&updated);
                self.profile = Some(updated);
                self.message = Some(UPDATED_MESSAGE.to_string());
                self.edit_mode = false;
            }
            Err(err) => {
                warn!("Profile update failed: {err}");
                self.error = Some(UPDATE_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }
}
