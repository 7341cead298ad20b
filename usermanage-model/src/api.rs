//! Request and response DTOs for the backend account and dashboard APIs.

use crate::user::UserRow;
use serde::{Deserialize, Serialize};

/// `POST /account/login/` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: the opaque token plus the two role flags the
/// client persists for nav gating.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_staff: bool,
}

/// Generic error body the backend returns on auth failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// `POST /account/register/` body. The confirm field is sent through to the
/// server even though the client checks the match first.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field errors the backend reports on registration, each as a list of
/// messages in Django style. The client surfaces the first one it finds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterErrors {
    #[serde(default)]
    pub username: Vec<String>,
    #[serde(default)]
    pub email: Vec<String>,
    #[serde(default)]
    pub password: Vec<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl RegisterErrors {
    /// First reported error, in the precedence the form displays:
    /// username, email, password, then the generic detail.
    pub fn first_message(&self) -> Option<&str> {
        self.username
            .first()
            .or_else(|| self.email.first())
            .or_else(|| self.password.first())
            .map(String::as_str)
            .or(self.detail.as_deref())
    }
}

/// `PUT /account/profile/` body: full replace of the four editable fields.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// `GET /dashbord/users/` response: one server page plus the unfiltered
/// total count for the query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPage {
    pub count: u64,
    pub results: Vec<UserRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_error_precedence() {
        let errors = RegisterErrors {
            username: vec![],
            email: vec!["email already in use".into()],
            password: vec!["too short".into()],
            detail: Some("bad request".into()),
        };
        assert_eq!(errors.first_message(), Some("email already in use"));

        let detail_only = RegisterErrors {
            detail: Some("bad request".into()),
            ..Default::default()
        };
        assert_eq!(detail_only.first_message(), Some("bad request"));

        assert_eq!(RegisterErrors::default().first_message(), None);
    }

    #[test]
    fn user_page_deserializes() {
        let json = r#"{
            "count": 23,
            "results": [
                {
                    "id": 1,
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "is_staff": false,
                    "is_superuser": true,
                    "is_active": true
                }
            ]
        }"#;
        let page: UserPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 23);
        assert_eq!(page.results.len(), 1);
    }
}
