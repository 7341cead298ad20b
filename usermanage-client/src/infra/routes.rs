//! Backend endpoint paths.
//!
//! These mirror the server's URL table exactly, including the misspelled
//! `dashbord` segment the deployed backend actually serves.

/// Account endpoints.
pub mod account {
    /// Credential login, returns the token and role flags.
    pub const LOGIN: &str = "/account/login/";
    /// Token-authenticated logout.
    pub const LOGOUT: &str = "/account/logout/";
    /// New account registration.
    pub const REGISTER: &str = "/account/register/";
    /// Own profile, GET and PUT.
    pub const PROFILE: &str = "/account/profile/";
}

/// Dashboard endpoints.
pub mod dashboard {
    /// Paged user list; takes `page` and `search` query parameters.
    pub const USERS: &str = "/dashbord/users/";

    /// Single-user path for DELETE and PATCH.
    pub fn user(id: u64) -> String {
        format!("/dashbord/users/{id}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_path_has_trailing_slash() {
        assert_eq!(dashboard::user(42), "/dashbord/users/42/");
    }
}
