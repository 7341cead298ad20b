//! Shared scripted backend for integration tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use usermanage_client::{Backend, ClientError, ClientResult};
use usermanage_model::{
    LoginRequest, LoginResponse, Profile, ProfileUpdate, RegisterRequest,
    UserPage, UserRow, PAGE_SIZE,
};

/// In-memory backend that pages and searches a fixed user collection the
/// way the server does, with switches for scripting failures.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub users: Mutex<Vec<UserRow>>,
    pub profile: Mutex<Option<Profile>>,
    /// Credentials accepted by `login`.
    pub valid_login: Option<(String, String)>,
    pub login_is_superuser: bool,
    pub login_is_staff: bool,
    pub fail_logout: bool,
    pub forbid_profile: bool,
    pub register_error: Option<String>,
    pub list_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub patch_calls: AtomicUsize,
    pub fail_list: AtomicBool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRow>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            valid_login: Some((username.to_string(), password.to_string())),
            ..Self::default()
        }
    }
}

/// Build a plain-user row with a deterministic name and email.
pub fn user_row(id: u64, first_name: &str) -> UserRow {
    UserRow {
        id,
        first_name: first_name.to_string(),
        last_name: "Example".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        is_staff: false,
        is_superuser: false,
        is_active: true,
    }
}

fn matches_search(row: &UserRow, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    row.first_name.to_lowercase().contains(&needle)
        || row.last_name.to_lowercase().contains(&needle)
        || row.email.to_lowercase().contains(&needle)
}

#[async_trait]
impl Backend for MockBackend {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        match &self.valid_login {
            Some((username, password))
                if username == &request.username && password == &request.password =>
            {
                Ok(LoginResponse {
                    token: "test-token".to_string(),
                    is_superuser: self.login_is_superuser,
                    is_staff: self.login_is_staff,
                })
            }
            _ => Err(ClientError::ValidationFailed(
                "Invalid credentials".to_string(),
            )),
        }
    }

    async fn logout(&self) -> ClientResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            Err(ClientError::FetchFailed("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    async fn register(&self, _request: &RegisterRequest) -> ClientResult<()> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        match &self.register_error {
            Some(message) => Err(ClientError::ValidationFailed(message.clone())),
            None => Ok(()),
        }
    }

    async fn get_profile(&self) -> ClientResult<Profile> {
        if self.forbid_profile {
            return Err(ClientError::Forbidden);
        }
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::FetchFailed("no profile".to_string()))
    }

    async fn put_profile(&self, update: &ProfileUpdate) -> ClientResult<Profile> {
        let mut guard = self.profile.lock().unwrap();
        let profile = guard
            .as_mut()
            .ok_or_else(|| ClientError::FetchFailed("no profile".to_string()))?;
        profile.username = update.username.clone();
        profile.first_name = update.first_name.clone();
        profile.last_name = update.last_name.clone();
        profile.email = update.email.clone();
        Ok(profile.clone())
    }

    async fn list_users(&self, page: u64, search: &str) -> ClientResult<UserPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::FetchFailed("boom".to_string()));
        }
        let users = self.users.lock().unwrap();
        let filtered: Vec<UserRow> = users
            .iter()
            .filter(|row| matches_search(row, search))
            .cloned()
            .collect();
        let count = filtered.len() as u64;
        let start = ((page.max(1) - 1) * PAGE_SIZE) as usize;
        let results = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE as usize)
            .collect();
        Ok(UserPage { count, results })
    }

    async fn delete_user(&self, id: u64) -> ClientResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|row| row.id != id);
        if users.len() == before {
            Err(ClientError::FetchFailed("not found".to_string()))
        } else {
            Ok(())
        }
    }

    async fn patch_user(&self, id: u64, row: &UserRow) -> ClientResult<UserRow> {
        self.patch_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.lock().unwrap();
        let target = users
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| ClientError::FetchFailed("not found".to_string()))?;
        *target = row.clone();
        Ok(target.clone())
    }
}
