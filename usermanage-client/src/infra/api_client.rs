//! HTTP client for the UserManage backend.
//!
//! One shared `reqwest::Client` with a fixed timeout; the auth token is
//! read from the session store at call time, never cached, so a logout
//! affects every subsequent request immediately.

use crate::config::{Config, REQUEST_TIMEOUT};
use crate::errors::{ClientError, ClientResult};
use crate::infra::backend::Backend;
use crate::infra::routes;
use crate::session::SessionStore;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use usermanage_model::{
    ApiErrorDetail, LoginRequest, LoginResponse, Profile, ProfileUpdate,
    RegisterErrors, RegisterRequest, UserPage, UserRow,
};

/// API client bound to a session store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.session.token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client. Fails only if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &Config, session: SessionStore) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                ClientError::FetchFailed(format!("failed to create HTTP client: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the `Token` auth header, failing fast without a network call
    /// when no token is stored.
    fn authed(&self, builder: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self.session.token().ok_or(ClientError::Unauthenticated)?;
        Ok(builder.header("Authorization", format!("Token {token}")))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        Ok(response.json::<T>().await?)
    }

    fn status_error(status: StatusCode) -> ClientError {
        ClientError::FetchFailed(format!("server returned {status}"))
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let url = self.build_url(routes::account::LOGIN);
        debug!("POST {url}");

        let response = self.client.post(&url).json(request).send().await?;
        if response.status().is_success() {
            Self::read_json(response).await
        } else {
            let body: ApiErrorDetail = response.json().await.unwrap_or_default();
            let message = body.detail.unwrap_or_else(|| "Invalid credentials".to_string());
            Err(ClientError::ValidationFailed(message))
        }
    }

    async fn logout(&self) -> ClientResult<()> {
        let url = self.build_url(routes::account::LOGOUT);
        debug!("POST {url}");

        let request = self.authed(self.client.post(&url))?;
        let response = request.send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response.status()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let url = self.build_url(routes::account::REGISTER);
        debug!("POST {url}");

        let response = self.client.post(&url).json(request).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            let errors: RegisterErrors = response.json().await.unwrap_or_default();
            let message = errors
                .first_message()
                .unwrap_or("Something went wrong!")
                .to_string();
            Err(ClientError::ValidationFailed(message))
        }
    }

    async fn get_profile(&self) -> ClientResult<Profile> {
        let url = self.build_url(routes::account::PROFILE);
        debug!("GET {url}");

        let request = self.authed(self.client.get(&url))?;
        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Self::read_json(response).await,
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden),
            status => Err(Self::status_error(status)),
        }
    }

    async fn put_profile(&self, update: &ProfileUpdate) -> ClientResult<Profile> {
        let url = self.build_url(routes::account::PROFILE);
        debug!("PUT {url}");

        let request = self.authed(self.client.put(&url).json(update))?;
        let response = request.send().await?;
        match response.status() {
            status if status.is_success() => Self::read_json(response).await,
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden),
            status => Err(Self::status_error(status)),
        }
    }

    async fn list_users(&self, page: u64, search: &str) -> ClientResult<UserPage> {
        let url = self.build_url(routes::dashboard::USERS);
        debug!("GET {url}?page={page}&search={search}");

        let request = self.authed(
            self.client
                .get(&url)
                .query(&[("page", page.to_string().as_str()), ("search", search)]),
        )?;
        let response = request.send().await?;
        if response.status().is_success() {
            Self::read_json(response).await
        } else {
            Err(Self::status_error(response.status()))
        }
    }

    async fn delete_user(&self, id: u64) -> ClientResult<()> {
        let url = self.build_url(&routes::dashboard::user(id));
        debug!("DELETE {url}");

        let request = self.authed(self.client.delete(&url))?;
        let response = request.send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response.status()))
        }
    }

    async fn patch_user(&self, id: u64, row: &UserRow) -> ClientResult<UserRow> {
        let url = self.build_url(&routes::dashboard::user(id));
        debug!("PATCH {url}");

        let request = self.authed(self.client.patch(&url).json(row))?;
        let response = request.send().await?;
        if response.status().is_success() {
            Self::read_json(response).await
        } else {
            Err(Self::status_error(response.status()))
        }
    }
}
