//! Logout flow.

use crate::infra::Backend;
use crate::session::SessionStore;
use crate::shell::Route;
use log::warn;

/// Log out: best-effort server call, then clear the session and navigate
/// to login. The session is cleared whether or not the backend call
/// succeeds. With no stored token the network call is skipped entirely.
pub async fn logout(backend: &dyn Backend, session: &SessionStore) -> Route {
    if session.token().is_some() {
        if let Err(err) = backend.logout().await {
            warn!("Logout request failed: {err}");
        }
    }
    session.clear_session();
    Route::Login
}
