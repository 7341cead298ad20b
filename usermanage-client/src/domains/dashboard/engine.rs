//! The dashboard query engine.
//!
//! Each fetch takes a sequence number; a result is applied only while its
//! sequence still matches the latest issued fetch, so a slow response
//! superseded by a newer query change is dropped instead of overwriting it.

use super::pagination;
use super::state::{filter_and_sort, DashboardState, EditForm};
use crate::errors::{ClientError, ClientResult};
use crate::infra::Backend;
use crate::session::SessionStore;
use log::{debug, info, warn};
use std::sync::Arc;
use usermanage_model::{
    query::total_pages, ListQuery, RoleFilter, RoleTier, UserPage,
};

/// Shown when a fetch is attempted with no stored token.
pub const NOT_LOGGED_IN_MESSAGE: &str = "You must be logged in first!";

/// Shown for any failed list fetch.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users. Please login first!";

/// The dashboard list view's state machine.
#[derive(Debug)]
pub struct Dashboard {
    backend: Arc<dyn Backend>,
    session: SessionStore,
    state: DashboardState,
    /// Sequence of the most recently issued fetch.
    latest_fetch: u64,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn Backend>, session: SessionStore) -> Self {
        Self {
            backend,
            session,
            state: DashboardState::default(),
            latest_fetch: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn query(&self) -> &ListQuery {
        &self.state.query
    }

    /// Replace the whole query without fetching. The next `refresh` runs
    /// against it.
    pub fn set_query(&mut self, query: ListQuery) {
        self.state.query = query;
    }

    /// Start a fetch for the current query. Fails fast with no network
    /// call when the session holds no token. Returns the fetch sequence
    /// and a snapshot of the query to run.
    pub fn begin_fetch(&mut self) -> Option<(u64, ListQuery)> {
        if self.session.token().is_none() {
            self.state.rows.clear();
            self.state.staff_on_page = 0;
            self.state.active_on_page = 0;
            self.state.loading = false;
            self.state.error = Some(NOT_LOGGED_IN_MESSAGE.to_string());
            return None;
        }
        self.latest_fetch += 1;
        self.state.loading = true;
        self.state.error = None;
        Some((self.latest_fetch, self.state.query.clone()))
    }

    /// Apply a fetch result. Stale results (sequence no longer the latest)
    /// are dropped and `false` is returned.
    pub fn apply_page(&mut self, seq: u64, result: ClientResult<UserPage>) -> bool {
        if seq != self.latest_fetch {
            debug!("Dropping stale list response (seq {seq}, latest {})", self.latest_fetch);
            return false;
        }
        self.state.loading = false;
        match result {
            Ok(page) => {
                self.state.staff_on_page = page
                    .results
                    .iter()
                    .filter(|row| row.role_tier() == RoleTier::Staff)
                    .count();
                self.state.active_on_page =
                    page.results.iter().filter(|row| row.is_active).count();
                self.state.total_users = page.count;
                self.state.total_pages = total_pages(page.count);
                self.state.rows = filter_and_sort(&page.results, &self.state.query);
                self.state.error = None;
                info!(
                    "Loaded page {} ({} of {} rows visible)",
                    self.state.query.page,
                    self.state.rows.len(),
                    page.results.len()
                );
            }
            Err(err) => {
                warn!("User list fetch failed: {err}");
                self.state.rows.clear();
                self.state.staff_on_page = 0;
                self.state.active_on_page = 0;
                self.state.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Fetch the current query and apply the result.
    pub async fn refresh(&mut self) {
        let Some((seq, query)) = self.begin_fetch() else {
            return;
        };
        let backend = Arc::clone(&self.backend);
        let result = backend.list_users(query.page, &query.search).await;
        self.apply_page(seq, result);
    }

    pub async fn set_search(&mut self, term: impl Into<String>) {
        self.state.query.set_search(term);
        self.refresh().await;
    }

    pub async fn set_role_filter(&mut self, filter: RoleFilter) {
        self.state.query.set_role_filter(filter);
        self.refresh().await;
    }

    pub async fn toggle_sort(&mut self) {
        self.state.query.toggle_sort_order();
        self.refresh().await;
    }

    pub async fn go_to_page(&mut self, page: u64) {
        let clamped = if self.state.total_pages > 0 {
            page.clamp(1, self.state.total_pages)
        } else {
            page.max(1)
        };
        self.state.query.set_page(clamped);
        self.refresh().await;
    }

    pub async fn next_page(&mut self) {
        let page = self.state.query.page;
        if page < self.state.total_pages {
            self.go_to_page(page + 1).await;
        }
    }

    pub async fn prev_page(&mut self) {
        let page = self.state.query.page;
        if page > 1 {
            self.go_to_page(page - 1).await;
        }
    }

    pub async fn jump_to_last_page(&mut self) {
        self.go_to_page(self.state.total_pages.max(1)).await;
    }

    /// Page numbers for the pager, per the five-wide sliding window.
    pub fn pagination_range(&self) -> Vec<u64> {
        pagination::pagination_range(self.state.query.page, self.state.total_pages)
    }

    pub fn show_jump_to_last(&self) -> bool {
        pagination::show_jump_to_last(self.state.query.page, self.state.total_pages)
    }

    /// Open the view-details modal for a visible row.
    pub fn select_user(&mut self, id: u64) -> bool {
        match self.state.rows.iter().find(|row| row.id == id) {
            Some(row) => {
                self.state.selected = Some(row.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_details(&mut self) {
        self.state.selected = None;
    }

    /// Deletion is never offered for superuser rows.
    pub fn can_delete(&self, id: u64) -> bool {
        self.state
            .rows
            .iter()
            .any(|row| row.id == id && !row.is_superuser)
    }

    /// Delete one row. Interactive confirmation happens upstream; the
    /// requery runs only after a successful round-trip.
    pub async fn delete_user(&mut self, id: u64) -> ClientResult<()> {
        if let Some(row) = self.state.rows.iter().find(|row| row.id == id) {
            if row.is_superuser {
                return Err(ClientError::ValidationFailed(
                    "Superuser accounts cannot be deleted".to_string(),
                ));
            }
        }
        let backend = Arc::clone(&self.backend);
        backend.delete_user(id).await?;
        info!("Deleted user {id}");
        self.refresh().await;
        Ok(())
    }

    /// Open the edit modal pre-filled from a visible row.
    pub fn begin_edit(&mut self, id: u64) -> bool {
        match self.state.rows.iter().find(|row| row.id == id) {
            Some(row) => {
                self.state.edit_form = Some(EditForm::from_row(row));
                true
            }
            None => false,
        }
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.state.edit_form.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.state.edit_form = None;
    }

    /// Submit the edit form: PATCH the full edited object, patch the local
    /// row from the server's returned copy, then requery so the local
    /// patch is superseded by authoritative state.
    pub async fn submit_edit(&mut self) -> ClientResult<()> {
        let Some(form) = self.state.edit_form.take() else {
            return Err(ClientError::ValidationFailed(
                "No edit in progress".to_string(),
            ));
        };
        let edited = form.to_row();
        let backend = Arc::clone(&self.backend);
        let updated = match backend.patch_user(edited.id, &edited).await {
            Ok(updated) => updated,
            Err(err) => {
                // Keep the form so the user can retry.
                self.state.edit_form = Some(form);
                return Err(err);
            }
        };
        if let Some(row) = self
            .state
            .rows
            .iter_mut()
            .find(|row| row.id == updated.id)
        {
            *row = updated.clone();
        }
        info!("Updated user {}", updated.id);
        self.refresh().await;
        Ok(())
    }
}
