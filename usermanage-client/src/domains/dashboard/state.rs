//! Dashboard view state and the client-side filter/sort pass.

use usermanage_model::{ListQuery, RoleTier, SortOrder, UserRow};

/// Edit-modal form, pre-filled from the selected row. The role is edited
/// through a single tri-state selector that maps back onto the two
/// mutually exclusive boolean flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: RoleTier,
    pub is_active: bool,
}

impl EditForm {
    pub fn from_row(row: &UserRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            email: row.email.clone(),
            role: row.role_tier(),
            is_active: row.is_active,
        }
    }

    /// The full edited object the partial-update request carries.
    pub fn to_row(&self) -> UserRow {
        let (is_superuser, is_staff) = self.role.to_flags();
        UserRow {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            is_staff,
            is_superuser,
            is_active: self.is_active,
        }
    }
}

/// State of the dashboard list view.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Rows after the client-side role filter and sort.
    pub rows: Vec<UserRow>,
    /// Unfiltered total for the current search, from the server. Drives
    /// pagination; may exceed the visible row count when a role filter is
    /// active.
    pub total_users: u64,
    pub total_pages: u64,
    /// Staff-tier rows on the fetched page (before filtering).
    pub staff_on_page: usize,
    /// Active accounts on the fetched page (before filtering).
    pub active_on_page: usize,
    pub query: ListQuery,
    pub loading: bool,
    pub error: Option<String>,
    /// Row shown in the view-details modal.
    pub selected: Option<UserRow>,
    pub edit_form: Option<EditForm>,
}

impl DashboardState {
    /// Rows actually displayed, scoped to the active role filter so the
    /// table never claims more rows than it shows.
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Apply the role filter, then a stable case-insensitive sort on first
/// name in the requested direction.
pub fn filter_and_sort(rows: &[UserRow], query: &ListQuery) -> Vec<UserRow> {
    let mut filtered: Vec<UserRow> = rows
        .iter()
        .filter(|row| query.role_filter.matches(row))
        .cloned()
        .collect();

    match query.sort_order {
        SortOrder::Asc => filtered.sort_by(|a, b| {
            a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase())
        }),
        SortOrder::Desc => filtered.sort_by(|a, b| {
            b.first_name.to_lowercase().cmp(&a.first_name.to_lowercase())
        }),
    }
    filtered
}
