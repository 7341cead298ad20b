//! Dashboard list-query state.
//!
//! `ListQuery` drives each fetch of the user list: the server receives the
//! page number and search term, while the role filter and sort order are
//! applied client-side to the page the server returns.

use crate::user::{RoleTier, UserRow};
use std::fmt;

/// Fixed server page size for the user list endpoint.
pub const PAGE_SIZE: u64 = 10;

/// Role filter selected in the dashboard dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Superuser,
    Staff,
    User,
}

impl RoleFilter {
    pub fn all() -> &'static [RoleFilter] {
        &[
            RoleFilter::All,
            RoleFilter::Superuser,
            RoleFilter::Staff,
            RoleFilter::User,
        ]
    }

    /// Whether a row passes this filter under the exclusive tier rules.
    pub fn matches(&self, row: &UserRow) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Superuser => row.role_tier() == RoleTier::Superuser,
            RoleFilter::Staff => row.role_tier() == RoleTier::Staff,
            RoleFilter::User => row.role_tier() == RoleTier::User,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleFilter::All => "All",
            RoleFilter::Superuser => "Superuser",
            RoleFilter::Staff => "Staff",
            RoleFilter::User => "User",
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sort direction for the client-side first-name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query state for the dashboard list view.
///
/// Changing the search term or role filter resets the page to 1; changing
/// the sort order or page alone does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub search: String,
    pub role_filter: RoleFilter,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            role_filter: RoleFilter::All,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.role_filter = filter;
        self.page = 1;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }
}

/// Number of pages needed for `count` rows at the fixed page size.
///
/// A zero count still renders a single (empty) page.
pub fn total_pages(count: u64) -> u64 {
    count.div_ceil(PAGE_SIZE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_make_three_pages() {
        assert_eq!(total_pages(23), 3);
    }

    #[test]
    fn page_math_edges() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(20), 2);
    }

    #[test]
    fn search_change_resets_page() {
        let mut query = ListQuery::default();
        query.set_page(4);
        query.set_search("alice");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "alice");
    }

    #[test]
    fn filter_change_resets_page() {
        let mut query = ListQuery::default();
        query.set_page(3);
        query.set_role_filter(RoleFilter::Staff);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn sort_change_keeps_page() {
        let mut query = ListQuery::default();
        query.set_page(3);
        query.toggle_sort_order();
        assert_eq!(query.page, 3);
        assert_eq!(query.sort_order, SortOrder::Desc);
        query.toggle_sort_order();
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn page_is_clamped_to_one() {
        let mut query = ListQuery::default();
        query.set_page(0);
        assert_eq!(query.page, 1);
    }
}
