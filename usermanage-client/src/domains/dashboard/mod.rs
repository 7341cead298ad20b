//! Dashboard domain: the user-list state machine.
//!
//! One parameterized list view: search, role filter, first-name sort,
//! pagination, a details modal, and row edit/delete. The server handles
//! paging and search; role filter and sort are applied client-side to the
//! page the server returned.

mod engine;
mod pagination;
mod state;

pub use engine::{Dashboard, LOAD_FAILED_MESSAGE, NOT_LOGGED_IN_MESSAGE};
pub use pagination::{pagination_range, show_jump_to_last};
pub use state::{filter_and_sort, DashboardState, EditForm};
