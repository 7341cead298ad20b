//! HTTP plumbing: endpoint constants, the backend trait seam, and the
//! reqwest-based client implementing it.

pub mod api_client;
pub mod backend;
pub mod routes;

pub use api_client::ApiClient;
pub use backend::Backend;
