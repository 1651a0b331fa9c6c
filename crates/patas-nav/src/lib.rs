//! Patas Amigas Navigation
//!
//! Route resolution, browser-style history, and fragment fetching:
//! 1. Route key → fragment resource name, with silent fallback to the
//!    default fragment (no 404 state).
//! 2. Every successful content swap pushes one history entry.
//! 3. Fragments are fetched over HTTP through the `FragmentFetcher` seam.

mod error;
mod fetch;
mod history;
mod routes;

pub use error::NavigationError;
pub use fetch::{FetchedFragment, FragmentFetcher, HttpFetcher};
pub use history::History;
pub use routes::{RouteTable, DEFAULT_FRAGMENT};

pub type Result<T> = std::result::Result<T, NavigationError>;
