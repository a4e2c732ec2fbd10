//! Post Explorer Core Library
//!
//! UI-independent logic of the explorer:
//! - Fetch Coordinator (`fetch`): one remote read and its lifecycle per screen mount
//! - Filter/Search Engine (`filter`): case-insensitive substring match
//! - Keyboard Navigation Controller (`selection`): wrap-around cursor over the filtered list
//! - Post Detail Navigation (`post_nav`): previous/next id arithmetic
//! - Router (`route`): path → screen mapping and back/forward history
//! - Explorer Service (`services`): typed loads over a [`DataSource`]
//!
//! Every state record here is plain data updated by synchronous methods, so
//! the UI layer can drive it from a single event loop.

pub mod error;
pub mod fetch;
pub mod filter;
pub mod post_nav;
pub mod route;
pub mod selection;
pub mod services;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{FetchError, FetchResult, Resource};
pub use fetch::{FetchCoordinator, FetchState, FetchTicket, MountId, RacePolicy, ResolveOutcome};
pub use filter::{filter, Searchable};
pub use post_nav::{has_previous, next_post_id, previous_post_id, FIRST_POST_ID};
pub use route::{History, Route};
pub use selection::{KeyOutcome, KeyTarget, ListBrowser, NavKey, SelectionIndex};
pub use services::ExplorerService;

// Re-export provider types
pub use post_explorer_provider::{DataSource, Post, ProviderError, User};
