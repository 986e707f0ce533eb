//! The persisted history of finished sessions.

pub mod store;
pub mod summary;

pub use store::ResultStore;
pub use summary::{DATE_FORMAT, SessionSummary};
