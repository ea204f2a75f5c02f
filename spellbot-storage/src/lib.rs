//! Storage crate: user identity persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord
//! - [`user_store`] – UserStore trait and SqliteUserStore

mod error;
mod models;
mod user_store;


pub use error::StorageError;
pub use models::UserRecord;
pub use user_store::{SqliteUserStore, UserStore};
