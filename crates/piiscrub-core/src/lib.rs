//! Piiscrub core — shared error types and the record data model.

pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{text_of, Record};
