//! Core domain entities.
//!
//! Entities are plain data structures without business logic. The service
//! layer (see [`crate::application::services`]) owns all behavior.

pub mod url_record;

pub use url_record::UrlRecord;
