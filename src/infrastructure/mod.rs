//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer with concrete
//! database and cache backends.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and in-memory implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
