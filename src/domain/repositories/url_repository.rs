//! Repository trait for URL record data access.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL record store.
///
/// The store is the single source of truth and the sole arbiter of
/// uniqueness: both the original URL and the short code carry unique
/// constraints, and concurrent creation is resolved by surfacing constraint
/// violations as [`AppError::Conflict`] rather than by locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record holding only the normalized URL and returns the
    /// store-assigned identity.
    ///
    /// The identity sequence starts above zero, so the returned value is
    /// always a valid encoding input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the URL is already stored.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, original_url: &str) -> Result<i64, AppError>;

    /// Attaches the encoded short code to a previously inserted record,
    /// completing its creation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already belongs to another
    /// record. Returns [`AppError::Internal`] on database errors.
    async fn attach_code(&self, id: i64, code: &str) -> Result<(), AppError>;

    /// Finds a completed record by its normalized original URL.
    ///
    /// Records whose code has not been committed yet are not visible here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds a completed record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;
}
