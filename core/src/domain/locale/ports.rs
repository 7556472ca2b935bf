use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Backing storage for the locale preference, a single tag value under a
/// fixed storage location.
#[cfg_attr(test, mockall::automock)]
pub trait LocalePersistencePort: Send + Sync {
    /// Returns the persisted tag, or `None` when nothing was ever stored.
    fn load(&self) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn save(&self, tag: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}
