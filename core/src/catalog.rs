use alloc::vec::Vec;
use core::future::Future;

use crate::*;

/// Remote source of categories and clues.
///
/// Implementations report transport failures as [`LoadError::Network`] and
/// undecodable bodies as [`LoadError::MalformedResponse`]. They must not retry
/// or cache.
pub trait Catalog {
    /// Lists up to `count` categories.
    fn categories(&self, count: usize) -> impl Future<Output = Result<Vec<CategorySummary>>>;

    /// Fetches one category with its full clue list.
    fn category(&self, id: CategoryId) -> impl Future<Output = Result<CategoryDetails>>;
}
