use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// How many candidate categories to fetch before sampling the board's.
    pub pool_size: usize,
}

impl LoaderConfig {
    pub const DEFAULT_POOL_SIZE: usize = 100;

    pub fn new(pool_size: usize) -> Self {
        if pool_size < NUM_CATEGORIES {
            log::warn!(
                "Pool size {} cannot fill a board, using {}",
                pool_size,
                NUM_CATEGORIES
            );
        }
        Self {
            pool_size: pool_size.max(NUM_CATEGORIES),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POOL_SIZE)
    }
}

/// Assembles categories from a [`Catalog`], sampling both the categories and
/// the clues within each one.
#[derive(Clone, Debug)]
pub struct CategoryLoader<C> {
    catalog: C,
    sampler: Sampler,
    config: LoaderConfig,
}

impl<C: Catalog> CategoryLoader<C> {
    pub fn new(catalog: C, sampler: Sampler, config: LoaderConfig) -> Self {
        Self {
            catalog,
            sampler,
            config,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> LoaderConfig {
        self.config
    }

    /// Fetches up to `pool_size` categories and picks `count` distinct ids.
    pub async fn list_category_ids(
        &mut self,
        pool_size: usize,
        count: usize,
    ) -> Result<Vec<CategoryId>> {
        let summaries = self.catalog.categories(pool_size).await?;
        let fetched = summaries.len();

        let mut seen = BTreeSet::new();
        let ids: Vec<CategoryId> = summaries
            .into_iter()
            .map(|summary| summary.id)
            .filter(|id| seen.insert(*id))
            .collect();
        if ids.len() != fetched {
            log::debug!(
                "Catalog returned {} duplicate category ids",
                fetched - ids.len()
            );
        }

        let picked = self
            .sampler
            .sample(&ids, count)
            .map_err(|err| LoadError::insufficient(DataKind::Categories, err))?;
        log::debug!("Picked categories {:?} out of {}", picked, ids.len());
        Ok(picked)
    }

    /// Fetches one category and keeps [`NUM_CLUES`] of its clues, all hidden.
    pub async fn load_category(&mut self, id: CategoryId) -> Result<Category> {
        let details = self.catalog.category(id).await?;
        let available = details.clues.len();

        let clues: Vec<Clue> = self
            .sampler
            .sample(&details.clues, NUM_CLUES)
            .map_err(|err| LoadError::insufficient(DataKind::Clues(id), err))?
            .into_iter()
            .map(Clue::from)
            .collect();
        let clues: [Clue; NUM_CLUES] =
            clues
                .try_into()
                .map_err(|clues: Vec<Clue>| LoadError::InsufficientData {
                    what: DataKind::Clues(id),
                    required: NUM_CLUES,
                    available: clues.len(),
                })?;

        log::debug!(
            "Loaded category {} ({:?}), kept {} of {} clues",
            id,
            details.title,
            NUM_CLUES,
            available
        );
        Ok(Category::new(details.title, clues))
    }

    /// Loads a full board's worth of categories, in the order the ids were
    /// picked. Stops at the first failure.
    pub async fn load_categories(&mut self) -> Result<[Category; NUM_CATEGORIES]> {
        let ids = self
            .list_category_ids(self.config.pool_size, NUM_CATEGORIES)
            .await?;

        let mut categories = Vec::with_capacity(NUM_CATEGORIES);
        for id in ids {
            categories.push(self.load_category(id).await?);
        }

        categories
            .try_into()
            .map_err(|categories: Vec<Category>| LoadError::InsufficientData {
                what: DataKind::Categories,
                required: NUM_CATEGORIES,
                available: categories.len(),
            })
    }
}
