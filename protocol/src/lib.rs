//! Wire types of the remote trivia catalog.
//!
//! Only the fields the board needs are modelled; anything else the API sends
//! is skipped while decoding.

#![no_std]

extern crate alloc;

use alloc::{format, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Identifier the catalog assigns to a category.
pub type CategoryId = u64;

/// Base URL of the public catalog the game was built against.
pub const DEFAULT_API_URL: &str = "https://jservice.io/api/";

/// One entry of `GET categories?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Body of `GET category?id=ID`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub title: String,
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    pub question: String,
    pub answer: String,
}

/// Relative path listing up to `count` categories.
pub fn categories_path(count: usize) -> String {
    format!("categories?count={count}")
}

/// Relative path of a single category with its clues.
pub fn category_path(id: CategoryId) -> String {
    format!("category?id={id}")
}

/// Joins `base` and a relative `path` with exactly one `/` between them.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
