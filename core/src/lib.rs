#![no_std]

extern crate alloc;

pub use trivia_protocol::{CategoryDetails, CategoryId, CategorySummary, ClueRecord};

pub use board::*;
pub use catalog::*;
pub use error::*;
pub use lifecycle::*;
pub use loader::*;
pub use render::*;
pub use reveal::*;
pub use sampler::*;
pub use types::*;

mod board;
mod catalog;
mod error;
mod lifecycle;
mod loader;
mod render;
mod reveal;
mod sampler;
mod types;

/// Number of categories (columns) on every board.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clues (rows) in every category.
pub const NUM_CLUES: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The event did not address a clue of the current board.
    Ignored,
    /// The clue already shows its answer.
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Ignored => false,
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}
