use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shown in place of a clue that has not been activated yet.
pub const HIDDEN_PLACEHOLDER: &str = "?";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    /// Text the cell should currently display.
    pub fn visible_text(&self) -> &str {
        match self.reveal_state {
            RevealState::Hidden => HIDDEN_PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }

    /// Advances the reveal state by one step.
    pub fn activate(&mut self) -> RevealOutcome {
        let next = self.reveal_state.next();
        if next == self.reveal_state {
            return RevealOutcome::NoChange;
        }

        self.reveal_state = next;
        match next {
            RevealState::Question => RevealOutcome::ShowedQuestion,
            RevealState::Answer => RevealOutcome::ShowedAnswer,
            RevealState::Hidden => RevealOutcome::NoChange,
        }
    }
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        Self::new(record.question, record.answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: [Clue; NUM_CLUES],
}

impl Category {
    pub fn new(title: impl Into<String>, clues: [Clue; NUM_CLUES]) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue; NUM_CLUES] {
        &self.clues
    }
}

/// One game's worth of categories. Replaced as a whole on restart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    id: BoardId,
    categories: [Category; NUM_CATEGORIES],
}

impl Board {
    pub fn new(id: BoardId, categories: [Category; NUM_CATEGORIES]) -> Self {
        Self { id, categories }
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn categories(&self) -> &[Category; NUM_CATEGORIES] {
        &self.categories
    }

    pub fn clue(&self, addr: CellAddr) -> Option<&Clue> {
        self.categories.get(addr.category)?.clues.get(addr.clue)
    }

    pub fn clue_mut(&mut self, addr: CellAddr) -> Option<&mut Clue> {
        self.categories
            .get_mut(addr.category)?
            .clues
            .get_mut(addr.clue)
    }

    /// Iterates clues row by row, the order a grid is filled in.
    pub fn iter_clues(&self) -> impl Iterator<Item = (CellAddr, &Clue)> {
        (0..NUM_CLUES).flat_map(move |clue| {
            self.categories
                .iter()
                .enumerate()
                .map(move |(category, cat)| (CellAddr::new(category, clue), &cat.clues[clue]))
        })
    }
}
