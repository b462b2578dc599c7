use alloc::string::String;
use core::fmt;
use thiserror::Error;

use crate::CategoryId;

/// What a load ran short of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataKind {
    Categories,
    Clues(CategoryId),
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Categories => f.write_str("categories"),
            Self::Clues(id) => write!(f, "clues in category {id}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Not enough {what}: need {required}, got {available}")]
    InsufficientData {
        what: DataKind,
        required: usize,
        available: usize,
    },
}

impl LoadError {
    pub(crate) fn insufficient(what: DataKind, err: SampleError) -> Self {
        let SampleError::NotEnoughItems {
            requested,
            available,
        } = err;
        Self::InsufficientData {
            what,
            required: requested,
            available,
        }
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("Cannot pick {requested} distinct items out of {available}")]
    NotEnoughItems { requested: usize, available: usize },
}

pub type Result<T> = core::result::Result<T, LoadError>;
