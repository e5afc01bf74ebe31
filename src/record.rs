//! The shared data model: candidate words on the way in, placed words and
//! the puzzle record on the way out.

use crate::grid::Grid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// `across` (left-to-right) or `down` (top-to-bottom).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Across => "across",
            Orientation::Down => "down",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the `"{number}-{orientation}"` answer-table key.
pub fn answer_key(number: u32, orientation: Orientation) -> String {
    format!("{number}-{orientation}")
}

/// A candidate answer word, as supplied by the keyword/clue generation
/// collaborator, before normalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateWord {
    pub answer: String,
    pub clue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

impl CandidateWord {
    pub fn new(answer: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            clue: clue.into(),
            article_ref: None,
        }
    }

    pub fn with_article_ref(mut self, article_ref: impl Into<String>) -> Self {
        self.article_ref = Some(article_ref.into());
        self
    }
}

/// A candidate after normalization, carried through synthesis. `answer` is
/// the normalized grapheme sequence.
#[derive(Clone, Debug)]
pub(crate) struct NormalizedCandidate {
    pub answer: Vec<char>,
    pub clue: String,
    pub article_ref: Option<String>,
}

/// A word actually placed on the grid, wholly owned by the puzzle record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacedWord {
    pub answer: String,
    pub clue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
    pub start_row: usize,
    pub start_col: usize,
    pub orientation: Orientation,
    pub length: usize,
    pub number: u32,
}

/// One entry in the exported across/down clue lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: String,
    pub length: usize,
    pub row: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_ref: Option<String>,
}

/// The across/down clue lists, each in ascending-number order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Clues {
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
}

/// The immutable puzzle record produced by synthesis.
///
/// `answers` is persisted but stripped before the record crosses the
/// external interface — see [`PuzzleRecord::public`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub size: usize,
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
    pub clues: Clues,
    pub answers: HashMap<String, String>,
}

impl PuzzleRecord {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The view returned across the external interface: identical except
    /// `answers` is omitted.
    pub fn public(&self) -> PublicPuzzleRecord {
        PublicPuzzleRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            created_at: self.created_at,
            size: self.size,
            grid: self.grid.clone(),
            words: self.words.clone(),
            clues: self.clues.clone(),
        }
    }

    pub fn summary(&self) -> PuzzleSummary {
        PuzzleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            size: self.size,
            word_count: self.word_count(),
            created_at: self.created_at,
        }
    }
}

/// `PuzzleRecord` with the answer table removed — what `generate` and `get`
/// actually hand back to callers outside the persistence boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicPuzzleRecord {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub size: usize,
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
    pub clues: Clues,
}

/// One row of `list()`'s output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub id: String,
    pub title: String,
    pub size: usize,
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
}

/// The result of `check(id, answers)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckResult {
    pub correct: Vec<String>,
    pub incorrect: Vec<String>,
}

/// The result of `hint(id, number, orientation)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HintResult {
    pub hint: String,
    pub revealed: usize,
    pub total: usize,
}
