//! Synthesis core for a news-driven Japanese crossword puzzle generator.
//!
//! Given a bag of candidate answer/clue pairs (typically extracted
//! elsewhere from a news article) and a target grid size, this crate
//! searches for an intersecting arrangement of those words on an `N x N`
//! grid, numbers the result in reading order, and exposes a small
//! generate/get/list/check/hint/delete query surface over a pluggable
//! [`store::PuzzleStore`].
//!
//! Out of scope, by design: the HTTP surface, authentication, UI
//! rendering, text-to-speech, and feed/folder management that a full
//! application wraps around this core, plus the real relational
//! persistence backend — callers supply their own [`store::PuzzleStore`]
//! implementation for that.
//!
//! The pipeline, end to end:
//!
//! 1. [`normalize`] canonicalizes candidate and user-submitted text.
//! 2. [`synth::synthesize`] runs the randomized multi-attempt placement
//!    search and returns a filled [`grid::Grid`].
//! 3. [`numbering`] stamps clue numbers onto the grid and builds the
//!    across/down clue lists and answer table.
//! 4. [`driver`] wires the above, plus a [`store::PuzzleStore`], into the
//!    operations callers actually invoke.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod normalize;
pub mod numbering;
pub mod placement;
pub mod record;
pub mod store;
pub mod synth;

pub use config::SynthesisConfig;
pub use error::CoreError;
pub use record::{
    answer_key, CandidateWord, CheckResult, ClueEntry, Clues, HintResult, Orientation, PlacedWord,
    PublicPuzzleRecord, PuzzleRecord, PuzzleSummary,
};
pub use store::{InMemoryStore, PuzzleStore};

pub use driver::{check, delete, generate, get, hint, list};
