//! Wires the synthesizer, the numbering pass, and a [`PuzzleStore`] into the
//! query surface a caller actually uses: generate, fetch, list, check,
//! hint, delete.

use crate::config::SynthesisConfig;
use crate::error::CoreError;
use crate::numbering;
use crate::record::{CandidateWord, CheckResult, HintResult, Orientation, PlacedWord, PublicPuzzleRecord, PuzzleRecord, PuzzleSummary};
use crate::store::PuzzleStore;
use crate::synth;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

const MIN_SIZE: usize = 5;
const MAX_SIZE: usize = 15;

fn clamp_size(requested: usize) -> usize {
    requested.clamp(MIN_SIZE, MAX_SIZE)
}

fn derive_title(size: usize, words: &[PlacedWord]) -> String {
    let featured = words.iter().find(|w| w.number == 1).or_else(|| words.first());
    match featured {
        Some(word) => format!("{size}\u{00d7}{size} crossword featuring \"{}\"", word.answer),
        None => format!("{size}\u{00d7}{size} crossword"),
    }
}

/// Synthesizes a new puzzle, numbers it, persists it, and returns the
/// public (answer-free) view. `size` is silently clamped into `5..=15`.
pub fn generate(
    store: &dyn PuzzleStore,
    config: &SynthesisConfig,
    size: usize,
    candidates: Vec<CandidateWord>,
) -> Result<PublicPuzzleRecord, CoreError> {
    let size = clamp_size(size);
    let (mut grid, placed) = synth::synthesize(candidates, size, config)?;
    let placed = numbering::number_grid(&mut grid, placed);
    let clues = numbering::build_clues(&placed);
    let answers = numbering::build_answers(&placed);
    let title = derive_title(size, &placed);

    let record = PuzzleRecord {
        id: Uuid::new_v4().to_string(),
        title,
        created_at: Utc::now(),
        size,
        grid,
        words: placed,
        clues,
        answers,
    };

    tracing::info!(id = %record.id, size, word_count = record.word_count(), "puzzle generated and stored");
    let public = record.public();
    store.put(record)?;
    Ok(public)
}

pub fn get(store: &dyn PuzzleStore, id: &str) -> Result<PublicPuzzleRecord, CoreError> {
    Ok(store.get(id)?.public())
}

pub fn list(store: &dyn PuzzleStore) -> Result<Vec<PuzzleSummary>, CoreError> {
    store.list()
}

pub fn check(
    store: &dyn PuzzleStore,
    id: &str,
    submitted: &HashMap<String, String>,
) -> Result<CheckResult, CoreError> {
    let record = store.get(id)?;
    Ok(numbering::check(&record.answers, submitted))
}

pub fn hint(
    store: &dyn PuzzleStore,
    id: &str,
    number: u32,
    orientation: Orientation,
) -> Result<HintResult, CoreError> {
    let record = store.get(id)?;
    numbering::hint(&record.clues, &record.answers, number, orientation)
}

pub fn delete(store: &dyn PuzzleStore, id: &str) -> Result<(), CoreError> {
    store.delete(id)
}
