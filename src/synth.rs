//! The randomized multi-attempt driver that fills a grid from a bag of
//! candidate words.
//!
//! `synthesize` is a pure function of `(candidates, size, config)`: no I/O,
//! no ambient randomness, no suspension points. Given the same inputs and
//! the same resolved seed it always returns the same grid.

use crate::config::SynthesisConfig;
use crate::error::CoreError;
use crate::grid::Grid;
use crate::normalize::{grapheme_len, normalize};
use crate::placement::{self, Placement};
use crate::record::{CandidateWord, NormalizedCandidate, Orientation, PlacedWord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Instant;

/// `N <= 7 -> 6`, `8..=10 -> 18`, `11..=12 -> 25`, `N >= 13 -> 35`.
fn target_word_count(n: usize) -> usize {
    match n {
        0..=7 => 6,
        8..=10 => 18,
        11..=12 => 25,
        _ => 35,
    }
}

const TARGET_DENSITY: f64 = 0.8;

/// Preferred-length rank: lengths 3-5 sort first (stably, preserving their
/// relative order), everything else sorts by ascending length.
fn length_rank(len: usize) -> (u8, usize) {
    if (3..=5).contains(&len) {
        (0, 0)
    } else {
        (1, len)
    }
}

fn preprocess(candidates: Vec<CandidateWord>, size: usize) -> Vec<NormalizedCandidate> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in candidates {
        let normalized = normalize(&candidate.answer);
        let len = grapheme_len(&normalized);
        if !(2..=size).contains(&len) {
            continue;
        }
        if !seen.insert(normalized.clone()) {
            continue;
        }
        out.push(NormalizedCandidate {
            answer: normalized.chars().collect(),
            clue: candidate.clue,
            article_ref: candidate.article_ref,
        });
    }
    out.sort_by_key(|c| length_rank(c.answer.len()));
    out
}

fn make_placed_word(cand: &NormalizedCandidate, row: usize, col: usize, horizontal: bool) -> PlacedWord {
    PlacedWord {
        answer: cand.answer.iter().collect(),
        clue: cand.clue.clone(),
        article_ref: cand.article_ref.clone(),
        start_row: row,
        start_col: col,
        orientation: if horizontal { Orientation::Across } else { Orientation::Down },
        length: cand.answer.len(),
        // Numbers are assigned in a single pass over the finished grid by
        // `crate::numbering`, not known at placement time.
        number: 0,
    }
}

fn touches_edge(placement: &Placement, length: usize, n: usize) -> bool {
    let (start_row, start_col, end_row, end_col) = if placement.horizontal {
        (placement.row, placement.col, placement.row, placement.col + length - 1)
    } else {
        (placement.row, placement.col, placement.row + length - 1, placement.col)
    };
    start_row == 0 || start_col == 0 || end_row == n - 1 || end_col == n - 1
}

/// Runs one attempt: seed placement, main intersection-required pass, then
/// a single edge-fill placement for short leftover candidates. Returns
/// `None` if even the seed word could not be placed.
fn run_attempt<'a>(
    candidates: &'a [NormalizedCandidate],
    size: usize,
    rng: &mut StdRng,
) -> Option<(Grid, Vec<PlacedWord>)> {
    let mut shuffled: Vec<&'a NormalizedCandidate> = candidates.iter().collect();
    shuffled.shuffle(rng);

    let (first, rest) = shuffled.split_first()?;

    let mut grid = Grid::new(size);
    let len = first.answer.len();
    let row = size / 2;
    let col = (size - len) / 2;

    if !placement::can_place(&grid, &first.answer, row, col, true, false) {
        return None;
    }
    placement::place(&mut grid, &first.answer, row, col, true);

    let mut placed = vec![make_placed_word(first, row, col, true)];
    let mut unplaced: Vec<&NormalizedCandidate> = Vec::new();

    for candidate in rest.iter().copied() {
        let placements = placement::find_placements(&grid, &candidate.answer, true);
        if let Some(best) = placements.first() {
            placement::place(&mut grid, &candidate.answer, best.row, best.col, best.horizontal);
            placed.push(make_placed_word(candidate, best.row, best.col, best.horizontal));
        } else {
            unplaced.push(candidate);
        }
    }

    // Edge-fill pass: among all still-unplaced short candidates, place the
    // single best edge-touching placement, if any.
    let mut best_edge: Option<(&NormalizedCandidate, Placement)> = None;
    for candidate in &unplaced {
        if candidate.answer.len() > 3 {
            continue;
        }
        for p in placement::find_placements(&grid, &candidate.answer, false) {
            if !touches_edge(&p, candidate.answer.len(), size) {
                continue;
            }
            let is_better = match &best_edge {
                None => true,
                Some((_, current)) => p.intersections > current.intersections,
            };
            if is_better {
                best_edge = Some((candidate, p));
            }
        }
    }
    if let Some((candidate, p)) = best_edge {
        placement::place(&mut grid, &candidate.answer, p.row, p.col, p.horizontal);
        placed.push(make_placed_word(candidate, p.row, p.col, p.horizontal));
    }

    Some((grid, placed))
}

/// Produces a filled grid and its placed words from a bag of candidates, or
/// fails with `InsufficientWords`.
pub fn synthesize(
    candidates: Vec<CandidateWord>,
    size: usize,
    config: &SynthesisConfig,
) -> Result<(Grid, Vec<PlacedWord>), CoreError> {
    if !(5..=15).contains(&size) {
        return Err(CoreError::InvalidSize { requested: size });
    }

    let start = Instant::now();
    let filtered = preprocess(candidates, size);
    if filtered.is_empty() {
        return Err(CoreError::InsufficientWords { available: 0 });
    }

    let target = target_word_count(size);
    let mut rng = StdRng::seed_from_u64(config.resolved_seed());
    let mut best: Option<(Grid, Vec<PlacedWord>)> = None;

    for attempt in 0..config.max_attempts {
        if let Some(deadline) = config.deadline {
            if Instant::now() >= deadline {
                break;
            }
        }

        let attempt_start = Instant::now();
        let Some((grid, placed)) = run_attempt(&filtered, size, &mut rng) else {
            tracing::debug!(attempt, "synthesis attempt discarded: seed word did not fit");
            continue;
        };

        let density = grid.density();
        let word_count = placed.len();
        tracing::debug!(
            attempt,
            elapsed_ms = attempt_start.elapsed().as_millis() as u64,
            density,
            word_count,
            "synthesis attempt completed"
        );

        let is_better = match &best {
            None => true,
            Some((best_grid, best_placed)) => {
                density > best_grid.density()
                    || (density == best_grid.density() && word_count > best_placed.len())
            }
        };
        if is_better {
            best = Some((grid, placed));
        }

        if let Some((best_grid, best_placed)) = &best {
            if best_grid.density() >= TARGET_DENSITY && best_placed.len() >= target {
                break;
            }
        }
    }

    match best {
        Some((grid, placed)) if !placed.is_empty() => {
            tracing::info!(
                size,
                density = grid.density(),
                word_count = placed.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "synthesis completed"
            );
            Ok((grid, placed))
        }
        _ => Err(CoreError::InsufficientWords { available: filtered.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn candidates() -> Vec<CandidateWord> {
        vec![
            CandidateWord::new("ネコ", "cat"),
            CandidateWord::new("コト", "thing"),
            CandidateWord::new("トリ", "bird"),
        ]
    }

    /// S1: the trivial seed scenario from `spec.md` §8, pinned to the exact
    /// grid positions it names — `ネコ` horizontal centered at (3,2), `コト`
    /// crossing it vertically at (3,3), `トリ` crossing that horizontally at
    /// (4,3) — built directly from the placement primitives `synthesize`'s
    /// random search is layered over, since a fixed seed's shuffle order is
    /// not itself part of the spec's contract.
    #[test]
    fn literal_s1_trivial_seed_layout() {
        let size = 7;
        let neko: Vec<char> = "ネコ".chars().collect();
        let koto: Vec<char> = "コト".chars().collect();
        let tori: Vec<char> = "トリ".chars().collect();

        let mut grid = Grid::new(size);
        let row = size / 2;
        let col = (size - neko.len()) / 2;
        assert_eq!((row, col), (3, 2));
        assert!(placement::can_place(&grid, &neko, row, col, true, false));
        placement::place(&mut grid, &neko, row, col, true);

        // コト crosses at the コ cell, (3,3), going down.
        assert!(placement::can_place(&grid, &koto, 3, 3, false, true));
        placement::place(&mut grid, &koto, 3, 3, false);

        // トリ crosses at the ト cell コト left behind one row down, (4,3).
        assert!(placement::can_place(&grid, &tori, 4, 3, true, true));
        placement::place(&mut grid, &tori, 4, 3, true);

        let placed = vec![
            make_placed_word(
                &NormalizedCandidate { answer: neko, clue: "cat".into(), article_ref: None },
                3,
                2,
                true,
            ),
            make_placed_word(
                &NormalizedCandidate { answer: koto, clue: "thing".into(), article_ref: None },
                3,
                3,
                false,
            ),
            make_placed_word(
                &NormalizedCandidate { answer: tori, clue: "bird".into(), article_ref: None },
                4,
                3,
                true,
            ),
        ];
        let numbered = crate::numbering::number_grid(&mut grid, placed);
        let by_start: HashMap<(usize, usize), u32> = numbered
            .iter()
            .map(|w| ((w.start_row, w.start_col), w.number))
            .collect();
        assert_eq!(by_start[&(3, 2)], 1);
        assert_eq!(by_start[&(3, 3)], 2);
        assert_eq!(by_start[&(4, 3)], 3);
    }

    #[test]
    fn synthesizes_three_intersecting_words() {
        let config = SynthesisConfig::with_seed(1);
        let (grid, placed) = synthesize(candidates(), 7, &config).unwrap();
        assert_eq!(placed.len(), 3);
        assert!(grid.letter_count() > 0);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let config = SynthesisConfig::with_seed(42);
        let (grid_a, placed_a) = synthesize(candidates(), 7, &config).unwrap();
        let (grid_b, placed_b) = synthesize(candidates(), 7, &config).unwrap();
        assert_eq!(grid_a.density(), grid_b.density());
        assert_eq!(placed_a.len(), placed_b.len());
        for (a, b) in placed_a.iter().zip(placed_b.iter()) {
            assert_eq!(a.start_row, b.start_row);
            assert_eq!(a.start_col, b.start_col);
            assert_eq!(a.answer, b.answer);
        }
    }

    #[test]
    fn rejects_too_small_candidate_pool() {
        let single_letter = vec![CandidateWord::new("ア", "A")];
        let config = SynthesisConfig::with_seed(7);
        let err = synthesize(single_letter, 7, &config).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientWords { available: 0 }));
    }

    #[test]
    fn clamps_reject_out_of_range_size() {
        let config = SynthesisConfig::with_seed(7);
        let err = synthesize(candidates(), 20, &config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSize { requested: 20 }));
    }

    #[test]
    fn duplicate_answers_after_normalization_are_deduped() {
        let candidates = vec![
            CandidateWord::new("ねこ", "cat (hiragana)"),
            CandidateWord::new("ネコ", "cat (katakana, duplicate)"),
        ];
        let config = SynthesisConfig::with_seed(3);
        let (_, placed) = synthesize(candidates, 7, &config).unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].clue, "cat (hiragana)");
    }
}
