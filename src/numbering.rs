//! The reading-order clue-numbering pass, plus the `check`/`hint` query
//! helpers that read a finished [`PuzzleRecord`].

use crate::error::CoreError;
use crate::grid::{Cell, Grid};
use crate::normalize::normalize;
use crate::record::{answer_key, ClueEntry, Clues, HintResult, Orientation, PlacedWord};
use std::collections::{HashMap, HashSet};

/// Stamps sequential clue numbers onto `grid` in reading order (row-major,
/// top-to-bottom, left-to-right) and returns `placed` with `number` filled
/// in. A cell gets a number if it starts an across word, a down word, or
/// both; a cell that only continues a word gets none.
pub fn number_grid(grid: &mut Grid, placed: Vec<PlacedWord>) -> Vec<PlacedWord> {
    let mut across_starts = HashSet::new();
    let mut down_starts = HashSet::new();
    for word in &placed {
        match word.orientation {
            Orientation::Across => {
                across_starts.insert((word.start_row, word.start_col));
            }
            Orientation::Down => {
                down_starts.insert((word.start_row, word.start_col));
            }
        }
    }

    let n = grid.size();
    let mut numbers: HashMap<(usize, usize), u32> = HashMap::new();
    let mut next_number = 1u32;
    for row in 0..n {
        for col in 0..n {
            if !across_starts.contains(&(row, col)) && !down_starts.contains(&(row, col)) {
                continue;
            }
            numbers.insert((row, col), next_number);
            if let Some(Cell::Letter { g, .. }) = grid.get(row, col).cloned().as_ref() {
                grid.set(row, col, Cell::Letter { g: *g, number: Some(next_number) });
            }
            next_number += 1;
        }
    }

    placed
        .into_iter()
        .map(|mut word| {
            word.number = numbers[&(word.start_row, word.start_col)];
            word
        })
        .collect()
}

/// Builds the ascending-number across/down clue lists from numbered words.
pub fn build_clues(placed: &[PlacedWord]) -> Clues {
    let mut across: Vec<ClueEntry> = Vec::new();
    let mut down: Vec<ClueEntry> = Vec::new();
    for word in placed {
        let entry = ClueEntry {
            number: word.number,
            clue: word.clue.clone(),
            length: word.length,
            row: word.start_row,
            col: word.start_col,
            article_ref: word.article_ref.clone(),
        };
        match word.orientation {
            Orientation::Across => across.push(entry),
            Orientation::Down => down.push(entry),
        }
    }
    across.sort_by_key(|e| e.number);
    down.sort_by_key(|e| e.number);
    Clues { across, down }
}

/// Builds the `"{number}-{orientation}"` answer table persisted alongside a
/// record.
pub fn build_answers(placed: &[PlacedWord]) -> HashMap<String, String> {
    placed
        .iter()
        .map(|w| (answer_key(w.number, w.orientation), w.answer.clone()))
        .collect()
}

/// Normalizes each supplied answer and compares it against the stored
/// answer table, splitting the submitted keys into correct and incorrect.
/// Keys with no matching clue are silently omitted from both lists.
pub fn check(answers_table: &HashMap<String, String>, submitted: &HashMap<String, String>) -> crate::record::CheckResult {
    let mut correct = Vec::new();
    let mut incorrect = Vec::new();
    for (key, raw_answer) in submitted {
        let normalized = normalize(raw_answer);
        match answers_table.get(key) {
            None => {}
            Some(expected) if *expected == normalized => correct.push(key.clone()),
            Some(_) => incorrect.push(key.clone()),
        }
    }
    correct.sort();
    incorrect.sort();
    crate::record::CheckResult { correct, incorrect }
}

/// Reveals the first grapheme of the clue's answer and masks the rest with
/// the full-width underscore placeholder (`＿`, U+FF3F).
pub fn hint(
    clues: &Clues,
    answers_table: &HashMap<String, String>,
    number: u32,
    orientation: Orientation,
) -> Result<HintResult, CoreError> {
    let list = match orientation {
        Orientation::Across => &clues.across,
        Orientation::Down => &clues.down,
    };
    if !list.iter().any(|entry| entry.number == number) {
        return Err(CoreError::UnknownClue { number, orientation: orientation.to_string() });
    }

    let key = answer_key(number, orientation);
    let answer = answers_table.get(&key).ok_or_else(|| CoreError::Internal {
        message: format!("numbered clue {key} has no stored answer"),
    })?;

    const PLACEHOLDER: char = '\u{FF3F}';
    let graphemes: Vec<char> = answer.chars().collect();
    let total = graphemes.len();
    let revealed = total.min(1);
    let hint: String = graphemes
        .iter()
        .enumerate()
        .map(|(i, g)| if i < revealed { *g } else { PLACEHOLDER })
        .collect();

    Ok(HintResult { hint, revealed, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::placement;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn placed_word(answer: &str, clue: &str, row: usize, col: usize, orientation: Orientation) -> PlacedWord {
        PlacedWord {
            answer: answer.to_string(),
            clue: clue.to_string(),
            article_ref: None,
            start_row: row,
            start_col: col,
            orientation,
            length: answer.chars().count(),
            number: 0,
        }
    }

    #[test]
    fn numbers_assigned_in_reading_order() {
        let mut grid = Grid::new(5);
        placement::place(&mut grid, &chars("ネコ"), 0, 0, true);
        placement::place(&mut grid, &chars("コト"), 0, 1, false);
        let placed = vec![
            placed_word("ネコ", "cat", 0, 0, Orientation::Across),
            placed_word("コト", "thing", 0, 1, Orientation::Down),
        ];
        let numbered = number_grid(&mut grid, placed);
        let by_answer: HashMap<_, _> = numbered.iter().map(|w| (w.answer.clone(), w.number)).collect();
        assert_eq!(by_answer["ネコ"], 1);
        assert_eq!(by_answer["コト"], 2);
    }

    #[test]
    fn shared_start_cell_gets_one_number_for_both_directions() {
        let mut grid = Grid::new(5);
        placement::place(&mut grid, &chars("ネコ"), 0, 0, true);
        placement::place(&mut grid, &chars("ネズミ"), 0, 0, false);
        let placed = vec![
            placed_word("ネコ", "cat", 0, 0, Orientation::Across),
            placed_word("ネズミ", "mouse", 0, 0, Orientation::Down),
        ];
        let numbered = number_grid(&mut grid, placed);
        assert!(numbered.iter().all(|w| w.number == 1));
    }

    #[test]
    fn check_matches_after_normalizing_submitted_answers() {
        let mut table = HashMap::new();
        table.insert("1-across".to_string(), "ネコ".to_string());
        let mut submitted = HashMap::new();
        submitted.insert("1-across".to_string(), "ねこ".to_string());
        let result = check(&table, &submitted);
        assert_eq!(result.correct, vec!["1-across".to_string()]);
        assert!(result.incorrect.is_empty());
    }

    #[test]
    fn check_reports_wrong_answer_as_incorrect() {
        let mut table = HashMap::new();
        table.insert("1-across".to_string(), "ネコ".to_string());
        let mut submitted = HashMap::new();
        submitted.insert("1-across".to_string(), "イヌ".to_string());
        let result = check(&table, &submitted);
        assert!(result.correct.is_empty());
        assert_eq!(result.incorrect, vec!["1-across".to_string()]);
    }

    #[test]
    fn check_silently_ignores_keys_with_no_matching_clue() {
        let mut table = HashMap::new();
        table.insert("1-across".to_string(), "ネコ".to_string());
        let mut submitted = HashMap::new();
        submitted.insert("1-across".to_string(), "ネコ".to_string());
        submitted.insert("99-down".to_string(), "anything".to_string());
        let result = check(&table, &submitted);
        assert_eq!(result.correct, vec!["1-across".to_string()]);
        assert!(result.incorrect.is_empty(), "unknown key must be omitted, not reported incorrect");
    }

    /// S6: a 5x5 grid with an across word at (0,0), a down word at (0,2),
    /// and an across word at (2,0) numbers them 1, 2, 3 in that order.
    #[test]
    fn literal_s6_numbering_order() {
        let mut grid = Grid::new(5);
        placement::place(&mut grid, &chars("ウエオ"), 0, 0, true);
        // overwrite (0,2) consistently so the down word's first grapheme
        // matches what's already there, then extend it downward.
        placement::place(&mut grid, &chars("ウエオ"), 0, 2, false);
        placement::place(&mut grid, &chars("カキ"), 2, 0, true);

        let placed = vec![
            placed_word("ウエオ", "clue a", 0, 0, Orientation::Across),
            placed_word("ウエオ", "clue b", 0, 2, Orientation::Down),
            placed_word("カキ", "clue c", 2, 0, Orientation::Across),
        ];
        let numbered = number_grid(&mut grid, placed);
        let by_start: HashMap<(usize, usize), u32> =
            numbered.iter().map(|w| ((w.start_row, w.start_col), w.number)).collect();
        assert_eq!(by_start[&(0, 0)], 1);
        assert_eq!(by_start[&(0, 2)], 2);
        assert_eq!(by_start[&(2, 0)], 3);
    }

    #[test]
    fn hint_reveals_first_grapheme_only() {
        let clues = Clues {
            across: vec![ClueEntry { number: 1, clue: "cat".into(), length: 2, row: 0, col: 0, article_ref: None }],
            down: vec![],
        };
        let mut table = HashMap::new();
        table.insert("1-across".to_string(), "ネコ".to_string());
        let result = hint(&clues, &table, 1, Orientation::Across).unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.revealed, 1);
        assert_eq!(result.hint, "ネ\u{FF3F}");
    }

    /// S3: clue 4 across, answer "ウクライナ", hints as "ウ＿＿＿＿".
    #[test]
    fn literal_s3_hint() {
        let clues = Clues {
            across: vec![ClueEntry {
                number: 4,
                clue: "invaded nation".into(),
                length: 5,
                row: 0,
                col: 0,
                article_ref: None,
            }],
            down: vec![],
        };
        let mut table = HashMap::new();
        table.insert("4-across".to_string(), "ウクライナ".to_string());
        let result = hint(&clues, &table, 4, Orientation::Across).unwrap();
        assert_eq!(result.revealed, 1);
        assert_eq!(result.total, 5);
        assert_eq!(result.hint, "ウ\u{FF3F}\u{FF3F}\u{FF3F}\u{FF3F}");
    }

    #[test]
    fn hint_on_unknown_clue_is_an_error() {
        let clues = Clues::default();
        let table = HashMap::new();
        let err = hint(&clues, &table, 1, Orientation::Across).unwrap_err();
        assert!(matches!(err, CoreError::UnknownClue { number: 1, .. }));
    }
}
