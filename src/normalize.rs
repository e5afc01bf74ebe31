//! Canonicalizes Japanese answer strings and user input into the grapheme
//! sequence the rest of the core compares cell-by-cell.
//!
//! The mapping is total and idempotent: `normalize(normalize(x)) == normalize(x)`.
//! Every character this crate's domain cares about — full-width katakana,
//! the prolonged-sound mark, Latin letters, digits — is exactly one Unicode
//! scalar value once folded, so a grapheme is represented here as a plain
//! `char` rather than an extended grapheme cluster.

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const HIRAGANA_TO_KATAKANA_OFFSET: u32 = 0x60;

/// Canonicalizes a string into its normalized grapheme sequence.
pub fn normalize(input: &str) -> String {
    input.chars().map(normalize_char).collect()
}

fn normalize_char(c: char) -> char {
    if (HIRAGANA_START..=HIRAGANA_END).contains(&(c as u32)) {
        let katakana = char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA_OFFSET).unwrap_or(c);
        return fold_small_katakana(katakana);
    }
    if c.is_ascii_lowercase() {
        return c.to_ascii_uppercase();
    }
    fold_small_katakana(c)
}

/// Folds "small" katakana to their full-sized counterparts.
fn fold_small_katakana(c: char) -> char {
    match c {
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ッ' => 'ツ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        'ヮ' => 'ワ',
        other => other,
    }
}

/// The grapheme count of a normalized string — the unit every downstream
/// length check and bound in this crate operates on.
pub fn grapheme_len(normalized: &str) -> usize {
    normalized.chars().count()
}
