//! Guess scoring against the secret word
//!
//! Scoring follows the letter-budget rules: each letter of the secret can
//! justify at most one Hit or Misplaced tile in the guess.
//!
//! # Algorithm
//! 1. First pass: mark exact position matches as Hit and spend that letter from the budget
//! 2. Second pass, left to right: mark Misplaced while budget for the letter remains, else Miss
//! 3. Raise each scored letter's key color, never lowering it

use crate::core::{BoardRow, Guess, KeyColor, KeyTiles, Tile, WORD_LENGTH, Word, WordError};

/// A scored row together with the keyboard it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub row: BoardRow,
    pub key_tiles: KeyTiles,
}

/// Classify each letter of `guess` against `answer`
///
/// # Examples
/// ```
/// use word_duel::core::{Tile, Word};
/// use word_duel::engine::score;
///
/// let guess = Word::new("robot").unwrap();
/// let answer = Word::new("floor").unwrap();
///
/// // Only one O is misplaced; the second O is an exact match.
/// assert_eq!(
///     score(&guess, &answer),
///     [
///         Tile::Misplaced('R'),
///         Tile::Misplaced('O'),
///         Tile::Miss('B'),
///         Tile::Hit('O'),
///         Tile::Miss('T'),
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> [Tile; WORD_LENGTH] {
    let guess_letters = guess.letters();
    let answer_letters = answer.letters();
    let mut result: [Option<Tile>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut answer_available = answer.letter_counts();

    // First pass: exact position matches
    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess_letters[i];
        if letter == answer_letters[i] {
            *slot = Some(Tile::Hit(char::from(letter)));
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present elsewhere while budget remains
    for (i, slot) in result.iter_mut().enumerate() {
        if slot.is_some() {
            continue;
        }
        let letter = guess_letters[i];
        let tile = match answer_available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Tile::Misplaced(char::from(letter))
            }
            _ => Tile::Miss(char::from(letter)),
        };
        *slot = Some(tile);
    }

    result.map(|tile| tile.unwrap_or(Tile::Inactive))
}

/// Score `guess` and fold the result into the keyboard
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word, key_tiles: &KeyTiles) -> Evaluation {
    let tiles = score(guess, answer);

    let mut key_tiles = key_tiles.clone();
    for tile in tiles {
        if let (Some(letter), Some(color)) = (tile.letter(), KeyColor::for_tile(tile)) {
            key_tiles.promote(letter, color);
        }
    }

    Evaluation {
        row: BoardRow::new(tiles),
        key_tiles,
    }
}

/// Score a full guess buffer against the secret row
///
/// # Errors
/// Returns `WordError` if the buffer is not full or the secret row does not
/// spell a five-letter word.
pub fn evaluate_guess(
    guess: &Guess,
    secret: &BoardRow,
    key_tiles: &KeyTiles,
) -> Result<Evaluation, WordError> {
    let guess = guess.to_word()?;
    let answer = Word::new(secret.word())?;
    Ok(evaluate(&guess, &answer, key_tiles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn row_of(text: &str, make: fn(char) -> Tile) -> BoardRow {
        let letters: Vec<char> = text.chars().collect();
        BoardRow::new(std::array::from_fn(|i| make(letters[i])))
    }

    #[test]
    fn exact_guess_is_all_hits() {
        let eval = evaluate(&word("world"), &word("world"), &KeyTiles::new());

        assert_eq!(eval.row, BoardRow::hit_from_str("world").unwrap());
        assert!(eval.row.is_guessed());
        for c in "WORLD".chars() {
            assert_eq!(eval.key_tiles.color_of(c), Some(KeyColor::Hit));
        }
    }

    #[test]
    fn disjoint_guess_is_all_misses() {
        let eval = evaluate(&word("wurst"), &word("hello"), &KeyTiles::new());

        assert_eq!(eval.row, row_of("WURST", Tile::Miss));
        for c in "WURST".chars() {
            assert_eq!(eval.key_tiles.color_of(c), Some(KeyColor::Miss));
        }
        assert_eq!(eval.key_tiles.color_of('H'), Some(KeyColor::Unset));
    }

    #[test]
    fn rearranged_letters_are_misplaced() {
        let eval = evaluate(&word("lohel"), &word("hello"), &KeyTiles::new());

        assert_eq!(eval.row, row_of("LOHEL", Tile::Misplaced));
        for c in "LOHE".chars() {
            assert_eq!(eval.key_tiles.color_of(c), Some(KeyColor::Misplaced));
        }
    }

    #[test]
    fn repeated_letter_beyond_budget_is_miss() {
        // WORLD has one L; only the first L of LLAMA can be reported
        let tiles = score(&word("llama"), &word("world"));
        assert_eq!(tiles[0], Tile::Misplaced('L'));
        assert_eq!(tiles[1], Tile::Miss('L'));
    }

    #[test]
    fn exact_match_takes_budget_before_misplaced() {
        // The only L of WORLD is matched exactly, so the earlier Ls get nothing
        let tiles = score(&word("lolly"), &word("world"));
        assert_eq!(
            tiles,
            [
                Tile::Miss('L'),
                Tile::Hit('O'),
                Tile::Miss('L'),
                Tile::Hit('L'),
                Tile::Miss('Y'),
            ]
        );
    }

    #[test]
    fn hit_count_equals_positional_matches() {
        let pairs = [
            ("crane", "slate"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("hello", "world"),
            ("lohel", "hello"),
            ("aaaaa", "alarm"),
        ];
        for (g, a) in pairs {
            let (guess, answer) = (word(g), word(a));
            let hits = score(&guess, &answer).iter().filter(|t| t.is_hit()).count();
            let matches = (0..WORD_LENGTH)
                .filter(|&i| guess.letters()[i] == answer.letters()[i])
                .count();
            assert_eq!(hits, matches, "{g} vs {a}");
        }
    }

    #[test]
    fn letters_never_over_reported() {
        let pairs = [("aaaaa", "alarm"), ("lolly", "hello"), ("speed", "erase")];
        for (g, a) in pairs {
            let answer = word(a);
            let tiles = score(&word(g), &answer);
            for (letter, budget) in answer.letter_counts() {
                let reported = tiles
                    .iter()
                    .filter(|t| matches!(t, Tile::Hit(c) | Tile::Misplaced(c) if *c == char::from(letter)))
                    .count();
                assert!(reported <= usize::from(budget), "{g} vs {a}");
            }
        }
    }

    #[test]
    fn every_position_is_scored() {
        let tiles = score(&word("speed"), &word("erase"));
        assert!(tiles.iter().all(|t| t.is_evaluated()));
        assert_eq!(BoardRow::new(tiles).word(), "SPEED");
    }

    #[test]
    fn key_colors_never_downgrade_within_guess() {
        // First L misses, the later two hit
        let eval = evaluate(&word("lolly"), &word("hello"), &KeyTiles::new());
        assert_eq!(eval.key_tiles.color_of('L'), Some(KeyColor::Hit));
    }

    #[test]
    fn key_colors_never_downgrade_across_guesses() {
        let first = evaluate(&word("world"), &word("world"), &KeyTiles::new());
        let second = evaluate(&word("lowly"), &word("world"), &first.key_tiles);
        assert_eq!(second.key_tiles.color_of('W'), Some(KeyColor::Hit));
        assert_eq!(second.key_tiles.color_of('L'), Some(KeyColor::Hit));
    }

    #[test]
    fn evaluate_guess_uses_secret_row() {
        let secret = BoardRow::hit_from_str("hello").unwrap();
        let eval = evaluate_guess(&Guess::from("wurst"), &secret, &KeyTiles::new()).unwrap();
        assert_eq!(eval.row, row_of("WURST", Tile::Miss));
    }

    #[test]
    fn evaluate_guess_rejects_partial_buffer() {
        let secret = BoardRow::hit_from_str("hello").unwrap();
        assert_eq!(
            evaluate_guess(&Guess::from("wur"), &secret, &KeyTiles::new()),
            Err(WordError::InvalidLength(3))
        );
    }
}
