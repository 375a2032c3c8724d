use crate::constraint::Constraint;
use crate::dictionary::Dictionary;
use crate::error::Result;
use std::collections::HashSet;
use std::io;
use std::io::BufRead;
use tracing::debug;

/// Checks words against a [`Constraint`].
///
/// The set of letters required by the wrong-spot rules is computed once on construction.
pub struct WordFilter<'a> {
    constraint: &'a Constraint,
    required_letters: HashSet<char>,
}

impl<'a> WordFilter<'a> {
    pub fn new(constraint: &'a Constraint) -> WordFilter<'a> {
        WordFilter {
            constraint,
            required_letters: constraint.required_letters(),
        }
    }

    /// Returns `true` iff the given word is consistent with the constraint.
    ///
    /// Empty words never match. Rules for positions past the end of the word are ignored.
    ///
    /// Presence of the required letters is approximated: every occurrence of any required letter
    /// counts once, and the word passes if that count reaches the number of distinct required
    /// letters. A repeated required letter can therefore stand in for a missing one, e.g. with
    /// required letters `{a, b}` the word `"aa"` passes this check.
    pub fn matches(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let num_required_found = word
            .chars()
            .filter(|letter| self.required_letters.contains(letter))
            .count();
        if num_required_found < self.required_letters.len() {
            return false;
        }
        // Rules are checked per position in this order: invalid, then correct, then wrong.
        word.chars().enumerate().all(|(index, letter)| {
            let position = index + 1;
            if self.constraint.is_invalid(letter) {
                return false;
            }
            if let Some(correct) = self.constraint.correct_at(position) {
                if !correct.contains(&letter) {
                    return false;
                }
            }
            if let Some(wrong) = self.constraint.wrong_at(position) {
                if wrong.contains(&letter) {
                    return false;
                }
            }
            true
        })
    }

    /// Returns every matching word, in the order given.
    ///
    /// Stops at the first read error, discarding any matches found so far.
    pub fn filter<I>(&self, words: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut num_scanned: usize = 0;
        let mut matching_words = Vec::new();
        for word in words {
            let word = word?;
            num_scanned += 1;
            if self.matches(&word) {
                matching_words.push(word);
            }
        }
        debug!(
            scanned = num_scanned,
            matched = matching_words.len(),
            "filtered words"
        );
        Ok(matching_words)
    }
}

/// Reads one word per line from the given reader and returns those that satisfy the constraint.
///
/// Blank lines are skipped.
pub fn filter_words<R: BufRead>(reader: R, constraint: &Constraint) -> Result<Vec<String>> {
    WordFilter::new(constraint).filter(Dictionary::from_reader(reader).words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuesserError;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    fn words(list: &[&str]) -> Vec<io::Result<String>> {
        list.iter().map(|word| Ok(word.to_string())).collect()
    }

    #[test]
    fn matches_empty_constraint() -> Result<()> {
        let constraint = Constraint::build("", "", "")?;
        let filter = WordFilter::new(&constraint);

        assert!(filter.matches("a"));
        assert!(filter.matches("zzzzz"));
        assert!(filter.matches("naïve"));
        assert!(!filter.matches(""));
        Ok(())
    }

    #[test]
    fn matches_correct_spot() -> Result<()> {
        let constraint = Constraint::build("5:e", "", "")?;
        let filter = WordFilter::new(&constraint);

        assert!(filter.matches("apple"));
        assert!(!filter.matches("mango"));
        Ok(())
    }

    #[test]
    fn matches_correct_spot_with_alternatives() -> Result<()> {
        let constraint = Constraint::build("1:c,t", "", "")?;
        let filter = WordFilter::new(&constraint);

        assert!(filter.matches("crate"));
        assert!(filter.matches("trace"));
        assert!(!filter.matches("react"));
        Ok(())
    }

    #[test]
    fn matches_ignores_positions_past_word_end() -> Result<()> {
        let constraint = Constraint::build("6:x", "", "")?;
        let filter = WordFilter::new(&constraint);

        assert!(filter.matches("crate"));
        assert!(!filter.matches("crates"));
        Ok(())
    }

    #[test]
    fn matches_wrong_spot() -> Result<()> {
        let constraint = Constraint::build("", "1:t", "")?;
        let filter = WordFilter::new(&constraint);

        assert!(filter.matches("crate"));
        assert!(filter.matches("react"));
        assert!(!filter.matches("trace"));
        assert!(!filter.matches("mango"));
        Ok(())
    }

    #[test]
    fn matches_invalid_anywhere() -> Result<()> {
        let constraint = Constraint::build("", "", "a,s")?;
        let filter = WordFilter::new(&constraint);

        assert!(!filter.matches("slate"));
        assert!(!filter.matches("bonus"));
        assert!(filter.matches("crony"));
        assert!(filter.matches("glyph"));
        Ok(())
    }

    #[test]
    fn matches_invalid_takes_precedence_over_correct() -> Result<()> {
        let constraint = Constraint::build("1:a", "", "a")?;

        assert!(!constraint.is_satisfied_by("apple"));
        assert!(!constraint.is_satisfied_by("mango"));
        Ok(())
    }

    #[test]
    fn matches_counts_repeated_required_letters() -> Result<()> {
        let constraint = Constraint::build("", "3:a;4:b", "")?;
        let filter = WordFilter::new(&constraint);

        // Two occurrences of 'a' cover both required letters even though 'b' is missing.
        assert!(filter.matches("aaxx"));
        assert!(filter.matches("baxx"));
        assert!(!filter.matches("axxx"));
        Ok(())
    }

    #[test]
    fn matches_multibyte_positions() -> Result<()> {
        let constraint = Constraint::build("2:ï", "", "")?;

        assert!(constraint.is_satisfied_by("aïb"));
        assert!(!constraint.is_satisfied_by("ïab"));
        Ok(())
    }

    #[test]
    fn filter_preserves_order() -> Result<()> {
        let constraint = Constraint::build("5:e", "", "")?;

        let result = WordFilter::new(&constraint).filter(words(&["grape", "mango", "apple"]))?;

        assert_eq!(result, vec!["grape", "apple"]);
        Ok(())
    }

    #[test]
    fn filter_empty_input() -> Result<()> {
        let constraint = Constraint::build("1:a", "2:b", "c")?;

        assert!(WordFilter::new(&constraint).filter(words(&[]))?.is_empty());
        Ok(())
    }

    #[test]
    fn filter_stops_at_read_error() -> Result<()> {
        let constraint = Constraint::build("", "", "")?;
        let input = vec![
            Ok("apple".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad line")),
            Ok("grape".to_string()),
        ];

        assert_matches!(
            WordFilter::new(&constraint).filter(input),
            Err(GuesserError::Io(_))
        );
        Ok(())
    }

    #[test]
    fn filter_words_skips_blank_lines() -> Result<()> {
        let constraint = Constraint::build("", "", "")?;
        let reader = Cursor::new("apple\n\nmango\r\n\ngrape\n");

        let result = filter_words(reader, &constraint)?;

        assert_eq!(result, vec!["apple", "mango", "grape"]);
        Ok(())
    }
}
