use crate::error::GuesserError;
use crate::error::Result;
use crate::filter::WordFilter;
use std::collections::HashMap;
use std::collections::HashSet;
use tracing::debug;

/// Maps a one-based position in a word to a set of letters.
pub type LetterSpots = HashMap<usize, HashSet<char>>;

/// Defines the letter rules that a candidate word must adhere to.
///
/// A `Constraint` is built once from the user's spec strings and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    /// Letters that are acceptable at specific positions.
    correct_spots: LetterSpots,
    /// Letters that are in the word, but not at these positions.
    wrong_spots: LetterSpots,
    /// Letters that must not be anywhere in the word.
    invalid: HashSet<char>,
}

impl Constraint {
    /// Builds a constraint from the three spec strings.
    ///
    /// `correct_spot_spec` and `wrong_spot_spec` use the format
    /// `<position>:<letter>,<letter>;<position>:<letter>`, with one-based positions. The
    /// `invalid_spec` is a plain comma-separated list of letters. Any of these may be empty.
    ///
    /// Every clause of both spot specs is checked for shape before any position is parsed, so a
    /// badly-shaped clause is reported as [`GuesserError::MalformedSpec`] even when another clause
    /// also has a bad position.
    pub fn build(
        correct_spot_spec: &str,
        wrong_spot_spec: &str,
        invalid_spec: &str,
    ) -> Result<Constraint> {
        validate_clauses(correct_spot_spec)?;
        validate_clauses(wrong_spot_spec)?;
        let constraint = Constraint {
            correct_spots: parse_letter_spots(correct_spot_spec)?,
            wrong_spots: parse_letter_spots(wrong_spot_spec)?,
            invalid: parse_letters(invalid_spec)?,
        };
        debug!(
            correct_spots = constraint.correct_spots.len(),
            wrong_spots = constraint.wrong_spots.len(),
            invalid = constraint.invalid.len(),
            "built constraint"
        );
        Ok(constraint)
    }

    pub fn correct_spots(&self) -> &LetterSpots {
        &self.correct_spots
    }

    pub fn wrong_spots(&self) -> &LetterSpots {
        &self.wrong_spots
    }

    pub fn invalid(&self) -> &HashSet<char> {
        &self.invalid
    }

    /// Returns the letters acceptable at the given one-based position, if that position is
    /// constrained.
    pub fn correct_at(&self, position: usize) -> Option<&HashSet<char>> {
        self.correct_spots.get(&position)
    }

    /// Returns the letters known not to be at the given one-based position, if any.
    pub fn wrong_at(&self, position: usize) -> Option<&HashSet<char>> {
        self.wrong_spots.get(&position)
    }

    pub fn is_invalid(&self, letter: char) -> bool {
        self.invalid.contains(&letter)
    }

    /// Returns every letter that appears in any wrong-spot rule. Each of these must be somewhere
    /// in a matching word.
    pub fn required_letters(&self) -> HashSet<char> {
        self.wrong_spots
            .values()
            .flat_map(|letters| letters.iter().copied())
            .collect()
    }

    /// Returns `true` if there are no rules at all, in which case every word matches.
    pub fn is_empty(&self) -> bool {
        self.correct_spots.is_empty() && self.wrong_spots.is_empty() && self.invalid.is_empty()
    }

    /// Returns `true` iff the given word satisfies this constraint.
    ///
    /// When checking many words, prefer a [`WordFilter`], which computes the required letters only
    /// once.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        WordFilter::new(self).matches(word)
    }
}

fn clauses(spec: &str) -> impl Iterator<Item = &str> {
    let is_empty = spec.is_empty();
    spec.split(';').filter(move |_| !is_empty)
}

fn split_clause(clause: &str) -> Result<(&str, &str)> {
    let mut parts = clause.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(position), Some(letters), None) => Ok((position, letters)),
        _ => Err(GuesserError::MalformedSpec(clause.to_string())),
    }
}

fn validate_clauses(spec: &str) -> Result<()> {
    for clause in clauses(spec) {
        split_clause(clause)?;
    }
    Ok(())
}

fn parse_position(token: &str) -> Result<usize> {
    match token.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(GuesserError::InvalidPosition(token.to_string())),
    }
}

fn parse_letter_spots(spec: &str) -> Result<LetterSpots> {
    let mut spots = LetterSpots::new();
    for clause in clauses(spec) {
        let (position, letters) = split_clause(clause)?;
        let position = parse_position(position)?;
        let letters = parse_letters(letters)?;
        spots.entry(position).or_default().extend(letters);
    }
    Ok(spots)
}

fn parse_letters(list: &str) -> Result<HashSet<char>> {
    let mut letters = HashSet::new();
    for token in list.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                letters.insert(letter);
            }
            _ => return Err(GuesserError::InvalidLetter(token.to_string())),
        }
    }
    Ok(letters)
}
