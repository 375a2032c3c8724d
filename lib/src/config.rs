use crate::constraint::Constraint;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::filter::WordFilter;
use std::path::PathBuf;

/// Everything needed for a single guessing run.
///
/// The spot specs use the format `<position>:<letter>,<letter>;<position>:<letter>` with one-based
/// positions, and the invalid spec is a comma-separated list of letters. All specs default to
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessConfig {
    /// Path to a file with one candidate word per line.
    pub dictionary: PathBuf,
    /// Letters known to be at specific positions.
    pub correct_spot: String,
    /// Letters known to be in the word, but not at specific positions.
    pub wrong_spot: String,
    /// Letters known not to be in the word.
    pub invalid: String,
}

impl GuessConfig {
    pub fn new<P: Into<PathBuf>>(dictionary: P) -> Self {
        GuessConfig {
            dictionary: dictionary.into(),
            ..Default::default()
        }
    }

    pub fn with_correct_spot<S: Into<String>>(mut self, spec: S) -> Self {
        self.correct_spot = spec.into();
        self
    }

    pub fn with_wrong_spot<S: Into<String>>(mut self, spec: S) -> Self {
        self.wrong_spot = spec.into();
        self
    }

    pub fn with_invalid<S: Into<String>>(mut self, spec: S) -> Self {
        self.invalid = spec.into();
        self
    }

    /// Builds the constraint described by this config's specs.
    pub fn constraint(&self) -> Result<Constraint> {
        Constraint::build(&self.correct_spot, &self.wrong_spot, &self.invalid)
    }
}

/// Returns every word in the configured dictionary that is consistent with the configured specs,
/// in dictionary order.
///
/// The dictionary is opened before the specs are parsed, so a missing dictionary is reported
/// first. No words are returned if any error occurs.
pub fn guess_words(config: &GuessConfig) -> Result<Vec<String>> {
    let dictionary = Dictionary::open(&config.dictionary)?;
    let constraint = config.constraint()?;
    WordFilter::new(&constraint).filter(dictionary.words())
}
