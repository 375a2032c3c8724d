//! Filters a word list down to the words consistent with what a Wordle-style game has revealed:
//! letters in the correct spot, letters in the word but in the wrong spot, and letters that are
//! not in the word at all.
//!
//! ```
//! use std::io::Cursor;
//! use word_guesser::{filter_words, Constraint, GuesserError};
//!
//! let constraint = Constraint::build("5:e", "", "")?;
//! let words = filter_words(Cursor::new("apple\nmango\ngrape\n"), &constraint)?;
//!
//! assert_eq!(words, vec!["apple", "grape"]);
//! # Ok::<(), GuesserError>(())
//! ```

mod config;
mod constraint;
mod dictionary;
mod error;
mod filter;

pub use config::guess_words;
pub use config::GuessConfig;
pub use constraint::Constraint;
pub use constraint::LetterSpots;
pub use dictionary::Dictionary;
pub use error::GuesserError;
pub use error::Result;
pub use filter::filter_words;
pub use filter::WordFilter;
