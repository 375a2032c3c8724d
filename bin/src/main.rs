use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use word_guesser::*;

/// Lists the words in a dictionary that fit what is known about a Wordle-style puzzle's answer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the dictionary file, with one word on each line.
    #[arg(long)]
    dictionary: PathBuf,

    /// Characters in the correct spots.
    /// Format : <position1>:<characters>;<position2>:<characters>,...
    /// Example: 1:e;2:p;3:o
    #[arg(long, default_value = "", verbatim_doc_comment)]
    correct_spot: String,

    /// Characters in the wrong spots.
    /// Format : <position1>:<characters>;<position2>:<characters>,...
    /// Example: 2:e;3:p,e;4:o
    #[arg(long, default_value = "", verbatim_doc_comment)]
    wrong_spot: String,

    /// Invalid characters.
    /// Format : <chars>
    /// Example: t,a,s,d
    #[arg(long, default_value = "", verbatim_doc_comment)]
    invalid: String,

    /// Logs debug information to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> GuessConfig {
        GuessConfig::new(self.dictionary)
            .with_correct_spot(self.correct_spot)
            .with_wrong_spot(self.wrong_spot)
            .with_invalid(self.invalid)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.into_config();
    debug!(?config, "starting");

    match guess_words(&config) {
        Ok(words) => {
            println!("Possible words:");
            for word in words.iter() {
                println!("- {}", word);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.is_usage_error() {
                eprintln!("{}", Args::command().render_help());
            }
            ExitCode::FAILURE
        }
    }
}
