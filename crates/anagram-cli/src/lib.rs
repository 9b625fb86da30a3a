// anagram-cli: argument definitions and shared helpers for the
// anagram-finder binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anagram_index::{Anagrams, Backend, DuplicatePolicy, IndexError, IndexOptions};
use clap::Parser;
use tracing::Level;

/// Printed instead of a word list when a query has no anagrams.
pub const NO_ANAGRAMS_MESSAGE: &str = "No anagrams found.";

/// Command line arguments of `anagram-finder`.
#[derive(Parser, Debug)]
#[command(name = "anagram-finder", version)]
#[command(about = "Print the anagrams of a word found in a dictionary file")]
pub struct FinderArgs {
    /// Word to find anagrams for
    pub word: String,

    /// Dictionary file, one word per line
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Data structure holding the index
    #[arg(value_name = "bst|avl|hash")]
    pub structure: String,

    /// Stop indexing at the first duplicate word instead of skipping it
    #[arg(long)]
    pub stop_on_duplicate: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl FinderArgs {
    /// Validate the backend name and assemble the build options.
    pub fn options(&self) -> Result<IndexOptions, IndexError> {
        let backend: Backend = self.structure.parse()?;
        let policy = if self.stop_on_duplicate {
            DuplicatePolicy::StopBuild
        } else {
            DuplicatePolicy::Skip
        };
        Ok(IndexOptions::new(backend).with_duplicate_policy(policy))
    }
}

/// Parse command line arguments, exiting on failure.
///
/// Usage errors exit with code 1; `--help` and `--version` exit with 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    }
}

/// Install the stderr log subscriber. Only warnings are shown unless
/// `verbose` is set, so stdout carries nothing but results.
pub fn init_tracing(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Write a query result: one anagram per line, or the no-anagrams message.
pub fn write_anagrams<W: Write>(out: &mut W, anagrams: &Anagrams) -> io::Result<()> {
    match anagrams {
        Anagrams::Found(words) => {
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
        Anagrams::NoAnagrams => writeln!(out, "{NO_ANAGRAMS_MESSAGE}")?,
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
