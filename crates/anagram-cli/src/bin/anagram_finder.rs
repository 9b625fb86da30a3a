// anagram-finder: Print the anagrams of a word found in a dictionary file.
//
// Builds an anagram index over the dictionary (one word per line) using the
// chosen data structure, then prints every anagram of WORD on its own line,
// sorted, or "No anagrams found.".
//
// Usage:
//   anagram-finder [OPTIONS] <WORD> <DICTIONARY> <bst|avl|hash>
//
// Options:
//   --stop-on-duplicate   Stop indexing at the first duplicate word
//   -v, --verbose         Log build details to stderr
//   -h, --help            Print help
//
// Exit codes: 0 on success (with or without anagrams), 1 on any error.

use std::io::{self, Write};

use anagram_cli::{FinderArgs, fatal, init_tracing, parse_or_exit, write_anagrams};
use anagram_index::AnagramFinder;
use tracing::debug;

fn main() {
    let args: FinderArgs = parse_or_exit();
    init_tracing(args.verbose);

    if !args.dictionary.exists() {
        fatal(&format!(
            "cannot open file '{}' for input",
            args.dictionary.display()
        ));
    }

    let options = args.options().unwrap_or_else(|e| fatal(&e.to_string()));
    debug!(?options, dictionary = %args.dictionary.display(), "building index");

    let finder =
        AnagramFinder::from_file(&args.dictionary, options).unwrap_or_else(|e| fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let anagrams = finder.anagrams(&args.word);
    if let Err(e) = write_anagrams(&mut out, &anagrams).and_then(|()| out.flush()) {
        fatal(&format!("failed to write output: {e}"));
    }
}
