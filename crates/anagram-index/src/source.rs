// Dictionary word source: one word per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::IndexError;

/// Read all words from a reader, one per line.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is stripped
/// and nothing else is trimmed. Empty lines are kept as (empty) words.
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the
/// whole dictionary.
pub fn read_words_from<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        words.extend(
            line.split(|&b| b == b'\r')
                .map(|word| String::from_utf8_lossy(word).into_owned()),
        );
    }
    Ok(words)
}

/// Read all words from the dictionary file at `path`.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>, IndexError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| IndexError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let words = read_words_from(BufReader::new(file)).map_err(io_error)?;
    info!(path = %path.display(), words = words.len(), "dictionary loaded");
    Ok(words)
}
