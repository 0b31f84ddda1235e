use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use crate::counter;

#[derive(Debug)]
pub enum Error {
    /// The named file could not be opened for reading
    OpenFailed(PathBuf, io::Error),
    /// The underlying stream reported an I/O error before end-of-stream
    ReadFailed(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OpenFailed(path, err) => {
                write!(f, "cannot open {}: {}", path.display(), err)
            }
            Error::ReadFailed(err) => write!(f, "read failed: {}", err),
        }
    }
}

/// Which metric (or combination) the first command-line argument asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Bytes,
    Lines,
    Words,
    Combined,
}

impl Selector {
    /// Matches the selector argument as a literal. Returns None for
    /// anything other than the four known flags.
    pub fn from_flag(flag: &str) -> Option<Selector> {
        match flag {
            "-c" => Some(Selector::Bytes),
            "-l" => Some(Selector::Lines),
            "-w" => Some(Selector::Words),
            "-m" => Some(Selector::Combined),
            _ => None,
        }
    }
}

/// Where the input bytes come from. A file can be reopened and re-read
/// within one invocation; stdin can only be consumed once.
#[derive(Debug)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn from_path(path: Option<PathBuf>) -> Source {
        match path {
            Some(path) => Source::File(path),
            None => Source::Stdin,
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, Error> {
        match self {
            Source::File(path) => {
                let file =
                    File::open(path).map_err(|err| Error::OpenFailed(path.clone(), err))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

/// One invocation's result, ready to be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Bytes(usize),
    Lines(usize),
    Words(usize),
    Combined {
        bytes: usize,
        lines: usize,
        words: usize,
    },
}

// The exact wording (including the doubled and trailing spaces) is part of
// the output contract; downstream scripts match on it.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Bytes(count) => write!(f, "Size of file is  {} ", count),
            Report::Lines(count) => write!(f, "The number of lines are {} ", count),
            Report::Words(count) => write!(f, "The number of words are {} ", count),
            Report::Combined {
                bytes,
                lines,
                words,
            } => write!(f, "Bytes: {}, Lines: {}, Words: {}", bytes, lines, words),
        }
    }
}

/// Runs the requested counting pass(es) against the source.
///
/// Single-metric modes consume one reader. Combined mode on a file opens a
/// fresh handle per metric, each dropped before the next open, so every
/// pass sees the complete content. Combined mode on stdin buffers the
/// stream once, takes the byte count from the buffer length, and runs the
/// line and word counters over independent views of that buffer.
pub fn run(selector: Selector, source: &Source) -> Result<Report, Error> {
    match selector {
        Selector::Bytes => {
            let count = counter::count_bytes(source.open()?).map_err(Error::ReadFailed)?;
            Ok(Report::Bytes(count))
        }
        Selector::Lines => {
            let count = counter::count_lines(source.open()?).map_err(Error::ReadFailed)?;
            Ok(Report::Lines(count))
        }
        Selector::Words => {
            let count = counter::count_words(source.open()?).map_err(Error::ReadFailed)?;
            Ok(Report::Words(count))
        }
        Selector::Combined => match source {
            Source::File(_) => {
                let bytes = counter::count_bytes(source.open()?).map_err(Error::ReadFailed)?;
                let lines = counter::count_lines(source.open()?).map_err(Error::ReadFailed)?;
                let words = counter::count_words(source.open()?).map_err(Error::ReadFailed)?;
                Ok(Report::Combined {
                    bytes,
                    lines,
                    words,
                })
            }
            Source::Stdin => {
                let mut content = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut content)
                    .map_err(Error::ReadFailed)?;
                let lines = counter::count_lines(&content[..]).map_err(Error::ReadFailed)?;
                let words = counter::count_words(&content[..]).map_err(Error::ReadFailed)?;
                Ok(Report::Combined {
                    bytes: content.len(),
                    lines,
                    words,
                })
            }
        },
    }
}
