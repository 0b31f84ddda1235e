use std::io::{self, BufRead, Read};

const CHUNK_SIZE: usize = 8192;

/// Consumes the reader to end-of-stream and returns the total number of
/// bytes read. An empty stream yields 0. On a read error the partial count
/// is discarded.
pub fn count_bytes<R: Read>(mut reader: R) -> Result<usize, io::Error> {
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut total = 0;
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}

/// Consumes the reader and returns the number of newline-delimited
/// segments. A final segment with content but no trailing newline still
/// counts as one line, so an empty stream yields 0 and a lone `\n` yields 1.
pub fn count_lines<R: BufRead>(mut reader: R) -> Result<usize, io::Error> {
    let mut count = 0;
    let mut segment = Vec::new();
    loop {
        segment.clear();
        if reader.read_until(b'\n', &mut segment)? == 0 {
            break;
        }
        count += 1;
    }
    Ok(count)
}

// Space, tab, newline, carriage return, vertical tab, form feed.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Consumes the reader and returns the number of words, where a word is a
/// maximal run of non-whitespace bytes. Runs of whitespace are delimiters
/// and never produce empty words.
pub fn count_words<R: BufRead>(mut reader: R) -> Result<usize, io::Error> {
    let mut count = 0;
    let mut in_word = false;
    loop {
        let n = {
            let chunk = reader.fill_buf()?;
            if chunk.is_empty() {
                break;
            }
            for &byte in chunk {
                if is_separator(byte) {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    count += 1;
                }
            }
            chunk.len()
        };
        reader.consume(n);
    }
    Ok(count)
}
