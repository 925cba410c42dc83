//! Incremental tokenizer splitting a translation dump into record blocks.
//!
//! Record blocks are separated by a blank line (two consecutive newlines).
//! The dump may begin with a column-header line (`Pro ...`) which is never
//! part of any record's text, and must terminate on an empty line or a
//! single trailing newline.

use crate::error::{NatStatError, Result};
use std::io::BufRead;

/// Blank-line separator between record blocks.
const RECORD_SEP: &[u8] = b"\n\n";

/// Leading token of the column-header line.
const HEADER_TOKEN: &[u8] = b"Pro";

/// Outcome of one incremental split step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitStep {
    /// No separator in the buffered data and the stream is still open;
    /// nothing was consumed, the caller should buffer more input.
    NeedMoreData,
    /// The buffer is exhausted at end-of-input.
    EndOfStream,
    /// One record block was delimited. `consumed` counts the bytes through
    /// the separator; `text` excludes the separator and any header line.
    Block { consumed: usize, text: String },
}

/// Performs one split step over the buffered bytes.
///
/// A block is everything up to the first blank-line separator or, at
/// end-of-input, everything up to a single trailing newline. Reaching
/// end-of-input with unterminated data is a [`NatStatError::MalformedStream`].
pub fn split_block(data: &[u8], at_eof: bool) -> Result<SplitStep> {
    if data.is_empty() && at_eof {
        return Ok(SplitStep::EndOfStream);
    }

    let (consumed, end) = match find_separator(data) {
        Some(i) => (i + RECORD_SEP.len(), i),
        None if !at_eof => return Ok(SplitStep::NeedMoreData),
        None => {
            if data.ends_with(b"\n") {
                (data.len(), data.len() - 1)
            } else {
                return Err(NatStatError::MalformedStream);
            }
        }
    };

    // The header line, when present, never belongs to a record.
    let start = if data.starts_with(HEADER_TOKEN) {
        match data[..end].iter().position(|&b| b == b'\n') {
            Some(newline) => newline + 1,
            None => end,
        }
    } else {
        0
    };

    let text = std::str::from_utf8(&data[start..end])?.to_string();
    Ok(SplitStep::Block { consumed, text })
}

fn find_separator(data: &[u8]) -> Option<usize> {
    data.windows(RECORD_SEP.len()).position(|w| w == RECORD_SEP)
}

/// Pull-based iterator of record blocks over a byte stream.
///
/// Drives [`split_block`] over a growing internal buffer, reading more input
/// whenever no complete block is available yet. Single forward pass:
/// consumed bytes are never re-examined, and iteration stops after the
/// first error.
pub struct RecordBlocks<R> {
    reader: R,
    buffer: Vec<u8>,
    at_eof: bool,
    failed: bool,
}

impl<R: BufRead> RecordBlocks<R> {
    pub fn new(reader: R) -> Self {
        RecordBlocks {
            reader,
            buffer: Vec::new(),
            at_eof: false,
            failed: false,
        }
    }

    fn fill(&mut self) -> Result<()> {
        let chunk = self.reader.fill_buf()?;
        if chunk.is_empty() {
            self.at_eof = true;
            return Ok(());
        }
        self.buffer.extend_from_slice(chunk);
        let n = chunk.len();
        self.reader.consume(n);
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordBlocks<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            match split_block(&self.buffer, self.at_eof) {
                Ok(SplitStep::EndOfStream) => return None,
                Ok(SplitStep::NeedMoreData) => {
                    if let Err(err) = self.fill() {
                        self.failed = true;
                        return Some(Err(err));
                    }
                }
                Ok(SplitStep::Block { consumed, text }) => {
                    self.buffer.drain(..consumed);
                    return Some(Ok(text));
                }
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
