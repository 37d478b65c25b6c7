//! Reading the `n m e` header and the edge list.
//!
//! Tokens are pulled line by line, so an interactive user sees the edge prompt
//! right after entering the header.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, InputError};

/// Whitespace-separated tokens from a buffered reader.
pub struct TokenReader<R> {
    /// Source of input lines.
    reader: R,
    /// Tokens from the last line not consumed yet.
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `reader`; nothing is read until the first token is requested.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next token as a signed integer.
    ///
    /// # Errors
    ///
    /// Fails if input ends, the token is not an integer, or reading fails.
    pub fn next_int(&mut self, what: &'static str) -> Result<i64, CliError> {
        let token = self.next_token()?.ok_or(InputError::missing(what))?;
        token
            .parse::<i64>()
            .map_err(|_| InputError::malformed(what, token).into())
    }
}

/// Validated vertex and edge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Left vertices, `n`.
    pub left_count: usize,
    /// Right vertices, `m`.
    pub right_count: usize,
    /// Edges that follow, `e`.
    pub edge_count: usize,
}

impl Header {
    /// Checks `n > 0`, `m > 0` and `e >= 0`.
    ///
    /// # Errors
    ///
    /// Returns the first count that breaks its rule.
    pub fn validate(n: i64, m: i64, e: i64) -> Result<Self, InputError> {
        let positive = |what, value: i64| {
            usize::try_from(value)
                .ok()
                .filter(|&count| count > 0)
                .ok_or(InputError::NonPositiveCount { what, value })
        };

        Ok(Self {
            left_count: positive("left vertex count", n)?,
            right_count: positive("right vertex count", m)?,
            edge_count: usize::try_from(e).map_err(|_| InputError::NegativeEdgeCount(e))?,
        })
    }

    /// Reads and validates the three header counts.
    ///
    /// # Errors
    ///
    /// Fails on missing or malformed tokens and on invalid counts.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, CliError> {
        let n = tokens.next_int("left vertex count")?;
        let m = tokens.next_int("right vertex count")?;
        let e = tokens.next_int("edge count")?;
        Ok(Self::validate(n, m, e)?)
    }
}

/// An edge exactly as read, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEdge {
    /// Left endpoint as written.
    pub left: i64,
    /// Right endpoint as written.
    pub right: i64,
}

impl RawEdge {
    /// Reads one `u v` pair.
    ///
    /// # Errors
    ///
    /// Fails if either token is missing or not an integer.
    pub fn read<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self, CliError> {
        Ok(Self {
            left: tokens.next_int("edge endpoint")?,
            right: tokens.next_int("edge endpoint")?,
        })
    }

    /// Both endpoints as unsigned ids, or `None` if either is negative.
    pub fn endpoints(self) -> Option<(usize, usize)> {
        Some((
            usize::try_from(self.left).ok()?,
            usize::try_from(self.right).ok()?,
        ))
    }
}

/// Opens `path` as a token source.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<TokenReader<BufReader<File>>, CliError> {
    let file = File::open(path)?;
    Ok(TokenReader::new(BufReader::new(file)))
}
