use core::fmt;
use core::ops::Range;
use std::path::Path;

use bstr::{BString, ByteSlice};

use crate::input::{ParseError, NL};

/// Associate a parse error with the file and line it was raised for.
///
/// `data` must be the buffer the error's span refers to.
pub fn error_context<E>(path: &Path, data: &[u8], error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_range(&error);
    let (pos, line) = pos_from(data, span);

    error.context(ErrorContext {
        path: path.into(),
        pos,
        line: line.trim_end().into(),
    })
}

/// A 1-based line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The line number, starting at 1.
    pub(crate) fn line(&self) -> usize {
        self.line + 1
    }

    /// The column, counted in bytes and starting at 1.
    pub(crate) fn column(&self) -> usize {
        self.column + 1
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

/// Get the position of the start of a span and the line it's on.
pub(crate) fn pos_from(data: &[u8], span: Range<usize>) -> (LineCol, &[u8]) {
    let at = span.start.min(data.len());
    let before = data.get(..at).unwrap_or_default();

    let (line, start) = match memchr::memrchr(NL, before) {
        Some(n) => (memchr::memchr_iter(NL, before).count(), n + 1),
        None => (0, 0),
    };

    let rest = data.get(start..).unwrap_or_default();
    let end = memchr::memchr(NL, rest).unwrap_or(rest.len());

    (
        LineCol::new(line, at - start),
        rest.get(..end).unwrap_or_default(),
    )
}

/// Need to be able to unwrap an error fully in case it's threaded through
/// multiple layers of processing.
fn find_range(error: &anyhow::Error) -> Range<usize> {
    match error.downcast_ref::<ParseError>() {
        Some(e) => e.span(),
        None => 0..0,
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: Box<Path>,
    pos: LineCol,
    line: BString,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{path}:{pos}: `{line}`",
            path = self.path.display(),
            pos = self.pos,
            line = self.line
        )
    }
}
