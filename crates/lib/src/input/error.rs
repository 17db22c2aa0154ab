use core::fmt;
use core::ops::Range;

/// The kind of a [ParseError].
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Digits were found, but they don't fit the integer being parsed.
    NotInteger(Box<str>),
    NotUtf8,
    ExpectedInteger,
    ExpectedChar(char),
    UnexpectedEof,
    TrailingInput,
    /// Error raised by a [from_input!][crate::from_input] conversion.
    Custom(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedInteger => write!(f, "expected integer"),
            ErrorKind::ExpectedChar(c) => write!(f, "expected `{c}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::TrailingInput => write!(f, "trailing input"),
            ErrorKind::Custom(error) => write!(f, "custom: {error}"),
        }
    }
}

/// Error raised through input processing.
#[derive(Debug)]
pub struct ParseError {
    pub(crate) span: Range<usize>,
    pub(crate) kind: ErrorKind,
}

impl ParseError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The absolute byte range the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for ParseError {}
