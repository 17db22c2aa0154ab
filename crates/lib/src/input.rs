//! Input parser.

mod error;
mod lines;


use std::str::from_utf8;

pub use self::error::{ErrorKind, ParseError};
pub use self::lines::Lines;

pub(self) type Result<T> = std::result::Result<T, ParseError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// This is a cheap cursor over a borrowed buffer. Copying it and parsing from
/// the copy leaves the original untouched, which is how inputs are rewound.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Absolute index of the first byte in `data`.
    index: usize,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    ///
    /// `index` is the position of `data` inside of the buffer it was taken
    /// from, used to report errors.
    #[inline]
    pub fn new(data: &'a [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Iterate over the non-empty lines of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::IStr;
    ///
    /// let input = IStr::new(b"a\n\nb\n", 0);
    /// let lines = input.lines().map(|line| line.as_data()).collect::<Vec<_>>();
    /// assert_eq!(lines, [&b"a"[..], &b"b"[..]]);
    /// ```
    #[inline]
    pub fn lines(self) -> Lines<'a> {
        Lines::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Parse the remaining input as `T`, errors if anything but whitespace is
    /// left over once `T` has been parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::{IStr, Split};
    ///
    /// let mut input = IStr::new(b"1-2", 0);
    /// let Split(a, b) = input.complete::<Split<'-', u32>>()?;
    /// assert_eq!((a, b), (1, 2));
    ///
    /// let mut input = IStr::new(b"1-2-3", 0);
    /// assert!(input.complete::<Split<'-', u32>>().is_err());
    /// # Ok::<_, lib::ParseError>(())
    /// ```
    pub fn complete<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        let value = self.next()?;
        self.skip_ws();

        if !self.is_empty() {
            let end = self.index.saturating_add(self.len());
            return Err(ParseError::new(self.index..end, ErrorKind::TrailingInput));
        }

        Ok(value)
    }

    /// Parse the next non-empty line as `T`, errors with `Err(ParseError)` if
    /// the line is not a valid value of type `T`, returns `Ok(None)` if there
    /// are no more lines to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        let Some(mut line) = self.split_line() else {
            return Ok(None);
        };

        Ok(Some(line.complete()?))
    }

    /// Consume the given character, erroring if the input doesn't start with
    /// it.
    pub fn expect(&mut self, c: char) -> Result<()> {
        let mut buf = [0; 4];
        let expected = c.encode_utf8(&mut buf).as_bytes();

        if !self.data.starts_with(expected) {
            let end = self.index.saturating_add(self.len().min(1));
            return Err(ParseError::new(self.index..end, ErrorKind::ExpectedChar(c)));
        }

        self.advance(expected.len());
        Ok(())
    }

    /// Access the remaining input as a string.
    pub fn as_str(&self) -> Result<&'a str> {
        match from_utf8(self.data) {
            Ok(string) => Ok(string),
            Err(..) => Err(ParseError::new(
                self.index..self.index.saturating_add(self.len()),
                ErrorKind::NotUtf8,
            )),
        }
    }

    /// Split off the next line which is not empty.
    pub(crate) fn split_line(&mut self) -> Option<IStr<'a>> {
        loop {
            let line = self.split_once(NL)?;

            if !line.is_empty() {
                return Some(line);
            }
        }
    }

    /// Split once at the given byte or until the end of string, returning the
    /// new IStr associated with the split.
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let rest = *self;
            self.advance(self.data.len());
            return Some(rest);
        };

        let head = IStr::new(self.data.get(..at)?, self.index);
        self.advance(at.checked_add(1)?);
        Some(head)
    }

    /// Scan an optionally signed run of ascii digits, skipping leading
    /// whitespace. Returns the index the digits start at.
    fn scan_integer(&mut self) -> Option<(usize, &'a str)> {
        self.skip_ws();

        let sign = usize::from(matches!(self.data.first(), Some(b'+' | b'-')));
        let n = self.find(sign, |b| !b.is_ascii_digit());

        if n == sign {
            return None;
        }

        let string = from_utf8(self.data.get(..n)?).ok()?;
        let start = self.index;
        self.advance(n);
        Some((start, string))
    }

    fn skip_ws(&mut self) {
        let n = self.find(0, |b| !b.is_ascii_whitespace());
        self.advance(n);
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if the input doesn't start
    /// with one.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(ParseError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromInput<'a> for $ty {
                #[inline]
                fn error_kind() -> ErrorKind {
                    ErrorKind::ExpectedInteger
                }

                #[inline]
                fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
                    let Some((start, string)) = p.scan_integer() else {
                        return Ok(None);
                    };

                    let Ok(n) = str::parse(string) else {
                        return Err(ParseError::new(start..p.index, ErrorKind::NotInteger(string.into())));
                    };

                    Ok(Some(n))
                }
            }
        )*
    };
}

integer!(usize, isize, u8, u16, u32, u64, i8, i16, i32, i64);

impl<'a> FromInput<'a> for &'a str {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let string = p.as_str()?;
        p.advance(p.len());
        Ok(Some(string))
    }
}

/// Parse `A`, the delimiter `D`, then `B`.
///
/// # Examples
///
/// ```
/// use lib::{IStr, Split};
///
/// let mut input = IStr::new(b"-3--1", 0);
/// let Split(a, b) = input.next::<Split<'-', i32>>()?;
/// assert_eq!((a, b), (-3, -1));
/// # Ok::<_, lib::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, A, B = A>(pub A, pub B);

impl<'a, const D: char, A, B> FromInput<'a> for Split<D, A, B>
where
    A: FromInput<'a>,
    B: FromInput<'a>,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        A::error_kind()
    }

    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let Some(a) = A::try_from_input(p)? else {
            return Ok(None);
        };

        p.expect(D)?;
        let b = B::from_input(p)?;
        Ok(Some(Self(a, b)))
    }
}
