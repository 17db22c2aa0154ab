use core::iter::FusedIterator;

use crate::input::IStr;

/// Iterator over the non-empty lines of an input, see [IStr::lines].
///
/// Copying the iterator replays the same lines from where the copy was made.
#[derive(Debug, Clone, Copy)]
pub struct Lines<'a> {
    input: IStr<'a>,
}

impl<'a> Lines<'a> {
    #[inline]
    pub(crate) fn new(input: IStr<'a>) -> Self {
        Self { input }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = IStr<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.split_line()
    }
}

impl FusedIterator for Lines<'_> {}
