use lib::{IStr, ParseError};

use crate::assignment::Pair;
use crate::predicate::Predicate;


/// Count the lines of `input` holding a pair which satisfies `predicate`.
///
/// Every non-empty line must be a pair, the first line which isn't aborts
/// counting with an error.
///
/// # Examples
///
/// ```
/// use lib::IStr;
///
/// let input = IStr::new(b"2-8,3-7\n2-4,6-8\n", 0);
/// let total = camp_cleanup::count_if(input, |pair| pair.first.start == 2)?;
/// assert_eq!(total, 2);
/// # Ok::<_, lib::ParseError>(())
/// ```
pub fn count_if<P>(input: IStr<'_>, predicate: P) -> Result<usize, ParseError>
where
    P: Fn(&Pair) -> bool,
{
    let mut total = 0;

    for mut line in input.lines() {
        let pair = line.complete::<Pair>()?;

        if predicate(&pair) {
            total += 1;
        }
    }

    Ok(total)
}

/// Count the pairs in `input` matching the selected predicate.
pub fn count(input: IStr<'_>, predicate: Predicate) -> Result<usize, ParseError> {
    let total = count_if(input, |pair| predicate.test(pair))?;
    log::debug!("{predicate}: {total}");
    Ok(total)
}

/// Number of pairs matching each predicate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub contained: usize,
    pub overlapping: usize,
}

impl Counts {
    /// Tally both predicates while parsing every pair only once.
    pub fn tally(mut input: IStr<'_>) -> Result<Self, ParseError> {
        let mut counts = Self::default();

        while let Some(pair) = input.try_line::<Pair>()? {
            counts.contained += usize::from(pair.fully_contains());
            counts.overlapping += usize::from(pair.overlaps());
        }

        Ok(counts)
    }

    /// Get the count for the given predicate.
    pub fn get(&self, predicate: Predicate) -> usize {
        match predicate {
            Predicate::FullyContains => self.contained,
            Predicate::Overlaps => self.overlapping,
        }
    }
}
