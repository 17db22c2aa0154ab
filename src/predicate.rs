use core::fmt;

use crate::assignment::Pair;

/// Selects one of the conditions pairs are counted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// One range fully contains the other.
    FullyContains,
    /// The ranges overlap at all.
    Overlaps,
}

impl Predicate {
    /// Every predicate, in the order answers are reported.
    pub const ALL: [Predicate; 2] = [Predicate::FullyContains, Predicate::Overlaps];

    /// Test the predicate against a pair.
    #[inline]
    pub fn test(self, pair: &Pair) -> bool {
        match self {
            Predicate::FullyContains => pair.fully_contains(),
            Predicate::Overlaps => pair.overlaps(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Predicate::FullyContains => "fully-contains",
            Predicate::Overlaps => "overlaps",
        }
    }
}

impl fmt::Display for Predicate {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
