use lib::Split;

#[cfg(test)]
mod tests;

/// An inclusive range of sections, `start` is assumed to not be greater than
/// `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Test if `other` lies entirely within this range.
    #[inline]
    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Test if the two ranges share at least one section.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// The two ranges assigned on a single line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub first: Range,
    pub second: Range,
}

impl Pair {
    #[inline]
    pub const fn new(first: Range, second: Range) -> Self {
        Self { first, second }
    }

    /// Test if either range fully contains the other.
    #[inline]
    pub fn fully_contains(&self) -> bool {
        self.first.contains(&self.second) || self.second.contains(&self.first)
    }

    /// Test if the ranges overlap at all.
    #[inline]
    pub fn overlaps(&self) -> bool {
        self.first.overlaps(&self.second)
    }
}

lib::from_input! {
    |Split(start, end): Split<'-', i64>| -> Range {
        Ok(Range { start, end })
    }
}

lib::from_input! {
    |Split(first, second): Split<',', Range>| -> Pair {
        Ok(Pair { first, second })
    }
}
