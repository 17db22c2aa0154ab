//! Counting section assignment pairs which contain or overlap each other.
//!
//! Each line of input holds a pair of inclusive ranges, like `2-8,3-7`.

mod assignment;
mod count;
mod predicate;

pub use self::assignment::{Pair, Range};
pub use self::count::{count, count_if, Counts};
pub use self::predicate::Predicate;
