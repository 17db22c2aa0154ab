//! Shared input handling and command line harness.

pub mod cli;
pub mod input;
mod load;
mod macros;

pub use self::input::{FromInput, IStr, Lines, ParseError, Split};
pub use self::load::{load, Buffer, LoadError};

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{FromInput, IStr, Split};
    pub use anyhow::{anyhow, bail, Context, Result};
}
