//! CLI helpers.

pub(crate) mod error;
mod stderr_logger;


use std::ffi::OsString;

use anyhow::{anyhow, Result};

pub use self::error::error_context;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input options.
#[derive(Default, Debug)]
pub struct Opts {
    /// Run in verbose mode.
    verbose: bool,
    /// Arguments which were not recognized.
    ignored: Vec<OsString>,
}

impl Opts {
    /// Parse CLI options from the arguments of the current process.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os().skip(1))
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    ///
    /// Only `--verbose` is recognized. Everything else is kept aside and
    /// otherwise ignored.
    pub fn parse_from<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut opts = Self::default();

        for arg in args.into_iter().map(Into::<OsString>::into) {
            if arg == "--verbose" {
                opts.verbose = true;
            } else {
                opts.ignored.push(arg);
            }
        }

        opts
    }

    /// Install the logger which writes to stderr, at debug level if verbose.
    ///
    /// Can only be called once per process.
    pub fn install_logger(&self) -> Result<()> {
        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        log::set_max_level(if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });

        for arg in &self.ignored {
            log::debug!("ignoring argument: {}", arg.to_string_lossy());
        }

        Ok(())
    }
}
