use std::io::Write;

use camp_cleanup::{count, Predicate};
use lib::cli::{self, Opts};
use lib::prelude::*;
use lib::ParseError;

/// Input file, read from the current directory.
const INPUT: &str = "input.txt";

fn main() -> Result<()> {
    let opts = Opts::parse();
    opts.install_logger()?;

    let buffer = lib::load(INPUT)?;
    let locate = |error: ParseError| cli::error_context(buffer.path(), buffer.as_bytes(), error);

    let mut answers = Vec::with_capacity(Predicate::ALL.len());

    for predicate in Predicate::ALL {
        let total = count(buffer.input(), predicate).map_err(locate)?;
        answers.push(total);
    }

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    for total in answers {
        writeln!(o, "{total}")?;
    }

    Ok(())
}
