use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::input::IStr;


/// Error raised when loading input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to open `{}`", .path.display())]
    FileAccess {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
    #[error("failed to read `{}`", .path.display())]
    Read {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
    #[error("short read from `{}`: expected {expected} bytes but read {actual}", .path.display())]
    ShortRead {
        path: Box<Path>,
        expected: u64,
        actual: u64,
    },
}

/// Input which has been loaded into memory.
#[derive(Debug)]
pub struct Buffer {
    path: Box<Path>,
    data: Vec<u8>,
}

impl Buffer {
    /// The path the buffer was loaded from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw contents of the buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Construct an input processor over the whole buffer.
    #[inline]
    pub fn input(&self) -> IStr<'_> {
        IStr::new(&self.data, 0)
    }
}

/// Read the whole file at `path` into memory.
///
/// The number of bytes read must match the size reported by the file system,
/// so a file which changes size while being read is an error.
pub fn load<P>(path: P) -> Result<Buffer, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.into(),
        source,
    })?;

    let read_error = |source| LoadError::Read {
        path: path.into(),
        source,
    };

    let expected = file.metadata().map_err(read_error)?.len();

    let mut data = Vec::with_capacity(usize::try_from(expected).unwrap_or_default());
    let actual = file.read_to_end(&mut data).map_err(read_error)?;
    let actual = u64::try_from(actual).unwrap_or(u64::MAX);

    if actual != expected {
        return Err(LoadError::ShortRead {
            path: path.into(),
            expected,
            actual,
        });
    }

    log::debug!("loaded {actual} bytes from {}", path.display());

    Ok(Buffer {
        path: path.into(),
        data,
    })
}
