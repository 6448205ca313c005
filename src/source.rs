//! Whole-input acquisition for the batch runner.
//!
//! The input is read completely and validated as UTF-8 before anything is
//! normalized or written, so a failure never leaves partial output behind.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the input came from, for error messages and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Stdin,
    File(PathBuf),
}

impl Origin {
    /// `None` or `-` means standard input.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => Origin::File(p.to_path_buf()),
            _ => Origin::Stdin,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Stdin => f.write_str("<stdin>"),
            Origin::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {origin}")]
    Read {
        origin: Origin,
        #[source]
        source: io::Error,
    },
    #[error("{origin} is not valid UTF-8: {message}")]
    Decode { origin: Origin, message: String },
}

/// Read the whole of `origin` and decode it as UTF-8.
pub fn read_source(origin: &Origin) -> Result<String, SourceError> {
    match origin {
        Origin::Stdin => read_all(io::stdin().lock(), origin),
        Origin::File(path) => {
            let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
                origin: origin.clone(),
                source,
            })?;
            decode(bytes, origin)
        }
    }
}

/// Read `reader` to the end and decode it as UTF-8.
pub fn read_all<R: Read>(mut reader: R, origin: &Origin) -> Result<String, SourceError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Read {
            origin: origin.clone(),
            source,
        })?;
    decode(bytes, origin)
}

#[cfg(feature = "simd")]
fn decode(bytes: Vec<u8>, origin: &Origin) -> Result<String, SourceError> {
    if let Err(e) = simdutf8::compat::from_utf8(&bytes) {
        return Err(SourceError::Decode {
            origin: origin.clone(),
            message: e.to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|e| SourceError::Decode {
        origin: origin.clone(),
        message: e.utf8_error().to_string(),
    })
}

#[cfg(not(feature = "simd"))]
fn decode(bytes: Vec<u8>, origin: &Origin) -> Result<String, SourceError> {
    String::from_utf8(bytes).map_err(|e| SourceError::Decode {
        origin: origin.clone(),
        message: e.utf8_error().to_string(),
    })
}
