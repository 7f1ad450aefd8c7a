use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::sample;

/// Where the markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A file on disk (watchable)
    File(PathBuf),
    /// Standard input, read once
    Stdin,
    /// The built-in welcome document
    Sample,
}

/// Failure to obtain source text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

impl SourceInput {
    /// Map the optional FILE argument: absent is the sample, `-` is stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => Self::Sample,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path),
        }
    }

    /// Read the full source text. Invalid UTF-8 is replaced, never rejected.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be read.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| {
                    if source.kind() == io::ErrorKind::NotFound {
                        SourceError::NotFound(path.clone())
                    } else {
                        SourceError::Read {
                            path: path.clone(),
                            source,
                        }
                    }
                })?;
                Ok(decode(bytes))
            }
            Self::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(SourceError::Stdin)?;
                Ok(decode(bytes))
            }
            Self::Sample => Ok(sample::WELCOME.to_string()),
        }
    }

    /// Path to follow in watch mode, if the source is a file.
    pub fn watch_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin | Self::Sample => None,
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
