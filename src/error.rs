use crate::pki::keyset::KeyName;
use crate::titlekey::RightsId;
use snafu::Snafu;
use snafu::{Backtrace, GenerateImplicitData};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to serialize: {}", error))]
    Serialization { error: serde_json::error::Error },
    #[snafu(display("{}: {}", path.display(), error))]
    Io {
        error: io::Error,
        path: PathBuf,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Internal IO Error (please submit a bug report with the backtrace): {}",
        error
    ))]
    IoInternal {
        error: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid keyblob {:02x}: {}.", id, error))]
    MacError {
        error: digest::MacError,
        id: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Encountered malformed key ({})", key))]
    MalformedKey { key: String },
    #[snafu(display("Encountered truncated key-value pair (key = {})", key))]
    TruncatedKeyValue { key: String },
    #[snafu(display("Encountered malformed key-value pair (key = {})", key))]
    MalformedKeyValue { key: String },
    #[snafu(display("Encountered malformed empty key"))]
    EmptyKey,
    #[snafu(display("Encountered missing value (for key = {})", key))]
    MissingValue { key: String },
    #[snafu(display("Missing key {}. Make sure your keyfile is complete", key_name))]
    MissingKey {
        key_name: KeyName,
        backtrace: Backtrace,
    },
    #[snafu(display("Missing titlekey for {}. Make sure you have provided it", rights_id))]
    MissingTitleKey {
        rights_id: RightsId,
        backtrace: Backtrace,
    },
    #[snafu(display("Failed to preset master key {:02x}: {}", generation, error))]
    KeyStore {
        generation: usize,
        error: String,
        backtrace: Backtrace,
    },
}

impl Error {
    fn with_path<T: AsRef<Path>>(self, path: T) -> Error {
        if let Error::IoInternal { error, backtrace } = self {
            Error::Io {
                error,
                path: path.as_ref().to_owned(),
                backtrace,
            }
        } else {
            self
        }
    }

    /// Build the error a [`KeyStore`](crate::processor::KeyStore) reports
    /// when it rejects a master key.
    pub fn key_store<T: Into<String>>(generation: usize, error: T) -> Error {
        Error::KeyStore {
            generation,
            error: error.into(),
            backtrace: Backtrace::generate(),
        }
    }

    /// Whether this error aborts the rest of a key file rather than a single pair.
    pub fn is_parse_abort(&self) -> bool {
        matches!(
            self,
            Error::MalformedKey { .. }
                | Error::TruncatedKeyValue { .. }
                | Error::MalformedKeyValue { .. }
                | Error::EmptyKey
                | Error::MissingValue { .. }
        )
    }
}

pub trait ResultExt {
    fn with_path<T: AsRef<Path>>(self, path: T) -> Self;
}

impl<T> ResultExt for Result<T, Error> {
    fn with_path<U: AsRef<Path>>(self, path: U) -> Result<T, Error> {
        self.map_err(|err| err.with_path(path))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoInternal {
            error: err,
            backtrace: Backtrace::generate(),
        }
    }
}

impl<T: AsRef<Path>> From<(io::Error, T)> for Error {
    fn from((error, path): (io::Error, T)) -> Error {
        Error::Io {
            error,
            path: path.as_ref().to_owned(),
            backtrace: Backtrace::generate(),
        }
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(error: serde_json::error::Error) -> Error {
        Error::Serialization { error }
    }
}

impl From<(usize, digest::MacError)> for Error {
    fn from((id, error): (usize, digest::MacError)) -> Error {
        Error::MacError {
            error,
            id,
            backtrace: Backtrace::generate(),
        }
    }
}
