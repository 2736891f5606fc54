//! Errors reported by the native library and by this crate.

use std::ffi::NulError;

use thiserror::Error;

/// The error type returned by functions and methods in this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A call into the native speech library returned a failure code.
    #[error("{context} (native error code {code:#x})")]
    Native {
        /// The code the native library returned.
        code: usize,
        /// Which operation failed.
        context: &'static str,
    },

    /// Text passed to the native library contained an interior NUL byte.
    #[error("text contains an interior NUL byte: {0}")]
    InvalidText(#[from] NulError),

    /// Text passed to the native library is longer than its 32-bit length field can describe.
    #[error("text of {0} bytes is too long for the native library")]
    TextTooLong(usize),

    /// A blocking extraction task was cancelled before it could finish.
    #[error("synthesis result extraction was cancelled")]
    Cancelled,
}

impl Error {
    /// Returns the native failure code, if this error came from the native library.
    pub fn code(&self) -> Option<usize> {
        match self {
            Self::Native { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// The type returned by functions and methods in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Maps a native return code to a `Result`. Zero means success.
pub fn convert_err(code: usize, context: &'static str) -> Result<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(Error::Native { code, context })
    }
}
