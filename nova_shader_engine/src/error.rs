//! Error types for the NovaShade engine core
//!
//! Compile failures are *not* errors: they travel as data inside
//! `CompiledProgramArtifact` so callers always receive a well-formed result.
//! The `Error` enum covers genuine misuse and plumbing failures only.

use std::fmt;

/// Result type for NovaShade engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// NovaShade engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (compiler plumbing, reflection, etc.)
    BackendError(String),

    /// Invalid resource (malformed binary, bad descriptor, etc.)
    InvalidResource(String),

    /// Initialization failed
    InitializationFailed(String),

    /// Attempt to register or replace the reserved null-language entry
    ReservedLanguage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ReservedLanguage(lang) => {
                write!(f, "Language id '{}' is reserved and cannot be replaced", lang)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Build a `BackendError`, logging it through the engine logger first
///
/// # Example
///
/// ```no_run
/// # use nova_shader_engine::engine_err;
/// # let e: Result<(), ()> = Err(());
/// e.map_err(|e| engine_err!("nova::naga", "reflection failed: {:?}", e));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        $crate::error::Error::BackendError(format!($($arg)*))
    }};
}

/// Log an error and return early with `Err(Error::BackendError(...))`
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
