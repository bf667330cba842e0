//! Error types for the shader header generator
//!
//! Every failure of a generation run is fatal and surfaces as a single
//! located error (file, line, message) that the caller prints before
//! terminating the build with a non-zero status.

use std::fmt;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Output style used when printing a located error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorFormat {
    /// `file:line:0: error: message`
    #[default]
    Gcc,
    /// `file(line): error: message`
    Msvc,
}

/// Generator errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The destination header could not be created or opened
    OutputOpenFailed {
        file: String,
        line: u32,
        message: String,
    },

    /// Writing to an already opened destination failed
    OutputWriteFailed {
        file: String,
        message: String,
    },

    /// A program references a snippet with no compiled source for the
    /// target language being emitted
    MissingCompiledVariant {
        file: String,
        line: u32,
        message: String,
    },

    /// A program references a snippet name the input does not define
    UnknownSnippet {
        file: String,
        line: u32,
        message: String,
    },

    /// A target language token could not be parsed
    UnknownSlang(String),
}

impl Error {
    /// Path of the file the error points at (empty when not located)
    pub fn file(&self) -> &str {
        match self {
            Error::OutputOpenFailed { file, .. }
            | Error::OutputWriteFailed { file, .. }
            | Error::MissingCompiledVariant { file, .. }
            | Error::UnknownSnippet { file, .. } => file,
            Error::UnknownSlang(_) => "",
        }
    }

    /// Line number the error points at (0 when the error has no line)
    pub fn line(&self) -> u32 {
        match self {
            Error::OutputOpenFailed { line, .. }
            | Error::MissingCompiledVariant { line, .. }
            | Error::UnknownSnippet { line, .. } => *line,
            Error::OutputWriteFailed { .. } | Error::UnknownSlang(_) => 0,
        }
    }

    /// Human readable message without location
    pub fn message(&self) -> String {
        match self {
            Error::OutputOpenFailed { message, .. }
            | Error::OutputWriteFailed { message, .. }
            | Error::MissingCompiledVariant { message, .. }
            | Error::UnknownSnippet { message, .. } => message.clone(),
            Error::UnknownSlang(token) => format!("unknown shader language '{}'", token),
        }
    }

    /// Render the error the way compilers do, so IDEs can jump to it
    pub fn format(&self, format: ErrorFormat) -> String {
        match format {
            ErrorFormat::Gcc => format!("{}:{}:0: error: {}", self.file(), self.line(), self.message()),
            ErrorFormat::Msvc => format!("{}({}): error: {}", self.file(), self.line(), self.message()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutputOpenFailed { .. } => write!(f, "Output open failed: {}", self.format(ErrorFormat::Gcc)),
            Error::OutputWriteFailed { file, message } => write!(f, "Output write failed: {}: {}", file, message),
            Error::MissingCompiledVariant { .. } => write!(f, "Missing compiled variant: {}", self.format(ErrorFormat::Gcc)),
            Error::UnknownSnippet { .. } => write!(f, "Unknown snippet: {}", self.format(ErrorFormat::Gcc)),
            Error::UnknownSlang(_) => write!(f, "Invalid argument: {}", self.message()),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
