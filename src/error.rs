//! Error types for the bombe menu plotter.
//!
//! This module provides a unified error type [`MenuError`] that covers
//! every failure between reading a menu file and writing its rendering.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;

/// The class a menu line was classified into when it turned out too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// A `=` register declaration
    Register,
    /// An edge declaration (any other first character)
    Edge,
}

impl fmt::Display for LineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineClass::Register => write!(f, "register"),
            LineClass::Edge => write!(f, "edge"),
        }
    }
}

/// Unified error type for all menu operations.
#[derive(Error, Debug)]
pub enum MenuError {
    // ============ Menu Parsing Errors ============
    /// Line is shorter than its class requires
    #[error("Line {line} is too short for a {class} declaration: {length} characters, need at least {required}")]
    ShortLine {
        line: usize,
        class: LineClass,
        length: usize,
        required: usize,
    },

    // ============ I/O Errors ============
    /// Error reading the menu file
    #[error("Failed to read menu file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error echoing parsed lines to the trace sink
    #[error("Failed to write menu trace: {0}")]
    Trace(#[source] std::io::Error),

    /// Error writing the rendered menu
    #[error("Failed to write rendering to '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The system viewer could not be launched
    #[error("Failed to open viewer: {message}")]
    Viewer { message: String },
}

impl MenuError {
    /// Create a short line error
    pub fn short_line(line: usize, class: LineClass, length: usize, required: usize) -> Self {
        Self::ShortLine {
            line,
            class,
            length,
            required,
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an output write error
    pub fn output_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.display().to_string(),
            source,
        }
    }
}
