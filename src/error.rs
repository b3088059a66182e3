use miette::Diagnostic;
use thiserror::Error;

/// Main error type for anonymat operations
#[derive(Error, Diagnostic, Debug)]
pub enum AnonError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(anonymat::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed order: {message}")]
    #[diagnostic(code(anonymat::order))]
    MalformedOrder {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot read image {path}: {message}")]
    #[diagnostic(code(anonymat::image::read))]
    ImageRead {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Cannot write image {path}: {message}")]
    #[diagnostic(code(anonymat::image::write))]
    ImageWrite {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image must have pixels, got {width}x{height}")]
    #[diagnostic(code(anonymat::image::empty))]
    EmptyImage { width: u32, height: u32 },

    #[error("Coordinate ({x},{y}) out of image {width}x{height}")]
    #[diagnostic(code(anonymat::image::bounds))]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl AnonError {
    /// Shorthand for a malformed-order error with help text.
    pub fn malformed(message: impl Into<String>, help: impl Into<String>) -> Self {
        AnonError::MalformedOrder {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnonError>;
