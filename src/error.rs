//! Errors
//!
//! Every error carries the name of the draw call which produced it and a
//!   numeric code, so it can be handed to an external reporter as a
//!   `(code, message, origin)` triple.

use thiserror::Error;

/// Result type of all fallible draw calls
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A numeric style value is negative or not finite
    #[error("{origin}: invalid style: {message}")]
    InvalidStyle { origin: &'static str, message: String },
    /// The requested rendering path is not available in this build
    #[error("{origin}: unsupported: {message}")]
    Unsupported { origin: &'static str, message: String },
    /// A font could not be found, loaded or rendered
    #[error("{origin}: font error: {message}")]
    Font { origin: &'static str, message: String },
    /// Reading or writing an image file
    #[error("image i/o: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn style<S: Into<String>>(origin: &'static str, message: S) -> Self {
        Error::InvalidStyle { origin, message: message.into() }
    }
    pub(crate) fn unsupported<S: Into<String>>(origin: &'static str, message: S) -> Self {
        Error::Unsupported { origin, message: message.into() }
    }
    #[allow(dead_code)]
    pub(crate) fn font<S: Into<String>>(origin: &'static str, message: S) -> Self {
        Error::Font { origin, message: message.into() }
    }
    /// Numeric error code
    ///
    /// | Code | Error          |
    /// |------|----------------|
    /// | 6    | `Font`         |
    /// | 12   | `InvalidStyle` |
    /// | 15   | `Image`        |
    /// | 42   | `Unsupported`  |
    pub fn code(&self) -> i32 {
        match self {
            Error::Font { .. } => 6,
            Error::InvalidStyle { .. } => 12,
            Error::Image(_) => 15,
            Error::Unsupported { .. } => 42,
        }
    }
    /// Name of the operation which failed
    pub fn origin(&self) -> &'static str {
        match self {
            Error::InvalidStyle { origin, .. } |
            Error::Unsupported { origin, .. } |
            Error::Font { origin, .. } => origin,
            Error::Image(_) => "image",
        }
    }
}

/// Check a numeric style value is finite and not negative
pub(crate) fn check_non_negative(origin: &'static str, name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(Error::style(origin, format!("{} must be finite and >= 0, got {}", name, v)))
    }
}
