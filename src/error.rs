//! Error types for encoding and rendering QR codes.

use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrcanvas operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The payload is empty or holds characters the segment mode cannot encode.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// No version in the allowed range holds the data at the requested level.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(#[from] DataTooLong),

    /// The requested pixel size cannot give every module at least one pixel.
    #[error("Invalid size: {requested}px cannot hold {modules} modules")]
    InvalidSize { requested: u32, modules: u32 },

    /// A per-module pixel scale of zero, or one that overflows the image size.
    #[error("Invalid scale: {module_px}px per module over {modules} modules")]
    InvalidScale { module_px: u32, modules: u32 },

    /// A quiet zone wider than the renderers accept.
    #[error("Invalid margin: {margin} modules (at most {max})")]
    InvalidMargin { margin: u32, max: u32 },

    /// A version override outside 1..=40.
    #[error("Invalid version: {0} (expected 1 to 40)")]
    InvalidVersion(u32),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image processing error: {0}")]
    Image(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

/// Detail for [`Error::CapacityExceeded`].
///
/// Ways to handle this error include:
///
/// - Decrease the error correction level if it was greater than `QrCodeEcc::Low`.
/// - Drop the version override, or raise it.
/// - Change the text to fit the character set of a denser segment mode (e.g. alphanumeric).
/// - Shorten the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataTooLong {
    /// A segment's character count overflows its count field.
    #[error("Segment too long")]
    SegmentTooLong,
    /// Data length in bits and the largest capacity tried, in bits.
    #[error("Data length = {0} bits, Max capacity = {1} bits")]
    DataOverCapacity(usize, usize),
}
