//! # qrcanvas
//!
//! QR code generation for link-sharing pages.
//!
//! `qrcanvas` encodes a text payload (usually a URL) into a QR Code Model 2 symbol and rasterizes
//! it into a fixed-size grayscale bitmap that a page can display. Encoding follows ISO/IEC 18004:
//! versions 1 to 40, the four error correction levels, automatic mask selection. Standard scanners
//! decode the result back to the exact payload.
//!
//! ## Features
//!
//! - Encode data in numeric, alphanumeric, byte or ECI modes.
//! - Four error correction levels: Low, Medium (default), Quartile, High.
//! - Fixed-size bitmaps with an even module layout and a quiet zone.
//! - PNG, SVG and console text output.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! ```rust
//! use qrcanvas::{render, RenderOptions};
//!
//! let bitmap = render(&RenderOptions::new("https://example.com").pixel_size(128)).unwrap();
//! assert_eq!((bitmap.width(), bitmap.height()), (128, 128));
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: Core QR code encoding functionality.
//! - [`helper`]: Rasterizing and rendering QR codes.
//! - [`config`]: Render request options and the TOML configuration file.
//! - [`presets`]: The resume page's link and QR placements.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod helper;
pub mod logging;
pub mod presets;
pub mod qrcode;

pub use config::{Config, LoggingOptions, RenderOptions};
pub use error::{DataTooLong, Error, Result};
pub use helper::Bitmap;
pub use qrcode::{Mask, QrCode, QrCodeEcc, Version};

use tracing::debug;

/// Encodes the payload of a render request into a QR symbol.
pub fn encode(options: &RenderOptions) -> Result<QrCode> {
    let version = options.version()?;
    let qr = QrCode::encode_text_with_version(
        &options.payload,
        options.error_correction_level,
        version,
    )?;
    debug!(
        payload_len = options.payload.len(),
        ecl = %qr.error_correction_level(),
        version = qr.version().value(),
        mask = qr.mask().value(),
        "encoded payload"
    );
    Ok(qr)
}

/// Encodes and rasterizes a render request into a `pixel_size` x `pixel_size` bitmap.
pub fn render(options: &RenderOptions) -> Result<Bitmap> {
    let qr = encode(options)?;
    helper::rasterize(&qr, options.pixel_size, options.margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_request() {
        let bitmap = render(&RenderOptions::new("https://example.com")).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (128, 128));
        assert_eq!(bitmap.margin(), 4);
    }

    #[test]
    fn test_render_errors() {
        assert!(matches!(
            render(&RenderOptions::new("")),
            Err(Error::InvalidPayload(_))
        ));
        assert!(matches!(
            render(&RenderOptions::new("https://example.com").pixel_size(10)),
            Err(Error::InvalidSize { .. })
        ));
        assert!(matches!(
            render(&RenderOptions::new("abcdefghijklmnopqr").with_version(1)),
            Err(Error::CapacityExceeded(_))
        ));
        assert!(matches!(
            render(&RenderOptions::new("x").with_version(0)),
            Err(Error::InvalidVersion(0))
        ));
    }

    #[test]
    fn test_version_override() {
        let options = RenderOptions::new("https://example.com").with_version(5);
        let qr = encode(&options).unwrap();
        assert_eq!(qr.version().value(), 5);
        assert_eq!(qr.size(), 37);
    }

    #[test]
    fn test_concurrent_renders_are_independent() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| encode(&RenderOptions::new("https://example.com"))))
            .collect();
        let codes: Vec<QrCode> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert!(codes.windows(2).all(|w| w[0] == w[1]));
    }
}
