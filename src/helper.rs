//! Rendering helpers: fixed-size bitmaps, integer-scaled bitmaps, SVG and console text.

use std::fs;
use std::path::Path;

use image::{GrayImage, Luma};
use tracing::debug;

use crate::error::{Error, Result};
use crate::qrcode::QrCode;

/// Quiet zone width recommended by the QR standard, in modules.
pub const DEFAULT_MARGIN: u32 = 4;

/// Widest quiet zone any renderer accepts, in modules.
pub const MAX_MARGIN: u32 = 256;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// A rendered QR code: a grayscale pixel buffer and the module grid it was laid out on.
///
/// `boundaries` holds `modules + 1` pixel offsets. Module `i` (counted from the outer edge of the
/// quiet zone) covers pixels `boundaries[i]..boundaries[i + 1]` on both axes.
#[derive(Clone, Debug)]
pub struct Bitmap {
    image: GrayImage,
    boundaries: Vec<u32>,
    margin: u32,
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the pixel at (`x`, `y`) is dark. Out-of-range pixels read as light.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.image.get_pixel(x, y)[0] < 128
    }

    /// Pixel offsets of the module blocks, including the quiet zone.
    pub fn boundaries(&self) -> &[u32] {
        &self.boundaries
    }

    /// Quiet zone width in modules.
    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Saves the bitmap, picking the format from the file extension (PNG for `.png`).
    ///
    /// Missing parent directories are created.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        self.image.save(path)?;
        debug!(path = %path.display(), width = self.width(), "saved QR bitmap");
        Ok(())
    }
}

/// Splits `pixel_size` pixels into `modules` blocks as evenly as possible.
///
/// Block `i` spans `floor(i * pixel_size / modules)..floor((i + 1) * pixel_size / modules)`, so the
/// blocks are contiguous, strictly increasing and end exactly at `pixel_size`.
///
/// # Errors
///
/// [`Error::InvalidSize`] if `pixel_size < modules`.
pub fn module_boundaries(modules: u32, pixel_size: u32) -> Result<Vec<u32>> {
    if modules == 0 || pixel_size < modules {
        return Err(Error::InvalidSize {
            requested: pixel_size,
            modules,
        });
    }
    Ok((0..=u64::from(modules))
        .map(|i| (i * u64::from(pixel_size) / u64::from(modules)) as u32)
        .collect())
}

/// Rasterizes `qr` into a `pixel_size` x `pixel_size` bitmap with a light quiet zone of `margin`
/// modules on every side.
///
/// # Errors
///
/// [`Error::InvalidSize`] if `pixel_size` is smaller than the module count including the margin.
pub fn rasterize(qr: &QrCode, pixel_size: u32, margin: u32) -> Result<Bitmap> {
    let modules = total_modules(qr, margin)?;
    let boundaries = module_boundaries(modules, pixel_size)?;

    // Pixel to module lookup, shared by both axes
    let mut lookup: Vec<i32> = Vec::with_capacity(pixel_size as usize);
    for (i, span) in boundaries.windows(2).enumerate() {
        let module = i as i32 - margin as i32;
        lookup.extend(std::iter::repeat(module).take((span[1] - span[0]) as usize));
    }
    debug_assert_eq!(lookup.len(), pixel_size as usize);

    let image = GrayImage::from_fn(pixel_size, pixel_size, |x, y| {
        if qr.get_module(lookup[x as usize], lookup[y as usize]) {
            DARK
        } else {
            LIGHT
        }
    });
    debug!(modules, pixel_size, margin, "rasterized QR code");
    Ok(Bitmap {
        image,
        boundaries,
        margin,
    })
}

/// Rasterizes `qr` with every module drawn as a `module_px` square.
///
/// The image is `(size + 2 * margin) * module_px` pixels wide.
pub fn rasterize_scaled(qr: &QrCode, module_px: u32, margin: u32) -> Result<Bitmap> {
    let modules = total_modules(qr, margin)?;
    let pixel_size = modules
        .checked_mul(module_px)
        .filter(|&px| px > 0)
        .ok_or(Error::InvalidScale { module_px, modules })?;
    rasterize(qr, pixel_size, margin)
}

/// Symbol size plus the quiet zone on both sides, in modules.
fn total_modules(qr: &QrCode, margin: u32) -> Result<u32> {
    if margin > MAX_MARGIN {
        return Err(Error::InvalidMargin {
            margin,
            max: MAX_MARGIN,
        });
    }
    Ok(qr.size() as u32 + 2 * margin)
}

/// Returns a string of SVG code for an image depicting the given QR Code, with the given number
/// of border modules. The string always uses Unix newlines (\n), regardless of the platform.
///
/// # Errors
///
/// [`Error::InvalidMargin`] if `margin` exceeds [`MAX_MARGIN`].
pub fn to_svg_string(qr: &QrCode, margin: u32) -> Result<String> {
    let dimension = total_modules(qr, margin)?;
    let border = margin as i32;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.get_module(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    Ok(result)
}

/// Renders the QR code as console text, two characters per module.
///
/// # Errors
///
/// [`Error::InvalidMargin`] if `margin` exceeds [`MAX_MARGIN`].
pub fn to_text(qr: &QrCode, margin: u32) -> Result<String> {
    total_modules(qr, margin)?;
    let border = margin as i32;
    let mut result = String::new();
    for y in -border..qr.size() + border {
        for x in -border..qr.size() + border {
            let c: char = if qr.get_module(x, y) { '█' } else { ' ' };
            result.push(c);
            result.push(c);
        }
        result.push('\n');
    }
    Ok(result)
}
