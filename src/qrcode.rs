//! QR code encoding.
//!
//! This module turns text or bytes into a complete QR Code Model 2 symbol: segment encoding,
//! version selection, Reed-Solomon error correction, module placement, masking and format/version
//! information. Every stage is a pure function of its inputs, so the same payload, level and
//! overrides always produce the same [`QrCode`].

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{DataTooLong, Error, Result};

/// A QR Code symbol, representing a square grid of dark and light modules.
///
/// Supports QR Code Model 2, versions 1 to 40, all four error correction levels, and the numeric,
/// alphanumeric, byte and ECI segment modes. Instances are immutable after creation.
///
/// # Creation
///
/// - High-level: [`QrCode::encode_text`], [`QrCode::encode_text_with_version`] or
///   [`QrCode::encode_binary`].
/// - Mid-level: [`QrCode::encode_segments_advanced`] with hand-built [`QrSegment`]s.
///
/// # Example
///
/// ```rust
/// use qrcanvas::qrcode::{QrCode, QrCodeEcc};
///
/// let qr = QrCode::encode_text("https://example.com", QrCodeEcc::Medium).unwrap();
/// assert_eq!(qr.version().value(), 2);
/// assert_eq!(qr.size(), 25);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrCode {
    version: Version,

    /// Width and height in modules, `version * 4 + 17`.
    size: i32,

    errorcorrectionlevel: QrCodeEcc,

    mask: Mask,

    /// Row-major modules, `true` is dark.
    modules: Vec<bool>,
}

impl QrCode {
    /// Encodes a text string, choosing the smallest version that holds it.
    ///
    /// The densest single segment mode that covers the whole text is used (numeric, then
    /// alphanumeric, then UTF-8 bytes). The error correction level is used as given.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPayload`] for empty text, [`Error::CapacityExceeded`] when even version 40
    /// cannot hold it.
    pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self> {
        Self::encode_text_with_version(text, ecl, None)
    }

    /// Encodes a text string, optionally pinned to one version.
    ///
    /// With `Some(version)` only that version is tried and the call fails with
    /// [`Error::CapacityExceeded`] if the text does not fit it.
    pub fn encode_text_with_version(
        text: &str,
        ecl: QrCodeEcc,
        version: Option<Version>,
    ) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidPayload("payload is empty".to_string()));
        }
        let seg = QrSegment::make_segment(text);
        let (minversion, maxversion) = match version {
            Some(ver) => (ver, ver),
            None => (Version::MIN, Version::MAX),
        };
        Self::encode_segments_advanced(&[seg], ecl, minversion, maxversion, None, false)
    }

    /// Encodes arbitrary bytes in byte mode, choosing the smallest version that holds them.
    pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::InvalidPayload("payload is empty".to_string()));
        }
        let seg = QrSegment::make_bytes(data);
        Self::encode_segments_advanced(&[seg], ecl, Version::MIN, Version::MAX, None, false)
    }

    /// Encodes the given segments with full control over the encoding parameters.
    ///
    /// The smallest version within `minversion..=maxversion` that holds the data is chosen. If
    /// `boostecl` is `true`, the level may be raised as long as the version does not grow. With
    /// `mask` set to `None` all eight masks are scored and the lowest penalty wins (ties keep the
    /// lower mask number).
    pub fn encode_segments_advanced(
        segs: &[QrSegment],
        mut ecl: QrCodeEcc,
        minversion: Version,
        maxversion: Version,
        mask: Option<Mask>,
        boostecl: bool,
    ) -> Result<Self> {
        if minversion > maxversion {
            return Err(Error::InvalidVersion(u32::from(minversion.value())));
        }

        // Find the minimal version number to use
        let mut version: Version = minversion;
        let datausedbits: usize = loop {
            let datacapacitybits: usize = Self::get_num_data_codewords(version, ecl) * 8;
            let dataused: Option<usize> = QrSegment::get_total_bits(segs, version);
            if let Some(n) = dataused.filter(|&n| n <= datacapacitybits) {
                break n;
            }
            if version >= maxversion {
                return Err(match dataused {
                    None => DataTooLong::SegmentTooLong,
                    Some(n) => DataTooLong::DataOverCapacity(n, datacapacitybits),
                }
                .into());
            }
            version = Version::new(version.value() + 1);
        };

        // Increase the error correction level while the data still fits
        for &newecl in &[QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
            if boostecl && datausedbits <= Self::get_num_data_codewords(version, newecl) * 8 {
                ecl = newecl;
            }
        }

        // Concatenate all segments to create the data bit string
        let mut bb = BitBuffer(Vec::with_capacity(datausedbits));
        for seg in segs {
            bb.append_bits(seg.mode.mode_bits(), 4);
            let numchars = u32::try_from(seg.numchars).map_err(|_| DataTooLong::SegmentTooLong)?;
            bb.append_bits(numchars, seg.mode.num_char_count_bits(version));
            bb.0.extend_from_slice(&seg.data);
        }
        debug_assert_eq!(bb.len(), datausedbits);

        // Add terminator and pad up to a byte if applicable
        let datacapacitybits: usize = Self::get_num_data_codewords(version, ecl) * 8;
        let numzerobits: usize = core::cmp::min(4, datacapacitybits - bb.len());
        bb.append_bits(0, numzerobits as u8);
        let numzerobits: usize = bb.len().wrapping_neg() & 7;
        bb.append_bits(0, numzerobits as u8);
        debug_assert_eq!(bb.len() % 8, 0);

        // Pad with alternating bytes until data capacity is reached
        for &padbyte in [0xEC, 0x11].iter().cycle() {
            if bb.len() >= datacapacitybits {
                break;
            }
            bb.append_bits(padbyte, 8);
        }

        let mut datacodewords = vec![0u8; bb.len() / 8];
        for (i, &bit) in bb.0.iter().enumerate() {
            datacodewords[i >> 3] |= u8::from(bit) << (7 - (i & 7));
        }

        debug!(
            version = version.value(),
            ecl = %ecl,
            data_bits = datausedbits,
            capacity_bits = datacapacitybits,
            "selected QR version"
        );
        Ok(Self::encode_codewords(version, ecl, &datacodewords, mask))
    }

    /// Builds the symbol from complete data codewords (without ECC).
    ///
    /// `datacodewords` must hold exactly the data capacity of `version` at `ecl`.
    fn encode_codewords(
        version: Version,
        ecl: QrCodeEcc,
        datacodewords: &[u8],
        msk: Option<Mask>,
    ) -> Self {
        let mut canvas = Canvas::new(version, ecl);
        let allcodewords = Self::add_ecc_and_interleave(datacodewords, version, ecl);
        canvas.draw_codewords(&allcodewords);

        let msk: Mask = match msk {
            Some(m) => m,
            None => canvas.choose_mask(ecl),
        };
        canvas.apply_mask(msk);
        canvas.draw_format_bits(ecl, msk);
        debug!(version = version.value(), mask = msk.value(), "drew QR symbol");

        Self {
            version,
            size: canvas.size,
            errorcorrectionlevel: ecl,
            mask: msk,
            modules: canvas.modules,
        }
    }

    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns this QR Code's error correction level.
    pub fn error_correction_level(&self) -> QrCodeEcc {
        self.errorcorrectionlevel
    }

    /// Returns this QR Code's mask, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the
    /// symbol return `false`, so a quiet zone can be read with negative or oversized coordinates.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size;
        range.contains(&x) && range.contains(&y) && self.modules[(y * self.size + x) as usize]
    }

    /// Returns all modules in row-major order.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Returns the total penalty of this symbol under the four mask evaluation rules.
    pub fn penalty_score(&self) -> i32 {
        penalty_score(self.size, &self.modules)
    }

    fn add_ecc_and_interleave(data: &[u8], ver: Version, ecl: QrCodeEcc) -> Vec<u8> {
        assert_eq!(data.len(), Self::get_num_data_codewords(ver, ecl), "Illegal argument");
        let numblocks: usize = Self::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl);
        let blockecclen: usize = Self::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl);
        let rawcodewords: usize = Self::get_num_raw_data_modules(ver) / 8;
        let numshortblocks: usize = numblocks - rawcodewords % numblocks;
        let shortblocklen: usize = rawcodewords / numblocks;

        // Split data into blocks and append ECC to each block
        let rs = ReedSolomonGenerator::new(blockecclen);
        let mut blocks = Vec::<Vec<u8>>::with_capacity(numblocks);
        let mut k: usize = 0;
        for i in 0..numblocks {
            let datlen: usize = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
            let mut dat = data[k..k + datlen].to_vec();
            k += datlen;
            let ecc = rs.compute_remainder(&dat);
            if i < numshortblocks {
                dat.push(0);
            }
            dat.extend_from_slice(&ecc);
            blocks.push(dat);
        }

        // Interleave (not concatenate) the bytes from every block into a single sequence
        let mut result = Vec::<u8>::with_capacity(rawcodewords);
        for i in 0..=shortblocklen {
            for (j, block) in blocks.iter().enumerate() {
                // Skip the padding byte in short blocks
                if i != shortblocklen - blockecclen || j >= numshortblocks {
                    result.push(block[i]);
                }
            }
        }
        debug_assert_eq!(result.len(), rawcodewords);
        result
    }

    fn get_num_raw_data_modules(ver: Version) -> usize {
        let ver = usize::from(ver.value());
        let mut result: usize = (16 * ver + 128) * ver + 64;
        if ver >= 2 {
            let numalign: usize = ver / 7 + 2;
            result -= (25 * numalign - 10) * numalign - 55;
            if ver >= 7 {
                result -= 36;
            }
        }
        result
    }

    fn get_num_data_codewords(ver: Version, ecl: QrCodeEcc) -> usize {
        Self::get_num_raw_data_modules(ver) / 8
            - Self::table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
                * Self::table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
    }

    fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: QrCodeEcc) -> usize {
        table[ecl.ordinal()][usize::from(ver.value())] as usize
    }
}

/// Mutable drawing surface used while a symbol is being built.
struct Canvas {
    size: i32,
    modules: Vec<bool>,
    isfunction: Vec<bool>,
}

impl Canvas {
    fn new(ver: Version, ecl: QrCodeEcc) -> Self {
        let size = i32::from(ver.value()) * 4 + 17;
        let total = (size * size) as usize;
        let mut result = Self {
            size,
            modules: vec![false; total],
            isfunction: vec![false; total],
        };
        result.draw_function_patterns(ver, ecl);
        result
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!((0..self.size).contains(&x) && (0..self.size).contains(&y));
        (y * self.size + x) as usize
    }

    fn set_function_module(&mut self, x: i32, y: i32, isdark: bool) {
        let index = self.index(x, y);
        self.modules[index] = isdark;
        self.isfunction[index] = true;
    }

    fn draw_function_patterns(&mut self, ver: Version, ecl: QrCodeEcc) {
        let size: i32 = self.size;

        // Timing patterns
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Finder patterns, overwriting some timing modules
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns, skipping the three finder corners
        let alignpatpos: Vec<i32> = alignment_pattern_positions(ver);
        let numalign: usize = alignpatpos.len();
        for i in 0..numalign {
            for j in 0..numalign {
                let corner = (i == 0 && j == 0)
                    || (i == 0 && j == numalign - 1)
                    || (i == numalign - 1 && j == 0);
                if !corner {
                    self.draw_alignment_pattern(alignpatpos[i], alignpatpos[j]);
                }
            }
        }

        // Reserve format areas with a placeholder, then the version blocks
        self.draw_format_bits(ecl, Mask::new(0));
        self.draw_version(ver);
    }

    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let xx: i32 = x + dx;
                let yy: i32 = y + dy;
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist: i32 = dx.abs().max(dy.abs());
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    fn draw_version(&mut self, ver: Version) {
        let ver = u32::from(ver.value());
        if ver < 7 {
            return;
        }
        let bits: u32 = version_info_bits(ver);
        for i in 0..18 {
            let bit: bool = get_bit(bits, i);
            let a: i32 = self.size - 11 + i % 3;
            let b: i32 = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    fn draw_format_bits(&mut self, ecl: QrCodeEcc, mask: Mask) {
        let bits: u32 = format_info_bits(ecl, mask);

        // First copy, around the top left finder
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Second copy, split between the other two finders
        let size: i32 = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true);
    }

    fn draw_codewords(&mut self, data: &[u8]) {
        let size: i32 = self.size;
        let mut i: usize = 0;
        let mut right: i32 = size - 1;
        // Column pairs, right to left, skipping the vertical timing column
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            for vert in 0..size {
                for j in 0..2 {
                    let x: i32 = right - j;
                    let upward: bool = ((right + 1) & 2) == 0;
                    let y: i32 = if upward { size - 1 - vert } else { vert };
                    let index = self.index(x, y);
                    if !self.isfunction[index] && i < data.len() * 8 {
                        self.modules[index] =
                            get_bit(u32::from(data[i >> 3]), 7 - ((i & 7) as i32));
                        i += 1;
                    }
                    // Remainder bits stay light
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    /// XORs the data region with the mask pattern. Applying the same mask twice undoes it.
    fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let index = self.index(x, y);
                if self.isfunction[index] {
                    continue;
                }
                let invert: bool = match mask.value() {
                    0 => (x + y) % 2 == 0,
                    1 => y % 2 == 0,
                    2 => x % 3 == 0,
                    3 => (x + y) % 3 == 0,
                    4 => (x / 3 + y / 2) % 2 == 0,
                    5 => x * y % 2 + x * y % 3 == 0,
                    6 => (x * y % 2 + x * y % 3) % 2 == 0,
                    7 => ((x + y) % 2 + x * y % 3) % 2 == 0,
                    _ => unreachable!(),
                };
                self.modules[index] ^= invert;
            }
        }
    }

    fn choose_mask(&mut self, ecl: QrCodeEcc) -> Mask {
        let mut best: Mask = Mask::new(0);
        let mut minpenalty = i32::MAX;
        for i in 0u8..8 {
            let msk = Mask::new(i);
            self.apply_mask(msk);
            self.draw_format_bits(ecl, msk);
            let penalty: i32 = penalty_score(self.size, &self.modules);
            trace!(mask = i, penalty, "scored mask");
            if penalty < minpenalty {
                best = msk;
                minpenalty = penalty;
            }
            self.apply_mask(msk);
        }
        best
    }
}

fn penalty_score(size: i32, modules: &[bool]) -> i32 {
    let get = |x: i32, y: i32| modules[(y * size + x) as usize];
    let mut result: i32 = 0;

    // Adjacent modules in row having same color, and finder-like patterns
    for y in 0..size {
        let mut runcolor = false;
        let mut runx: i32 = 0;
        let mut runhistory = FinderPenalty::new(size);
        for x in 0..size {
            if get(x, y) == runcolor {
                runx += 1;
                if runx == 5 {
                    result += PENALTY_N1;
                } else if runx > 5 {
                    result += 1;
                }
            } else {
                runhistory.add_history(runx);
                if !runcolor {
                    result += runhistory.count_patterns() * PENALTY_N3;
                }
                runcolor = get(x, y);
                runx = 1;
            }
        }
        result += runhistory.terminate_and_count(runcolor, runx) * PENALTY_N3;
    }

    // Adjacent modules in column having same color, and finder-like patterns
    for x in 0..size {
        let mut runcolor = false;
        let mut runy: i32 = 0;
        let mut runhistory = FinderPenalty::new(size);
        for y in 0..size {
            if get(x, y) == runcolor {
                runy += 1;
                if runy == 5 {
                    result += PENALTY_N1;
                } else if runy > 5 {
                    result += 1;
                }
            } else {
                runhistory.add_history(runy);
                if !runcolor {
                    result += runhistory.count_patterns() * PENALTY_N3;
                }
                runcolor = get(x, y);
                runy = 1;
            }
        }
        result += runhistory.terminate_and_count(runcolor, runy) * PENALTY_N3;
    }

    // 2*2 blocks of modules having same color
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color: bool = get(x, y);
            if color == get(x + 1, y) && color == get(x, y + 1) && color == get(x + 1, y + 1) {
                result += PENALTY_N2;
            }
        }
    }

    // Balance of dark and light modules
    let dark = modules.iter().filter(|&&dark| dark).count() as i32;
    let total: i32 = size * size;
    let k: i32 = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    debug_assert!((0..=9).contains(&k));
    result += k * PENALTY_N4;
    result
}

fn alignment_pattern_positions(ver: Version) -> Vec<i32> {
    let ver = i32::from(ver.value());
    if ver == 1 {
        return Vec::new();
    }
    let size: i32 = ver * 4 + 17;
    let numalign: i32 = ver / 7 + 2;
    let step: i32 = if ver == 32 {
        26
    } else {
        (ver * 4 + numalign * 2 + 1) / (numalign * 2 - 2) * 2
    };
    let mut result: Vec<i32> = (0..numalign - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

/// 15-bit format word: level and mask protected by BCH(15,5), then XORed with `0x5412`.
fn format_info_bits(ecl: QrCodeEcc, mask: Mask) -> u32 {
    let data = u32::from((ecl.format_bits() << 3) | mask.value());
    let mut rem: u32 = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    ((data << 10) | rem) ^ 0x5412
}

/// 18-bit version word protected by BCH(18,6).
fn version_info_bits(ver: u32) -> u32 {
    let mut rem: u32 = ver;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    (ver << 12) | rem
}

struct ReedSolomonGenerator {
    /// Divisor polynomial coefficients, highest power first, leading 1 omitted.
    divisor: Vec<u8>,
}

impl ReedSolomonGenerator {
    fn new(degree: usize) -> Self {
        assert!((1..=255).contains(&degree), "Degree out of range");
        let mut divisor = vec![0u8; degree];
        divisor[degree - 1] = 1;

        // Multiply by (x - r^0) * (x - r^1) * ... * (x - r^{degree-1})
        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                divisor[j] = Self::multiply(divisor[j], root);
                if j + 1 < divisor.len() {
                    divisor[j] ^= divisor[j + 1];
                }
            }
            root = Self::multiply(root, 0x02);
        }
        Self { divisor }
    }

    fn compute_remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; self.divisor.len()];
        for b in data {
            let factor: u8 = b ^ result[0];
            result.remove(0);
            result.push(0);
            for (x, &y) in result.iter_mut().zip(self.divisor.iter()) {
                *x ^= Self::multiply(y, factor);
            }
        }
        result
    }

    /// Multiplication in GF(2^8/0x11D).
    fn multiply(x: u8, y: u8) -> u8 {
        let mut z: u8 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * 0x1D);
            z ^= ((y >> i) & 1) * x;
        }
        z
    }
}

struct FinderPenalty {
    qr_size: i32,
    run_history: [i32; 7],
}

impl FinderPenalty {
    fn new(size: i32) -> Self {
        Self {
            qr_size: size,
            run_history: [0; 7],
        }
    }

    fn add_history(&mut self, mut currentrunlength: i32) {
        if self.run_history[0] == 0 {
            // Light border before the first run
            currentrunlength += self.qr_size;
        }
        let len: usize = self.run_history.len();
        self.run_history.copy_within(0..len - 1, 1);
        self.run_history[0] = currentrunlength;
    }

    /// Counts 1:1:3:1:1 patterns with four light modules on at least one side.
    fn count_patterns(&self) -> i32 {
        let rh = &self.run_history;
        let n = rh[1];
        debug_assert!(n <= self.qr_size * 3);
        let matched = n > 0 && rh[2] == n && rh[3] == n * 3 && rh[4] == n && rh[5] == n;
        i32::from(matched && rh[0] >= n * 4 && rh[6] >= n)
            + i32::from(matched && rh[6] >= n * 4 && rh[0] >= n)
    }

    fn terminate_and_count(mut self, currentruncolor: bool, mut currentrunlength: i32) -> i32 {
        if currentruncolor {
            self.add_history(currentrunlength);
            currentrunlength = 0;
        }
        // Light border after the last run
        currentrunlength += self.qr_size;
        self.add_history(currentrunlength);
        self.count_patterns()
    }
}

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Version: (index 0 is padding)
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Version: (index 0 is padding)
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Error correction level for a QR code.
///
/// Written `L`, `M`, `Q` or `H` in configuration files and on the command line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    #[serde(rename = "L", alias = "l", alias = "low")]
    Low,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    #[serde(rename = "M", alias = "m", alias = "medium")]
    Medium,
    /// Tolerates ~25% erroneous codewords.
    #[serde(rename = "Q", alias = "q", alias = "quartile")]
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    #[serde(rename = "H", alias = "h", alias = "high")]
    High,
}

impl QrCodeEcc {
    /// Returns an unsigned 2-bit integer (in the range 0 to 3).
    fn ordinal(self) -> usize {
        use QrCodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// Returns the 2-bit value used in the format information.
    fn format_bits(self) -> u8 {
        use QrCodeEcc::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }

    /// Single-letter name: `L`, `M`, `Q` or `H`.
    pub fn as_str(self) -> &'static str {
        use QrCodeEcc::*;
        match self {
            Low => "L",
            Medium => "M",
            Quartile => "Q",
            High => "H",
        }
    }
}

impl fmt::Display for QrCodeEcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QrCodeEcc {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(QrCodeEcc::Low),
            "m" | "medium" => Ok(QrCodeEcc::Medium),
            "q" | "quartile" => Ok(QrCodeEcc::Quartile),
            "h" | "high" => Ok(QrCodeEcc::High),
            other => Err(Error::Config(format!(
                "Unknown error correction level '{other}', expected L/M/Q/H"
            ))),
        }
    }
}

/// A segment of data in a QR code.
///
/// Supports numeric, alphanumeric, byte or ECI modes. Segments are immutable and created using
/// factory functions like [`QrSegment::make_numeric`], [`QrSegment::make_alphanumeric`] or
/// [`QrSegment::make_bytes`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrSegment {
    mode: QrSegmentMode,
    numchars: usize,
    data: Vec<bool>,
}

impl QrSegment {
    /// Creates a segment for binary data in byte mode.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(data.len() * 8));
        for &b in data {
            bb.append_bits(u32::from(b), 8);
        }
        QrSegment::new(QrSegmentMode::Byte, data.len(), bb.0)
    }

    /// Creates a segment for a string of decimal digits in numeric mode.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPayload`] if `text` contains anything other than `0`-`9`.
    pub fn make_numeric(text: &str) -> Result<Self> {
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 3 + (text.len() + 2) / 3));
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for b in text.bytes() {
            if !b.is_ascii_digit() {
                return Err(Error::InvalidPayload(format!(
                    "'{}' cannot be encoded in numeric mode",
                    char::from(b)
                )));
            }
            accumdata = accumdata * 10 + u32::from(b - b'0');
            accumcount += 1;
            if accumcount == 3 {
                bb.append_bits(accumdata, 10);
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, accumcount * 3 + 1);
        }
        Ok(QrSegment::new(QrSegmentMode::Numeric, text.len(), bb.0))
    }

    /// Creates a segment for alphanumeric text.
    ///
    /// Allowed characters: 0–9, A–Z (uppercase), space, `$`, `%`, `*`, `+`, `-`, `.`, `/`, `:`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPayload`] if `text` contains any other character.
    pub fn make_alphanumeric(text: &str) -> Result<Self> {
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 5 + (text.len() + 1) / 2));
        let mut accumdata: u32 = 0;
        let mut accumcount: u32 = 0;
        for c in text.chars() {
            let i: usize = ALPHANUMERIC_CHARSET.find(c).ok_or_else(|| {
                Error::InvalidPayload(format!("'{c}' cannot be encoded in alphanumeric mode"))
            })?;
            accumdata = accumdata * 45 + i as u32;
            accumcount += 1;
            if accumcount == 2 {
                bb.append_bits(accumdata, 11);
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, 6);
        }
        Ok(QrSegment::new(QrSegmentMode::Alphanumeric, text.len(), bb.0))
    }

    /// Picks the densest single mode that covers all of `text`.
    pub fn make_segment(text: &str) -> Self {
        if QrSegment::is_numeric(text) {
            if let Ok(seg) = QrSegment::make_numeric(text) {
                return seg;
            }
        }
        if QrSegment::is_alphanumeric(text) {
            if let Ok(seg) = QrSegment::make_alphanumeric(text) {
                return seg;
            }
        }
        QrSegment::make_bytes(text.as_bytes())
    }

    /// Creates a segment representing an Extended Channel Interpretation
    /// (ECI) designator with the given assignment value.
    pub fn make_eci(assignval: u32) -> Result<Self> {
        let mut bb = BitBuffer(Vec::with_capacity(24));
        if assignval < 1 << 7 {
            bb.append_bits(assignval, 8);
        } else if assignval < 1 << 14 {
            bb.append_bits(0b10, 2);
            bb.append_bits(assignval, 14);
        } else if assignval < 1_000_000 {
            bb.append_bits(0b110, 3);
            bb.append_bits(assignval, 21);
        } else {
            return Err(Error::InvalidPayload(format!(
                "ECI assignment value {assignval} out of range"
            )));
        }
        Ok(QrSegment::new(QrSegmentMode::Eci, 0, bb.0))
    }

    pub fn new(mode: QrSegmentMode, numchars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            numchars,
            data,
        }
    }

    pub fn mode(&self) -> QrSegmentMode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Bits needed for `segs` at `version`, or `None` if a count field overflows.
    fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits: u8 = seg.mode.num_char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(ccbits.into()) {
                if seg.numchars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }

    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}

static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QrSegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Eci,
}

impl QrSegmentMode {
    fn mode_bits(self) -> u32 {
        use QrSegmentMode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Eci => 0x7,
        }
    }

    fn num_char_count_bits(self, ver: Version) -> u8 {
        use QrSegmentMode::*;
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Eci => [0, 0, 0],
        })[usize::from((ver.value() + 7) / 17)]
    }
}

/// An appendable sequence of bits.
pub(crate) struct BitBuffer(pub(crate) Vec<bool>);

impl BitBuffer {
    fn len(&self) -> usize {
        self.0.len()
    }

    /// Appends the low `len` bits of `val`, most significant first.
    fn append_bits(&mut self, val: u32, len: u8) {
        assert!(len <= 31 && (val >> len) == 0, "Value out of range");
        self.0
            .extend((0..i32::from(len)).rev().map(|i| get_bit(val, i)));
    }
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40]. Use `Version::try_from` for
    /// unchecked input.
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(ver: u32) -> Result<Self> {
        if (u32::from(Version::MIN.value())..=u32::from(Version::MAX.value())).contains(&ver) {
            Ok(Version(ver as u8))
        } else {
            Err(Error::InvalidVersion(ver))
        }
    }
}

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Mask(u8);

impl Mask {
    /// Creates a mask object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }
}

fn get_bit(x: u32, i: i32) -> bool {
    ((x >> i) & 1) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_of(seg: &QrSegment) -> Vec<u8> {
        seg.data()
            .chunks(8)
            .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
            .collect()
    }

    #[test]
    fn test_is_numeric() {
        assert!(QrSegment::is_numeric("1234567890"));
        assert!(!QrSegment::is_numeric("1234abc"));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(QrSegment::is_alphanumeric("HELLO WORLD"));
        assert!(!QrSegment::is_alphanumeric("Hello World"));
    }

    #[test]
    fn test_make_segment_picks_densest_mode() {
        assert_eq!(QrSegment::make_segment("0123").mode(), QrSegmentMode::Numeric);
        assert_eq!(QrSegment::make_segment("HTTPS://X.Y").mode(), QrSegmentMode::Alphanumeric);
        assert_eq!(
            QrSegment::make_segment("https://example.com").mode(),
            QrSegmentMode::Byte
        );
    }

    #[test]
    fn test_invalid_characters_are_rejected() {
        assert!(matches!(
            QrSegment::make_numeric("12a4"),
            Err(Error::InvalidPayload(_))
        ));
        assert!(matches!(
            QrSegment::make_alphanumeric("lowercase"),
            Err(Error::InvalidPayload(_))
        ));
        assert!(matches!(
            QrSegment::make_eci(1_000_000),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(matches!(
            QrCode::encode_text("", QrCodeEcc::Medium),
            Err(Error::InvalidPayload(_))
        ));
        assert!(matches!(
            QrCode::encode_binary(&[], QrCodeEcc::Medium),
            Err(Error::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_numeric_segment_bits() {
        // 012 -> 0000001100, 345 -> 0101011001, 67 -> 1000011
        let seg = QrSegment::make_numeric("01234567").unwrap();
        assert_eq!(seg.data().len(), 27);
        assert_eq!(seg.num_chars(), 8);
    }

    #[test]
    fn test_hello_world_data_and_ecc_codewords() {
        let seg = QrSegment::make_alphanumeric("HELLO WORLD").unwrap();
        assert_eq!(seg.data().len(), 61);
        let qr = QrCode::encode_segments_advanced(
            &[seg],
            QrCodeEcc::Medium,
            Version::MIN,
            Version::MAX,
            None,
            false,
        )
        .unwrap();
        assert_eq!(qr.version(), Version::new(1));

        let data: [u8; 16] = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let ecc = ReedSolomonGenerator::new(10).compute_remainder(&data);
        assert_eq!(ecc, vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_byte_segment_round_trips_bits() {
        let seg = QrSegment::make_bytes(b"qr");
        assert_eq!(bytes_of(&seg), b"qr".to_vec());
    }

    #[test]
    fn test_example_url_selects_version_two() {
        let qr = QrCode::encode_text("https://example.com", QrCodeEcc::Medium).unwrap();
        assert_eq!(qr.version().value(), 2);
        assert_eq!(qr.size(), 25);
        assert_eq!(qr.modules().len(), 25 * 25);
        assert_eq!(qr.error_correction_level(), QrCodeEcc::Medium);
    }

    #[test]
    fn test_version_one_low_holds_seventeen_bytes() {
        let ver = Some(Version::new(1));
        let fits = "abcdefghijklmnopq";
        assert_eq!(fits.len(), 17);
        let qr = QrCode::encode_text_with_version(fits, QrCodeEcc::Low, ver).unwrap();
        assert_eq!(qr.version().value(), 1);

        let too_long = "abcdefghijklmnopqr";
        let err = QrCode::encode_text_with_version(too_long, QrCodeEcc::Low, ver).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityExceeded(DataTooLong::DataOverCapacity(156, 152))
        ));
    }

    #[test]
    fn test_version_forty_low_byte_capacity() {
        let fits = "a".repeat(2953);
        let qr = QrCode::encode_text(&fits, QrCodeEcc::Low).unwrap();
        assert_eq!(qr.version(), Version::MAX);
        assert_eq!(qr.size(), 177);

        let too_long = "a".repeat(2954);
        assert!(matches!(
            QrCode::encode_text(&too_long, QrCodeEcc::Low),
            Err(Error::CapacityExceeded(_))
        ));
    }

    #[test]
    fn test_pinned_range_reports_overflow() {
        let ver = Version::new(5);
        let segs = [QrSegment::make_bytes(&[0x5A; 200])];
        let mask = Some(Mask::new(3));
        let result = QrCode::encode_segments_advanced(&segs, QrCodeEcc::High, ver, ver, mask, false);
        assert!(matches!(
            result,
            Err(Error::CapacityExceeded(DataTooLong::DataOverCapacity(_, _)))
        ));

        let segs = [QrSegment::make_bytes(&[0x5A; 40])];
        let qr = QrCode::encode_segments_advanced(&segs, QrCodeEcc::High, ver, ver, mask, false)
            .unwrap();
        assert_eq!(qr.size(), 37);
        assert_eq!(qr.mask(), Mask::new(3));
    }

    #[test]
    fn test_higher_levels_need_larger_versions() {
        let text = "https://example.com/resumes";
        let low = QrCode::encode_text(text, QrCodeEcc::Low).unwrap();
        let high = QrCode::encode_text(text, QrCodeEcc::High).unwrap();
        assert!(low.version() < high.version());
        assert_eq!(high.error_correction_level(), QrCodeEcc::High);
    }

    #[test]
    fn test_boostecl_raises_level_within_version() {
        let segs = [QrSegment::make_bytes(b"hi")];
        let qr = QrCode::encode_segments_advanced(
            &segs,
            QrCodeEcc::Low,
            Version::MIN,
            Version::MAX,
            None,
            true,
        )
        .unwrap();
        assert_eq!(qr.version().value(), 1);
        assert_eq!(qr.error_correction_level(), QrCodeEcc::High);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        for text in ["https://example.com", "HELLO WORLD", "0123456789", "ünïcödé ✓"] {
            let a = QrCode::encode_text(text, QrCodeEcc::Medium).unwrap();
            let b = QrCode::encode_text(text, QrCodeEcc::Medium).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_selected_mask_has_minimum_penalty() {
        for text in ["https://example.com", "A", "0123456789012345678901234567890123456789"] {
            let seg = QrSegment::make_segment(text);
            let auto = QrCode::encode_segments_advanced(
                &[seg.clone()],
                QrCodeEcc::Medium,
                Version::MIN,
                Version::MAX,
                None,
                false,
            )
            .unwrap();
            let penalties: Vec<i32> = (0u8..8)
                .map(|m| {
                    QrCode::encode_segments_advanced(
                        &[seg.clone()],
                        QrCodeEcc::Medium,
                        Version::MIN,
                        Version::MAX,
                        Some(Mask::new(m)),
                        false,
                    )
                    .unwrap()
                    .penalty_score()
                })
                .collect();
            let min = *penalties.iter().min().unwrap();
            let first_min = penalties.iter().position(|&p| p == min).unwrap() as u8;
            assert_eq!(auto.mask().value(), first_min);
            assert_eq!(auto.penalty_score(), min);
        }
    }

    #[test]
    fn test_format_bits_encode_level_and_mask() {
        let qr = QrCode::encode_text("https://example.com", QrCodeEcc::Quartile).unwrap();
        let mut read: u32 = 0;
        // Second copy along the bottom left column, bits 8..15
        for i in 8..15 {
            read |= u32::from(qr.get_module(8, qr.size() - 15 + i)) << i;
        }
        for i in 0..8 {
            read |= u32::from(qr.get_module(qr.size() - 1 - i, 8)) << i;
        }
        assert_eq!(read, format_info_bits(qr.error_correction_level(), qr.mask()));
        let unmasked = read ^ 0x5412;
        assert_eq!((unmasked >> 13) & 3, 3); // Quartile
        assert_eq!(u8::try_from((unmasked >> 10) & 7).unwrap(), qr.mask().value());
        assert!(qr.get_module(8, qr.size() - 8));
    }

    #[test]
    fn test_version_seven_has_version_information() {
        assert_eq!(version_info_bits(7), 0x07C94);
        let qr = QrCode::encode_text_with_version("v7", QrCodeEcc::Low, Some(Version::new(7)))
            .unwrap();
        assert_eq!(qr.size(), 45);
        let mut read: u32 = 0;
        for i in 0..18 {
            let a = qr.size() - 11 + i % 3;
            let b = i / 3;
            assert_eq!(qr.get_module(a, b), qr.get_module(b, a));
            read |= u32::from(qr.get_module(a, b)) << i;
        }
        assert_eq!(read, 0x07C94);
    }

    #[test]
    fn test_finder_and_timing_patterns() {
        let qr = QrCode::encode_text("https://example.com", QrCodeEcc::Medium).unwrap();
        let n = qr.size();
        for (cx, cy) in [(3, 3), (n - 4, 3), (3, n - 4)] {
            assert!(qr.get_module(cx, cy));
            assert!(qr.get_module(cx - 3, cy - 3));
            assert!(!qr.get_module(cx - 2, cy));
        }
        for i in 8..n - 8 {
            assert_eq!(qr.get_module(6, i), i % 2 == 0);
            assert_eq!(qr.get_module(i, 6), i % 2 == 0);
        }
        // Alignment pattern centre at (18, 18) for version 2
        assert!(qr.get_module(18, 18));
        assert!(!qr.get_module(17, 18));
        assert!(qr.get_module(16, 18));
        assert!(!qr.get_module(-1, 0));
        assert!(!qr.get_module(0, n));
    }

    #[test]
    fn test_alignment_pattern_positions() {
        assert!(alignment_pattern_positions(Version::new(1)).is_empty());
        assert_eq!(alignment_pattern_positions(Version::new(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(Version::new(7)), vec![6, 22, 38]);
        assert_eq!(
            alignment_pattern_positions(Version::new(32)),
            vec![6, 34, 60, 86, 112, 138]
        );
        assert_eq!(
            alignment_pattern_positions(Version::new(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_version_and_level_parsing() {
        assert_eq!(Version::try_from(40u32).unwrap(), Version::MAX);
        assert!(matches!(Version::try_from(0u32), Err(Error::InvalidVersion(0))));
        assert!(matches!(Version::try_from(41u32), Err(Error::InvalidVersion(41))));
        assert_eq!("h".parse::<QrCodeEcc>().unwrap(), QrCodeEcc::High);
        assert_eq!("Medium".parse::<QrCodeEcc>().unwrap(), QrCodeEcc::Medium);
        assert!("X".parse::<QrCodeEcc>().is_err());
        assert_eq!(QrCodeEcc::default(), QrCodeEcc::Medium);
    }
}
