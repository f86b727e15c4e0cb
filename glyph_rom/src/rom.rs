// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing an atlas into a 1-bit font ROM, and reading it back.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::{Atlas, Error, GlyphGeometry, MAX_GLYPH_WIDTH};

/// Pixels brighter than this are ink.
pub const INK_THRESHOLD: u8 = 128;

/// Pack one row of pixels into a byte.
///
/// Pixels are consumed left to right, each shifted in as the new least
/// significant bit, so the leftmost pixel ends up as bit `len - 1` and the
/// rightmost as bit 0. A pixel is ink (1) when it is strictly greater than
/// `threshold`.
///
/// Callers pass at most [`MAX_GLYPH_WIDTH`] pixels. Longer rows panic in
/// debug builds; in release builds the leading pixels are silently shifted
/// out and only the last [`MAX_GLYPH_WIDTH`] are kept.
pub fn pack_row(pixels: &[u8], threshold: u8) -> u8 {
    debug_assert!(
        pixels.len() <= MAX_GLYPH_WIDTH as usize,
        "row of {} pixels does not fit in a byte",
        pixels.len()
    );
    pixels
        .iter()
        .fold(0_u8, |acc, &px| (acc << 1) | u8::from(px > threshold))
}

/// Pack every glyph of `image` into a ROM.
///
/// The image must cover the whole atlas of `geometry`; this is checked
/// before any pixel is sampled. Larger images are accepted and their extra
/// pixels ignored.
pub fn pack_image(geometry: &GlyphGeometry, image: &GrayImage) -> Result<FontRom, Error> {
    let required = geometry.atlas_size();
    let actual = image.dimensions();
    if actual.0 < required.0 || actual.1 < required.1 {
        return Err(Error::atlas_too_small(actual, required));
    }
    if actual != required {
        log::warn!(
            "atlas is {}x{}, larger than the {}x{} the geometry needs; extra pixels are ignored",
            actual.0,
            actual.1,
            required.0,
            required.1
        );
    }

    let width = geometry.glyph_width();
    let mut bytes = Vec::with_capacity(geometry.rom_len());
    let mut row = Vec::with_capacity(width as usize);
    for code in 0..=u8::MAX {
        let (x0, y0) = geometry.glyph_origin(code);
        for y in y0..y0 + geometry.glyph_height() {
            row.clear();
            row.extend((x0..x0 + width).map(|x| image.get_pixel(x, y).0[0]));
            bytes.push(pack_row(&row, INK_THRESHOLD));
        }
    }
    debug_assert_eq!(bytes.len(), geometry.rom_len(), "ROM length");
    log::debug!("packed {} bytes ({geometry})", bytes.len());
    Ok(FontRom {
        geometry: *geometry,
        bytes,
    })
}

/// Pack an atlas into a ROM.
///
/// An atlas stamped with a different geometry is rejected with
/// [`ErrorKind::GeometryMismatch`](crate::ErrorKind::GeometryMismatch). An
/// unstamped atlas is trusted to match `geometry`.
pub fn pack_atlas(geometry: &GlyphGeometry, atlas: &Atlas) -> Result<FontRom, Error> {
    match atlas.stamp() {
        Some(stamp) if stamp != geometry => return Err(Error::geometry_mismatch(stamp, geometry)),
        Some(_) => {}
        None => log::warn!("atlas has no geometry stamp, assuming `{geometry}`"),
    }
    pack_image(geometry, atlas.image())
}

/// A packed font ROM: `glyph_height` bytes per code, codes in ascending
/// order, one byte per glyph row with the leftmost pixel in the most
/// significant used bit.
///
/// Glyphs narrower than eight pixels sit in the low bits of each row: the
/// leftmost pixel of a 5 pixel wide glyph is bit 4, not bit 7. A renderer
/// that always reads bit 7 as the leftmost pixel draws such glyphs shifted
/// three pixels to the right, so [`to_atlas`](Self::to_atlas) and
/// [`glyph_art`](Self::glyph_art) previews of narrow glyphs will not match
/// its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontRom {
    geometry: GlyphGeometry,
    bytes: Vec<u8>,
}

impl FontRom {
    /// Interpret `bytes` as a ROM packed with `geometry`.
    pub fn from_bytes(geometry: GlyphGeometry, bytes: Vec<u8>) -> Result<Self, Error> {
        if bytes.len() != geometry.rom_len() {
            return Err(Error::rom_size(bytes.len(), geometry.rom_len()));
        }
        Ok(Self { geometry, bytes })
    }

    /// Read the ROM at `path`.
    pub fn load(path: impl AsRef<Path>, geometry: GlyphGeometry) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| Error::io("read ROM", path, err))?;
        Self::from_bytes(geometry, bytes)
    }

    /// Write the raw bytes to `path`; there is no header.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes).map_err(|err| Error::io("write ROM", path, err))
    }

    /// The geometry the ROM was packed with.
    pub fn geometry(&self) -> &GlyphGeometry {
        &self.geometry
    }

    /// The raw ROM contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the raw ROM contents.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size of the ROM in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the ROM holds no bytes (never the case for a valid geometry).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The rows of `code`, top row first.
    pub fn glyph(&self, code: u8) -> &[u8] {
        let len = self.geometry.bytes_per_glyph();
        let start = usize::from(code) * len;
        &self.bytes[start..start + len]
    }

    /// Whether pixel `(x, y)` of `code` is ink. Coordinates outside the glyph
    /// are background.
    pub fn is_ink(&self, code: u8, x: u32, y: u32) -> bool {
        let width = self.geometry.glyph_width();
        if x >= width || y >= self.geometry.glyph_height() {
            return false;
        }
        let row = self.glyph(code)[y as usize];
        (row >> (width - 1 - x)) & 1 == 1
    }

    /// Redraw the ROM as a stamped atlas with pure 0/255 pixels.
    ///
    /// Packing the result with the same geometry gives this ROM back.
    pub fn to_atlas(&self) -> Atlas {
        let geometry = &self.geometry;
        let (width, height) = geometry.atlas_size();
        let mut image = GrayImage::new(width, height);
        for code in 0..=u8::MAX {
            let (x0, y0) = geometry.glyph_origin(code);
            for y in 0..geometry.glyph_height() {
                for x in 0..geometry.glyph_width() {
                    if self.is_ink(code, x, y) {
                        image.put_pixel(x0 + x, y0 + y, Luma([255]));
                    }
                }
            }
        }
        Atlas::from_image(image).with_stamp(*geometry)
    }

    /// Render `code` as text, one line per row.
    pub fn glyph_art(&self, code: u8, ink: char, blank: char) -> String {
        let mut out = String::new();
        for y in 0..self.geometry.glyph_height() {
            out.extend(
                (0..self.geometry.glyph_width())
                    .map(|x| if self.is_ink(code, x, y) { ink } else { blank }),
            );
            out.push('\n');
        }
        out
    }
}
