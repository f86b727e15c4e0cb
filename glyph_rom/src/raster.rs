// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization.
//!
//! The atlas renderer only depends on the [`GlyphRasterizer`] trait, so the
//! outline rasterizer can be swapped (or replaced by a fixed bitmap font in
//! tests) without touching the atlas or packing code.

use std::path::Path;

use skrifa::instance::{LocationRef, Size};
use skrifa::MetadataProvider;
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

use crate::Error;

/// Produces coverage bitmaps for single characters.
pub trait GlyphRasterizer {
    /// Rasterize `ch`.
    ///
    /// Returns `None` when there is nothing to draw, for instance because the
    /// font has no glyph for `ch`. The caller leaves the cell blank.
    fn rasterize(&mut self, ch: char) -> Option<GlyphMask>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for &mut R {
    fn rasterize(&mut self, ch: char) -> Option<GlyphMask> {
        (**self).rasterize(ch)
    }
}

/// An 8-bit coverage bitmap positioned relative to a pen origin.
///
/// The pen origin is the top-left corner of the text box the character is
/// drawn in; `left` and `top` locate the bitmap's top-left pixel from there
/// and may be negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    /// Horizontal offset of the bitmap from the pen origin.
    pub left: i32,
    /// Vertical offset of the bitmap from the pen origin (down is positive).
    pub top: i32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Row-major coverage, `width * height` bytes, 0 = none, 255 = full.
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Coverage at `(x, y)` inside the bitmap.
    ///
    /// Out of range coordinates, and bitmaps whose coverage buffer is shorter
    /// than `width * height`, read as no coverage.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.coverage.get(index).copied().unwrap_or(0)
    }
}

/// Rasterizes characters from a TrueType or OpenType font.
///
/// Character mapping and vertical metrics come from Skrifa; the outlines are
/// hinted and scan converted by Swash. The baseline is placed
/// `ceil(ascent)` pixels below the pen origin, which puts the top of the
/// ascender on the first pixel row of the cell.
pub struct FontRasterizer {
    data: Vec<u8>,
    index: u32,
    size: f32,
    baseline: i32,
    hint: bool,
    context: ScaleContext,
}

impl FontRasterizer {
    /// Load the first face of the font file at `path`, scaled to `size`
    /// pixels per em.
    pub fn open(path: impl AsRef<Path>, size: f32) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| Error::io("read font", path, err))?;
        Self::parse(data, size, &format!("`{}`", path.display()))
    }

    /// Use in-memory font data, scaled to `size` pixels per em.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self, Error> {
        Self::parse(data, size, "data")
    }

    fn parse(data: Vec<u8>, size: f32, origin: &str) -> Result<Self, Error> {
        let index = 0;
        let font =
            skrifa::FontRef::from_index(&data, index).map_err(|err| Error::font(origin, err))?;
        let ascent = font.metrics(Size::new(size), LocationRef::default()).ascent;
        if swash::FontRef::from_index(&data, index as usize).is_none() {
            return Err(Error::font_unsupported(origin));
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "ascent is a handful of pixels"
        )]
        let baseline = ascent.ceil() as i32;
        log::debug!("loaded font {origin}: {size}px, baseline at {baseline}px");
        Ok(Self {
            data,
            index,
            size,
            baseline,
            hint: true,
            context: ScaleContext::new(),
        })
    }

    /// Enable or disable hinting (enabled by default).
    pub fn set_hinting(&mut self, hint: bool) {
        self.hint = hint;
    }

    /// The pixel size the font is rasterized at.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance in pixels from the pen origin down to the baseline.
    pub fn baseline(&self) -> i32 {
        self.baseline
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn rasterize(&mut self, ch: char) -> Option<GlyphMask> {
        let font = skrifa::FontRef::from_index(&self.data, self.index).ok()?;
        let Some(glyph_id) = font.charmap().map(ch) else {
            log::trace!("no glyph for {:?}", ch);
            return None;
        };
        let glyph_id = u16::try_from(glyph_id.to_u32()).ok()?;

        let font = swash::FontRef::from_index(&self.data, self.index as usize)?;
        let mut scaler = self
            .context
            .builder(font)
            .size(self.size)
            .hint(self.hint)
            .build();
        let image = Render::new(&[Source::Outline, Source::Bitmap(StrikeWith::BestFit)])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)?;

        let coverage = match image.content {
            Content::Mask => image.data,
            // Embedded colour bitmaps: keep the alpha channel.
            Content::Color => image.data.chunks_exact(4).map(|px| px[3]).collect(),
            Content::SubpixelMask => image.data.chunks_exact(4).map(|px| px[1]).collect(),
        };
        Some(GlyphMask {
            left: image.placement.left,
            top: self.baseline - image.placement.top,
            width: image.placement.width,
            height: image.placement.height,
            coverage,
        })
    }
}

impl core::fmt::Debug for FontRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontRasterizer")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .field("size", &self.size)
            .field("baseline", &self.baseline)
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}
