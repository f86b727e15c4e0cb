// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas rendering and the atlas image artifact.

use std::io::Cursor;
use std::path::Path;

use image::GrayImage;

use crate::raster::{GlyphMask, GlyphRasterizer};
use crate::{CodePage, Error, GlyphGeometry};

/// Keyword of the PNG `tEXt` chunk that records the geometry an atlas was
/// rendered with.
pub const GEOMETRY_STAMP_KEYWORD: &str = "glyph-rom:geometry";

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A grid of glyph cells stored as an 8-bit grayscale image.
///
/// Intensity 0 is background and 255 is ink. An atlas produced by
/// [`render_atlas`] (or [`FontRom::to_atlas`](crate::FontRom::to_atlas))
/// carries the geometry it was drawn with; atlases decoded from foreign
/// images usually do not.
#[derive(Clone, Debug, PartialEq)]
pub struct Atlas {
    image: GrayImage,
    stamp: Option<GlyphGeometry>,
}

impl Atlas {
    /// Wrap an existing grayscale image without a geometry stamp.
    pub fn from_image(image: GrayImage) -> Self {
        Self { image, stamp: None }
    }

    /// Attach the geometry this atlas was laid out with.
    #[must_use]
    pub fn with_stamp(mut self, geometry: GlyphGeometry) -> Self {
        self.stamp = Some(geometry);
        self
    }

    /// The geometry recorded in the atlas, if any.
    pub fn stamp(&self) -> Option<&GlyphGeometry> {
        self.stamp.as_ref()
    }

    /// The pixels.
    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    /// Take the pixels, dropping the stamp.
    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encode as an 8-bit grayscale PNG, writing the stamp as a `tEXt` chunk
    /// ahead of the image data.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.image.width(), self.image.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        if let Some(stamp) = &self.stamp {
            encoder
                .add_text_chunk(GEOMETRY_STAMP_KEYWORD.to_owned(), stamp.to_string())
                .map_err(Error::image_encode)?;
        }
        let mut writer = encoder.write_header().map_err(Error::image_encode)?;
        writer
            .write_image_data(self.image.as_raw())
            .map_err(Error::image_encode)?;
        writer.finish().map_err(Error::image_encode)?;
        Ok(out)
    }

    /// Decode an atlas image.
    ///
    /// Any colour type and bit depth is accepted and collapsed to
    /// luminance. The geometry stamp is picked up from PNG text chunks.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let image = image::load_from_memory(bytes)
            .map_err(Error::image_decode)?
            .to_luma8();
        let stamp = read_stamp(bytes)?;
        Ok(Self { image, stamp })
    }

    /// Read and decode the atlas at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| Error::io("read atlas", path, err))?;
        Self::decode(&bytes)
    }

    /// Encode the atlas and write it to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let bytes = self.encode()?;
        std::fs::write(path, bytes).map_err(|err| Error::io("write atlas", path, err))
    }
}

fn read_stamp(bytes: &[u8]) -> Result<Option<GlyphGeometry>, Error> {
    if !bytes.starts_with(PNG_SIGNATURE) {
        return Ok(None);
    }
    let reader = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .map_err(Error::image_decode)?;
    reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .find(|chunk| chunk.keyword == GEOMETRY_STAMP_KEYWORD)
        .map(|chunk| chunk.text.parse())
        .transpose()
}

/// Draw all 256 codes into a fresh atlas.
///
/// Each character is drawn with its pen origin on the glyph origin of its
/// cell ([`GlyphGeometry::glyph_origin`], both margins applied) so that the
/// packer samples exactly what was drawn. Ink is only clipped at the image
/// edges; a glyph that overhangs its cell bleeds into the neighbouring cell.
/// Codes the rasterizer has nothing for stay blank.
pub fn render_atlas<R: GlyphRasterizer>(
    geometry: &GlyphGeometry,
    code_page: CodePage,
    mut rasterizer: R,
) -> Atlas {
    let (width, height) = geometry.atlas_size();
    log::debug!("rendering {width}x{height} atlas ({geometry}, {code_page})");
    let mut image = GrayImage::new(width, height);
    let mut blank = 0_usize;
    for code in 0..=u8::MAX {
        let Some(mask) = rasterizer.rasterize(code_page.to_char(code)) else {
            blank += 1;
            continue;
        };
        let (x, y) = geometry.glyph_origin(code);
        draw_mask(&mut image, &mask, x, y);
    }
    if blank > 0 {
        log::debug!("{blank} codes have no glyph and were left blank");
    }
    Atlas {
        image,
        stamp: Some(*geometry),
    }
}

/// Composite `mask` in full-intensity ink with its pen origin at `(x, y)`.
fn draw_mask(image: &mut GrayImage, mask: &GlyphMask, x: u32, y: u32) {
    let left = i64::from(x) + i64::from(mask.left);
    let top = i64::from(y) + i64::from(mask.top);
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    for my in 0..mask.height {
        let py = top + i64::from(my);
        if !(0..height).contains(&py) {
            continue;
        }
        for mx in 0..mask.width {
            let px = left + i64::from(mx);
            let coverage = mask.coverage_at(mx, my);
            if coverage == 0 || !(0..width).contains(&px) {
                continue;
            }
            // Ink is 255, so blending over the background yields the coverage itself.
            #[expect(
                clippy::cast_possible_truncation,
                reason = "px and py were checked against the u32 image size"
            )]
            let pixel = image.get_pixel_mut(px as u32, py as u32);
            pixel.0[0] = pixel.0[0].max(coverage);
        }
    }
}
