// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builders for synthetic atlas images.

use glyph_rom::image::{GrayImage, Luma};
use glyph_rom::GlyphGeometry;

/// An all-background atlas of exactly the size `geometry` needs.
pub(crate) fn blank_atlas(geometry: &GlyphGeometry) -> GrayImage {
    let (width, height) = geometry.atlas_size();
    GrayImage::new(width, height)
}

/// Paint the whole cell of `code`, margins included, with `value`.
pub(crate) fn fill_cell(image: &mut GrayImage, geometry: &GlyphGeometry, code: u8, value: u8) {
    let (x0, y0) = geometry.cell_origin(code);
    for y in y0..y0 + geometry.cell_height() {
        for x in x0..x0 + geometry.cell_width() {
            image.put_pixel(x, y, Luma([value]));
        }
    }
}

/// Paint column `column` of the glyph region of `code`, for every glyph row.
pub(crate) fn fill_column(
    image: &mut GrayImage,
    geometry: &GlyphGeometry,
    code: u8,
    column: u32,
    value: u8,
) {
    let (x0, y0) = geometry.glyph_origin(code);
    for y in y0..y0 + geometry.glyph_height() {
        image.put_pixel(x0 + column, y, Luma([value]));
    }
}
