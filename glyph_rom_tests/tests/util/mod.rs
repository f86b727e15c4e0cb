// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod atlases;
mod font;

pub(crate) use atlases::{blank_atlas, fill_cell, fill_column};
pub(crate) use font::{BitmapFont, GLYPH_A, GLYPH_H};

/// Encode an image in another colour type, the way a third party tool might
/// hand us an atlas.
pub(crate) fn encode_png(image: glyph_rom::image::DynamicImage) -> Vec<u8> {
    let mut out = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut out, glyph_rom::image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

/// A scratch path in the system temp directory, unique per test name.
pub(crate) fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("glyph_rom_tests-{}-{name}", std::process::id()))
}

/// Path of a font in `assets/fonts`.
pub(crate) fn font_asset(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets/fonts")
        .join(name)
}

/// DejaVu Sans Mono rasterized at `size` pixels per em.
pub(crate) fn dejavu_sans_mono(size: f32) -> glyph_rom::FontRasterizer {
    glyph_rom::FontRasterizer::open(font_asset("DejaVuSansMono.ttf"), size).unwrap()
}
