// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic bitmap "font" for end-to-end tests.

use glyph_rom::{GlyphMask, GlyphRasterizer};

/// Capital A of the IBM PC 8x8 font, one byte per row, leftmost pixel in bit 7.
pub(crate) const GLYPH_A: [u8; 8] = [0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00];

/// Capital H of the IBM PC 8x8 font.
pub(crate) const GLYPH_H: [u8; 8] = [0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00];

/// Rasterizes 'A' and 'H' from [`GLYPH_A`] and [`GLYPH_H`] and nothing else.
///
/// Glyphs are drawn at the pen origin with coverage 255 for set bits. Each
/// call is counted so tests can check that every code was visited.
#[derive(Debug, Default)]
pub(crate) struct BitmapFont {
    pub(crate) calls: usize,
    /// Coverage used for set bits; lower it to test the threshold.
    pub(crate) ink: Option<u8>,
}

impl GlyphRasterizer for BitmapFont {
    fn rasterize(&mut self, ch: char) -> Option<GlyphMask> {
        self.calls += 1;
        let rows = match ch {
            'A' => GLYPH_A,
            'H' => GLYPH_H,
            _ => return None,
        };
        let ink = self.ink.unwrap_or(255);
        let coverage = rows
            .iter()
            .flat_map(|&row| (0..8).rev().map(move |bit| if (row >> bit) & 1 == 1 { ink } else { 0 }))
            .collect();
        Some(GlyphMask {
            left: 0,
            top: 0,
            width: 8,
            height: 8,
            coverage,
        })
    }
}
