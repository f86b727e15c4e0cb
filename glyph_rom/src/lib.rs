// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph ROM turns a typeface into a 1-bit font ROM for text-mode renderers.
//!
//! The pipeline has two independent stages joined by an image file:
//!
//! 1. [`render_atlas`] draws all 256 single-byte codes into the cells of a
//!    grayscale [`Atlas`], using any [`GlyphRasterizer`] (normally a
//!    [`FontRasterizer`] backed by Skrifa and Swash).
//! 2. [`pack_atlas`] thresholds each glyph region of an atlas and packs every
//!    row into one byte, producing a [`FontRom`] of `256 * glyph_height`
//!    bytes.
//!
//! Both stages take the same [`GlyphGeometry`]. Atlases record the geometry
//! they were rendered with, so packing with a different one is an error
//! rather than a silently scrambled ROM.
//!
//! ```
//! use glyph_rom::{pack_atlas, render_atlas, CodePage, GlyphGeometry, GlyphMask, GlyphRasterizer};
//!
//! // A "font" in which every character is a filled 8x8 square.
//! struct Blocks;
//!
//! impl GlyphRasterizer for Blocks {
//!     fn rasterize(&mut self, _: char) -> Option<GlyphMask> {
//!         Some(GlyphMask { left: 0, top: 0, width: 8, height: 8, coverage: vec![255; 64] })
//!     }
//! }
//!
//! let geometry = GlyphGeometry::default();
//! let atlas = render_atlas(&geometry, CodePage::Latin1, Blocks);
//! let rom = pack_atlas(&geometry, &atlas)?;
//! assert_eq!(rom.len(), 256 * 8);
//! assert_eq!(rom.glyph(b'A'), &[0xFF; 8]);
//! # Ok::<(), glyph_rom::Error>(())
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod atlas;
mod code_page;
mod error;
mod geometry;
mod raster;
mod rom;

pub use image;

pub use atlas::{render_atlas, Atlas, GEOMETRY_STAMP_KEYWORD};
pub use code_page::{CodePage, UnknownCodePage};
pub use error::{Error, ErrorKind};
pub use geometry::{GeometryBuilder, GlyphGeometry, GLYPH_COUNT, MAX_GLYPH_WIDTH};
pub use raster::{FontRasterizer, GlyphMask, GlyphRasterizer};
pub use rom::{pack_atlas, pack_image, pack_row, FontRom, INK_THRESHOLD};
