// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_rom`.
//!
//! - The `util` module holds a small bitmap test font, access to the fonts in `assets/fonts`,
//!   and builders for synthetic atlases.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the helpers can be shared.
//! - Name tests by topic first (`pack_...`, `pipeline_...`, `raster_...`, `stamp_...`).

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod raster;
mod stamp;
mod util;
