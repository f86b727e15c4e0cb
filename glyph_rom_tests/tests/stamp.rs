// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry stamps carried by atlas images.

use glyph_rom::{pack_atlas, render_atlas, Atlas, CodePage, ErrorKind, GlyphGeometry};

use crate::util::BitmapFont;

#[test]
fn stamp_survives_png_encoding() {
    let geometry = GlyphGeometry::builder()
        .cell(12, 16)
        .glyph(8, 14)
        .margin(2, 1)
        .build()
        .unwrap();
    let atlas = render_atlas(&geometry, CodePage::Latin1, BitmapFont::default());
    let decoded = Atlas::decode(&atlas.encode().unwrap()).unwrap();
    assert_eq!(decoded.stamp(), Some(&geometry));
    assert_eq!(decoded, atlas);
}

#[test]
fn stamp_mismatch_is_detected_after_encoding() {
    let rendered = GlyphGeometry::default();
    let requested = GlyphGeometry::builder().margin(0, 1).build().unwrap();
    let atlas = render_atlas(&rendered, CodePage::Latin1, BitmapFont::default());
    let decoded = Atlas::decode(&atlas.encode().unwrap()).unwrap();

    let err = pack_atlas(&requested, &decoded).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GeometryMismatch);
    let message = err.to_string();
    assert!(message.contains(&rendered.to_string()), "{message}");
    assert!(message.contains(&requested.to_string()), "{message}");
}

#[test]
fn stamp_can_be_replaced() {
    let rendered = GlyphGeometry::default();
    let requested = GlyphGeometry::builder().margin(0, 0).build().unwrap();
    let atlas = render_atlas(&rendered, CodePage::Latin1, BitmapFont::default());
    let restamped = Atlas::from_image(atlas.into_image()).with_stamp(requested);
    assert!(pack_atlas(&requested, &restamped).is_ok(), "restamped atlas should pack");
}
