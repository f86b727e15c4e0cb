// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizing DejaVu Sans Mono through `FontRasterizer`.

use glyph_rom::{pack_atlas, render_atlas, CodePage, GlyphGeometry, GlyphRasterizer};
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

use crate::util::{dejavu_sans_mono, font_asset};

/// Characters whose ink lies between the ascender line and the baseline.
const ASCENDER_HEIGHT: [char; 6] = ['A', 'H', 'M', 'd', 'l', '0'];

#[test]
fn raster_baseline_is_ascent_rounded_up() {
    // hhea ascender is 1901 of 2048 units: 7.43 px at 8 px per em.
    assert_eq!(dejavu_sans_mono(8.0).baseline(), 8);
    // 14.85 px at 16 px per em.
    assert_eq!(dejavu_sans_mono(16.0).baseline(), 15);
}

#[test]
fn raster_masks_hang_from_the_baseline() {
    let data = std::fs::read(font_asset("DejaVuSansMono.ttf")).unwrap();
    let font = swash::FontRef::from_index(&data, 0).unwrap();
    let mut context = ScaleContext::new();
    let mut rasterizer = dejavu_sans_mono(8.0);
    let baseline = rasterizer.baseline();

    for ch in ASCENDER_HEIGHT {
        let mut scaler = context.builder(font).size(8.0).hint(true).build();
        let image = Render::new(&[Source::Outline, Source::Bitmap(StrikeWith::BestFit)])
            .format(Format::Alpha)
            .render(&mut scaler, font.charmap().map(ch))
            .unwrap();
        assert_eq!(image.content, Content::Mask, "{ch:?} should be an outline");

        let mask = rasterizer.rasterize(ch).unwrap();
        assert_eq!(mask.left, image.placement.left, "{ch:?} left");
        assert_eq!(mask.top, baseline - image.placement.top, "{ch:?} top");
        assert_eq!(
            (mask.width, mask.height),
            (image.placement.width, image.placement.height),
            "{ch:?} size"
        );
        assert_eq!(mask.coverage, image.data, "{ch:?} coverage");
        assert!(mask.top >= 0, "{ch:?} has ink above the pen origin");
    }
}

#[test]
fn raster_capitals_sit_on_the_baseline() {
    let mut rasterizer = dejavu_sans_mono(8.0);
    for ch in ['A', 'H'] {
        let mask = rasterizer.rasterize(ch).unwrap();
        assert_eq!(mask.top + mask.height as i32, 8, "{ch:?} bottom");
        assert!(mask.coverage.iter().any(|&c| c > 0), "{ch:?} has no ink");
    }
}

#[test]
fn raster_unmapped_characters_have_no_mask() {
    let mut rasterizer = dejavu_sans_mono(8.0);
    // C0 controls and C1 controls are not in the cmap.
    for ch in ('\u{1}'..='\u{1f}').chain('\u{7f}'..='\u{9f}') {
        assert_eq!(rasterizer.rasterize(ch), None, "{ch:?} should be unmapped");
    }
}

#[test]
fn raster_font_atlas_packs_into_rom() {
    let geometry = GlyphGeometry::default();
    let mut rasterizer = dejavu_sans_mono(8.0);
    let atlas = render_atlas(&geometry, CodePage::Latin1, &mut rasterizer);
    let rom = pack_atlas(&geometry, &atlas).unwrap();
    assert_eq!(rom.len(), 2048);

    for code in [b'A', b'H', b'M', b'0'] {
        assert!(
            rom.glyph(code).iter().any(|&row| row != 0),
            "{:?} packed blank",
            char::from(code)
        );
    }

    // Codes 1 to 31 are unmapped and nothing above or beside them inks
    // their cells.
    let image = atlas.image();
    for code in 1..=31_u8 {
        let (x0, y0) = geometry.cell_origin(code);
        for y in y0..y0 + geometry.cell_height() {
            for x in x0..x0 + geometry.cell_width() {
                assert_eq!(image.get_pixel(x, y).0[0], 0, "ink in the cell of {code}");
            }
        }
        assert_eq!(rom.glyph(code), &[0; 8], "code {code} should be blank");
    }
}
