// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `glyph-rom`: render a font into a glyph atlas and pack atlases into font ROMs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glyph_rom::{
    pack_atlas, render_atlas, Atlas, CodePage, FontRasterizer, FontRom, GlyphGeometry,
};

/// Log target of the binary's own messages. Must not start with `glyph_rom`,
/// which `RUST_LOG` directives for the library match as a prefix.
const LOG_TARGET: &str = "glyph-rom";

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every code of a font into an atlas image.
    Atlas {
        #[command(flatten)]
        font: FontArgs,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Where to write the atlas.
        #[arg(short, long, default_value = "font8x8.png")]
        output: PathBuf,
    },
    /// Pack an atlas image into a font ROM.
    Pack {
        /// The atlas to read.
        #[arg(long, default_value = "font8x8.png")]
        atlas: PathBuf,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Pack even if the atlas was rendered with a different geometry.
        #[arg(long)]
        ignore_stamp: bool,
        /// Where to write the ROM.
        #[arg(short, long, default_value = "font_rom.bin")]
        output: PathBuf,
    },
    /// Render a font to an atlas file, then pack that file into a ROM.
    Build {
        #[command(flatten)]
        font: FontArgs,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Where to write the intermediate atlas.
        #[arg(long, default_value = "font8x8.png")]
        atlas: PathBuf,
        /// Where to write the ROM.
        #[arg(short, long, default_value = "font_rom.bin")]
        output: PathBuf,
    },
    /// Draw a ROM back into an atlas image.
    Unpack {
        /// The ROM to read.
        #[arg(long)]
        rom: PathBuf,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Where to write the atlas.
        #[arg(short, long, default_value = "atlas.png")]
        output: PathBuf,
    },
    /// Print glyphs of a ROM as text.
    Show {
        /// The ROM to read.
        #[arg(long)]
        rom: PathBuf,
        #[command(flatten)]
        geometry: GeometryArgs,
        /// Print the glyphs of these characters (Latin-1 only).
        #[arg(long, conflicts_with = "codes")]
        text: Option<String>,
        /// Codes to print, 0 to 255.
        codes: Vec<u8>,
    },
}

#[derive(Args, Debug)]
struct FontArgs {
    /// TrueType or OpenType font to rasterize.
    #[arg(long)]
    font: PathBuf,
    /// Pixel size to rasterize at; defaults to the glyph height.
    #[arg(long)]
    size: Option<f32>,
    /// How codes 0 to 255 map to characters.
    #[arg(long, default_value_t = CodePage::Latin1)]
    code_page: CodePage,
    /// Disable outline hinting.
    #[arg(long)]
    no_hinting: bool,
}

/// Cell layout shared by every stage.
#[derive(Args, Debug)]
struct GeometryArgs {
    /// Cell width in pixels.
    #[arg(long, default_value_t = 10)]
    cell_width: u32,
    /// Cell height in pixels.
    #[arg(long, default_value_t = 10)]
    cell_height: u32,
    /// Width of the packed glyph region (at most 8).
    #[arg(long, default_value_t = 8)]
    glyph_width: u32,
    /// Height of the packed glyph region.
    #[arg(long, default_value_t = 8)]
    glyph_height: u32,
    /// Offset of the glyph region from the left edge of its cell.
    #[arg(long, default_value_t = 1)]
    margin_x: u32,
    /// Offset of the glyph region from the top edge of its cell.
    #[arg(long, default_value_t = 0)]
    margin_y: u32,
    /// Cells per atlas row.
    #[arg(long, default_value_t = 16)]
    columns: u32,
    /// Cell rows in the atlas.
    #[arg(long, default_value_t = 16)]
    rows: u32,
}

impl GeometryArgs {
    fn build(&self) -> Result<GlyphGeometry> {
        GlyphGeometry::builder()
            .cell(self.cell_width, self.cell_height)
            .glyph(self.glyph_width, self.glyph_height)
            .margin(self.margin_x, self.margin_y)
            .grid(self.columns, self.rows)
            .build()
            .context("invalid glyph geometry")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Atlas {
            font,
            geometry,
            output,
        } => {
            let geometry = geometry.build()?;
            write_atlas(&font, &geometry, &output)
        }
        Command::Pack {
            atlas,
            geometry,
            ignore_stamp,
            output,
        } => {
            let geometry = geometry.build()?;
            write_rom(&atlas, &geometry, ignore_stamp, &output)
        }
        Command::Build {
            font,
            geometry,
            atlas,
            output,
        } => {
            let geometry = geometry.build()?;
            write_atlas(&font, &geometry, &atlas)?;
            write_rom(&atlas, &geometry, false, &output)
        }
        Command::Unpack {
            rom,
            geometry,
            output,
        } => {
            let geometry = geometry.build()?;
            let rom = load_rom(&rom, geometry)?;
            let atlas = rom.to_atlas();
            atlas
                .save(&output)
                .with_context(|| format!("cannot write atlas `{}`", output.display()))?;
            let (width, height) = atlas.dimensions();
            log::info!(target: LOG_TARGET, "saved {} ({width}x{height})", output.display());
            Ok(())
        }
        Command::Show {
            rom,
            geometry,
            text,
            codes,
        } => {
            let geometry = geometry.build()?;
            let rom = load_rom(&rom, geometry)?;
            let codes = match text {
                Some(text) => latin1_codes(&text)?,
                None if codes.is_empty() => (0..=u8::MAX).collect(),
                None => codes,
            };
            for code in codes {
                println!("{code:#04x} {:?}", char::from(code));
                print!("{}", rom.glyph_art(code, '#', '.'));
            }
            Ok(())
        }
    }
}

fn write_atlas(font: &FontArgs, geometry: &GlyphGeometry, output: &Path) -> Result<()> {
    let size = font.size.unwrap_or(geometry.glyph_height() as f32);
    let mut rasterizer = FontRasterizer::open(&font.font, size)
        .with_context(|| format!("cannot load font `{}`", font.font.display()))?;
    rasterizer.set_hinting(!font.no_hinting);

    let atlas = render_atlas(geometry, font.code_page, &mut rasterizer);
    atlas
        .save(output)
        .with_context(|| format!("cannot write atlas `{}`", output.display()))?;
    let (width, height) = atlas.dimensions();
    log::info!(target: LOG_TARGET, "saved {} ({width}x{height})", output.display());
    Ok(())
}

fn write_rom(atlas: &Path, geometry: &GlyphGeometry, ignore_stamp: bool, output: &Path) -> Result<()> {
    let mut loaded =
        Atlas::load(atlas).with_context(|| format!("cannot load atlas `{}`", atlas.display()))?;
    if ignore_stamp {
        if let Some(stamp) = loaded.stamp() {
            log::warn!(target: LOG_TARGET, "ignoring atlas geometry `{stamp}`");
        }
        loaded = Atlas::from_image(loaded.into_image()).with_stamp(*geometry);
    }
    let rom = pack_atlas(geometry, &loaded)
        .with_context(|| format!("cannot pack atlas `{}`", atlas.display()))?;
    rom.save(output)
        .with_context(|| format!("cannot write ROM `{}`", output.display()))?;
    log::info!(target: LOG_TARGET, "saved {} ({} bytes)", output.display(), rom.len());
    Ok(())
}

fn load_rom(path: &Path, geometry: GlyphGeometry) -> Result<FontRom> {
    FontRom::load(path, geometry).with_context(|| format!("cannot load ROM `{}`", path.display()))
}

fn latin1_codes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| match u8::try_from(ch) {
            Ok(code) => Ok(code),
            Err(_) => bail!("{ch:?} is outside the single-byte code space"),
        })
        .collect()
}
