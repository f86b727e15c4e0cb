// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed cell geometry shared by the atlas renderer and the ROM packer.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Number of glyphs in an atlas and in a ROM: the whole single-byte code space.
pub const GLYPH_COUNT: usize = 256;

/// Widest glyph that still packs into one byte per row.
pub const MAX_GLYPH_WIDTH: u32 = 8;

/// Cell layout of a glyph atlas and the region of each cell that is packed.
///
/// Every glyph occupies a `cell_width × cell_height` cell of a
/// `columns × rows` grid. Only the `glyph_width × glyph_height` rectangle that
/// starts `(margin_x, margin_y)` pixels into the cell is sampled.
///
/// The same value must be handed to both stages; the atlas carries it as a
/// stamp so that [`pack_atlas`](crate::pack_atlas) can reject a mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphGeometry {
    cell_width: u32,
    cell_height: u32,
    glyph_width: u32,
    glyph_height: u32,
    margin_x: u32,
    margin_y: u32,
    columns: u32,
    rows: u32,
}

impl GlyphGeometry {
    /// The classic VGA text-mode layout: 8×8 glyphs in 10×10 cells on a 16×16
    /// grid, inset one pixel from the left edge of the cell.
    pub const VGA_8X8: Self = Self {
        cell_width: 10,
        cell_height: 10,
        glyph_width: 8,
        glyph_height: 8,
        margin_x: 1,
        margin_y: 0,
        columns: 16,
        rows: 16,
    };

    /// Start building a geometry from [`GlyphGeometry::VGA_8X8`].
    pub fn builder() -> GeometryBuilder {
        GeometryBuilder {
            geometry: Self::VGA_8X8,
        }
    }

    /// Width of a cell in pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of a cell in pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Width of the sampled glyph region in pixels (at most [`MAX_GLYPH_WIDTH`]).
    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    /// Height of the sampled glyph region in pixels.
    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    /// Horizontal offset from the cell origin to the glyph origin.
    pub fn margin_x(&self) -> u32 {
        self.margin_x
    }

    /// Vertical offset from the cell origin to the glyph origin.
    pub fn margin_y(&self) -> u32 {
        self.margin_y
    }

    /// Number of cells per atlas row.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cell rows in the atlas.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Top-left pixel of the cell reserved for `code`.
    pub fn cell_origin(&self, code: u8) -> (u32, u32) {
        let code = u32::from(code);
        (
            (code % self.columns) * self.cell_width,
            (code / self.columns) * self.cell_height,
        )
    }

    /// Top-left pixel of the glyph region of `code`, margins included.
    ///
    /// Both the renderer and the packer place glyphs here.
    pub fn glyph_origin(&self, code: u8) -> (u32, u32) {
        let (x, y) = self.cell_origin(code);
        (x + self.margin_x, y + self.margin_y)
    }

    /// Size in pixels of an atlas holding every cell.
    pub fn atlas_size(&self) -> (u32, u32) {
        (
            self.columns * self.cell_width,
            self.rows * self.cell_height,
        )
    }

    /// Number of ROM bytes used by one glyph (one byte per row).
    pub fn bytes_per_glyph(&self) -> usize {
        self.glyph_height as usize
    }

    /// Exact length of a ROM packed with this geometry.
    pub fn rom_len(&self) -> usize {
        GLYPH_COUNT * self.bytes_per_glyph()
    }

    fn validate(self) -> Result<Self, Error> {
        let dims = [
            ("cell width", self.cell_width),
            ("cell height", self.cell_height),
            ("glyph width", self.glyph_width),
            ("glyph height", self.glyph_height),
            ("columns", self.columns),
            ("rows", self.rows),
        ];
        if let Some((name, _)) = dims.iter().find(|(_, value)| *value == 0) {
            return Err(Error::invalid_geometry(format!("{name} must be non-zero")));
        }
        if self.columns.checked_mul(self.rows).map(|cells| cells as usize) != Some(GLYPH_COUNT) {
            return Err(Error::invalid_geometry(format!(
                "a {}x{} grid has room for {} cells, expected exactly {GLYPH_COUNT}",
                self.columns,
                self.rows,
                u64::from(self.columns) * u64::from(self.rows),
            )));
        }
        if self.glyph_width > MAX_GLYPH_WIDTH {
            return Err(Error::invalid_geometry(format!(
                "glyph width {} does not fit one byte per row (max {MAX_GLYPH_WIDTH})",
                self.glyph_width
            )));
        }
        if exceeds(self.margin_x, self.glyph_width, self.cell_width) {
            return Err(Error::invalid_geometry(format!(
                "margin x {} plus glyph width {} exceeds cell width {}",
                self.margin_x, self.glyph_width, self.cell_width
            )));
        }
        if exceeds(self.margin_y, self.glyph_height, self.cell_height) {
            return Err(Error::invalid_geometry(format!(
                "margin y {} plus glyph height {} exceeds cell height {}",
                self.margin_y, self.glyph_height, self.cell_height
            )));
        }
        if self.columns.checked_mul(self.cell_width).is_none()
            || self.rows.checked_mul(self.cell_height).is_none()
        {
            return Err(Error::invalid_geometry("atlas dimensions overflow"));
        }
        Ok(self)
    }
}

impl Default for GlyphGeometry {
    fn default() -> Self {
        Self::VGA_8X8
    }
}

/// Canonical text form, also used as the atlas geometry stamp:
/// `cell=10x10;glyph=8x8;margin=1,0;grid=16x16`.
impl fmt::Display for GlyphGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell={}x{};glyph={}x{};margin={},{};grid={}x{}",
            self.cell_width,
            self.cell_height,
            self.glyph_width,
            self.glyph_height,
            self.margin_x,
            self.margin_y,
            self.columns,
            self.rows
        )
    }
}

impl FromStr for GlyphGeometry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = Self::builder();
        let mut seen = [false; 4];
        for field in s.trim().split(';') {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| Error::invalid_geometry(format!("malformed field `{field}`")))?;
            let (index, sep) = match key.trim() {
                "cell" => (0, 'x'),
                "glyph" => (1, 'x'),
                "margin" => (2, ','),
                "grid" => (3, 'x'),
                other => {
                    return Err(Error::invalid_geometry(format!("unknown field `{other}`")));
                }
            };
            let (a, b) = parse_pair(value, sep)
                .ok_or_else(|| Error::invalid_geometry(format!("malformed field `{field}`")))?;
            builder = match index {
                0 => builder.cell(a, b),
                1 => builder.glyph(a, b),
                2 => builder.margin(a, b),
                _ => builder.grid(a, b),
            };
            seen[index] = true;
        }
        if seen.contains(&false) {
            return Err(Error::invalid_geometry(format!("incomplete geometry `{s}`")));
        }
        builder.build()
    }
}

fn exceeds(offset: u32, len: u32, limit: u32) -> bool {
    offset.checked_add(len).is_none_or(|end| end > limit)
}

fn parse_pair(value: &str, sep: char) -> Option<(u32, u32)> {
    let (a, b) = value.trim().split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Builder for [`GlyphGeometry`]; unset fields keep their
/// [`GlyphGeometry::VGA_8X8`] values.
#[derive(Clone, Copy, Debug)]
#[must_use = "call `build` to obtain a validated geometry"]
pub struct GeometryBuilder {
    geometry: GlyphGeometry,
}

impl GeometryBuilder {
    /// Set the cell size.
    pub fn cell(mut self, width: u32, height: u32) -> Self {
        self.geometry.cell_width = width;
        self.geometry.cell_height = height;
        self
    }

    /// Set the sampled glyph size.
    pub fn glyph(mut self, width: u32, height: u32) -> Self {
        self.geometry.glyph_width = width;
        self.geometry.glyph_height = height;
        self
    }

    /// Set the offset from the cell origin to the glyph origin.
    pub fn margin(mut self, x: u32, y: u32) -> Self {
        self.geometry.margin_x = x;
        self.geometry.margin_y = y;
        self
    }

    /// Set the number of columns and rows of the cell grid.
    pub fn grid(mut self, columns: u32, rows: u32) -> Self {
        self.geometry.columns = columns;
        self.geometry.rows = rows;
        self
    }

    /// Validate the geometry.
    ///
    /// Fails with [`ErrorKind::InvalidGeometry`](crate::ErrorKind::InvalidGeometry)
    /// when a dimension is zero, the grid does not hold exactly
    /// [`GLYPH_COUNT`] cells, the glyph is wider than [`MAX_GLYPH_WIDTH`], or
    /// the glyph region does not fit inside its cell.
    pub fn build(self) -> Result<GlyphGeometry, Error> {
        self.geometry.validate()
    }
}
