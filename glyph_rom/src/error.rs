// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use crate::GlyphGeometry;

type BoxedSource = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error type shared by every stage of the atlas and ROM pipeline.
///
/// Carries a non-exhaustive [`ErrorKind`], a human readable description of
/// what was being attempted (usually naming the offending file), and the
/// underlying cause when one exists.
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// What failed, phrased for an end user.
    message: String,

    /// The lower level error that caused this one, if any.
    source: Option<BoxedSource>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The description of what failed, without the underlying cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(kind: ErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidGeometry, reason.into())
    }

    pub(crate) fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, format!("failed to {action} `{}`", path.display()))
            .with_source(err)
    }

    pub(crate) fn font(origin: &str, err: impl Into<BoxedSource>) -> Self {
        Self::new(ErrorKind::Font, format!("unable to parse font {origin}")).with_source(err)
    }

    pub(crate) fn font_unsupported(origin: &str) -> Self {
        Self::new(
            ErrorKind::Font,
            format!("font {origin} parsed but cannot be rasterized"),
        )
    }

    pub(crate) fn image_decode(err: impl Into<BoxedSource>) -> Self {
        Self::new(ErrorKind::ImageDecode, "unable to decode atlas image".into()).with_source(err)
    }

    pub(crate) fn image_encode(err: png::EncodingError) -> Self {
        Self::new(ErrorKind::ImageEncode, "unable to encode atlas image".into()).with_source(err)
    }

    pub(crate) fn atlas_too_small(actual: (u32, u32), required: (u32, u32)) -> Self {
        Self::new(
            ErrorKind::AtlasTooSmall,
            format!(
                "atlas is {}x{} pixels but the geometry needs at least {}x{}",
                actual.0, actual.1, required.0, required.1
            ),
        )
    }

    pub(crate) fn geometry_mismatch(stamped: &GlyphGeometry, requested: &GlyphGeometry) -> Self {
        Self::new(
            ErrorKind::GeometryMismatch,
            format!("atlas was rendered with `{stamped}` but packing was requested with `{requested}`"),
        )
    }

    pub(crate) fn rom_size(actual: usize, expected: usize) -> Self {
        Self::new(
            ErrorKind::RomSize,
            format!("ROM is {actual} bytes but the geometry needs exactly {expected}"),
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A [`GlyphGeometry`] violated one of its invariants.
    InvalidGeometry,

    /// A file could not be read or written.
    Io,

    /// Font data could not be parsed.
    Font,

    /// The atlas artifact is not a decodable image.
    ImageDecode,

    /// The atlas could not be encoded as PNG.
    ImageEncode,

    /// The atlas does not cover all 256 cells of the requested geometry.
    AtlasTooSmall,

    /// The atlas carries a geometry stamp that differs from the requested geometry.
    GeometryMismatch,

    /// A ROM blob does not have the length the geometry requires.
    RomSize,
}
