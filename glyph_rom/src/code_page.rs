// Copyright 2026 the Glyph ROM Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpretation of 8-bit character codes.

use core::fmt;
use core::str::FromStr;

/// How an 8-bit code is turned into the character drawn in its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodePage {
    /// Code `c` is the Unicode scalar `U+00cc` (ISO 8859-1).
    #[default]
    Latin1,
    /// IBM PC code page 437, with the graphical glyphs for the control range.
    Cp437,
}

impl CodePage {
    /// The character drawn for `code`.
    pub fn to_char(self, code: u8) -> char {
        match self {
            Self::Latin1 => char::from(code),
            Self::Cp437 => match code {
                0x00 => '\0',
                0x01..=0x1F => CP437_LOW[usize::from(code) - 1],
                0x20..=0x7E => char::from(code),
                0x7F => '⌂',
                0x80..=0xFF => CP437_HIGH[usize::from(code) - 0x80],
            },
        }
    }

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Latin1 => "latin1",
            Self::Cp437 => "cp437",
        }
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown code page name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCodePage(String);

impl fmt::Display for UnknownCodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown code page `{}` (expected `latin1` or `cp437`)",
            self.0
        )
    }
}

impl core::error::Error for UnknownCodePage {}

impl FromStr for CodePage {
    type Err = UnknownCodePage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            "cp437" | "ibm437" => Ok(Self::Cp437),
            _ => Err(UnknownCodePage(s.to_owned())),
        }
    }
}

// 0x01..=0x1F
const CP437_LOW: [char; 31] = [
    '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼', //
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
];

// 0x80..=0xFF
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];
