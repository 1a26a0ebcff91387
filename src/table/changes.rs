//! Positions where the RISC OS alphabets differ from the ISO 8859 part they are based on.

use super::Entry::{self, Char, Unrepresentable};

/// Glyphs RISC OS places in the C1 region of every 8-bit alphabet.
#[rustfmt::skip]
pub const C1: [(u8, Entry); 32] = [
    (0x80, Char('\u{20AC}')), // euro
    (0x81, Char('\u{0174}')), // W circumflex
    (0x82, Char('\u{0175}')), // w circumflex
    (0x83, Char('\u{25F0}')), // resize icon
    (0x84, Unrepresentable),  // close icon, U+1FBC0
    (0x85, Char('\u{0176}')), // Y circumflex
    (0x86, Char('\u{0177}')), // y circumflex
    (0x87, Unrepresentable),  // drawn as "87", no character
    (0x88, Char('\u{21E6}')), // left
    (0x89, Char('\u{21E8}')), // right
    (0x8A, Char('\u{21E9}')), // down
    (0x8B, Char('\u{21E7}')), // up
    (0x8C, Char('\u{2026}')), // ellipsis
    (0x8D, Char('\u{2122}')), // trade mark
    (0x8E, Char('\u{2030}')), // per mille
    (0x8F, Char('\u{2022}')), // bullet
    (0x90, Char('\u{2018}')), // left single quote
    (0x91, Char('\u{2019}')), // right single quote
    (0x92, Char('\u{2039}')), // left single guillemet
    (0x93, Char('\u{203A}')), // right single guillemet
    (0x94, Char('\u{201C}')), // left double quote
    (0x95, Char('\u{201D}')), // right double quote
    (0x96, Char('\u{201E}')), // low double quote
    (0x97, Char('\u{2013}')), // en dash
    (0x98, Char('\u{2014}')), // em dash
    (0x99, Char('\u{2212}')), // minus
    (0x9A, Char('\u{0152}')), // OE ligature
    (0x9B, Char('\u{0153}')), // oe ligature
    (0x9C, Char('\u{2020}')), // dagger
    (0x9D, Char('\u{2021}')), // double dagger
    (0x9E, Char('\u{FB01}')), // fi ligature
    (0x9F, Char('\u{FB02}')), // fl ligature
];

/// ISO-IR-182 on top of ISO 8859-1.
#[rustfmt::skip]
pub const WELSH: [(u8, Entry); 13] = [
    (0xA8, Char('\u{1E80}')), // W grave
    (0xAA, Char('\u{1E82}')), // W acute
    (0xAC, Char('\u{1EF2}')), // Y grave
    (0xAF, Char('\u{0178}')), // Y diaeresis
    (0xB8, Char('\u{1E81}')), // w grave
    (0xBA, Char('\u{1E83}')), // w acute
    (0xBC, Char('\u{1EF3}')), // y grave
    (0xBD, Char('\u{1E84}')), // W diaeresis
    (0xBE, Char('\u{1E85}')), // w diaeresis
    (0xD0, Char('\u{0174}')), // W circumflex
    (0xDE, Char('\u{0176}')), // Y circumflex
    (0xF1, Char('\u{0175}')), // w circumflex
    (0xFE, Char('\u{0177}')), // y circumflex
];

/// Positions ISO 8859-3 leaves undefined, filled from ECMA-94.
#[rustfmt::skip]
pub const LATIN3: [(u8, Entry); 7] = [
    (0xA5, Char('\u{00A5}')), // yen
    (0xAE, Char('\u{00AE}')), // registered
    (0xBE, Char('\u{00BE}')), // three quarters
    (0xC3, Char('\u{00C3}')), // A tilde
    (0xD0, Char('\u{00D0}')), // Eth
    (0xE3, Char('\u{00E3}')), // a tilde
    (0xF0, Char('\u{00F0}')), // eth
];

// The positions below carry glyphs on RISC OS that are not mapped yet (ECMA-114, ECMA-118, ECMA-121).

#[rustfmt::skip]
pub const ARABIC_RESERVED: [u8; 45] = [
    0xA1, 0xA2, 0xA3, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAE, 0xAF,
    0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xBC, 0xBD, 0xBE,
    0xC0, 0xDB, 0xDC, 0xDD, 0xDE, 0xDF,
    0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xFF,
];

pub const GREEK_RESERVED: [u8; 4] = [0xAA, 0xAE, 0xD2, 0xFF];

#[rustfmt::skip]
pub const HEBREW_RESERVED: [u8; 36] = [
    0xA1,
    0xBF, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF,
    0xD0, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE,
    0xFB, 0xFC, 0xFF,
];
