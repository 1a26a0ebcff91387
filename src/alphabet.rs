use crate::table::{
    build,
    changes::{self, C1},
    from_iso8859, iso8859, passthrough, reserve, with, Entry, Table,
};
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// One byte per character, translated through the table.
    SingleByte,
    /// Alphabet 111. Bytes are UTF-8 and pass through unchanged.
    Utf8,
}

/// A RISC OS alphabet: its number, its name as given by the UK territory, and its table.
pub struct Alphabet {
    id: u32,
    name: &'static str,
    encoding: Encoding,
    table: Table,
}

impl Alphabet {
    const fn new(id: u32, name: &'static str, entries: [Entry; 256]) -> Self {
        Self {
            id,
            name,
            encoding: Encoding::SingleByte,
            table: build(entries),
        }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub const fn table(&self) -> &Table {
        &self.table
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet").field("id", &self.id).field("name", &self.name).finish()
    }
}

pub const UTF8_ID: u32 = 111;

/// Every alphabet, in alphabet number order. Alphabet 100 (BBC font) has no table.
pub static ALPHABETS: [Alphabet; 16] = [
    Alphabet::new(101, "latin1", with(from_iso8859(&iso8859::LATIN1), &C1)),
    Alphabet::new(102, "latin2", with(from_iso8859(&iso8859::LATIN2), &C1)),
    Alphabet::new(103, "latin3", with(with(from_iso8859(&iso8859::LATIN3), &C1), &changes::LATIN3)),
    Alphabet::new(104, "latin4", with(from_iso8859(&iso8859::LATIN4), &C1)),
    Alphabet::new(105, "cyrillic", with(from_iso8859(&iso8859::CYRILLIC), &C1)),
    Alphabet::new(106, "arabic", reserve(with(from_iso8859(&iso8859::ARABIC), &C1), &changes::ARABIC_RESERVED)),
    Alphabet::new(107, "greek", reserve(with(from_iso8859(&iso8859::GREEK), &C1), &changes::GREEK_RESERVED)),
    Alphabet::new(108, "hebrew", reserve(with(from_iso8859(&iso8859::HEBREW), &C1), &changes::HEBREW_RESERVED)),
    Alphabet::new(109, "latin5", with(from_iso8859(&iso8859::LATIN5), &C1)),
    Alphabet::new(110, "welsh", with(with(from_iso8859(&iso8859::LATIN1), &C1), &changes::WELSH)),
    // No hyphen, following the other alphabet names.
    Alphabet {
        id: UTF8_ID,
        name: "utf8",
        encoding: Encoding::Utf8,
        table: build(passthrough()),
    },
    Alphabet::new(112, "latin9", with(from_iso8859(&iso8859::LATIN9), &C1)),
    Alphabet::new(113, "latin6", with(from_iso8859(&iso8859::LATIN6), &C1)),
    Alphabet::new(114, "latin7", with(from_iso8859(&iso8859::LATIN7), &C1)),
    Alphabet::new(115, "latin8", with(from_iso8859(&iso8859::LATIN8), &C1)),
    Alphabet::new(116, "latin10", with(from_iso8859(&iso8859::LATIN10), &C1)),
];

pub fn by_id(id: u32) -> Option<&'static Alphabet> {
    ALPHABETS.iter().find(|alphabet| alphabet.id == id)
}
