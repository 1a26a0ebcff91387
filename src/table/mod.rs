pub mod changes;
pub mod iso8859;

use std::{error, fmt};

/// The marker substituted for positions that have no mapping.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Stands for an undefined position in the [`iso8859`] data.
pub const UNDEFINED: char = REPLACEMENT;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    /// A single Unicode scalar value.
    Char(char),
    /// A glyph that has no single code point this table can carry.
    Unrepresentable,
    /// Left undefined by the ISO standard, yet drawn by RISC OS. The mapping has not been supplied.
    Reserved,
}

impl Entry {
    pub const fn char(&self) -> Option<char> {
        match *self {
            Entry::Char(character) => Some(character),
            Entry::Unrepresentable | Entry::Reserved => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TableError {
    Baseline { index: usize },
    ReplacementCharacter { index: usize },
}

impl error::Error for TableError {}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline { index } => write!(f, "Position {:#04x} does not match the ASCII baseline", index),
            Self::ReplacementCharacter { index } => write!(f, "Position {:#04x} maps to the replacement character", index),
        }
    }
}

/// A 256 entry translation table together with its reverse index.
///
/// The reverse index is sorted by code point. When a code point appears at more than one
/// position, the highest position is the one `encode` produces and the others are aliases.
#[derive(Debug)]
pub struct Table {
    decode: [Entry; 256],
    encode: [(char, u8); 256],
    len: usize,
}

impl Table {
    pub const fn new(entries: [Entry; 256]) -> Result<Self, TableError> {
        let mut encode = [('\0', 0u8); 256];
        let mut len = 0;

        let mut index = 0;
        while index < entries.len() {
            let character = match entries[index] {
                Entry::Char(character) => character,
                Entry::Unrepresentable | Entry::Reserved => {
                    if index < 0x80 {
                        return Err(TableError::Baseline { index });
                    }
                    index += 1;
                    continue;
                }
            };
            if index < 0x80 && character as u32 != index as u32 {
                return Err(TableError::Baseline { index });
            }
            if character as u32 == REPLACEMENT as u32 {
                return Err(TableError::ReplacementCharacter { index });
            }

            let mut position = 0;
            while position < len && (encode[position].0 as u32) < character as u32 {
                position += 1;
            }
            if position < len && encode[position].0 as u32 == character as u32 {
                encode[position].1 = index as u8;
            } else {
                let mut shift = len;
                while shift > position {
                    encode[shift] = encode[shift - 1];
                    shift -= 1;
                }
                encode[position] = (character, index as u8);
                len += 1;
            }
            index += 1;
        }

        Ok(Self { decode: entries, encode, len })
    }

    pub const fn entry(&self, byte: u8) -> Entry {
        self.decode[byte as usize]
    }

    pub const fn decode(&self, byte: u8) -> char {
        match self.decode[byte as usize] {
            Entry::Char(character) => character,
            Entry::Unrepresentable | Entry::Reserved => REPLACEMENT,
        }
    }

    /// The position `character` encodes to, if the table maps it.
    pub fn encode(&self, character: char) -> Option<u8> {
        self.encode[..self.len]
            .binary_search_by_key(&character, |&(character, _)| character)
            .ok()
            .map(|position| self.encode[position].1)
    }

    /// Returns `true` when `byte` decodes to a code point that encodes to another position.
    pub fn is_alias(&self, byte: u8) -> bool {
        match self.entry(byte) {
            Entry::Char(character) => self.encode(character) != Some(byte),
            Entry::Unrepresentable | Entry::Reserved => false,
        }
    }

    /// Positions whose entry equals `entry`, in ascending order.
    pub fn positions(&self, entry: Entry) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&byte| self.entry(byte) == entry)
    }

    pub fn aliases(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&byte| self.is_alias(byte))
    }

    /// Number of distinct code points the table can encode.
    pub const fn len(&self) -> usize {
        self.len
    }
}

/// ASCII below 0x80, C1 controls up to 0x9F, then `upper`. Undefined positions become reserved.
pub const fn from_iso8859(upper: &[char; 96]) -> [Entry; 256] {
    let mut entries = [Entry::Reserved; 256];
    let mut index = 0;
    while index < 0xA0 {
        entries[index] = match char::from_u32(index as u32) {
            Some(character) => Entry::Char(character),
            None => Entry::Reserved,
        };
        index += 1;
    }
    while index < 0x100 {
        let character = upper[index - 0xA0];
        if character as u32 != UNDEFINED as u32 {
            entries[index] = Entry::Char(character);
        }
        index += 1;
    }
    entries
}

/// ASCII below 0x80; nothing above stands on its own in UTF-8.
pub const fn passthrough() -> [Entry; 256] {
    let mut entries = [Entry::Unrepresentable; 256];
    let mut index = 0;
    while index < 0x80 {
        entries[index] = Entry::Char(index as u8 as char);
        index += 1;
    }
    entries
}

pub const fn with(mut entries: [Entry; 256], changes: &[(u8, Entry)]) -> [Entry; 256] {
    let mut index = 0;
    while index < changes.len() {
        let (position, entry) = changes[index];
        entries[position as usize] = entry;
        index += 1;
    }
    entries
}

pub const fn reserve(mut entries: [Entry; 256], positions: &[u8]) -> [Entry; 256] {
    let mut index = 0;
    while index < positions.len() {
        entries[positions[index] as usize] = Entry::Reserved;
        index += 1;
    }
    entries
}

pub const fn build(entries: [Entry; 256]) -> Table {
    match Table::new(entries) {
        Ok(table) => table,
        Err(_) => panic!("Could not build table"),
    }
}

#[cfg(test)]
mod tests {
    use super::{build, from_iso8859, passthrough, reserve, with, Entry, Table, TableError, REPLACEMENT};

    #[test]
    fn new() {
        let table = Table::new(from_iso8859(&super::iso8859::LATIN1)).unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table.decode(b'A'), 'A');
        assert_eq!(table.decode(0xE9), 'é');
        assert_eq!(table.encode('é'), Some(0xE9));
    }

    #[test]
    fn new_rejects_broken_baseline() {
        let mut entries = passthrough();
        entries[0x41] = Entry::Char('B');
        assert_eq!(Table::new(entries).err(), Some(TableError::Baseline { index: 0x41 }));
        entries[0x41] = Entry::Reserved;
        assert_eq!(Table::new(entries).err(), Some(TableError::Baseline { index: 0x41 }));
    }

    #[test]
    fn new_rejects_replacement_character() {
        let entries = with(passthrough(), &[(0xA0, Entry::Char(REPLACEMENT))]);
        assert_eq!(Table::new(entries).err(), Some(TableError::ReplacementCharacter { index: 0xA0 }));
    }

    #[test]
    fn undefined_positions_are_reserved() {
        let entries = from_iso8859(&super::iso8859::LATIN3);
        assert_eq!(entries[0xA5], Entry::Reserved);
        assert_eq!(entries[0xA6], Entry::Char('\u{0124}'));
    }

    #[test]
    fn reserve_positions() {
        let table = build(reserve(from_iso8859(&super::iso8859::LATIN1), &[0xA1, 0xFF]));
        assert_eq!(table.positions(Entry::Reserved).collect::<Vec<_>>(), vec![0xA1, 0xFF]);
        assert_eq!(table.decode(0xA1), REPLACEMENT);
        assert_eq!(table.encode('¡'), None);
    }

    #[test]
    fn duplicates_encode_to_highest_position() {
        let table = build(with(from_iso8859(&super::iso8859::LATIN1), &[(0x80, Entry::Char('é'))]));
        assert_eq!(table.decode(0x80), 'é');
        assert_eq!(table.encode('é'), Some(0xE9));
        assert!(table.is_alias(0x80));
        assert!(!table.is_alias(0xE9));
        assert_eq!(table.aliases().collect::<Vec<_>>(), vec![0x80]);
        assert_eq!(table.len(), 255);
    }

    #[test]
    fn passthrough_upper_half() {
        let table = build(passthrough());
        assert_eq!(table.len(), 128);
        assert_eq!(table.decode(0x7F), '\u{7F}');
        assert_eq!(table.decode(0x80), REPLACEMENT);
        assert_eq!(table.entry(0xFF), Entry::Unrepresentable);
    }
}
