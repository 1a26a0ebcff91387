//! Which positions of an alphabet lack a Unicode mapping.

use crate::{
    alphabet::{Alphabet, Encoding},
    registry::PREFIX,
    table::Entry,
};
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Unrepresentable,
    Reserved,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Gap {
    pub position: u8,
    pub kind: GapKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Alias {
    pub position: u8,
    pub canonical: u8,
    pub character: char,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Report {
    pub alphabet: u32,
    pub key: String,
    pub gaps: Vec<Gap>,
    pub aliases: Vec<Alias>,
}

/// Positions from `first` upwards with no mapping, plus the decode only aliases.
///
/// Returns `None` for the UTF-8 passthrough, which has no table to check.
pub fn report(alphabet: &Alphabet, first: u8) -> Option<Report> {
    if alphabet.encoding() == Encoding::Utf8 {
        return None;
    }
    let table = alphabet.table();
    let gaps = (first..=u8::MAX)
        .filter_map(|position| {
            let kind = match table.entry(position) {
                Entry::Char(_) => return None,
                Entry::Unrepresentable => GapKind::Unrepresentable,
                Entry::Reserved => GapKind::Reserved,
            };
            Some(Gap { position, kind })
        })
        .collect();
    let aliases = table
        .aliases()
        .filter_map(|position| {
            let character = table.entry(position).char()?;
            let canonical = table.encode(character)?;
            Some(Alias {
                position,
                canonical,
                character,
            })
        })
        .collect();
    Some(Report {
        alphabet: alphabet.id(),
        key: format!("{}-{}", PREFIX, alphabet.name()),
        gaps,
        aliases,
    })
}
