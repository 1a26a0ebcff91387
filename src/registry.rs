use crate::{
    alphabet::{self, Alphabet, ALPHABETS},
    decode::{Decoded, Decoder},
    encode::Encoder,
    error::Error,
    table::Table,
};
use regex::Regex;
use std::{collections::HashMap, sync::OnceLock};

pub const PREFIX: &str = "riscos";

/// Maps every `riscos-alphabet-<number>` and `riscos-<name>` key to its alphabet.
#[derive(Debug)]
pub struct Registry {
    keys: HashMap<String, &'static Alphabet>,
    numeric: Regex,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    fn new() -> Self {
        let mut keys = HashMap::with_capacity(ALPHABETS.len() * 2);
        for alphabet in &ALPHABETS {
            keys.insert(format!("{}-alphabet-{}", PREFIX, alphabet.id()), alphabet);
            keys.insert(format!("{}-{}", PREFIX, alphabet.name()), alphabet);
        }
        let numeric = Regex::new(&format!("^{}-alphabet-([0-9]+)$", PREFIX)).expect("alphabet key pattern");
        Self { keys, numeric }
    }

    /// Resolves `key` after lowercasing it. Numeric keys with leading zeros resolve too.
    pub fn lookup(&self, key: &str) -> Result<&'static Alphabet, Error> {
        let normalized = key.to_lowercase();
        if let Some(&alphabet) = self.keys.get(&normalized) {
            return Ok(alphabet);
        }
        self.numeric
            .captures(&normalized)
            .and_then(|captures| captures[1].parse().ok())
            .and_then(alphabet::by_id)
            .ok_or_else(|| Error::unknown_alphabet(key))
    }

    pub fn lookup_table(&self, key: &str) -> Result<&'static Table, Error> {
        self.lookup(key).map(Alphabet::table)
    }

    pub fn codec(&self, key: &str) -> Result<Codec, Error> {
        self.lookup(key).map(Codec::new)
    }

    /// Every registered key, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn alphabets(&self) -> &'static [Alphabet] {
        &ALPHABETS
    }
}

/// Builds the process wide registry on first call. Later calls return the same instance.
pub fn register_all() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// The encode and decode pair for one alphabet.
#[derive(Clone, Copy, Debug)]
pub struct Codec {
    alphabet: &'static Alphabet,
}

impl Codec {
    pub const fn new(alphabet: &'static Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Decoded {
        Decoder::new(self.alphabet).decode(input)
    }

    pub fn encode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        Encoder::new(self.alphabet).encode(input)
    }
}

pub fn lookup(key: &str) -> Result<&'static Alphabet, Error> {
    register_all().lookup(key)
}

pub fn lookup_table(key: &str) -> Result<&'static Table, Error> {
    register_all().lookup_table(key)
}

pub fn codec(key: &str) -> Result<Codec, Error> {
    register_all().codec(key)
}

pub fn decode(input: impl AsRef<[u8]>, key: &str) -> Result<Decoded, Error> {
    Ok(codec(key)?.decode(input))
}

pub fn encode(input: impl AsRef<str>, key: &str) -> Result<Vec<u8>, Error> {
    codec(key)?.encode(input)
}

#[cfg(test)]
mod tests {
    use super::{codec, decode, encode, lookup, lookup_table, register_all};
    use crate::{
        alphabet::{Encoding, ALPHABETS},
        table::REPLACEMENT,
        Error,
    };
    use std::{ptr, thread};

    #[test]
    fn register_all_is_idempotent() {
        assert!(ptr::eq(register_all(), register_all()));
        let handles: Vec<_> = (0..4).map(|_| thread::spawn(|| register_all() as *const _ as usize)).collect();
        let addresses: Vec<usize> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
        assert!(addresses.iter().all(|&address| address == register_all() as *const _ as usize));
    }

    #[test]
    fn keys() {
        let keys = register_all().keys();
        assert_eq!(keys.len(), 32);
        assert!(keys.contains(&"riscos-alphabet-101"));
        assert!(keys.contains(&"riscos-latin1"));
        assert!(keys.contains(&"riscos-alphabet-111"));
        assert!(keys.contains(&"riscos-utf8"));
        assert!(keys.contains(&"riscos-latin10"));
    }

    #[test]
    fn lookup_by_number_and_name() {
        for alphabet in &ALPHABETS {
            let by_number = lookup_table(&format!("riscos-alphabet-{}", alphabet.id())).unwrap();
            let by_name = lookup_table(&format!("riscos-{}", alphabet.name())).unwrap();
            assert!(ptr::eq(by_number, by_name));
            assert!(ptr::eq(by_number, alphabet.table()));
        }
    }

    #[test]
    fn lookup_normalizes() {
        assert_eq!(lookup("RISCOS-Latin2").unwrap().id(), 102);
        assert_eq!(lookup("riscos-alphabet-0107").unwrap().name(), "greek");
        assert_eq!(lookup("RISCOS-ALPHABET-111").unwrap().encoding(), Encoding::Utf8);
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(lookup("riscos-alphabet-9999").unwrap_err(), Error::unknown_alphabet("riscos-alphabet-9999"));
        assert_eq!(lookup("riscos-alphabet-100").unwrap_err(), Error::unknown_alphabet("riscos-alphabet-100"));
        assert_eq!(
            lookup("riscos-alphabet-99999999999999999999").unwrap_err(),
            Error::unknown_alphabet("riscos-alphabet-99999999999999999999")
        );
        assert_eq!(lookup("riscos-alphabet-").unwrap_err(), Error::unknown_alphabet("riscos-alphabet-"));
        assert_eq!(lookup("latin1").unwrap_err(), Error::unknown_alphabet("latin1"));
        assert_eq!(lookup_table("riscos-Klingon").unwrap_err(), Error::unknown_alphabet("riscos-Klingon"));
        assert!(codec("utf-8").is_err());
    }

    #[test]
    fn decode_then_encode() {
        let input = b"abcdefg\x80\xa5\xb8";
        let decoded = decode(input, "riscos-latin3").unwrap();
        assert_eq!(decoded.text(), "abcdefg€¥¸");
        assert!(decoded.is_lossless());
        assert_eq!(encode(decoded.text(), "riscos-latin1"), Ok(input.to_vec()));
    }

    #[test]
    fn decode_never_fails_on_content() {
        let input: Vec<u8> = (0..=u8::MAX).collect();
        for alphabet in &ALPHABETS {
            let decoded = decode(&input, &format!("riscos-alphabet-{}", alphabet.id())).unwrap();
            let table = alphabet.table();
            if alphabet.encoding() == Encoding::SingleByte {
                assert_eq!(decoded.text().chars().count(), 256);
                let expected: Vec<usize> = (0..=u8::MAX).filter(|&byte| table.decode(byte) == REPLACEMENT).map(usize::from).collect();
                assert_eq!(decoded.substitutions(), &expected[..]);
            }
        }
        assert_eq!(decode(b"x", "riscos-nope").unwrap_err(), Error::unknown_alphabet("riscos-nope"));
    }

    #[test]
    fn encode_is_fail_fast() {
        assert_eq!(
            encode("Cymru ẁŵ ж", "riscos-welsh"),
            Err(Error::Unencodable { character: 'ж', index: 9 })
        );
        assert_eq!(encode("x", "riscos-alphabet-9999"), Err(Error::unknown_alphabet("riscos-alphabet-9999")));
    }

    #[test]
    fn passthrough_is_utf8() {
        let text = "Zürich → 東京 \u{1FBC0}";
        assert_eq!(encode(text, "riscos-utf8"), Ok(text.as_bytes().to_vec()));
        assert_eq!(decode(text.as_bytes(), "riscos-alphabet-111").unwrap().text(), text);
        let invalid = b"ok\xc0\xafok";
        assert_eq!(decode(invalid, "riscos-utf8").unwrap().text(), String::from_utf8_lossy(invalid));
    }

    #[test]
    fn codec_pair() {
        let codec = codec("riscos-greek").unwrap();
        assert_eq!(codec.alphabet().id(), 107);
        let bytes = codec.encode("Ελλάδα").unwrap();
        assert_eq!(codec.decode(&bytes).into_text(), "Ελλάδα");
    }
}
