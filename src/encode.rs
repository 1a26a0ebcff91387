use crate::{
    alphabet::{Alphabet, Encoding},
    error::Error,
    table::Table,
};

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Writes the encoded input to the start of `output` and returns its length.
    ///
    /// `output` is left untouched when the input cannot be encoded or does not fit.
    pub fn encode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        match self.alphabet.encoding() {
            Encoding::Utf8 => {
                let bytes = input.as_bytes();
                output.get_mut(..bytes.len()).ok_or(Error::BufferTooSmall)?.copy_from_slice(bytes);
                Ok(bytes.len())
            }
            Encoding::SingleByte => {
                let bytes = self.encode(input)?;
                output.get_mut(..bytes.len()).ok_or(Error::BufferTooSmall)?.copy_from_slice(&bytes);
                Ok(bytes.len())
            }
        }
    }

    pub fn encode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        match self.alphabet.encoding() {
            Encoding::Utf8 => Ok(input.as_bytes().to_vec()),
            Encoding::SingleByte => {
                let table = self.alphabet.table();
                input
                    .chars()
                    .enumerate()
                    .map(|(index, character)| table.encode(character).ok_or(Error::Unencodable { character, index }))
                    .collect()
            }
        }
    }
}

pub fn encode_codepoint(table: &Table, character: char) -> Result<u8, Error> {
    table.encode(character).ok_or(Error::Unencodable { character, index: 0 })
}

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::{alphabet::by_id, Error};

    fn encode(id: u32, input: &str) -> Result<Vec<u8>, Error> {
        Encoder::new(by_id(id).unwrap()).encode(input)
    }

    #[test]
    fn encode_alphabets() {
        assert_eq!(encode(101, "abcdefg€¥¸"), Ok(b"abcdefg\x80\xa5\xb8".to_vec()));
        assert_eq!(encode(102, "Zażółć"), Ok(b"Za\xbf\xf3\xb3\xe6".to_vec()));
        assert_eq!(encode(105, "Привет"), Ok(b"\xbf\xe0\xd8\xd2\xd5\xe2".to_vec()));
        assert_eq!(encode(107, "Ελλάδα"), Ok(b"\xc5\xeb\xeb\xdc\xe4\xe1".to_vec()));
        assert_eq!(encode(101, "…—™"), Ok(b"\x8c\x98\x8d".to_vec()));
        assert_eq!(encode(101, ""), Ok(vec![]));
    }

    #[test]
    fn encode_unencodable() {
        assert_eq!(encode(101, "ab\u{FFFD}"), Err(Error::Unencodable { character: '\u{FFFD}', index: 2 }));
        assert_eq!(encode(101, "Пa"), Err(Error::Unencodable { character: 'П', index: 0 }));
        assert_eq!(encode(106, "€ж€"), Err(Error::Unencodable { character: 'ж', index: 1 }));
        assert_eq!(encode(112, "€ and ¤"), Err(Error::Unencodable { character: '¤', index: 6 }));
    }

    #[test]
    fn encode_passthrough() {
        assert_eq!(encode(111, "Grüße \u{1FBC0}"), Ok("Grüße \u{1FBC0}".as_bytes().to_vec()));
    }

    #[test]
    fn encode_into() {
        let encoder = Encoder::new(by_id(113).unwrap());
        let mut output = [0u8; 4];
        assert_eq!(encoder.encode_into("ŋa", &mut output), Ok(2));
        assert_eq!(&output[..2], b"\xbfa");
        assert_eq!(encoder.encode_into("abcde", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(encoder.encode_into("aж", &mut output), Err(Error::Unencodable { character: 'ж', index: 1 }));
    }

    #[test]
    fn encode_into_leaves_output_untouched_on_error() {
        let encoder = Encoder::new(by_id(101).unwrap());
        let mut output = [0xEEu8; 8];
        assert_eq!(encoder.encode_into("abcПd", &mut output), Err(Error::Unencodable { character: 'П', index: 3 }));
        assert_eq!(output, [0xEE; 8]);
        assert_eq!(encoder.encode_into("abcdefghij", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(output, [0xEE; 8]);
    }

    #[test]
    fn encode_codepoint() {
        let table = by_id(101).unwrap().table();
        assert_eq!(super::encode_codepoint(table, '€'), Ok(0x80));
        assert_eq!(super::encode_codepoint(table, 'П'), Err(Error::Unencodable { character: 'П', index: 0 }));
    }

    #[test]
    fn encode_into_passthrough() {
        let encoder = Encoder::new(by_id(111).unwrap());
        let mut output = [0u8; 4];
        assert_eq!(encoder.encode_into("é€", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(encoder.encode_into("éa", &mut output), Ok(3));
        assert_eq!(&output[..3], "éa".as_bytes());
    }
}
