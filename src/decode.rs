use crate::{
    alphabet::{Alphabet, Encoding},
    table::{Entry, Table, REPLACEMENT},
    utf8,
};

/// Decoded text together with the input positions that produced a replacement marker.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Decoded {
    text: String,
    substitutions: Vec<usize>,
}

impl Decoded {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Byte offsets into the input, in ascending order.
    pub fn substitutions(&self) -> &[usize] {
        &self.substitutions
    }

    pub fn is_lossless(&self) -> bool {
        self.substitutions.is_empty()
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Appends the decoded input to `output` and returns the substituted positions.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut String) -> Vec<usize> {
        let input = input.as_ref();
        let mut substitutions = Vec::new();
        match self.alphabet.encoding() {
            Encoding::Utf8 => utf8::decode_into(input, output, &mut substitutions),
            Encoding::SingleByte => {
                let table = self.alphabet.table();
                output.reserve(input.len());
                for (index, &byte) in input.iter().enumerate() {
                    match table.entry(byte) {
                        Entry::Char(character) => output.push(character),
                        Entry::Unrepresentable | Entry::Reserved => {
                            output.push(REPLACEMENT);
                            substitutions.push(index);
                        }
                    }
                }
            }
        }
        substitutions
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Decoded {
        let mut text = String::new();
        let substitutions = self.decode_into(input, &mut text);
        Decoded { text, substitutions }
    }
}

pub fn decode_byte(table: &Table, byte: u8) -> char {
    table.decode(byte)
}

#[cfg(test)]
mod tests {
    use super::Decoder;
    use crate::alphabet::by_id;

    fn decode(id: u32, input: &[u8]) -> (String, Vec<usize>) {
        let decoded = Decoder::new(by_id(id).unwrap()).decode(input);
        (decoded.text().to_string(), decoded.substitutions().to_vec())
    }

    #[test]
    fn decode_alphabets() {
        assert_eq!(decode(101, b"abcdefg\x80\xa5\xb8"), ("abcdefg€¥¸".to_string(), vec![]));
        assert_eq!(decode(103, b"abcdefg\x80\xa5\xb8"), ("abcdefg€¥¸".to_string(), vec![]));
        assert_eq!(decode(105, b"\xbf\xe0\xd8\xd2\xd5\xe2"), ("Привет".to_string(), vec![]));
        assert_eq!(decode(101, b""), (String::new(), vec![]));
    }

    #[test]
    fn decode_substitutions() {
        assert_eq!(decode(101, b"a\x84b\x87"), ("a\u{FFFD}b\u{FFFD}".to_string(), vec![1, 3]));
        assert_eq!(decode(108, b"\xe0\xa1\xbf"), ("א\u{FFFD}\u{FFFD}".to_string(), vec![1, 2]));
    }

    #[test]
    fn decode_passthrough() {
        assert_eq!(decode(111, "Grüße".as_bytes()), ("Grüße".to_string(), vec![]));
        assert_eq!(decode(111, b"abc\x80"), ("abc\u{FFFD}".to_string(), vec![3]));
    }

    #[test]
    fn decode_into() {
        let decoder = Decoder::new(by_id(110).unwrap());
        let mut output = String::from("> ");
        assert_eq!(decoder.decode_into(b"\xa8\x84", &mut output), vec![1]);
        assert_eq!(output, "> Ẁ\u{FFFD}");
    }

    #[test]
    fn decoded() {
        let decoded = Decoder::new(by_id(102).unwrap()).decode(b"\xa3\x87");
        assert!(!decoded.is_lossless());
        assert_eq!(decoded.into_text(), "Ł\u{FFFD}");
    }
}
