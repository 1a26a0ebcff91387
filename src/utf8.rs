use crate::table::REPLACEMENT;

/// Lossy UTF-8 decoding that records the byte offset of every invalid sequence.
pub fn decode_into(input: &[u8], output: &mut String, substitutions: &mut Vec<usize>) {
    let mut offset = 0;
    for chunk in input.utf8_chunks() {
        output.push_str(chunk.valid());
        offset += chunk.valid().len();
        if !chunk.invalid().is_empty() {
            output.push(REPLACEMENT);
            substitutions.push(offset);
            offset += chunk.invalid().len();
        }
    }
}

#[cfg(test)]
mod tests {
    fn decode(input: &[u8]) -> (String, Vec<usize>) {
        let mut output = String::new();
        let mut substitutions = Vec::new();
        super::decode_into(input, &mut output, &mut substitutions);
        (output, substitutions)
    }

    #[test]
    fn decode_into() {
        assert_eq!(decode("Grüße €".as_bytes()), ("Grüße €".to_string(), vec![]));
        assert_eq!(decode(b""), (String::new(), vec![]));
        assert_eq!(decode(b"a\xffb"), ("a\u{FFFD}b".to_string(), vec![1]));
        assert_eq!(decode(b"\xe2\x82"), ("\u{FFFD}".to_string(), vec![0]));
        assert_eq!(decode(b"ab\xc3"), ("ab\u{FFFD}".to_string(), vec![2]));
        assert_eq!(decode(b"\x80\x80"), ("\u{FFFD}\u{FFFD}".to_string(), vec![0, 1]));
    }

    #[test]
    fn matches_from_utf8_lossy() {
        let input = b"RISC\xa0OS \xe2\x82\xac\xf0\x9f\xaf\x80 \xed\xa0\x80!";
        assert_eq!(decode(input).0, String::from_utf8_lossy(input));
    }
}
