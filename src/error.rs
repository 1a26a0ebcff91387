use std::{error, fmt};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    UnknownAlphabet { key: String },
    Unencodable { character: char, index: usize },
    BufferTooSmall,
}

impl Error {
    pub fn unknown_alphabet(key: impl Into<String>) -> Self {
        Self::UnknownAlphabet { key: key.into() }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlphabet { key } => write!(f, "Unknown alphabet '{}'", key),
            Self::Unencodable { character, index } => {
                write!(f, "Cannot encode character '{}' (U+{:04X}) at index {}", character, *character as u32, index)
            }
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(Error::unknown_alphabet("riscos-klingon").to_string(), "Unknown alphabet 'riscos-klingon'");
        assert_eq!(
            Error::Unencodable { character: 'ж', index: 3 }.to_string(),
            "Cannot encode character 'ж' (U+0436) at index 3"
        );
        assert_eq!(Error::BufferTooSmall.to_string(), "Output buffer too small");
    }
}
