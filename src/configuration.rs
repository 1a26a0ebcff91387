use std::env;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    fn parse(value: &str) -> Result<Self, ()> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: Option<String>,
    format: Format,
    first: u8,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    /// Reads `ALPHABET` (a registry key, all alphabets when unset), `FORMAT` (`text` or `json`)
    /// and `FIRST` (the first position to check, in hex).
    pub fn new() -> Result<Self, String> {
        let alphabet = var("ALPHABET", None).ok();
        let format = var_map("FORMAT", Format::parse, Some(Format::Text))?;
        let first = var_map("FIRST", |first| u8::from_str_radix(first.trim_start_matches("0x"), 16), Some(0x20))?;
        Ok(Self { alphabet, format, first })
    }

    pub fn alphabet(&self) -> Option<&str> {
        self.alphabet.as_deref()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn first(&self) -> u8 {
        self.first
    }
}

#[cfg(test)]
mod tests {
    use super::{var_map, Format};

    #[test]
    fn format() {
        assert_eq!(Format::parse("JSON"), Ok(Format::Json));
        assert_eq!(Format::parse("text"), Ok(Format::Text));
        assert_eq!(Format::parse("yaml"), Err(()));
    }

    #[test]
    fn var_map_default() {
        let value = var_map("RISCOS_ALPHABETS_UNSET_VARIABLE", |value| value.parse::<u8>(), Some(7));
        assert_eq!(value, Ok(7));
        let missing = var_map("RISCOS_ALPHABETS_UNSET_VARIABLE", |value| value.parse::<u8>(), None);
        assert_eq!(missing, Err("Missing RISCOS_ALPHABETS_UNSET_VARIABLE".to_string()));
    }
}
