//! Translation tables between the RISC OS 8-bit alphabets and Unicode.
//!
//! Alphabets are found by `riscos-alphabet-<number>` or `riscos-<name>` keys:
//!
//! ```
//! let decoded = riscos_alphabets::decode(b"\x8c \x80", "riscos-latin1").unwrap();
//! assert_eq!(decoded.text(), "… €");
//! assert_eq!(riscos_alphabets::encode("… €", "riscos-alphabet-101").unwrap(), b"\x8c \x80");
//! ```

pub mod alphabet;
pub mod coverage;
pub mod decode;
pub mod encode;
pub mod error;
pub mod registry;
pub mod table;
pub mod utf8;

pub use self::{
    alphabet::{Alphabet, Encoding, ALPHABETS},
    decode::{decode_byte, Decoded, Decoder},
    encode::{encode_codepoint, Encoder},
    error::Error,
    registry::{codec, decode, encode, lookup, lookup_table, register_all, Codec, Registry, PREFIX},
    table::{Entry, Table, TableError, REPLACEMENT},
};
