//! Label resolution, BOM detection, and decoding per the WHATWG Encoding
//! Standard.
//!
//! The crate answers three questions and composes them into a decoder:
//! which canonical encoding a loose label refers to ([`label_to_name`]),
//! whether a byte stream carries a BOM override ([`bom_encoding`]), and
//! what text a byte sequence decodes to under a caller-chosen
//! malformed-input policy ([`decode`]). The per-encoding conversion
//! tables come from `encoding_rs`.
//!
//! ```
//! use whatwg_encoding::{decode, label_to_name, DecodeOptions};
//!
//! let name = label_to_name(" LATIN1 ").unwrap();
//! assert_eq!(name, "windows-1252");
//!
//! let text = decode(&[0x80, 0x95], name, DecodeOptions::default()).unwrap();
//! assert_eq!(text, "\u{20AC}\u{2022}");
//! ```

pub mod bom;
pub mod decode;
pub mod error;
pub mod labels;

pub use bom::bom_encoding;
pub use decode::{DecodeOptions, ErrorMode, decode, is_valid};
pub use error::EncodingError;
pub use labels::{is_supported, label_to_name, labels_for, names};
