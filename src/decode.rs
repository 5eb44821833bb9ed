//! Decoding orchestration.
//!
//! Composes BOM detection, name validation, and the per-encoding codecs
//! into the standard's `decode` algorithm. The byte-to-codepoint work
//! itself is delegated to `encoding_rs`; this module only selects the
//! codec and applies the BOM and error-mode policy around it.

use std::str::FromStr;

use encoding_rs::Encoding;

use crate::bom;
use crate::error::EncodingError;
use crate::labels;

/// Policy for malformed byte sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Substitute U+FFFD per malformed unit and continue
    Replacement,
    /// Abort on the first malformed unit
    Fatal,
}

impl Default for ErrorMode {
    fn default() -> Self {
        ErrorMode::Replacement
    }
}

impl FromStr for ErrorMode {
    type Err = EncodingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "replacement" => Ok(ErrorMode::Replacement),
            "fatal" => Ok(ErrorMode::Fatal),
            _ => Err(EncodingError::InvalidErrorMode {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub error_mode: ErrorMode,
}

/// Decode `input` to text.
///
/// `name` must be a canonical encoding name (resolve labels with
/// [`labels::label_to_name`] first); anything else is rejected before a
/// single byte is inspected. A leading BOM overrides `name` and is
/// stripped, so BOM bytes never reach the codec or the output. Empty
/// input, after any BOM strip, decodes to the empty string regardless of
/// encoding or error mode.
pub fn decode(
    input: &[u8],
    name: &str,
    options: DecodeOptions,
) -> Result<String, EncodingError> {
    let fallback = labels::canonical(name).ok_or_else(|| EncodingError::UnsupportedName {
        name: name.to_string(),
    })?;

    let (effective, payload) = match bom::split_bom(input) {
        Some((bom_name, rest)) => (bom_name, rest),
        None => (fallback, input),
    };

    if payload.is_empty() {
        return Ok(String::new());
    }

    let codec = codec_for(effective).ok_or_else(|| EncodingError::UnsupportedName {
        name: effective.to_string(),
    })?;

    match options.error_mode {
        ErrorMode::Replacement => {
            let (text, _) = codec.decode_without_bom_handling(payload);
            Ok(text.into_owned())
        }
        ErrorMode::Fatal => codec
            .decode_without_bom_handling_and_without_replacement(payload)
            .map(|text| text.into_owned())
            .ok_or(EncodingError::Malformed {
                encoding: effective,
            }),
    }
}

/// Whether `input` decodes under `name` with no malformed units.
///
/// BOM handling matches [`decode`]. Errors only for a non-canonical `name`.
pub fn is_valid(input: &[u8], name: &str) -> Result<bool, EncodingError> {
    let options = DecodeOptions {
        error_mode: ErrorMode::Fatal,
    };
    match decode(input, name, options) {
        Ok(_) => Ok(true),
        Err(EncodingError::Malformed { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Fixed dispatch from a canonical name to its codec.
///
/// One arm per canonical name; the label table and this match must stay in
/// step, which the tests pin down via `Encoding::name` round-trips.
fn codec_for(name: &str) -> Option<&'static Encoding> {
    match name {
        "UTF-8" => Some(encoding_rs::UTF_8),
        "IBM866" => Some(encoding_rs::IBM866),
        "ISO-8859-2" => Some(encoding_rs::ISO_8859_2),
        "ISO-8859-3" => Some(encoding_rs::ISO_8859_3),
        "ISO-8859-4" => Some(encoding_rs::ISO_8859_4),
        "ISO-8859-5" => Some(encoding_rs::ISO_8859_5),
        "ISO-8859-6" => Some(encoding_rs::ISO_8859_6),
        "ISO-8859-7" => Some(encoding_rs::ISO_8859_7),
        "ISO-8859-8" => Some(encoding_rs::ISO_8859_8),
        "ISO-8859-8-I" => Some(encoding_rs::ISO_8859_8_I),
        "ISO-8859-10" => Some(encoding_rs::ISO_8859_10),
        "ISO-8859-13" => Some(encoding_rs::ISO_8859_13),
        "ISO-8859-14" => Some(encoding_rs::ISO_8859_14),
        "ISO-8859-15" => Some(encoding_rs::ISO_8859_15),
        "ISO-8859-16" => Some(encoding_rs::ISO_8859_16),
        "KOI8-R" => Some(encoding_rs::KOI8_R),
        "KOI8-U" => Some(encoding_rs::KOI8_U),
        "macintosh" => Some(encoding_rs::MACINTOSH),
        "windows-874" => Some(encoding_rs::WINDOWS_874),
        "windows-1250" => Some(encoding_rs::WINDOWS_1250),
        "windows-1251" => Some(encoding_rs::WINDOWS_1251),
        "windows-1252" => Some(encoding_rs::WINDOWS_1252),
        "windows-1253" => Some(encoding_rs::WINDOWS_1253),
        "windows-1254" => Some(encoding_rs::WINDOWS_1254),
        "windows-1255" => Some(encoding_rs::WINDOWS_1255),
        "windows-1256" => Some(encoding_rs::WINDOWS_1256),
        "windows-1257" => Some(encoding_rs::WINDOWS_1257),
        "windows-1258" => Some(encoding_rs::WINDOWS_1258),
        "x-mac-cyrillic" => Some(encoding_rs::X_MAC_CYRILLIC),
        "GBK" => Some(encoding_rs::GBK),
        "gb18030" => Some(encoding_rs::GB18030),
        "Big5" => Some(encoding_rs::BIG5),
        "EUC-JP" => Some(encoding_rs::EUC_JP),
        "ISO-2022-JP" => Some(encoding_rs::ISO_2022_JP),
        "Shift_JIS" => Some(encoding_rs::SHIFT_JIS),
        "EUC-KR" => Some(encoding_rs::EUC_KR),
        "replacement" => Some(encoding_rs::REPLACEMENT),
        "UTF-16BE" => Some(encoding_rs::UTF_16BE),
        "UTF-16LE" => Some(encoding_rs::UTF_16LE),
        "x-user-defined" => Some(encoding_rs::X_USER_DEFINED),
        _ => None,
    }
}
