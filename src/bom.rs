//! Byte-order-mark detection.

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Report the encoding named by a leading BOM, if any.
///
/// Only the UTF-8 and UTF-16 marks are recognized, longest prefix first.
/// `FF FE` reports UTF-16LE even when followed by `00 00` (the UTF-32LE
/// mark); the UTF-32BE mark `00 00 FE FF` is not recognized at all.
/// Inputs shorter than a candidate prefix never match it.
pub fn bom_encoding(input: &[u8]) -> Option<&'static str> {
    split_bom(input).map(|(name, _)| name)
}

/// Like [`bom_encoding`], but also yields the input with the matched mark
/// removed.
pub(crate) fn split_bom(input: &[u8]) -> Option<(&'static str, &[u8])> {
    if let Some(rest) = input.strip_prefix(&UTF8_BOM) {
        Some(("UTF-8", rest))
    } else if let Some(rest) = input.strip_prefix(&UTF16LE_BOM) {
        Some(("UTF-16LE", rest))
    } else if let Some(rest) = input.strip_prefix(&UTF16BE_BOM) {
        Some(("UTF-16BE", rest))
    } else {
        None
    }
}
