use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};
use log::debug;

use crate::decoder::FolderNameDecoder;

const SHIFT: char = '&';
const UNSHIFT: char = '-';

/// Decoder for IMAP's modified UTF-7.
///
/// `&-` stands for a literal `&`; `&...-` wraps UTF-16BE code units in
/// base64 using `,` in place of `/` and without padding. A name with any
/// malformed shift sequence is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedUtf7;

impl FolderNameDecoder for ModifiedUtf7 {
    fn decode(&self, raw: &str) -> String {
        decode(raw).unwrap_or_else(|| {
            debug!("mailbox name {raw:?} is not valid modified UTF-7, keeping it as is");
            raw.to_string()
        })
    }
}

fn decode(raw: &str) -> Option<String> {
    let mut decoded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(shift) = rest.find(SHIFT) {
        decoded.push_str(&rest[..shift]);
        let shifted = &rest[shift + SHIFT.len_utf8()..];
        let unshift = shifted.find(UNSHIFT)?;
        let encoded = &shifted[..unshift];
        if encoded.is_empty() {
            decoded.push(SHIFT);
        } else {
            decoded.push_str(&decode_shifted(encoded)?);
        }
        rest = &shifted[unshift + UNSHIFT.len_utf8()..];
    }
    decoded.push_str(rest);
    Some(decoded)
}

fn decode_shifted(encoded: &str) -> Option<String> {
    let bytes = STANDARD_NO_PAD.decode(encoded.replace(',', "/")).ok()?;
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("INBOX", "INBOX")]
    #[case("Top.Sub", "Top.Sub")]
    #[case("&Jjo-!", "☺!")]
    #[case("~peter/mail/&U,BTFw-/&ZeVnLIqe-", "~peter/mail/台北/日本語")]
    #[case("Tom &- Jerry", "Tom & Jerry")]
    #[case("Entw&APw-rfe", "Entwürfe")]
    fn test_decodes_modified_utf7(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(ModifiedUtf7.decode(raw), expected);
    }

    #[rstest]
    #[case("Unterminated &Jjo")]
    #[case("Not base64 &!!!-")]
    #[case("Odd length &AP-")]
    fn test_malformed_names_are_returned_unchanged(#[case] raw: &str) {
        assert_eq!(ModifiedUtf7.decode(raw), raw);
    }
}
