//! Folder name decoding.
//!
//! Servers transmit mailbox names in modified UTF-7 (RFC 3501, section
//! 5.1.3). Both parsers hand every extracted name to a [`FolderNameDecoder`]
//! exactly once before storing it.

mod modified_utf7;

pub use modified_utf7::ModifiedUtf7;

/// Turns a mailbox name as sent on the wire into its display form.
///
/// Implementations must be total: input that cannot be decoded is returned
/// unchanged.
pub trait FolderNameDecoder {
    fn decode(&self, raw: &str) -> String;
}

/// Keeps names exactly as the server sent them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl FolderNameDecoder for Verbatim {
    fn decode(&self, raw: &str) -> String {
        raw.to_string()
    }
}

impl<F> FolderNameDecoder for F
where
    F: Fn(&str) -> String,
{
    fn decode(&self, raw: &str) -> String {
        self(raw)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_verbatim_keeps_encoded_name() {
        assert_eq!(Verbatim.decode("&Jjo-"), "&Jjo-");
    }

    #[rstest]
    fn test_closures_act_as_decoders() {
        let upper = |raw: &str| raw.to_uppercase();
        assert_eq!(upper.decode("inbox"), "INBOX");
    }
}
