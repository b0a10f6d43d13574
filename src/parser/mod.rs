//! Parsers for the two responses that describe a mailbox: the untagged data
//! of SELECT/EXAMINE and single LIST/LSUB/XLIST entries.
//!
//! Both are best-effort line classifiers, not grammar validators.

mod error;
mod list;
mod primitives;
mod select;

pub use error::Field;
pub use error::MalformedField;
pub use list::ListEntryParser;
pub use select::SelectResponseParser;

use crate::mailbox::MailboxState;

/// Parses a SELECT/EXAMINE response for `folder_name`, decoding the name as
/// modified UTF-7.
pub fn parse_select(folder_name: &str, response: &str) -> MailboxState {
    SelectResponseParser::new().parse(folder_name, response)
}

/// Parses a single listing line, decoding the name as modified UTF-7.
pub fn parse_list_entry(line: &str) -> Option<MailboxState> {
    ListEntryParser::new().parse(line)
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_free_functions_use_modified_utf7() {
        assert_eq!(parse_select("&Jjo-", "").name(), "☺");
        let state = assert_some!(parse_list_entry(r#"* LIST () "/" "&Jjo-""#));
        assert_eq!(state.name(), "☺");
    }
}
