use log::trace;
use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    sequence::{preceded, terminated},
};

use crate::{
    decoder::{FolderNameDecoder, ModifiedUtf7},
    mailbox::{MailboxState, MailboxStateBuilder},
    parser::primitives::{parenthesized, unquote},
};

const NO_DELIMITER: &str = "NIL";

/// Skips the response name up to the name attributes and returns them
/// without their parentheses.
fn name_attributes(input: &str) -> IResult<&str, &str> {
    preceded(take_until("("), terminated(parenthesized, char(' ')))(input)
}

/// Reads one line of LIST, LSUB or XLIST output, e.g.
/// `* LIST (\HasNoChildren) "/" "INBOX/Archive"`.
#[derive(Debug, Clone, Default)]
pub struct ListEntryParser<D = ModifiedUtf7> {
    decoder: D,
}

impl ListEntryParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: FolderNameDecoder> ListEntryParser<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Returns `None` when `line` is not a listing entry.
    pub fn parse(&self, line: &str) -> Option<MailboxState> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Ok((rest, attributes)) = name_attributes(line) else {
            trace!("{line:?} has no name attributes, not a listing entry");
            return None;
        };
        let Some((delimiter, name)) = rest.split_once(' ') else {
            trace!("{line:?} lacks delimiter or name, not a listing entry");
            return None;
        };

        let mut mailbox = MailboxStateBuilder::new(self.decoder.decode(&unquote(name)));
        mailbox.flags(attributes.split(' ').filter(|flag| !flag.is_empty()));
        if !delimiter.eq_ignore_ascii_case(NO_DELIMITER) {
            mailbox.hierarchy_delimiter(unquote(delimiter));
        }
        Some(mailbox.build())
    }
}
