//! Mailbox state as announced by an IMAP server.
//!
//! [`parse_select`] turns the response to SELECT or EXAMINE into a
//! [`MailboxState`]; [`parse_list_entry`] does the same for one line of
//! LIST, LSUB or XLIST output. Mailbox names are decoded through a
//! [`FolderNameDecoder`], modified UTF-7 by default.

pub mod decoder;
pub mod mailbox;
pub mod parser;

pub use decoder::{FolderNameDecoder, ModifiedUtf7, Verbatim};
pub use mailbox::{MailboxState, MailboxStateBuilder, ModSeq, Uid, UidValidity};
pub use parser::{
    Field, ListEntryParser, MalformedField, SelectResponseParser, parse_list_entry, parse_select,
};
