use log::{debug, trace};

use crate::{
    decoder::{FolderNameDecoder, ModifiedUtf7},
    mailbox::{MailboxState, MailboxStateBuilder, ModSeq, Uid, UidValidity},
    parser::{
        error::{Field, MalformedField},
        primitives::{flag_list, number, response_code_value},
    },
};

const FLAGS: &str = "* FLAGS ";
const NOMODSEQ: &str = "* OK [NOMODSEQ";
const HIGHESTMODSEQ: &str = "* OK [HIGHESTMODSEQ ";
const PERMANENTFLAGS: &str = "* OK [PERMANENTFLAGS ";
const UIDNEXT: &str = "* OK [UIDNEXT ";
const UIDVALIDITY: &str = "* OK [UIDVALIDITY ";
const UNSEEN: &str = "* OK [UNSEEN ";
const OK: &str = "OK ";
const READ_ONLY: &str = "[READ-ONLY]";
const READ_WRITE: &str = "[READ-WRITE]";
const VANISHED: &str = "* VANISHED ";
const VANISHED_EARLIER: &str = "(EARLIER) ";
const FETCH: &str = " FETCH ";
const EXISTS: &str = " EXISTS";
const RECENT: &str = " RECENT";

/// One recognized line of a SELECT/EXAMINE response. Values that failed to
/// parse are kept as `None` so the caller decides how to treat them.
#[derive(Debug, PartialEq)]
enum SelectLine<'a> {
    Flags(Option<Vec<&'a str>>),
    NoModSeq,
    HighestModSeq(Option<u64>),
    PermanentFlags(Option<Vec<&'a str>>),
    UidNext(Option<u32>),
    UidValidity(Option<u32>),
    Unseen(Option<u32>),
    ReadOnly(bool),
    Vanished(&'a str),
    Fetch(&'a str),
    Exists(Option<u32>),
    Recent(Option<u32>),
}

fn code_number<T: std::str::FromStr>(rest: &str) -> Option<T> {
    response_code_value(rest).and_then(number)
}

fn counter(rest: &str) -> Option<u32> {
    rest.rsplit(' ').next().and_then(number)
}

/// Access mode from `<tag> OK [READ-ONLY]` or `<tag> OK [READ-WRITE]`.
fn access_mode(line: &str) -> Option<bool> {
    let (_, status) = line.split_once(' ')?;
    let code = status.strip_prefix(OK)?;
    if code.starts_with(READ_ONLY) {
        Some(true)
    } else if code.starts_with(READ_WRITE) {
        Some(false)
    } else {
        None
    }
}

fn classify(line: &str) -> Option<SelectLine<'_>> {
    if let Some(rest) = line.strip_prefix(FLAGS) {
        return Some(SelectLine::Flags(flag_list(rest)));
    }
    if line.starts_with(NOMODSEQ) {
        return Some(SelectLine::NoModSeq);
    }
    if let Some(rest) = line.strip_prefix(HIGHESTMODSEQ) {
        return Some(SelectLine::HighestModSeq(code_number(rest)));
    }
    if let Some(rest) = line.strip_prefix(PERMANENTFLAGS) {
        return Some(SelectLine::PermanentFlags(flag_list(rest)));
    }
    if let Some(rest) = line.strip_prefix(UIDNEXT) {
        return Some(SelectLine::UidNext(code_number(rest)));
    }
    if let Some(rest) = line.strip_prefix(UIDVALIDITY) {
        return Some(SelectLine::UidValidity(code_number(rest)));
    }
    if let Some(rest) = line.strip_prefix(UNSEEN) {
        return Some(SelectLine::Unseen(code_number(rest)));
    }
    if let Some(read_only) = access_mode(line) {
        return Some(SelectLine::ReadOnly(read_only));
    }
    if let Some(rest) = line.strip_prefix(VANISHED) {
        let vanished = rest.strip_prefix(VANISHED_EARLIER).unwrap_or(rest);
        return Some(SelectLine::Vanished(vanished));
    }
    // must come before the suffix checks
    if line.contains(FETCH) {
        return Some(SelectLine::Fetch(line));
    }
    if let Some(rest) = line.strip_suffix(EXISTS) {
        return Some(SelectLine::Exists(counter(rest)));
    }
    if let Some(rest) = line.strip_suffix(RECENT) {
        return Some(SelectLine::Recent(counter(rest)));
    }
    None
}

/// Builds a [`MailboxState`] from the untagged data of a SELECT or EXAMINE
/// response.
///
/// Every line is classified on its own. Unknown lines are skipped. A numeric
/// value that does not parse is stored as zero by [`parse`](Self::parse) and
/// reported by [`parse_strict`](Self::parse_strict). A flag list without
/// balanced parentheses is skipped by the former and reported by the latter.
#[derive(Debug, Clone, Default)]
pub struct SelectResponseParser<D = ModifiedUtf7> {
    decoder: D,
}

impl SelectResponseParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: FolderNameDecoder> SelectResponseParser<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn parse(&self, folder_name: &str, response: &str) -> MailboxState {
        self.run(folder_name, response).0
    }

    /// Like [`parse`](Self::parse), but fails on the first malformed value.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedField`] naming the field and the offending line.
    pub fn parse_strict(
        &self,
        folder_name: &str,
        response: &str,
    ) -> Result<MailboxState, MalformedField> {
        match self.run(folder_name, response) {
            (state, None) => Ok(state),
            (_, Some(malformed)) => Err(malformed),
        }
    }

    fn run(&self, folder_name: &str, response: &str) -> (MailboxState, Option<MalformedField>) {
        let mut mailbox = MailboxStateBuilder::new(self.decoder.decode(folder_name));
        let mut first_malformed = None;
        for line in response.lines() {
            let Some(classified) = classify(line) else {
                if !line.is_empty() {
                    trace!("skipping unrecognized select response line {line:?}");
                }
                continue;
            };
            if let Err(malformed) = apply(&mut mailbox, classified, line) {
                debug!("{malformed}");
                first_malformed.get_or_insert(malformed);
            }
        }
        (mailbox.build(), first_malformed)
    }
}

/// Stores `classified` in `mailbox`. Malformed numbers are stored as zero and
/// malformed flag lists are dropped; both are reported in the error.
fn apply(
    mailbox: &mut MailboxStateBuilder,
    classified: SelectLine<'_>,
    line: &str,
) -> Result<(), MalformedField> {
    let malformed = |field| MalformedField::new(field, line);
    match classified {
        SelectLine::Flags(Some(flags)) => mailbox.flags(flags),
        SelectLine::Flags(None) => return Err(malformed(Field::Flags)),
        SelectLine::PermanentFlags(Some(flags)) => mailbox.permanent_flags(flags),
        SelectLine::PermanentFlags(None) => return Err(malformed(Field::PermanentFlags)),
        SelectLine::NoModSeq => mailbox.no_modseq(),
        SelectLine::HighestModSeq(modseq) => {
            mailbox.highest_modseq(ModSeq::from(modseq.unwrap_or_default()));
            modseq.ok_or_else(|| malformed(Field::HighestModSeq))?;
        }
        SelectLine::UidNext(uid) => {
            mailbox.uid_next(Uid::from(uid.unwrap_or_default()));
            uid.ok_or_else(|| malformed(Field::UidNext))?;
        }
        SelectLine::UidValidity(validity) => {
            mailbox.uid_validity(UidValidity::from(validity.unwrap_or_default()));
            validity.ok_or_else(|| malformed(Field::UidValidity))?;
        }
        SelectLine::Unseen(unseen) => {
            mailbox.unseen(unseen.unwrap_or_default());
            unseen.ok_or_else(|| malformed(Field::Unseen))?;
        }
        SelectLine::ReadOnly(read_only) => mailbox.read_only(read_only),
        SelectLine::Vanished(vanished) => mailbox.vanished_line(vanished),
        SelectLine::Fetch(fetch) => mailbox.fetch_line(fetch),
        SelectLine::Exists(count) => {
            mailbox.count(count.unwrap_or_default());
            count.ok_or_else(|| malformed(Field::Exists))?;
        }
        SelectLine::Recent(recent) => {
            mailbox.recent(recent.unwrap_or_default());
            recent.ok_or_else(|| malformed(Field::Recent))?;
        }
    }
    Ok(())
}
