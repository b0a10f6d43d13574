use std::collections::BTreeSet;

use derive_getters::Getters;

use crate::mailbox::{ModSeq, Uid, UidValidity};

const NEW_KEYWORDS_FLAG: &str = r"\*";
const NOSELECT_FLAG: &str = r"\Noselect";

/// Observable state of one mailbox, as announced by a single SELECT/EXAMINE
/// response or a single LIST entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct MailboxState {
    name: String,
    #[getter(skip)]
    hierarchy_delimiter: Option<String>,
    flags: BTreeSet<String>,
    permanent_flags: BTreeSet<String>,
    #[getter(skip)]
    no_modseq: bool,
    #[getter(skip)]
    highest_modseq: Option<ModSeq>,
    #[getter(skip)]
    uid_next: Option<Uid>,
    #[getter(skip)]
    uid_validity: Option<UidValidity>,
    #[getter(skip)]
    count: Option<u32>,
    #[getter(skip)]
    recent: Option<u32>,
    #[getter(skip)]
    unseen: Option<u32>,
    #[getter(skip)]
    read_only: Option<bool>,
    fetch_lines: Vec<String>,
    #[getter(skip)]
    vanished_line: Option<String>,
}

impl MailboxState {
    pub fn hierarchy_delimiter(&self) -> Option<&str> {
        self.hierarchy_delimiter.as_deref()
    }

    pub fn no_modseq(&self) -> bool {
        self.no_modseq
    }

    pub fn highest_modseq(&self) -> Option<ModSeq> {
        self.highest_modseq
    }

    pub fn uid_next(&self) -> Option<Uid> {
        self.uid_next
    }

    pub fn uid_validity(&self) -> Option<UidValidity> {
        self.uid_validity
    }

    /// Message count from `EXISTS`.
    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn recent(&self) -> Option<u32> {
        self.recent
    }

    /// Sequence number of the first unseen message from `[UNSEEN n]`.
    pub fn unseen(&self) -> Option<u32> {
        self.unseen
    }

    /// `Some(true)` after `[READ-ONLY]`, `Some(false)` after `[READ-WRITE]`.
    pub fn read_only(&self) -> Option<bool> {
        self.read_only
    }

    pub fn vanished_line(&self) -> Option<&str> {
        self.vanished_line.as_deref()
    }

    /// Whether the server lets clients create new keywords (`\*` in
    /// `PERMANENTFLAGS`).
    pub fn allows_new_keywords(&self) -> bool {
        self.permanent_flags.contains(NEW_KEYWORDS_FLAG)
    }

    pub fn is_selectable(&self) -> bool {
        !self
            .flags
            .iter()
            .any(|flag| flag.eq_ignore_ascii_case(NOSELECT_FLAG))
    }
}

/// Accumulates fields while a response is classified line by line.
#[derive(Debug, Default)]
pub struct MailboxStateBuilder {
    state: MailboxState,
}

impl MailboxStateBuilder {
    pub fn new(name: String) -> Self {
        Self {
            state: MailboxState {
                name,
                ..MailboxState::default()
            },
        }
    }

    pub fn build(self) -> MailboxState {
        self.state
    }

    pub fn hierarchy_delimiter(&mut self, delimiter: String) {
        self.state.hierarchy_delimiter = Some(delimiter);
    }

    pub fn flags<'a>(&mut self, flags: impl IntoIterator<Item = &'a str>) {
        self.state
            .flags
            .extend(flags.into_iter().map(str::to_string));
    }

    pub fn permanent_flags<'a>(&mut self, flags: impl IntoIterator<Item = &'a str>) {
        self.state
            .permanent_flags
            .extend(flags.into_iter().map(str::to_string));
    }

    pub fn no_modseq(&mut self) {
        self.state.no_modseq = true;
    }

    pub fn highest_modseq(&mut self, highest_modseq: ModSeq) {
        self.state.highest_modseq = Some(highest_modseq);
    }

    pub fn uid_next(&mut self, uid_next: Uid) {
        self.state.uid_next = Some(uid_next);
    }

    pub fn uid_validity(&mut self, uid_validity: UidValidity) {
        self.state.uid_validity = Some(uid_validity);
    }

    pub fn count(&mut self, count: u32) {
        self.state.count = Some(count);
    }

    pub fn recent(&mut self, recent: u32) {
        self.state.recent = Some(recent);
    }

    pub fn unseen(&mut self, unseen: u32) {
        self.state.unseen = Some(unseen);
    }

    pub fn read_only(&mut self, read_only: bool) {
        self.state.read_only = Some(read_only);
    }

    pub fn fetch_line(&mut self, line: &str) {
        self.state.fetch_lines.push(line.to_string());
    }

    pub fn vanished_line(&mut self, vanished: &str) {
        self.state.vanished_line = Some(vanished.to_string());
    }
}
