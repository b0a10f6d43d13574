mod mailbox_state;
mod modseq;
mod uid;
mod uid_validity;

pub use mailbox_state::MailboxState;
pub use mailbox_state::MailboxStateBuilder;
pub use modseq::ModSeq;
pub use uid::Uid;
pub use uid_validity::UidValidity;
