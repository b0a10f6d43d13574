mod list;
mod select;

use std::{
    fs::read_to_string,
    io::{self, Read as _, Write},
    path::Path,
};

use anyhow::{Context as _, Result};
use mailbox_state::{FolderNameDecoder as _, MailboxState, ModifiedUtf7, Verbatim};

use crate::{Args, Command, config::Config};

pub fn run(args: &Args, config: &Config) -> Result<()> {
    let mut out = io::stdout().lock();
    match &args.command {
        Command::Select { mailbox, file } => {
            let response = read_input(file.as_deref())?;
            select::select(config, mailbox, &response, &mut out)
        }
        Command::List { file } => {
            let listing = read_input(file.as_deref())?;
            list::list(config, &listing, &mut out)
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(file) = file {
        read_to_string(file).with_context(|| format!("cannot read {}", file.display()))
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("cannot read response from stdin")?;
        Ok(input)
    }
}

fn name_decoder(config: &Config) -> impl Fn(&str) -> String {
    let decode_names = config.decode_names();
    move |raw: &str| {
        if decode_names {
            ModifiedUtf7.decode(raw)
        } else {
            Verbatim.decode(raw)
        }
    }
}

fn join<'a>(flags: impl IntoIterator<Item = &'a String>) -> String {
    flags
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the fields of `state` that are present, one per line.
fn print_state(out: &mut impl Write, state: &MailboxState) -> io::Result<()> {
    writeln!(out, "name: {}", state.name())?;
    if let Some(delimiter) = state.hierarchy_delimiter() {
        writeln!(out, "delimiter: {delimiter}")?;
    }
    if !state.flags().is_empty() {
        writeln!(out, "flags: {}", join(state.flags()))?;
    }
    if !state.permanent_flags().is_empty() {
        writeln!(out, "permanent flags: {}", join(state.permanent_flags()))?;
    }
    if let Some(read_only) = state.read_only() {
        writeln!(out, "read-only: {read_only}")?;
    }
    if let Some(count) = state.count() {
        writeln!(out, "exists: {count}")?;
    }
    if let Some(recent) = state.recent() {
        writeln!(out, "recent: {recent}")?;
    }
    if let Some(unseen) = state.unseen() {
        writeln!(out, "unseen: {unseen}")?;
    }
    if let Some(uid_validity) = state.uid_validity() {
        writeln!(out, "uid validity: {uid_validity}")?;
    }
    if let Some(uid_next) = state.uid_next() {
        writeln!(out, "uid next: {uid_next}")?;
    }
    if state.no_modseq() {
        writeln!(out, "highest modseq: unsupported")?;
    } else if let Some(highest_modseq) = state.highest_modseq() {
        writeln!(out, "highest modseq: {highest_modseq}")?;
    }
    if let Some(vanished) = state.vanished_line() {
        writeln!(out, "vanished: {vanished}")?;
    }
    for fetch in state.fetch_lines() {
        writeln!(out, "fetch: {fetch}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assertables::*;
    use mailbox_state::MailboxStateBuilder;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_prints_only_present_fields() {
        let mut state = MailboxStateBuilder::new("INBOX".to_string());
        state.flags([r"\Seen", r"\Answered"]);
        state.count(5);
        state.no_modseq();
        let mut out = Vec::new();

        assert_ok!(print_state(&mut out, &state.build()));
        assert_eq!(
            assert_ok!(String::from_utf8(out)),
            "name: INBOX\nflags: \\Answered \\Seen\nexists: 5\nhighest modseq: unsupported\n"
        );
    }

    #[rstest]
    #[case(true, "Entwürfe")]
    #[case(false, "Entw&APw-rfe")]
    fn test_name_decoder_follows_config(#[case] decode: bool, #[case] expected: &str) {
        let mut config = Config::default();
        config.override_verbatim_names(!decode);
        assert_eq!(name_decoder(&config)("Entw&APw-rfe"), expected);
    }
}
