use std::io::Write;

use anyhow::Result;
use log::{debug, trace};
use mailbox_state::ListEntryParser;

use crate::{
    cli::{name_decoder, print_state},
    config::Config,
};

/// Prints every listing entry in `listing`, separated by blank lines. Other
/// lines, such as the tagged completion, are skipped.
pub fn list(config: &Config, listing: &str, out: &mut impl Write) -> Result<()> {
    let parser = ListEntryParser::with_decoder(name_decoder(config));
    let mut entries = 0usize;
    for line in listing.lines() {
        let Some(state) = parser.parse(line) else {
            trace!("skipping {line:?}");
            continue;
        };
        if entries > 0 {
            writeln!(out)?;
        }
        print_state(out, &state)?;
        entries += 1;
    }
    debug!("found {entries} listing entries");
    Ok(())
}
