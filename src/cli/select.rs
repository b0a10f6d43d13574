use std::io::Write;

use anyhow::{Context as _, Result};
use log::info;
use mailbox_state::SelectResponseParser;

use crate::{
    cli::{name_decoder, print_state},
    config::Config,
};

pub fn select(config: &Config, mailbox: &str, response: &str, out: &mut impl Write) -> Result<()> {
    let parser = SelectResponseParser::with_decoder(name_decoder(config));
    let state = if config.strict() {
        parser
            .parse_strict(mailbox, response)
            .with_context(|| format!("cannot parse SELECT response for {mailbox}"))?
    } else {
        parser.parse(mailbox, response)
    };
    info!(
        "{} holds {} messages",
        state.name(),
        state.count().unwrap_or_default()
    );
    print_state(out, &state)?;
    Ok(())
}
