mod cli;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use config::Config;

/// Inspect IMAP SELECT/EXAMINE responses and LIST output captured from a
/// server session.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Config file, defaults to `$XDG_CONFIG_HOME/mailbox-state/config.toml`
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Fail on malformed values instead of reading them as zero
    #[arg(long)]
    pub strict: bool,
    /// Print mailbox names as sent, without modified UTF-7 decoding
    #[arg(long)]
    pub verbatim_names: bool,
    /// Log more, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse the response to SELECT or EXAMINE
    Select {
        /// Mailbox the response belongs to, as sent to the server
        #[arg(short, long)]
        mailbox: String,
        /// Response file, stdin if omitted
        file: Option<PathBuf>,
    },
    /// Parse LIST, LSUB or XLIST output, one entry per line
    List {
        /// Response file, stdin if omitted
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mailbox = match &args.command {
        Command::Select { mailbox, .. } => Some(mailbox.as_str()),
        Command::List { .. } => None,
    };
    logging::init(args.verbose, mailbox);

    let mut config = Config::load(args.config.as_deref())?;
    config.override_strict(args.strict);
    config.override_verbatim_names(args.verbatim_names);

    cli::run(&args, &config)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_every_option_has_help() {
        let command = Args::command();
        command.clone().debug_assert();

        for argument in command.get_arguments() {
            assert!(
                argument.get_help().is_some(),
                "{} has no help",
                argument.get_id()
            );
        }
    }
}
