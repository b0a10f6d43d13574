mod mailbox_state;

use std::env;
use std::path::PathBuf;

pub use mailbox_state::Config;
pub use mailbox_state::ConfigError;

/// `$XDG_CONFIG_HOME/<pkg>/config.toml`, falling back to `$HOME/.config`.
fn default_location() -> Option<PathBuf> {
    let mut config_dir = if let Some(config_home) = env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(config_home)
    } else {
        let mut config_home = PathBuf::from(env::var_os("HOME")?);
        config_home.push(".config");
        config_home
    };
    config_dir.push(env!("CARGO_PKG_NAME"));
    config_dir.push("config.toml");
    Some(config_dir)
}
