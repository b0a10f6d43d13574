use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::config::default_location;

#[derive(Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    strict: bool,
    #[serde(default = "decode_names")]
    decode_names: bool,
}

fn decode_names() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            decode_names: decode_names(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads `file`, or the default location when `file` is `None`.
    ///
    /// A missing file at the default location yields the defaults, a missing
    /// explicitly requested file is an error.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = file.map(Path::to_path_buf).or_else(default_location) else {
            debug!("no config location known, using defaults");
            return Ok(Self::default());
        };
        match read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(source) if file.is_none() && source.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Report malformed values instead of coercing them to zero.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Decode mailbox names from modified UTF-7.
    pub fn decode_names(&self) -> bool {
        self.decode_names
    }

    pub fn override_strict(&mut self, strict: bool) {
        self.strict |= strict;
    }

    pub fn override_verbatim_names(&mut self, verbatim: bool) {
        self.decode_names &= !verbatim;
    }
}
