//! Errors of the command-line frontend.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors in this program.
///
/// Errors in the command-line arguments themselves are reported by clap.
#[derive(Debug, Display, Error)]
pub(crate) enum CliError {
    /// {0}
    Lib(#[from] seedlife_lib::Error),
    /// Unable to read {path:?}: {source}
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Unable to tell the format of {0:?}. Use a .toml, .json, .yaml or .yml file.
    UnknownFormat(PathBuf),
    /// Invalid TOML: {0}
    TomlDe(#[from] toml::de::Error),
    /// Unable to write TOML: {0}
    TomlSer(#[from] toml::ser::Error),
    /// Invalid JSON: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML: {0}
    Yaml(#[from] serde_yaml::Error),
}
