//! Reading configuration files and writing results.

use crate::error::CliError;
use log::debug;
use seedlife_lib::{BitGrid, Config};
use serde::Serialize;
use std::{fs, path::Path, str::FromStr};

/// Formats for configuration files and for the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// The grid in a mix of Plaintext and RLE. Output only.
    Plain,
    Json,
    Toml,
    Yaml,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Format::Plain),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(format!("invalid format: {}", s)),
        }
    }
}

/// Everything an external renderer needs to draw the result.
///
/// Plain values come before the tables, as TOML requires.
#[derive(Serialize)]
pub(crate) struct Document<'a> {
    text: &'a str,
    cell_count: usize,
    config: &'a Config,
    grid: &'a BitGrid,
}

impl<'a> Document<'a> {
    pub(crate) fn new(text: &'a str, config: &'a Config, grid: &'a BitGrid) -> Self {
        Document {
            text,
            cell_count: grid.cell_count(),
            config,
            grid,
        }
    }
}

impl Format {
    /// Guesses the format of a configuration file from its extension.
    fn from_path(path: &Path) -> Result<Self, CliError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .filter(|&format| format != Format::Plain)
            .ok_or_else(|| CliError::UnknownFormat(path.to_owned()))
    }

    /// Parses a configuration. Missing fields take their default values.
    pub(crate) fn parse_config(self, s: &str) -> Result<Config, CliError> {
        match self {
            Format::Json => Ok(serde_json::from_str(s)?),
            Format::Toml => Ok(toml::from_str(s)?),
            Format::Yaml => Ok(serde_yaml::from_str(s)?),
            Format::Plain => Ok(Config::default()),
        }
    }

    /// Writes the result.
    pub(crate) fn render(self, document: &Document) -> Result<String, CliError> {
        match self {
            Format::Plain => Ok(document.grid.to_string()),
            Format::Json => {
                let mut s = serde_json::to_string_pretty(document)?;
                s.push('\n');
                Ok(s)
            }
            Format::Toml => Ok(toml::to_string(document)?),
            Format::Yaml => Ok(serde_yaml::to_string(document)?),
        }
    }
}

/// Loads a configuration file, choosing the format by its extension.
pub(crate) fn load_config(path: &Path) -> Result<Config, CliError> {
    let format = Format::from_path(path)?;
    debug!("loading {:?} config from {:?}", format, path);
    let s = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    format.parse_config(&s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedlife_lib::Digest;

    #[test]
    fn guess_format() {
        assert_eq!(Format::from_path(Path::new("a.toml")).ok(), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("a.json")).ok(), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.yml")).ok(), Some(Format::Yaml));
        assert!(matches!(
            Format::from_path(Path::new("a.plain")),
            Err(CliError::UnknownFormat(_))
        ));
        assert!(matches!(
            Format::from_path(Path::new("config")),
            Err(CliError::UnknownFormat(_))
        ));
    }

    #[test]
    fn parse_configs() -> Result<(), CliError> {
        let expected = Config::new(16, 365).set_digest(Digest::Sha3_512);
        let toml = "size = 16\nsteps = 365\ndigest = \"sha3-512\"\n";
        let json = r#"{ "size": 16, "steps": 365, "digest": "sha3-512" }"#;
        let yaml = "size: 16\nsteps: 365\ndigest: sha3-512\n";
        assert_eq!(Format::Toml.parse_config(toml)?, expected);
        assert_eq!(Format::Json.parse_config(json)?, expected);
        assert_eq!(Format::Yaml.parse_config(yaml)?, expected);
        assert_eq!(Format::Json.parse_config("{}")?, Config::default());
        assert!(Format::Json.parse_config(r#"{ "steps": -1 }"#).is_err());
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = load_config(Path::new("/nonexistent/seedlife.toml"));
        assert!(matches!(err, Err(CliError::Io { .. })));
    }

    #[test]
    fn render_document() -> Result<(), CliError> {
        let config = Config::new(4, 0);
        let grid = config.generate("A")?;
        let document = Document::new("A", &config, &grid);

        let plain = Format::Plain.render(&document)?;
        assert_eq!(plain, "x = 4, y = 4, rule = B3/S23\n.o..$\n...o$\n....$\n....!\n");

        let json: serde_json::Value = serde_json::from_str(&Format::Json.render(&document)?)?;
        assert_eq!(json["text"], "A");
        assert_eq!(json["cell_count"], 2);
        assert_eq!(json["config"]["digest"], "utf8");
        assert_eq!(json["grid"]["rows"][1], "...o");

        let toml: toml::Value = toml::from_str(&Format::Toml.render(&document)?)?;
        assert_eq!(toml["grid"]["size"].as_integer(), Some(4));

        let yaml: serde_yaml::Value = serde_yaml::from_str(&Format::Yaml.render(&document)?)?;
        assert_eq!(yaml["config"]["steps"].as_u64(), Some(0));
        Ok(())
    }
}
