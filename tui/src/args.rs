//! Parsing command-line arguments.

use crate::{
    error::CliError,
    format::{load_config, Format},
};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use seedlife_lib::{Config, Digest, Error};
use std::path::PathBuf;

/// The greeting the cards were made for.
const DEFAULT_TEXT: &str = "PF 2025";

/// Largest side length accepted on the command line.
const MAX_SIZE: usize = 4096;

fn parse_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(String::from("size must be a positive integer")),
        Ok(n) if n > MAX_SIZE => Err(format!("size must be at most {}", MAX_SIZE)),
        Ok(n) => Ok(n),
    }
}

/// The command-line interface.
pub(crate) fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Seeds Conway's Game of Life from a text and evolves it\n\
             \n\
             The bytes of the text (or of its digest) are laid out on a square grid, \
             one bit per cell, most significant bit first, row by row. \
             Missing bytes count as zero. The grid wraps around on both axes.\n\
             \n\
             With the plain format, the result is displayed in a mix of Plaintext and \
             RLE format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each line is ended with `$`;\n\
             * The whole pattern is ended with `!`\n",
        )
        .arg(
            Arg::new("TEXT")
                .help("Input text")
                .index(1)
                .default_value(DEFAULT_TEXT),
        )
        .arg(
            Arg::new("SIZE")
                .help("Side length of the grid [default: 32]")
                .short('n')
                .long("size")
                .value_parser(parse_size),
        )
        .arg(
            Arg::new("STEPS")
                .help("Number of generations [default: 5]")
                .short('s')
                .long("steps")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("DIGEST")
                .help("How to turn the text into seed bytes [default: utf8]")
                .long_help(
                    "How to turn the text into seed bytes [default: utf8]\n\
                     \"utf8\" uses the bytes of the text itself.\n\
                     \"sha3-512\" uses the hexadecimal SHA3-512 digest of the text.\n\
                     \"sha3-512-raw\" uses the 64 bytes of the SHA3-512 digest.\n",
                )
                .short('d')
                .long("digest")
                .value_parser(["utf8", "sha3-512", "sha3-512-raw"]),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     The format is chosen by the extension: .toml, .json, .yaml or .yml. \
                     Missing fields take their default values, \
                     and other options override the fields in the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(["plain", "json", "toml", "yaml"])
                .default_value("plain"),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs what is being done")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) text: String,
    pub(crate) config: Config,
    pub(crate) format: Format,
}

impl Args {
    /// Builds the configuration from the parsed arguments,
    /// reading the configuration file if there is one.
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(&size) = matches.get_one::<usize>("SIZE") {
            config = config.set_size(size);
        }
        if let Some(&steps) = matches.get_one::<u32>("STEPS") {
            config = config.set_steps(steps);
        }
        if let Some(digest) = matches.get_one::<String>("DIGEST") {
            config = config.set_digest(digest.parse::<Digest>()?);
        }
        if config.size > MAX_SIZE {
            return Err(Error::SizeTooLarge(config.size).into());
        }

        let text = matches
            .get_one::<String>("TEXT")
            .cloned()
            .unwrap_or_else(|| String::from(DEFAULT_TEXT));
        let format = matches
            .get_one::<String>("FORMAT")
            .and_then(|format| format.parse().ok())
            .unwrap_or(Format::Plain);

        Ok(Args {
            text,
            config,
            format,
        })
    }
}
