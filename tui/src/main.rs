mod args;
mod error;
mod format;

use args::Args;
use clap::ArgMatches;
use error::CliError;
use format::Document;
use log::debug;
use std::process;

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let args = Args::from_matches(matches)?;
    debug!("{:?}", args);
    let grid = args.config.generate(&args.text)?;
    let document = Document::new(&args.text, &args.config, &grid);
    print!("{}", args.format.render(&document)?);
    Ok(())
}

fn main() {
    let matches = args::command().get_matches();

    let level = if matches.get_flag("VERBOSE") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
