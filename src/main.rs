//! filerev - reversed renderings and comparison of text and CSV files

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use filerev::{Dispatcher, Settings};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("filerev")
        .version(filerev::VERSION)
        .about("Reverse the lines and words of a text or CSV file, or compare two files")
        .long_about(
            "With no file, shows the default sample file. With one file, prints its \
             content, its lines in reverse order and its word palindrome. With two \
             files, compares their line counts and content.",
        )
        .arg(
            Arg::new("files")
                .help("Up to two .txt or .csv files")
                .num_args(0..=2)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Settings file (requires the `config` feature)")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    for file in &files {
        log::debug!("argument : {}", file.display());
    }

    let settings = Settings::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load settings")?;

    let dispatcher = Dispatcher::from_paths(files, &settings)?;
    dispatcher.run()?;

    Ok(())
}
