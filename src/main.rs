//! # Kalima
//!
//! Kalima samples a fixed list of Arabic corpora and wordlists, and collects the Arabic words it finds
//! into a single CSV file of `(word_with_tashkeel, word_without_tashkeel, source)` rows.
//!
//! ## Getting started
//!
//! ```sh
//! kalima 0.1.0
//! Arabic word harvesting from remote corpora.
//!
//! USAGE:
//!     kalima [FLAGS] [OPTIONS]
//! ```
//!
//! Logging is done through `env_logger`, `info` by default. Use `RUST_LOG=debug` for more details.
//!
//! Failing sources are reported and skipped: the exit status is only non-zero
//! if the output (or working) directory can't be written.

use std::path::{Path, PathBuf};

use env_logger::Env;
use kalima::config::Config;
use kalima::download::Fetcher;
use kalima::error::Error;
use kalima::pipelines::{Harvest, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// Directory of the executable, where outputs go by default.
fn base_dir() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = cli::Kalima::from_args();
    debug!("cli args\n{:#?}", opt);

    let mut config = Config::with_base_dir(&base_dir()?)
        .with_bounded(opt.bounded)
        .with_byte_cap(opt.byte_cap)
        .with_word_limit(opt.word_limit);
    if let Some(dst) = opt.dst {
        config = config.with_dst(dst);
    }
    if let Some(data_dir) = opt.data_dir {
        config = config.with_data_dir(data_dir);
    }

    let harvest = Harvest::new(config, Fetcher::new()?);
    let summary = harvest.run()?;

    for (source, count) in summary.per_source() {
        println!("{}: {} unique records", source, count);
    }
    let failures = summary
        .diagnostics()
        .iter()
        .filter(|(_, d)| d.is_failure())
        .count();
    if failures > 0 {
        println!("{} source issue(s), see log above", failures);
    }
    println!("Total unique records: {}", summary.total());
    println!("File: {:?}", summary.dst());
    if harvest.config().bounded() {
        println!("Bounded mode: words per source were capped. Run without --bounded to keep all of them.");
    }

    Ok(())
}
