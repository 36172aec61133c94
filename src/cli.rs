//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Harvest command and parameters.
///
/// Every option overrides a built-in default. The source list itself is not configurable.
///
/// ```sh
/// kalima 0.1.0
/// Arabic word harvesting from remote corpora.
///
/// USAGE:
///     kalima [FLAGS] [OPTIONS]
///
/// FLAGS:
///     -b, --bounded    keep at most --word-limit words per source
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --byte-cap <byte-cap>        bytes fetched per source [default: 51200]
///         --data-dir <data-dir>        working directory. Default is datasets/ next to the executable.
///         --dst <dst>                  destination csv. Default is arabic_words.csv next to the executable.
///         --word-limit <word-limit>    words kept per source in bounded mode [default: 20]
/// ```
#[structopt(name = "kalima", about = "Arabic word harvesting from remote corpora.")]
pub struct Kalima {
    #[structopt(
        short = "b",
        long = "bounded",
        help = "keep at most --word-limit words per source"
    )]
    pub bounded: bool,
    #[structopt(
        long = "byte-cap",
        help = "bytes fetched per source",
        default_value = "51200"
    )]
    pub byte_cap: usize,
    #[structopt(
        long = "word-limit",
        help = "words kept per source in bounded mode",
        default_value = "20"
    )]
    pub word_limit: usize,
    #[structopt(
        long = "dst",
        parse(from_os_str),
        help = "destination csv. Default is arabic_words.csv next to the executable."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(
        long = "data-dir",
        parse(from_os_str),
        help = "working directory. Default is datasets/ next to the executable."
    )]
    pub data_dir: Option<PathBuf>,
}
