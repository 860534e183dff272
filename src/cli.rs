use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sizebar", version)]
#[command(
    about = "Show the size of each entry in a directory, largest first",
    long_about = None
)]
pub struct Cli {
    /// Directory to report on (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Log entries that could not be read to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
