use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "declmap")]
#[command(about = "Extract exported C API signatures into CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Header file to scan
    pub header: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
