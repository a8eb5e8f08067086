use anyhow::Result;
use clap::Parser;
use declmap::cli::Cli;
use declmap::extract::extract_to_csv;
use declmap::io;
use log::{debug, LevelFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let header = io::read_file(&cli.header)?;
    debug!("read {} bytes from {}", header.len(), cli.header.display());

    let csv = extract_to_csv(&header);
    io::write_output(&csv, cli.output.as_deref())?;
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
