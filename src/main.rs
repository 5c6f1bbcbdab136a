use std::path::PathBuf;

use clap::Parser;
use png_info::{ParseOptions, PngInfo};

/// Print structural metadata of a PNG file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// png file path
    #[arg(short, long)]
    filepath: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Fail when a chunk's stored crc does not match its contents
    #[arg(long)]
    verify_crc: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    let verbosity = match args.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(verbosity);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    if let Err(e) = run(&args) {
        // RUST_LOG may have silenced the logger.
        if log::log_enabled!(log::Level::Error) {
            log::error!("[error]: {e:#}");
        } else {
            eprintln!("[error]: {e:#}");
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    use anyhow::Context;

    let options = ParseOptions {
        verify_crc: args.verify_crc,
    };
    let png = PngInfo::open_with(&args.filepath, options)
        .with_context(|| format!("failed to read {}", args.filepath.display()))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&png.to_json())?);
    } else {
        println!("{png}");
    }
    Ok(())
}
