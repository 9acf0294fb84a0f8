//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub image_root: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("glare-survey - Clinical evaluation survey for glare removal on intraoral images");
    eprintln!();
    eprintln!("Usage: glare-survey [image-root] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [image-root]           Folder holding the Original, Method A and Method B folders");
    eprintln!("                         (default: $SURVEY_IMAGE_ROOT, then the current directory)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output-dir <DIR> Where to save the result CSV (default: current directory)");
    eprintln!("  --log-file <PATH>      Log destination (default: glare-survey.log)");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Folder names and the output directory can also be set in <image-root>/survey.json.");
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse arguments, excluding the program name
pub fn parse_args_from(args: &[String]) -> io::Result<Command> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(Command::Version);
        } else if arg == "-o" || arg == "--output-dir" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--output-dir"))?;
            config.output_dir = Some(PathBuf::from(value));
            i += 1;
        } else if arg == "--log-file" {
            i += 1;
            let value = args.get(i).ok_or_else(|| missing_value("--log-file"))?;
            config.log_file = Some(PathBuf::from(value));
            i += 1;
        } else if !arg.starts_with('-') && config.image_root.is_none() {
            config.image_root = Some(PathBuf::from(arg));
            i += 1;
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(Command::Run(config))
}

/// Parse CLI arguments of the current process
pub fn parse_args() -> io::Result<Command> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&args)
}
