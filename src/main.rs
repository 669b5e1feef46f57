use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use textkit::{
    commands::{
        cat::cat,
        cut::{cut, split_range_list, ColumnSelection},
        stats::{stats, ReportFormat},
    },
    config::Config,
    logging::{enable_tracing, LogLevel},
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(version, about = "Small text utilities: cat, cut and stats", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    log_file: Option<PathBuf>,

    /// Configuration file, defaults to ./textkit.toml when present
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print files
    Cat {
        /// The files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print selected columns of every line
    Cut {
        /// Field separator
        #[arg(short = 'd', value_name = "SEP")]
        separator: Option<char>,

        /// Comma separated 1-based inclusive ranges, e.g. 1-2,4-5
        #[arg(short = 'f', value_name = "RANGES")]
        fields: String,

        /// Do not merge ranges that only touch
        #[arg(long)]
        keep_adjacent: bool,

        file: PathBuf,
    },
    /// Statistics on a file
    Stats {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// File to analyze
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.log_level, cli.log_file.as_deref())?;
    debug!("{:?}", cli);

    let config = Config::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Cat { files } => cat(&files, &mut out)?,
        Command::Cut {
            separator,
            fields,
            keep_adjacent,
            file,
        } => {
            let (separator, adjacency) = config.cut.selection_params(separator, keep_adjacent);
            let selection =
                ColumnSelection::new(separator, &split_range_list(&fields), adjacency)?;
            cut(&selection, &file, &mut out)?;
        }
        Command::Stats { json, file } => {
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };
            stats(&file, format, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
