//! Roster CLI - split a camp activity export into per-period rosters
//!
//! ```bash
//! roster split activities.csv                  # period_1_activities.csv ... period_4_activities.csv
//! roster split activities.csv --summary        # + cabin tags, counts, activities_summary.txt
//! roster parse activities.csv                  # print the parsed roster as JSON
//! roster config > roster.toml                  # dump the default configuration
//! ```

use clap::{Args, Parser, Subcommand};
use roster::config::RosterConfig;
use roster::logs::{log_error, log_success, CONSOLE};
use roster::{load_config, load_roster, run};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Split a camp activity export into per-period rosters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one roster table per period
    Split {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for the output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Table file name pattern, must contain {period}
        #[arg(long)]
        pattern: Option<String>,

        /// Summary variant: cabin tags, counts, and a text report (optional file name)
        #[arg(long, value_name = "FILE")]
        summary: Option<Option<PathBuf>>,
    },

    /// Parse the export and print the roster as JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    Config,
}

#[derive(Args)]
struct InputArgs {
    /// Activity export (CSV)
    input: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Known period ids, comma-separated
    #[arg(long, value_delimiter = ',')]
    periods: Vec<String>,

    /// First-cell marker of the camper-name header row
    #[arg(long)]
    header_marker: Option<String>,

    /// Field delimiter
    #[arg(short, long, conflicts_with = "auto_delimiter")]
    delimiter: Option<char>,

    /// Detect the field delimiter from the file
    #[arg(long)]
    auto_delimiter: bool,

    /// Tag participants with their cabin
    #[arg(long)]
    cabins: bool,

    /// Append participant counts to activity labels
    #[arg(long)]
    counts: bool,
}

impl InputArgs {
    /// Config file (or defaults) with command-line overrides applied.
    fn build_config(&self) -> Result<RosterConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RosterConfig::default(),
        };

        if !self.periods.is_empty() {
            config.input.periods = self.periods.clone();
        }
        if let Some(marker) = &self.header_marker {
            config.input.header_marker = marker.clone();
        }
        if self.auto_delimiter {
            config.input.delimiter = None;
        } else if let Some(d) = self.delimiter {
            config.input.delimiter = Some(d);
        }
        if self.cabins {
            config.input.cabin_tags = true;
        }
        if self.counts {
            config.output.count_annotations = true;
        }

        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);
    CONSOLE.set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Split {
            input,
            output_dir,
            pattern,
            summary,
        } => cmd_split(&input, output_dir, pattern, summary),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Config => cmd_config(),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_split(
    args: &InputArgs,
    output_dir: Option<PathBuf>,
    pattern: Option<String>,
    summary: Option<Option<PathBuf>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = args.build_config()?;
    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }
    if let Some(pattern) = pattern {
        config.output.file_pattern = pattern;
    }
    if let Some(file) = summary {
        config.enable_summary(file);
    }

    let summary = run(&args.input, &config)?;

    log_success(format!(
        "✨ Done: {} tables{}",
        summary.tables.len(),
        if summary.report.is_some() { " + summary" } else { "" }
    ));
    Ok(())
}

fn cmd_parse(args: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.build_config()?;
    let parsed = load_roster(&args.input, &config)?;

    log_success(format!(
        "Parsed {} assignments across {} periods",
        parsed.stats.assignments,
        parsed.roster.period_ids().len()
    ));

    let json = serde_json::to_string_pretty(&parsed.roster)?;
    write_output(&json, output)
}

fn cmd_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", RosterConfig::default().to_toml()?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_success(format!("Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

/// Initialize diagnostics logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
