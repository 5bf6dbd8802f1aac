use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use pos_collect::{DEFAULT_KEY, ExtractConfig, FsSourceConfig, ScanReport, collect_fs, output};

use crate::logging;

/// Exit code for a completed scan.
const EXIT_OK: i32 = 0;
/// Exit code for argument errors, and for scan errors under `--strict`.
const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Unique pos values: [...]` on stdout, scan errors on stderr
    #[default]
    Human,
    /// The full scan report as JSON on stdout
    Json,
}

/// Collect the distinct part-of-speech values used in a directory of YAML files
#[derive(Debug, Parser)]
#[command(name = "pos-collect", version, about)]
pub struct Cli {
    /// Directory containing .yaml/.yml files
    pub directory: PathBuf,

    /// Mapping key whose values are collected
    #[arg(long, value_name = "KEY", default_value = DEFAULT_KEY)]
    pub key: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Skip files matching this glob (full path or file name); repeatable
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Read every document of `---` separated YAML streams instead of
    /// rejecting such files
    #[arg(long)]
    pub multi_document: bool,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Exit with status 1 when any file or the directory could not be scanned
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn fs_config(&self) -> FsSourceConfig {
        let mut config = FsSourceConfig::new(&self.directory);
        config.exclude.clone_from(&self.exclude);
        if self.recursive {
            config.max_depth = usize::MAX;
        }
        if let Some(max) = self.max_file_size {
            config.max_file_size = max;
        }
        config
    }

    fn extract_config(&self) -> ExtractConfig {
        let mut config = ExtractConfig::default();
        config.key.clone_from(&self.key);
        config.multi_document = self.multi_document;
        config
    }
}

/// Parse arguments, run the scan, and return the process exit code.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn run() -> anyhow::Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(EXIT_OK);
        }
        Err(e) => {
            println!("{}", Cli::command().render_usage());
            e.print()?;
            return Ok(EXIT_FAILURE);
        }
    };

    logging::init(cli.verbose);

    let report = collect_fs(&cli.fs_config(), &cli.extract_config());
    render(&report, cli.format)?;

    Ok(exit_code(&report, cli.strict))
}

fn render(report: &ScanReport, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Human => {
            let mut stderr = std::io::stderr().lock();
            for err in &report.scan_errors {
                writeln!(stderr, "{}", err.format_human_readable().red())?;
            }
            output::write_human(report, &mut stdout)?;
        }
        OutputFormat::Json => output::write_json(report, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(())
}

/// Scan errors never change the exit code unless `strict` is set.
fn exit_code(report: &ScanReport, strict: bool) -> i32 {
    if strict && !report.ok {
        EXIT_FAILURE
    } else {
        EXIT_OK
    }
}
