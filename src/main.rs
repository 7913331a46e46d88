//! CLI entry point for sizetree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sizetree::tree::{DEFAULT_DEPTH, DEFAULT_TOP_DIRS, DEFAULT_TOP_FILES};
use sizetree::{
    JSON_REPORT_FILE, OutputConfig, REPORT_FILE, Report, ScanConfig, parse_size, print_top_lists,
    validate_root, write_report,
};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sizetree")]
#[command(about = "Report the heaviest directories and files under a path")]
#[command(version)]
struct Args {
    /// Directory to analyze (default: your home directory)
    directory: Option<PathBuf>,

    /// Depth of the summary tree
    #[arg(short = 'd', long = "depth", default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// Ignore files smaller than SIZE. Units: K, M, G, T (e.g. 300M, 1.5G)
    #[arg(short = 'm', long = "min-size", value_name = "SIZE")]
    min_size: Option<String>,

    /// Number of largest files to list
    #[arg(short = 'f', long = "files", default_value_t = DEFAULT_TOP_FILES)]
    files: usize,

    /// Number of largest directories to list
    #[arg(long = "dirs", default_value_t = DEFAULT_TOP_DIRS)]
    dirs: usize,

    /// Don't print anything to the console
    #[arg(short = 's', long = "silent")]
    silent: bool,

    /// Line up the size annotations of the tree in one column
    #[arg(short = 'a', long = "align")]
    align: bool,

    /// Write report.json instead of report.txt
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Number of parallel workers for directory sizing
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let min_file_size = match args.min_size.as_deref().map(parse_size) {
        None => 0,
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            eprintln!("sizetree: {}", e);
            process::exit(1);
        }
    };

    let directory = args
        .directory
        .clone()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let root = std::path::absolute(&directory).unwrap_or(directory);

    let config = ScanConfig {
        root,
        max_depth: args.depth,
        min_file_size,
        top_files: args.files,
        top_dirs: args.dirs,
        parallel_workers: args.jobs,
    };

    if let Err(e) = run(&args, &config) {
        eprintln!("sizetree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args, config: &ScanConfig) -> sizetree::Result<()> {
    validate_root(&config.root)?;

    if !args.silent {
        println!(
            "Analyzing directory: {} (depth: {})...",
            config.root.display(),
            config.max_depth
        );
    }

    let report = Report::generate(config)?;

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        align: args.align,
    };
    let (file_name, contents) = if args.json {
        (JSON_REPORT_FILE, report.to_json()?)
    } else {
        (REPORT_FILE, report.to_text(&output_config))
    };

    let report_path = std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(file_name);
    write_report(&report_path, &contents)?;

    if !args.silent {
        println!();
        if let Err(e) = print_top_lists(
            &report.top,
            report.top_files(),
            report.top_dirs(),
            output_config.use_color,
        ) {
            tracing::warn!(error = %e, "cannot write to stdout");
        }
        println!();
        println!("Report saved to: {}", report_path.display());
    }

    Ok(())
}
