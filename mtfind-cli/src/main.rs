use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use mtfind::{
    config::SearchConfig,
    input::read_lines,
    search::{search, DEFAULT_BATCH_SIZE},
    SearchError, SearchOutput,
};
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SearchError>;

/// Searches a text file for wildcard-mask occurrences using multiple threads
#[derive(Parser)]
#[command(name = "mtfind", author, version, about, long_about = None)]
struct Cli {
    /// Text file to search
    file: PathBuf,

    /// Search mask: literal characters with `?` matching any single character
    mask: String,

    /// Number of worker threads (default: CPU cores; 0 is treated as 1)
    #[arg(short = 'j', long = "threads")]
    threads: Option<usize>,

    /// Lines claimed per batch by each worker
    #[arg(long)]
    batch_size: Option<NonZeroUsize>,

    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage failures exit 1, matching the historical mtfind contract;
            // --help and --version are not failures.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cli_config = SearchConfig {
        mask: cli.mask,
        thread_count: resolve_thread_count(cli.threads),
        batch_size: cli
            .batch_size
            .unwrap_or_else(|| NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap()),
        log_level: cli.log_level,
    };

    let config = SearchConfig::load_from(cli.config.as_deref())
        .map_err(|e| SearchError::config_error(e.to_string()))?
        .merge_with_cli(cli_config);

    init_logging(&config.log_level);
    debug!(
        "Using {} worker threads, batch size {}",
        config.thread_count, config.batch_size
    );

    let lines = read_lines(&cli.file)?;
    let result = search(&lines, &config)?;
    print_search_results(&result)?;
    Ok(())
}

fn resolve_thread_count(threads: Option<usize>) -> NonZeroUsize {
    match threads {
        // An explicit 0 is clamped to a single worker
        Some(n) => NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN),
        None => NonZeroUsize::new(num_cpus::get().max(1)).unwrap_or(NonZeroUsize::MIN),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_search_results(result: &SearchOutput) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", result.total_matches)?;
    for m in &result.matches {
        writeln!(out, "{} {} {}", m.line_number, m.position, m.text)?;
    }
    out.flush()
}
