//! CLI entry point for foldyy

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use foldyy::tree::DEFAULT_MAX_DEPTH;
use foldyy::{
    FolderTree, HtmlFormatter, OutputConfig, ScanError, TextFormatter, TreeWalker, WalkerConfig,
    print_json, to_json,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

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
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foldyy")]
#[command(about = "Display folder tree structure with file and folder sizes")]
#[command(version)]
#[command(after_help = "Examples:
  foldyy /path/to/folder
  foldyy /path/to/folder --max-depth 5
  foldyy /path/to/folder --no-sizes
  foldyy /path/to/folder --html
  foldyy /path/to/folder --html --output tree.html
  foldyy /path/to/folder --html --temp")]
struct Args {
    /// Path to the folder to display
    folder: PathBuf,

    /// Maximum depth to scan
    #[arg(short = 'd', long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not display file and folder sizes
    #[arg(long = "no-sizes")]
    no_sizes: bool,

    /// Generate HTML output with collapsible folders
    #[arg(long = "html", conflicts_with = "json")]
    html: bool,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with_all = ["output_dir", "temp"])]
    output: Option<PathBuf>,

    /// Write output to a uniquely named file inside DIR
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "temp")]
    output_dir: Option<PathBuf>,

    /// Write output to a uniquely named file in the system temp directory
    #[arg(long = "temp")]
    temp: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print bare messages only (errors and written file paths)
    #[arg(long = "porcelain")]
    porcelain: bool,

    /// Log skipped entries and other details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Text,
    Html,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Html => "html",
            Format::Json => "json",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Format::Text => "Tree",
            Format::Html => "HTML",
            Format::Json => "JSON",
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("cannot write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(&args) {
        if args.porcelain {
            eprintln!("{}", e);
        } else {
            eprintln!("foldyy: {}", e);
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let format = if args.html {
        Format::Html
    } else if args.json {
        Format::Json
    } else {
        Format::Text
    };

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.max_depth,
        ignore_patterns: args.ignore.clone(),
    });

    // Root checks happen here, before any output file is touched
    let tree = walker.scan(&args.folder).inspect_err(|err| {
        debug!(path = %err.path().display(), "root check failed");
    })?;
    debug!(
        root = %args.folder.display(),
        entries = tree.entries.len(),
        total = tree.total_size,
        "scan finished"
    );

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        show_sizes: !args.no_sizes,
    };

    let Some(path) = output_path(args, &tree, format) else {
        return print_to_stdout(&tree, format, output_config);
    };

    let content = match format {
        Format::Text => TextFormatter::new(output_config).format(&tree),
        Format::Html => HtmlFormatter::new(output_config).format(&tree),
        Format::Json => to_json(&tree)?,
    };
    write_file(&path, &content)?;
    info!(path = %path.display(), "output written");

    if args.porcelain {
        println!("{}", path.display());
    } else {
        println!("{} file generated: {}", format.label(), path.display());
    }
    Ok(())
}

fn print_to_stdout(tree: &FolderTree, format: Format, config: OutputConfig) -> Result<(), CliError> {
    match format {
        Format::Text => TextFormatter::new(config).print(tree)?,
        Format::Html => print!("{}", HtmlFormatter::new(config).format(tree)),
        Format::Json => print_json(tree)?,
    }
    Ok(())
}

/// Resolve where output goes; `None` means stdout.
fn output_path(args: &Args, tree: &FolderTree, format: Format) -> Option<PathBuf> {
    if let Some(ref path) = args.output {
        return Some(path.clone());
    }

    let dir = match (&args.output_dir, args.temp) {
        (Some(dir), _) => dir.clone(),
        (None, true) => std::env::temp_dir(),
        (None, false) => return None,
    };
    Some(dir.join(unique_file_name(tree, format)))
}

/// `foldyy_<basename>_<unique-id>.<ext>`
fn unique_file_name(tree: &FolderTree, format: Format) -> String {
    let base = fs::canonicalize(&tree.root)
        .ok()
        .and_then(|p| p.file_name().map(|s| s.to_string_lossy().to_string()))
        .map(|name| sanitize_file_stem(&name))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "root".to_string());

    format!(
        "foldyy_{}_{}.{}",
        base,
        Uuid::new_v4().simple(),
        format.extension()
    )
}

fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
