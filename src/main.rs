use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use depdot::export::{self, ExportFormat};
use depdot::graph::DependencyGraph;
use depdot::parser;

#[derive(Parser)]
#[command(name = "depdot")]
#[command(version)]
#[command(about = "Convert a dependency description into Graphviz DOT", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a description and write it out (DOT by default)
    Render {
        /// Input file; reads stdin when omitted or `-`
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file; writes to stdout when omitted
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format: dot or summary
        #[arg(short, long, default_value_t = ExportFormat::Dot)]
        format: ExportFormat,
    },
    /// Print the parsed nodes, edges and options
    Show {
        /// Input file; reads stdin when omitted or `-`
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            format,
        }) => {
            let graph = load(input.as_deref())?;
            write_output(output.as_deref(), format, &graph)
        }
        Some(Commands::Show { input }) => {
            let graph = load(input.as_deref())?;
            write_output(None, ExportFormat::Summary, &graph)
        }
        Some(Commands::Version) => {
            println!("depdot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("depdot - dependency descriptions to Graphviz DOT");
            println!("Run 'depdot render <file>' to print DOT for a description");
            println!("Run 'depdot --help' for more information");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn load(input: Option<&Path>) -> Result<DependencyGraph> {
    match input {
        Some(path) if path != Path::new("-") => parser::parse_file(path)
            .with_context(|| format!("failed to load {}", path.display())),
        _ => {
            let lines = io::stdin()
                .lock()
                .lines()
                .collect::<io::Result<Vec<String>>>()
                .context("failed to read stdin")?;
            parser::parse_lines(&lines).context("failed to parse stdin")
        }
    }
}

fn write_output(output: Option<&Path>, format: ExportFormat, graph: &DependencyGraph) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::export(format, graph, &mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::debug!(path = %path.display(), %format, "wrote output");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(format, graph, &mut writer)
                .and_then(|_| writer.flush())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}
