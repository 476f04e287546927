//! Command-line interface orchestration for the bmssp solver.
//!
//! The CLI offers a `run` command that loads a whitespace-separated edge
//! list, executes the bounded multi-source shortest-path solver from a
//! chosen source vertex, and reports reach and timing statistics.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bmssp_core::{Bmssp, BmsspBuilder, BmsspError, DistanceMap, Graph, GraphError};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "bmssp", about = "Run bounded multi-source shortest paths.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve single-source shortest paths over an edge-list graph.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a whitespace-separated edge list (`u v [w]`, one edge per
    /// line; `#` comments and blank lines are skipped).
    pub path: PathBuf,

    /// Source vertex for the shortest-path tree.
    #[arg(long, default_value_t = 0)]
    pub source: usize,

    /// Weight assigned to edges that omit the third column.
    #[arg(long = "default-weight", default_value_t = DEFAULT_EDGE_WEIGHT)]
    pub default_weight: f64,

    /// Override the base-case expansion capacity derived from the vertex
    /// count.
    #[arg(long = "base-capacity")]
    pub base_capacity: Option<usize>,

    /// Print the full distance map after the summary, one vertex per line.
    #[arg(long = "print-distances")]
    pub print_distances: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list line could not be parsed.
    #[error("failed to parse `{path}` line {line}: {message}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Description of the malformed token.
        message: String,
    },
    /// Graph construction rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Core solver orchestration failed.
    #[error(transparent)]
    Core(#[from] BmsspError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Path of the loaded edge list.
    pub graph_path: PathBuf,
    /// Number of vertices in the loaded graph.
    pub vertex_count: usize,
    /// Number of directed edges in the loaded graph.
    pub edge_count: usize,
    /// Source vertex the tree was rooted at.
    pub source: usize,
    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,
    /// Distance map produced by the solver.
    pub distances: DistanceMap,
    /// Whether to include the full distance map in rendered output.
    pub print_distances: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, parsing, or solving fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use bmssp_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 2.5\n1 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         source: 0,
///         default_weight: 1.0,
///         base_capacity: None,
///         print_distances: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.distances.reached_count(), 3);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let mut builder = BmsspBuilder::new();
    if let Some(capacity) = command.base_capacity {
        builder = builder.with_base_capacity(capacity);
    }
    let solver: Bmssp = builder.build()?;

    let reader = open_edge_list(&command.path)?;
    let graph = load_edge_list(reader, &command.path, command.default_weight)?;

    let started = Instant::now();
    let distances = solver.run(&graph, command.source)?;
    let elapsed = started.elapsed();

    Ok(ExecutionSummary {
        graph_path: command.path,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        source: command.source,
        elapsed,
        distances,
        print_distances: command.print_distances,
    })
}

fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses a whitespace-separated edge list into a [`Graph`].
///
/// Each line holds `u v` or `u v w`; lines starting with `#` and blank
/// lines are skipped. Edges without a weight column use `default_weight`.
///
/// # Errors
/// Returns [`CliError`] when reading fails, a line holds a single token,
/// or an endpoint or weight does not parse.
pub fn load_edge_list(
    reader: impl BufRead,
    path: &Path,
    default_weight: f64,
) -> Result<Graph, CliError> {
    let mut graph = Graph::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_number = index + 1;
        let mut tokens = trimmed.split_whitespace();
        let source_vertex = parse_token(tokens.next(), "source vertex", path, line_number)?;
        let target_vertex = parse_token(tokens.next(), "target vertex", path, line_number)?;
        let weight = match tokens.next() {
            Some(raw) => parse_weight(raw, path, line_number)?,
            None => default_weight,
        };
        graph.add_edge(source_vertex, target_vertex, weight)?;
    }
    Ok(graph)
}

fn parse_token(
    raw: Option<&str>,
    what: &str,
    path: &Path,
    line: usize,
) -> Result<usize, CliError> {
    let raw = raw.ok_or_else(|| CliError::Parse {
        path: path.to_path_buf(),
        line,
        message: format!("missing {what}"),
    })?;
    raw.parse().map_err(|_| CliError::Parse {
        path: path.to_path_buf(),
        line,
        message: format!("invalid {what} `{raw}`"),
    })
}

fn parse_weight(raw: &str, path: &Path, line: usize) -> Result<f64, CliError> {
    raw.parse().map_err(|_| CliError::Parse {
        path: path.to_path_buf(),
        line,
        message: format!("invalid weight `{raw}`"),
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.graph_path.display())?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "reached: {}", summary.distances.reached_count())?;
    writeln!(writer, "elapsed: {:.6}s", summary.elapsed.as_secs_f64())?;
    if summary.print_distances {
        for (vertex, distance) in summary.distances.as_slice().iter().enumerate() {
            if distance.is_finite() {
                writeln!(writer, "{vertex}\t{distance}")?;
            } else {
                writeln!(writer, "{vertex}\tunreachable")?;
            }
        }
    }
    Ok(())
}
