//! Command-line interface of the maze solver.
//!
//! This module contains the argument definitions parsed by [`clap`], the logger setup and the
//! dispatch of each subcommand. Output is written to a caller-provided writer so the binary can
//! hand in standard output while the tests capture it in memory.

use std::{
    io::Write,
    path::PathBuf,
    process::{ExitCode, Termination},
    time::Duration,
};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use env_logger::Env;
use log::info;

use crate::{
    loader::{self, NamedMaze},
    search::{self, Budget, Outcome},
};

/// Exit code reported when the goal cannot be reached.
const UNREACHABLE_EXIT_CODE: u8 = 2;

/// Exit code reported when the search budget runs out.
const CANCELLED_EXIT_CODE: u8 = 3;

/// Breadth-first grid maze solver.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace); `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a maze and print its shortest path.
    Solve(SolveArgs),
    /// List the valid maze files in a directory.
    List(ListArgs),
}

/// Arguments of the `solve` subcommand.
#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Maze file to solve; the built-in maze is solved when omitted.
    pub file: Option<PathBuf>,
    /// Cancel the search once this many cells have been expanded.
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,
    /// Cancel the search once this many milliseconds have elapsed.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
    /// Print the cells in the order the search expanded them.
    #[arg(long)]
    pub trace: bool,
    /// How to print a found path.
    #[arg(long, value_enum, default_value_t = Format::Coords)]
    pub format: Format,
}

impl SolveArgs {
    /// Builds the search budget from the cancellation flags.
    fn budget(&self) -> Budget {
        let mut budget = Budget::unlimited();
        if let Some(max_expansions) = self.max_expansions {
            budget = budget.with_max_expansions(max_expansions);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            budget = budget.with_timeout(Duration::from_millis(timeout_ms));
        }

        budget
    }
}

/// Arguments of the `list` subcommand.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to scan for `.labmap` files.
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

/// Output format of a found path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `(x, y)` coordinate per line, start first.
    #[default]
    Coords,
    /// The maze grid with the path drawn as `*`.
    Grid,
}

/// Result of a command that ran to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The command succeeded; for `solve`, a path was found.
    Success,
    /// The goal of the solved maze cannot be reached.
    Unreachable,
    /// The search budget ran out before reachability was decided.
    Cancelled,
}

impl Termination for Status {
    fn report(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Unreachable => ExitCode::from(UNREACHABLE_EXIT_CODE),
            Self::Cancelled => ExitCode::from(CANCELLED_EXIT_CODE),
        }
    }
}

impl Cli {
    /// Installs the global logger.
    ///
    /// The level is picked from the verbosity flag unless `RUST_LOG` is set.
    ///
    /// # Errors
    ///
    /// This function returns an error if a global logger was already installed.
    pub fn init_logging(&self) -> Result<()> {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init()?;

        Ok(())
    }

    /// Runs the parsed subcommand, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// This function may return errors from loading mazes, from invalid maze configurations or
    /// from writing the output.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Status> {
        match &self.command {
            Command::Solve(args) => solve(args, out),
            Command::List(args) => list(args, out),
        }
    }
}

/// Solves a maze file or the built-in maze and prints the outcome.
fn solve<W: Write>(args: &SolveArgs, out: &mut W) -> Result<Status> {
    let named = match &args.file {
        Some(path) => loader::load_maze(path)?,
        None => NamedMaze::default(),
    };
    info!(
        "solving maze {:?} ({}x{})",
        named.key,
        named.maze.width(),
        named.maze.height()
    );

    let budget = args.budget();
    let outcome = if args.trace {
        let exploration = search::explore(&named.maze, budget)?;
        write!(out, "expanded {} cells:", exploration.expanded.len())?;
        for coordinate in &exploration.expanded {
            write!(out, " {coordinate}")?;
        }
        writeln!(out)?;
        exploration.outcome
    } else {
        search::find_shortest_path_within(&named.maze, budget)?
    };

    match outcome {
        Outcome::Found(path) => {
            writeln!(out, "found path of {} steps", path.steps())?;
            match args.format {
                Format::Coords => {
                    for coordinate in &path {
                        writeln!(out, "{coordinate}")?;
                    }
                }
                Format::Grid => writeln!(out, "{}", named.maze.annotated(&path))?,
            }
            Ok(Status::Success)
        }
        Outcome::Unreachable => {
            writeln!(out, "goal unreachable")?;
            Ok(Status::Unreachable)
        }
        Outcome::Cancelled => {
            writeln!(out, "search cancelled")?;
            Ok(Status::Cancelled)
        }
    }
}

/// Prints one line per valid maze file in a directory.
fn list<W: Write>(args: &ListArgs, out: &mut W) -> Result<Status> {
    let mazes = loader::fetch_mazes(&args.dir)?;
    info!("found {} mazes in {}", mazes.len(), args.dir.display());

    for NamedMaze { key, maze } in &mazes {
        writeln!(
            out,
            "{key} {}x{} {} -> {}",
            maze.width(),
            maze.height(),
            maze.start(),
            maze.goal()
        )?;
    }

    Ok(Status::Success)
}
