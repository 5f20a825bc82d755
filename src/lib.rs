//! Breadth-first shortest-path search over rectangular grid mazes.
//!
//! A [`Maze`] is a grid of passable and blocked cells with a start and a goal. The search explores
//! 4-adjacent passable cells in breadth-first order, marking each cell visited as it is enqueued,
//! and reports either a shortest [`Path`], an unreachable goal, or a cancellation when a [`Budget`]
//! runs out.
//!
//! The [`Cli`] type drives the `mazesearch` binary, which solves `.labmap` maze files or a
//! built-in maze and lists the maze files found in a directory.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![cfg_attr(
    test,
    expect(
        unused_crate_dependencies,
        reason = "The dev-dependencies are used by the integration tests."
    )
)]

mod cli;
mod error;
mod grid;
mod loader;
mod maze;
mod search;

pub use cli::{Cli, Command, Format, ListArgs, SolveArgs, Status};
pub use error::{ConfigurationError, ParseError};
pub use grid::{Cell, Coordinate, Direction, Path};
pub use loader::{fetch_mazes, load_maze, NamedMaze};
pub use maze::{Annotated, Maze};
pub use search::{
    explore, find_shortest_path, find_shortest_path_within, Budget, Exploration, Outcome,
};
