//! Maze files and the built-in maze.
//!
//! This module contains the [`NamedMaze`] container pairing a parsed maze with the name it was
//! loaded under, along with the functions that read `.labmap` files from disk.

use std::{ffi::OsString, fs, path::Path};

use color_eyre::eyre::{eyre, OptionExt as _, Result, WrapErr as _};
use log::{debug, warn};

use crate::maze::Maze;

/// Extension of maze files.
const MAZE_EXTENSION: &str = ".labmap";

/// Maze paired with the name it is displayed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedMaze {
    /// Display name of the maze.
    ///
    /// This is the file name without the `.labmap` extension.
    pub key: String,
    /// The parsed and validated maze.
    pub maze: Maze,
}

impl Default for NamedMaze {
    fn default() -> Self {
        Self::new(OsString::from("Default.labmap"), DEFAULT_MAZE)
            .expect("failed to build the default maze")
    }
}

impl NamedMaze {
    /// Builds a named maze from a file name and the maze text.
    ///
    /// The maze must parse and its start and goal must satisfy [`Maze::validate`].
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The `OsString` cannot be converted to a string slice
    /// - The file name doesn't end in the ".labmap" extension
    /// - The text is not a well-formed maze
    pub fn new(key: OsString, data: &str) -> Result<Self> {
        let file_name = key
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?;
        let key = file_name
            .strip_suffix(MAZE_EXTENSION)
            .ok_or_else(|| eyre!("file name {file_name:?} lacks the {MAZE_EXTENSION} extension"))?
            .to_owned();

        let maze: Maze = data
            .parse()
            .wrap_err_with(|| format!("failed to parse maze {key:?}"))?;
        maze.validate()
            .wrap_err_with(|| format!("maze {key:?} is not solvable as given"))?;

        Ok(Self { key, maze })
    }
}

/// Reads a single maze file.
///
/// # Errors
///
/// This function may return errors if the file cannot be read, if it lacks the `.labmap`
/// extension or if its contents are not a valid maze.
pub fn load_maze(path: &Path) -> Result<NamedMaze> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("{} does not name a file", path.display()))?;
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    debug!("loaded {} bytes from {}", contents.len(), path.display());
    NamedMaze::new(file_name.to_owned(), &contents)
}

/// Scans a directory for `.labmap` files and loads them, sorted by name.
///
/// Subdirectories are not descended into. Files that fail to load are skipped with a warning so
/// that one broken maze does not hide the others.
///
/// # Errors
///
/// This function may return errors if the directory or one of its entries cannot be read.
pub fn fetch_mazes(dir: &Path) -> Result<Vec<NamedMaze>> {
    let mut mazes = Vec::new();
    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let is_maze = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MAZE_EXTENSION));
        if !is_maze {
            continue;
        }

        match load_maze(&entry.path()) {
            Ok(maze) => mazes.push(maze),
            Err(err) => warn!("skipping {}: {err:#}", entry.path().display()),
        }
    }

    mazes.sort_by(|left, right| left.key.cmp(&right.key));
    Ok(mazes)
}

/// Maze solved when no file is given.
const DEFAULT_MAZE: &str = "\
#####################
#S....#.......#.....#
#.###.#.#####.#.###.#
#.#...#.#...#...#...#
#.#.###.#.#.#####.###
#.#.....#.#.......#.#
#.#######.#######.#.#
#.........#.....#...#
#########.#.###.###.#
#.........#...#....G#
#####################";

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{grid::Coordinate, search};

    /// Directory holding the maze fixtures shipped with the crate.
    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("mazes")
    }

    #[test]
    fn test_default_maze() {
        let named = NamedMaze::default();

        assert_eq!(named.key, "Default");
        assert_eq!(named.maze.width(), 21, "default maze has 21 columns");
        assert_eq!(named.maze.height(), 11, "default maze has 11 rows");
        assert_eq!(named.maze.start(), Coordinate::new(1, 1), "start near the top-left");
        assert_eq!(named.maze.goal(), Coordinate::new(19, 9), "goal near the bottom-right");

        let outcome = search::find_shortest_path(&named.maze).expect("default maze is valid");
        assert_eq!(
            outcome.path().map(crate::grid::Path::steps),
            Some(34),
            "default maze should be solvable in 34 steps"
        );
    }

    #[test]
    fn test_named_maze_valid_input() {
        let named = NamedMaze::new(OsString::from("test.labmap"), "2222\n2134\n2222")
            .expect("failed to create named maze");

        assert_eq!(named.key, "test");
        assert_eq!(named.maze.goal(), Coordinate::new(3, 1), "goal is the '4' cell");
    }

    #[test]
    fn test_named_maze_missing_extension() {
        let result = NamedMaze::new(OsString::from("noextension"), "S.G");
        assert!(result.is_err(), "file names without extension are rejected");
    }

    #[test]
    fn test_named_maze_wrong_extension() {
        let result = NamedMaze::new(OsString::from("test.txt"), "S.G");
        assert!(result.is_err(), "file names with another extension are rejected");
    }

    #[test]
    fn test_named_maze_multiple_extensions() {
        let named = NamedMaze::new(OsString::from("test.backup.labmap"), "S.G")
            .expect("failed to create named maze");

        assert_eq!(named.key, "test.backup");
    }

    #[test]
    fn test_named_maze_invalid_contents() {
        let result = NamedMaze::new(OsString::from("bad.labmap"), "S.x\n..G");
        let err = result.expect_err("invalid symbols should be rejected");

        assert!(
            format!("{err:#}").contains("invalid symbol 'x'"),
            "error chain should mention the offending symbol, got {err:#}"
        );
    }

    #[test]
    fn test_load_maze_from_fixture() {
        let named = load_maze(&fixtures().join("corridor.labmap")).expect("fixture should load");

        assert_eq!(named.key, "corridor");
        assert_eq!(named.maze.start(), Coordinate::new(1, 1), "start is the '1' cell");
    }

    #[test]
    fn test_load_maze_missing_file() {
        let result = load_maze(&fixtures().join("missing.labmap"));
        assert!(result.is_err(), "missing files cannot be loaded");
    }

    #[test]
    fn test_fetch_mazes_skips_invalid_files() {
        let mazes = fetch_mazes(&fixtures()).expect("fixture directory should be readable");
        let keys: Vec<&str> = mazes.iter().map(|named| named.key.as_str()).collect();

        assert_eq!(
            keys,
            vec!["corridor", "detour", "walled"],
            "valid mazes should be listed by name and the broken one skipped"
        );
    }

    #[test]
    fn test_fetch_mazes_missing_directory() {
        let result = fetch_mazes(&fixtures().join("missing"));
        assert!(result.is_err(), "missing directories cannot be scanned");
    }
}
