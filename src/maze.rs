//! Maze grid definition, validation and text format.
//!
//! This module contains the [`Maze`] type, a rectangular grid of passable and blocked cells with a
//! start and a goal, along with the parser for the plain-text maze format and its [`Display`]
//! counterpart.
//!
//! [`Display`]: fmt::Display

use std::{collections::HashSet, fmt, str::FromStr};

use crate::{
    error::{ConfigurationError, ParseError},
    grid::{Cell, Coordinate, Direction, Path},
};

/// Rectangular maze with a designated start and goal.
///
/// The grid is stored row-major and its dimensions are fixed at construction. Shape errors are
/// rejected by [`Maze::new`], while the start and goal preconditions are checked by
/// [`Maze::validate`], which every search runs before touching the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell storage of exactly `width * height` cells.
    cells: Vec<Cell>,
    /// Cell the search starts from.
    start: Coordinate,
    /// Cell the search looks for.
    goal: Coordinate,
}

impl Maze {
    /// Builds a maze from row-major cells.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - Either dimension is zero
    /// - The dimensions overflow the addressable cell count
    /// - The number of cells differs from `width * height`
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self, ConfigurationError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(ConfigurationError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    /// Builds a maze in which every cell is passable.
    ///
    /// # Errors
    ///
    /// This function returns an error if either dimension is zero or if the dimensions overflow
    /// the addressable cell count.
    pub fn open(
        width: usize,
        height: usize,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self, ConfigurationError> {
        let count = cell_count(width, height)?;
        Self::new(width, height, vec![Cell::Passable; count], start, goal)
    }

    /// Returns the maze with the given cells turned into walls.
    ///
    /// Coordinates outside the grid are ignored.
    #[must_use]
    pub fn with_blocked<I>(mut self, blocked: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        for coordinate in blocked {
            if let Some(cell) = self.index(coordinate).and_then(|idx| self.cells.get_mut(idx)) {
                *cell = Cell::Blocked;
            }
        }

        self
    }

    /// Checks that the start and the goal are in-bounds and passable.
    ///
    /// # Errors
    ///
    /// This function returns the first violated precondition, checking the start before the goal
    /// and bounds before passability.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.cell(self.start) {
            None => return Err(ConfigurationError::StartOutOfBounds(self.start)),
            Some(Cell::Blocked) => return Err(ConfigurationError::StartBlocked(self.start)),
            Some(Cell::Passable) => {}
        }
        match self.cell(self.goal) {
            None => Err(ConfigurationError::GoalOutOfBounds(self.goal)),
            Some(Cell::Blocked) => Err(ConfigurationError::GoalBlocked(self.goal)),
            Some(Cell::Passable) => Ok(()),
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell the search starts from.
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Cell the search looks for.
    pub const fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Returns the cell at the given coordinate, or [`None`] when it lies outside the grid.
    pub fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index(coordinate)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Checks whether the coordinate is in-bounds and passable.
    pub fn is_passable(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate).is_some_and(Cell::is_passable)
    }

    /// Enumerates the passable, in-bounds 4-neighbors of a coordinate.
    ///
    /// Neighbors come in the order of [`Direction::ALL`], which is what makes the search
    /// deterministic.
    pub fn neighbors(&self, coordinate: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| coordinate.step(direction))
            .filter(move |neighbor| self.is_passable(*neighbor))
    }

    /// Wraps the maze so that it displays with the given path drawn over it.
    pub const fn annotated<'maze>(&'maze self, path: &'maze Path) -> Annotated<'maze> {
        Annotated { maze: self, path }
    }

    /// Row-major index of an in-bounds coordinate.
    const fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if coordinate.x < self.width && coordinate.y < self.height {
            Some(coordinate.y * self.width + coordinate.x)
        } else {
            None
        }
    }

    /// Writes the grid in the ASCII alphabet, drawing the given coordinates as path cells.
    fn write_grid(
        &self,
        f: &mut fmt::Formatter<'_>,
        path: &HashSet<Coordinate>,
    ) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                let coordinate = Coordinate::new(x, y);
                let symbol = if coordinate == self.start {
                    'S'
                } else if coordinate == self.goal {
                    'G'
                } else if !cell.is_passable() {
                    '#'
                } else if path.contains(&coordinate) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &HashSet::new())
    }
}

/// A maze displayed together with a path through it.
///
/// Path cells other than the start and the goal are drawn as `*`.
#[derive(Clone, Copy, Debug)]
pub struct Annotated<'maze> {
    /// Maze to display.
    maze: &'maze Maze,
    /// Path drawn over the maze.
    path: &'maze Path,
}

impl fmt::Display for Annotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: HashSet<Coordinate> = self.path.iter().copied().collect();
        self.maze.write_grid(f, &path)
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    /// Parses the plain-text maze format.
    ///
    /// Each line is a row. Both the digit alphabet (`1` start, `2` wall, `3` open, `4` goal) and
    /// the ASCII alphabet (`S`, `#`, `.`, `G`) are accepted and may be mixed.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;

        for (row, line) in text.lines().enumerate() {
            let line = line.trim_end();
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            for (column, symbol) in line.chars().enumerate() {
                let here = Coordinate::new(column, row);
                let cell = match symbol {
                    '1' | 'S' => {
                        if start.replace(here).is_some() {
                            return Err(ParseError::DuplicateStart(here));
                        }
                        Cell::Passable
                    }
                    '4' | 'G' => {
                        if goal.replace(here).is_some() {
                            return Err(ParseError::DuplicateGoal(here));
                        }
                        Cell::Passable
                    }
                    '3' | '.' => Cell::Passable,
                    '2' | '#' => Cell::Blocked,
                    _ => {
                        return Err(ParseError::InvalidSymbol {
                            row,
                            column,
                            symbol,
                        })
                    }
                };
                cells.push(cell);
            }
            height = row + 1;
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let goal = goal.ok_or(ParseError::MissingGoal)?;

        Ok(Self::new(
            width.unwrap_or_default(),
            height,
            cells,
            start,
            goal,
        )?)
    }
}

/// Number of cells of a `width` by `height` grid.
fn cell_count(width: usize, height: usize) -> Result<usize, ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::EmptyGrid);
    }

    width
        .checked_mul(height)
        .ok_or(ConfigurationError::DimensionsOverflow { width, height })
}
