//! Grid primitives shared by the maze and the search.
//!
//! This module contains the coordinate type used to address maze cells, the four movement
//! directions with their fixed enumeration order, the cell kinds and the path type returned by a
//! successful search.

use std::{fmt, slice};

/// Cell address within a maze grid.
///
/// The `x` component is the column and the `y` component is the row, with `(0, 0)` being the
/// top-left cell of the grid. Equality is value-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Builds a coordinate from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate one step away in the given direction.
    ///
    /// Steps that would leave the non-negative quadrant yield [`None`]. The upper bounds are not
    /// known at this level and are checked by the maze.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self::new(x, y))
    }

    /// Checks whether both coordinates differ by one step along exactly one axis.
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);

        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction between 4-adjacent cells.
///
/// The declaration order is also the neighbor enumeration order of the search, which makes tie
/// breaking between equally short paths reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the row above.
    Up,
    /// Towards the next column.
    Right,
    /// Towards the row below.
    Down,
    /// Towards the previous column.
    Left,
}

impl Direction {
    /// Every direction, in enumeration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Column and row delta of a single step.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Kind of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A path may travel through the cell.
    Passable,
    /// The cell is a wall.
    Blocked,
}

impl Cell {
    /// Checks whether a path may travel through the cell.
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }
}

/// Ordered sequence of coordinates from a maze start to its goal, both inclusive.
///
/// Paths are only built by the search, which guarantees that consecutive coordinates are
/// 4-adjacent, that no coordinate repeats and that the number of steps is minimal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Coordinates of the path, start first.
    coordinates: Vec<Coordinate>,
}

impl Path {
    /// Wraps the coordinates produced by path reconstruction.
    pub(crate) const fn from_coordinates(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Coordinates of the path, start first.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of coordinates in the path, counting both ends.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Checks whether the path holds no coordinates at all.
    ///
    /// Paths returned by the search always contain at least the start.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Number of moves between the start and the goal.
    pub fn steps(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Iterates over the coordinates, start first.
    pub fn iter(&self) -> slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    /// Checks whether the path contains the given coordinate.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }
}

impl<'path> IntoIterator for &'path Path {
    type Item = &'path Coordinate;
    type IntoIter = slice::Iter<'path, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, coordinate) in self.coordinates.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{coordinate}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_in_every_direction() {
        let origin = Coordinate::new(1, 1);

        assert_eq!(
            origin.step(Direction::Up),
            Some(Coordinate::new(1, 0)),
            "up should decrease the row"
        );
        assert_eq!(
            origin.step(Direction::Right),
            Some(Coordinate::new(2, 1)),
            "right should increase the column"
        );
        assert_eq!(
            origin.step(Direction::Down),
            Some(Coordinate::new(1, 2)),
            "down should increase the row"
        );
        assert_eq!(
            origin.step(Direction::Left),
            Some(Coordinate::new(0, 1)),
            "left should decrease the column"
        );
    }

    #[test]
    fn test_step_off_the_top_left_corner() {
        let corner = Coordinate::new(0, 0);

        assert_eq!(corner.step(Direction::Up), None, "no row above the first one");
        assert_eq!(
            corner.step(Direction::Left),
            None,
            "no column before the first one"
        );
    }

    #[test]
    fn test_is_adjacent() {
        let cell = Coordinate::new(2, 2);

        assert!(cell.is_adjacent(Coordinate::from((2, 1))), "cell above is adjacent");
        assert!(cell.is_adjacent(Coordinate::new(3, 2)), "cell right is adjacent");
        assert!(
            !cell.is_adjacent(Coordinate::new(3, 3)),
            "diagonal cells are not adjacent"
        );
        assert!(!cell.is_adjacent(cell), "a cell is not adjacent to itself");
        assert!(
            !cell.is_adjacent(Coordinate::new(2, 4)),
            "cells two rows apart are not adjacent"
        );
    }

    #[test]
    fn test_direction_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left
            ],
            "neighbor enumeration order must stay fixed"
        );
    }

    #[test]
    fn test_path_accessors_and_display() {
        let path = Path::from_coordinates(vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ]);

        assert_eq!(path.len(), 3, "path holds three coordinates");
        assert_eq!(path.steps(), 2, "three coordinates make two steps");
        assert!(!path.is_empty(), "path is not empty");
        assert!(path.contains(Coordinate::new(1, 0)), "middle cell is on the path");
        assert_eq!(
            path.to_string(),
            "(0, 0) -> (1, 0) -> (1, 1)",
            "display should chain coordinates"
        );
        assert_eq!(
            (&path).into_iter().count(),
            3,
            "borrowed iteration should yield every coordinate"
        );
    }
}
