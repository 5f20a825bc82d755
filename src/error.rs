//! Error types for maze construction and parsing.
//!
//! An unreachable goal is not an error and has no variant here; it is reported as a search
//! outcome instead.

use std::{error, fmt};

use crate::grid::Coordinate;

/// Invalid maze configuration.
///
/// These are caller bugs rather than search-time conditions, so they are surfaced immediately and
/// never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The grid has a zero width or height.
    EmptyGrid,
    /// The number of cells implied by the dimensions does not fit in memory.
    DimensionsOverflow {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The number of cells does not match the grid dimensions.
    CellCountMismatch {
        /// Number of cells implied by the dimensions.
        expected: usize,
        /// Number of cells actually provided.
        found: usize,
    },
    /// The start lies outside the grid.
    StartOutOfBounds(Coordinate),
    /// The goal lies outside the grid.
    GoalOutOfBounds(Coordinate),
    /// The start lies on a blocked cell.
    StartBlocked(Coordinate),
    /// The goal lies on a blocked cell.
    GoalBlocked(Coordinate),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "maze grid must have a non-zero width and height"),
            Self::DimensionsOverflow { width, height } => {
                write!(f, "maze grid of {width}x{height} cells is too large")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "maze grid expects {expected} cells but {found} were given")
            }
            Self::StartOutOfBounds(coordinate) => {
                write!(f, "start {coordinate} lies outside the maze")
            }
            Self::GoalOutOfBounds(coordinate) => {
                write!(f, "goal {coordinate} lies outside the maze")
            }
            Self::StartBlocked(coordinate) => write!(f, "start {coordinate} is a blocked cell"),
            Self::GoalBlocked(coordinate) => write!(f, "goal {coordinate} is a blocked cell"),
        }
    }
}

impl error::Error for ConfigurationError {}

/// Malformed maze text.
///
/// Rows and columns are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The text holds no rows.
    Empty,
    /// A row differs in length from the first one.
    RaggedRow {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A symbol outside the maze alphabet.
    InvalidSymbol {
        /// Row of the symbol.
        row: usize,
        /// Column of the symbol.
        column: usize,
        /// The symbol itself.
        symbol: char,
    },
    /// No start symbol was found.
    MissingStart,
    /// No goal symbol was found.
    MissingGoal,
    /// A second start symbol was found at the given coordinate.
    DuplicateStart(Coordinate),
    /// A second goal symbol was found at the given coordinate.
    DuplicateGoal(Coordinate),
    /// The parsed grid was rejected by maze construction.
    Configuration(ConfigurationError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze text holds no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells but the first row has {expected}"
            ),
            Self::InvalidSymbol {
                row,
                column,
                symbol,
            } => write!(f, "invalid symbol {symbol:?} at row {row}, column {column}"),
            Self::MissingStart => write!(f, "maze has no start cell"),
            Self::MissingGoal => write!(f, "maze has no goal cell"),
            Self::DuplicateStart(coordinate) => {
                write!(f, "maze has a second start cell at {coordinate}")
            }
            Self::DuplicateGoal(coordinate) => {
                write!(f, "maze has a second goal cell at {coordinate}")
            }
            Self::Configuration(err) => write!(f, "invalid maze: {err}"),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for ParseError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_messages() {
        assert_eq!(
            ConfigurationError::StartBlocked(Coordinate::new(1, 2)).to_string(),
            "start (1, 2) is a blocked cell",
            "message should name the start coordinate"
        );
        assert_eq!(
            ConfigurationError::CellCountMismatch {
                expected: 9,
                found: 8
            }
            .to_string(),
            "maze grid expects 9 cells but 8 were given",
            "message should report both cell counts"
        );
    }

    #[test]
    fn test_parse_error_source() {
        let err = ParseError::from(ConfigurationError::EmptyGrid);

        assert!(
            error::Error::source(&err).is_some(),
            "wrapped configuration errors should be exposed as the source"
        );
        assert!(
            error::Error::source(&ParseError::MissingGoal).is_none(),
            "plain parse errors have no source"
        );
    }
}
