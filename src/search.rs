//! Breadth-first shortest-path search.
//!
//! This module contains the maze search itself, the optional budget that lets interactive callers
//! bound how long a search may run, and the exploration record that captures the order in which
//! cells were expanded so a caller can replay the search step by step.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    time::{Duration, Instant},
};

use log::{debug, trace};

use crate::{
    error::ConfigurationError,
    grid::{Coordinate, Path},
    maze::Maze,
};

/// Result of a search that ran on a valid maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A shortest path from the start to the goal.
    Found(Path),
    /// The frontier was exhausted without reaching the goal.
    Unreachable,
    /// The budget ran out before reachability was decided.
    Cancelled,
}

impl Outcome {
    /// Returns the path of a successful search.
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unreachable | Self::Cancelled => None,
        }
    }
}

/// Limits on the work a single search may perform.
///
/// The budget is checked once per dequeue, before the dequeued cell is expanded. The default
/// budget is unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Budget {
    /// Maximum number of cells the search may expand.
    max_expansions: Option<usize>,
    /// Point in time after which the search gives up.
    deadline: Option<Instant>,
}

impl Budget {
    /// Budget that never cancels a search.
    pub const fn unlimited() -> Self {
        Self {
            max_expansions: None,
            deadline: None,
        }
    }

    /// Caps the number of cells the search may expand.
    #[must_use]
    pub const fn with_max_expansions(self, max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    /// Cancels the search once the given instant has passed.
    #[must_use]
    pub const fn with_deadline(self, deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..self
        }
    }

    /// Cancels the search once the given time has elapsed from now.
    ///
    /// A timeout too large to be represented leaves the budget without a deadline.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Checks whether a search that already expanded `expanded` cells must stop.
    fn is_exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Outcome of a search along with the cells it expanded, in expansion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration {
    /// Result of the search.
    pub outcome: Outcome,
    /// Every dequeued and expanded cell, in order, including the goal when found.
    pub expanded: Vec<Coordinate>,
}

/// Transient bookkeeping of a single search call.
struct SearchState {
    /// Discovered cells pending expansion, in discovery order.
    frontier: VecDeque<Coordinate>,
    /// Cells already enqueued at some point.
    visited: HashSet<Coordinate>,
    /// Cell each visited cell was first reached from. The start has no entry.
    predecessors: HashMap<Coordinate, Coordinate>,
    /// Number of cells expanded so far.
    expanded: usize,
}

impl SearchState {
    /// Seeds the frontier with the start.
    fn new(start: Coordinate) -> Self {
        Self {
            frontier: VecDeque::from([start]),
            visited: HashSet::from([start]),
            predecessors: HashMap::new(),
            expanded: 0,
        }
    }

    /// Enqueues a neighbor unless it was already visited.
    ///
    /// Cells are marked visited when enqueued, so each cell enters the frontier at most once.
    fn discover(&mut self, neighbor: Coordinate, from: Coordinate) {
        if self.visited.insert(neighbor) {
            let _ = self.predecessors.insert(neighbor, from);
            self.frontier.push_back(neighbor);
        }
    }

    /// Follows predecessor links from the goal back to the start.
    fn reconstruct(&self, start: Coordinate, goal: Coordinate) -> Path {
        let mut coordinates = vec![goal];
        let mut current = goal;
        while current != start {
            let Some(&previous) = self.predecessors.get(&current) else {
                break;
            };
            coordinates.push(previous);
            current = previous;
        }
        coordinates.reverse();

        Path::from_coordinates(coordinates)
    }
}

/// Finds a shortest path from the maze start to its goal.
///
/// The search is a breadth-first traversal over 4-adjacent passable cells with neighbors taken in
/// the fixed up, right, down, left order, so the same maze always yields the same path.
///
/// # Errors
///
/// This function returns an error if the start or the goal is out of bounds or blocked.
pub fn find_shortest_path(maze: &Maze) -> Result<Outcome, ConfigurationError> {
    find_shortest_path_within(maze, Budget::unlimited())
}

/// Finds a shortest path like [`find_shortest_path`], giving up once the budget runs out.
///
/// # Errors
///
/// This function returns an error if the start or the goal is out of bounds or blocked.
pub fn find_shortest_path_within(
    maze: &Maze,
    budget: Budget,
) -> Result<Outcome, ConfigurationError> {
    breadth_first(maze, budget, |_| {})
}

/// Runs a budgeted search and records every expanded cell.
///
/// # Errors
///
/// This function returns an error if the start or the goal is out of bounds or blocked.
pub fn explore(maze: &Maze, budget: Budget) -> Result<Exploration, ConfigurationError> {
    let mut expanded = Vec::new();
    let outcome = breadth_first(maze, budget, |coordinate| expanded.push(coordinate))?;

    Ok(Exploration { outcome, expanded })
}

/// Breadth-first search core, reporting each expanded cell to `on_expand`.
fn breadth_first<F>(
    maze: &Maze,
    budget: Budget,
    mut on_expand: F,
) -> Result<Outcome, ConfigurationError>
where
    F: FnMut(Coordinate),
{
    maze.validate()?;

    let start = maze.start();
    let goal = maze.goal();
    debug!(
        "searching {}x{} maze from {start} to {goal}",
        maze.width(),
        maze.height()
    );

    let mut state = SearchState::new(start);
    while let Some(current) = state.frontier.pop_front() {
        if budget.is_exhausted(state.expanded) {
            debug!("search cancelled after {} expansions", state.expanded);
            return Ok(Outcome::Cancelled);
        }
        state.expanded += 1;
        on_expand(current);
        trace!("expanding {current}");

        if current == goal {
            let path = state.reconstruct(start, goal);
            debug!(
                "found path of {} steps after {} expansions",
                path.steps(),
                state.expanded
            );
            return Ok(Outcome::Found(path));
        }

        for neighbor in maze.neighbors(current) {
            state.discover(neighbor, current);
        }
    }

    debug!(
        "frontier exhausted after {} expansions, {goal} is unreachable",
        state.expanded
    );
    Ok(Outcome::Unreachable)
}
