//! Multi-start nearest-neighbor constructive heuristic.
//!
//! Builds one greedy route per start index: from the start, always move to
//! the nearest unvisited point. Every start is tried in index order and the
//! shortest route (under the open/closed flag) is kept.
//!
//! # Complexity
//!
//! O(n²) per start, O(n³) for all starts. A [`TimeBudget`] cuts the number of
//! starts; the first start always runs, so a route is produced for any n ≥ 2.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_length;
use crate::models::{Deadline, TimeBudget};

/// Builds the greedy nearest-neighbor route from a single start index.
///
/// Distance ties go to the lowest index.
pub fn greedy_route(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = start;
    visited[current] = true;
    route.push(current);

    while let Some(next) = distances.nearest_unvisited(current, &visited) {
        visited[next] = true;
        route.push(next);
        current = next;
    }
    route
}

/// Runs the multi-start nearest-neighbor heuristic to completion.
///
/// Returns the best route and its length. Among equally short candidates the
/// earliest start wins. For fewer than two points the identity route is
/// returned.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, TimeBudget};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let (route, len) = nearest_neighbor(&dm, false, TimeBudget::UNLIMITED);
/// assert_eq!(route, vec![0, 2, 1]);
/// assert!((len - 10.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(
    distances: &DistanceMatrix,
    closed: bool,
    budget: TimeBudget,
) -> (Vec<usize>, f64) {
    let mut search = NearestNeighborSearch::new(distances, closed, budget);
    while search.step(distances).is_some() {}
    let len = search.best_length().unwrap_or(0.0);
    (search.into_route(), len)
}

/// A resumable multi-start nearest-neighbor search.
///
/// Each call to [`step`](Self::step) tries one more start index and returns
/// the candidate route it built, so a caller can show every candidate as it
/// appears. The search must be driven with the matrix it was created for.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, TimeBudget};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::NearestNeighborSearch;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut search = NearestNeighborSearch::new(&dm, true, TimeBudget::UNLIMITED);
/// let candidates: Vec<_> = search.candidates(&dm).collect();
/// assert_eq!(candidates.len(), 3);
/// assert_eq!(search.starts_tried(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighborSearch {
    size: usize,
    closed: bool,
    budget: TimeBudget,
    deadline: Option<Deadline>,
    next_start: usize,
    best: Option<(Vec<usize>, f64)>,
    finished: bool,
}

impl NearestNeighborSearch {
    /// Creates a search over the points of `distances`.
    ///
    /// The budget clock starts on the first call to [`step`](Self::step).
    pub fn new(distances: &DistanceMatrix, closed: bool, budget: TimeBudget) -> Self {
        Self {
            size: distances.size(),
            closed,
            budget,
            deadline: None,
            next_start: 0,
            best: None,
            finished: false,
        }
    }

    /// Tries the next start index and returns its candidate route.
    ///
    /// Returns `None` once every start has been tried, the budget has
    /// expired, or there are fewer than two points.
    pub fn step(&mut self, distances: &DistanceMatrix) -> Option<Vec<usize>> {
        debug_assert_eq!(distances.size(), self.size);
        if self.finished {
            return None;
        }
        if self.size < 2 || self.next_start >= self.size {
            self.finish();
            return None;
        }

        let budget = self.budget;
        let deadline = *self.deadline.get_or_insert_with(|| budget.start());
        if self.next_start > 0 && deadline.expired() {
            log::debug!(
                "nearest_neighbor: budget expired after {}/{} starts in {:?}",
                self.next_start,
                self.size,
                deadline.elapsed()
            );
            self.finish();
            return None;
        }

        let start = self.next_start;
        self.next_start += 1;
        let route = greedy_route(distances, start);
        let len = route_length(&route, distances, self.closed);

        let better = match &self.best {
            Some((_, best_len)) => len < *best_len,
            None => true,
        };
        if better {
            self.best = Some((route.clone(), len));
        }
        Some(route)
    }

    /// Drives the search from an iterator, one candidate per item.
    pub fn candidates<'a>(
        &'a mut self,
        distances: &'a DistanceMatrix,
    ) -> impl Iterator<Item = Vec<usize>> + 'a {
        std::iter::from_fn(move || self.step(distances))
    }

    /// Number of start indices tried so far.
    pub fn starts_tried(&self) -> usize {
        self.next_start
    }

    /// Returns `true` once the search has stopped.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The best route found so far, if any start has been tried.
    pub fn best_route(&self) -> Option<&[usize]> {
        self.best.as_ref().map(|(route, _)| route.as_slice())
    }

    /// Length of the best route found so far.
    pub fn best_length(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, len)| *len)
    }

    /// Consumes the search, returning the best route found.
    ///
    /// Falls back to the identity route when no start was tried.
    pub fn into_route(self) -> Vec<usize> {
        match self.best {
            Some((route, _)) => route,
            None => (0..self.size).collect(),
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            if let Some(len) = self.best_length() {
                log::debug!(
                    "nearest_neighbor: done tried={} n={} closed={} best={len:.3}",
                    self.next_start,
                    self.size,
                    self.closed
                );
            }
        }
    }
}
