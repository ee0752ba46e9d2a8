//! Step-wise route search for animated front-ends.

use std::iter::FusedIterator;

use crate::constructive::NearestNeighborSearch;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::brute_force;
use crate::local_search::TwoOptSearch;
use crate::models::{coerce_points, Algorithm, AsPoint, Point, Strategy, TimeBudget};

use super::find_path::route_points;
use super::SolveOptions;

/// Starts a step-wise route search.
///
/// Takes the same inputs as [`find_path`](super::find_path) and returns a
/// lazy iterator of intermediate routes. The last item always equals what
/// `find_path` returns for the same inputs (given no budget cut-off). Point
/// coercion errors are reported here, before any frame is produced.
///
/// # Examples
///
/// ```
/// use u_tour::models::Strategy;
/// use u_tour::solver::{find_path, find_path_step, SolveOptions};
///
/// let points: Vec<(f64, f64)> = (0..12)
///     .map(|i| ((i * 7 % 12) as f64, (i * 5 % 12) as f64))
///     .collect();
/// let options = SolveOptions::default().with_strategy(Strategy::NearestTwoOpt);
/// let frames: Vec<_> = find_path_step(&points, &options).unwrap().collect();
/// assert!(frames.len() >= 12);
/// assert_eq!(frames.last(), Some(&find_path(&points, &options).unwrap()));
/// ```
pub fn find_path_step<P: AsPoint>(points: &[P], options: &SolveOptions) -> Result<PathSteps> {
    let points = coerce_points(points)?;
    Ok(PathSteps::new(points, options))
}

/// Lazy, single-pass sequence of intermediate routes.
///
/// Frames per strategy:
///
/// - fewer than two points: one frame, a copy of the input
/// - `Bruteforce`: one frame, the optimum
/// - `Nearest`: one frame per start index tried
/// - `TwoOpt`: one frame per applied reversal
/// - `NearestTwoOpt`: the nearest frames, then the 2-opt frames
///
/// If the last frame produced that way is not the final route (the best
/// nearest start was not the last one tried, or 2-opt found nothing to
/// improve), the final route follows as one closing frame.
///
/// The iterator owns its copy of the points and the distance matrix, so it
/// can be moved to a worker thread. Dropping it stops the search.
#[derive(Debug)]
pub struct PathSteps {
    points: Vec<Point>,
    distances: DistanceMatrix,
    algorithm: Algorithm,
    closed: bool,
    budget: TimeBudget,
    phase: Phase,
    last_route: Option<Vec<usize>>,
}

#[derive(Debug)]
enum Phase {
    Trivial,
    Exact,
    Nearest {
        search: NearestNeighborSearch,
        refine: bool,
    },
    TwoOpt(TwoOptSearch),
    Closing(Vec<usize>),
    Done,
}

impl PathSteps {
    fn new(points: Vec<Point>, options: &SolveOptions) -> Self {
        let n = points.len();
        let algorithm = options.strategy.resolve(n);
        let closed = options.closed;
        let budget = options.time_budget;

        if n < 2 {
            return Self {
                points,
                distances: DistanceMatrix::new(0),
                algorithm,
                closed,
                budget,
                phase: Phase::Trivial,
                last_route: None,
            };
        }

        log::debug!("find_path_step: n={n} strategy={algorithm} closed={closed}");
        let distances = DistanceMatrix::from_points(&points);
        let phase = match algorithm {
            Algorithm::Bruteforce => Phase::Exact,
            Algorithm::Nearest | Algorithm::NearestTwoOpt => Phase::Nearest {
                search: NearestNeighborSearch::new(&distances, closed, budget),
                refine: algorithm == Algorithm::NearestTwoOpt,
            },
            Algorithm::TwoOpt => Phase::TwoOpt(TwoOptSearch::new((0..n).collect(), closed, budget)),
        };

        Self {
            points,
            distances,
            algorithm,
            closed,
            budget,
            phase,
            last_route: None,
        }
    }

    /// The concrete strategy this search runs.
    pub fn strategy(&self) -> Strategy {
        self.algorithm.into()
    }

    /// The coerced input points, in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn emit(&mut self, route: Vec<usize>) -> Vec<Point> {
        let frame = route_points(&route, &self.points);
        self.last_route = Some(route);
        frame
    }
}

impl Iterator for PathSteps {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Vec<Point>> {
        loop {
            match std::mem::replace(&mut self.phase, Phase::Done) {
                Phase::Done => return None,
                Phase::Trivial => return Some(self.points.clone()),
                Phase::Exact => {
                    let (route, _) = brute_force(&self.distances, self.closed);
                    return Some(self.emit(route));
                }
                Phase::Nearest { mut search, refine } => {
                    if let Some(route) = search.step(&self.distances) {
                        self.phase = Phase::Nearest { search, refine };
                        return Some(self.emit(route));
                    }
                    let best = search.into_route();
                    self.phase = if refine {
                        Phase::TwoOpt(TwoOptSearch::new(best, self.closed, self.budget))
                    } else {
                        Phase::Closing(best)
                    };
                }
                Phase::TwoOpt(mut search) => {
                    if let Some(route) = search.step(&self.distances) {
                        self.phase = Phase::TwoOpt(search);
                        return Some(self.emit(route));
                    }
                    self.phase = Phase::Closing(search.into_route());
                }
                Phase::Closing(route) => {
                    if self.last_route.as_ref() == Some(&route) {
                        return None;
                    }
                    return Some(self.emit(route));
                }
            }
        }
    }
}

impl FusedIterator for PathSteps {}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::TourError;
    use crate::solver::find_path;

    fn scattered(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                Point::new((t * 7.3).sin() * 50.0 + t, (t * 3.1).cos() * 40.0)
            })
            .collect()
    }

    fn options(strategy: Strategy) -> SolveOptions {
        SolveOptions::default().with_strategy(strategy)
    }

    #[test]
    fn test_trivial_single_frame() {
        let input = vec![Point::new(4.0, 2.0)];
        let frames: Vec<_> = find_path_step(&input, &SolveOptions::default())
            .expect("valid")
            .collect();
        assert_eq!(frames, vec![input]);

        let frames: Vec<_> = find_path_step::<Point>(&[], &SolveOptions::default())
            .expect("valid")
            .collect();
        assert_eq!(frames, vec![Vec::<Point>::new()]);
    }

    #[test]
    fn test_bruteforce_single_frame() {
        let input = scattered(6);
        let frames: Vec<_> = find_path_step(&input, &options(Strategy::Bruteforce))
            .expect("valid")
            .collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(
            frames[0],
            find_path(&input, &options(Strategy::Bruteforce)).expect("valid")
        );
    }

    #[test]
    fn test_nearest_one_frame_per_start() {
        let input = scattered(15);
        let frames: Vec<_> = find_path_step(&input, &options(Strategy::Nearest))
            .expect("valid")
            .collect();
        // one per start, plus a closing frame unless the best start was the last
        assert!(frames.len() == 15 || frames.len() == 16);
        assert_eq!(
            frames.last(),
            Some(&find_path(&input, &options(Strategy::Nearest)).expect("valid"))
        );
    }

    #[test]
    fn test_last_frame_matches_find_path() {
        for strategy in Strategy::ALL {
            // keep exhaustive search small
            let n = if strategy == Strategy::Bruteforce { 8 } else { 14 };
            let input = scattered(n);
            for closed in [true, false] {
                let opts = options(strategy).with_closed(closed);
                let last = find_path_step(&input, &opts).expect("valid").last();
                assert_eq!(
                    last,
                    Some(find_path(&input, &opts).expect("valid")),
                    "{strategy} closed={closed}"
                );
            }
        }
    }

    #[test]
    fn test_two_opt_frames_shorten() {
        let input = scattered(20);
        let dm = DistanceMatrix::from_points(&input);
        let index_of = |p: &Point| input.iter().position(|q| q == p).expect("known point");
        let identity: Vec<usize> = (0..20).collect();
        let mut prev = crate::evaluation::route_length(&identity, &dm, true);
        for frame in find_path_step(&input, &options(Strategy::TwoOpt)).expect("valid") {
            let route: Vec<usize> = frame.iter().map(index_of).collect();
            let len = crate::evaluation::route_length(&route, &dm, true);
            assert!(len <= prev + 1e-9);
            prev = len;
        }
    }

    #[test]
    fn test_two_opt_without_improvement_still_yields() {
        // A square in order has nothing to improve.
        let input = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let frames: Vec<_> = find_path_step(&input, &options(Strategy::TwoOpt))
            .expect("valid")
            .collect();
        assert_eq!(frames, vec![input]);
    }

    #[test]
    fn test_early_stop() {
        let input = scattered(30);
        let mut steps = find_path_step(&input, &options(Strategy::NearestTwoOpt)).expect("valid");
        assert_eq!(steps.strategy(), Strategy::NearestTwoOpt);
        let first_two: Vec<_> = steps.by_ref().take(2).collect();
        assert_eq!(first_two.len(), 2);
        drop(steps);
    }

    #[test]
    fn test_fused_after_end() {
        let input = scattered(5);
        let mut steps = find_path_step(&input, &options(Strategy::Nearest)).expect("valid");
        while steps.next().is_some() {}
        assert!(steps.next().is_none());
        assert!(steps.next().is_none());
    }

    #[test]
    fn test_zero_budget_still_produces_route() {
        let input = scattered(40);
        let opts = options(Strategy::NearestTwoOpt).with_time_budget(Duration::ZERO);
        let last = find_path_step(&input, &opts)
            .expect("valid")
            .last()
            .expect("at least one frame");
        assert_eq!(last.len(), 40);
    }

    #[test]
    fn test_invalid_point_before_frames() {
        let raw = vec![vec![1.0, 2.0, 3.0]];
        assert!(matches!(
            find_path_step(&raw, &SolveOptions::default()),
            Err(TourError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_auto_resolves() {
        let steps = find_path_step(&scattered(5), &SolveOptions::default()).expect("valid");
        assert_eq!(steps.strategy(), Strategy::Bruteforce);
        assert_eq!(steps.points().len(), 5);
    }

    #[test]
    fn test_is_send() {
        fn assert_send<T: Send + 'static>() {}
        assert_send::<PathSteps>();
    }
}
