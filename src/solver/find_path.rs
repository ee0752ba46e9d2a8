//! One-shot route search.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::brute_force;
use crate::local_search::two_opt_improve;
use crate::models::{coerce_points, AsPoint, Algorithm, Point};

use super::SolveOptions;

/// Returns the points re-ordered into a good (or optimal) route.
///
/// Points are coerced and copied before any work starts; fewer than two
/// points come back unchanged in a new vector. Otherwise the strategy is
/// resolved for the point count, the distance matrix is built once, and the
/// resulting index route is mapped back onto the copied points. The output is
/// always a permutation of the input values.
///
/// Fails with [`TourError::InvalidInput`](crate::TourError::InvalidInput) if a
/// point does not hold exactly two coordinates. Coordinates must also be
/// finite: NaN and infinities are rejected rather than ordered, even for
/// inputs of fewer than two points.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::solver::{find_path, SolveOptions};
///
/// let points = vec![(0.0, 0.0), (2.0, 1.0), (2.0, 0.0), (0.0, 1.0)];
/// let route = find_path(&points, &SolveOptions::default()).unwrap();
/// assert_eq!(
///     route,
///     vec![
///         Point::new(0.0, 0.0),
///         Point::new(2.0, 0.0),
///         Point::new(2.0, 1.0),
///         Point::new(0.0, 1.0),
///     ]
/// );
/// ```
pub fn find_path<P: AsPoint>(points: &[P], options: &SolveOptions) -> Result<Vec<Point>> {
    let points = coerce_points(points)?;
    let n = points.len();
    if n < 2 {
        return Ok(points);
    }

    let algorithm = options.strategy.resolve(n);
    let closed = options.closed;
    let budget = options.time_budget;
    log::debug!("find_path: n={n} strategy={algorithm} closed={closed}");

    let distances = DistanceMatrix::from_points(&points);
    let (route, len) = match algorithm {
        Algorithm::Bruteforce => brute_force(&distances, closed),
        Algorithm::Nearest => nearest_neighbor(&distances, closed, budget),
        Algorithm::TwoOpt => {
            let identity: Vec<usize> = (0..n).collect();
            two_opt_improve(&identity, &distances, closed, budget)
        }
        Algorithm::NearestTwoOpt => {
            let (initial, _) = nearest_neighbor(&distances, closed, budget);
            two_opt_improve(&initial, &distances, closed, budget)
        }
    };

    log::debug!("find_path: done strategy={algorithm} length={len:.3}");
    Ok(route_points(&route, &points))
}

/// Maps an index route onto the points it orders.
pub(crate) fn route_points(route: &[usize], points: &[Point]) -> Vec<Point> {
    route.iter().map(|&i| points[i]).collect()
}
