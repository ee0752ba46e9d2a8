//! Open and closed route length.

use crate::distance::DistanceMatrix;

/// Computes the total length of a route.
///
/// Sums the edges walked in route order. When `closed` is set, the edge from
/// the last index back to the first is added. Routes with fewer than two
/// indices have length zero. The route need not be a full permutation.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::route_length;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((route_length(&[0, 1, 2, 3], &dm, true) - 6.0).abs() < 1e-10);
/// assert!((route_length(&[0, 1, 2, 3], &dm, false) - 5.0).abs() < 1e-10);
/// ```
pub fn route_length(route: &[usize], distances: &DistanceMatrix, closed: bool) -> f64 {
    if route.len() < 2 {
        return 0.0;
    }
    let mut total: f64 = route.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    if closed {
        total += distances.get(route[route.len() - 1], route[0]);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn line_matrix() -> DistanceMatrix {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_empty_and_single() {
        let dm = line_matrix();
        assert_eq!(route_length(&[], &dm, true), 0.0);
        assert_eq!(route_length(&[2], &dm, true), 0.0);
        assert_eq!(route_length(&[2], &dm, false), 0.0);
    }

    #[test]
    fn test_two_points() {
        let dm = line_matrix();
        assert!((route_length(&[0, 3], &dm, false) - 3.0).abs() < 1e-10);
        // there and back
        assert!((route_length(&[0, 3], &dm, true) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_open_vs_closed() {
        let dm = line_matrix();
        let route = [0, 1, 2, 3];
        assert!((route_length(&route, &dm, false) - 3.0).abs() < 1e-10);
        assert!((route_length(&route, &dm, true) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_route() {
        let dm = line_matrix();
        assert!((route_length(&[3, 1], &dm, false) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_closed_rotation_invariant() {
        let dm = line_matrix();
        let a = route_length(&[0, 2, 1, 3], &dm, true);
        let b = route_length(&[2, 1, 3, 0], &dm, true);
        assert!((a - b).abs() < 1e-10);
    }
}
