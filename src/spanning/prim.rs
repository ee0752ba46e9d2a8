//! Prim's minimum spanning tree over the complete Euclidean graph.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{coerce_points, AsPoint};

/// Computes minimum spanning tree edges for a point set.
///
/// Runs Prim's algorithm on the dense distance matrix, growing the tree from
/// index 0. Edges are `(parent, child)` index pairs in the order the children
/// join the tree; equal candidate distances go to the lowest index. Fewer than
/// two points yield no edges.
///
/// Fails with [`TourError::InvalidInput`](crate::TourError::InvalidInput) if a
/// point cannot be coerced.
///
/// # Examples
///
/// ```
/// use u_tour::spanning::compute_mst;
///
/// let points = vec![(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)];
/// let edges = compute_mst(&points).unwrap();
/// assert_eq!(edges, vec![(0, 2), (2, 1)]);
/// ```
pub fn compute_mst<P: AsPoint>(points: &[P]) -> Result<Vec<(usize, usize)>> {
    let points = coerce_points(points)?;
    if points.len() < 2 {
        return Ok(Vec::new());
    }
    let distances = DistanceMatrix::from_points(&points);
    Ok(prim(&distances))
}

/// Prim's algorithm on a distance matrix, O(n²).
pub fn prim(distances: &DistanceMatrix) -> Vec<(usize, usize)> {
    let n = distances.size();
    if n < 2 {
        return Vec::new();
    }

    let mut in_tree = vec![false; n];
    let mut min_dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n - 1);
    min_dist[0] = 0.0;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            match next {
                Some(u) if min_dist[v] >= min_dist[u] => {}
                _ => next = Some(v),
            }
        }
        let Some(u) = next else { break };

        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push((p, u));
        }

        for v in 0..n {
            if !in_tree[v] && distances.get(u, v) < min_dist[v] {
                min_dist[v] = distances.get(u, v);
                parent[v] = Some(u);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;
    use crate::models::Point;

    fn tree_weight(points: &[Point], edges: &[(usize, usize)]) -> f64 {
        edges
            .iter()
            .map(|&(a, b)| points[a].distance_to(&points[b]))
            .sum()
    }

    #[test]
    fn test_trivial_sizes() {
        assert!(compute_mst::<Point>(&[]).expect("valid").is_empty());
        assert!(compute_mst(&[(1.0, 1.0)]).expect("valid").is_empty());
        assert_eq!(compute_mst(&[(0.0, 0.0), (1.0, 1.0)]).expect("valid"), vec![(0, 1)]);
    }

    #[test]
    fn test_square_weight() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let edges = compute_mst(&points).expect("valid");
        assert_eq!(edges.len(), 3);
        assert!((tree_weight(&points, &edges) - 3.0).abs() < 1e-10);
        // 0 reaches 2 and 3 at distance 1; the lower index joins first.
        assert_eq!(edges[0], (0, 2));
    }

    #[test]
    fn test_spans_all_vertices() {
        let points: Vec<Point> = (0..7)
            .map(|i| Point::new((i * 37 % 11) as f64, (i * 53 % 13) as f64))
            .collect();
        let edges = compute_mst(&points).expect("valid");
        assert_eq!(edges.len(), points.len() - 1);
        let mut reached = vec![false; points.len()];
        reached[0] = true;
        for &(p, c) in &edges {
            assert!(reached[p], "parent must already be in the tree");
            assert!(!reached[c], "child joins exactly once");
            reached[c] = true;
        }
        assert!(reached.iter().all(|&r| r));
    }

    #[test]
    fn test_invalid_point() {
        let raw = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(compute_mst(&raw), Err(TourError::InvalidInput(_))));
    }
}
