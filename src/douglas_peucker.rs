//! Iterative Ramer-Douglas-Peucker polyline simplification.
//!
//! The traversal keeps an explicit stack of index ranges instead of
//! recursing, so long tracks cannot exhaust the call stack. Which points
//! survive is recorded in a retain mask owned by the single call.

use log::trace;

use crate::point::Planar;
use crate::utils::argmax_first;

/// Perpendicular distance from `point` to the infinite line through
/// `line_start` and `line_end`.
///
/// When the two line points coincide there is no line; the Euclidean distance
/// from `point` to that single position is returned instead.
///
/// The direction is normalized before the cross product, so coordinates of
/// large magnitude do not overflow the intermediate products.
pub fn point_line_distance<P: Planar>(point: &P, line_start: &P, line_end: &P) -> f64 {
    let dx = line_end.x() - line_start.x();
    let dy = line_end.y() - line_start.y();

    if dx == 0.0 && dy == 0.0 {
        return (point.x() - line_start.x()).hypot(point.y() - line_start.y());
    }

    let length = dx.hypot(dy);
    let (ux, uy) = (dx / length, dy / length);
    (ux * (line_start.y() - point.y()) - (line_start.x() - point.x()) * uy).abs()
}

/// Computes the retain mask for `points[start_index..=last_index]`.
///
/// Entry `k` of the returned mask belongs to `points[start_index + k]`. The
/// two range endpoints are always retained. Points farther than `epsilon`
/// from the chord of their enclosing range are kept; on equal distances the
/// lowest index is chosen as the split point.
///
/// Distances that come out NaN never select a split point, so a point with
/// a NaN coordinate is dropped unless it is a range endpoint.
///
/// A negative `epsilon` keeps every point. It is not rejected.
///
/// # Panics
///
/// Panics if `start_index > last_index` or `last_index >= points.len()`.
pub fn simplify_mask<P: Planar>(
    points: &[P],
    start_index: usize,
    last_index: usize,
    epsilon: f64,
) -> Vec<bool> {
    assert!(start_index <= last_index, "{} <= {}", start_index, last_index);
    assert!(last_index < points.len(), "{} < {}", last_index, points.len());

    let mut mask = vec![true; last_index - start_index + 1];
    let mut stack: Vec<(usize, usize)> = vec![(start_index, last_index)];

    while let Some((start, last)) = stack.pop() {
        let farthest = argmax_first(
            (start + 1..last)
                .filter(|&i| mask[i - start_index])
                .map(|i| (i, point_line_distance(&points[i], &points[start], &points[last]))),
        );

        match farthest {
            Some((index, dmax)) if dmax > epsilon => {
                stack.push((start, index));
                stack.push((index, last));
            }
            _ => {
                for i in start + 1..last {
                    mask[i - start_index] = false;
                }
            }
        }
    }

    trace!(
        "douglas_peucker: kept {} of {} points (epsilon {})",
        mask.iter().filter(|&&keep| keep).count(),
        mask.len(),
        epsilon
    );

    mask
}

/// Indices of the points `rdp` would keep, in ascending order.
pub fn rdp_indices<P: Planar>(points: &[P], epsilon: f64) -> Vec<usize> {
    if points.len() < 2 {
        return (0..points.len()).collect();
    }

    simplify_mask(points, 0, points.len() - 1, epsilon)
        .into_iter()
        .enumerate()
        .filter_map(|(i, keep)| if keep { Some(i) } else { None })
        .collect()
}

/// Simplifies `points` with tolerance `epsilon`, returning the retained
/// points in their original order. Sequences shorter than two points are
/// returned unchanged.
pub fn rdp<P: Planar + Clone>(points: &[P], epsilon: f64) -> Vec<P> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mask = simplify_mask(points, 0, points.len() - 1, epsilon);
    points
        .iter()
        .zip(mask)
        .filter(|(_, keep)| *keep)
        .map(|(p, _)| p.clone())
        .collect()
}
