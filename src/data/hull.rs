use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::{DirectedEdgeView, Point, PointLocation};
use crate::{Error, HullScalar, Orientation, TotalOrd};

mod braille;

pub use braille::BraillePrinter;

/// The convex hull of a point set.
///
/// Vertices are distinct and listed clockwise (with the y-axis pointing up),
/// starting from the lexicographically smallest vertex. The boundary closes
/// implicitly: the last vertex connects back to the first. A hull of
/// colinear points is a degenerate two-vertex segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hull<T>(Vec<Point<T>>);

impl<T> Hull<T>
where
  T: HullScalar,
{
  /// $O(n \log n)$ Validate the vertices of a convex hull.
  pub fn new(vertices: Vec<Point<T>>) -> Result<Hull<T>, Error> {
    let hull = Hull(vertices);
    hull.validate()?;
    Ok(hull)
  }

  /// $O(1)$ Assume that the vertices form a convex hull.
  ///
  /// # Safety
  /// The vertices have to be distinct and every three consecutive vertices
  /// have to turn strictly clockwise.
  pub(crate) fn new_unchecked(vertices: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull(vertices);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n \log n)$
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 2 {
      return Err(Error::InsufficientInput);
    }
    let mut sorted: Vec<&Point<T>> = self.0.iter().collect();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    if sorted.windows(2).any(|w| w[0] == w[1]) {
      return Err(Error::DuplicatePoints);
    }
    if n > 2 {
      for i in 0..n {
        let [a, b, c] = [&self.0[i], &self.0[(i + 1) % n], &self.0[(i + 2) % n]];
        if Point::orient(a, b, c) != Orientation::ClockWise {
          return Err(Error::ConvexViolation);
        }
      }
      // Walking the boundary of a convex polygon, vertices rise in
      // lexicographic order and then fall, switching exactly twice. Stars
      // and other polygons that wind more than once switch more often.
      let rising: Vec<bool> = self
        .iter_boundary_edges()
        .map(|edge| edge.src.total_cmp(edge.dst).is_lt())
        .collect();
      let switches = (0..n).filter(|&i| rising[i] != rising[(i + 1) % n]).count();
      if switches != 2 {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// For a degenerate hull, points on the segment are `OnBoundary` and all
  /// other points are `Outside`.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    if self.is_degenerate() {
      let edge = DirectedEdgeView {
        src: &self.0[0],
        dst: &self.0[1],
      };
      return if edge.contains(pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let mut on_boundary = false;
    for edge in self.iter_boundary_edges() {
      match edge.orientation(pt) {
        Orientation::CounterClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::ClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// $O(1)$ True iff the hull is a line segment.
  pub fn is_degenerate(&self) -> bool {
    self.0.len() == 2
  }

  /// $O(n)$ Smallest and largest corners of the axis-aligned bounding box.
  pub fn bounding_box(&self) -> (Point<T>, Point<T>) {
    let first = &self.0[0];
    let init = (first.clone(), first.clone());
    self.0[1..].iter().fold(init, |(min, max), pt| {
      let [min_x, min_y] = min.array;
      let [max_x, max_y] = max.array;
      let [x, y] = &pt.array;
      (
        Point::new([min_x.total_min(x.clone()), min_y.total_min(y.clone())]),
        Point::new([max_x.total_max(x.clone()), max_y.total_max(y.clone())]),
      )
    })
  }
}

impl<T> Hull<T> {
  pub fn vertices(&self) -> &[Point<T>] {
    &self.0
  }

  /// Consecutive vertex pairs, wrapping from the last vertex back to the first.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = DirectedEdgeView<'_, T>> + '_ {
    let n = self.0.len();
    (0..n).map(move |i| DirectedEdgeView {
      src: &self.0[i],
      dst: &self.0[(i + 1) % n],
    })
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.0
  }
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.0
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err_eq, assert_ok};

  fn square() -> Hull<i32> {
    Hull::new(vec![
      Point::new([0, 0]),
      Point::new([0, 4]),
      Point::new([4, 4]),
      Point::new([4, 0]),
    ])
    .unwrap()
  }

  #[test]
  fn locate_square() {
    let hull = square();
    assert_eq!(hull.locate(&Point::new([2, 2])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([0, 2])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([4, 4])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([5, 2])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([0, 6])), PointLocation::Outside);
  }

  #[test]
  fn locate_segment() {
    let hull = Hull::new(vec![Point::new([0, 0]), Point::new([3, 3])]).unwrap();
    assert!(hull.is_degenerate());
    assert_eq!(hull.locate(&Point::new([1, 1])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([3, 3])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([4, 4])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([1, 2])), PointLocation::Outside);
  }

  #[test]
  fn counter_clockwise_rejected() {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ];
    assert_err_eq!(Hull::new(pts), Error::ConvexViolation);
  }

  #[test]
  fn colinear_vertex_rejected() {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([0, 2]),
      Point::new([0, 4]),
      Point::new([4, 0]),
    ];
    assert_err_eq!(Hull::new(pts), Error::ConvexViolation);
  }

  #[test]
  fn pentagram_rejected() {
    // Pentagon corners visited in star order wind twice around the center.
    let pts = vec![
      Point::new([0, 10]),
      Point::new([6, -8]),
      Point::new([-10, 3]),
      Point::new([10, 3]),
      Point::new([-6, -8]),
    ];
    assert_err_eq!(Hull::new(pts), Error::ConvexViolation);
  }

  #[test]
  fn pentagon_accepted() {
    let pts = vec![
      Point::new([0, 10]),
      Point::new([10, 3]),
      Point::new([6, -8]),
      Point::new([-6, -8]),
      Point::new([-10, 3]),
    ];
    let hull = assert_ok!(Hull::new(pts));
    assert_eq!(hull.locate(&Point::new([0, 9])), PointLocation::Inside);
  }

  #[test]
  fn duplicates_rejected() {
    let pts = vec![Point::new([1, 1]), Point::new([1, 1])];
    assert_err_eq!(Hull::new(pts), Error::DuplicatePoints);
  }

  #[test]
  fn too_small() {
    assert_err_eq!(Hull::new(vec![Point::new([1, 1])]), Error::InsufficientInput);
    assert_err_eq!(Hull::<i32>::new(vec![]), Error::InsufficientInput);
  }

  #[test]
  fn edges_wrap_around() {
    let hull = square();
    let edges: Vec<_> = hull
      .iter_boundary_edges()
      .map(|edge| (*edge.src, *edge.dst))
      .collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (Point::new([4, 0]), Point::new([0, 0])));
    for pair in edges.windows(2) {
      assert_eq!(pair[0].1, pair[1].0);
    }
  }

  #[test]
  fn degenerate_edges() {
    let hull = assert_ok!(Hull::new(vec![Point::new([0, 0]), Point::new([5, 5])]));
    assert_eq!(hull.iter_boundary_edges().count(), 2);
  }

  #[test]
  fn bounding_box() {
    let hull = Hull::new(vec![
      Point::new([-3, 1]),
      Point::new([2, 7]),
      Point::new([5, -2]),
    ])
    .unwrap();
    assert_eq!(
      hull.bounding_box(),
      (Point::new([-3, -2]), Point::new([5, 7]))
    );
  }
}
