use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::ops::RangeInclusive;

use crate::{HullScalar, Orientation, TotalOrd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }

  /// Determine the direction you have to turn if you walk from `self`
  /// to `q` to `r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn orient(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    p.orientation(q, r)
  }
}

/// Draw `n` points whose coordinates are uniformly distributed over `range`.
///
/// # Panics
///
/// Panics if `range` is empty.
///
/// # Examples
///
/// ```rust
/// # use rhull::data::random_points;
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
/// let pts = random_points(1000, 50..=750, &mut rng);
/// assert_eq!(pts.len(), 1000);
/// assert!(pts.iter().all(|pt| (50..=750).contains(pt.x_coord())));
/// ```
pub fn random_points<T, R>(n: usize, range: RangeInclusive<T>, rng: &mut R) -> Vec<Point<T>>
where
  T: SampleUniform,
  R: Rng + ?Sized,
{
  let dist: Uniform<T> = Uniform::new_inclusive(range.start(), range.end());
  (0..n)
    .map(|_| Point::new([dist.sample(rng), dist.sample(rng)]))
    .collect()
}

// Points are ordered by x-coordinate first and y-coordinate second.
impl<T: TotalOrd> TotalOrd for Point<T> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (self.x_coord(), self.y_coord()).total_cmp(&(other.x_coord(), other.y_coord()))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use num_bigint::BigInt;
  use proptest::prelude::*;
  use rand::SeedableRng;

  proptest! {
    #[test]
    fn bigint_colinear(pt1 in any_r(), pt2 in any_r()) {
      let pt3 = Point::new([
        &pt2.array[0] + &pt2.array[0] - &pt1.array[0],
        &pt2.array[1] + &pt2.array[1] - &pt1.array[1],
      ]);
      prop_assert!(Point::orient(&pt1, &pt2, &pt3).is_colinear())
    }

    #[test]
    fn bigint_not_colinear(pt1 in any_r(), pt2 in any_r()) {
      prop_assume!(pt1 != pt2);
      let dx = &pt2.array[0] - &pt1.array[0];
      let dy = &pt2.array[1] - &pt1.array[1];
      // Step sideways from pt2, perpendicular to pt1->pt2.
      let pt3 = Point::new([&pt2.array[0] - &dy, &pt2.array[1] + &dx]);
      prop_assert!(Point::orient(&pt1, &pt2, &pt3).is_ccw())
    }

    #[test]
    fn total_order_matches_derived_order(pt1 in any_64(), pt2 in any_64()) {
      prop_assert_eq!(pt1.total_cmp(&pt2), pt1.cmp(&pt2))
    }

    #[test]
    fn cast_preserves_orientation(pt1 in any_64(), pt2 in any_64(), pt3 in any_64()) {
      let big = |pt: &Point<i64>| pt.cast(BigInt::from);
      prop_assert_eq!(
        pt1.orientation(&pt2, &pt3),
        big(&pt1).orientation(&big(&pt2), &big(&pt3))
      )
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 1]), &Point::new([2, 2])),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 0]), &Point::new([1, 0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([2, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_2() {
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([0, 6]), &Point::new([0, 8])),
      ClockWise
    );
  }

  #[test]
  fn unit_3() {
    assert_eq!(
      Point::new([-12_i8, -126]).orientation(&Point::new([-12, -126]), &Point::new([0, -126])),
      CoLinear
    );
  }

  #[test]
  fn x_before_y() {
    let a = Point::new([1, 9]);
    let b = Point::new([2, 0]);
    let c = Point::new([2, 1]);
    assert_eq!(a.total_cmp(&b), Ordering::Less);
    assert_eq!(b.total_cmp(&c), Ordering::Less);
    assert_eq!(c.total_cmp(&c), Ordering::Equal);
  }

  #[test]
  fn random_points_stay_in_range() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let pts = random_points(1000, 50..=750, &mut rng);
    assert_eq!(pts.len(), 1000);
    for pt in &pts {
      assert!((50..=750).contains(pt.x_coord()));
      assert!((50..=750).contains(pt.y_coord()));
    }
  }

  #[test]
  fn random_points_single_value_range() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let pts = random_points(3, 5_i16..=5, &mut rng);
    assert_eq!(pts, vec![Point::new([5, 5]); 3]);
  }

  #[test]
  fn display() {
    assert_eq!(Point::new([3, -4]).to_string(), "(3, -4)");
    assert_eq!(Point::from((1, 2)), Point::new([1, 2]));
  }
}
