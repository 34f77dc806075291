use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation};

/// Half of a convex hull boundary, monotone in x.
///
/// Every three consecutive points of a chain make a strict clockwise turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T>(Vec<Point<T>>);

impl<T> Chain<T>
where
  T: HullScalar,
{
  /// $O(n)$ Validate that `points` form a chain.
  ///
  /// # Errors
  /// * [`Error::InsufficientInput`] if there are fewer than two points.
  /// * [`Error::ConvexViolation`] if three consecutive points do not turn clockwise.
  pub fn new(points: Vec<Point<T>>) -> Result<Chain<T>, Error> {
    let chain = Chain(points);
    chain.validate()?;
    Ok(chain)
  }

  /// $O(1)$ Assume that `points` form a chain.
  pub(crate) fn new_unchecked(points: Vec<Point<T>>) -> Chain<T> {
    let chain = Chain(points);
    debug_assert_ok!(chain.validate());
    chain
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    if self.0.len() < 2 {
      return Err(Error::InsufficientInput);
    }
    for w in self.0.windows(3) {
      if Point::orient(&w[0], &w[1], &w[2]) != Orientation::ClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  pub fn first(&self) -> &Point<T> {
    &self.0[0]
  }

  pub fn last(&self) -> &Point<T> {
    &self.0[self.0.len() - 1]
  }

  pub fn into_vec(self) -> Vec<Point<T>> {
    self.0
  }
}

impl<T> Deref for Chain<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.0
  }
}
