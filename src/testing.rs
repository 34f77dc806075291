// This module contains proptest strategies for points.
use crate::data::Point;

use num_bigint::BigInt;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Parameters: Clone,
{
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(Point::new)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Coordinates from a small range so that generated point sets are full of
// duplicates and colinear triples.
pub fn any_small() -> impl Strategy<Value = Point<i32>> {
  [-20..=20, -20..=20].prop_map(Point::new)
}

pub fn any_8() -> impl Strategy<Value = Point<i8>> {
  any::<Point<i8>>()
}

pub fn any_64() -> impl Strategy<Value = Point<i64>> {
  any::<Point<i64>>()
}

// Arbitrary isn't defined for BigInt.
pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast(BigInt::from))
}
