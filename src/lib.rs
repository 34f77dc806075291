#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of integer point sets using the monotone chain algorithm.
//!
//! ```rust
//! use rhull::algorithms::convex_hull;
//! use rhull::data::Point;
//!
//! let square = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = convex_hull(square).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
use std::cmp::Ordering;
use std::ops::BitXor;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than two distinct points were supplied.
  InsufficientInput,
  /// The same point appears more than once.
  DuplicatePoints,
  /// Three consecutive vertices are either colinear or oriented counter-clockwise.
  ConvexViolation,
  /// An upper and a lower chain do not share their end points.
  MismatchedChains,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientInput => {
        write!(f, "Insufficient input: at least two points are required")
      }
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::MismatchedChains => write!(f, "Chain end points do not match"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate types the hull algorithms can work with.
///
/// All orientation decisions go through [`HullScalar::cmp_slope`], so the
/// precision policy of a coordinate type is decided in exactly one place.
pub trait HullScalar: std::fmt::Debug + TotalOrd + Clone + Eq {
  /// Compare the slope of `p->q` with the slope of `p->r`. The result is
  /// the sign of the cross product `(q - p) × (r - p)`: `Greater` when `r`
  /// lies to the left of the line through `p` and `q`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong: ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl HullScalar for $ty {
      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Return the absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        // diff(a,b) = (c, sign) where a = if sign { b-c } else { b+c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl HullScalar for $ty {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let lhs = (&q[0] - &p[0]) * (&r[1] - &p[1]);
          let rhs = (&q[1] - &p[1]) * (&r[0] - &p[0]);
          lhs.cmp(&rhs)
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt);

#[cfg(test)]
pub mod testing;
