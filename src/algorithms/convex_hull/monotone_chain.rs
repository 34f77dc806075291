use crate::data::{Chain, Hull, Point};
use crate::{Error, HullScalar, Orientation, TotalOrd};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] algorithm for finding the smallest convex polygon
/// which contains all the given points. The points are taken by value and
/// used as scratch space; pass a clone to keep the original set.
///
/// # Errors
/// Will return an error iff the input set contains less than two distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices of the hull are from the input set.
/// * Vertices are distinct and no three consecutive vertices are colinear.
/// * All colinear input gives a two-vertex hull: the extreme points.
///
/// # Examples
///
/// ```rust
/// # use rhull::algorithms::convex_hull;
/// # use rhull::data::Point;
/// # use rhull::Error;
/// let single = vec![Point::new([0, 0])];
/// assert_eq!(convex_hull(single).err(), Some(Error::InsufficientInput));
///
/// let colinear = vec![
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 2]),
///   Point::new([3, 3]),
/// ];
/// let hull = convex_hull(colinear).unwrap();
/// assert_eq!(hull.vertices(), &[Point::new([0, 0]), Point::new([3, 3])]);
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  if pts.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  sort_points(&mut pts);
  pts.dedup();
  tracing::trace!(input = pts.len(), "sorted and deduplicated points");
  if pts.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  let upper = upper_chain(&pts)?;
  let lower = lower_chain(&pts)?;
  assemble(upper, lower)
}

/// $O(n \log n)$ Sort points by x-coordinate and then by y-coordinate.
///
/// Coincident points end up next to each other in unspecified order.
pub fn sort_points<T>(pts: &mut [Point<T>])
where
  T: TotalOrd,
{
  pts.sort_unstable_by(TotalOrd::total_cmp);
}

/// $O(n)$ The chain from the first to the last of the sorted points, passing
/// above all of them.
///
/// # Errors
/// Returns [`Error::InsufficientInput`] if there are fewer than two points.
pub fn upper_chain<T>(sorted: &[Point<T>]) -> Result<Chain<T>, Error>
where
  T: HullScalar,
{
  if sorted.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  Ok(build_chain(sorted.iter()))
}

/// $O(n)$ The chain from the last to the first of the sorted points, passing
/// below all of them.
///
/// # Errors
/// Returns [`Error::InsufficientInput`] if there are fewer than two points.
pub fn lower_chain<T>(sorted: &[Point<T>]) -> Result<Chain<T>, Error>
where
  T: HullScalar,
{
  if sorted.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  Ok(build_chain(sorted.iter().rev()))
}

// Each point is pushed once and popped at most once.
fn build_chain<'a, T, I>(pts: I) -> Chain<T>
where
  T: HullScalar + 'a,
  I: Iterator<Item = &'a Point<T>>,
{
  let mut chain: Vec<Point<T>> = Vec::new();
  for pt in pts {
    chain.push(pt.clone());
    while chain.len() > 2 {
      let n = chain.len();
      match Point::orient(&chain[n - 3], &chain[n - 2], &chain[n - 1]) {
        Orientation::ClockWise => break,
        Orientation::CounterClockWise | Orientation::CoLinear => {
          chain.remove(n - 2);
        }
      }
    }
  }
  Chain::new_unchecked(chain)
}

/// $O(n \log n)$ Join an upper and a lower chain into a hull.
///
/// The lower chain's end points duplicate the upper chain's end points and
/// are dropped. If the lower chain has only its two end points then the hull
/// is the upper chain alone.
///
/// # Errors
/// * [`Error::InsufficientInput`] if either chain has fewer than two points.
/// * [`Error::MismatchedChains`] if the lower chain does not run from the
///   last point of the upper chain back to its first point.
/// * [`Error::DuplicatePoints`] or [`Error::ConvexViolation`] if the joined
///   chains do not bound a convex polygon.
///
/// None of these can happen for chains built by [`upper_chain`] and
/// [`lower_chain`] from the same sorted points.
pub fn assemble<T>(upper: Chain<T>, lower: Chain<T>) -> Result<Hull<T>, Error>
where
  T: HullScalar,
{
  if upper.len() < 2 || lower.len() < 2 {
    return Err(Error::InsufficientInput);
  }
  if upper.first() != lower.last() || upper.last() != lower.first() {
    return Err(Error::MismatchedChains);
  }
  let (n_upper, n_lower) = (upper.len(), lower.len());
  let mut vertices = upper.into_vec();
  vertices.extend(lower.into_vec().into_iter().skip(1).take(n_lower - 2));
  tracing::debug!(
    upper = n_upper,
    lower = n_lower,
    vertices = vertices.len(),
    "assembled convex hull"
  );
  Hull::new(vertices)
}
