use super::Point;
use crate::{HullScalar, Orientation, TotalOrd};

#[derive(Debug, Eq, PartialEq, Ord, PartialOrd)]
// Directed edge from A to B.
pub struct DirectedEdgeView<'a, T> {
  pub src: &'a Point<T>,
  pub dst: &'a Point<T>,
}

impl<T> Copy for DirectedEdgeView<'_, T> {}
impl<T> Clone for DirectedEdgeView<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> DirectedEdgeView<'a, T>
where
  T: HullScalar,
{
  /// Which side of the edge `pt` lies on, walking from `src` to `dst`.
  pub fn orientation(&self, pt: &Point<T>) -> Orientation {
    self.src.orientation(self.dst, pt)
  }

  /// True iff `pt` lies on the closed segment between `src` and `dst`.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    if !self.orientation(pt).is_colinear() {
      return false;
    }
    fn within<T: TotalOrd>(a: &T, b: &T, v: &T) -> bool {
      let (lo, hi) = if a.total_cmp(b).is_le() { (a, b) } else { (b, a) };
      lo.total_cmp(v).is_le() && v.total_cmp(hi).is_le()
    }
    within(self.src.x_coord(), self.dst.x_coord(), pt.x_coord())
      && within(self.src.y_coord(), self.dst.y_coord(), pt.y_coord())
  }
}
