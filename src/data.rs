mod chain;
mod directed_edge;
pub mod hull;
pub(crate) mod point;

pub use chain::Chain;
pub use directed_edge::DirectedEdgeView;
pub use hull::Hull;
pub use point::{random_points, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
