use num_traits::ToPrimitive;
use std::fmt;

use crate::data::{Hull, Point};
use crate::HullScalar;

/// A pretty-printer for hulls using Braille Unicode symbols.
///
/// Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns, so every
/// character covers a 2-pixel-wide by 4-pixel-tall cell. The hull is scaled
/// to fit `width` pixels along its longest side. Rows grow downwards, so the
/// smallest y-coordinate ends up at the top, as in a screen window.
///
/// # Braille Dot Numbering
///
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use rhull::algorithms::convex_hull;
/// use rhull::data::Point;
/// use rhull::data::hull::BraillePrinter;
///
/// let pts = vec![Point::new([0, 0]), Point::new([3, 0])];
/// let hull = convex_hull(pts).unwrap();
/// let output = BraillePrinter::new(&hull).with_width(4).to_string();
/// assert_eq!(output, "⠐⠒⠂\n");
/// ```
pub struct BraillePrinter<'a, T> {
  hull: &'a Hull<T>,
  points: &'a [Point<T>],
  width: usize,
}

impl<'a, T> BraillePrinter<'a, T>
where
  T: HullScalar + ToPrimitive,
{
  pub fn new(hull: &'a Hull<T>) -> Self {
    BraillePrinter {
      hull,
      points: &[],
      width: 120,
    }
  }

  /// Also plot these points. Points outside the hull's bounding box are dropped.
  pub fn with_points(mut self, points: &'a [Point<T>]) -> Self {
    self.points = points;
    self
  }

  /// Number of pixels along the longest side of the hull. Two Braille
  /// characters cover four pixels horizontally.
  pub fn with_width(mut self, width: usize) -> Self {
    self.width = width.max(2);
    self
  }

  fn render(&self) -> String {
    let (min, max) = self.hull.bounding_box();
    let min_x = coord(min.x_coord());
    let min_y = coord(min.y_coord());
    let span_x = coord(max.x_coord()) - min_x;
    let span_y = coord(max.y_coord()) - min_y;
    let span = span_x.max(span_y);
    let scale = if span > 0.0 {
      (self.width - 1) as f64 / span
    } else {
      0.0
    };

    // +1 for the far edge, +2 for padding.
    let width = (span_x * scale).round() as usize + 3;
    let height = (span_y * scale).round() as usize + 3;
    let to_pixel = |pt: &Point<T>| {
      (
        ((coord(pt.x_coord()) - min_x) * scale).round() as i32 + 1,
        ((coord(pt.y_coord()) - min_y) * scale).round() as i32 + 1,
      )
    };

    let mut grid = vec![vec![false; width]; height];
    let mut plot = |x: i32, y: i32| {
      if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        grid[y as usize][x as usize] = true;
      }
    };

    for edge in self.hull.iter_boundary_edges() {
      let (x0, y0) = to_pixel(edge.src);
      let (x1, y1) = to_pixel(edge.dst);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }
    for pt in self.points {
      let (x, y) = to_pixel(pt);
      plot(x, y);
    }

    grid_to_braille(&grid)
  }
}

impl<T> fmt::Display for BraillePrinter<'_, T>
where
  T: HullScalar + ToPrimitive,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

fn coord<T: ToPrimitive>(value: &T) -> f64 {
  value.to_f64().unwrap_or_default()
}

/// Convert a pixel grid to Braille characters.
fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = if height > 0 { grid[0].len() } else { 0 };

  let braille_rows = height.div_ceil(4);
  let braille_cols = width.div_ceil(2);

  // Unicode bit for each (column, row) of a cell.
  const DOTS: [[u8; 4]; 2] = [
    [0b0000_0001, 0b0000_0010, 0b0000_0100, 0b0100_0000],
    [0b0000_1000, 0b0001_0000, 0b0010_0000, 0b1000_0000],
  ];

  let mut result = String::new();
  for row in 0..braille_rows {
    for col in 0..braille_cols {
      let mut dots = 0u8;
      for (dx, column) in DOTS.iter().enumerate() {
        for (dy, bit) in column.iter().enumerate() {
          if get_pixel(grid, col * 2 + dx, row * 4 + dy) {
            dots |= bit;
          }
        }
      }
      result.push(char::from_u32(0x2800 + u32::from(dots)).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

/// Get a pixel from the grid, returning false if out of bounds.
fn get_pixel(grid: &[Vec<bool>], x: usize, y: usize) -> bool {
  grid
    .get(y)
    .and_then(|row| row.get(x))
    .copied()
    .unwrap_or(false)
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
