use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rhull::algorithms::convex_hull;
use rhull::data::hull::BraillePrinter;
use rhull::data::random_points;
use std::fmt::Write;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "rhull")]
#[command(about = "Compute and draw the convex hull of random points")]
struct Args {
  /// Number of random points
  #[arg(long, default_value_t = 1000)]
  count: usize,

  /// Smallest coordinate of the random points
  #[arg(long, default_value_t = 50, allow_hyphen_values = true)]
  min: i32,

  /// Largest coordinate of the random points
  #[arg(long, default_value_t = 750, allow_hyphen_values = true)]
  max: i32,

  /// Seed for a reproducible point set
  #[arg(long)]
  seed: Option<u64>,

  /// Width of the picture in pixels (two pixels per character)
  #[arg(long, default_value_t = 120)]
  width: usize,

  /// Draw only the hull, not the points
  #[arg(long)]
  no_points: bool,

  /// Print the hull vertices without a picture
  #[arg(short, long)]
  quiet: bool,

  /// Log more (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let args = Args::parse();
  let level = match args.verbose {
    0 => Level::INFO,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  };
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
  print!("{}", run(&args)?);
  Ok(())
}

fn run(args: &Args) -> Result<String> {
  ensure!(
    args.min <= args.max,
    "--min ({}) must not exceed --max ({})",
    args.min,
    args.max
  );
  let mut rng = match args.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy(),
  };
  let points = random_points(args.count, args.min..=args.max, &mut rng);
  tracing::info!(
    points = points.len(),
    min = args.min,
    max = args.max,
    seed = ?args.seed,
    "generated points"
  );

  let hull = convex_hull(points.clone()).context("computing the convex hull")?;
  tracing::info!(
    vertices = hull.len(),
    degenerate = hull.is_degenerate(),
    "computed convex hull"
  );

  let mut out = String::new();
  for pt in hull.iter() {
    writeln!(out, "{pt}")?;
  }
  if !args.quiet {
    let printer = BraillePrinter::new(&hull).with_width(args.width);
    let printer = if args.no_points {
      printer
    } else {
      printer.with_points(&points)
    };
    write!(out, "{printer}")?;
  }
  Ok(out)
}
