//! raster-demo: renders the raster-curves scenes to PNG files.
//!
//! ```text
//! raster-demo lines -o star.png
//! raster-demo triangles -o triangles.png
//! raster-demo spline --points random --seed 3 --smoothness 2 -o spline.png
//! ```

mod logging;
mod scenes;
mod viewport;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use raster_curves::{RenderingBuffer, Rgb8, Smoothness};

use crate::logging::{init_logging, LogColor};
use crate::scenes::{render_triangles, LineStar, SplineScene};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Image width in pixels [default: 600, 640 for `spline`]
    #[arg(long, global = true)]
    width: Option<u32>,
    /// Image height in pixels [default: 300, 480 for `spline`]
    #[arg(long, global = true)]
    height: Option<u32>,
    /// Where to write the PNG
    #[arg(long, short, default_value = "out.png", global = true)]
    output: PathBuf,
    /// Log filter in `env_logger` syntax; overrides RUST_LOG
    #[arg(long, global = true)]
    log: Option<String>,
    /// Color log output
    #[arg(long, value_enum, default_value_t = LogColor::Auto, global = true)]
    color: LogColor,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// A star of Bresenham lines
    Lines(LinesArgs),
    /// Four gradient-filled triangles: general, unordered, flat bottom, flat top
    Triangles,
    /// A cubic Bézier spline with its control polygon
    Spline(SplineArgs),
}

#[derive(clap::Args, Debug)]
struct LinesArgs {
    #[arg(long, default_value_t = 150)]
    center_x: i32,
    #[arg(long, default_value_t = 150)]
    center_y: i32,
    #[arg(long, default_value_t = 100)]
    radius: i32,
    /// Number of spokes
    #[arg(long, default_value_t = 20)]
    count: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PointSet {
    /// The fixed 16-point test set
    Test,
    /// A 16-point random walk
    Random,
}

/// `--smoothness` values, named by level.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SmoothnessArg {
    /// C0: segments only share endpoints
    #[value(name = "0", alias = "c0")]
    C0,
    /// C1: tangents match at joints
    #[value(name = "1", alias = "c1")]
    C1,
    /// C2: curvature matches at joints
    #[value(name = "2", alias = "c2")]
    C2,
}

impl From<SmoothnessArg> for Smoothness {
    fn from(arg: SmoothnessArg) -> Self {
        match arg {
            SmoothnessArg::C0 => Smoothness::C0,
            SmoothnessArg::C1 => Smoothness::C1,
            SmoothnessArg::C2 => Smoothness::C2,
        }
    }
}

#[derive(clap::Args, Debug)]
struct SplineArgs {
    #[arg(long, value_enum, default_value_t = PointSet::Test)]
    points: PointSet,
    /// Seed for `--points random`; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Joint continuity
    #[arg(long, value_enum, default_value_t = SmoothnessArg::C0)]
    smoothness: SmoothnessArg,
    /// Samples per segment
    #[arg(long, default_value_t = 20)]
    samples: u32,
    /// Factor applied to x and y after smoothing
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref(), args.color);

    let (default_w, default_h) = match args.command {
        Command::Spline(_) => (640, 480),
        _ => (600, 300),
    };
    let width = args.width.unwrap_or(default_w);
    let height = args.height.unwrap_or(default_h);
    let mut buf = RenderingBuffer::new(width, height, Rgb8::default());

    match &args.command {
        Command::Lines(a) => {
            let star = LineStar {
                center_x: a.center_x,
                center_y: a.center_y,
                radius: a.radius,
                count: a.count,
            };
            log::info!("rendering {} lines at {width}x{height}", star.count);
            star.render(&mut buf);
        }
        Command::Triangles => {
            log::info!("rendering gradient triangles at {width}x{height}");
            render_triangles(&mut buf);
        }
        Command::Spline(a) => {
            let points = match a.points {
                PointSet::Test => scenes::test_points(),
                PointSet::Random => {
                    let mut rng = match a.seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    scenes::random_points(&mut rng)
                }
            };
            let smoothness = Smoothness::from(a.smoothness);
            log::info!(
                "rendering {:?} spline, {smoothness}, {} samples per segment, scale {} at {width}x{height}",
                a.points,
                a.samples,
                a.scale
            );
            SplineScene {
                points,
                smoothness,
                samples_per_segment: a.samples,
                scale: a.scale,
            }
            .render(&mut buf)
            .context("rendering spline")?;
        }
    }

    write_png(&buf, &args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn write_png(buf: &RenderingBuffer, path: &Path) -> Result<()> {
    let img = image::RgbImage::from_raw(buf.width(), buf.height(), buf.to_rgb_bytes())
        .context("framebuffer does not match its dimensions")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))
}
