//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function: reads a pen and a path from files, runs
// the full pen-convolution pipeline, and reports a summary
//--------------------------------------------------------------------

extern crate quill_core;
extern crate quill_svg;

use clap::Parser;
use quill_core::{brush_make, convolve_all, pen_from_points, show_segments, split_at_tees, stroke_bounds, Coord, Rgba, Stroke, Vec2};
use std::process::ExitCode;

/// Sweeps a pen along a path and prints a summary of the resulting stroke.
#[derive(Parser, Debug)]
#[command(name = "quill", version)]
struct Args {
    /// Path to a file containing SVG path data for the path to stroke.
    #[arg(long)]
    path: String,

    /// Path to a file containing one "x,y" corner per line, listing
    /// the pen's knots in counter-clockwise order.
    #[arg(long)]
    pen: String,
}

fn parse_pen_file(contents: &str) -> Result<Vec<Vec2>, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.splitn(2, ',');
            let x: Coord = parts.next().ok_or("missing x")?.trim().parse().map_err(|_| "bad x")?;
            let y: Coord = parts.next().ok_or("missing y")?.trim().parse().map_err(|_| "bad y")?;
            Ok(Vec2::new(x, y))
        })
        .collect()
}

fn run(args: &Args) -> Result<Stroke, String> {
    let pen_text = std::fs::read_to_string(&args.pen).map_err(|e| format!("reading pen file: {}", e))?;
    let points = parse_pen_file(&pen_text)?;
    let (mut pen, pen_first) = pen_from_points(&points);
    brush_make(&mut pen, pen_first).map_err(|e| format!("invalid pen: {}", e))?;

    let path_text = std::fs::read_to_string(&args.path).map_err(|e| format!("reading path file: {}", e))?;
    let (mut path, path_first) = quill_svg::path_from_str(&path_text).map_err(|e| format!("invalid path: {}", e))?;

    split_at_tees(&mut path, path_first, &pen, pen_first);
    let forward = convolve_all(&path, path_first, &pen, pen_first);

    let (mut reversed, reversed_first) = path.clone_ring(path_first);
    let reversed_first = reversed.reverse(reversed_first);
    let backward = convolve_all(&reversed, reversed_first, &pen, pen_first);

    let mut stroke = Stroke::new(Rgba::new(0.0, 0.0, 0.0, 1.0));
    show_segments(forward, &mut stroke);
    show_segments(backward, &mut stroke);

    Ok(stroke)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(stroke) => {
            log::info!("stroke assembled with {} cubic piece(s)", stroke.length);
            println!("pieces: {}", stroke.length);
            match stroke_bounds(&stroke) {
                Some(bounds) => println!("bounds: {}", bounds),
                None => println!("bounds: (empty stroke)"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
