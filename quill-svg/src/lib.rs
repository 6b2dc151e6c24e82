//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Adapts SVG path-data syntax into a quill-core path Ring, replaying
// each SVG command as a PathBuilder call
//--------------------------------------------------------------------

extern crate quill_core;
extern crate svg;

use quill_core::{Coord, PathBuilder, Ring, NodeId, Vec2};
use svg::node::element::path::*;

#[derive(thiserror::Error, Debug)]
pub enum SvgPathError {
    #[error("could not parse SVG path data: {0}")]
    Parse(#[from] svg::parser::Error),
    #[error("path data is empty")]
    Empty,
    #[error("multiple subpaths are not supported, only a single continuous path")]
    MultipleSubpaths,
    #[error("elliptical arc commands are not supported, only line and cubic/quadratic segments")]
    UnsupportedArc,
}

fn process_relative(cmd: Vec2, relative: Position, last_value: Vec2) -> Vec2 {
    match relative {
        Position::Absolute => cmd,
        Position::Relative => last_value + cmd,
    }
}

fn process_update_relative(cmd: Vec2, relative: Position, last_value: &mut Vec2) -> Vec2 {
    let pos = match relative {
        Position::Absolute => cmd,
        Position::Relative => *last_value + cmd,
    };

    *last_value = pos;
    pos
}

/// Elevates a quadratic Bezier (p0, ctrl, p1) to the equivalent cubic
/// control pair, since the core's path ring only ever holds cubic
/// segments.
fn elevate_quadratic(p0: Vec2, ctrl: Vec2, p1: Vec2) -> (Vec2, Vec2) {
    let c1 = p0 + (2.0 / 3.0) * (ctrl - p0);
    let c2 = p1 + (2.0 / 3.0) * (ctrl - p1);
    (c1, c2)
}

/// Parses an SVG path-data string into a single path ring. Only one
/// continuous subpath (one leading `M`, no further `M`/`m`) is
/// supported -- a path ring models exactly one open path, not a
/// disjoint union of them.
pub fn path_from_str(data: &str) -> Result<(Ring, NodeId), SvgPathError> {
    enum LastCmd { Quadratic, Cubic, Other }

    let parsed = Data::parse(data)?;

    let mut last_value = Vec2::new(0.0, 0.0);
    let mut last_control = Vec2::new(0.0, 0.0);
    let mut last_command = LastCmd::Other;
    let mut builder: Option<PathBuilder> = None;

    for command in parsed.into_iter() {
        match command {
            Command::Move(pos, params) => {
                if builder.is_some() { return Err(SvgPathError::MultipleSubpaths); }

                let mut chunks = params.chunks_exact(2);
                let first = chunks.next().ok_or(SvgPathError::Empty)?;
                let start = process_update_relative(Vec2::new(first[0] as Coord, first[1] as Coord), *pos, &mut last_value);
                last_command = LastCmd::Other;
                let mut b = PathBuilder::moveto(start);

                for cmd in chunks {
                    let target = process_update_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    b = b.lineto(target);
                }

                builder = Some(b);
            }
            Command::Line(pos, params) => {
                let b = builder.take().ok_or(SvgPathError::Empty)?;
                let mut b = b;
                for cmd in params.chunks_exact(2) {
                    let target = process_update_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    b = b.lineto(target);
                }
                builder = Some(b);
            }
            Command::HorizontalLine(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.iter() {
                    let v = if *pos == Position::Relative { 0.0 } else { last_value.y };
                    let target = process_update_relative(Vec2::new(*cmd as Coord, v), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    b = b.lineto(target);
                }
                builder = Some(b);
            }
            Command::VerticalLine(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.iter() {
                    let h = if *pos == Position::Relative { 0.0 } else { last_value.x };
                    let target = process_update_relative(Vec2::new(h, *cmd as Coord), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    b = b.lineto(target);
                }
                builder = Some(b);
            }
            Command::QuadraticCurve(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.chunks_exact(4) {
                    let start = last_value;
                    let ctrl = process_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, last_value);
                    let target = process_update_relative(Vec2::new(cmd[2] as Coord, cmd[3] as Coord), *pos, &mut last_value);
                    let (c1, c2) = elevate_quadratic(start, ctrl, target);
                    last_control = ctrl;
                    last_command = LastCmd::Quadratic;
                    b = b.curveto(c1, c2, target);
                }
                builder = Some(b);
            }
            Command::CubicCurve(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.chunks_exact(6) {
                    let ctl1 = process_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, last_value);
                    let ctl2 = process_relative(Vec2::new(cmd[2] as Coord, cmd[3] as Coord), *pos, last_value);
                    let target = process_update_relative(Vec2::new(cmd[4] as Coord, cmd[5] as Coord), *pos, &mut last_value);
                    last_control = ctl2;
                    last_command = LastCmd::Cubic;
                    b = b.curveto(ctl1, ctl2, target);
                }
                builder = Some(b);
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.chunks_exact(2) {
                    let start = last_value;
                    let lctl = if let LastCmd::Quadratic = last_command { last_control } else { last_value };
                    let ctrl = 2.0 * last_value - lctl;
                    let target = process_update_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, &mut last_value);
                    let (c1, c2) = elevate_quadratic(start, ctrl, target);
                    last_control = ctrl;
                    last_command = LastCmd::Quadratic;
                    b = b.curveto(c1, c2, target);
                }
                builder = Some(b);
            }
            Command::SmoothCubicCurve(pos, params) => {
                let mut b = builder.take().ok_or(SvgPathError::Empty)?;
                for cmd in params.chunks_exact(4) {
                    let lctl = if let LastCmd::Cubic = last_command { last_control } else { last_value };
                    let ctl1 = 2.0 * last_value - lctl;
                    let ctl2 = process_relative(Vec2::new(cmd[0] as Coord, cmd[1] as Coord), *pos, last_value);
                    let target = process_update_relative(Vec2::new(cmd[2] as Coord, cmd[3] as Coord), *pos, &mut last_value);
                    last_control = ctl2;
                    last_command = LastCmd::Cubic;
                    b = b.curveto(ctl1, ctl2, target);
                }
                builder = Some(b);
            }
            Command::EllipticalArc(..) => return Err(SvgPathError::UnsupportedArc),
            Command::Close => {
                let b = builder.take().ok_or(SvgPathError::Empty)?;
                last_command = LastCmd::Other;
                builder = Some(b.pathclose());
            }
        }
    }

    let b = builder.ok_or(SvgPathError::Empty)?;
    Ok(b.build())
}
