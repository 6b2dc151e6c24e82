//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate derive_more;
extern crate thiserror;
extern crate log;

mod geometry;
mod knot;
mod ring;
mod numeric;
mod pen;
mod subdivide;
mod convolve;
mod stroke;
mod builders;
mod affine;
mod bbox;

pub use geometry::{Coord, Vec2, Vec4, Rect};
pub use knot::*;
pub use ring::*;
pub use numeric::*;
pub use pen::*;
pub use subdivide::*;
pub use convolve::*;
pub use stroke::*;
pub use builders::*;
pub use affine::*;
pub use bbox::*;
