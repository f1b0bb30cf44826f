//! Core traits and types for the geoinv workspace.
//!
//! This crate defines the shared abstractions that the inverse solver and its
//! observers build on:
//!
//! - [`Coord`] — a 2D coordinate pair in either input or output space
//! - [`Model`] — a callable that maps a typed input to a typed output; a
//!   forward transform is any `Model<Input = Coord, Output = Coord>`
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`GeoTransform`] — an affine six-coefficient transform, handy for seeding
//!   initial guesses

mod coord;
mod geotransform;
mod model;
mod observer;

pub use coord::Coord;
pub use geotransform::GeoTransform;
pub use model::{FnModel, Model, Snapshot, from_fn};
pub use observer::Observer;
