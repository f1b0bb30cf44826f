//! Numerical solvers for the geoinv workspace.
//!
//! # Modules
//!
//! - [`inverse`] — inverting a forward coordinate transform, given only the
//!   forward transform itself

pub mod inverse;
