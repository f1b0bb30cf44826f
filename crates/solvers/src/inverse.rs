//! Solvers for inverse problems: given a forward transform `F` and a target
//! `t`, find the input `p` such that `F(p) ≈ t`.
//!
//! The forward transform is any [`Model`] mapping [`Coord`] to [`Coord`]. It is
//! treated as opaque: the solvers know nothing about ellipsoids, datums, or
//! projection formulas, and only ever call it.
//!
//! # Solvers
//!
//! - [`newton`] — 2D Newton-Raphson with a finite-difference Jacobian
//!
//! [`Model`]: geoinv_core::Model
//! [`Coord`]: geoinv_core::Coord

pub mod jacobian;
pub mod newton;
