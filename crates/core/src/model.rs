use std::marker::PhantomData;

use crate::Coord;

/// A callable model that maps an input to an output.
///
/// A forward transform is a `Model<Input = Coord, Output = Coord>`. Any state
/// the transform needs (projection parameters, grids, user data) lives in the
/// implementing type and is never touched by the solvers.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

impl<M: Model + ?Sized> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (**self).call(input)
    }
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// A forward transform backed by a closure.
///
/// Created by [`from_fn`].
pub struct FnModel<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Wraps a closure `Fn(Coord) -> Result<Coord, E>` as a forward transform.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use geoinv_core::{Coord, Model, from_fn};
///
/// let double = from_fn(|c: Coord| Ok::<_, Infallible>(Coord::new(2.0 * c.x, 2.0 * c.y)));
/// assert_eq!(double.call(&Coord::new(1.0, 2.0)).unwrap(), Coord::new(2.0, 4.0));
/// ```
pub fn from_fn<F, E>(f: F) -> FnModel<F, E>
where
    F: Fn(Coord) -> Result<Coord, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    FnModel {
        f,
        _error: PhantomData,
    }
}

impl<F, E> Model for FnModel<F, E>
where
    F: Fn(Coord) -> Result<Coord, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Input = Coord;
    type Output = Coord;
    type Error = E;

    fn call(&self, input: &Coord) -> Result<Coord, E> {
        (self.f)(*input)
    }
}
