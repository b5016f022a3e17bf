//! Pipeline boundaries.
//!
//! Inside a pipeline, `unwrap` reads like straight-line code: each call either
//! yields the successful payload or stops the whole function, which then
//! returns the container that halted it. Nothing after the halting call runs.
//!
//! ```
//! use returns::{pipeline, Outcome};
//!
//! let total = pipeline(|(units, price): (Outcome<u32, String>, Outcome<u32, String>)| {
//!     let units = units.unwrap();
//!     let price = price.unwrap();
//!     Outcome::Success(units * price)
//! });
//!
//! assert_eq!(total((Outcome::Success(3), Outcome::Success(5))), Outcome::Success(15));
//! assert_eq!(
//!     total((Outcome::Failure("out of stock".into()), Outcome::Success(5))),
//!     Outcome::Failure("out of stock".to_string()),
//! );
//! ```
//!
//! A boundary catches halts of its own container family only: `Nothing`
//! unwrapped inside a function returning [`Outcome`] keeps unwinding to an
//! outer boundary, or surfaces as a panic if there is none. `Failure(e)` is
//! caught by any boundary returning `Outcome<_, E>`, whatever its success type.
//! The value-carrying halts of `failure` keep their value type: `Some(v)` and
//! `Success(v)` with `v: V` are only caught by a boundary returning `Maybe<V>`
//! or `Outcome<V, _>`, and keep unwinding past any other.
//!
//! The nearest enclosing boundary wins, so a nested pipeline returns its own
//! halted container to the code around it.

use std::convert::Infallible;
use std::panic::{self, AssertUnwindSafe};

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::signal::{self, Payload};

mod sealed {
    pub trait Sealed {}

    impl<W> Sealed for crate::Maybe<W> {}
    impl<W, E> Sealed for crate::Outcome<W, E> {}
}

/// A container a pipeline can return.
///
/// Implemented for [`Maybe`] and [`Outcome`]; not implementable elsewhere.
pub trait PipelineReturn: sealed::Sealed + Sized + 'static {
    /// Rebuilds the halted container from a signal, or hands the payload back.
    #[doc(hidden)]
    fn recover(payload: Payload) -> Result<Self, Payload>;
}

impl<W: 'static> PipelineReturn for Maybe<W> {
    fn recover(payload: Payload) -> Result<Self, Payload> {
        let payload = match signal::intercept::<Maybe<Infallible>>(payload) {
            Ok(halted) => return Ok(halted.map_value(|never| match never {})),
            Err(payload) => payload,
        };
        signal::intercept::<Maybe<W>>(payload)
    }
}

impl<W: 'static, E: 'static> PipelineReturn for Outcome<W, E> {
    fn recover(payload: Payload) -> Result<Self, Payload> {
        let payload = match signal::intercept::<Outcome<Infallible, E>>(payload) {
            Ok(halted) => return Ok(halted.map(|never| match never {})),
            Err(payload) => payload,
        };
        signal::intercept::<Outcome<W, Infallible>>(payload)
            .map(|halted| halted.alt(|never| match never {}))
    }
}

/// Runs `body` as a pipeline.
///
/// Returns whatever `body` returns, or the container whose `unwrap` (or
/// `failure`) halted it. Any other panic keeps unwinding, and a halt no
/// boundary can recover turns into a panic once it leaves the outermost one.
pub fn run<C, F>(body: F) -> C
where
    C: PipelineReturn,
    F: FnOnce() -> C,
{
    let finished = {
        let _boundary = signal::Boundary::enter();
        panic::catch_unwind(AssertUnwindSafe(body))
    };
    match finished {
        Ok(container) => container,
        Err(payload) => match C::recover(payload) {
            Ok(halted) => {
                tracing::debug!("pipeline halted, returning the halted container");
                halted
            }
            Err(payload) => signal::escape(payload),
        },
    }
}

/// Wraps `function` in a pipeline boundary.
///
/// Every call of the returned function runs as its own pipeline (see
/// [`run`]). Pass several arguments as a tuple.
pub fn pipeline<A, C, F>(function: F) -> impl Fn(A) -> C
where
    C: PipelineReturn,
    F: Fn(A) -> C,
{
    move |args| run(|| function(args))
}
