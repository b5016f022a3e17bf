//! The outcome container.
//!
//! [`Outcome`] is the result of a computation that either succeeded with a
//! value or failed with an error. Unlike [`Maybe`](crate::Maybe), the failed
//! side carries information, so it has its own combinators: [`Outcome::alt`],
//! [`Outcome::rescue`] and [`Outcome::fix`].
//!
//! ```
//! use returns::Outcome;
//!
//! let parsed: Outcome<u16, String> = Outcome::from("8080".parse::<u16>())
//!     .alt(|err| err.to_string());
//! assert_eq!(parsed.map(|port| port + 1), Outcome::Success(8081));
//! ```

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::{render, Container, Unwrappable};
use crate::error::{Result, ReturnsError};
use crate::signal;

/// Either a successful value or an error.
///
/// The variant is part of equality: `Success(x)` never equals `Failure(x)`.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Outcome<V, E> {
    /// The computation succeeded.
    Success(V),
    /// The computation failed.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    /// Returns true for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Composes a successful value with a pure function.
    ///
    /// A `Failure` passes through with its error untouched.
    pub fn map<W, F>(self, function: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Composes a successful value with a function that returns a container.
    pub fn bind<W, F>(self, function: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> Outcome<W, E>,
    {
        match self {
            Outcome::Success(value) => function(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Composes an error with a pure function. `Success` passes through.
    pub fn alt<G, F>(self, function: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Composes an error with a function that returns a container.
    ///
    /// This is how a failed computation gets a second chance.
    pub fn rescue<G, F>(self, function: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> Outcome<V, G>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => function(error),
        }
    }

    /// Turns a failure into a success by computing a value from the error.
    pub fn fix<G, F>(self, function: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> V,
    {
        self.rescue(|error| Outcome::Success(function(error)))
    }

    /// Returns the successful value, or `default` for a failure.
    pub fn value_or(self, default: V) -> V {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the successful value, or computes one from the error.
    pub fn value_or_else<F>(self, default: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => default(error),
        }
    }

    /// Returns the successful value.
    ///
    /// On `Failure(e)` this halts the enclosing
    /// [`pipeline`](crate::pipeline()), which then returns `Failure(e)`.
    /// Outside a pipeline the halt surfaces as a panic.
    pub fn unwrap(self) -> V
    where
        E: Send + 'static,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                signal::raise(Outcome::<Infallible, E>::Failure(error), "unwrap", "Failure")
            }
        }
    }

    /// Returns the error.
    ///
    /// On `Success(v)` this halts the enclosing
    /// [`pipeline`](crate::pipeline()), which then returns `Success(v)`.
    pub fn failure(self) -> E
    where
        V: Send + 'static,
    {
        match self {
            Outcome::Failure(error) => error,
            Outcome::Success(value) => {
                signal::raise(Outcome::<V, Infallible>::Success(value), "failure", "Success")
            }
        }
    }

    /// Turns a plain function into one that works on containers.
    ///
    /// `Outcome::lift(f)(container)` is `container.map(f)`.
    pub fn lift<W, F>(function: F) -> impl Fn(Outcome<V, E>) -> Outcome<W, E>
    where
        F: Fn(V) -> W,
    {
        move |container| container.map(&function)
    }

    /// Converts into the standard library's `Result`.
    pub fn into_result(self) -> std::result::Result<V, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> Outcome<V, E> {
    /// Returns the successful value, or an error instead of halting.
    pub fn try_unwrap(self) -> Result<V> {
        match self {
            Outcome::Success(value) => Ok(value),
            halted @ Outcome::Failure(_) => Err(ReturnsError::UnwrapFailed {
                container: halted.to_string(),
            }),
        }
    }

    /// Returns the error, or an error instead of halting.
    pub fn try_failure(self) -> Result<E> {
        match self {
            Outcome::Failure(error) => Ok(error),
            halted @ Outcome::Success(_) => Err(ReturnsError::FailureOnSuccess {
                container: halted.to_string(),
            }),
        }
    }
}

impl<V, E> From<std::result::Result<V, E>> for Outcome<V, E> {
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for std::result::Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => render(f, "Success", Some(value)),
            Outcome::Failure(error) => render(f, "Failure", Some(error)),
        }
    }
}

impl<V, E> Container for Outcome<V, E> {
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }
}

impl<V, E> Unwrappable for Outcome<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    type Value = V;
    type Failure = E;

    fn unwrap(self) -> V {
        Outcome::unwrap(self)
    }

    fn failure(self) -> E {
        Outcome::failure(self)
    }
}
