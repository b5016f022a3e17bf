//! The presence container.
//!
//! [`Maybe`] represents the result of a series of computations that can come
//! up empty. It replaces repeated `is_none` checks: compose with
//! [`Maybe::map`], [`Maybe::map_value`] and [`Maybe::bind`], consume with [`Maybe::value_or`], or
//! call [`Maybe::unwrap`] inside a [`pipeline`](crate::pipeline()) to stop at the
//! first missing value.
//!
//! ```
//! use returns::Maybe;
//!
//! let greeting = Maybe::from_value(Some("world")).map_value(|name| format!("hello {name}"));
//! assert_eq!(greeting, Maybe::Some("hello world".to_string()));
//!
//! let first = Maybe::Some("").map(|name| name.chars().next());
//! assert_eq!(first, Maybe::Nothing);
//! ```

use std::convert::Infallible;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::{render, Container, Unwrappable};
use crate::error::{Result, ReturnsError};
use crate::signal;

/// A value that is either present or absent.
///
/// Every `Nothing` of a given type equals every other one; it carries no
/// payload and is compared by variant only.
#[must_use = "this `Maybe` may be `Nothing`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Maybe<V> {
    /// A present value.
    Some(V),
    /// No value.
    Nothing,
}

impl<V> Maybe<V> {
    /// Creates a container from a value that may be `None`.
    ///
    /// `None` becomes `Nothing`, anything else becomes `Some`.
    pub fn from_value(value: Option<V>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::Nothing,
        }
    }

    /// Returns true if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns true if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Composes a present value with a function that may come up empty.
    ///
    /// `Some(v).map(f)` is `from_value(f(v))`: a `None` result collapses to
    /// `Nothing`, so `map` never builds `Some(None)`. `function` is never
    /// called on `Nothing`.
    pub fn map<W, F>(self, function: F) -> Maybe<W>
    where
        F: FnOnce(V) -> Option<W>,
    {
        match self {
            Maybe::Some(value) => Maybe::from_value(function(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Composes a present value with a function that always yields a value.
    pub fn map_value<W, F>(self, function: F) -> Maybe<W>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(function(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Composes a present value with a function that returns a container.
    pub fn bind<W, F>(self, function: F) -> Maybe<W>
    where
        F: FnOnce(V) -> Maybe<W>,
    {
        match self {
            Maybe::Some(value) => function(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the present value, or `default` for `Nothing`.
    pub fn value_or(self, default: V) -> V {
        match self {
            Maybe::Some(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Returns the present value, or computes one for `Nothing`.
    pub fn value_or_else<F>(self, default: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::Nothing => default(),
        }
    }

    /// Returns the present value.
    ///
    /// On `Nothing` this halts the enclosing [`pipeline`](crate::pipeline()),
    /// which then returns `Nothing`. Outside a pipeline the halt surfaces as a
    /// panic.
    pub fn unwrap(self) -> V {
        match self {
            Maybe::Some(value) => value,
            Maybe::Nothing => signal::raise(Maybe::<Infallible>::Nothing, "unwrap", "Nothing"),
        }
    }

    /// Returns the "no error" token `()` for `Nothing`.
    ///
    /// On `Some` this halts the enclosing [`pipeline`](crate::pipeline()) with
    /// the same `Some`.
    pub fn failure(self)
    where
        V: Send + 'static,
    {
        match self {
            Maybe::Nothing => (),
            halted @ Maybe::Some(_) => signal::raise(halted, "failure", "Some"),
        }
    }

    /// Turns a function that may come up empty into one that works on
    /// containers.
    ///
    /// `Maybe::lift(f)(container)` is `container.map(f)`.
    pub fn lift<W, F>(function: F) -> impl Fn(Maybe<V>) -> Maybe<W>
    where
        F: Fn(V) -> Option<W>,
    {
        move |container| container.map(&function)
    }

    /// Converts into the standard library's `Option`.
    pub fn into_option(self) -> Option<V> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<V: fmt::Display> Maybe<V> {
    /// Returns the present value, or an error instead of halting.
    pub fn try_unwrap(self) -> Result<V> {
        match self {
            Maybe::Some(value) => Ok(value),
            halted @ Maybe::Nothing => Err(ReturnsError::UnwrapFailed {
                container: halted.to_string(),
            }),
        }
    }

    /// Returns `()` for `Nothing`, or an error instead of halting.
    pub fn try_failure(self) -> Result<()> {
        match self {
            Maybe::Nothing => Ok(()),
            halted @ Maybe::Some(_) => Err(ReturnsError::FailureOnSuccess {
                container: halted.to_string(),
            }),
        }
    }
}

impl<W> Maybe<Maybe<W>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Maybe<W> {
        self.bind(|inner| inner)
    }
}

impl<W> Maybe<Option<W>> {
    /// Collapses `Some(None)` into `Nothing`.
    pub fn normalize(self) -> Maybe<W> {
        self.map(|value| value)
    }
}

impl<V> Default for Maybe<V> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<V> From<Option<V>> for Maybe<V> {
    fn from(value: Option<V>) -> Self {
        Maybe::from_value(value)
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    fn from(container: Maybe<V>) -> Self {
        container.into_option()
    }
}

impl<V: fmt::Display> fmt::Display for Maybe<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Some(value) => render(f, "Some", Some(value)),
            Maybe::Nothing => render(f, "Nothing", None),
        }
    }
}

impl<V> Container for Maybe<V> {
    fn is_success(&self) -> bool {
        self.is_some()
    }
}

impl<V> Unwrappable for Maybe<V>
where
    V: Send + 'static,
{
    type Value = V;
    type Failure = ();

    fn unwrap(self) -> V {
        Maybe::unwrap(self)
    }

    fn failure(self) {
        Maybe::failure(self)
    }
}
