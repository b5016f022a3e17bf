//! Capabilities shared by every container in this crate.
//!
//! A container holds exactly one immutable inner value behind one of two
//! variants: a successful one and a failed one. Transformations never mutate a
//! container; they consume it and build a new one.

use std::fmt;

/// A two-variant container that can report which variant it holds.
///
/// Implemented by [`Maybe`](crate::Maybe) and [`Outcome`](crate::Outcome) for
/// any payload, so [`is_successful`](crate::is_successful) works on borrowed
/// and thread-local payloads too.
pub trait Container {
    /// Returns true if this is the successful variant.
    fn is_success(&self) -> bool;
}

/// A container whose inner value can be extracted.
///
/// Extraction may halt the enclosing pipeline, so the payload that would
/// travel with the halt has to be `Send + 'static`. Generic code works
/// against this trait instead of a concrete container.
pub trait Unwrappable: Container + Sized {
    /// Payload of the successful variant.
    type Value;

    /// Payload of the failed variant.
    type Failure;

    /// Returns the successful payload, or halts the enclosing pipeline.
    fn unwrap(self) -> Self::Value;

    /// Returns the failed payload, or halts the enclosing pipeline.
    fn failure(self) -> Self::Failure;
}

/// Writes `<Variant: inner>`, or `<Variant>` for a variant without payload.
pub(crate) fn render(
    f: &mut fmt::Formatter<'_>,
    variant: &str,
    inner: Option<&dyn fmt::Display>,
) -> fmt::Result {
    match inner {
        Some(inner) => write!(f, "<{}: {}>", variant, inner),
        None => write!(f, "<{}>", variant),
    }
}
