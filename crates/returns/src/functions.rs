//! Free functions over containers.

use crate::container::Container;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Returns true if calling `unwrap` on `container` would not halt.
///
/// ```
/// use returns::{is_successful, Maybe, Outcome};
///
/// assert!(is_successful(&Outcome::<i32, &str>::Success(1)));
/// assert!(!is_successful(&Maybe::<i32>::Nothing));
/// ```
pub fn is_successful<C>(container: &C) -> bool
where
    C: Container + ?Sized,
{
    container.is_success()
}

/// Converts a fallible function into one that returns an [`Outcome`].
///
/// Ordinary faults are the `Err` values `function` returns; each becomes
/// `Failure(err)` and a normal return becomes `Success(value)`. Panics are
/// fatal faults and are never caught, and neither is a halted pipeline.
pub fn fault_to_outcome<A, T, E, F>(function: F) -> impl Fn(A) -> Outcome<T, E>
where
    F: Fn(A) -> Result<T, E>,
{
    move |args| match function(args) {
        Ok(value) => Outcome::Success(value),
        Err(error) => {
            tracing::debug!("function returned an error, wrapping it in Failure");
            Outcome::Failure(error)
        }
    }
}

/// Converts a function returning `Option` into one that returns a [`Maybe`].
///
/// ```
/// use returns::{absence_to_presence, Maybe};
///
/// let inverse = absence_to_presence(|x: i32| if x == 0 { None } else { Some(1.0 / x as f64) });
/// assert_eq!(inverse(0), Maybe::Nothing);
/// assert_eq!(inverse(1), Maybe::Some(1.0));
/// ```
pub fn absence_to_presence<A, T, F>(function: F) -> impl Fn(A) -> Maybe<T>
where
    F: Fn(A) -> Option<T>,
{
    move |args| Maybe::from_value(function(args))
}
