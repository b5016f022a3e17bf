//! The short-circuit signal raised by `unwrap` and `failure`.
//!
//! The signal unwinds the stack from the halting call up to the nearest
//! [`pipeline`](crate::pipeline()) boundary, which turns it back into a container.
//! It is raised with [`std::panic::resume_unwind`], so the panic hook never
//! runs for it. Nothing outside this crate can name or catch it.
//!
//! Each thread counts the boundaries it is currently inside. A halt with no
//! boundary around it, or one that unwinds past every boundary, is turned
//! into an ordinary panic so it is reported like any other unhandled fault.

use std::any::Any;
use std::cell::Cell;
use std::panic;

/// Unwinding payload as handed over by `catch_unwind`.
pub type Payload = Box<dyn Any + Send>;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Carries the container whose `unwrap` or `failure` halted the pipeline.
///
/// The type parameter that the halting variant does not use is erased to
/// [`std::convert::Infallible`] before raising, so a boundary can rebuild the
/// container for its own return type.
struct UnwrapFailed {
    halted: Box<dyn Any + Send>,
    call: &'static str,
    variant: &'static str,
}

/// Marks the current thread as inside a pipeline boundary until dropped.
#[must_use]
pub(crate) struct Boundary(());

impl Boundary {
    pub(crate) fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Boundary(())
    }
}

impl Drop for Boundary {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn inside_boundary() -> bool {
    DEPTH.with(|depth| depth.get() > 0)
}

/// Halts the enclosing pipeline with `halted`.
///
/// `call` names the extraction (`unwrap` or `failure`) and `variant` the
/// variant it was called on. Outside every pipeline this panics instead.
pub(crate) fn raise<C>(halted: C, call: &'static str, variant: &'static str) -> !
where
    C: Send + 'static,
{
    if !inside_boundary() {
        panic!("{call} called on {variant} outside a pipeline");
    }
    tracing::trace!(call, variant, "container halted the pipeline");
    panic::resume_unwind(Box::new(UnwrapFailed {
        halted: Box::new(halted),
        call,
        variant,
    }))
}

/// Takes the halted container out of `payload` if it was raised for `C`.
///
/// Hands the payload back untouched otherwise.
pub(crate) fn intercept<C>(payload: Payload) -> Result<C, Payload>
where
    C: 'static,
{
    let signal = payload.downcast::<UnwrapFailed>()?;
    let UnwrapFailed {
        halted,
        call,
        variant,
    } = *signal;
    match halted.downcast::<C>() {
        Ok(halted) => Ok(*halted),
        Err(halted) => Err(Box::new(UnwrapFailed {
            halted,
            call,
            variant,
        })),
    }
}

/// Keeps `payload` unwinding after a boundary could not recover it.
///
/// A signal leaving the outermost boundary becomes a regular panic.
pub(crate) fn escape(payload: Payload) -> ! {
    if inside_boundary() {
        panic::resume_unwind(payload);
    }
    match payload.downcast::<UnwrapFailed>() {
        Ok(signal) => panic!(
            "{} called on {} was not caught by any pipeline",
            signal.call, signal.variant
        ),
        Err(payload) => panic::resume_unwind(payload),
    }
}
