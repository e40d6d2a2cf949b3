//! `Lazy<T>`: the single-threaded suspendable-computation primitive.
//!
//! A not-yet-started computation that completes with a value or an error.
//! Rust has no stable general coroutine machinery this crate could build
//! on, so this is a direct-recursion realization: a closure-holding thunk
//! run to completion synchronously inside [`Lazy::get`]. Awaiting a
//! sub-`Lazy` is just calling `.get()` on it from inside the outer closure;
//! the call site *is* the suspension point, there's simply no separate
//! scheduler to suspend into.

use std::cell::RefCell;

use crate::error::{Error, Result};

enum State<T> {
    /// Not yet started; holds the thunk that produces the result.
    Created(Box<dyn FnOnce() -> Result<T>>),
    /// Currently running. Only observed if `get()` re-enters itself.
    Suspended,
    /// Absorbing terminal state: `std::variant<monostate, T, exception_ptr>`
    /// collapsed to a `Result`.
    Done(Result<T>),
}

/// A computation that produces a `T` or an [`Error`], started lazily and
/// run to completion at most once.
pub struct Lazy<T> {
    state: RefCell<State<T>>,
}

impl<T: Clone> Lazy<T> {
    /// Wraps a thunk as a not-yet-started computation.
    pub fn new(thunk: impl FnOnce() -> Result<T> + 'static) -> Self {
        Lazy { state: RefCell::new(State::Created(Box::new(thunk))) }
    }

    /// A computation that is already complete with `value`.
    pub fn ready(value: T) -> Self {
        Lazy { state: RefCell::new(State::Done(Ok(value))) }
    }

    /// A computation that is already complete with `error`.
    pub fn failed(error: Error) -> Self {
        Lazy { state: RefCell::new(State::Done(Err(error))) }
    }

    /// Runs the computation to completion (idempotent after the first
    /// call) and returns its result. Calling `get` again after the first
    /// call is well-defined (it returns the memoized result), even though
    /// no algorithm in this crate relies on that.
    pub fn get(&self) -> Result<T> {
        let thunk = {
            let mut state = self.state.borrow_mut();
            match &*state {
                State::Done(result) => return result.clone(),
                State::Suspended => {
                    panic!("Lazy::get called re-entrantly on the same computation")
                }
                State::Created(_) => {}
            }
            match std::mem::replace(&mut *state, State::Suspended) {
                State::Created(thunk) => thunk,
                _ => unreachable!("checked above"),
            }
        };
        log::trace!("Lazy::get: running thunk");
        let result = thunk();
        if let Err(ref e) = result {
            log::debug!("Lazy::get: computation failed: {e}");
        }
        *self.state.borrow_mut() = State::Done(result.clone());
        result
    }

    /// Fire-and-forget: starts the computation eagerly and terminates the
    /// program on an uncaught error. Test scaffolding only — never used by
    /// the numeric core.
    pub fn detach(self) {
        if let Err(e) = self.get() {
            panic!("detached Lazy computation failed: {e}");
        }
    }
}
