//! `epx` — computable real-number arithmetic.
//!
//! A real number here isn't a fixed-width float: it's a *precision
//! oracle*, a value that when queried with an integer precision `n`
//! returns an arbitrary-precision integer approximation within `+/-1` of
//! `alpha * 4^n`. Arithmetic on these values — [`real::add`], [`real::mul`],
//! [`real::inv`], [`real::root`] — composes oracles lazily; digits are
//! produced on demand to whatever precision a caller asks for, by
//! [`decimal::to_decimal`] or a raw [`R::approx`] call.
//!
//! The crate is layered bottom-up:
//! - [`digits`]/[`z`] — a signed arbitrary-precision integer kernel (`Z`),
//!   generic over digit width.
//! - [`decimal`] — parsing and rendering `Z` and `R` as decimal text.
//! - [`coro`] — `Lazy<T>`, the single-threaded suspendable-computation
//!   primitive the real layer is built on.
//! - [`real`] — the computable-real layer `R` and its combinators.
//! - [`error`] — the named failure taxonomy shared by all of the above.
//!
//! Nothing in this crate touches a thread, a clock, or the filesystem; the
//! `log` crate is used at oracle invocation boundaries and `msd`/division
//! error paths, but this crate never installs a logger itself — that's a
//! consuming binary's job.

pub mod coro;
pub mod decimal;
pub mod digits;
pub mod error;
pub mod real;
pub mod z;

pub use coro::Lazy;
pub use decimal::{parse_decimal, render_z, to_decimal};
pub use digits::{DefaultDigit, Digit};
pub use error::{Error, Result};
pub use real::{add, inv, make_q, msd, mul, opp, root, R};
pub use z::{div, mul_4exp, Sign, Z};

use std::sync::OnceLock;

/// Default value of [`max_msd`].
pub const DEFAULT_MAX_MSD: i64 = 10_000;

static MAX_MSD: OnceLock<i64> = OnceLock::new();

/// Overrides the process-wide `max_msd` ceiling that bounds [`real::msd`]'s
/// scan depth, and which [`real::inv`] uses to decide when an operand is
/// indistinguishable from zero.
///
/// Meant to be set once, before the engine's first use — a
/// construction-time tunable, not a live knob. Calling this more than once
/// is a silent no-op (the first call wins) rather than a panic.
pub fn set_max_msd(value: i64) {
    if MAX_MSD.set(value).is_err() {
        log::debug!("set_max_msd: ignoring override, max_msd was already set");
    }
}

/// The configured `max_msd`, or [`DEFAULT_MAX_MSD`] if [`set_max_msd`] was
/// never called.
pub fn max_msd() -> i64 {
    *MAX_MSD.get().unwrap_or(&DEFAULT_MAX_MSD)
}
