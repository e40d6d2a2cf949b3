//! The lazy computable-real layer `R` and its combinators.
//!
//! Every combinator is built the same way: an oracle closure around a
//! `Lazy` computation, deferring every fallible step to `approx` time.

use std::cell::RefCell;
use std::rc::Rc;

use crate::coro::Lazy;
use crate::digits::Digit;
use crate::error::{Error, Result};
use crate::z::{self, Z};

/// A computable real: an oracle `approx(n) -> Z` plus the monotonic
/// memoization record `(mpa, x_mpa)`.
///
/// Combinators return `Rc<R<D>>` rather than `R<D>` so a sub-expression can
/// be shared between two parents without giving up the memoization cache:
/// cloning the `Rc` shares one cache.
pub struct R<D: Digit> {
    oracle: Box<dyn Fn(i64) -> Lazy<Z<D>>>,
    cache: RefCell<Option<(i64, Z<D>)>>,
}

impl<D: Digit> R<D> {
    /// Wraps an oracle function as a fresh, unmemoized-so-far `R`.
    pub fn new(oracle: impl Fn(i64) -> Lazy<Z<D>> + 'static) -> Self {
        R { oracle: Box::new(oracle), cache: RefCell::new(None) }
    }

    /// Queries the approximation at precision `n`, satisfying
    /// `|approx(n) - alpha * 4^n| <= 1`. Serves cache hits (`n <= mpa`) by
    /// right-shifting the cached value in base 4 rather than re-invoking
    /// the oracle.
    pub fn approx(&self, n: i64) -> Result<Z<D>> {
        if let Some((mpa, x_mpa)) = &*self.cache.borrow() {
            if n <= *mpa {
                log::trace!("R::approx: cache hit at mpa={mpa}, n={n}");
                return z::mul_4exp(x_mpa, n - mpa);
            }
        }
        log::trace!("R::approx: cache miss at n={n}, invoking oracle");
        let value = (self.oracle)(n).get()?;
        *self.cache.borrow_mut() = Some((n, value.clone()));
        Ok(value)
    }
}

/// The rational constant `p/q` (`q != 0`). `x(n) = floor(p * 4^n / q)`.
pub fn make_q<D: Digit>(p: Z<D>, q: Z<D>) -> Rc<R<D>> {
    Rc::new(R::new(move |n| {
        let p = p.clone();
        let q = q.clone();
        Lazy::new(move || {
            let shifted = z::mul_4exp(&p, n)?;
            let (quotient, _) = z::floor_div(&shifted, &q)?;
            Ok(quotient)
        })
    }))
}

/// `x + y`. `(x+y)(n) = mul_4exp(x(n+1) + y(n+1), -1)`: each input is
/// accurate to +/-1 at precision `n+1`, their sum to +/-2 in those units
/// (+/-1/2 in units of `1/4^n`), and the outer right-shift costs at most
/// another +/-1/2, for a total error bound of 1.
pub fn add<D: Digit>(x: &Rc<R<D>>, y: &Rc<R<D>>) -> Rc<R<D>> {
    let x = Rc::clone(x);
    let y = Rc::clone(y);
    Rc::new(R::new(move |n| {
        let x = Rc::clone(&x);
        let y = Rc::clone(&y);
        Lazy::new(move || {
            let m = n.checked_add(1).ok_or(Error::PrecisionOverflow)?;
            let xm = x.approx(m)?;
            let ym = y.approx(m)?;
            z::mul_4exp(&z::add(&xm, &ym), -1)
        })
    }))
}

/// `-x`. `(-x)(n) = -x(n)`.
pub fn opp<D: Digit>(x: &Rc<R<D>>) -> Rc<R<D>> {
    let x = Rc::clone(x);
    Rc::new(R::new(move |n| {
        let x = Rc::clone(&x);
        Lazy::new(move || Ok(z::negate(x.approx(n)?)))
    }))
}

/// The most-significant-digit index of `x`: the least `i` such that
/// `|x| >= 2 * 4^(-i)`, searched up to `max` steps.
///
/// The branch tests compare `x(0)` against `0`, `1`, `4`; since `msd` is a
/// property of `|x|`, this uses [`z::cmp_n`] throughout (magnitude-only
/// comparison) rather than a signed one, so a large negative real routes
/// through the same branch as its positive mirror image instead of falling
/// into the zero/small-value scan.
pub fn msd<D: Digit>(x: &R<D>, max: i64) -> Result<i64> {
    let x0 = x.approx(0)?;
    let four = Z::from(4);
    let one = Z::<D>::one();

    if z::cmp_n(&x0, &four) > 0 {
        let mut i = -1i64;
        loop {
            let xi = x.approx(i)?;
            if z::cmp_n(&xi, &one) <= 0 {
                return Ok(i + 1);
            }
            i -= 1;
        }
    } else if z::cmp_n(&x0, &one) > 0 {
        Ok(0)
    } else if !z::is_zero(&x0) {
        Ok(1)
    } else {
        let mut i = 0i64;
        loop {
            let xi = x.approx(i)?;
            if z::cmp_n(&xi, &one) > 0 {
                return Ok(i);
            }
            if i >= max {
                return Ok(i);
            }
            i += 1;
        }
    }
}

/// `x * y`. Uses [`msd`] on each operand to pick precisions `px`, `py`
/// high enough that `x(px) * y(py)` alone determines the product to
/// within +/-1 at the requested output precision `n`.
pub fn mul<D: Digit>(x: &Rc<R<D>>, y: &Rc<R<D>>) -> Rc<R<D>> {
    let x = Rc::clone(x);
    let y = Rc::clone(y);
    Rc::new(R::new(move |n| {
        let x = Rc::clone(&x);
        let y = Rc::clone(&y);
        Lazy::new(move || {
            let local_bound = n
                .checked_add(3)
                .and_then(|v| n.checked_add(2).map(|h| v - h / 2))
                .ok_or(Error::PrecisionOverflow)?;
            let my = msd(&y, local_bound)?;
            let mx = msd(&x, local_bound)?;
            let px = n.checked_sub(my).and_then(|v| v.checked_add(3)).ok_or(Error::PrecisionOverflow)?;
            let py = n.checked_sub(mx).and_then(|v| v.checked_add(3)).ok_or(Error::PrecisionOverflow)?;

            let x_px = x.approx(px)?;
            let y_py = y.approx(py)?;
            let product_plus_one = z::add(&z::mul(&x_px, &y_py), &Z::one());
            let shift = n
                .checked_sub(px)
                .and_then(|v| v.checked_sub(py))
                .ok_or(Error::PrecisionOverflow)?;
            z::mul_4exp(&product_plus_one, shift)
        })
    }))
}

/// `1/x`. `msd(x, max_msd)` reaching the configured bound is treated as
/// `x` being indistinguishable from zero within that bound, which
/// surfaces as [`Error::MsdOverflow`].
pub fn inv<D: Digit>(x: &Rc<R<D>>) -> Rc<R<D>> {
    let x = Rc::clone(x);
    Rc::new(R::new(move |n| {
        let x = Rc::clone(&x);
        Lazy::new(move || {
            let bound = crate::max_msd();
            let m = msd(&x, bound)?;
            if m >= bound {
                return Err(Error::MsdOverflow { bound });
            }
            if n <= -m {
                return Ok(Z::zero());
            }
            let k = n
                .checked_add(m.checked_mul(2).ok_or(Error::PrecisionOverflow)?)
                .and_then(|v| v.checked_add(1))
                .ok_or(Error::PrecisionOverflow)?;
            let x_k = x.approx(k)?;
            let denom = z::add(&x_k, &Z::one());
            let exp = k.checked_add(n).ok_or(Error::PrecisionOverflow)?;
            let numerator = z::mul_4exp(&Z::one(), exp)?;
            let (q, _) = z::ceil_div(&numerator, &denom)?;
            Ok(z::add(&q, &Z::one()))
        })
    }))
}

/// The floor `k`-th root of `x` (`k >= 2`). Negative radicand and `k < 2`
/// surface as errors from [`z::root`] applied to the approximation.
pub fn root<D: Digit>(x: &Rc<R<D>>, k: u32) -> Rc<R<D>> {
    let x = Rc::clone(x);
    Rc::new(R::new(move |n| {
        let x = Rc::clone(&x);
        Lazy::new(move || {
            let kn = n.checked_mul(i64::from(k)).ok_or(Error::PrecisionOverflow)?;
            let x_kn = x.approx(kn)?;
            z::root(&x_kn, k)
        })
    }))
}
