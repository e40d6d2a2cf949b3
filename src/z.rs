//! Signed arbitrary-precision integers (`Z`), the kernel everything else is
//! built on.
//!
//! Digits are stored least-significant first in a `Vec<D>`; normal form (no
//! trailing zero digit, canonical zero is positive) is an invariant every
//! function here restores before returning.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use crate::digits::{Digit, DefaultDigit};
use crate::error::{Error, Result};

/// Sign tag carried alongside a [`Z`]'s magnitude. Zero is always positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    fn xor(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A signed arbitrary-precision integer over digit width `D` (default
/// 32-bit limbs; see [`crate::digits::Digit`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Z<D: Digit = DefaultDigit> {
    /// Least-significant-digit-first magnitude.
    pub(crate) digits: Vec<D>,
    pub(crate) sign: Sign,
}

impl<D: Digit> Z<D> {
    /// The canonical zero.
    pub fn zero() -> Self {
        Z { digits: Vec::new(), sign: Sign::Positive }
    }

    /// `1`.
    pub fn one() -> Self {
        Z { digits: vec![D::from_wide(1)], sign: Sign::Positive }
    }

    /// Builds a `Z` directly from LSD-first digits and a sign, normalizing
    /// the result.
    pub fn from_digits(digits: Vec<D>, sign: Sign) -> Self {
        let mut z = Z { digits, sign };
        normalize(&mut z);
        z
    }

    /// Number of stored digits (post-normalization, so `0` for zero).
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// Number of significant bits in the magnitude (`0` for zero).
    pub fn bit_length(&self) -> u64 {
        match self.digits.last() {
            None => 0,
            Some(&top) => {
                (self.digits.len() as u64 - 1) * u64::from(D::BITS)
                    + u64::from(D::BITS - top.digit_leading_zeros())
            }
        }
    }
}

impl<D: Digit> From<i64> for Z<D> {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut mag = value.unsigned_abs();
        let mut digits = Vec::new();
        let base = 1u64 << D::BITS;
        while mag > 0 {
            digits.push(D::from_wide(mag % base));
            mag /= base;
        }
        Z::from_digits(digits, sign)
    }
}

/// `true` iff `z` is the canonical zero.
pub fn is_zero<D: Digit>(z: &Z<D>) -> bool {
    z.digits.is_empty()
}

/// `true` iff `z`'s sign tag is positive. Zero is positive.
pub fn is_positive<D: Digit>(z: &Z<D>) -> bool {
    z.sign == Sign::Positive
}

/// Strips trailing (most-significant) zero digits; forces the sign to
/// positive if the result is empty.
pub fn normalize<D: Digit>(z: &mut Z<D>) -> &mut Z<D> {
    while matches!(z.digits.last(), Some(&d) if d == D::from_wide(0)) {
        z.digits.pop();
    }
    if z.digits.is_empty() {
        z.sign = Sign::Positive;
    }
    z
}

/// Flips the sign; normalizes so negating zero stays zero.
pub fn negate<D: Digit>(mut z: Z<D>) -> Z<D> {
    z.sign = z.sign.flip();
    normalize(&mut z);
    z
}

/// Compares magnitudes only, ignoring sign. `-1`/`0`/`1`.
pub fn cmp_n<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> i32 {
    if lhs.digits.len() != rhs.digits.len() {
        return if lhs.digits.len() < rhs.digits.len() { -1 } else { 1 };
    }
    for (a, b) in lhs.digits.iter().rev().zip(rhs.digits.iter().rev()) {
        match a.cmp(b) {
            Ordering::Less => return -1,
            Ordering::Greater => return 1,
            Ordering::Equal => {}
        }
    }
    0
}

/// Magnitude addition; the result may be one digit longer than the longer
/// input.
pub fn add_n<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    let (a, b) = if lhs.digits.len() >= rhs.digits.len() {
        (&lhs.digits, &rhs.digits)
    } else {
        (&rhs.digits, &lhs.digits)
    };
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: u64 = 0;
    for i in 0..a.len() {
        let sum = a[i].to_wide() + if i < b.len() { b[i].to_wide() } else { 0 } + carry;
        out.push(D::from_wide(sum));
        carry = sum >> D::BITS;
    }
    if carry > 0 {
        out.push(D::from_wide(carry));
    }
    Z::from_digits(out, Sign::Positive)
}

/// Magnitude subtraction. Precondition: `|lhs| >= |rhs|`.
pub fn sub_n<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    debug_assert!(cmp_n(lhs, rhs) >= 0, "sub_n requires |lhs| >= |rhs|");
    let base = 1u64 << D::BITS;
    let mut out = Vec::with_capacity(lhs.digits.len());
    let mut borrow: u64 = 0;
    for i in 0..lhs.digits.len() {
        let a = lhs.digits[i].to_wide();
        let b = if i < rhs.digits.len() { rhs.digits[i].to_wide() } else { 0 };
        let (diff, new_borrow) = if a >= b + borrow {
            (a - b - borrow, 0)
        } else {
            (base + a - b - borrow, 1)
        };
        out.push(D::from_wide(diff));
        borrow = new_borrow;
    }
    debug_assert_eq!(borrow, 0, "sub_n precondition violated");
    Z::from_digits(out, Sign::Positive)
}

/// Signed addition.
pub fn add<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    if lhs.sign == rhs.sign {
        let mut r = add_n(lhs, rhs);
        r.sign = lhs.sign;
        normalize(&mut r);
        r
    } else {
        let (minuend, subtrahend, sign) = if cmp_n(lhs, rhs) >= 0 {
            (lhs, rhs, lhs.sign)
        } else {
            (rhs, lhs, rhs.sign)
        };
        let mut r = sub_n(minuend, subtrahend);
        r.sign = if is_zero(&r) { Sign::Positive } else { sign };
        r
    }
}

/// Signed subtraction, `lhs - rhs`.
pub fn sub<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    add(lhs, &negate(rhs.clone()))
}

/// Schoolbook magnitude multiplication, `O(m*n)` digit products with a
/// `u64` scratch accumulator per column.
pub fn mul_n<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    if is_zero(lhs) || is_zero(rhs) {
        return Z::zero();
    }
    let mut out = vec![D::from_wide(0); lhs.digits.len() + rhs.digits.len()];
    for (j, &bj) in rhs.digits.iter().enumerate() {
        let mut carry: u64 = 0;
        for (i, &ai) in lhs.digits.iter().enumerate() {
            let acc = out[i + j].to_wide() + ai.to_wide() * bj.to_wide() + carry;
            out[i + j] = D::from_wide(acc);
            carry = acc >> D::BITS;
        }
        out[j + lhs.digits.len()] = D::from_wide(carry);
    }
    Z::from_digits(out, Sign::Positive)
}

/// Signed multiplication; a zero product is always positive-signed.
pub fn mul<D: Digit>(lhs: &Z<D>, rhs: &Z<D>) -> Z<D> {
    let mut r = mul_n(lhs, rhs);
    if !is_zero(&r) {
        r.sign = lhs.sign.xor(rhs.sign);
    }
    r
}

/// Magnitude division by a single digit, using a double-width transient
/// remainder register. Returns `(quotient, remainder digit)`.
pub fn div_n_digit<D: Digit>(u: &Z<D>, v: D) -> Result<(Z<D>, D)> {
    if v == D::from_wide(0) {
        return Err(Error::DivideByZero);
    }
    let divisor = v.to_wide();
    let mut quotient = vec![D::from_wide(0); u.digits.len()];
    let mut rem: u64 = 0;
    for i in (0..u.digits.len()).rev() {
        let window = (rem << D::BITS) | u.digits[i].to_wide();
        quotient[i] = D::from_wide(window / divisor);
        rem = window % divisor;
    }
    Ok((Z::from_digits(quotient, Sign::Positive), D::from_wide(rem)))
}

/// Left-shifts a magnitude digit vector in place by `amount` bits
/// (`0 <= amount < D::BITS`), returning the bits shifted out the top as an
/// overflow digit (`0` if none).
fn shl_bits<D: Digit>(digits: &mut [D], amount: u32) -> D {
    if amount == 0 {
        return D::from_wide(0);
    }
    let mut carry: u64 = 0;
    for d in digits.iter_mut() {
        let wide = (d.to_wide() << amount) | carry;
        *d = D::from_wide(wide & (D::MAX.to_wide()));
        carry = wide >> D::BITS;
    }
    D::from_wide(carry)
}

/// Knuth Algorithm D long division for a multi-digit divisor (`v.len() >=
/// 2`), on magnitudes only. `u.len() >= v.len()` is required.
///
/// Normalizes by left-shifting both operands so the divisor's top digit has
/// no leading zero bit, estimates each quotient digit from the top two
/// divisor digits with a correction loop, then multiplies-and-subtracts
/// with a conditional add-back when the estimate overshoots.
fn knuth_div<D: Digit>(u: &[D], v: &[D]) -> (Vec<D>, Vec<D>) {
    let n = v.len();
    let m = u.len() - n;
    let base = 1u64 << D::BITS;

    let s = v[n - 1].digit_leading_zeros();
    let mut v = v.to_vec();
    shl_bits(&mut v, s);

    let mut u = u.to_vec();
    let carry = shl_bits(&mut u, s);
    u.push(carry);

    let mut q = vec![D::from_wide(0); m + 1];

    for j in (0..=m).rev() {
        let u_top = (u[j + n].to_wide() << D::BITS) | u[j + n - 1].to_wide();
        let mut qhat = u_top / v[n - 1].to_wide();
        let mut rhat = u_top % v[n - 1].to_wide();
        while qhat >= base || qhat * v[n - 2].to_wide() > rhat * base + u[j + n - 2].to_wide() {
            qhat -= 1;
            rhat += v[n - 1].to_wide();
            if rhat >= base {
                break;
            }
        }

        let mut borrow: i64 = 0;
        for i in 0..n {
            let p = qhat * v[i].to_wide();
            let diff = u[i + j].to_wide() as i64 - borrow - (p & (base - 1)) as i64;
            u[i + j] = D::from_wide(diff.rem_euclid(base as i64) as u64);
            borrow = (p >> D::BITS) as i64 - diff.div_euclid(base as i64);
        }
        let top_diff = u[j + n].to_wide() as i64 - borrow;
        u[j + n] = D::from_wide(top_diff.rem_euclid(base as i64) as u64);
        q[j] = D::from_wide(qhat);

        if top_diff < 0 {
            q[j] = D::from_wide(qhat - 1);
            let mut carry: u64 = 0;
            for i in 0..n {
                let sum = u[i + j].to_wide() + v[i].to_wide() + carry;
                u[i + j] = D::from_wide(sum & (base - 1));
                carry = sum >> D::BITS;
            }
            u[j + n] = D::from_wide((u[j + n].to_wide() + carry) & (base - 1));
        }
    }

    // Un-normalize the remainder; quotient needs no un-shift.
    let shift_back = if s == 0 { 0 } else { D::BITS - s };
    if shift_back != 0 && shift_back != D::BITS {
        let mut carry: u64 = 0;
        for d in u.iter_mut().rev() {
            let wide = d.to_wide();
            let new = (wide >> s) | carry;
            carry = (wide << shift_back) & (base - 1);
            *d = D::from_wide(new);
        }
    }

    (q, u)
}

/// Magnitude division (quotient, remainder) for arbitrary divisors,
/// dispatching to the single-digit or Knuth Algorithm D path.
pub fn div_n<D: Digit>(u: &Z<D>, v: &Z<D>) -> Result<(Z<D>, Z<D>)> {
    if is_zero(v) {
        return Err(Error::DivideByZero);
    }
    match cmp_n(u, v) {
        -1 => Ok((Z::zero(), u.clone())),
        0 => Ok((Z::one(), Z::zero())),
        _ => {
            if v.digits.len() == 1 {
                let (q, r) = div_n_digit(u, v.digits[0])?;
                Ok((q, Z::from_digits(vec![r], Sign::Positive)))
            } else {
                let (q, r) = knuth_div(&u.digits, &v.digits);
                Ok((Z::from_digits(q, Sign::Positive), Z::from_digits(r, Sign::Positive)))
            }
        }
    }
}

/// Signed truncated division: `q = trunc(u / v)`, `r = u - q*v`, so
/// `sign(r) = sign(u)` whenever `r != 0`.
pub fn div<D: Digit>(u: &Z<D>, v: &Z<D>) -> Result<(Z<D>, Z<D>)> {
    let (mut q, mut r) = div_n(u, v)?;
    if !is_zero(&q) {
        q.sign = u.sign.xor(v.sign);
    }
    if !is_zero(&r) {
        r.sign = u.sign;
    }
    Ok((q, r))
}

/// As [`div`], but the quotient rounds toward negative infinity.
pub fn floor_div<D: Digit>(u: &Z<D>, v: &Z<D>) -> Result<(Z<D>, Z<D>)> {
    let (q, r) = div(u, v)?;
    if is_zero(&r) || u.sign == v.sign {
        Ok((q, r))
    } else {
        let q = sub(&q, &Z::one());
        let r = add(&r, v);
        Ok((q, r))
    }
}

/// As [`div`], but the quotient rounds toward positive infinity.
pub fn ceil_div<D: Digit>(u: &Z<D>, v: &Z<D>) -> Result<(Z<D>, Z<D>)> {
    let (q, r) = div(u, v)?;
    if is_zero(&r) || u.sign != v.sign {
        Ok((q, r))
    } else {
        let q = add(&q, &Z::one());
        let r = sub(&r, v);
        Ok((q, r))
    }
}

/// In-place-semantics multiply/divide by `2^k` (`k` signed): left-shifts
/// for `k > 0`, right-shifts (toward zero on the shifted-out bits) for
/// `k < 0`. Whole-digit moves handle `|k| >= D::BITS`; the remainder is an
/// intra-digit shift.
pub fn mul_2exp<D: Digit>(z: &Z<D>, k: i64) -> Z<D> {
    if k == 0 || is_zero(z) {
        return z.clone();
    }
    if k > 0 {
        let whole = (k as u64 / u64::from(D::BITS)) as usize;
        let bits = (k as u64 % u64::from(D::BITS)) as u32;
        let mut digits = vec![D::from_wide(0); whole];
        digits.extend_from_slice(&z.digits);
        let carry = shl_bits(&mut digits[whole..], bits);
        if carry != D::from_wide(0) {
            digits.push(carry);
        }
        Z::from_digits(digits, z.sign)
    } else {
        let shift = (-k) as u64;
        let whole = (shift / u64::from(D::BITS)) as usize;
        let bits = (shift % u64::from(D::BITS)) as u32;
        if whole >= z.digits.len() {
            return Z::zero();
        }
        let mut digits = z.digits[whole..].to_vec();
        if bits > 0 {
            let mut carry: u64 = 0;
            for d in digits.iter_mut().rev() {
                let wide = d.to_wide();
                let new = (wide >> bits) | carry;
                carry = (wide << (D::BITS - bits)) & D::MAX.to_wide();
                *d = D::from_wide(new);
            }
        }
        Z::from_digits(digits, z.sign)
    }
}

/// Multiply/divide by `4^k`: equivalent to [`mul_2exp`] with shift `2*k`,
/// checked against precision-parameter overflow.
pub fn mul_4exp<D: Digit>(z: &Z<D>, k: i64) -> Result<Z<D>> {
    let bits = k.checked_mul(2).ok_or(Error::PrecisionOverflow)?;
    Ok(mul_2exp(z, bits))
}

/// Floor integer `k`-th root of a magnitude (`k >= 2`; negative radicand is
/// an error). Implemented via bisection in the magnitude's own arithmetic,
/// since the root only needs to be as precise as `Z` comparisons allow.
pub fn root<D: Digit>(z: &Z<D>, k: u32) -> Result<Z<D>> {
    if k < 2 {
        return Err(Error::KthRootTooSmall { k });
    }
    if !is_positive(z) && !is_zero(z) {
        return Err(Error::NegativeRadicand);
    }
    if is_zero(z) {
        return Ok(Z::zero());
    }

    let bit_len = z.bit_length();
    let hi_bits = bit_len / u64::from(k) + 2;
    let mut lo = Z::zero();
    let mut hi = mul_2exp(&Z::one(), hi_bits as i64);

    let one = Z::one();
    while cmp_n(&add(&lo, &one), &hi) < 0 {
        let mid = mul_2exp(&add(&lo, &hi), -1);
        if cmp_n(&pow(&mid, k), z) <= 0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(lo)
}

/// `base^exp` by repeated squaring. `exp == 0` yields `1` regardless of
/// `base` (including `base == 0`, matching the usual integer convention).
pub fn pow<D: Digit>(base: &Z<D>, exp: u32) -> Z<D> {
    let mut result = Z::one();
    let mut base = base.clone();
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(&result, &base);
        }
        base = mul(&base, &base);
        exp >>= 1;
    }
    result
}

impl<D: Digit> Neg for Z<D> {
    type Output = Z<D>;
    fn neg(self) -> Z<D> {
        negate(self)
    }
}

impl<D: Digit> Add for &Z<D> {
    type Output = Z<D>;
    fn add(self, rhs: &Z<D>) -> Z<D> {
        add(self, rhs)
    }
}

impl<D: Digit> Sub for &Z<D> {
    type Output = Z<D>;
    fn sub(self, rhs: &Z<D>) -> Z<D> {
        sub(self, rhs)
    }
}

impl<D: Digit> Mul for &Z<D> {
    type Output = Z<D>;
    fn mul(self, rhs: &Z<D>) -> Z<D> {
        mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Sz = Z<u8>;

    fn digits(ds: &[u8]) -> Sz {
        Z::from_digits(ds.to_vec(), Sign::Positive)
    }

    fn neg_digits(ds: &[u8]) -> Sz {
        Z::from_digits(ds.to_vec(), Sign::Negative)
    }

    #[test]
    fn normalize_strips_trailing_zeros_and_forces_positive_zero() {
        let mut z: Sz = Z::from_digits(vec![0, 1, 2, 0, 0], Sign::Negative);
        assert!(!is_zero(&z));
        assert!(!is_positive(&z));
        normalize(&mut z);
        assert_eq!(z.digits, vec![0, 1, 2]);
        assert!(!is_positive(&z));

        let mut zero: Sz = Z::from_digits(vec![0, 0], Sign::Negative);
        normalize(&mut zero);
        assert!(is_zero(&zero));
        assert!(is_positive(&zero));
    }

    #[test]
    fn add_basic_identities() {
        let zero = Sz::zero();
        let one = digits(&[1]);
        let minus_one = neg_digits(&[1]);
        assert!(is_zero(&add(&zero, &zero)));
        assert!(is_zero(&add(&one, &minus_one)));
        assert_eq!(add(&zero, &one), one);
        assert_eq!(add(&one, &zero), one);
    }

    #[test]
    fn add_n_carries_across_digit_boundary() {
        let a = digits(&[255]);
        let b = digits(&[1]);
        assert_eq!(add_n(&a, &b), digits(&[0, 1]));
    }

    #[test]
    fn sub_n_borrows_across_digit_boundary() {
        let a = digits(&[0, 1]);
        let b = digits(&[1]);
        assert_eq!(sub_n(&a, &b), digits(&[255]));
    }

    #[test]
    fn cmp_n_ignores_sign_and_orders_by_length_then_digits() {
        let a = digits(&[1, 2]);
        let b = digits(&[2, 1]);
        assert!(cmp_n(&a, &b) > 0);
        assert!(cmp_n(&b, &a) < 0);
        assert_eq!(cmp_n(&Sz::zero(), &Sz::zero()), 0);
    }

    #[test]
    fn mul_sign_rules() {
        let a: Z<u32> = Z::from(3);
        let b: Z<u32> = Z::from(-4);
        let p = mul(&a, &b);
        assert_eq!(p, Z::from(-12));
        assert!(is_zero(&mul(&Z::<u32>::zero(), &b)));
        assert!(is_positive(&mul(&Z::<u32>::zero(), &b)));
    }

    #[test]
    fn div_matches_truncated_division_scenarios() {
        let eleven: Z<u32> = Z::from(11);
        let seven: Z<u32> = Z::from(7);
        let minus_eleven: Z<u32> = Z::from(-11);
        let minus_seven: Z<u32> = Z::from(-7);

        let (q, r) = div(&eleven, &seven).unwrap();
        assert_eq!(q, Z::from(1));
        assert_eq!(r, Z::from(4));

        let (q, r) = div(&minus_eleven, &seven).unwrap();
        assert_eq!(q, Z::from(-1));
        assert_eq!(r, Z::from(-4));

        let (q, r) = div(&eleven, &minus_seven).unwrap();
        assert_eq!(q, Z::from(-1));
        assert_eq!(r, Z::from(4));
        let _ = minus_seven;
    }

    #[test]
    fn div_by_zero_is_an_error() {
        let a: Z<u32> = Z::from(5);
        assert_eq!(div(&a, &Z::zero()).unwrap_err(), Error::DivideByZero);
    }

    #[test]
    fn knuth_division_multi_digit_divisor() {
        let a: Z<u16> = Z::from(3_142);
        let b: Z<u16> = Z::from(53);
        let (q, r) = div(&a, &b).unwrap();
        assert_eq!(q, Z::from(59));
        assert_eq!(r, Z::from(15));
    }

    #[test]
    fn mul_4exp_matches_the_seed_scenario() {
        // Z{digits=[4,1]} (base 256) >> 1 base-4 digit (2 bits) == Z{digits=[0x41]}
        let z: Z<u8> = Z::from_digits(vec![4, 1], Sign::Positive);
        let shifted = mul_4exp(&z, -1).unwrap();
        assert_eq!(shifted, digits(&[0x41]));
    }

    #[test]
    fn root_floor_examples() {
        let n: Z<u32> = Z::from(128);
        assert_eq!(root(&n, 2).unwrap(), Z::from(11));
        let cube: Z<u32> = Z::from(1_000);
        assert_eq!(root(&cube, 3).unwrap(), Z::from(10));
        assert_eq!(root(&Z::<u32>::zero(), 2).unwrap(), Z::zero());
    }

    #[test]
    fn root_rejects_bad_k_and_negative_radicand() {
        let n: Z<u32> = Z::from(4);
        assert_eq!(root(&n, 1).unwrap_err(), Error::KthRootTooSmall { k: 1 });
        let neg: Z<u32> = Z::from(-4);
        assert_eq!(root(&neg, 2).unwrap_err(), Error::NegativeRadicand);
    }

    #[test]
    fn floor_and_ceil_div_round_away_from_truncation() {
        let minus_eleven: Z<u32> = Z::from(-11);
        let seven: Z<u32> = Z::from(7);

        // trunc(-11/7) = -1 rem -4; floor rounds the quotient down to -2.
        let (q, r) = floor_div(&minus_eleven, &seven).unwrap();
        assert_eq!(q, Z::from(-2));
        assert_eq!(r, Z::from(3));
        assert_eq!(add(&mul(&q, &seven), &r), minus_eleven);

        let eleven: Z<u32> = Z::from(11);
        let minus_seven: Z<u32> = Z::from(-7);

        // trunc(11/-7) = -1 rem 4; ceil rounds the quotient up to -2.
        let (q, r) = ceil_div(&eleven, &minus_seven).unwrap();
        assert_eq!(q, Z::from(-2));
        assert_eq!(r, Z::from(-3));
        assert_eq!(add(&mul(&q, &minus_seven), &r), eleven);

        // Exact division takes the same path in all three conventions.
        let twelve: Z<u32> = Z::from(12);
        let three: Z<u32> = Z::from(3);
        assert_eq!(floor_div(&twelve, &three).unwrap(), (Z::from(4), Z::zero()));
        assert_eq!(ceil_div(&twelve, &three).unwrap(), (Z::from(4), Z::zero()));
    }
}
