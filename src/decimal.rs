//! Signed decimal text in both directions, and fixed-point rendering of a
//! computable real.
//!
//! Malformed input is an absent value, not an error: the parser never
//! raises one of the named error kinds.

use nom::branch::alt;
use nom::character::complete::{char as nom_char, digit1};
use nom::combinator::{all_consuming, opt};
use nom::sequence::pair;
use nom::IResult;

use crate::digits::Digit;
use crate::error::Result;
use crate::real::R;
use crate::z::{self, Sign, Z};

fn signed_integer(input: &str) -> IResult<&str, (Option<char>, &str)> {
    all_consuming(pair(opt(alt((nom_char('+'), nom_char('-')))), digit1))(input)
}

/// Parses a signed decimal integer: an optional `+`/`-` followed by one or
/// more ASCII digits. Returns `None` on anything that doesn't match — a
/// lone sign, stray characters, non-ASCII digits — rather than an error;
/// parsing never throws.
///
/// Empty input is accepted as zero. Leading zeros are accepted. A `-` on
/// an all-zero magnitude collapses to the canonical positive zero.
pub fn parse_decimal<D: Digit>(input: &str) -> Option<Z<D>> {
    if input.is_empty() {
        return Some(Z::zero());
    }
    let (_, (sign_ch, digits)) = signed_integer(input).ok()?;
    let sign = if sign_ch == Some('-') { Sign::Negative } else { Sign::Positive };

    let ten: Z<D> = Z::from_digits(vec![D::from_wide(10)], Sign::Positive);
    let mut acc = Z::<D>::zero();
    for ch in digits.chars() {
        // digit1 guarantees an ASCII '0'..='9' run.
        let d = ch.to_digit(10).expect("digit1 output is ASCII decimal") as u64;
        acc = z::mul_n(&acc, &ten);
        acc = z::add_n(&acc, &Z::from_digits(vec![D::from_wide(d)], Sign::Positive));
    }
    acc.sign = sign;
    Some(Z::from_digits(acc.digits, acc.sign))
}

/// Renders a `Z` as signed decimal text: `"0"` for zero, otherwise
/// repeated division by ten with the remainder digits reversed, and a
/// leading `-` for negative values. Never emits `+`, leading zeros, or
/// `-0`.
pub fn render_z<D: Digit>(value: &Z<D>) -> String {
    if z::is_zero(value) {
        return "0".to_string();
    }
    let ten = D::from_wide(10);
    let mut mag = Z::from_digits(value.digits.clone(), Sign::Positive);
    let mut out = Vec::new();
    while !z::is_zero(&mag) {
        let (q, r) = z::div_n_digit(&mag, ten).expect("ten is a nonzero digit");
        out.push(b'0' + r.to_wide() as u8);
        mag = q;
    }
    if !z::is_positive(value) {
        out.push(b'-');
    }
    out.reverse();
    String::from_utf8(out).expect("only ASCII digits and '-' were pushed")
}

/// `log_4(10)`, used to size the working precision in [`to_decimal`].
const LOG4_10: f64 = 1.660_964_05;

/// Renders `x` to exactly `k` fractional decimal digits: `"[-]?D+"` when
/// `k == 0`, else `"[-]?D+\.D{k}"`, rounding half-away-from-zero.
pub fn to_decimal<D: Digit>(x: &R<D>, k: u32) -> Result<String> {
    let n = (LOG4_10 * f64::from(k)).floor() as i64 + 10;
    let x_n = x.approx(n)?;

    let negative = !z::is_positive(&x_n) && !z::is_zero(&x_n);
    let mag = Z::from_digits(x_n.digits.clone(), Sign::Positive);

    // d = floor( floor( (2*|x_n| + 1) * 10^k + 4^n ) / 4^n ) / 2 ),
    // as two sequential truncating divisions (all operands here are
    // non-negative, so truncation equals floor).
    let one = Z::<D>::one();
    let ten_k = z::pow(&Z::from(10), k);
    let four_n = z::mul_2exp(&Z::one(), 2 * n);
    let doubled_plus_one = z::add(&z::mul_2exp(&mag, 1), &one);
    let numerator = z::add(&z::mul(&doubled_plus_one, &ten_k), &four_n);
    let (step1, _) = z::div(&numerator, &four_n)?;
    let (d, _) = z::div(&step1, &Z::from(2))?;

    Ok(render_fixed_point(&d, k, negative))
}

fn render_fixed_point<D: Digit>(d: &Z<D>, k: u32, negative: bool) -> String {
    let negative = negative && !z::is_zero(d);
    let digits = if z::is_zero(d) { "0".to_string() } else { render_z(d) };
    let digits = if digits.len() <= k as usize {
        let pad = k as usize + 1 - digits.len();
        format!("{}{}", "0".repeat(pad), digits)
    } else {
        digits
    };
    let split_at = digits.len() - k as usize;
    let (int_part, frac_part) = digits.split_at(split_at);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(int_part);
    if k > 0 {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
