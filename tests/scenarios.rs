//! End-to-end coverage of the worked seed scenarios.

use epx::{
    add, div, inv, make_q, msd, mul, mul_4exp, parse_decimal, render_z, to_decimal, Error,
    Sign, Z,
};

type Dz = Z;

#[test]
fn scenario_1_parse_and_render_plain_integer() {
    let z = parse_decimal::<epx::DefaultDigit>("256").unwrap();
    assert_eq!(render_z(&z), "256");
}

#[test]
fn scenario_2_parse_and_render_signed_leading_zeros() {
    let z = parse_decimal::<epx::DefaultDigit>("-0000100").unwrap();
    assert_eq!(render_z(&z), "-100");
}

#[test]
fn scenario_3_one_plus_minus_one_is_positive_zero() {
    let one = parse_decimal::<epx::DefaultDigit>("1").unwrap();
    let minus_one = parse_decimal::<epx::DefaultDigit>("-1").unwrap();
    let sum = epx::z::add(&one, &minus_one);
    assert!(epx::z::is_zero(&sum));
    assert!(epx::z::is_positive(&sum));
}

#[test]
fn scenario_4_div_eleven_by_seven() {
    let eleven = Dz::from(11);
    let seven = Dz::from(7);
    let (q, r) = div(&eleven, &seven).unwrap();
    assert_eq!(q, Dz::from(1));
    assert_eq!(r, Dz::from(4));
}

#[test]
fn scenario_5_div_minus_eleven_by_seven() {
    let minus_eleven = Dz::from(-11);
    let seven = Dz::from(7);
    let (q, r) = div(&minus_eleven, &seven).unwrap();
    assert_eq!(q, Dz::from(-1));
    assert_eq!(r, Dz::from(-4));
}

#[test]
fn scenario_6_one_third_to_six_places() {
    let x = make_q::<epx::DefaultDigit>(Dz::from(1), Dz::from(3));
    assert_eq!(to_decimal(&x, 6).unwrap(), "0.333333");
}

#[test]
fn scenario_7_nested_sum_of_eighths_renders_to_one() {
    let one_hundred_million = Dz::from(100_000_000);
    let a = make_q::<epx::DefaultDigit>(Dz::from(1), one_hundred_million.clone());
    let b = make_q::<epx::DefaultDigit>(Dz::from(99_999_997), one_hundred_million.clone());
    let c = make_q::<epx::DefaultDigit>(Dz::from(1), one_hundred_million.clone());
    let d = make_q::<epx::DefaultDigit>(Dz::from(1), one_hundred_million);
    let sum = add(&a, &add(&b, &add(&c, &d)));
    assert_eq!(to_decimal(&sum, 8).unwrap(), "1.00000000");
}

#[test]
fn scenario_8_mul_of_two_rationals_to_forty_places() {
    let a = make_q::<epx::DefaultDigit>(Dz::from(11), Dz::from(7));
    let b = make_q::<epx::DefaultDigit>(Dz::from(1), Dz::from(121));
    let product = mul(&a, &b);
    assert_eq!(
        to_decimal(&product, 40).unwrap(),
        "0.0129870129870129870129870129870129870130"
    );
}

#[test]
fn scenario_9_inv_of_zero_is_msd_overflow() {
    let zero = make_q::<epx::DefaultDigit>(Dz::zero(), Dz::from(1));
    let recip = inv(&zero);
    let err = recip.approx(10).unwrap_err();
    assert!(matches!(err, Error::MsdOverflow { .. }));
}

#[test]
fn scenario_10_inv_of_a_product_with_a_huge_denominator() {
    let big = parse_decimal::<epx::DefaultDigit>("2141829365987369817236491872364918723641")
        .unwrap();
    let thirty_seven = make_q::<epx::DefaultDigit>(Dz::from(37), Dz::from(1));
    let tiny = make_q::<epx::DefaultDigit>(Dz::from(1), big);
    let product = mul(&thirty_seven, &tiny);
    let recip = inv(&product);
    assert_eq!(
        to_decimal(&recip, 20).unwrap(),
        "57887280161820805871256537090943749287.59459459459459459459"
    );
}

#[test]
fn scenario_11_msd_of_128() {
    let x = make_q::<epx::DefaultDigit>(Dz::from(128), Dz::from(1));
    assert_eq!(msd(&x, 10_000).unwrap(), -3);
}

#[test]
fn scenario_12_msd_of_one_half_bounded_at_ten() {
    let x = make_q::<epx::DefaultDigit>(Dz::from(1), Dz::from(2));
    assert_eq!(msd(&x, 10).unwrap(), 1);
}

#[test]
fn scenario_13_msd_of_zero_clamps_at_bound() {
    let x = make_q::<epx::DefaultDigit>(Dz::zero(), Dz::from(1));
    assert_eq!(msd(&x, 10).unwrap(), 10);
}

#[test]
fn scenario_14_mul_4exp_shifts_by_one_base_four_digit() {
    let z: Z<u8> = Z::from_digits(vec![4, 1], Sign::Positive);
    let shifted = mul_4exp(&z, -1).unwrap();
    assert_eq!(shifted, Z::from_digits(vec![0x41], Sign::Positive));
}
