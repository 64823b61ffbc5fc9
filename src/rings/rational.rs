use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::field::*;
use crate::ring::*;

///
/// The field of rational numbers, with numerator and denominator of arbitrary size.
///
/// Elements are [`BigRational`]s, which are always kept in lowest terms with positive
/// denominator, so equality is equality of representations. Coefficients of intermediate
/// polynomials in Buchberger's algorithm tend to grow quickly, hence machine-size
/// numerators are not an option.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::field::*;
/// # use groebner::assert_el_eq;
/// # use groebner::rings::rational::*;
/// let half = QQ.get_ring().from_fraction(1, 2);
/// let third = QQ.get_ring().from_fraction(-2, -6);
/// assert_el_eq!(QQ, QQ.get_ring().from_fraction(5, 6), QQ.add_ref(&half, &third));
/// assert_el_eq!(QQ, QQ.from_int(3), QQ.div(&QQ.one(), &third));
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalFieldBase;

pub type RationalField = RingValue<RationalFieldBase>;

pub const QQ: RationalField = RingValue::from(RationalFieldBase);

impl RationalFieldBase {

    pub fn from_fraction(&self, num: i64, den: i64) -> BigRational {
        assert!(den != 0, "denominator must be nonzero");
        BigRational::new(BigInt::from(num), BigInt::from(den))
    }

    pub fn num<'a>(&self, value: &'a BigRational) -> &'a BigInt {
        value.numer()
    }

    pub fn den<'a>(&self, value: &'a BigRational) -> &'a BigInt {
        value.denom()
    }
}

impl RingBase for RationalFieldBase {

    type Element = BigRational;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        val.clone()
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs += rhs;
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs -= rhs;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs -= rhs;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        *lhs = -std::mem::replace(lhs, BigRational::zero());
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs *= rhs;
    }

    fn zero(&self) -> Self::Element {
        BigRational::zero()
    }

    fn one(&self) -> Self::Element {
        BigRational::one()
    }

    fn from_int(&self, value: i32) -> Self::Element {
        BigRational::from_integer(BigInt::from(value))
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs == rhs
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.is_zero()
    }

    fn is_one(&self, value: &Self::Element) -> bool {
        value.is_one()
    }

    fn is_commutative(&self) -> bool { true }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        if value.is_integer() {
            write!(out, "{}", value.numer())
        } else {
            write!(out, "{}/{}", value.numer(), value.denom())
        }
    }
}

impl Field for RationalFieldBase {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if rhs.is_zero() {
            None
        } else {
            Some(lhs / rhs)
        }
    }
}

#[cfg(test)]
use crate::assert_el_eq;

#[cfg(test)]
fn edge_case_elements() -> impl Iterator<Item = BigRational> {
    [(0, 1), (1, 1), (-1, 1), (2, 1), (1, 2), (-3, 7), (22, 15), (1 << 20, 3)].into_iter().map(|(n, d)| QQ.get_ring().from_fraction(n, d))
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(QQ, edge_case_elements());
}

#[test]
fn test_field_axioms() {
    crate::field::generic_tests::test_field_axioms(QQ, edge_case_elements());
}

#[test]
fn test_lowest_terms() {
    let ring = QQ.get_ring();
    let x = ring.from_fraction(4, -6);
    assert_eq!(&BigInt::from(-2), ring.num(&x));
    assert_eq!(&BigInt::from(3), ring.den(&x));
    assert_el_eq!(QQ, ring.from_fraction(2, 3), ring.from_fraction(-4, -6));
    assert_eq!(&BigInt::from(1), ring.den(&ring.from_fraction(0, -5)));
    let x = QQ.sub(ring.from_fraction(1, 6), ring.from_fraction(1, 6));
    assert!(QQ.is_zero(&x));
    assert_eq!(&BigInt::from(1), ring.den(&x));
    assert_el_eq!(QQ, ring.from_fraction(1, 4), QQ.mul(ring.from_fraction(2, 3), ring.from_fraction(3, 8)));
    assert_eq!(&BigInt::from(-3), ring.num(&QQ.div(&QQ.from_int(6), &QQ.from_int(-2))));
}

#[test]
fn test_format() {
    assert_eq!("-3/7", format!("{}", QQ.format(&QQ.get_ring().from_fraction(3, -7))));
    assert_eq!("5", format!("{}", QQ.format(&QQ.from_int(5))));
}

#[test]
fn test_no_overflow() {
    let large = QQ.get_ring().from_fraction(i64::MAX, 3);
    let square = QQ.mul_ref(&large, &large);
    assert_eq!(&BigInt::from(i64::MAX).pow(2), QQ.get_ring().num(&square));
    assert_eq!(&BigInt::from(9), QQ.get_ring().den(&square));
    assert_el_eq!(QQ, large, QQ.div(&square, &large));
}
