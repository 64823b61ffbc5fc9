use crate::field::*;
use crate::ring::*;

///
/// The prime field `Z/pZ` for a prime `p` known at compile time.
/// Elements are represented by their least nonnegative residue.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::field::*;
/// # use groebner::assert_el_eq;
/// # use groebner::rings::zn_static::*;
/// let ring = Fp::<17>::RING;
/// assert_el_eq!(ring, ring.from_int(13), ring.add(ring.from_int(15), ring.from_int(15)));
/// assert_el_eq!(ring, ring.from_int(60), ring.div(&ring.from_int(10), &ring.from_int(3)));
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FpBase<const P: u64>;

pub type Fp<const P: u64> = RingValue<FpBase<P>>;

pub const F17: Fp<17> = Fp::<17>::RING;

pub const fn is_prime(n: u64) -> bool {
    assert!(n >= 2);
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    return true;
}

impl<const P: u64> FpBase<P> {

    pub const fn new() -> Self {
        assert!(is_prime(P));
        assert!(P <= i32::MAX as u64);
        FpBase
    }

    ///
    /// Returns a uniformly random element, using the given source of random
    /// 64-bit integers.
    ///
    pub fn random_element<G: FnMut() -> u64>(&self, mut rng: G) -> u64 {
        // rejection sampling, to avoid the bias of a plain reduction mod P
        let bound = u64::MAX - (u64::MAX % P);
        loop {
            let value = rng();
            if value < bound {
                return value % P;
            }
        }
    }

    fn inverse(&self, value: u64) -> Option<u64> {
        if value == 0 {
            return None;
        }
        // extended euclidean algorithm, keeping track of the coefficient of `value` only
        let (mut a, mut b) = (value as i64, P as i64);
        let (mut sa, mut sb) = (1i64, 0i64);
        while b != 0 {
            let quo = a / b;
            (a, b) = (b, a - quo * b);
            (sa, sb) = (sb, sa - quo * sb);
        }
        debug_assert!(a == 1);
        return Some(sa.rem_euclid(P as i64) as u64);
    }
}

impl<const P: u64> Fp<P> {

    pub const RING: Fp<P> = RingValue::from(FpBase::new());
}

impl<const P: u64> RingBase for FpBase<P> {

    type Element = u64;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        debug_assert!(*lhs < P && rhs < P);
        *lhs += rhs;
        if *lhs >= P {
            *lhs -= P;
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        if *lhs != 0 {
            *lhs = P - *lhs;
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = ((*lhs as u128 * rhs as u128) % (P as u128)) as u64
    }

    fn from_int(&self, value: i32) -> Self::Element {
        (value as i64).rem_euclid(P as i64) as u64
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        *value == 0
    }

    fn is_commutative(&self) -> bool { true }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl<const P: u64> Field for FpBase<P> {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        Some(self.mul(*lhs, self.inverse(*rhs)?))
    }
}

#[cfg(test)]
use crate::assert_el_eq;

#[cfg(test)]
fn edge_case_elements<const P: u64>() -> impl Iterator<Item = u64> {
    [0, 1, 2, 3, P / 2, P - 2, P - 1].into_iter()
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(Fp::<17>::RING, edge_case_elements::<17>());
    crate::ring::generic_tests::test_ring_axioms(Fp::<131>::RING, edge_case_elements::<131>());
    crate::ring::generic_tests::test_ring_axioms(Fp::<2>::RING, [0, 1].into_iter());
}

#[test]
fn test_field_axioms() {
    crate::field::generic_tests::test_field_axioms(Fp::<17>::RING, 0..17);
    crate::field::generic_tests::test_field_axioms(Fp::<131>::RING, edge_case_elements::<131>());
}

#[test]
fn test_arithmetic() {
    let ring = F17;
    assert_el_eq!(ring, ring.from_int(13), ring.add(ring.from_int(15), ring.from_int(15)));
    assert_el_eq!(ring, ring.from_int(14), ring.sub(ring.from_int(12), ring.from_int(15)));
    assert_el_eq!(ring, ring.from_int(12), ring.from_int(-5));
    assert_el_eq!(ring, ring.zero(), ring.negate(ring.zero()));
    assert!(!ring.eq_el(&ring.one(), &ring.neg_one()));
    assert_el_eq!(ring, ring.from_int(1231231), ring.mul(ring.from_int(1231231), ring.from_int(-16)));
    assert_el_eq!(ring, ring.from_int(3), ring.mul(ring.from_int(10), ring.from_int(2)));
    assert_el_eq!(ring, ring.from_int(3), ring.div(&ring.from_int(9), &ring.from_int(3)));
    assert_el_eq!(ring, ring.from_int(60), ring.div(&ring.from_int(10), &ring.from_int(3)));
    assert_eq!(15, ring.from_int(100));
}

#[test]
fn test_random_element() {
    let mut rng = oorandom::Rand64::new(1);
    let ring = Fp::<131>::RING;
    let mut seen = [false; 131];
    for _ in 0..10000 {
        let x = ring.get_ring().random_element(|| rng.rand_u64());
        assert!(x < 131);
        seen[x as usize] = true;
    }
    assert!(seen.iter().all(|x| *x));
}

#[test]
fn test_is_prime() {
    assert!(is_prime(2));
    assert!(is_prime(17));
    assert!(is_prime(131));
    assert!(!is_prime(1 << 16));
    assert!(!is_prime(91));
}
