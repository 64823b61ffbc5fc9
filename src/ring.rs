use std::fmt::{Display, Formatter};

///
/// Basic trait for objects that have a ring structure.
///
/// Implementors of this trait should provide the basic ring operations,
/// and additionally operators for displaying and equality testing. If
/// a performance advantage can be achieved by accepting some arguments by
/// reference instead of by value, the default-implemented functions for
/// ring operations on references should be overwritten.
///
/// Note that the ring object owns no elements. Elements are plain values of
/// type [`RingBase::Element`], and all arithmetic goes through the ring, e.g.
/// `ring.add(a, b)`. This allows rings whose arithmetic depends on runtime data
/// (like the monomial order of a polynomial ring) without storing that data
/// in every element.
///
/// Usually, this trait will not be used directly, but always through a
/// [`RingStore`]. While this trait defines the functionality, [`RingStore`]
/// abstracts the storage, so references to rings or rings by value can be
/// used in the same way.
///
pub trait RingBase {

    type Element: Sized;

    fn clone_el(&self, val: &Self::Element) -> Self::Element;
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.add_assign(lhs, self.clone_el(rhs)) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.sub_assign(lhs, self.clone_el(rhs)) }
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.mul_assign(lhs, self.clone_el(rhs)) }
    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn from_int(&self, value: i32) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }
    fn is_neg_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.neg_one()) }
    fn is_commutative(&self) -> bool;
    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result;

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn add_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.negate_inplace(&mut rhs);
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn sub_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        if self.is_commutative() {
            self.mul_assign_ref(&mut rhs, lhs);
            return rhs;
        } else {
            let mut result = self.clone_el(lhs);
            self.mul_assign(&mut result, rhs);
            return result;
        }
    }

    fn mul_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.mul_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }
}

macro_rules! delegate {
    (fn $name:ident (&self, $($pname:ident: $ptype:ty),*) -> $rtype:ty) => {
        fn $name (&self, $($pname: $ptype),*) -> $rtype {
            self.get_ring().$name($($pname),*)
        }
    };
    (fn $name:ident (&self) -> $rtype:ty) => {
        fn $name (&self) -> $rtype {
            self.get_ring().$name()
        }
    };
}

///
/// Basic trait for objects that store (in some sense) a ring. This can
/// be a ring-by-value, a reference to a ring, or a [`RingRef`] wrapping
/// a reference to a [`RingBase`].
///
/// As opposed to [`RingBase`], which is responsible for the functionality
/// and ring operations, this trait is solely responsible for the storage.
/// All arithmetic functions are delegated to the underlying [`RingBase`].
///
pub trait RingStore: Sized {

    type Type: RingBase;

    fn get_ring<'a>(&'a self) -> &'a Self::Type;

    delegate!{ fn clone_el(&self, val: &El<Self>) -> El<Self> }
    delegate!{ fn add_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn add_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn sub_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn negate_inplace(&self, lhs: &mut El<Self>) -> () }
    delegate!{ fn mul_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn mul_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ fn zero(&self) -> El<Self> }
    delegate!{ fn one(&self) -> El<Self> }
    delegate!{ fn neg_one(&self) -> El<Self> }
    delegate!{ fn from_int(&self, value: i32) -> El<Self> }
    delegate!{ fn eq_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ fn is_zero(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_neg_one(&self, value: &El<Self>) -> bool }
    delegate!{ fn is_commutative(&self) -> bool }
    delegate!{ fn negate(&self, value: El<Self>) -> El<Self> }
    delegate!{ fn sub_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ fn add_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn add_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn add(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn sub_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn sub(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ fn mul_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ fn mul(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }

    fn sum<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.zero(), |a, b| self.add(a, b))
    }

    fn prod<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.one(), |a, b| self.mul(a, b))
    }

    ///
    /// Computes `x^power` using square-and-multiply.
    ///
    fn pow(&self, x: El<Self>, power: usize) -> El<Self> {
        let mut result = self.one();
        let mut square = x;
        let mut remaining = power;
        while remaining > 0 {
            if remaining & 1 == 1 {
                self.mul_assign_ref(&mut result, &square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = self.mul_ref(&square, &square);
            }
        }
        return result;
    }

    fn base_ring<'a>(&'a self) -> &'a <Self::Type as RingExtension>::BaseRing
        where Self::Type: RingExtension
    {
        self.get_ring().base_ring()
    }

    fn from(&self, x: El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from(x)
    }

    fn from_ref(&self, x: &El<<Self::Type as RingExtension>::BaseRing>) -> El<Self>
        where Self::Type: RingExtension
    {
        self.get_ring().from_ref(x)
    }

    fn format<'a>(&'a self, value: &'a El<Self>) -> RingElementDisplayWrapper<'a, Self> {
        RingElementDisplayWrapper { ring: self, element: value }
    }
}

///
/// Wrapper around a ring and one of its elements that implements [`std::fmt::Display`]
/// for the element, using [`RingBase::dbg()`].
///
pub struct RingElementDisplayWrapper<'a, R: RingStore> {
    ring: &'a R,
    element: &'a El<R>
}

impl<'a, R: RingStore> Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

///
/// Trait for rings that are an extension of another ring, i.e. contain
/// a canonical image of a base ring. For multivariate polynomial rings,
/// this is the ring of constant polynomials.
///
pub trait RingExtension: RingBase {

    type BaseRing: RingStore;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing;

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element;

    fn from_ref(&self, x: &El<Self::BaseRing>) -> Self::Element {
        self.from(self.base_ring().clone_el(x))
    }
}

pub type El<R> = <<R as RingStore>::Type as RingBase>::Element;

///
/// The most fundamental [`RingStore`]. It is basically a no-op container,
/// i.e. stores a [`RingBase`] object by value, and allows accessing it.
///
/// We cannot implement [`RingStore`] for every [`RingBase`] directly, since
/// this would conflict with the implementation for references. Hence, the
/// proposed pattern is to create the ring type as `ABase` implementing
/// [`RingBase`], and then provide a type alias
/// ```ignore
/// type A = RingValue<ABase>;
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RingValue<R: RingBase> {
    ring: R
}

impl<R: RingBase> RingValue<R> {

    pub const fn from(value: R) -> Self {
        RingValue { ring: value }
    }
}

impl<R: RingBase> RingStore for RingValue<R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        &self.ring
    }
}

///
/// The second most basic [`RingStore`]. Similarly to [`RingValue`] it is just
/// a no-op container, but stores a reference to the [`RingBase`].
///
/// This is necessary when we implement functionality on the level of a
/// [`RingBase`], but want to use algorithms that require a [`RingStore`].
///
#[derive(Debug)]
pub struct RingRef<'a, R: RingBase> {
    ring: &'a R
}

impl<'a, R: RingBase> Clone for RingRef<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: RingBase> Copy for RingRef<'a, R> {}

impl<'a, R: RingBase> RingRef<'a, R> {

    pub const fn new(value: &'a R) -> Self {
        RingRef { ring: value }
    }
}

impl<'a, R: RingBase> RingStore for RingRef<'a, R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        self.ring
    }
}

impl<'a, R: RingStore> RingStore for &'a R {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

///
/// Asserts that two elements of a ring are equal, w.r.t. [`RingBase::eq_el()`].
/// The elements may be given by value or by reference.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::assert_el_eq;
/// # use groebner::rings::zn_static::F17;
/// assert_el_eq!(F17, F17.from_int(-1), F17.from_int(16));
/// ```
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match (&$ring, &$lhs, &$rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    <_ as $crate::ring::RingStore>::eq_el(ring_val, ::std::borrow::Borrow::borrow(lhs_val), ::std::borrow::Borrow::borrow(rhs_val)),
                    "Assertion failed: {} != {}",
                    <_ as $crate::ring::RingStore>::format(ring_val, ::std::borrow::Borrow::borrow(lhs_val)),
                    <_ as $crate::ring::RingStore>::format(ring_val, ::std::borrow::Borrow::borrow(rhs_val))
                );
            }
        }
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks the ring axioms on all pairs and triples of the given elements.
    ///
    pub fn test_ring_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        for a in &elements {
            assert!(ring.eq_el(a, &ring.add_ref(a, &zero)), "Additive identity failed for {}", ring.format(a));
            assert!(ring.eq_el(a, &ring.mul_ref(a, &one)), "Multiplicative identity failed for {}", ring.format(a));
            assert!(ring.is_zero(&ring.add_ref_snd(ring.negate(ring.clone_el(a)), a)), "Additive inverse failed for {}", ring.format(a));
            assert!(ring.is_zero(&ring.mul_ref(a, &zero)), "Multiplication by zero failed for {}", ring.format(a));
        }

        for a in &elements {
            for b in &elements {
                assert!(ring.eq_el(&ring.add_ref(a, b), &ring.add_ref(b, a)), "Additive commutativity failed for {}, {}", ring.format(a), ring.format(b));
                assert!(ring.eq_el(&ring.add_ref_snd(ring.sub_ref(a, b), b), a), "Subtraction failed for {}, {}", ring.format(a), ring.format(b));
                if ring.is_commutative() {
                    assert!(ring.eq_el(&ring.mul_ref(a, b), &ring.mul_ref(b, a)), "Multiplicative commutativity failed for {}, {}", ring.format(a), ring.format(b));
                }
            }
        }

        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert!(ring.eq_el(&ring.add_ref_fst(a, ring.add_ref(b, c)), &ring.add_ref_snd(ring.add_ref(a, b), c)), "Additive associativity failed");
                    assert!(ring.eq_el(&ring.mul_ref_fst(a, ring.mul_ref(b, c)), &ring.mul_ref_snd(ring.mul_ref(a, b), c)), "Multiplicative associativity failed");
                    assert!(ring.eq_el(&ring.mul_ref_fst(a, ring.add_ref(b, c)), &ring.add(ring.mul_ref(a, b), ring.mul_ref(a, c))), "Distributivity failed");
                }
            }
        }
    }
}

#[cfg(test)]
use crate::rings::zn_static::{Fp, F17};

#[test]
fn test_internal_wrappings_dont_matter() {
    let ring = F17;
    let by_ref = RingRef::new(ring.get_ring());
    let ref_of_value = &ring;
    let ref_of_ref = &&ring;

    let a = ring.from_int(5);
    let b = ring.from_int(13);
    assert_el_eq!(ring, ring.mul_ref(&a, &b), by_ref.mul_ref(&a, &b));
    assert_el_eq!(ring, ring.mul_ref(&a, &b), ref_of_value.mul_ref(&a, &b));
    assert_el_eq!(ring, ring.mul_ref(&a, &b), ref_of_ref.mul_ref(&a, &b));
    assert_el_eq!(ring, ring.one(), &ring.add(a, b));
}

#[test]
fn test_pow_sum_prod() {
    let ring = Fp::<131>::RING;
    assert_el_eq!(ring, ring.one(), ring.pow(ring.from_int(7), 0));
    assert_el_eq!(ring, ring.from_int(7 * 7 * 7), ring.pow(ring.from_int(7), 3));
    assert_el_eq!(ring, ring.one(), ring.pow(ring.from_int(2), 130));
    assert_el_eq!(ring, ring.from_int(15), ring.sum((1..=5).map(|i| ring.from_int(i))));
    assert_el_eq!(ring, ring.from_int(120), ring.prod((1..=5).map(|i| ring.from_int(i))));
}

#[test]
fn test_format() {
    let ring = F17;
    assert_eq!("16", format!("{}", ring.format(&ring.neg_one())));
}
