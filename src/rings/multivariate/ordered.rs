use std::cmp::Ordering;
use std::slice;
use std::iter::Rev;

use crate::ring::*;

use super::*;

///
/// Represents the multivariate polynomial ring `R[X0, X1, ...]` in arbitrarily many
/// unknowns. Polynomials are stored as lists of their terms, sorted w.r.t. the given
/// monomial order, with the largest term last. This makes accessing and removing the
/// leading term cheap, which is the main operation of the Groebner basis algorithms
/// in [`crate::algorithms`].
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::assert_el_eq;
/// # use groebner::rings::zn_static::F17;
/// # use groebner::rings::multivariate::*;
/// # use groebner::rings::multivariate::ordered::*;
/// let ring = MultivariatePolyRingImpl::new(F17, Lex);
/// let x = ring.indeterminate(0);
/// let y = ring.indeterminate(1);
/// let f = ring.sub(ring.mul_ref(&x, &y), ring.one());
/// assert_eq!(&Monomial::new([1, 1]), ring.lm(&f).unwrap());
/// assert_eq!("X0*X1 + 16", format!("{}", ring.format(&f)));
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultivariatePolyRingImplBase<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    base_ring: R,
    order: O
}

///
/// [`RingStore`] corresponding to [`MultivariatePolyRingImplBase`].
///
pub type MultivariatePolyRingImpl<R, O> = RingValue<MultivariatePolyRingImplBase<R, O>>;

impl<R, O> MultivariatePolyRingImpl<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    pub fn new(base_ring: R, order: O) -> Self {
        RingValue::from(MultivariatePolyRingImplBase {
            base_ring: base_ring,
            order: order
        })
    }
}

pub struct MultivariatePolyRingEl<R>
    where R: RingStore
{
    // sorted ascending w.r.t. the order of the ring, all coefficients nonzero
    data: Vec<(El<R>, Monomial)>
}

impl<R, O> MultivariatePolyRingImplBase<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    fn is_valid(&self, data: &[(El<R>, Monomial)]) -> bool {
        data.iter().all(|(c, _)| !self.base_ring.is_zero(c)) &&
            data.windows(2).all(|w| self.order.compare(&w[0].1, &w[1].1) == Ordering::Less)
    }

    ///
    /// Adds the given terms to `lhs`. The terms must be sorted ascending and have
    /// pairwise different monomials.
    ///
    fn merge_terms<I>(&self, lhs: &mut MultivariatePolyRingEl<R>, rhs: I)
        where I: Iterator<Item = (El<R>, Monomial)>
    {
        let lhs_data = std::mem::take(&mut lhs.data);
        let mut result = Vec::with_capacity(lhs_data.len() + rhs.size_hint().0);
        let mut lhs_it = lhs_data.into_iter();
        let mut rhs_it = rhs;
        let mut lhs_next = lhs_it.next();
        let mut rhs_next = rhs_it.next();
        loop {
            match (lhs_next.take(), rhs_next.take()) {
                (None, None) => break,
                (Some(l), None) => {
                    result.push(l);
                    lhs_next = lhs_it.next();
                },
                (None, Some(r)) => {
                    result.push(r);
                    rhs_next = rhs_it.next();
                },
                (Some(l), Some(r)) => match self.order.compare(&l.1, &r.1) {
                    Ordering::Less => {
                        result.push(l);
                        lhs_next = lhs_it.next();
                        rhs_next = Some(r);
                    },
                    Ordering::Greater => {
                        result.push(r);
                        lhs_next = Some(l);
                        rhs_next = rhs_it.next();
                    },
                    Ordering::Equal => {
                        let sum = self.base_ring.add(l.0, r.0);
                        if !self.base_ring.is_zero(&sum) {
                            result.push((sum, l.1));
                        }
                        lhs_next = lhs_it.next();
                        rhs_next = rhs_it.next();
                    }
                }
            }
        }
        debug_assert!(self.is_valid(&result));
        lhs.data = result;
    }
}

impl<R, O> RingBase for MultivariatePolyRingImplBase<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    type Element = MultivariatePolyRingEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        MultivariatePolyRingEl {
            data: val.data.iter().map(|(c, m)| (self.base_ring.clone_el(c), m.clone())).collect()
        }
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.merge_terms(lhs, rhs.data.into_iter());
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.merge_terms(lhs, rhs.data.iter().map(|(c, m)| (self.base_ring.clone_el(c), m.clone())));
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.merge_terms(lhs, rhs.data.iter().map(|(c, m)| (self.base_ring.negate(self.base_ring.clone_el(c)), m.clone())));
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for (c, _) in &mut lhs.data {
            self.base_ring.negate_inplace(c);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        let lhs_data = std::mem::take(&mut lhs.data);
        for (c, m) in &lhs_data {
            self.add_assign_scaled(lhs, rhs, c, m);
        }
    }

    fn zero(&self) -> Self::Element {
        MultivariatePolyRingEl { data: Vec::new() }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.from(self.base_ring.from_int(value))
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs.data.len() == rhs.data.len() && lhs.data.iter().zip(rhs.data.iter()).all(|((lc, lm), (rc, rm))| lm == rm && self.base_ring.eq_el(lc, rc))
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.data.is_empty()
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        if value.data.is_empty() {
            return write!(out, "0");
        }
        for (k, (c, m)) in value.data.iter().rev().enumerate() {
            if k > 0 {
                write!(out, " + ")?;
            }
            if m.is_one() {
                write!(out, "{}", self.base_ring.format(c))?;
            } else if self.base_ring.is_one(c) {
                write!(out, "{:?}", m)?;
            } else {
                write!(out, "{}*{:?}", self.base_ring.format(c), m)?;
            }
        }
        return Ok(());
    }
}

impl<R, O> RingExtension for MultivariatePolyRingImplBase<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        if self.base_ring.is_zero(&x) {
            self.zero()
        } else {
            MultivariatePolyRingEl { data: vec![(x, Monomial::one())] }
        }
    }
}

pub struct TermIterImpl<'a, R>
    where R: RingStore
{
    base_iter: Rev<slice::Iter<'a, (El<R>, Monomial)>>
}

impl<'a, R> Iterator for TermIterImpl<'a, R>
    where R: RingStore
{
    type Item = (&'a El<R>, &'a Monomial);

    fn next(&mut self) -> Option<Self::Item> {
        self.base_iter.next().map(|(c, m)| (c, m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base_iter.size_hint()
    }
}

impl<R, O> MultivariatePolyRing for MultivariatePolyRingImplBase<R, O>
    where R: RingStore,
        O: MonomialOrder
{
    type Order = O;

    type TermIter<'a> = TermIterImpl<'a, R>
        where Self: 'a;

    fn order(&self) -> &O {
        &self.order
    }

    fn terms<'a>(&'a self, f: &'a Self::Element) -> TermIterImpl<'a, R> {
        TermIterImpl { base_iter: f.data.iter().rev() }
    }

    fn term_count(&self, f: &Self::Element) -> usize {
        f.data.len()
    }

    fn from_terms<I>(&self, terms: I) -> Self::Element
        where I: IntoIterator<Item = (El<R>, Monomial)>
    {
        let mut terms = terms.into_iter().collect::<Vec<_>>();
        terms.sort_by(|(_, l), (_, r)| self.order.compare(l, r));
        let mut data: Vec<(El<R>, Monomial)> = Vec::with_capacity(terms.len());
        for (c, m) in terms {
            match data.last_mut() {
                Some((last_c, last_m)) if *last_m == m => self.base_ring.add_assign(last_c, c),
                _ => data.push((c, m))
            }
        }
        data.retain(|(c, _)| !self.base_ring.is_zero(c));
        debug_assert!(self.is_valid(&data));
        return MultivariatePolyRingEl { data };
    }

    fn remove_lt(&self, f: &mut Self::Element) -> Option<(El<R>, Monomial)> {
        f.data.pop()
    }

    fn add_assign_scaled(&self, lhs: &mut Self::Element, rhs: &Self::Element, factor: &El<R>, monomial: &Monomial) {
        if self.base_ring.is_zero(factor) {
            return;
        }
        self.merge_terms(lhs, rhs.data.iter()
            .map(|(c, m)| (self.base_ring.mul_ref(c, factor), m.mul(monomial)))
            .filter(|(c, _)| !self.base_ring.is_zero(c))
        );
    }

    fn mul_assign_term(&self, f: &mut Self::Element, factor: &El<R>, monomial: &Monomial) {
        for (c, m) in &mut f.data {
            self.base_ring.mul_assign_ref(c, factor);
            m.mul_assign(monomial);
        }
        f.data.retain(|(c, _)| !self.base_ring.is_zero(c));
        debug_assert!(self.is_valid(&f.data));
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, monomial: &Monomial) -> Option<&'a El<R>> {
        f.data.binary_search_by(|(_, m)| self.order.compare(m, monomial)).ok().map(|k| &f.data[k].0)
    }
}

#[cfg(test)]
use crate::assert_el_eq;
#[cfg(test)]
use crate::error::AlgebraError;
#[cfg(test)]
use crate::rings::zn_static::{Fp, F17};
#[cfg(test)]
use crate::rings::rational::QQ;

#[cfg(test)]
fn edge_case_elements<P>(ring: P) -> impl Iterator<Item = El<P>>
    where P: RingStore + Copy, P::Type: MultivariatePolyRing
{
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let z = ring.indeterminate(2);
    [
        ring.zero(),
        ring.one(),
        ring.neg_one(),
        ring.add_ref(&x, &y),
        ring.sub(ring.mul_ref(&x, &y), ring.one()),
        ring.add(ring.pow(ring.clone_el(&z), 3), ring.from_int(2)),
        ring.add(ring.mul(ring.clone_el(&x), ring.clone_el(&z)), ring.pow(ring.clone_el(&y), 2)),
        ring.sub(x, z)
    ].into_iter()
}

#[test]
fn test_ring_axioms() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    crate::ring::generic_tests::test_ring_axioms(&ring, edge_case_elements(&ring));
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    crate::ring::generic_tests::test_ring_axioms(&ring, edge_case_elements(&ring));
}

#[test]
fn test_from_terms() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_LEX);
    let f = ring.from_terms([
        (5, Monomial::new([1, 0])),
        (3, Monomial::new([0, 2])),
        (12, Monomial::new([1, 0])),
        (0, Monomial::new([3, 3])),
        (1, Monomial::one())
    ]);
    // 5 + 12 = 0 mod 17
    assert_eq!(2, ring.term_count(&f));
    assert_eq!(Some(&3), ring.coefficient_at(&f, &Monomial::new([0, 2])));
    assert_eq!(None, ring.coefficient_at(&f, &Monomial::new([1, 0])));
    assert_eq!(Ok((&3, &Monomial::new([0, 2]))), ring.leading_term(&f));
    let terms = ring.terms(&f).map(|(c, m)| (*c, m.clone())).collect::<Vec<_>>();
    assert_eq!(vec![(3, Monomial::new([0, 2])), (1, Monomial::one())], terms);
}

#[test]
fn test_leading_term() {
    let ring = MultivariatePolyRingImpl::new(F17, Lex);
    assert_eq!(Err(AlgebraError::EmptyPolynomial), ring.leading_term(&ring.zero()).map(|_| ()));
    let mut f = ring.from_terms([(1, Monomial::new([0, 5])), (2, Monomial::new([1, 0])), (3, Monomial::one())]);
    assert_eq!(Some(&Monomial::new([1])), ring.lm(&f));
    assert_eq!(Some((2, Monomial::new([1]))), ring.remove_lt(&mut f));
    assert_eq!(Some(&Monomial::new([0, 5])), ring.lm(&f));
    assert_eq!(Some((1, Monomial::new([0, 5]))), ring.remove_lt(&mut f));
    assert_eq!(Some((3, Monomial::one())), ring.remove_lt(&mut f));
    assert_eq!(None, ring.remove_lt(&mut f));
    assert!(ring.is_zero(&f));
}

#[test]
fn test_arithmetic_mod_131() {
    let ring = MultivariatePolyRingImpl::new(Fp::<131>::RING, DEG_LEX);
    let pol = ring.from_terms([
        (16, Monomial::from_powers([(33, 2), (10, 100)])),
        (10, Monomial::from_powers([(1, 2), (2, 100)]))
    ]);
    let poly = ring.from_terms([
        (8, Monomial::from_powers([(100, 1), (10, 100)])),
        (ring.base_ring().from_int(-10), Monomial::from_powers([(1, 2), (2, 100)]))
    ]);
    assert!(!ring.eq_el(&pol, &poly));
    assert!(ring.is_zero(&ring.sub_ref(&pol, &pol)));
    assert_el_eq!(ring, ring.add_ref(&pol, &pol), ring.mul_ref(&pol, &ring.from_int(2)));
    assert!(ring.is_zero(&ring.mul(ring.zero(), ring.zero())));

    let expected_product = ring.from_terms([
        (80, Monomial::from_powers([(1, 2), (2, 100), (10, 100), (100, 1)])),
        (128, Monomial::from_powers([(10, 200), (33, 2), (100, 1)])),
        (ring.base_ring().from_int(-160), Monomial::from_powers([(1, 2), (2, 100), (10, 100), (33, 2)])),
        (ring.base_ring().from_int(-100), Monomial::from_powers([(1, 4), (2, 200)]))
    ]);
    assert_el_eq!(ring, expected_product, ring.mul_ref(&pol, &poly));

    let expected_sum = ring.from_terms([
        (8, Monomial::from_powers([(10, 100), (100, 1)])),
        (16, Monomial::from_powers([(10, 100), (33, 2)]))
    ]);
    assert_el_eq!(ring, expected_sum, ring.add_ref(&pol, &poly));
}

#[test]
fn test_add_assign_scaled() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let mut f = ring.add(ring.mul_ref(&x, &y), ring.one());
    let g = ring.sub_ref(&x, &y);
    // f + 3 * y * g
    let expected = ring.add_ref_fst(&f, ring.mul(ring.from_int(3), ring.mul_ref(&y, &g)));
    ring.add_assign_scaled(&mut f, &g, &3, &Monomial::new([0, 1]));
    assert_el_eq!(ring, expected, f);

    let mut h = ring.clone_el(&g);
    ring.add_assign_scaled(&mut h, &g, &16, &Monomial::one());
    assert!(ring.is_zero(&h));
}

#[test]
fn test_mul_term_and_normalize() {
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f = ring.add(ring.mul(ring.from_int(3), ring.clone_el(&x)), ring.from_int(2));
    let g = ring.mul_term(ring.clone_el(&f), &QQ.from_int(2), &Monomial::new([0, 1]));
    assert_el_eq!(ring, ring.mul(ring.mul(ring.from_int(2), y), ring.clone_el(&f)), g);

    let normalized = ring.normalize(f);
    assert_el_eq!(ring, ring.add(x, ring.from(QQ.get_ring().from_fraction(2, 3))), &normalized);
    assert!(QQ.is_one(ring.lt(&normalized).unwrap().0));
    assert!(ring.is_zero(&ring.normalize(ring.zero())));
}

#[test]
fn test_appearing_indeterminates() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    let f = ring.from_terms([(1, Monomial::new([0, 2, 0, 1])), (1, Monomial::new([0, 3]))]);
    assert_eq!(vec![(1, 3), (3, 1)], ring.appearing_indeterminates(&f).into_iter().collect::<Vec<_>>());
}

#[test]
fn test_format() {
    let ring = MultivariatePolyRingImpl::new(QQ, DEG_LEX);
    let f = ring.from_terms([
        (QQ.get_ring().from_fraction(1, 2), Monomial::new([2, 1])),
        (QQ.from_int(1), Monomial::new([0, 1])),
        (QQ.from_int(-3), Monomial::one())
    ]);
    assert_eq!("1/2*X0^2*X1 + X1 + -3", format!("{}", ring.format(&f)));
    assert_eq!("0", format!("{}", ring.format(&ring.zero())));
}
