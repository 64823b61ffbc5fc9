use std::cmp::Ordering;
use std::ops::Range;

use crate::ring::*;

use super::*;

///
/// Compares polynomials by their sequence of monomials, each sequence taken in
/// descending order w.r.t. the monomial order of the ring. The first differing
/// monomial decides; if one sequence is a prefix of the other, the shorter one
/// is smaller.
///
/// This is not an algebraic order, it only serves as a deterministic key for
/// storing polynomials in a [`GeneratorSet`]. Polynomials with the same monomials
/// compare as [`Ordering::Equal`], and are the same element iff additionally
/// their coefficients agree, see [`BasisOrder::is_same()`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasisOrder;

impl BasisOrder {

    pub fn compare<P>(&self, ring: P, lhs: &El<P>, rhs: &El<P>) -> Ordering
        where P: RingStore, P::Type: MultivariatePolyRing
    {
        let order = ring.order();
        let mut lhs_terms = ring.terms(lhs);
        let mut rhs_terms = ring.terms(rhs);
        loop {
            match (lhs_terms.next(), rhs_terms.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some((_, l)), Some((_, r))) => match order.compare(l, r) {
                    Ordering::Equal => {},
                    result => return result
                }
            }
        }
    }

    pub fn is_same<P>(&self, ring: P, lhs: &El<P>, rhs: &El<P>) -> bool
        where P: RingStore, P::Type: MultivariatePolyRing
    {
        ring.eq_el(lhs, rhs)
    }
}

///
/// A set of polynomials, used as generating set of an ideal. Elements are kept
/// sorted w.r.t. [`BasisOrder`] and without duplicates.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::rings::zn_static::F17;
/// # use groebner::rings::multivariate::*;
/// # use groebner::rings::multivariate::ordered::*;
/// # use groebner::rings::multivariate::basis_order::*;
/// let ring = MultivariatePolyRingImpl::new(F17, Lex);
/// let mut generators = GeneratorSet::new(&ring);
/// assert!(generators.insert(ring.indeterminate(0)));
/// assert!(!generators.insert(ring.indeterminate(0)));
/// assert!(generators.insert(ring.add(ring.indeterminate(0), ring.one())));
/// assert_eq!(2, generators.len());
/// ```
///
pub struct GeneratorSet<P>
    where P: RingStore, P::Type: MultivariatePolyRing
{
    ring: P,
    elements: Vec<El<P>>
}

impl<P> GeneratorSet<P>
    where P: RingStore + Copy, P::Type: MultivariatePolyRing
{
    pub fn new(ring: P) -> Self {
        GeneratorSet { ring: ring, elements: Vec::new() }
    }

    pub fn with_elements<I>(ring: P, elements: I) -> Self
        where I: IntoIterator<Item = El<P>>
    {
        let mut result = Self::new(ring);
        for f in elements {
            result.insert(f);
        }
        return result;
    }

    pub fn ring(&self) -> P {
        self.ring
    }

    ///
    /// Returns the range of elements that compare equal to `f` w.r.t. [`BasisOrder`].
    ///
    fn equal_range(&self, f: &El<P>) -> Range<usize> {
        let start = self.elements.partition_point(|g| BasisOrder.compare(self.ring, g, f) == Ordering::Less);
        let end = start + self.elements[start..].partition_point(|g| BasisOrder.compare(self.ring, g, f) == Ordering::Equal);
        return start..end;
    }

    fn position(&self, f: &El<P>) -> Result<usize, usize> {
        let range = self.equal_range(f);
        match self.elements[range.clone()].iter().position(|g| BasisOrder.is_same(self.ring, g, f)) {
            Some(k) => Ok(range.start + k),
            None => Err(range.end)
        }
    }

    ///
    /// Inserts `f`, and returns `true` if it was not already contained.
    ///
    pub fn insert(&mut self, f: El<P>) -> bool {
        match self.position(&f) {
            Ok(_) => false,
            Err(index) => {
                self.elements.insert(index, f);
                true
            }
        }
    }

    ///
    /// Removes `f`, and returns `true` if it was contained.
    ///
    pub fn remove(&mut self, f: &El<P>) -> bool {
        match self.position(f) {
            Ok(index) => {
                self.elements.remove(index);
                true
            },
            Err(_) => false
        }
    }

    pub fn contains(&self, f: &El<P>) -> bool {
        self.position(f).is_ok()
    }

    pub fn iter<'a>(&'a self) -> std::slice::Iter<'a, El<P>> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<P> Clone for GeneratorSet<P>
    where P: RingStore + Copy, P::Type: MultivariatePolyRing
{
    fn clone(&self) -> Self {
        GeneratorSet {
            ring: self.ring,
            elements: self.elements.iter().map(|f| self.ring.clone_el(f)).collect()
        }
    }
}

impl<P> std::fmt::Debug for GeneratorSet<P>
    where P: RingStore + Copy, P::Type: MultivariatePolyRing
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (k, g) in self.elements.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.ring.format(g))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
use crate::rings::zn_static::F17;
#[cfg(test)]
use super::ordered::MultivariatePolyRingImpl;

#[test]
fn test_basis_order() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f = ring.add_ref(&x, &y);
    let g = ring.add(ring.mul_ref(&x, &ring.from_int(3)), ring.clone_el(&y));
    let h = ring.add_ref(&x, &ring.one());

    assert_eq!(Ordering::Equal, BasisOrder.compare(&ring, &f, &g));
    assert!(!BasisOrder.is_same(&ring, &f, &g));
    assert!(BasisOrder.is_same(&ring, &f, &ring.clone_el(&f)));
    // compares X1 with 1
    assert_eq!(Ordering::Greater, BasisOrder.compare(&ring, &f, &h));
    // x is a prefix of x + y
    assert_eq!(Ordering::Less, BasisOrder.compare(&ring, &x, &f));
    assert_eq!(Ordering::Greater, BasisOrder.compare(&ring, &y, &ring.zero()));
}

#[test]
fn test_generator_set() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f = ring.add_ref(&x, &y);
    let g = ring.add(ring.mul_ref(&x, &ring.from_int(3)), ring.clone_el(&y));

    let mut set = GeneratorSet::new(&ring);
    assert!(set.is_empty());
    assert!(set.insert(ring.clone_el(&f)));
    assert!(set.insert(ring.clone_el(&g)));
    assert!(!set.insert(ring.clone_el(&f)));
    assert!(set.insert(ring.clone_el(&x)));
    assert!(set.insert(ring.clone_el(&y)));
    assert!(!set.insert(ring.clone_el(&g)));
    assert_eq!(4, set.len());

    let ordered = set.iter().map(|f| format!("{}", ring.format(f))).collect::<Vec<_>>();
    assert_eq!(vec!["X1", "X0", "X0 + X1", "3*X0 + X1"], ordered);

    assert!(set.contains(&g));
    assert!(set.remove(&f));
    assert!(!set.remove(&f));
    assert!(!set.contains(&f));
    assert!(set.contains(&g));
    assert_eq!(3, set.len());

    let copy = set.clone();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(3, copy.len());
    assert_eq!("{X1, X0, 3*X0 + X1}", format!("{:?}", copy));
}
