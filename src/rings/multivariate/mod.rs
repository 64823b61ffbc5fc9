use std::cmp::{max, min, Ordering};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::AlgebraError;
use crate::field::*;
use crate::ring::*;

pub mod ordered;
pub mod basis_order;

pub type MonomialExponent = u16;

///
/// Adds two exponents, and panics if the result does not fit into a [`MonomialExponent`].
///
fn add_exponents(lhs: MonomialExponent, rhs: MonomialExponent) -> MonomialExponent {
    match lhs.checked_add(rhs) {
        Some(result) => result,
        None => panic!("exponent overflow: {} + {} exceeds the maximal exponent {}", lhs, rhs, MonomialExponent::MAX)
    }
}

pub type PolyCoeff<P> = El<<<P as RingStore>::Type as RingExtension>::BaseRing>;

///
/// A monomial `X0^e0 * X1^e1 * ...`, stored sparsely as the list of pairs
/// `(i, ei)` with `ei != 0`, sorted by the variable index `i`. Variables
/// that do not appear have exponent zero.
///
/// Monomials form a commutative monoid under multiplication, with the
/// additional operations of the divisibility lattice, i.e. [`Monomial::lcm()`]
/// and [`Monomial::gcd()`].
///
/// # Example
/// ```
/// # use groebner::rings::multivariate::*;
/// let a = Monomial::new([2, 0, 3]);
/// let b = Monomial::from_powers([(1, 1), (2, 2)]);
/// assert_eq!(Monomial::new([2, 1, 3]), a.lcm(&b));
/// assert_eq!(3, a[2]);
/// assert_eq!(0, a[100]);
/// ```
///
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<(usize, MonomialExponent)>", into = "Vec<(usize, MonomialExponent)>")]
pub struct Monomial {
    powers: Vec<(usize, MonomialExponent)>
}

impl Monomial {

    ///
    /// Creates the monomial whose `i`-th exponent is the `i`-th entry of `exponents`.
    ///
    pub fn new<I>(exponents: I) -> Self
        where I: IntoIterator<Item = MonomialExponent>
    {
        Monomial {
            powers: exponents.into_iter().enumerate().filter(|(_, e)| *e != 0).collect()
        }
    }

    ///
    /// Creates a monomial from pairs `(i, e)`, meaning that the `i`-th variable
    /// occurs with exponent `e`. The pairs may be given in any order, repeated
    /// variables are multiplied and zero exponents are dropped.
    ///
    pub fn from_powers<I>(powers: I) -> Self
        where I: IntoIterator<Item = (usize, MonomialExponent)>
    {
        let mut powers = powers.into_iter().collect::<Vec<_>>();
        powers.sort_by_key(|(i, _)| *i);
        let mut result: Vec<(usize, MonomialExponent)> = Vec::with_capacity(powers.len());
        for (i, e) in powers {
            match result.last_mut() {
                Some((last_i, last_e)) if *last_i == i => *last_e = add_exponents(*last_e, e),
                _ => result.push((i, e))
            }
        }
        result.retain(|(_, e)| *e != 0);
        return Monomial { powers: result };
    }

    pub fn one() -> Self {
        Monomial { powers: Vec::new() }
    }

    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    ///
    /// Returns the pairs `(i, ei)` with `ei != 0`, sorted by `i`.
    ///
    pub fn powers(&self) -> &[(usize, MonomialExponent)] {
        &self.powers
    }

    pub fn deg(&self) -> usize {
        self.powers.iter().map(|(_, e)| *e as usize).sum()
    }

    ///
    /// Combines the exponents of both monomials variable-wise, where absent
    /// exponents are passed as zero.
    ///
    fn combine<F>(&self, rhs: &Monomial, mut f: F) -> Monomial
        where F: FnMut(MonomialExponent, MonomialExponent) -> MonomialExponent
    {
        let mut result = Vec::with_capacity(self.powers.len() + rhs.powers.len());
        let (mut l, mut r) = (0, 0);
        loop {
            let (i, e) = match (self.powers.get(l), rhs.powers.get(r)) {
                (None, None) => break,
                (Some((i, e)), None) => { l += 1; (*i, f(*e, 0)) },
                (None, Some((i, e))) => { r += 1; (*i, f(0, *e)) },
                (Some((li, le)), Some((ri, re))) => match li.cmp(ri) {
                    Ordering::Less => { l += 1; (*li, f(*le, 0)) },
                    Ordering::Greater => { r += 1; (*ri, f(0, *re)) },
                    Ordering::Equal => { l += 1; r += 1; (*li, f(*le, *re)) }
                }
            };
            if e != 0 {
                result.push((i, e));
            }
        }
        return Monomial { powers: result };
    }

    ///
    /// Checks whether `rhs` divides `self`.
    ///
    pub fn is_divisible_by(&self, rhs: &Monomial) -> bool {
        let mut l = 0;
        for (i, e) in &rhs.powers {
            while l < self.powers.len() && self.powers[l].0 < *i {
                l += 1;
            }
            match self.powers.get(l) {
                Some((j, f)) if *j == *i && *f >= *e => {},
                _ => return false
            }
        }
        return true;
    }

    ///
    /// Checks whether `self` divides `rhs`.
    ///
    pub fn divides(&self, rhs: &Monomial) -> bool {
        rhs.is_divisible_by(self)
    }

    pub fn is_coprime(&self, rhs: &Monomial) -> bool {
        let (mut l, mut r) = (0, 0);
        while l < self.powers.len() && r < rhs.powers.len() {
            match self.powers[l].0.cmp(&rhs.powers[r].0) {
                Ordering::Less => l += 1,
                Ordering::Greater => r += 1,
                Ordering::Equal => return false
            }
        }
        return true;
    }

    pub fn mul(&self, rhs: &Monomial) -> Monomial {
        self.combine(rhs, add_exponents)
    }

    pub fn mul_assign(&mut self, rhs: &Monomial) {
        *self = self.mul(rhs);
    }

    ///
    /// Computes `self / rhs`, or returns [`AlgebraError::InvalidDivision`] if `rhs`
    /// does not divide `self`.
    ///
    pub fn checked_div(&self, rhs: &Monomial) -> Result<Monomial, AlgebraError> {
        if self.is_divisible_by(rhs) {
            Ok(self.combine(rhs, |a, b| a - b))
        } else {
            Err(AlgebraError::InvalidDivision)
        }
    }

    ///
    /// Computes `self / rhs`. Panics if `rhs` does not divide `self`.
    ///
    pub fn div(&self, rhs: &Monomial) -> Monomial {
        match self.checked_div(rhs) {
            Ok(result) => result,
            Err(err) => panic!("{}: {:?} / {:?}", err, self, rhs)
        }
    }

    pub fn lcm(&self, rhs: &Monomial) -> Monomial {
        self.combine(rhs, max)
    }

    pub fn gcd(&self, rhs: &Monomial) -> Monomial {
        self.combine(rhs, min)
    }
}

impl Index<usize> for Monomial {

    type Output = MonomialExponent;

    fn index(&self, index: usize) -> &Self::Output {
        match self.powers.binary_search_by_key(&index, |(i, _)| *i) {
            Ok(k) => &self.powers[k].1,
            Err(_) => &0
        }
    }
}

impl From<Vec<(usize, MonomialExponent)>> for Monomial {

    fn from(powers: Vec<(usize, MonomialExponent)>) -> Self {
        Monomial::from_powers(powers)
    }
}

impl From<Monomial> for Vec<(usize, MonomialExponent)> {

    fn from(monomial: Monomial) -> Self {
        monomial.powers
    }
}

impl Debug for Monomial {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.powers.is_empty() {
            return write!(f, "1");
        }
        for (k, (i, e)) in self.powers.iter().enumerate() {
            if k > 0 {
                write!(f, "*")?;
            }
            if *e == 1 {
                write!(f, "X{}", i)?;
            } else {
                write!(f, "X{}^{}", i, e)?;
            }
        }
        return Ok(());
    }
}

impl Display for Monomial {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

///
/// A way of comparing monomials that is compatible with multiplication,
/// i.e. `a <= b` implies `ac <= bc`. In general, this is only a preorder,
/// e.g. comparing monomials by degree. Total orders are [`MonomialOrder`]s.
///
pub trait MonomialComparator {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering;
}

///
/// A [`MonomialComparator`] that only depends on a (weighted) degree. Such a
/// preorder can be refined to an admissible order using [`ThenBy`].
///
pub trait Grading: MonomialComparator {

    ///
    /// Whether monomials of higher total degree are always larger.
    ///
    fn refines_total_degree(&self) -> bool;
}

///
/// A total order on monomials that is used to break ties of a [`Grading`].
/// It need not be admissible on its own.
///
pub trait TieBreak: MonomialComparator {}

///
/// An admissible monomial order, i.e. a total order on monomials that is
/// compatible with multiplication. Equivalently, it is a well-order with `1`
/// as smallest element. This is required for the termination of all the
/// reduction algorithms.
///
pub trait MonomialOrder: MonomialComparator + Clone + Debug {

    ///
    /// Whether monomials of higher total degree are always larger.
    ///
    fn is_graded(&self) -> bool;

    fn is_less(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    fn is_less_or_equal(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) != Ordering::Greater
    }

    fn is_greater(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }

    fn is_greater_or_equal(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) != Ordering::Less
    }

    fn max<'a>(&self, lhs: &'a Monomial, rhs: &'a Monomial) -> &'a Monomial {
        if self.is_less(lhs, rhs) {
            rhs
        } else {
            lhs
        }
    }
}

///
/// Lexicographic order: the first variable in which the exponents differ
/// decides, and the larger exponent gives the larger monomial. In particular
/// `X0 > X1 > X2 > ...`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Lex;

impl MonomialComparator for Lex {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        let (lhs, rhs) = (lhs.powers(), rhs.powers());
        let (mut l, mut r) = (0, 0);
        loop {
            match (lhs.get(l), rhs.get(r)) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((li, le)), Some((ri, re))) => match li.cmp(ri) {
                    // lhs has positive exponent at a variable that does not occur in rhs
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal if le != re => return le.cmp(re),
                    Ordering::Equal => {
                        l += 1;
                        r += 1;
                    }
                }
            }
        }
    }
}

impl TieBreak for Lex {}

impl MonomialOrder for Lex {

    fn is_graded(&self) -> bool { false }
}

///
/// Reverse lexicographic order: the last variable in which the exponents differ
/// decides, and the larger exponent gives the smaller monomial.
///
/// This is not admissible on its own (e.g. `1 > X0`), but it is a valid way to
/// break ties of a [`Grading`], giving e.g. [`DegRevLex`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RevLex;

impl MonomialComparator for RevLex {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        let (lhs, rhs) = (lhs.powers(), rhs.powers());
        let (mut l, mut r) = (lhs.len(), rhs.len());
        loop {
            match (l.checked_sub(1).map(|k| lhs[k]), r.checked_sub(1).map(|k| rhs[k])) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (Some((li, le)), Some((ri, re))) => match li.cmp(&ri) {
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Equal if le != re => return re.cmp(&le),
                    Ordering::Equal => {
                        l -= 1;
                        r -= 1;
                    }
                }
            }
        }
    }
}

impl TieBreak for RevLex {}

///
/// Compares monomials by their total degree.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TotalDeg;

impl MonomialComparator for TotalDeg {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.deg().cmp(&rhs.deg())
    }
}

impl Grading for TotalDeg {

    fn refines_total_degree(&self) -> bool { true }
}

///
/// Compares monomials by their weighted degree `sum wi * ei`. Variables
/// beyond the given weights have weight 1.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedDeg {
    weights: Vec<u64>
}

impl WeightedDeg {

    pub fn new(weights: Vec<u64>) -> Self {
        assert!(weights.iter().all(|w| *w > 0), "weights must be positive");
        WeightedDeg { weights }
    }

    pub fn weighted_deg(&self, monomial: &Monomial) -> u64 {
        monomial.powers().iter().map(|(i, e)| self.weights.get(*i).copied().unwrap_or(1) * *e as u64).sum()
    }
}

impl MonomialComparator for WeightedDeg {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        self.weighted_deg(lhs).cmp(&self.weighted_deg(rhs))
    }
}

impl Grading for WeightedDeg {

    fn refines_total_degree(&self) -> bool {
        self.weights.iter().all(|w| *w == 1)
    }
}

///
/// Compares monomials first by `primary`, and uses `secondary` if they are
/// equal w.r.t. `primary`.
///
/// This is an admissible [`MonomialOrder`] whenever `primary` is a [`Grading`]
/// and `secondary` is a [`TieBreak`]. Two gradings combine to a finer grading.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ThenBy<P, S> {
    primary: P,
    secondary: S
}

impl<P, S> ThenBy<P, S> {

    pub const fn new(primary: P, secondary: S) -> Self {
        ThenBy { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: MonomialComparator, S: MonomialComparator> MonomialComparator for ThenBy<P, S> {

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        self.primary.compare(lhs, rhs).then_with(|| self.secondary.compare(lhs, rhs))
    }
}

impl<P: Grading, S: Grading> Grading for ThenBy<P, S> {

    fn refines_total_degree(&self) -> bool {
        self.primary.refines_total_degree()
    }
}

impl<P, S> MonomialOrder for ThenBy<P, S>
    where P: Grading + Clone + Debug, S: TieBreak + Clone + Debug
{
    fn is_graded(&self) -> bool {
        self.primary.refines_total_degree()
    }
}

pub type DegLex = ThenBy<TotalDeg, Lex>;
pub type DegRevLex = ThenBy<TotalDeg, RevLex>;

pub const DEG_LEX: DegLex = ThenBy::new(TotalDeg, Lex);
pub const DEG_REV_LEX: DegRevLex = ThenBy::new(TotalDeg, RevLex);

///
/// Trait for multivariate polynomial rings over a base ring, with the terms of
/// each polynomial ordered w.r.t. a fixed [`MonomialOrder`].
///
/// Since the order is fixed, the leading term of a polynomial is always available
/// without any search, which is what the reduction algorithms in
/// [`crate::algorithms`] rely on.
///
pub trait MultivariatePolyRing: RingExtension {

    type Order: MonomialOrder;

    type TermIter<'a>: Iterator<Item = (&'a El<Self::BaseRing>, &'a Monomial)>
        where Self: 'a;

    fn order(&self) -> &Self::Order;

    ///
    /// Returns all terms of `f` with nonzero coefficient, in descending order
    /// w.r.t. [`MultivariatePolyRing::order()`].
    ///
    fn terms<'a>(&'a self, f: &'a Self::Element) -> Self::TermIter<'a>;

    fn term_count(&self, f: &Self::Element) -> usize;

    ///
    /// Creates the sum of the given terms. The terms may be given in any order,
    /// and may have zero coefficients or equal monomials.
    ///
    fn from_terms<I>(&self, terms: I) -> Self::Element
        where I: IntoIterator<Item = (El<Self::BaseRing>, Monomial)>;

    ///
    /// Removes the leading term of `f` and returns it, or returns `None` if `f` is zero.
    ///
    fn remove_lt(&self, f: &mut Self::Element) -> Option<(El<Self::BaseRing>, Monomial)>;

    ///
    /// Computes `lhs += factor * monomial * rhs`.
    ///
    fn add_assign_scaled(&self, lhs: &mut Self::Element, rhs: &Self::Element, factor: &El<Self::BaseRing>, monomial: &Monomial);

    ///
    /// Multiplies `f` by the term `factor * monomial`.
    ///
    fn mul_assign_term(&self, f: &mut Self::Element, factor: &El<Self::BaseRing>, monomial: &Monomial);

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, monomial: &Monomial) -> Option<&'a El<Self::BaseRing>>;

    ///
    /// Returns the leading term of `f`, i.e. the term with the largest monomial.
    ///
    fn lt<'a>(&'a self, f: &'a Self::Element) -> Option<(&'a El<Self::BaseRing>, &'a Monomial)> {
        self.terms(f).next()
    }

    fn monomial(&self, monomial: Monomial) -> Self::Element {
        self.from_terms([(self.base_ring().one(), monomial)])
    }

    fn indeterminate(&self, i: usize) -> Self::Element {
        self.monomial(Monomial::from_powers([(i, 1)]))
    }

    ///
    /// Returns all variables that occur in `f`, together with their maximal exponent.
    ///
    fn appearing_indeterminates(&self, f: &Self::Element) -> BTreeMap<usize, MonomialExponent> {
        let mut result = BTreeMap::new();
        for (_, m) in self.terms(f) {
            for (i, e) in m.powers() {
                let entry = result.entry(*i).or_insert(0);
                *entry = max(*entry, *e);
            }
        }
        return result;
    }
}

pub trait MultivariatePolyRingStore: RingStore
    where Self::Type: MultivariatePolyRing
{
    delegate!{ fn term_count(&self, f: &El<Self>) -> usize }
    delegate!{ fn remove_lt(&self, f: &mut El<Self>) -> Option<(PolyCoeff<Self>, Monomial)> }
    delegate!{ fn add_assign_scaled(&self, lhs: &mut El<Self>, rhs: &El<Self>, factor: &PolyCoeff<Self>, monomial: &Monomial) -> () }
    delegate!{ fn mul_assign_term(&self, f: &mut El<Self>, factor: &PolyCoeff<Self>, monomial: &Monomial) -> () }
    delegate!{ fn monomial(&self, monomial: Monomial) -> El<Self> }
    delegate!{ fn indeterminate(&self, i: usize) -> El<Self> }
    delegate!{ fn appearing_indeterminates(&self, f: &El<Self>) -> BTreeMap<usize, MonomialExponent> }

    fn order(&self) -> &<Self::Type as MultivariatePolyRing>::Order {
        self.get_ring().order()
    }

    fn terms<'a>(&'a self, f: &'a El<Self>) -> <Self::Type as MultivariatePolyRing>::TermIter<'a> {
        self.get_ring().terms(f)
    }

    fn from_terms<I>(&self, terms: I) -> El<Self>
        where I: IntoIterator<Item = (PolyCoeff<Self>, Monomial)>
    {
        self.get_ring().from_terms(terms)
    }

    fn coefficient_at<'a>(&'a self, f: &'a El<Self>, monomial: &Monomial) -> Option<&'a PolyCoeff<Self>> {
        self.get_ring().coefficient_at(f, monomial)
    }

    fn lt<'a>(&'a self, f: &'a El<Self>) -> Option<(&'a PolyCoeff<Self>, &'a Monomial)> {
        self.get_ring().lt(f)
    }

    fn lm<'a>(&'a self, f: &'a El<Self>) -> Option<&'a Monomial> {
        self.lt(f).map(|(_, m)| m)
    }

    ///
    /// Returns the leading term of `f`, or [`AlgebraError::EmptyPolynomial`] if `f` is zero.
    ///
    fn leading_term<'a>(&'a self, f: &'a El<Self>) -> Result<(&'a PolyCoeff<Self>, &'a Monomial), AlgebraError> {
        self.lt(f).ok_or(AlgebraError::EmptyPolynomial)
    }

    fn mul_term(&self, mut f: El<Self>, factor: &PolyCoeff<Self>, monomial: &Monomial) -> El<Self> {
        self.mul_assign_term(&mut f, factor, monomial);
        return f;
    }

    ///
    /// Divides `f` by its leading coefficient, so that the result is monic.
    /// The zero polynomial is left unchanged.
    ///
    fn normalize(&self, mut f: El<Self>) -> El<Self>
        where <<Self::Type as RingExtension>::BaseRing as RingStore>::Type: Field
    {
        if let Some((lc, _)) = self.lt(&f) {
            let inv_lc = self.base_ring().invert(lc);
            self.mul_assign_term(&mut f, &inv_lc, &Monomial::one());
        }
        return f;
    }
}

impl<P> MultivariatePolyRingStore for P
    where P: RingStore, P::Type: MultivariatePolyRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Returns a random monomial in `variable_count` variables with exponents
    /// less than `max_exponent`.
    ///
    pub fn random_monomial(rng: &mut oorandom::Rand64, variable_count: usize, max_exponent: MonomialExponent) -> Monomial {
        Monomial::new((0..variable_count).map(|_| rng.rand_range(0..(max_exponent as u64)) as MonomialExponent))
    }

    ///
    /// Checks that the given order is a total order on random monomials, and that it
    /// is compatible with multiplication.
    ///
    pub fn test_monomial_order_axioms<O: MonomialOrder>(order: O, seed: u128) {
        let mut rng = oorandom::Rand64::new(seed);
        let one = Monomial::one();
        for _ in 0..200 {
            let a = random_monomial(&mut rng, 4, 4);
            let b = random_monomial(&mut rng, 4, 4);
            let c = random_monomial(&mut rng, 4, 4);

            assert_eq!(a == b, order.compare(&a, &b) == Ordering::Equal, "{:?} and {:?} must be equal iff they compare equal", a, b);
            assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            if order.is_less(&a, &b) && order.is_less(&b, &c) {
                assert!(order.is_less(&a, &c), "transitivity failed for {:?} < {:?} < {:?}", a, b, c);
            }
            assert_eq!(order.compare(&a, &b), order.compare(&a.mul(&c), &b.mul(&c)), "multiplication by {:?} does not preserve the order of {:?} and {:?}", c, a, b);
            assert!(order.is_less_or_equal(&one, &a));
            if order.is_graded() && a.deg() < b.deg() {
                assert!(order.is_less(&a, &b));
            }
        }
    }
}

#[cfg(test)]
use generic_tests::test_monomial_order_axioms;

#[test]
fn test_monomial_arithmetic() {
    let m = Monomial::from_powers([(0, 1), (2, 2), (3, 3), (10, 0)]);
    assert_eq!(&[(0, 1), (2, 2), (3, 3)], m.powers());
    assert_eq!(Monomial::from_powers([(0, 2), (2, 4), (3, 6)]), m.mul(&m));
    assert_eq!(Monomial::one(), m.div(&m));
    assert!(m.div(&m).is_one());
    let m2 = m.mul(&m);
    assert_eq!(m, m2.div(&m));
    assert!(m2.is_divisible_by(&m));
    assert!(m.divides(&m2));
    assert!(!m.is_divisible_by(&m2));
    assert!(!m2.is_divisible_by(&Monomial::from_powers([(100, 1)])));
    assert_eq!(Err(AlgebraError::InvalidDivision), m.checked_div(&m2));
    assert_eq!(6, m.deg());
    assert_eq!(Monomial::new([1, 0, 2]), Monomial::from_powers([(2, 1), (0, 1), (2, 1)]));
}

#[test]
#[should_panic]
fn test_monomial_invalid_division() {
    Monomial::new([1, 1]).div(&Monomial::new([0, 2]));
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn test_exponent_overflow_mul() {
    Monomial::new([40000]).mul(&Monomial::new([40000]));
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn test_exponent_overflow_from_powers() {
    Monomial::from_powers([(2, 40000), (1, 1), (2, 40000)]);
}

#[test]
fn test_maximal_exponent() {
    let m = Monomial::new([MonomialExponent::MAX - 1]).mul(&Monomial::new([1]));
    assert_eq!(MonomialExponent::MAX, m[0]);
    assert_eq!(Monomial::new([MonomialExponent::MAX]), Monomial::from_powers([(0, MonomialExponent::MAX - 5), (0, 5)]));
}

#[test]
fn test_lcm_gcd() {
    let a = Monomial::new([2, 0, 3]);
    let b = Monomial::new([0, 1, 2]);
    let lcm = a.lcm(&b);
    assert_eq!(Monomial::new([2, 1, 3]), lcm);
    assert_eq!(Monomial::new([0, 0, 2]), a.gcd(&b));
    assert!(lcm.is_divisible_by(&a) && lcm.is_divisible_by(&b));
    assert!(!a.is_coprime(&b));
    assert!(Monomial::new([1, 0, 0]).is_coprime(&Monomial::new([0, 4, 1])));
    assert!(Monomial::one().is_coprime(&a));
}

#[test]
fn test_lcm_is_least_common_multiple() {
    let mut rng = oorandom::Rand64::new(2);
    for _ in 0..300 {
        let a = generic_tests::random_monomial(&mut rng, 3, 4);
        let b = generic_tests::random_monomial(&mut rng, 3, 4);
        let c = generic_tests::random_monomial(&mut rng, 3, 6);
        let lcm = a.lcm(&b);
        assert!(lcm.is_divisible_by(&a));
        assert!(lcm.is_divisible_by(&b));
        if c.is_divisible_by(&a) && c.is_divisible_by(&b) {
            assert!(c.is_divisible_by(&lcm));
        }
        assert_eq!(a.mul(&b), lcm.mul(&a.gcd(&b)));
    }
}

#[test]
fn test_index() {
    let m = Monomial::from_powers([(5, 2), (1, 3)]);
    assert_eq!(0, m[0]);
    assert_eq!(3, m[1]);
    assert_eq!(2, m[5]);
    assert_eq!(0, m[6]);
}

#[test]
fn test_format_monomial() {
    assert_eq!("1", format!("{:?}", Monomial::one()));
    assert_eq!("X0*X2^3", format!("{:?}", Monomial::new([1, 0, 3])));
}

#[test]
fn test_serialize_monomial() {
    let m = Monomial::from_powers([(4, 1), (0, 2)]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!("[[0,2],[4,1]]", json);
    assert_eq!(m, serde_json::from_str::<Monomial>(&json).unwrap());
    // non-canonical input is normalized
    assert_eq!(m, serde_json::from_str::<Monomial>("[[4,1],[3,0],[0,1],[0,1]]").unwrap());

    let order = ThenBy::new(WeightedDeg::new(vec![1, 2]), RevLex);
    let json = serde_json::to_string(&order).unwrap();
    assert_eq!(order, serde_json::from_str::<ThenBy<WeightedDeg, RevLex>>(&json).unwrap());
}

#[cfg(test)]
fn all_monomials_sorted_desc() -> [Monomial; 10] {
    [
        Monomial::new([2, 0, 0]),
        Monomial::new([1, 1, 0]),
        Monomial::new([1, 0, 1]),
        Monomial::new([1, 0, 0]),
        Monomial::new([0, 2, 0]),
        Monomial::new([0, 1, 1]),
        Monomial::new([0, 1, 0]),
        Monomial::new([0, 0, 2]),
        Monomial::new([0, 0, 1]),
        Monomial::new([0, 0, 0])
    ]
}

#[test]
fn test_lex() {
    let expected = all_monomials_sorted_desc();
    let mut monomials = expected.clone();
    monomials.sort_by(|l, r| Lex.compare(l, r).reverse());
    assert_eq!(expected, monomials);
    assert!(Lex.is_greater(&Monomial::new([1]), &Monomial::new([0, 5])));
}

#[test]
fn test_deglex() {
    let expected = [
        Monomial::new([2, 0, 0]),
        Monomial::new([1, 1, 0]),
        Monomial::new([1, 0, 1]),
        Monomial::new([0, 2, 0]),
        Monomial::new([0, 1, 1]),
        Monomial::new([0, 0, 2]),
        Monomial::new([1, 0, 0]),
        Monomial::new([0, 1, 0]),
        Monomial::new([0, 0, 1]),
        Monomial::new([0, 0, 0])
    ];
    let mut monomials = all_monomials_sorted_desc();
    monomials.sort_by(|l, r| DEG_LEX.compare(l, r).reverse());
    assert_eq!(expected, monomials);
}

#[test]
fn test_degrevlex() {
    let expected = [
        Monomial::new([2, 0, 0]),
        Monomial::new([1, 1, 0]),
        Monomial::new([0, 2, 0]),
        Monomial::new([1, 0, 1]),
        Monomial::new([0, 1, 1]),
        Monomial::new([0, 0, 2]),
        Monomial::new([1, 0, 0]),
        Monomial::new([0, 1, 0]),
        Monomial::new([0, 0, 1]),
        Monomial::new([0, 0, 0])
    ];
    let mut monomials = all_monomials_sorted_desc();
    monomials.sort_by(|l, r| DEG_REV_LEX.compare(l, r).reverse());
    assert_eq!(expected, monomials);
}

#[test]
fn test_relational_predicates() {
    let m1 = Monomial::from_powers([(0, 1), (2, 2), (3, 4)]);
    let m2 = m1.clone();
    let m3 = Monomial::from_powers([(0, 1), (2, 3), (3, 3)]);

    assert!(!Lex.is_less(&m1, &m2));
    assert!(Lex.is_less_or_equal(&m1, &m2));
    assert!(Lex.is_greater(&m3, &m1));
    assert!(Lex.is_greater_or_equal(&m3, &m2));

    assert!(!DEG_LEX.is_less(&m1, &m2));
    assert!(DEG_LEX.is_less_or_equal(&m1, &m2));
    assert!(DEG_LEX.is_greater(&m3, &m2));
    assert!(DEG_LEX.is_greater_or_equal(&m3, &m2));

    assert!(!DEG_REV_LEX.is_less(&m1, &m2));
    assert!(DEG_REV_LEX.is_less_or_equal(&m1, &m2));
    assert!(DEG_REV_LEX.is_greater(&m3, &m1));
    assert!(DEG_REV_LEX.is_greater_or_equal(&m3, &m1));
    assert_eq!(&m3, DEG_REV_LEX.max(&m1, &m3));
}

#[test]
fn test_order_axioms() {
    test_monomial_order_axioms(Lex, 1);
    test_monomial_order_axioms(DEG_LEX, 2);
    test_monomial_order_axioms(DEG_REV_LEX, 3);
    test_monomial_order_axioms(ThenBy::new(WeightedDeg::new(vec![3, 1, 2]), Lex), 4);
    test_monomial_order_axioms(ThenBy::new(ThenBy::new(TotalDeg, WeightedDeg::new(vec![1, 5])), RevLex), 5);
}

#[test]
fn test_total_degree_is_not_total() {
    let a = Monomial::new([1, 0]);
    let b = Monomial::new([0, 1]);
    assert_eq!(Ordering::Equal, TotalDeg.compare(&a, &b));
    assert_eq!(Ordering::Greater, DEG_LEX.compare(&a, &b));
    assert_eq!(Ordering::Greater, DEG_REV_LEX.compare(&a, &b));
}
