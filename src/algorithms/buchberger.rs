use std::cmp::{max, min};
use std::collections::BTreeSet;

use append_only_vec::AppendOnlyVec;
use tracing::{event, instrument, span, Level};

use crate::algorithms::multivariate_division::{multivariate_division, normal_form, reduce_with, BasisElement};
use crate::error::AlgebraError;
use crate::field::*;
use crate::ring::*;
use crate::rings::multivariate::*;
use crate::rings::multivariate::basis_order::GeneratorSet;

///
/// Selects which criteria [`buchberger()`] uses to discard S-polynomials without
/// computing them.
///
/// Both criteria only skip S-polynomials that are known to reduce to zero (resp. whose
/// reduction is covered by other pairs), so the computed ideal and the reduced Gröbner
/// basis never depend on this choice.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairCriteria {
    /// Skip pairs whose leading monomials have no common variable.
    pub coprime: bool,
    /// Skip pairs `(i, j)` for which some `l` with `lm(l) | lcm(lm(i), lm(j))` is still
    /// connected to both `i` and `j` by pending pairs.
    pub chain: bool
}

impl PairCriteria {

    pub const ALL: PairCriteria = PairCriteria { coprime: true, chain: true };
    pub const NONE: PairCriteria = PairCriteria { coprime: false, chain: false };
}

impl Default for PairCriteria {

    fn default() -> Self {
        Self::ALL
    }
}

fn spoly_of<P>(ring: P, f: &BasisElement<P>, g: &BasisElement<P>) -> El<P>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let base_ring = ring.base_ring();
    let lcm = f.lm.lcm(&g.lm);
    let mut result = ring.mul_term(ring.clone_el(&f.poly), &base_ring.invert(&f.lc), &lcm.div(&f.lm));
    ring.add_assign_scaled(&mut result, &g.poly, &base_ring.negate(base_ring.invert(&g.lc)), &lcm.div(&g.lm));
    return result;
}

///
/// Computes the S-polynomial of `f` and `g`, i.e. the combination
/// ```text
///   lcm / lt(f) * f - lcm / lt(g) * g
/// ```
/// where `lcm` is the least common multiple of the leading monomials. The leading
/// terms cancel, and the leading monomial of the result is smaller than `lcm`.
///
/// Returns [`AlgebraError::EmptyPolynomial`] if `f` or `g` is zero.
///
pub fn spoly<P>(ring: P, f: &El<P>, g: &El<P>) -> Result<El<P>, AlgebraError>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let f = BasisElement::new(ring, ring.clone_el(f)).ok_or(AlgebraError::EmptyPolynomial)?;
    let g = BasisElement::new(ring, ring.clone_el(g)).ok_or(AlgebraError::EmptyPolynomial)?;
    return Ok(spoly_of(ring, &f, &g));
}

///
/// Checks whether the pair `(i, j)` is redundant because another generator `l` with
/// `lm(l) | lcm` is connected to both `i` and `j` by pairs that are still pending.
/// Those pairs are processed after `(i, j)`, and they cover its S-polynomial.
///
fn chain_criterion<P>(basis: &AppendOnlyVec<BasisElement<P>>, pairs: &BTreeSet<(usize, usize)>, (i, j): (usize, usize), lcm: &Monomial) -> bool
    where P: RingStore, P::Type: MultivariatePolyRing
{
    (0..basis.len()).filter(|l| *l != i && *l != j).any(|l|
        pairs.contains(&(min(l, i), max(l, i))) &&
        pairs.contains(&(min(l, j), max(l, j))) &&
        lcm.is_divisible_by(&basis[l].lm)
    )
}

///
/// Extends the given generators to a Gröbner basis of the ideal they generate, w.r.t.
/// the monomial order of `ring`.
///
/// The returned list starts with the nonzero input generators, in the given order, followed
/// by the new generators in the order they were found. The result is a Gröbner basis, but
/// in general neither minimal nor reduced, see [`minimalize()`] and [`inter_reduce()`].
///
/// The algorithm keeps a queue of pending pairs `(i, j)` with `i < j`, and always processes
/// the smallest one. Unless a criterion from `criteria` discards it, the S-polynomial of the
/// pair is reduced w.r.t. the current basis, and if the remainder `r` is nonzero, the new
/// generator is `r / lc(r)`. Hence new generators are monic, and they are not literally the
/// remainders. Scaling does not change the generated ideal or the reduced Gröbner basis.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::assert_el_eq;
/// # use groebner::rings::rational::QQ;
/// # use groebner::rings::multivariate::*;
/// # use groebner::rings::multivariate::ordered::*;
/// # use groebner::algorithms::buchberger::*;
/// let ring = MultivariatePolyRingImpl::new(QQ, Lex);
/// let x = ring.indeterminate(0);
/// let y = ring.indeterminate(1);
/// let f1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
/// let f2 = ring.sub(ring.mul_ref(&y, &y), ring.one());
/// let basis = buchberger(&ring, vec![f1, f2], PairCriteria::default());
/// assert_eq!(3, basis.len());
/// assert_el_eq!(&ring, ring.sub(x, y), &basis[2]);
/// ```
///
#[instrument(skip_all, level = "trace")]
pub fn buchberger<P>(ring: P, generators: Vec<El<P>>, criteria: PairCriteria) -> Vec<El<P>>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    span!(Level::INFO, "buchberger", generators = generators.len()).in_scope(|| {

        let basis = AppendOnlyVec::new();
        for f in generators {
            if let Some(f) = BasisElement::new(ring, f) {
                _ = basis.push(f);
            }
        }
        let mut pairs = (0..basis.len()).flat_map(|j| (0..j).map(move |i| (i, j))).collect::<BTreeSet<_>>();

        let mut coprime_skipped = 0;
        let mut chain_skipped = 0;
        let mut zero_reductions = 0;

        while let Some(&(i, j)) = pairs.first() {
            let lcm = basis[i].lm.lcm(&basis[j].lm);
            if criteria.coprime && basis[i].lm.is_coprime(&basis[j].lm) {
                event!(Level::TRACE, i, j, "coprime");
                coprime_skipped += 1;
            } else if criteria.chain && chain_criterion(&basis, &pairs, (i, j), &lcm) {
                event!(Level::TRACE, i, j, "chain");
                chain_skipped += 1;
            } else {
                let s = reduce_with(ring, spoly_of(ring, &basis[i], &basis[j]), || basis.iter().enumerate(), |_, _, _| {});
                if let Some(new_generator) = BasisElement::new(ring, ring.normalize(s)) {
                    let k = basis.push(new_generator);
                    event!(Level::TRACE, i, j, lm = %basis[k].lm, "new_generator");
                    pairs.extend((0..k).map(|l| (l, k)));
                } else {
                    event!(Level::TRACE, i, j, "reduced_to_zero");
                    zero_reductions += 1;
                }
            }
            pairs.remove(&(i, j));
        }

        event!(Level::INFO, basis_len = basis.len(), coprime_skipped, chain_skipped, zero_reductions);
        return basis.into_vec().into_iter().map(|f| f.poly).collect();
    })
}

///
/// Computes a Gröbner basis without a pair queue: in every round, all S-polynomials of
/// the current basis are reduced, and the nonzero remainders are added. This is repeated
/// until a round finds no new generator.
///
/// This is much slower than [`buchberger()`], but simple enough to serve as reference.
/// As for [`buchberger()`], the result starts with the nonzero input generators, and each
/// new generator is a nonzero remainder divided by its leading coefficient.
///
#[stability::unstable(feature = "enable")]
#[instrument(skip_all, level = "trace")]
pub fn buchberger_fixpoint<P>(ring: P, generators: Vec<El<P>>) -> Vec<El<P>>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    span!(Level::INFO, "buchberger_fixpoint", generators = generators.len()).in_scope(|| {

        let mut basis = generators.into_iter().filter_map(|f| BasisElement::new(ring, f)).collect::<Vec<_>>();
        let mut rounds = 0;
        loop {
            rounds += 1;
            let old_len = basis.len();
            for j in 0..old_len {
                for i in 0..j {
                    let s = normal_form(ring, spoly_of(ring, &basis[i], &basis[j]), &basis);
                    if let Some(new_generator) = BasisElement::new(ring, ring.normalize(s)) {
                        basis.push(new_generator);
                    }
                }
            }
            if basis.len() == old_len {
                break;
            }
        }

        event!(Level::INFO, basis_len = basis.len(), rounds);
        return basis.into_iter().map(|f| f.poly).collect();
    })
}

///
/// Makes all generators monic and removes the redundant ones, i.e. those whose leading
/// monomial is divisible by the leading monomial of another remaining generator. Zero
/// polynomials are removed as well.
///
/// Generators are removed one at a time, so of two generators with the same leading
/// monomial, exactly one is kept.
///
#[instrument(skip_all, level = "trace")]
pub fn minimalize<P>(ring: P, basis: Vec<El<P>>) -> Vec<El<P>>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let mut basis = basis.into_iter().filter_map(|f| BasisElement::new(ring, ring.normalize(f))).collect::<Vec<_>>();
    let mut i = 0;
    while i < basis.len() {
        let redundant = basis.iter().enumerate().any(|(k, g)| k != i && basis[i].lm.is_divisible_by(&g.lm));
        if redundant {
            basis.remove(i);
        } else {
            i += 1;
        }
    }
    return basis.into_iter().map(|f| f.poly).collect();
}

///
/// Replaces each generator by its normal form w.r.t. all other generators.
///
/// The basis should be minimal, as returned by [`minimalize()`]. Then the leading terms
/// do not change, and if the input is a Gröbner basis, the result is the reduced Gröbner
/// basis of its ideal.
///
#[instrument(skip_all, level = "trace")]
pub fn inter_reduce<P>(ring: P, basis: Vec<El<P>>) -> Vec<El<P>>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let mut basis = basis.into_iter().filter_map(|f| BasisElement::new(ring, f)).collect::<Vec<_>>();
    for i in 0..basis.len() {
        let (before, rest) = basis.split_at_mut(i);
        if let Some((current, after)) = rest.split_first_mut() {
            let (before, after) = (&*before, &*after);
            let reduced = reduce_with(ring, ring.clone_el(&current.poly), || before.iter().chain(after.iter()).enumerate(), |_, _, _| {});
            debug_assert!(ring.lm(&reduced) == Some(&current.lm), "inter_reduce() requires a minimal basis");
            current.poly = reduced;
        }
    }
    return basis.into_iter().map(|f| f.poly).collect();
}

///
/// Checks whether the given polynomials form a Gröbner basis of the ideal they generate,
/// i.e. whether the S-polynomial of any two of them reduces to zero. Zero polynomials
/// are ignored.
///
#[instrument(skip_all, level = "trace")]
pub fn is_groebner_basis<P>(ring: P, basis: &[El<P>]) -> bool
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let basis = basis.iter().filter_map(|f| BasisElement::new(ring, ring.clone_el(f))).collect::<Vec<_>>();
    (0..basis.len()).all(|j| (0..j).all(|i|
        ring.is_zero(&normal_form(ring, spoly_of(ring, &basis[i], &basis[j]), &basis))
    ))
}

///
/// Checks whether the given polynomials form the reduced Gröbner basis of the ideal they
/// generate, i.e. they form a Gröbner basis, are all monic, and no term of any of them is
/// divisible by the leading monomial of another one.
///
pub fn is_reduced_groebner_basis<P>(ring: P, basis: &[El<P>]) -> bool
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let Some(leading_monomials) = basis.iter().map(|f| ring.lt(f).filter(|(c, _)| ring.base_ring().is_one(c)).map(|(_, m)| m)).collect::<Option<Vec<_>>>() else {
        return false;
    };
    let is_reduced = basis.iter().enumerate().all(|(i, f)| ring.terms(f).all(|(_, m)|
        leading_monomials.iter().enumerate().all(|(k, lm)| k == i || !m.is_divisible_by(lm))
    ));
    return is_reduced && is_groebner_basis(ring, basis);
}

///
/// Extends `generators` in place to a Gröbner basis of the ideal it generates.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::rings::rational::QQ;
/// # use groebner::rings::multivariate::*;
/// # use groebner::rings::multivariate::ordered::*;
/// # use groebner::rings::multivariate::basis_order::*;
/// # use groebner::algorithms::buchberger::*;
/// let ring = MultivariatePolyRingImpl::new(QQ, Lex);
/// let x = ring.indeterminate(0);
/// let y = ring.indeterminate(1);
/// let mut basis = GeneratorSet::with_elements(&ring, [
///     ring.sub(ring.mul_ref(&x, &y), ring.one()),
///     ring.sub(ring.mul_ref(&y, &y), ring.one())
/// ]);
/// extend_to_groebner(&mut basis);
/// assert!(basis.contains(&ring.sub_ref(&x, &y)));
/// make_reduced(&mut basis);
/// assert_eq!(2, basis.len());
/// ```
///
pub fn extend_to_groebner<P>(generators: &mut GeneratorSet<P>)
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let ring = generators.ring();
    let completed = buchberger(ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::default());
    for f in completed {
        _ = generators.insert(f);
    }
}

///
/// Transforms the Gröbner basis `basis` in place into the reduced Gröbner basis of its ideal,
/// which only depends on the ideal and the monomial order.
///
/// If `basis` is not a Gröbner basis, the result generates the same ideal, but is otherwise
/// unspecified.
///
pub fn make_reduced<P>(basis: &mut GeneratorSet<P>)
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let ring = basis.ring();
    let reduced = inter_reduce(ring, minimalize(ring, basis.iter().map(|f| ring.clone_el(f)).collect()));
    basis.clear();
    for f in reduced {
        _ = basis.insert(f);
    }
}

///
/// Returns the normal form of `f` w.r.t. `basis`, as computed by [`multivariate_division()`].
///
pub fn reduce<P>(f: El<P>, basis: &GeneratorSet<P>) -> El<P>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    multivariate_division(basis.ring(), f, basis.iter())
}

///
/// Checks whether `f` is in the ideal generated by `basis`, which must be a Gröbner basis.
///
pub fn is_in_groebner_ideal<P>(f: &El<P>, basis: &GeneratorSet<P>) -> bool
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let ring = basis.ring();
    ring.is_zero(&reduce(ring.clone_el(f), basis))
}

///
/// Checks whether `f` is in the ideal generated by `generators`. This requires computing
/// a Gröbner basis; if it is already known, use [`is_in_groebner_ideal()`] instead.
///
#[instrument(skip_all, level = "trace")]
pub fn is_in_ideal<P>(f: &El<P>, generators: &GeneratorSet<P>) -> bool
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let mut basis = generators.clone();
    extend_to_groebner(&mut basis);
    return is_in_groebner_ideal(f, &basis);
}

#[cfg(test)]
use crate::rings::zn_static::F17;
#[cfg(test)]
use crate::rings::rational::QQ;
#[cfg(test)]
use crate::rings::multivariate::ordered::MultivariatePolyRingImpl;
#[cfg(test)]
use crate::rings::multivariate::generic_tests::random_monomial;
#[cfg(test)]
use crate::tracing::LogAlgorithmSubscriber;

#[cfg(test)]
fn assert_same_set<P>(expected: &GeneratorSet<P>, actual: &GeneratorSet<P>)
    where P: RingStore + Copy, P::Type: MultivariatePolyRing
{
    assert!(
        expected.len() == actual.len() && expected.iter().all(|f| actual.contains(f)),
        "expected {:?}, but got {:?}", expected, actual
    );
}

#[cfg(test)]
fn reduced_basis<P>(ring: P, basis: Vec<El<P>>) -> GeneratorSet<P>
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let mut result = GeneratorSet::with_elements(ring, basis);
    make_reduced(&mut result);
    return result;
}

#[test]
fn test_spoly() {
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let g = ring.add(ring.mul(ring.from_int(2), ring.mul_ref(&y, &y)), ring.one());

    // y * (x y - 1) - x / 2 * (2 y^2 + 1) = -y - x / 2
    let expected = ring.sub(ring.negate(ring.clone_el(&y)), ring.mul(ring.from_terms([(QQ.get_ring().from_fraction(1, 2), Monomial::one())]), ring.clone_el(&x)));
    assert_el_eq!(&ring, &expected, &spoly(&ring, &f, &g).unwrap());
    assert_el_eq!(&ring, &ring.negate(expected), &spoly(&ring, &g, &f).unwrap());
    assert!(ring.is_zero(&spoly(&ring, &f, &f).unwrap()));
    assert_eq!(Some(AlgebraError::EmptyPolynomial), spoly(&ring, &f, &ring.zero()).err());
}

#[test]
fn test_end_to_end() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let f2 = ring.sub(ring.mul_ref(&y, &y), ring.one());
    let x_minus_y = ring.sub_ref(&x, &y);

    let generators = GeneratorSet::with_elements(&ring, [ring.clone_el(&f1), ring.clone_el(&f2)]);
    let mut basis = generators.clone();
    extend_to_groebner(&mut basis);
    assert_same_set(&GeneratorSet::with_elements(&ring, [ring.clone_el(&f1), ring.clone_el(&f2), ring.clone_el(&x_minus_y)]), &basis);
    assert!(is_groebner_basis(&ring, &basis.iter().map(|f| ring.clone_el(f)).collect::<Vec<_>>()));

    make_reduced(&mut basis);
    assert_same_set(&GeneratorSet::with_elements(&ring, [ring.clone_el(&x_minus_y), ring.clone_el(&f2)]), &basis);
    assert!(is_reduced_groebner_basis(&ring, &basis.iter().map(|f| ring.clone_el(f)).collect::<Vec<_>>()));

    assert!(is_in_ideal(&f1, &generators));
    assert!(is_in_ideal(&x_minus_y, &generators));
    assert!(!is_in_ideal(&x, &generators));
    assert!(is_in_groebner_ideal(&f1, &basis));
    assert_el_eq!(&ring, &y, &reduce(ring.clone_el(&x), &basis));
}

#[test]
fn test_new_generators_are_monic() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(QQ, DEG_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let f2 = ring.add(ring.mul_ref(&y, &y), ring.clone_el(&x));
    // y * f1 - x * f2 = -x^2 - y is already reduced, and is inserted as x^2 + y
    let remainder = ring.negate(ring.add(ring.mul_ref(&x, &x), ring.clone_el(&y)));
    assert_el_eq!(&ring, &remainder, &multivariate_division(&ring, spoly(&ring, &f1, &f2).unwrap(), [&f1, &f2]));

    for basis in [
        buchberger(&ring, vec![ring.clone_el(&f1), ring.clone_el(&f2)], PairCriteria::default()),
        buchberger_fixpoint(&ring, vec![ring.clone_el(&f1), ring.clone_el(&f2)])
    ] {
        assert_el_eq!(&ring, &f1, &basis[0]);
        assert_el_eq!(&ring, &f2, &basis[1]);
        assert_el_eq!(&ring, &ring.negate(ring.clone_el(&remainder)), &basis[2]);
        for g in &basis[2..] {
            assert!(QQ.is_one(ring.lt(g).unwrap().0));
        }
    }

    let mut generators = GeneratorSet::with_elements(&ring, [ring.clone_el(&f1), ring.clone_el(&f2)]);
    extend_to_groebner(&mut generators);
    assert!(generators.contains(&ring.negate(ring.clone_el(&remainder))));
    assert!(!generators.contains(&remainder));
}

#[test]
fn test_katsura3() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let u = (0..4).map(|i| ring.indeterminate(i)).collect::<Vec<_>>();
    // u_{-l} = u_l, and u_l = 0 for l > 3
    let u_at = |l: i64| if l.unsigned_abs() <= 3 { ring.clone_el(&u[l.unsigned_abs() as usize]) } else { ring.zero() };
    let mut generators = vec![ring.sub(
        ring.add(ring.clone_el(&u[0]), ring.mul(ring.from_int(2), ring.sum(u[1..].iter().map(|ui| ring.clone_el(ui))))),
        ring.one()
    )];
    for m in 0..3 {
        let sum = ring.sum((-3..=3).map(|l| ring.mul(u_at(l), u_at(m - l))));
        generators.push(ring.sub(sum, u_at(m)));
    }

    let basis = reduced_basis(&ring, buchberger(&ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::default()));
    let basis_vec = basis.iter().map(|f| ring.clone_el(f)).collect::<Vec<_>>();
    assert!(is_reduced_groebner_basis(&ring, &basis_vec));
    for f in &generators {
        assert!(is_in_groebner_ideal(f, &basis));
    }
    // the ideal is zero-dimensional, so the lex basis contains a univariate polynomial in the last variable
    assert!(basis.iter().any(|f| ring.appearing_indeterminates(f).keys().copied().collect::<Vec<_>>() == vec![3usize]));
    assert!(!basis.iter().any(|f| ring.is_one(f)));
}

#[test]
fn test_reduced_basis_deglex() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(QQ, DEG_LEX);
    let f1 = ring.from_terms([
        (QQ.one(), Monomial::new([3, 0])),
        (QQ.from_int(-2), Monomial::new([1, 1]))
    ]);
    let f2 = ring.from_terms([
        (QQ.one(), Monomial::new([2, 1])),
        (QQ.from_int(-2), Monomial::new([0, 2])),
        (QQ.one(), Monomial::new([1, 0]))
    ]);

    let mut basis = GeneratorSet::with_elements(&ring, [ring.clone_el(&f1), ring.clone_el(&f2)]);
    extend_to_groebner(&mut basis);
    make_reduced(&mut basis);

    let expected = GeneratorSet::with_elements(&ring, [
        ring.monomial(Monomial::new([2, 0])),
        ring.monomial(Monomial::new([1, 1])),
        ring.from_terms([(QQ.one(), Monomial::new([0, 2])), (QQ.get_ring().from_fraction(-1, 2), Monomial::new([1, 0]))])
    ]);
    assert_same_set(&expected, &basis);
    assert!(is_in_groebner_ideal(&f1, &basis));
    assert!(is_in_groebner_ideal(&f2, &basis));
}

#[test]
fn test_elementary_symmetric_system() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = [ring.indeterminate(0), ring.indeterminate(1), ring.indeterminate(2)];
    let e1 = ring.sum(x.iter().map(|xi| ring.clone_el(xi)));
    let e2 = ring.sum([(0, 1), (0, 2), (1, 2)].into_iter().map(|(i, j)| ring.mul_ref(&x[i], &x[j])));
    let e3 = ring.sub(ring.prod(x.iter().map(|xi| ring.clone_el(xi))), ring.one());

    let basis = buchberger(&ring, vec![e1, e2, e3], PairCriteria::default());
    let expected = GeneratorSet::with_elements(&ring, [
        ring.sum(x.iter().map(|xi| ring.clone_el(xi))),
        ring.sum([ring.mul_ref(&x[1], &x[1]), ring.mul_ref(&x[1], &x[2]), ring.mul_ref(&x[2], &x[2])]),
        ring.sub(ring.pow(ring.clone_el(&x[2]), 3), ring.one())
    ]);
    assert_same_set(&expected, &reduced_basis(&ring, basis));
}

#[test]
fn test_reduced_basis_idempotent() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let z = ring.indeterminate(2);
    let generators = [
        ring.sub(ring.mul_ref(&x, &y), ring.mul_ref(&z, &z)),
        ring.add(ring.mul_ref(&y, &z), ring.mul(ring.from_int(3), ring.clone_el(&x))),
        ring.sub(ring.pow(ring.clone_el(&x), 2), ring.clone_el(&y))
    ];

    let mut basis = GeneratorSet::with_elements(&ring, generators.iter().map(|f| ring.clone_el(f)));
    extend_to_groebner(&mut basis);
    make_reduced(&mut basis);
    let once = basis.clone();
    make_reduced(&mut basis);
    assert_same_set(&once, &basis);
    assert!(is_reduced_groebner_basis(&ring, &basis.iter().map(|f| ring.clone_el(f)).collect::<Vec<_>>()));
    for f in &generators {
        assert!(is_in_groebner_ideal(f, &basis));
    }
}

#[test]
fn test_uniqueness() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(F17, DEG_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let z = ring.indeterminate(2);
    let generators = vec![
        ring.sub(ring.pow(ring.clone_el(&x), 2), ring.mul_ref(&y, &z)),
        ring.sub(ring.pow(ring.clone_el(&y), 2), ring.mul_ref(&x, &z)),
        ring.sub(ring.pow(ring.clone_el(&z), 2), ring.mul_ref(&x, &y)),
        ring.add(ring.mul_ref(&x, &y), ring.clone_el(&z))
    ];

    let expected = reduced_basis(&ring, buchberger(&ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::default()));
    assert!(is_reduced_groebner_basis(&ring, &expected.iter().map(|f| ring.clone_el(f)).collect::<Vec<_>>()));

    assert_same_set(&expected, &reduced_basis(&ring, buchberger(&ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::NONE)));
    assert_same_set(&expected, &reduced_basis(&ring, buchberger(&ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria { coprime: false, chain: true })));
    assert_same_set(&expected, &reduced_basis(&ring, buchberger_fixpoint(&ring, generators.iter().map(|f| ring.clone_el(f)).collect())));
    assert_same_set(&expected, &reduced_basis(&ring, buchberger(&ring, generators.iter().rev().map(|f| ring.clone_el(f)).collect(), PairCriteria::default())));
    // scaling generators and adding redundant ones does not change the ideal
    let mut modified = generators.iter().map(|f| ring.mul_ref_snd(ring.from_int(5), f)).collect::<Vec<_>>();
    modified.push(ring.mul_ref(&generators[0], &generators[1]));
    modified.swap(0, 3);
    assert_same_set(&expected, &reduced_basis(&ring, buchberger(&ring, modified, PairCriteria::default())));
}

#[test]
fn test_ideal_equivalence_random() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    let mut rng = oorandom::Rand64::new(0);
    for _ in 0..8 {
        let generators = (0..3).map(|_| ring.from_terms((0..3).map(|_| (
            F17.get_ring().random_element(|| rng.rand_u64()),
            random_monomial(&mut rng, 3, 2)
        )).collect::<Vec<_>>())).collect::<Vec<_>>();

        let completed = buchberger(&ring, generators.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::default());
        assert!(is_groebner_basis(&ring, &completed));
        let mut basis = GeneratorSet::with_elements(&ring, completed);
        for g in &generators {
            assert!(is_in_groebner_ideal(g, &basis));
        }
        make_reduced(&mut basis);
        let original = GeneratorSet::with_elements(&ring, generators.iter().map(|f| ring.clone_el(f)));
        for g in basis.iter() {
            assert!(is_in_ideal(g, &original));
        }
        assert_same_set(&basis, &reduced_basis(&ring, buchberger(&ring, generators, PairCriteria::NONE)));
    }
}

#[test]
fn test_chain_criterion_skips_pairs() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(F17, Lex);
    // the leading monomials x^2, x y, y^2 are pairwise not coprime, and x y divides lcm(x^2, y^2)
    let basis = [
        ring.add(ring.monomial(Monomial::new([2, 0])), ring.indeterminate(2)),
        ring.add(ring.monomial(Monomial::new([1, 1])), ring.indeterminate(2)),
        ring.add(ring.monomial(Monomial::new([0, 2])), ring.indeterminate(2))
    ];
    let arena = AppendOnlyVec::new();
    for f in &basis {
        _ = arena.push(BasisElement::new(&ring, ring.clone_el(f)).unwrap());
    }
    let pairs = [(0, 1), (0, 2), (1, 2)].into_iter().collect::<BTreeSet<_>>();
    let lcm = arena[0].lm.lcm(&arena[2].lm);
    assert!(chain_criterion(&arena, &pairs, (0, 2), &lcm));
    let pairs = [(0, 2), (1, 2)].into_iter().collect::<BTreeSet<_>>();
    assert!(!chain_criterion(&arena, &pairs, (0, 2), &lcm));

    let with_criteria = reduced_basis(&ring, buchberger(&ring, basis.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::default()));
    let without_criteria = reduced_basis(&ring, buchberger(&ring, basis.iter().map(|f| ring.clone_el(f)).collect(), PairCriteria::NONE));
    assert_same_set(&without_criteria, &with_criteria);
}

#[test]
fn test_trivial_inputs() {
    LogAlgorithmSubscriber::init_test();
    let ring = MultivariatePolyRingImpl::new(F17, Lex);
    let x = ring.indeterminate(0);

    assert!(buchberger(&ring, Vec::new(), PairCriteria::default()).is_empty());
    assert!(buchberger(&ring, vec![ring.zero(), ring.zero()], PairCriteria::default()).is_empty());
    assert!(buchberger_fixpoint(&ring, vec![ring.zero()]).is_empty());

    let mut empty = GeneratorSet::new(&ring);
    extend_to_groebner(&mut empty);
    make_reduced(&mut empty);
    assert!(empty.is_empty());
    assert!(is_in_ideal(&ring.zero(), &empty));
    assert!(!is_in_ideal(&x, &empty));
    assert!(!is_in_ideal(&ring.one(), &empty));

    let mut zero_only = GeneratorSet::with_elements(&ring, [ring.zero()]);
    assert!(is_in_ideal(&ring.zero(), &zero_only));
    assert!(!is_in_ideal(&x, &zero_only));
    extend_to_groebner(&mut zero_only);
    assert_eq!(1, zero_only.len());
    make_reduced(&mut zero_only);
    assert!(zero_only.is_empty());

    let mut unit_ideal = GeneratorSet::with_elements(&ring, [ring.add_ref(&x, &ring.one()), ring.clone_el(&x), ring.zero()]);
    extend_to_groebner(&mut unit_ideal);
    make_reduced(&mut unit_ideal);
    assert_same_set(&GeneratorSet::with_elements(&ring, [ring.one()]), &unit_ideal);
    assert!(is_in_groebner_ideal(&ring.pow(ring.clone_el(&x), 5), &unit_ideal));
}

#[test]
fn test_minimalize() {
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let basis = vec![
        ring.mul(ring.from_int(2), ring.clone_el(&x)),
        ring.add(ring.mul(ring.from_int(3), ring.clone_el(&x)), ring.clone_el(&y)),
        ring.mul_ref(&x, &y),
        ring.zero(),
        ring.clone_el(&y)
    ];
    let minimal = minimalize(&ring, basis);
    assert_eq!(2, minimal.len());
    assert_el_eq!(&ring, ring.add(ring.clone_el(&x), ring.mul(ring.from_terms([(QQ.get_ring().from_fraction(1, 3), Monomial::one())]), ring.clone_el(&y))), &minimal[0]);
    assert_el_eq!(&ring, &y, &minimal[1]);

    let reduced = inter_reduce(&ring, minimal);
    assert_el_eq!(&ring, &x, &reduced[0]);
    assert_el_eq!(&ring, &y, &reduced[1]);
    assert!(is_reduced_groebner_basis(&ring, &reduced));
}

#[test]
fn test_is_groebner_basis() {
    let ring = MultivariatePolyRingImpl::new(QQ, Lex);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let f1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let f2 = ring.sub(ring.mul_ref(&y, &y), ring.one());
    assert!(!is_groebner_basis(&ring, &[ring.clone_el(&f1), ring.clone_el(&f2)]));
    assert!(is_groebner_basis(&ring, &[ring.clone_el(&f1), ring.clone_el(&f2), ring.sub_ref(&x, &y)]));
    assert!(!is_reduced_groebner_basis(&ring, &[ring.clone_el(&f1), ring.clone_el(&f2), ring.sub_ref(&x, &y)]));
    assert!(is_reduced_groebner_basis(&ring, &[ring.clone_el(&f2), ring.sub_ref(&x, &y)]));
    assert!(!is_reduced_groebner_basis(&ring, &[ring.mul(ring.from_int(2), ring.clone_el(&f2)), ring.sub_ref(&x, &y)]));
    assert!(is_groebner_basis(&ring, &[]));
}
