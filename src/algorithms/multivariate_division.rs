use tracing::instrument;

use crate::field::*;
use crate::ring::*;
use crate::rings::multivariate::*;

///
/// A nonzero polynomial together with its leading term.
///
/// Every reducer and every generator of a completion run is stored in this form,
/// so that looking up leading terms never fails and never requires a search.
///
pub(crate) struct BasisElement<P>
    where P: RingStore, P::Type: MultivariatePolyRing
{
    pub(crate) poly: El<P>,
    pub(crate) lc: PolyCoeff<P>,
    pub(crate) lm: Monomial
}

impl<P> BasisElement<P>
    where P: RingStore, P::Type: MultivariatePolyRing
{
    ///
    /// Returns `None` if `poly` is zero.
    ///
    pub(crate) fn new(ring: P, poly: El<P>) -> Option<Self> {
        let (lc, lm) = ring.lt(&poly).map(|(c, m)| (ring.base_ring().clone_el(c), m.clone()))?;
        return Some(BasisElement { poly: poly, lc: lc, lm: lm });
    }
}

///
/// Reduces `f` w.r.t. the polynomials yielded by `reducers()`, and returns the remainder.
///
/// In each step, the first reducer whose leading monomial divides the current leading
/// monomial of `f` is used to cancel it; if there is none, the leading term is moved to the
/// remainder. For every cancellation, `record(k, c, m)` is called, where `k` is the index
/// given by `reducers()` and `c * m` is the subtracted multiple of the reducer.
///
pub(crate) fn reduce_with<'a, P, F, I, G>(ring: P, mut f: El<P>, mut reducers: F, mut record: G) -> El<P>
    where P: 'a + RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field,
        F: FnMut() -> I,
        I: Iterator<Item = (usize, &'a BasisElement<P>)>,
        G: FnMut(usize, PolyCoeff<P>, Monomial)
{
    let base_ring = ring.base_ring();
    let mut remainder = Vec::new();
    while let Some((lc, lm)) = ring.lt(&f).map(|(c, m)| (base_ring.clone_el(c), m.clone())) {
        if let Some((k, reducer)) = reducers().find(|(_, r)| lm.is_divisible_by(&r.lm)) {
            let quo_c = base_ring.div(&lc, &reducer.lc);
            let quo_m = lm.div(&reducer.lm);
            ring.add_assign_scaled(&mut f, &reducer.poly, &base_ring.negate(base_ring.clone_el(&quo_c)), &quo_m);
            debug_assert!(ring.lm(&f).map(|new_lm| ring.order().is_less(new_lm, &lm)).unwrap_or(true));
            record(k, quo_c, quo_m);
        } else {
            _ = ring.remove_lt(&mut f);
            remainder.push((lc, lm));
        }
    }
    return ring.from_terms(remainder);
}

pub(crate) fn normal_form<'a, P>(ring: P, f: El<P>, reducers: &'a [BasisElement<P>]) -> El<P>
    where P: 'a + RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    reduce_with(ring, f, || reducers.iter().enumerate(), |_, _, _| {})
}

///
/// Computes the normal form of `f` w.r.t. the given reducers, i.e. the remainder of
/// the multivariate division. No term of the result is divisible by the leading monomial
/// of any reducer. Zero reducers are ignored.
///
/// If the reducers form a Gröbner basis, the result only depends on the ideal they generate,
/// and is zero if and only if `f` belongs to this ideal.
///
/// # Example
/// ```
/// # use groebner::ring::*;
/// # use groebner::rings::zn_static::F17;
/// # use groebner::rings::multivariate::*;
/// # use groebner::rings::multivariate::ordered::*;
/// # use groebner::algorithms::multivariate_division::*;
/// let ring = MultivariatePolyRingImpl::new(F17, Lex);
/// let x = ring.indeterminate(0);
/// let y = ring.indeterminate(1);
/// // x^2 + y = x * (x - y) + (x * y + y), and x * y + y = y * (x - y) + (y^2 + y)
/// let f = ring.add(ring.pow(ring.clone_el(&x), 2), ring.clone_el(&y));
/// let g = ring.sub_ref(&x, &y);
/// let remainder = multivariate_division(&ring, f, [&g]);
/// assert_eq!("X1^2 + X1", format!("{}", ring.format(&remainder)));
/// ```
///
#[instrument(skip_all, level = "trace")]
pub fn multivariate_division<'a, P, I>(ring: P, f: El<P>, reducers: I) -> El<P>
    where P: 'a + RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field,
        I: IntoIterator<Item = &'a El<P>>
{
    let reducers = reducers.into_iter().filter_map(|g| BasisElement::new(ring, ring.clone_el(g))).collect::<Vec<_>>();
    return normal_form(ring, f, &reducers);
}

///
/// Performs multivariate division of `f` by the polynomials in `basis`, and returns the
/// quotients `q` and the remainder `r`, such that `f = sum_i q[i] * basis[i] + r`.
///
/// The remainder is the same as the one returned by [`multivariate_division()`].
///
#[instrument(skip_all, level = "trace")]
pub fn multivariate_division_with_quotients<P>(ring: P, f: El<P>, basis: &[El<P>]) -> (Vec<El<P>>, El<P>)
    where P: RingStore + Copy,
        P::Type: MultivariatePolyRing,
        <<P::Type as RingExtension>::BaseRing as RingStore>::Type: Field
{
    let reducers = basis.iter().map(|g| BasisElement::new(ring, ring.clone_el(g))).collect::<Vec<_>>();
    let mut quotients = basis.iter().map(|_| Vec::new()).collect::<Vec<_>>();
    let remainder = reduce_with(
        ring,
        f,
        || reducers.iter().enumerate().filter_map(|(k, r)| r.as_ref().map(|r| (k, r))),
        |k, c, m| quotients[k].push((c, m))
    );
    return (quotients.into_iter().map(|q| ring.from_terms(q)).collect(), remainder);
}

#[cfg(test)]
use crate::rings::zn_static::F17;
#[cfg(test)]
use crate::rings::rational::QQ;
#[cfg(test)]
use crate::rings::multivariate::ordered::MultivariatePolyRingImpl;
#[cfg(test)]
use crate::rings::multivariate::generic_tests::random_monomial;

#[test]
fn test_multivariate_division() {
    let ring = MultivariatePolyRingImpl::new(QQ, DEG_LEX);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);

    // x^2 y + x y^2 + y^2 divided by x y - 1 and y^2 - 1
    let f = ring.from_terms([
        (QQ.one(), Monomial::new([2, 1])),
        (QQ.one(), Monomial::new([1, 2])),
        (QQ.one(), Monomial::new([0, 2]))
    ]);
    let g1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let g2 = ring.sub(ring.mul_ref(&y, &y), ring.one());

    let remainder = multivariate_division(&ring, ring.clone_el(&f), [&g1, &g2]);
    let expected = ring.add(ring.add_ref(&x, &y), ring.one());
    assert_el_eq!(&ring, &expected, &remainder);

    let (quotients, remainder) = multivariate_division_with_quotients(&ring, ring.clone_el(&f), &[ring.clone_el(&g1), ring.clone_el(&g2)]);
    assert_el_eq!(&ring, &expected, &remainder);
    assert_el_eq!(&ring, &ring.add_ref(&x, &y), &quotients[0]);
    assert_el_eq!(&ring, &ring.one(), &quotients[1]);
}

#[test]
fn test_multivariate_division_no_reducers() {
    let ring = MultivariatePolyRingImpl::new(F17, Lex);
    let f = ring.add(ring.indeterminate(0), ring.from_int(3));
    assert_el_eq!(&ring, &f, &multivariate_division(&ring, ring.clone_el(&f), []));
    assert_el_eq!(&ring, &f, &multivariate_division(&ring, ring.clone_el(&f), [&ring.zero()]));
    assert!(ring.is_zero(&multivariate_division(&ring, ring.zero(), [&f])));
    // a nonzero constant divides everything
    assert!(ring.is_zero(&multivariate_division(&ring, ring.clone_el(&f), [&ring.from_int(5)])));
}

#[test]
fn test_remainder_is_reduced() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
    let basis = [
        ring.from_terms([(1, Monomial::new([1, 1, 0])), (3, Monomial::new([0, 0, 1]))]),
        ring.from_terms([(2, Monomial::new([0, 2, 0])), (1, Monomial::new([1, 0, 0])), (16, Monomial::one())])
    ];
    let f = ring.from_terms([
        (1, Monomial::new([2, 3, 1])),
        (5, Monomial::new([1, 2, 0])),
        (7, Monomial::new([0, 3, 2])),
        (1, Monomial::new([0, 0, 1]))
    ]);
    let remainder = multivariate_division(&ring, f, basis.iter());
    for (_, m) in ring.terms(&remainder) {
        for b in &basis {
            assert!(!m.is_divisible_by(ring.lm(b).unwrap()), "term {} of the remainder is divisible by {}", m, ring.lm(b).unwrap());
        }
    }
}

#[test]
fn test_normal_form_soundness() {
    let ring = MultivariatePolyRingImpl::new(F17, DEG_LEX);
    let mut rng = oorandom::Rand64::new(1);
    let mut random_poly = |terms: usize| ring.from_terms((0..terms).map(|_| (
        F17.get_ring().random_element(|| rng.rand_u64()),
        random_monomial(&mut rng, 3, 3)
    )).collect::<Vec<_>>());

    for _ in 0..20 {
        let basis = [random_poly(3), random_poly(2), random_poly(4)];
        let f = random_poly(6);
        let (quotients, remainder) = multivariate_division_with_quotients(&ring, ring.clone_el(&f), &basis);
        let combination = ring.sum(quotients.iter().zip(basis.iter()).map(|(q, b)| ring.mul_ref(q, b)));
        assert_el_eq!(&ring, &f, &ring.add(combination, ring.clone_el(&remainder)));
        assert_el_eq!(&ring, &remainder, &multivariate_division(&ring, f, basis.iter()));
    }
}
