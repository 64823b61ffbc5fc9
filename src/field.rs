use crate::error::AlgebraError;
use crate::ring::*;

///
/// Trait for rings that are fields, i.e. every nonzero element has a
/// multiplicative inverse.
///
/// This is the only capability the Groebner basis algorithms require from
/// the coefficient ring, apart from the basic ring operations.
///
pub trait Field: RingBase {

    ///
    /// Returns `lhs / rhs`, or `None` if `rhs` is zero.
    ///
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element>;
}

pub trait FieldStore: RingStore
    where Self::Type: Field
{
    delegate!{ fn checked_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> }

    fn try_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Result<El<Self>, AlgebraError> {
        self.checked_div(lhs, rhs).ok_or(AlgebraError::NonInvertibleCoefficient)
    }

    fn try_invert(&self, value: &El<Self>) -> Result<El<Self>, AlgebraError> {
        self.try_div(&self.one(), value)
    }

    ///
    /// Divides `lhs` by `rhs`. Panics if `rhs` is zero.
    ///
    fn div(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> {
        match self.try_div(lhs, rhs) {
            Ok(result) => result,
            Err(err) => panic!("{}: division by {}", err, self.format(rhs))
        }
    }

    fn invert(&self, value: &El<Self>) -> El<Self> {
        self.div(&self.one(), value)
    }
}

impl<R> FieldStore for R
    where R: RingStore, R::Type: Field
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks that division is the inverse of multiplication on the given elements,
    /// and that exactly the zero element is not invertible.
    ///
    pub fn test_field_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: Field
    {
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            if ring.is_zero(a) {
                assert_eq!(Err(AlgebraError::NonInvertibleCoefficient), ring.try_invert(a).map(|_| ()));
                continue;
            }
            let a_inv = ring.invert(a);
            assert!(ring.is_one(&ring.mul_ref(a, &a_inv)), "Inverse failed for {}", ring.format(a));
            for b in &elements {
                let quo = ring.div(b, a);
                assert!(ring.eq_el(b, &ring.mul_ref(&quo, a)), "Division failed for {} / {}", ring.format(b), ring.format(a));
            }
        }
    }
}

#[cfg(test)]
use crate::rings::zn_static::F17;

#[test]
fn test_try_div() {
    assert_eq!(Ok(2), F17.try_div(&F17.from_int(6), &F17.from_int(3)));
    assert_eq!(Err(AlgebraError::NonInvertibleCoefficient), F17.try_div(&F17.one(), &F17.zero()));
    assert_eq!(Err(AlgebraError::NonInvertibleCoefficient), F17.try_invert(&F17.zero()));
}

#[test]
#[should_panic]
fn test_div_by_zero() {
    F17.div(&F17.one(), &F17.zero());
}
