///
/// This module contains [`zn_static::Fp`], the prime field `Z/pZ` for a prime `p`
/// that is known at compile time.
///
pub mod zn_static;

///
/// This module contains [`rational::QQ`], the field of rational numbers with
/// numerator and denominator of arbitrary size.
///
pub mod rational;

///
/// This module contains the trait [`multivariate::MultivariatePolyRing`] for all rings
/// that represent a multivariate polynomial ring `k[X0, ..., Xn]` with a fixed monomial
/// order, and its implementation [`multivariate::ordered::MultivariatePolyRingImpl`].
///
pub mod multivariate;
