//!
//! Computation of Gröbner bases of ideals in multivariate polynomial rings over fields,
//! and ideal membership tests based on them.
//!
//! Rings are modelled as in the rest of this crate: a [`ring::RingBase`] implements the
//! arithmetic, and a [`ring::RingStore`] owns or references it and provides the methods
//! for working with elements [`ring::El`]. Polynomial rings are constructed from a base
//! field and a monomial order, see [`rings::multivariate::ordered::MultivariatePolyRingImpl`].
//! The algorithms are in [`algorithms::buchberger`].
//!
//! # Example
//! ```
//! # use groebner::ring::*;
//! # use groebner::rings::zn_static::F17;
//! # use groebner::rings::multivariate::*;
//! # use groebner::rings::multivariate::ordered::*;
//! # use groebner::rings::multivariate::basis_order::*;
//! # use groebner::algorithms::buchberger::*;
//! let ring = MultivariatePolyRingImpl::new(F17, DEG_REV_LEX);
//! let x = ring.indeterminate(0);
//! let y = ring.indeterminate(1);
//! let generators = GeneratorSet::with_elements(&ring, [
//!     ring.sub(ring.pow(ring.clone_el(&x), 2), ring.clone_el(&y)),
//!     ring.sub(ring.pow(ring.clone_el(&y), 2), ring.one())
//! ]);
//! assert!(is_in_ideal(&ring.sub(ring.pow(ring.clone_el(&x), 4), ring.one()), &generators));
//! assert!(!is_in_ideal(&x, &generators));
//! ```
//!

#[macro_use]
pub mod ring;
pub mod error;
pub mod field;
pub mod rings;
pub mod algorithms;
pub mod tracing;
