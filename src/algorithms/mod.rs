///
/// Contains [`multivariate_division::multivariate_division()`], which computes
/// the normal form of a polynomial w.r.t. a list of other polynomials.
///
pub mod multivariate_division;
///
/// Contains [`buchberger::buchberger()`] for computing Gröbner bases, together with
/// functions to make them reduced and to test ideal membership.
///
pub mod buchberger;
