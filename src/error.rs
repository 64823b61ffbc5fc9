use thiserror::Error;

///
/// Errors that can occur during polynomial arithmetic.
///
/// All of them indicate a violated precondition. The algorithms in
/// [`crate::algorithms`] check divisibility and nonzeroness before every
/// division, hence they never produce one of these errors; the fallible
/// functions returning them are meant for callers that cannot guarantee
/// the preconditions themselves.
///
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgebraError {
    /// a monomial was divided by a monomial that does not divide it
    #[error("monomial is not divisible by the given divisor")]
    InvalidDivision,
    /// the leading term of the zero polynomial was requested
    #[error("the zero polynomial has no leading term")]
    EmptyPolynomial,
    /// a field element without inverse, i.e. zero, was inverted
    #[error("coefficient is not invertible")]
    NonInvertibleCoefficient
}

#[test]
fn test_error_messages() {
    assert_eq!("the zero polynomial has no leading term", format!("{}", AlgebraError::EmptyPolynomial));
    let err: Box<dyn std::error::Error> = Box::new(AlgebraError::InvalidDivision);
    assert_eq!("monomial is not divisible by the given divisor", err.to_string());
}
