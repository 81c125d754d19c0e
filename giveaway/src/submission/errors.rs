use std::error::Error;
use std::fmt;
use thiserror::Error;

type Cause = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Address1,
    City,
    State,
    Email
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match *self {
            Field::Name => "Name",
            Field::Address1 => "Address 1",
            Field::City => "City",
            Field::State => "State",
            Field::Email => "Email"
        };
        f.write_str(label)
    }
}

/// First failing check of a submission. The display text is sent back as is
/// to API clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is empty")]
    Empty(Field),
    #[error("{field} length must be between {min} and {max} characters")]
    Length { field: Field, min: usize, max: usize },
    #[error("Postal code length must be {expected} digits long")]
    PostalCodeLength { expected: usize },
    #[error("State is invalid")]
    UnknownState,
    #[error("Country name is invalid")]
    InvalidCountry
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable : {cause}")]
    Unavailable {
        #[source] cause: Cause
    },
    #[error("storage query failed : {cause}")]
    Query {
        #[source] cause: Cause
    }
}

impl StoreError {
    pub fn unavailable<E: Into<Cause>>(cause: E) -> StoreError {
        StoreError::Unavailable { cause: cause.into() }
    }

    pub fn query<E: Into<Cause>>(cause: E) -> StoreError {
        StoreError::Query { cause: cause.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strictness level {0}, expected strict or lenient")]
pub struct ParseStrictnessError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::Empty(Field::Name).to_string(), "Name is empty");
        assert_eq!(ValidationError::Empty(Field::Address1).to_string(), "Address 1 is empty");
        assert_eq!(ValidationError::PostalCodeLength { expected: 5 }.to_string(), "Postal code length must be 5 digits long");
        assert_eq!(ValidationError::InvalidCountry.to_string(), "Country name is invalid");
        assert_eq!(ValidationError::Length { field: Field::City, min: 3, max: 32 }.to_string(), "City length must be between 3 and 32 characters");
    }

    #[test]
    fn test_store_error_keeps_cause() {
        let error = StoreError::unavailable("connection refused");
        assert_eq!(error.to_string(), "storage unavailable : connection refused");
        assert!(error.source().is_some());
    }
}
