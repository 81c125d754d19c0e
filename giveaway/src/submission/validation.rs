//! Ordered field checks turning a raw [`SubmissionForm`] into an [`Entry`].
//!
//! Fields are checked in the order they appear on the form and the first
//! failure is returned, so the same bad payload always yields the same message.
//! Postal codes are only checked for length and emails only for length: any
//! five characters make a postal code.
use std::str::FromStr;
use super::errors::{Field, ParseStrictnessError, ValidationError};
use super::model::{Entry, SubmissionForm};

pub const ACCEPTED_COUNTRY: &str = "Malaysia";
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Region names accepted by the strict rule set, matched case-sensitively.
pub const STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Perak",
    "Perlis",
    "Pulau Pinang",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: usize,
    max: usize
}

const NAME_BOUNDS: Bounds = Bounds { min: 6, max: 32 };
const ADDRESS1_BOUNDS: Bounds = Bounds { min: 6, max: 64 };
const CITY_BOUNDS: Bounds = Bounds { min: 3, max: 32 };
const STATE_BOUNDS: Bounds = Bounds { min: 5, max: 15 };
const EMAIL_BOUNDS: Bounds = Bounds { min: 3, max: 254 };

/// Lenient only requires fields to be present, strict adds length bounds and
/// the state whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    Lenient,
    #[default]
    Strict
}

impl FromStr for Strictness {
    type Err = ParseStrictnessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "lenient" => Ok(Strictness::Lenient),
            _ => Err(ParseStrictnessError(value.to_owned()))
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    strictness: Strictness
}

impl Validator {
    pub fn new(strictness: Strictness) -> Validator {
        Validator { strictness }
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn validate(&self, form: SubmissionForm) -> Result<Entry, ValidationError> {
        self.required(Field::Name, &form.name, NAME_BOUNDS)?;
        self.required(Field::Address1, &form.address1, ADDRESS1_BOUNDS)?;
        check_postal_code(&form.postal_code)?;
        self.required(Field::City, &form.city, CITY_BOUNDS)?;
        self.required(Field::State, &form.state, STATE_BOUNDS)?;
        if self.strictness == Strictness::Strict && !STATES.contains(&form.state.as_str()) {
            return Err(ValidationError::UnknownState);
        }
        if form.country != ACCEPTED_COUNTRY {
            return Err(ValidationError::InvalidCountry);
        }
        self.required(Field::Email, &form.email, EMAIL_BOUNDS)?;

        Ok(Entry {
            name: form.name,
            address1: form.address1,
            address2: form.address2,
            postal_code: form.postal_code,
            city: form.city,
            state: form.state,
            country: form.country,
            email: form.email
        })
    }

    fn required(&self, field: Field, value: &str, bounds: Bounds) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty(field));
        }
        match self.strictness {
            Strictness::Lenient => Ok(()),
            Strictness::Strict => {
                let length = value.chars().count();
                if length < bounds.min || length > bounds.max {
                    Err(ValidationError::Length { field, min: bounds.min, max: bounds.max })
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn check_postal_code(postal_code: &str) -> Result<(), ValidationError> {
    if postal_code.chars().count() == POSTAL_CODE_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::PostalCodeLength { expected: POSTAL_CODE_LENGTH })
    }
}
