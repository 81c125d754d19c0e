//! Submission workflow: validate, check the cap, insert.
//!
//! The cap check and the insert are two separate calls to the gateway. Two
//! submissions racing near the cap can both see a count below it and both be
//! stored, so the cap may be overshot by the number of concurrent requests.
use super::errors::{StoreError, ValidationError};
use super::gateway::{EntryGateway, InsertOutcome};
use super::model::SubmissionForm;
use super::validation::Validator;

/// Number of entries the giveaway accepts.
pub const MAX_ENTRIES: i64 = 8000;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted,
    BadInput(ValidationError),
    OutOfStock,
    Duplicate,
    InternalError
}

#[derive(Debug, Clone)]
pub struct Submissions<G> {
    gateway: G,
    validator: Validator,
    max_entries: i64
}

impl<G: EntryGateway> Submissions<G> {
    pub fn new(gateway: G, validator: Validator, max_entries: i64) -> Submissions<G> {
        Submissions { gateway, validator, max_entries }
    }

    pub fn max_entries(&self) -> i64 {
        self.max_entries
    }

    pub fn submit(&self, form: SubmissionForm) -> SubmitOutcome {
        let entry = match self.validator.validate(form) {
            Ok(entry) => entry,
            Err(error) => return SubmitOutcome::BadInput(error)
        };

        match self.gateway.count() {
            Ok(count) if count >= self.max_entries => return SubmitOutcome::OutOfStock,
            Ok(_) => (),
            Err(e) => {
                warn!("Unable to count entries before insert : {}", e);
                return SubmitOutcome::InternalError;
            }
        }

        match self.gateway.insert(&entry) {
            InsertOutcome::Inserted => SubmitOutcome::Accepted,
            InsertOutcome::DuplicateKey => SubmitOutcome::Duplicate,
            InsertOutcome::Failed(e) => {
                warn!("Error inserting entry : {}", e);
                SubmitOutcome::InternalError
            }
        }
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        self.gateway.count()
    }
}
