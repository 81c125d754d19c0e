use actix::Message;
use giveaway::submission::errors::StoreError;
use giveaway::submission::model::SubmissionForm;
use giveaway::submission::workflow::SubmitOutcome;

pub struct SubmitEntry {
    pub form: SubmissionForm
}

impl Message for SubmitEntry {
    type Result = SubmitOutcome;
}

pub struct CountEntries;

impl Message for CountEntries {
    type Result = Result<i64, StoreError>;
}
