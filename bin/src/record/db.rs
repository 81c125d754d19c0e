//! Db executor actor
use actix::prelude::*;
use giveaway::submission::errors::StoreError;
use giveaway::submission::workflow::Submissions;

use super::gateway::DieselGateway;
use super::message::{CountEntries, SubmitEntry};

/// Runs the submission workflow against SQLite. Several of them are started on
/// a `SyncArbiter` so that blocking queries stay off the http workers.
pub struct DbExecutor(pub Submissions<DieselGateway>);

impl Actor for DbExecutor {
    type Context = SyncContext<Self>;
}

impl Handler<SubmitEntry> for DbExecutor {
    type Result = MessageResult<SubmitEntry>;

    fn handle(&mut self, msg: SubmitEntry, _: &mut Self::Context) -> Self::Result {
        MessageResult(self.0.submit(msg.form))
    }
}

impl Handler<CountEntries> for DbExecutor {
    type Result = Result<i64, StoreError>;

    fn handle(&mut self, _msg: CountEntries, _: &mut Self::Context) -> Self::Result {
        self.0.count()
    }
}

pub fn start(submissions: Submissions<DieselGateway>, threads: usize) -> Addr<DbExecutor> {
    SyncArbiter::start(threads, move || DbExecutor(submissions.clone()))
}
