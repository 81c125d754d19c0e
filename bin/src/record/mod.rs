pub mod db;
pub mod gateway;
pub mod message;
pub mod models;
pub mod schema;

#[cfg(test)]
pub mod testing {
    use giveaway::submission::model::SubmissionForm;
    use tempfile::TempDir;

    use super::gateway::{connect, DieselGateway};

    /// Bootstrapped gateway over a fresh database file inside `dir`.
    pub fn temp_gateway(dir: &TempDir) -> DieselGateway {
        let datasource = dir.path().join("giveaway.db");
        let pool = connect(datasource.to_str().unwrap(), 4).unwrap();
        let gateway = DieselGateway::new(pool);
        gateway.bootstrap().unwrap();
        gateway
    }

    pub fn jane() -> SubmissionForm {
        SubmissionForm {
            name: "Jane Doe".to_owned(),
            address1: "221B Baker Street".to_owned(),
            address2: "".to_owned(),
            postal_code: "50450".to_owned(),
            city: "Kuala Lumpur".to_owned(),
            state: "Selangor".to_owned(),
            country: "Malaysia".to_owned(),
            email: "jane@example.com".to_owned(),
        }
    }

    pub fn with_email(email: &str) -> SubmissionForm {
        SubmissionForm { email: email.to_owned(), ..jane() }
    }
}
