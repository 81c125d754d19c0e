use std::io;
use std::path::PathBuf;

use actix::MailboxError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use giveaway::submission::errors::StoreError;
use thiserror::Error;

/// Failures at the http edge. Callers only ever see the status code.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database executor unavailable : {0}")]
    Mailbox(#[from] MailboxError),
    #[error("Storage error : {0}")]
    Storage(#[from] StoreError),
    #[error("Static page unavailable : {0}")]
    Page(#[from] io::Error),
    #[error("Blocking task canceled")]
    Canceled
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ServerError::Page(ref e) if e.kind() == io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}

/// Anything that prevents the server from starting. The process exits on it.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Unable to prepare storage : {0}")]
    Storage(#[from] StoreError),
    #[error("Unable to read TLS material from {} : {}", .path.display(), .cause)]
    TlsMaterial {
        path: PathBuf,
        #[source] cause: rustls_pki_types::pem::Error
    },
    #[error("Invalid TLS configuration : {0}")]
    Tls(#[from] rustls::Error),
    #[error("Unable to start server : {0}")]
    Io(#[from] io::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_status() {
        let missing = ServerError::Page(io::Error::new(io::ErrorKind::NotFound, "main.html"));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let storage = ServerError::Storage(StoreError::unavailable("database is locked"));
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ServerError::Mailbox(MailboxError::Closed).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_hides_details() {
        let response = ServerError::Storage(StoreError::query("no such table: entry")).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(actix_web::body::MessageBody::size(response.body()), actix_web::body::BodySize::Sized(0));
    }
}
