use std::fs;
use std::path::PathBuf;

use actix::Addr;
use actix_web::http::header::{ContentType, ACCESS_CONTROL_ALLOW_ORIGIN, LOCATION};
use actix_web::error::{InternalError, UrlencodedError};
use actix_web::{web, HttpRequest, HttpResponse};
use giveaway::submission::errors::{Field, ValidationError};
use giveaway::submission::model::SubmissionForm;
use giveaway::submission::workflow::SubmitOutcome;

use crate::config::ResponseStyle;
use crate::errors::ServerError;
use crate::record::db::DbExecutor;
use crate::record::message::{CountEntries, SubmitEntry};

pub struct WebState {
    pub db: Addr<DbExecutor>,
    pub response_style: ResponseStyle,
    pub allowed_origin: String,
    pub public_dir: PathBuf
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/submit")
            .app_data(web::FormConfig::default().error_handler(undecodable_form))
            .route(web::post().to(submit))
            .default_service(web::to(method_not_allowed)))
        .service(web::resource("/count")
            .route(web::get().to(count))
            .default_service(web::to(method_not_allowed)))
        .service(web::resource("/{page:success|duplicate|failed|outofstock}").route(web::get().to(result_page)));
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}

async fn home(state: web::Data<WebState>) -> Result<HttpResponse, ServerError> {
    static_page(&state, "main").await
}

async fn result_page(state: web::Data<WebState>, page: web::Path<String>) -> Result<HttpResponse, ServerError> {
    static_page(&state, &page).await
}

async fn static_page(state: &WebState, page: &str) -> Result<HttpResponse, ServerError> {
    let path = state.public_dir.join(format!("{}.html", page));
    let body = web::block(move || fs::read(path))
        .await
        .map_err(|_| ServerError::Canceled)??;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

async fn submit(state: web::Data<WebState>, form: web::Form<SubmissionForm>) -> HttpResponse {
    let outcome = state.db.send(SubmitEntry { form: form.into_inner() })
        .await
        .unwrap_or_else(|e| {
            warn!("Error on sending submit message : {}", e);
            SubmitOutcome::InternalError
        });

    respond(&state, outcome)
}

/// A body that cannot be decoded as a form is answered like a form with every
/// field left blank.
fn undecodable_form(error: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    debug!("Unable to decode submission : {}", error);
    let response = match req.app_data::<web::Data<WebState>>() {
        Some(state) => respond(state, SubmitOutcome::BadInput(ValidationError::Empty(Field::Name))),
        None => HttpResponse::BadRequest().finish()
    };
    InternalError::from_response(error, response).into()
}

fn respond(state: &WebState, outcome: SubmitOutcome) -> HttpResponse {
    match state.response_style {
        ResponseStyle::Api => api_response(&state.allowed_origin, outcome),
        ResponseStyle::Redirect => HttpResponse::SeeOther()
            .insert_header((LOCATION, redirect_target(&outcome)))
            .finish()
    }
}

fn api_response(allowed_origin: &str, outcome: SubmitOutcome) -> HttpResponse {
    let mut response = match outcome {
        SubmitOutcome::Accepted => HttpResponse::Ok(),
        SubmitOutcome::InternalError => HttpResponse::InternalServerError(),
        _ => HttpResponse::BadRequest()
    };
    response.insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin));

    match outcome {
        SubmitOutcome::BadInput(reason) => response.content_type(ContentType::plaintext()).body(reason.to_string()),
        SubmitOutcome::OutOfStock => response.content_type(ContentType::plaintext()).body("out of stock"),
        SubmitOutcome::Duplicate => response.content_type(ContentType::plaintext()).body("duplicate"),
        SubmitOutcome::Accepted | SubmitOutcome::InternalError => response.finish()
    }
}

fn redirect_target(outcome: &SubmitOutcome) -> &'static str {
    match *outcome {
        SubmitOutcome::Accepted => "/success",
        SubmitOutcome::Duplicate => "/duplicate",
        SubmitOutcome::OutOfStock => "/outofstock",
        SubmitOutcome::BadInput(_) | SubmitOutcome::InternalError => "/failed"
    }
}

async fn count(state: web::Data<WebState>) -> Result<HttpResponse, ServerError> {
    let count = state.db.send(CountEntries)
        .await?
        .map_err(|e| {
            warn!("Unable to count entries : {}", e);
            ServerError::from(e)
        })?;

    Ok(HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, state.allowed_origin.as_str()))
        .content_type(ContentType::plaintext())
        .body(count.to_string()))
}
