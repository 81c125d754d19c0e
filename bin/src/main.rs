extern crate actix;
extern crate actix_web;
extern crate giveaway;
extern crate clap;
extern crate diesel;
extern crate diesel_migrations;
extern crate r2d2;
extern crate rustls;
extern crate rustls_pki_types;
extern crate thiserror;
#[macro_use]
extern crate log;
extern crate env_logger;

mod config;
mod errors;
mod record;
mod routes;
mod tls;

use std::process;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use config::Config;
use errors::StartupError;
use giveaway::submission::validation::Validator;
use giveaway::submission::workflow::Submissions;
use record::gateway::{self, DieselGateway};
use routes::WebState;

async fn run(config: Config) -> Result<(), StartupError> {
    info!("Starting giveaway signup ! ");

    let pool = gateway::connect(&config.datasource, config.db_workers)?;
    let entries = DieselGateway::new(pool);
    entries.bootstrap()?;

    let submissions = Submissions::new(entries, Validator::new(config.strictness), config.max_entries);
    let db = record::db::start(submissions, config.db_workers as usize);

    let state = web::Data::new(WebState {
        db,
        response_style: config.response_style,
        allowed_origin: config.allowed_origin.clone(),
        public_dir: config.public_dir.clone()
    });

    let server = HttpServer::new(move ||
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::configure))
        .bind(config.listen_address())?;
    info!("Listening on {}", config.listen_address());

    let server = if config.tls {
        let tls = tls::load_server_config(&config.tls_cert, &config.tls_key)?;
        info!("Listening on {} with TLS", config.tls_address());
        server.bind_rustls_0_23(config.tls_address(), tls)?
    } else {
        server
    };

    server.run().await?;
    Ok(())
}

#[actix_web::main]
async fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(config).await {
        error!("{}", e);
        process::exit(1);
    }
}
