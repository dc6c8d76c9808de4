mod handlers;
mod models;
mod routes;
mod store;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use crate::store::AppointmentStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse()
        .context("PORT must be a valid port number")?;

    let store = web::Data::new(AppointmentStore::with_sample_data());

    info!("serving appointment API on {}:{}", host, port);

    HttpServer::new(move || App::new().app_data(store.clone()).configure(routes::init))
        .bind((host.as_str(), port))?
        .run()
        .await?;

    Ok(())
}
