mod actor_framework;
mod api;
mod app_system;
mod clients;
mod domain;
mod order_actor;
mod product_actor;
mod storage;

#[cfg(test)]
mod mock_framework;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;

use crate::app_system::{setup_tracing, AppConfig, StoreSystem, SystemError};

#[actix_web::main]
async fn main() -> Result<(), SystemError> {
    let config = AppConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!(host = %config.host, port = config.port, "Starting storefront");

    let system = StoreSystem::new(config.channel_capacity())?;
    let storage = web::Data::from(system.storage());

    HttpServer::new(move || App::new().app_data(storage.clone()).configure(api::configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}
