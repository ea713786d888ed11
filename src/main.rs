use crate::catalog::Catalog;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use log::{error, info};
use std::net::SocketAddr;

mod analytics;
mod catalog;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Catalog failed to load: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Catalog loaded: {} properties, {} cities, {} trend points",
        catalog.properties.len(),
        catalog.city_stats.len(),
        catalog.market_trends.len()
    );

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => {
            if !matches!(err, crate::errors::ServerError::NotFound) {
                error!("Request failed: {err}");
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
