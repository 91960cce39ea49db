use crate::config::{AppContext, Config};
use crate::db::connection::{init_db, Database};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod assets;
mod auth;
mod config;
mod db;
mod directory;
mod domain;
mod errors;
mod mailer;
mod prompts;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = Config::from_env();
    let db = Database::new(cfg.db_path.clone());

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    if cfg.directory_api_key.is_none() {
        eprintln!("⚠️ FARMSTAND_DIRECTORY_API_KEY is not set; explore will serve seed data");
    }

    let ctx = AppContext { db, cfg };

    let addr: SocketAddr = "127.0.0.1:3000".parse().expect("valid listen address");
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
