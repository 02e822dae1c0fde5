use actix_web::{web, App, HttpServer};
use clap::Parser;

use board::BoardDocument;
use server::config::ServerArgs;
use server::credential::{Credentials, DEFAULT_ADMIN_PASSWORD, DEFAULT_GENERAL_PASSWORD};
use server::handlers;
use server::server::spawn_server;
use server::session::SessionRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = ServerArgs::parse();
    let credentials = web::Data::new(Credentials::from_env());
    let sessions = web::Data::new(SessionRegistry::new());

    // The one board document for this process, constructed here and
    // owned by the synchronization loop from now on.
    let srv_tx = spawn_server(BoardDocument::new());

    log::info!("Tabletop server listening on {}:{}", args.host, args.port);
    if !credentials.admin_hash_configured() {
        log::warn!(
            "ADMIN_PASSWORD_HASH not set, using development default password \"{}\"",
            DEFAULT_ADMIN_PASSWORD
        );
    }
    if !credentials.general_hash_configured() {
        log::warn!(
            "GENERAL_PASSWORD_HASH not set, using development default password \"{}\"",
            DEFAULT_GENERAL_PASSWORD
        );
    }

    HttpServer::new(move || {
        App::new()
            .app_data(credentials.clone())
            .app_data(sessions.clone())
            .data(srv_tx.clone())
            .configure(handlers::root)
    })
    .bind(format!("{}:{}", args.host, args.port))?
    .run()
    .await
}
