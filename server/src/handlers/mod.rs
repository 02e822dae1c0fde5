use actix_web::web;

use crate::connection::ws_index;

mod login;
mod pages;

pub fn root(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws").route(web::get().to(ws_index)));

    login::configure(cfg);
    pages::configure(cfg);
}
