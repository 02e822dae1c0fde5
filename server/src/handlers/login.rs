use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use askama_actix::Template;
use board::serde::Deserialize;
use board::serde_json::json;

use crate::credential::Credentials;
use crate::session::SessionRegistry;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate;

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(login_page))
            .route(web::post().to(login)),
    );
}

async fn login_page() -> impl Responder {
    LoginTemplate
}

/// Issues the session cookie on a valid secret. The cookie is the only
/// thing a later websocket handshake needs; its Max-Age is the sole
/// client-side bound on the session.
async fn login(
    req: HttpRequest,
    body: web::Json<LoginRequest>,
    credentials: web::Data<Credentials>,
    sessions: web::Data<SessionRegistry>,
) -> impl Responder {
    match credentials.resolve_role(&body.password) {
        Some(role) => {
            let token = sessions.create_session(role);
            log::info!("Login accepted, role {}", role);
            let cookie = Cookie::build("session", token)
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(time::Duration::days(1))
                .secure(req.connection_info().scheme() == "https")
                .finish();
            HttpResponse::Ok()
                .cookie(cookie)
                .json(json!({ "success": true, "role": role }))
        }
        None => {
            log::info!("Login rejected");
            HttpResponse::Unauthorized().json(json!({ "success": false, "error": "Invalid password" }))
        }
    }
}
