use actix_web::{web, Either, HttpMessage, HttpRequest, HttpResponse};
use askama_actix::Template;
use board::Role;

use crate::session::SessionRegistry;

#[derive(Template)]
#[template(path = "board.html")]
struct BoardTemplate {
    role: Role,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)));
}

/// The board page. A viewer without a resolvable session is bounced to
/// the login form.
async fn index(
    req: HttpRequest,
    sessions: web::Data<SessionRegistry>,
) -> Either<BoardTemplate, HttpResponse> {
    let role = req
        .cookie("session")
        .and_then(|cookie| sessions.resolve(cookie.value()));

    match role {
        Some(role) => Either::A(BoardTemplate { role }),
        None => Either::B(
            HttpResponse::Found()
                .header("Location", "/login")
                .finish(),
        ),
    }
}
