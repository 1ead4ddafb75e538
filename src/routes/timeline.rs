use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services;

#[get("/timeline")]
pub async fn timeline(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match services::timeline::show_timeline(repo.get_ref()) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to build timeline page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context("timeline");
    context.insert("discoveries", &page.discoveries);
    context.insert("events", &page.events);

    render_template(&tera, "timeline/index.html", &context)
}
