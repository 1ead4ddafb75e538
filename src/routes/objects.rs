use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::{self, ServiceError};

#[get("/object/{slug}")]
pub async fn object_detail(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match services::objects::show_object(repo.get_ref(), &slug) {
        Ok(page) => page,
        Err(ServiceError::NotFound) => return render_not_found(&tera, "object"),
        Err(e) => {
            log::error!("Failed to build object page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context("objects");
    context.insert("object", &page.object);
    context.insert("related", &page.related);
    context.insert("discoveries", &page.discoveries);

    render_template(&tera, "objects/detail.html", &context)
}
