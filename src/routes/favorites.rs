use actix_web::{Responder, get, web};
use tera::Tera;

use crate::routes::{base_context, render_template};

/// Rendering-only placeholder; favorites are kept client-side.
#[get("/favorites")]
pub async fn favorites(tera: web::Data<Tera>) -> impl Responder {
    let context = base_context("favorites");
    render_template(&tera, "favorites/index.html", &context)
}
