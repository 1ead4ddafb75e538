use actix_web::{Responder, get, web};
use tera::Tera;

use crate::nasa::client::NasaSearchClient;
use crate::routes::{base_context, render_template};
use crate::services;

#[get("/articles")]
pub async fn articles(
    client: web::Data<NasaSearchClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Upstream failures render the page with an empty list and an error
    // flag rather than a 500.
    let (articles, articles_error) = match services::articles::show_articles(&client).await {
        Ok(articles) => (articles, false),
        Err(_) => (Vec::new(), true),
    };

    let mut context = base_context("articles");
    context.insert("articles", &articles);
    context.insert("articles_error", &articles_error);

    render_template(&tera, "articles/index.html", &context)
}
