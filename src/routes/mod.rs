use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod api;
pub mod articles;
pub mod categories;
pub mod chat;
pub mod favorites;
pub mod main;
pub mod objects;
pub mod timeline;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

/// Explicit not-found view with a navigation escape hatch, never a silent
/// blank page.
pub fn render_not_found(tera: &Tera, what: &str) -> HttpResponse {
    let mut context = base_context("not_found");
    context.insert("what", what);
    HttpResponse::NotFound().body(tera.render("not_found.html", &context).unwrap_or_else(|e| {
        log::error!("Failed to render template 'not_found.html': {e}");
        String::new()
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn render_failure_is_a_server_error_not_a_blank_page() {
        let tera = Tera::default();
        let response = render_template(&tera, "missing.html", &base_context("index"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
