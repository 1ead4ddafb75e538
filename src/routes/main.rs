use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use serde::Deserialize;
use tera::Tera;

use crate::datasource::ObjectSource;
use crate::fetch_guard::FetchGuard;
use crate::nasa::client::NasaSearchClient;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::explorer::{EXPLORER_TABS, ExplorerGrid};
use crate::services;

#[derive(Debug, Deserialize)]
struct IndexQueryParams {
    tab: Option<String>,
}

#[get("/")]
pub async fn index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    source: web::Data<ObjectSource>,
    client: web::Data<NasaSearchClient>,
    grid: web::Data<FetchGuard<ExplorerGrid>>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = match services::main::show_index(repo.get_ref(), Utc::now().date_naive()) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Failed to build index page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let tab = params.tab.as_deref().unwrap_or("All").to_string();
    let token = grid.begin();
    let (explorer_view, explorer_error) = match services::explorer::show_explorer(&client, &tab).await
    {
        Ok(items) => {
            let fresh = ExplorerGrid {
                tab: tab.clone(),
                items,
            };
            grid.complete(token, fresh.clone());
            (fresh, false)
        }
        // The grid is a live embellishment; serve the last accepted one
        // (or nothing) instead of failing the page.
        Err(_) => (
            grid.latest().unwrap_or(ExplorerGrid {
                tab: tab.clone(),
                items: Vec::new(),
            }),
            true,
        ),
    };

    let mut context = base_context("index");
    context.insert("featured", &page.featured);
    context.insert("daily_fact", &page.daily_fact);
    context.insert("recent", &page.recent);
    context.insert("categories", &page.categories);
    context.insert("explorer_tabs", EXPLORER_TABS);
    context.insert("explorer_tab", &explorer_view.tab);
    context.insert("explorer_items", &explorer_view.items);
    context.insert("explorer_error", &explorer_error);
    context.insert("supports_distance", &source.supports_distance());

    render_template(&tera, "main/index.html", &context)
}

/// JSON fragment behind the explorer tab switcher. A completion superseded
/// by a newer request is discarded and the newer grid is served instead.
#[get("/explorer")]
pub async fn explorer(
    params: web::Query<IndexQueryParams>,
    client: web::Data<NasaSearchClient>,
    grid: web::Data<FetchGuard<ExplorerGrid>>,
) -> impl Responder {
    let tab = params.tab.as_deref().unwrap_or("All").to_string();
    let token = grid.begin();

    match services::explorer::show_explorer(&client, &tab).await {
        Ok(items) => {
            let fresh = ExplorerGrid { tab, items };
            if grid.complete(token, fresh.clone()) {
                HttpResponse::Ok().json(fresh)
            } else {
                match grid.latest() {
                    Some(current) => HttpResponse::Ok().json(current),
                    None => HttpResponse::Ok().json(fresh),
                }
            }
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
