use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use tera::Tera;

use crate::compose::{self, SortKey};
use crate::datasource::ObjectSource;
use crate::dto::categories::CategoryDto;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::{self, ServiceError};

#[get("/categories")]
pub async fn categories(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let categories = match services::categories::show_categories(repo.get_ref()) {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context("categories");
    context.insert("categories", &categories);

    render_template(&tera, "categories/index.html", &context)
}

#[derive(Debug, Deserialize)]
struct CategoryDetailQueryParams {
    #[serde(default)]
    filter: usize,
    #[serde(default)]
    sort: SortKey,
}

#[get("/category/{slug}")]
pub async fn category_detail(
    slug: web::Path<String>,
    params: web::Query<CategoryDetailQueryParams>,
    repo: web::Data<DieselRepository>,
    source: web::Data<ObjectSource>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let slug = slug.into_inner();

    let category = match services::categories::find_category(repo.get_ref(), &slug) {
        Ok(category) => category,
        Err(ServiceError::NotFound) => return render_not_found(&tera, "category"),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Listing failures are absorbed: the page still renders its header with
    // an empty grid and an error flag.
    let (objects, objects_error) = match source.objects_for_category(&category).await {
        Ok(objects) => (objects, false),
        Err(e) => {
            log::error!("Failed to load objects for category {slug}: {e}");
            (Vec::new(), true)
        }
    };

    let filters: Vec<&str> = compose::filters_for(&slug).iter().map(|f| f.label).collect();
    let objects = compose::compose(objects, &slug, params.filter, params.sort);

    let mut context = base_context("categories");
    context.insert("category", &CategoryDto::from(category));
    context.insert("objects", &objects);
    context.insert("objects_error", &objects_error);
    context.insert("filters", &filters);
    context.insert("active_filter", &params.filter);
    context.insert("sort", &params.sort);
    context.insert("supports_distance", &source.supports_distance());

    render_template(&tera, "categories/detail.html", &context)
}
