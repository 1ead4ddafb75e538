use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::repository::DieselRepository;
use crate::services::api::{self, ObjectFilter};
use crate::services::ServiceError;

#[derive(Debug, Deserialize)]
struct ApiV1ObjectsQueryParams {
    category_id: Option<i32>,
    object_type: Option<String>,
    featured: Option<bool>,
    limit: Option<i64>,
    page: Option<usize>,
}

#[get("/v1/objects")]
pub async fn api_v1_objects(
    params: web::Query<ApiV1ObjectsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let filter = ObjectFilter {
        category_id: params.category_id,
        object_type: params.object_type,
        featured: params.featured,
        limit: params.limit,
        page: params.page,
    };

    match api::list_objects(repo.get_ref(), filter) {
        Ok(objects) => HttpResponse::Ok().json(objects),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to list objects: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
