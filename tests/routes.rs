use std::sync::Mutex;

use actix_web::{App, test, web};
use chrono::Utc;
use serde_json::Value;
use tera::Tera;

use brahmand::chat::HttpChatGateway;
use brahmand::datasource::ObjectSource;
use brahmand::domain::category::NewCategory;
use brahmand::domain::chat::ChatSession;
use brahmand::domain::object::NewCelestialObject;
use brahmand::domain::types::{CategoryName, ObjectName, ObjectType, Slug};
use brahmand::fetch_guard::FetchGuard;
use brahmand::models::config::{ChatConfig, NasaConfig};
use brahmand::nasa::client::NasaSearchClient;
use brahmand::repository::{CategoryReader, CategoryWriter, DieselRepository, ObjectWriter};
use brahmand::routes;
use brahmand::services::explorer::ExplorerGrid;

mod common;

fn seeded_repo() -> DieselRepository {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    // The tempfile is deleted on drop; keep the database alive by leaking
    // it for the duration of the test process.
    std::mem::forget(test_db);

    let now = Utc::now().naive_utc();
    repo.create_category(&NewCategory {
        slug: Slug::new("planets").unwrap(),
        name: CategoryName::new("Planets").unwrap(),
        description: Some("Worlds of our solar system and beyond".to_string()),
        icon_name: None,
        image_url: None,
        created_at: now,
        updated_at: now,
    })
    .unwrap();

    let category = repo
        .get_category_by_slug(&Slug::new("planets").unwrap())
        .unwrap()
        .unwrap();

    repo.create_object(&NewCelestialObject {
        slug: Slug::new("mars").unwrap(),
        name: ObjectName::new("Mars").unwrap(),
        object_type: ObjectType::Planet,
        category_id: Some(category.id),
        short_description: Some("The red planet".to_string()),
        detailed_description: None,
        discovery_year: None,
        discoverer: None,
        discovery_story: None,
        distance_light_years: None,
        constellation: None,
        mass: None,
        radius: None,
        temperature: None,
        age: None,
        primary_image_url: None,
        thumbnail_url: None,
        is_featured: false,
        featured_date: None,
    })
    .unwrap();

    repo
}

fn test_tera() -> Tera {
    Tera::new("templates/**/*.html").expect("templates should parse")
}

#[actix_web::test]
async fn category_page_renders_for_known_slug() {
    let repo = seeded_repo();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(test_tera()))
            .app_data(web::Data::new(ObjectSource::Catalog(repo)))
            .service(routes::categories::category_detail),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/category/planets?sort=name")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Mars"));
}

#[actix_web::test]
async fn unknown_category_renders_not_found_view() {
    let repo = seeded_repo();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(test_tera()))
            .app_data(web::Data::new(ObjectSource::Catalog(repo)))
            .service(routes::categories::category_detail),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/category/wormholes")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Lost in space"));
}

#[actix_web::test]
async fn object_page_renders_and_unknown_slug_is_not_found() {
    let repo = seeded_repo();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(test_tera()))
            .service(routes::objects::object_detail),
    )
    .await;

    let req = test::TestRequest::get().uri("/object/mars").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/object/nibiru").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn api_lists_objects_as_json() {
    let repo = seeded_repo();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(routes::api::api_v1_objects),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/v1/objects?object_type=planet")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Mars");
}

#[actix_web::test]
async fn index_renders_with_explorer_error_when_archive_is_unreachable() {
    let repo = seeded_repo();
    let nasa = NasaSearchClient::new(&NasaConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        page_size: 4,
    });
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(test_tera()))
            .app_data(web::Data::new(ObjectSource::Catalog(repo)))
            .app_data(web::Data::new(nasa))
            .app_data(web::Data::new(FetchGuard::<ExplorerGrid>::new()))
            .service(routes::main::index)
            .service(routes::main::explorer),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Mars"));
    assert!(html.contains("The image archive is unreachable right now."));
}

#[actix_web::test]
async fn api_survives_absurd_page_numbers() {
    let repo = seeded_repo();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .service(routes::api::api_v1_objects),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/v1/objects?page={}", usize::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn chat_without_credential_returns_disrupted_fallback() {
    let gateway = HttpChatGateway::new(&ChatConfig::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Mutex::new(ChatSession::new())))
            .app_data(web::Data::new(gateway))
            .service(routes::chat::send_chat),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({ "message": "What is Betelgeuse?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Apologies, the cosmic connection is disrupted. Please try again in a moment."
    );
}

#[actix_web::test]
async fn chat_rejects_blank_messages() {
    let gateway = HttpChatGateway::new(&ChatConfig::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Mutex::new(ChatSession::new())))
            .app_data(web::Data::new(gateway))
            .service(routes::chat::send_chat),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({ "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn chat_preflight_carries_permissive_cors_headers() {
    let app = test::init_service(App::new().service(routes::chat::chat_preflight)).await;

    let req = test::TestRequest::with_uri("/chat")
        .method(actix_web::http::Method::OPTIONS)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
