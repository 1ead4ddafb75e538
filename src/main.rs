use std::sync::Mutex;

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use brahmand::chat::HttpChatGateway;
use brahmand::datasource::ObjectSource;
use brahmand::db::establish_connection_pool;
use brahmand::domain::chat::ChatSession;
use brahmand::fetch_guard::FetchGuard;
use brahmand::models::config::AppConfig;
use brahmand::nasa::client::NasaSearchClient;
use brahmand::repository::DieselRepository;
use brahmand::routes;
use brahmand::services::explorer::ExplorerGrid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::load().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").map_err(std::io::Error::other)?;

    let source = web::Data::new(ObjectSource::from_config(&config, repo.clone()));
    let nasa_client = web::Data::new(NasaSearchClient::new(&config.nasa));
    let chat_gateway = web::Data::new(HttpChatGateway::new(&config.chat));
    let chat_session = web::Data::new(Mutex::new(ChatSession::new()));
    let explorer_grid = web::Data::new(FetchGuard::<ExplorerGrid>::new());
    let repo = web::Data::new(repo);
    let tera = web::Data::new(tera);

    log::info!("Starting server at {}", config.bind_address);

    let bind_address = config.bind_address.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(repo.clone())
            .app_data(tera.clone())
            .app_data(source.clone())
            .app_data(nasa_client.clone())
            .app_data(chat_gateway.clone())
            .app_data(chat_session.clone())
            .app_data(explorer_grid.clone())
            .service(routes::main::index)
            .service(routes::main::explorer)
            .service(routes::categories::categories)
            .service(routes::categories::category_detail)
            .service(routes::objects::object_detail)
            .service(routes::timeline::timeline)
            .service(routes::articles::articles)
            .service(routes::favorites::favorites)
            .service(routes::chat::chat_page)
            .service(routes::chat::send_chat)
            .service(routes::chat::chat_preflight)
            .service(routes::api::api_v1_objects)
            .service(Files::new("/static", "static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
