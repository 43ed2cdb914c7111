use actix_web::{web, App, HttpServer};
use moviweb::config::EnvConfig;
use moviweb::db::database_service::DatabaseService;
use moviweb::routes::configure_routes;
use moviweb::utils::omdb::OmdbClient;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    let omdb = OmdbClient::new(&config.omdb).expect("Failed to build OMDb client");

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(omdb.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
