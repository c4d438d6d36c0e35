use actix_web::{web, App, HttpServer};
use actix_web_httpauth::middleware::HttpAuthentication;
use std::sync::Arc;

use gymfeed::config::{EnvConfig, CONFIG};
use gymfeed::db::service::DbService;
use gymfeed::routes::configure_routes;
use gymfeed::utils::webutils::validate_token;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let _ = CONFIG.set(config.clone());
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::new(config.db_url.as_str())
            .await
            .expect("Failed to initialize database service"),
    );

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        let auth = HttpAuthentication::bearer(validate_token);

        App::new()
            .wrap(auth)
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
