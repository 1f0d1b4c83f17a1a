use actix_files::Files;
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::SameSite;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use jersey_customizer::config::EnvConfig;
use jersey_customizer::db::postgres_service::PostgresService;
use jersey_customizer::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(std::io::Error::other)?,
    );

    let key = config.session_cookie_key();

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
            .cookie_name("session".into())
            .cookie_path("/".into())
            .cookie_secure(config.cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(config.clone()))
            .wrap(session)
            .configure(configure_routes)
            .service(Files::new("/static", config.static_dir.clone()))
            .service(Files::new("/media", config.media_dir.clone()))
    })
    .bind(addr)?
    .run()
    .await
}
