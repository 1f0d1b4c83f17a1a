use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::{web, App};
use jersey_customizer::config::EnvConfig;
use jersey_customizer::db::postgres_service::PostgresService;
use jersey_customizer::routes::configure_routes;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub config: EnvConfig,
}

impl TestClient {
    #[allow(dead_code)]
    pub fn new(db: Arc<PostgresService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
            .cookie_name("session".into())
            .cookie_secure(false)
            .build();

        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .wrap(session)
            .configure(configure_routes)
    }
}
