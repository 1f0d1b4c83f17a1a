use actix_web::web;

pub mod auth;
pub mod design;
pub mod pages;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home);
    cfg.service(pages::pre_order);
    cfg.service(pages::about);

    // The customizer answers on both its short and legacy path.
    cfg.service(web::resource("/create/").route(web::get().to(pages::customizer)));
    cfg.service(web::resource("/jersey_customizer/").route(web::get().to(pages::customizer)));

    cfg.service(auth::login_page);
    cfg.service(auth::login);
    cfg.service(auth::logout);

    cfg.service(
        web::resource("/save-design/")
            .route(web::post().to(design::save_design))
            .default_service(web::route().to(design::invalid_method)),
    );
}
