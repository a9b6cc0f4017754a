pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

use actix_web::web;

use crate::errors::AppError;

/// Registers every route of the panel.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        AppError::BadRequest(err.to_string()).into()
    }))
    .service(web::resource("/v1/auth").route(web::post().to(handlers::auth::login_handler)))
        .service(
            web::resource("/v1/logout").route(web::post().to(handlers::auth::logout_handler)),
        )
        .service(web::resource("/v1/home").route(web::get().to(handlers::view::home)))
        .service(
            web::resource("/v1/dashboard")
                .route(web::get().to(handlers::view::get_dashboard))
                .route(web::patch().to(handlers::view::update_dashboard)),
        )
        .service(
            web::resource("/v1/employee")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/v1/employee/{id}")
                .route(web::get().to(handlers::employee::get_employee))
                .route(web::patch().to(handlers::employee::update_employee))
                .route(web::delete().to(handlers::employee::delete_employee)),
        )
        .service(
            web::resource("/v1/form")
                .route(web::post().to(handlers::form::open_form))
                .route(web::patch().to(handlers::form::patch_form))
                .route(web::delete().to(handlers::form::cancel_form)),
        )
        .service(
            web::resource("/v1/form/image").route(web::post().to(handlers::file::upload_image)),
        )
        .service(
            web::resource("/v1/form/submit").route(web::post().to(handlers::form::submit_form)),
        );
}
