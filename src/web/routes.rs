use std::path::PathBuf;

use actix_files::Files;
use actix_web::{error, web, HttpResponse};
use crate::web::handlers;
use crate::web::models::GenerateResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/generate", web::post().to(handlers::generate));
}

// Serves images written by the generator
pub fn generated_images(dir: impl Into<PathBuf>) -> Files {
    Files::new("/static/generated", dir.into())
}

// Bad request bodies get the same JSON shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(GenerateResponse::failed(format!("Invalid request body: {}", err)));
        error::InternalError::from_response(err, response).into()
    })
}
