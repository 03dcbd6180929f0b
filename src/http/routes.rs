use crate::error::ApiError;
use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module under `/api/v1`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .app_data(path_config())
            .configure(http::auth::init_routes)
            .configure(http::clubs::init_routes)
            .configure(http::events::init_routes)
            .configure(http::health::init_routes),
    );
}

/// Undecodable bodies answer with the usual JSON error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(format!("invalid input: {err}")).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| ApiError::BadRequest("invalid id".into()).into())
}
