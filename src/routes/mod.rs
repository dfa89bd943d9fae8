use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::types::ProductSort;
use crate::repository::DieselRepository;
use crate::services::ServiceError;

pub mod api;

/// Shared handler state: one store handle per access scope.
#[derive(Clone)]
pub struct AppState {
    /// Handle used by the listing and search endpoints.
    pub privileged: DieselRepository,
    /// Read-only handle used by the product detail endpoint.
    pub anonymous: DieselRepository,
    /// Ordering applied when a search does not ask for one.
    pub product_sort: ProductSort,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn json_error(status: actix_web::http::StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error: message })
}

/// Maps a service failure onto the `{error}` response body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    use actix_web::http::StatusCode;

    match err {
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, "not found"),
        ServiceError::Form(message) => json_error(StatusCode::BAD_REQUEST, message),
        ServiceError::Store(message) | ServiceError::TypeConstraint(message) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

/// Registers every catalog endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::health)
        .service(api::list_categories)
        .service(api::list_brands)
        .service(api::list_channels)
        .service(api::search_products)
        .service(api::show_product);
}
