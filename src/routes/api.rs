use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::routes::{AppState, error_response, json_error};
use crate::services::ServiceError;
use crate::services::catalog::{ProductSearchParams, search_products as search_products_service};
use crate::services::facets::{
    list_brands as list_brands_service, list_categories as list_categories_service,
    list_channels as list_channels_service,
};
use crate::services::products::show_product as show_product_service;

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[get("/api/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match list_categories_service(&state.privileged) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(&err),
    }
}

#[get("/api/brands")]
pub async fn list_brands(state: web::Data<AppState>) -> impl Responder {
    match list_brands_service(&state.privileged) {
        Ok(brands) => HttpResponse::Ok().json(brands),
        Err(err) => error_response(&err),
    }
}

#[get("/api/channels")]
pub async fn list_channels(state: web::Data<AppState>) -> impl Responder {
    match list_channels_service(&state.privileged) {
        Ok(channels) => HttpResponse::Ok().json(channels),
        Err(err) => error_response(&err),
    }
}

#[get("/api/products")]
pub async fn search_products(
    params: web::Query<ProductSearchParams>,
    state: web::Data<AppState>,
) -> impl Responder {
    match search_products_service(&params, state.product_sort, &state.privileged) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => error_response(&err),
    }
}

#[get("/api/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    match show_product_service(&product_id, &state.anonymous) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::NotFound) => json_error(StatusCode::NOT_FOUND, "Product not found"),
        Err(err) => error_response(&err),
    }
}
