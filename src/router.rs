use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::db::CafeStorage;
use crate::handlers::{cafes, pages};

#[derive(Clone)]
pub struct CatalogState {
    pub storage: CafeStorage,
    pub secret_pass: Arc<str>,
}

impl CatalogState {
    pub fn new(storage: CafeStorage, secret_pass: Arc<str>) -> Self {
        Self {
            storage,
            secret_pass,
        }
    }
}

pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/add", get(cafes::add_cafe_form).post(cafes::add_cafe))
        .route("/cafes", get(cafes::list_cafes))
        .route("/delete", get(cafes::delete_menu).post(cafes::delete_cafe))
        .route(
            "/edit/{cafe_id}",
            get(cafes::edit_cafe_form).post(cafes::edit_cafe),
        )
        .with_state(state)
}
