use crate::assets::handlers::{handle_home, handle_script};
use crate::catalog::handlers::{
    handle_catalog_stats, handle_filter_by_appliance, handle_get_recommendation,
    handle_list_recommendations,
};
use crate::catalog::store::CatalogStore;
use crate::chatbot::handlers::handle_chatbot;
use crate::chatbot::responder::QueryResponder;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// All HTTP routes. Any origin may call the API.
pub fn router(catalog: Arc<CatalogStore>, responder: Arc<QueryResponder>) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/static/script.js", get(handle_script))
        .route("/recommendations", get(handle_list_recommendations))
        .route("/recommendations/:id", get(handle_get_recommendation))
        .route(
            "/recommendations/Electro_Domestico",
            get(handle_filter_by_appliance),
        )
        .route(
            "/recommendations/Electro_Domestico/",
            get(handle_filter_by_appliance),
        )
        .route("/chatbot", get(handle_chatbot))
        .route("/health/stats", get(handle_catalog_stats))
        .layer(Extension(catalog))
        .layer(Extension(responder))
        .layer(CorsLayer::permissive())
}
