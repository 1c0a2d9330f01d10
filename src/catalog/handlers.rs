use super::store::CatalogStore;
use super::types::{
    ApplianceFilterParams, CatalogStatsResponse, NotFoundResponse, RecommendationLookup,
    RecommendationRecord,
};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list_recommendations(
    Extension(catalog): Extension<Arc<CatalogStore>>,
) -> Json<Vec<RecommendationRecord>> {
    Json(catalog.all_records().to_vec())
}

pub async fn handle_get_recommendation(
    Path(id): Path<u32>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
) -> (StatusCode, Json<RecommendationLookup>) {
    match catalog.find_by_id(id) {
        Some(record) => (
            StatusCode::OK,
            Json(RecommendationLookup::Found(record.clone())),
        ),
        None => {
            tracing::info!("Recommendation {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(RecommendationLookup::NotFound(NotFoundResponse {
                    detail: "Recomendación no encontrada".to_string(),
                })),
            )
        }
    }
}

pub async fn handle_filter_by_appliance(
    Query(params): Query<ApplianceFilterParams>,
    Extension(catalog): Extension<Arc<CatalogStore>>,
) -> Json<Vec<RecommendationRecord>> {
    let results = catalog.find_by_name_fragment(&params.appliance);
    tracing::debug!(
        "Filter '{}' matched {} recommendations",
        params.appliance,
        results.len()
    );
    Json(results)
}

pub async fn handle_catalog_stats(
    Extension(catalog): Extension<Arc<CatalogStore>>,
) -> Json<CatalogStatsResponse> {
    Json(CatalogStatsResponse {
        status: "ok".to_string(),
        records: catalog.all_records().len(),
        appliances: catalog.appliance_names().len(),
    })
}
