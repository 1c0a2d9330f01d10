//! Catalog Module Tests
//!
//! ## Test Scopes
//! - **Loading**: CSV parsing, header mapping and the startup-fatal error cases.
//! - **Accessors**: Lookup by ID, by name fragment and by exact appliance label.
//! - **Handlers**: JSON bodies and status codes of the lookup endpoints.

#[cfg(test)]
mod tests {
    use crate::catalog::handlers::{
        handle_catalog_stats, handle_filter_by_appliance, handle_get_recommendation,
        handle_list_recommendations,
    };
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::{
        ApplianceFilterParams, CatalogError, RecommendationLookup, RecommendationRecord,
    };
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::Extension;
    use std::io::Write;
    use std::sync::Arc;

    const SAMPLE_CSV: &str = "\
ID,ElectroDomestico,Sugerencia_1,Sugerencia_2,Sugerencia_3,Sugerencia_4,Sugerencia_5,Sugerencia_6
1,Lavadora,Usa agua fría,Lava con carga completa,,,,
2,Ventilador,Apágalo al salir,,,,,
3,Aire Acondicionado,Ajusta a 24 grados,Limpia los filtros,,,,
4,lavadora ,Centrifuga más,,,,,
";

    fn record(id: u32, name: &str) -> RecommendationRecord {
        RecommendationRecord {
            id,
            appliance_name: name.to_string(),
            suggestion_1: format!("tip for {}", name),
            suggestion_2: String::new(),
            suggestion_3: String::new(),
            suggestion_4: String::new(),
            suggestion_5: String::new(),
            suggestion_6: String::new(),
        }
    }

    fn sample_store() -> Arc<CatalogStore> {
        Arc::new(CatalogStore::from_reader(SAMPLE_CSV.as_bytes()).unwrap())
    }

    // ============================================================
    // LOADING TESTS
    // ============================================================

    #[test]
    fn test_from_reader_parses_all_rows() {
        let store = sample_store();

        assert_eq!(store.all_records().len(), 4);
        let first = &store.all_records()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.appliance_name, "Lavadora");
        assert_eq!(first.suggestion_1, "Usa agua fría");
        assert_eq!(first.suggestion_2, "Lava con carga completa");
        assert_eq!(first.suggestion_3, "");
    }

    #[test]
    fn test_appliance_names_are_lowercased_and_distinct() {
        let store = sample_store();
        let names: Vec<&str> = store.appliance_names().iter().map(|s| s.as_str()).collect();

        // BTreeSet: sorted, "Lavadora" and "lavadora " collapse into one entry
        assert_eq!(names, vec!["aire acondicionado", "lavadora", "ventilador"]);
    }

    #[test]
    fn test_every_name_has_a_record() {
        let store = sample_store();
        for name in store.appliance_names() {
            assert!(
                !store.records_for_appliance(name).is_empty(),
                "No record for candidate '{}'",
                name
            );
        }
    }

    #[test]
    fn test_missing_suggestion_columns_default_to_empty() {
        let csv = "ID,ElectroDomestico,Sugerencia_1\n7,Plancha,Aprovecha el calor residual\n";
        let store = CatalogStore::from_reader(csv.as_bytes()).unwrap();

        let plancha = store.find_by_id(7).unwrap();
        assert_eq!(plancha.suggestion_1, "Aprovecha el calor residual");
        assert_eq!(plancha.suggestion_6, "");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "ID,ElectroDomestico,Categoria,Sugerencia_1\n1,Horno,Cocina,No abras la puerta\n";
        let store = CatalogStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.find_by_id(1).unwrap().suggestion_1, "No abras la puerta");
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let csv = "ID,ElectroDomestico\nuno,Lavadora\n";
        let result = CatalogStore::from_reader(csv.as_bytes());
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = CatalogStore::from_records(vec![record(1, "Lavadora"), record(1, "Horno")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = CatalogStore::from_records(vec![]);
        assert!(matches!(result, Err(CatalogError::EmptyCandidateSet)));

        let header_only = "ID,ElectroDomestico,Sugerencia_1\n";
        let result = CatalogStore::from_reader(header_only.as_bytes());
        assert!(matches!(result, Err(CatalogError::EmptyCandidateSet)));
    }

    #[test]
    fn test_blank_names_are_not_candidates() {
        let result = CatalogStore::from_records(vec![record(1, "   ")]);
        assert!(matches!(result, Err(CatalogError::EmptyCandidateSet)));

        let store = CatalogStore::from_records(vec![record(1, ""), record(2, "Horno")]).unwrap();
        assert_eq!(store.appliance_names().len(), 1);
        assert_eq!(store.all_records().len(), 2);
    }

    #[test]
    fn test_load_csv_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let store = CatalogStore::load_csv(file.path()).unwrap();
        assert_eq!(store.all_records().len(), 4);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        match CatalogStore::load_csv(&path) {
            Err(CatalogError::Load { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected Load error, got {:?}", other),
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/Sugerencias_Ahorro.csv");
        let store = CatalogStore::load_csv(path).unwrap();

        assert!(store.appliance_names().contains("lavadora"));
        assert!(store.appliance_names().contains("ventilador"));
    }

    // ============================================================
    // ACCESSOR TESTS
    // ============================================================

    #[test]
    fn test_find_by_id() {
        let store = sample_store();

        assert_eq!(store.find_by_id(2).unwrap().appliance_name, "Ventilador");
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn test_find_by_name_fragment_is_case_insensitive() {
        let store = sample_store();

        let ids: Vec<u32> = store
            .find_by_name_fragment("LAVA")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);

        assert_eq!(store.find_by_name_fragment("acond").len(), 1);
        assert!(store.find_by_name_fragment("nevera").is_empty());
    }

    #[test]
    fn test_records_for_appliance_uses_exact_label() {
        let store = sample_store();

        let ids: Vec<u32> = store
            .records_for_appliance("lavadora")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 4], "Catalog order must be preserved");

        // Not a substring match
        assert!(store.records_for_appliance("lava").is_empty());
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(record(5, "Televisor")).unwrap();

        assert_eq!(json["ID"], 5);
        assert_eq!(json["ElectroDomestico"], "Televisor");
        assert_eq!(json["Sugerencia 1"], "tip for Televisor");
        assert_eq!(json["Sugerencia 6"], "");
        assert!(json.get("appliance_name").is_none());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_list_recommendations() {
        let axum::Json(records) = handle_list_recommendations(Extension(sample_store())).await;
        assert_eq!(records.len(), 4);
    }

    #[tokio::test]
    async fn test_handle_get_recommendation_found() {
        let (status, axum::Json(body)) =
            handle_get_recommendation(Path(3), Extension(sample_store())).await;

        assert_eq!(status, StatusCode::OK);
        match body {
            RecommendationLookup::Found(record) => {
                assert_eq!(record.appliance_name, "Aire Acondicionado")
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_get_recommendation_not_found() {
        let (status, axum::Json(body)) =
            handle_get_recommendation(Path(42), Extension(sample_store())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Detalle"], "Recomendación no encontrada");
    }

    #[tokio::test]
    async fn test_handle_filter_by_appliance() {
        let params = ApplianceFilterParams {
            appliance: "venti".to_string(),
        };
        let axum::Json(records) =
            handle_filter_by_appliance(Query(params), Extension(sample_store())).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }

    #[tokio::test]
    async fn test_handle_catalog_stats() {
        let axum::Json(stats) = handle_catalog_stats(Extension(sample_store())).await;

        assert_eq!(stats.status, "ok");
        assert_eq!(stats.records, 4);
        assert_eq!(stats.appliances, 3);
    }
}
