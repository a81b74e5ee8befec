//! Request handlers for the API endpoints.
//!
//! Status mapping: empty costing results become 404 (unknown meter or no
//! data), degenerate reading histories become 422, malformed input becomes
//! 400. The handlers only translate; all costing policy lives in the engine.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use super::AppState;
use super::types::{
    CompareAllResponse, ErrorResponse, RecommendQuery, StoreReadingsRequest, WeeklyCostResponse,
};
use crate::domain::Reading;
use crate::engine::error::CostError;
use crate::engine::rank;

/// Appends readings for a meter.
///
/// `POST /readings/store` → 200 `{}` | 400 on an empty id or empty batch
pub async fn store_readings(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StoreReadingsRequest>,
) -> impl IntoResponse {
    if !request.is_valid() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "smartMeterId and electricityReadings must be non-empty".to_string(),
            }),
        ));
    }
    state
        .store
        .store(&request.smart_meter_id, request.electricity_readings);
    Ok(Json(serde_json::json!({})))
}

/// Returns the stored sequence for a meter.
///
/// `GET /readings/read/{id}` → 200 + array (empty for unknown meters)
pub async fn read_readings(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
) -> Json<Vec<Reading>> {
    Json(state.store.snapshot(&smart_meter_id))
}

/// Costs the meter's history under every cataloged plan.
///
/// `GET /price-plans/compare-all/{id}` → 200 + `CompareAllResponse`
/// | 404 when no readings exist | 422 on a degenerate history
pub async fn compare_all(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
) -> impl IntoResponse {
    let costs = state
        .engine
        .per_plan_cost(&smart_meter_id)
        .map_err(cost_error_response)?;
    if costs.is_empty() {
        return Err(not_found(&smart_meter_id));
    }

    // A mapped supplier without a cataloged plan is a wiring fault, not
    // something to display as if it had been costed.
    let price_plan_id = match state.accounts.supplier_for(&smart_meter_id) {
        Some(supplier) => Some(
            state
                .engine
                .plan_for(supplier)
                .map_err(cost_error_response)?
                .supplier,
        ),
        None => None,
    };

    let price_plan_comparisons = costs
        .into_iter()
        .map(|c| (c.supplier.name().to_string(), c.cost))
        .collect();
    Ok(Json(CompareAllResponse {
        price_plan_id,
        price_plan_comparisons,
    }))
}

/// Recommends the cheapest plans for the meter.
///
/// `GET /price-plans/recommend/{id}?limit=N` → 200 + ranked array
/// | 404 when no readings exist | 422 on a degenerate history
///
/// The not-found check runs before the limit is applied, so `limit=0`
/// against a meter with data is 200 with an empty array, not 404.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
    Query(query): Query<RecommendQuery>,
) -> impl IntoResponse {
    let costs = state
        .engine
        .per_plan_cost(&smart_meter_id)
        .map_err(cost_error_response)?;
    if costs.is_empty() {
        return Err(not_found(&smart_meter_id));
    }

    Ok(Json(rank::rank(costs, query.limit)))
}

/// Computes the trailing-week bill under the meter's own supplier.
///
/// `GET /cost/{id}` → 200 + `WeeklyCostResponse` | 400 for unmapped meters
pub async fn weekly_cost(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
) -> impl IntoResponse {
    let Some(supplier) = state.accounts.supplier_for(&smart_meter_id) else {
        let err = CostError::UnsuppliedMeter {
            meter_id: smart_meter_id,
        };
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        ));
    };

    let cost = state
        .engine
        .weekly_supplier_cost(&smart_meter_id, supplier, Utc::now());
    Ok(Json(WeeklyCostResponse {
        smart_meter_id,
        supplier,
        cost,
    }))
}

fn not_found(smart_meter_id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Smart Meter ID ({smart_meter_id}) not found"),
        }),
    )
}

/// Maps engine errors to status codes: degenerate histories are unprocessable
/// input, the rest are bad requests.
fn cost_error_response(err: CostError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        CostError::DegenerateInterval { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        CostError::UnsuppliedMeter { .. } | CostError::MissingPlan { .. } => {
            StatusCode::BAD_REQUEST
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{Duration, TimeZone, Utc};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::AppConfig;
    use crate::engine::cost::CostEngine;
    use crate::store::readings::MeterReadingStore;

    fn make_test_state() -> Arc<AppState> {
        let config = AppConfig::demo();
        let store = Arc::new(MeterReadingStore::new());
        let catalog = Arc::new(config.build_catalog());

        let t0 = Utc.with_ymd_and_hms(2024, 6, 4, 12, 0, 0).unwrap();
        store.store(
            "smart-meter-0",
            vec![
                Reading::new(t0, 0.5),
                Reading::new(t0 + Duration::hours(1), 0.7),
            ],
        );
        store.store("smart-meter-2", vec![Reading::new(t0, 0.5)]);

        Arc::new(AppState {
            store: Arc::clone(&store),
            accounts: config.build_accounts(),
            engine: CostEngine::new(store, catalog),
        })
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        // Framework rejections (e.g. a malformed query string) carry a
        // plain-text body; treat anything non-JSON as Null.
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn compare_all_prices_every_plan() {
        let (status, json) = get("/price-plans/compare-all/smart-meter-0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["pricePlanId"], "DrEvilsDarkEnergy");
        let comparisons = &json["pricePlanComparisons"];
        assert_eq!(comparisons["DrEvilsDarkEnergy"], 6.0);
        assert_eq!(comparisons["TheGreenEco"], 1.2);
        assert_eq!(comparisons["PowerForEveryone"], 0.6);
    }

    #[tokio::test]
    async fn compare_all_unknown_meter_is_404() {
        let (status, json) = get("/price-plans/compare-all/smart-meter-99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Smart Meter ID (smart-meter-99) not found");
    }

    #[tokio::test]
    async fn compare_all_single_reading_is_422() {
        let (status, json) = get("/price-plans/compare-all/smart-meter-2").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].as_str().unwrap().contains("zero elapsed time"));
    }

    #[tokio::test]
    async fn recommend_is_cheapest_first() {
        let (status, json) = get("/price-plans/recommend/smart-meter-0").await;
        assert_eq!(status, StatusCode::OK);
        let ranked = json.as_array().unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0]["supplier"], "PowerForEveryone");
        assert_eq!(ranked[0]["cost"], 0.6);
        assert_eq!(ranked[2]["supplier"], "DrEvilsDarkEnergy");
    }

    #[tokio::test]
    async fn recommend_limit_truncates() {
        let (status, json) = get("/price-plans/recommend/smart-meter-0?limit=1").await;
        assert_eq!(status, StatusCode::OK);
        let ranked = json.as_array().unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0]["supplier"], "PowerForEveryone");
    }

    #[tokio::test]
    async fn recommend_negative_limit_is_400() {
        let (status, _) = get("/price-plans/recommend/smart-meter-0?limit=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recommend_limit_zero_is_empty_200_not_404() {
        let (status, json) = get("/price-plans/recommend/smart-meter-0?limit=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn read_readings_roundtrip_and_unknown_meter() {
        let (status, json) = get("/readings/read/smart-meter-0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);

        let (status, json) = get("/readings/read/smart-meter-99").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn store_readings_appends() {
        let app = router(make_test_state());
        let body = r#"{
            "smartMeterId": "smart-meter-1",
            "electricityReadings": [
                { "time": "2024-06-04T19:45:59Z", "reading": 0.88 }
            ]
        }"#;
        let req = Request::builder()
            .method("POST")
            .uri("/readings/store")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn store_readings_rejects_empty_batch() {
        let app = router(make_test_state());
        let body = r#"{ "smartMeterId": "smart-meter-1", "electricityReadings": [] }"#;
        let req = Request::builder()
            .method("POST")
            .uri("/readings/store")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn weekly_cost_for_mapped_meter_is_200() {
        // Stored readings are days old relative to Utc::now(), far outside
        // the trailing week, so the defined zero-cost default applies.
        let (status, json) = get("/cost/smart-meter-0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["supplier"], "DrEvilsDarkEnergy");
        assert_eq!(json["cost"], 0.0);
    }

    #[tokio::test]
    async fn weekly_cost_for_unmapped_meter_is_400() {
        let (status, json) = get("/cost/smart-meter-99").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("no supplier"));
    }
}
