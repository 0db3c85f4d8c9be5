use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::{Path, Query, State};
use log::debug;

use super::error::{AppError, Result};
use super::state::AppState;
use super::types::*;
use crate::catalog::PerfumeId;
use crate::error::ScentError;
use crate::metrics;
use crate::service::{RecommendationResponse, SearchResult};

/// 健康检查
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, body = HealthResponse),
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { message: "Scent Discovery API is running! 🚀".to_string() })
}

/// 按名称搜索香水
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, body = Vec<SearchResult>),
        (status = 422, body = ErrorResponse, description = "关键字缺失或过短"),
        (status = 503, body = ErrorResponse, description = "数据尚未加载"),
    )
)]
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResult>>> {
    let start = Instant::now();
    let result = query
        .q
        .ok_or_else(|| ScentError::InvalidArgument("missing query parameter 'q'".to_string()))
        .and_then(|q| state.service.search(&q))
        .map_err(AppError::from);
    metrics::observe_request_duration("search", start.elapsed().as_secs_f32());

    match result {
        Ok(results) => {
            metrics::inc_search_count(if results.is_empty() { "empty" } else { "hit" });
            Ok(Json(results))
        }
        Err(e) => {
            metrics::inc_search_count(e.kind());
            Err(e)
        }
    }
}

/// 获取推荐结果
#[utoipa::path(
    get,
    path = "/recommend/{perfume_id}",
    params(
        ("perfume_id" = i64, Path, description = "香水 ID，超出范围的整数视为不存在"),
    ),
    responses(
        (status = 200, body = RecommendationResponse),
        (status = 404, body = ErrorResponse, description = "香水不存在"),
        (status = 503, body = ErrorResponse, description = "数据尚未加载"),
    )
)]
pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Path(perfume_id): Path<i64>,
) -> Result<Json<RecommendationResponse>> {
    debug!("查询推荐: {perfume_id}");

    let start = Instant::now();
    let result = PerfumeId::try_from(perfume_id)
        .and_then(|id| state.service.recommend(id))
        .map_err(AppError::from);
    metrics::observe_request_duration("recommend", start.elapsed().as_secs_f32());

    match result {
        Ok(response) => {
            match &response.hero {
                Some(hero) => {
                    metrics::inc_recommend_count("hero");
                    metrics::observe_hero_match_score(hero.match_score);
                }
                None => metrics::inc_recommend_count("no_recommendations"),
            }
            Ok(Json(response))
        }
        Err(e) => {
            metrics::inc_recommend_count(e.kind());
            Err(e)
        }
    }
}
