mod api;
mod error;
mod state;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use self::state::*;
pub use self::types::{ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(api::health_handler, api::search_handler, api::recommend_handler),
    components(schemas(
        types::HealthResponse,
        types::ErrorResponse,
        crate::service::SearchResult,
        crate::service::RecommendationResponse,
        crate::service::Seed,
        crate::service::Hero,
        crate::service::Alternative,
    ))
)]
pub struct ApiDoc;

/// 构建API服务器
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::health_handler))
        .route("/search", get(api::search_handler))
        .route("/recommend/{perfume_id}", get(api::recommend_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // 只有 GET 接口，请求体限制为 16K
        .layer(RequestBodyLimitLayer::new(1024 * 16))
        .with_state(state)
}
