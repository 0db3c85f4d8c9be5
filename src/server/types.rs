use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 搜索请求参数
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// 香水名称关键字，至少 2 个字符；缺失时返回 422
    #[param(min_length = 2)]
    pub q: Option<String>,
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
