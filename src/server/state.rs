use std::sync::Arc;

use crate::service::QueryService;

/// 应用状态
pub struct AppState {
    /// 查询服务，持有只读的目录与推荐表
    pub service: QueryService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(service: QueryService) -> Arc<Self> {
        Arc::new(AppState { service })
    }
}
