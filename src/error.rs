use std::path::PathBuf;

use thiserror::Error;

/// 查询服务的错误类型
#[derive(Debug, Error)]
pub enum ScentError {
    /// 数据文件缺失或损坏
    #[error("data unavailable: {path}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },

    /// 数据尚未加载
    #[error("Data not loaded")]
    ServiceUnavailable,

    /// 目录中没有该 ID，也包括超出 ID 范围的整数
    #[error("Perfume not found: {0}")]
    NotFound(i64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 推荐表引用了目录中不存在的 ID
    #[error("Inconsistent data: {0}")]
    Inconsistent(String),
}

impl ScentError {
    pub(crate) fn data_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DataUnavailable { path: path.into(), reason: reason.to_string() }
    }
}

pub type ScentResult<T> = Result<T, ScentError>;
