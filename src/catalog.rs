use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::info;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::{ScentError, ScentResult};

/// 搜索结果的默认最大数量
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// 搜索关键字的最小长度（按字符计）
pub const MIN_QUERY_CHARS: usize = 2;

/// 香水 ID
///
/// 由离线数据分配，在整个目录中唯一，也是推荐表唯一的关联键。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PerfumeId(pub u32);

impl fmt::Display for PerfumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for PerfumeId {
    type Error = ScentError;

    /// 超出 ID 范围的整数不可能出现在目录中，视为不存在
    fn try_from(id: i64) -> ScentResult<Self> {
        u32::try_from(id).map(Self).map_err(|_| ScentError::NotFound(id))
    }
}

/// 发布年份，上游数据中可能是数字也可能是文本
///
/// 上游导出的整数列遇到空值时会变成浮点数，例如 `2010.0`，读取时还原为整数。
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawYear::deserialize(deserializer)? {
            RawYear::Int(n) => Self::Number(n),
            RawYear::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Self::Number(f as i64)
            }
            RawYear::Float(f) => Self::Text(f.to_string()),
            RawYear::Text(s) => Self::Text(s),
        })
    }
}

/// 缺失与 null 都读取为空字符串
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Year {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => s.fmt(f),
        }
    }
}

/// 目录中的一条香水记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumeRecord {
    pub id: PerfumeId,
    #[serde(alias = "Perfume")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty", alias = "Brand")]
    pub brand: String,
    #[serde(default, alias = "Year")]
    pub year: Option<Year>,
    #[serde(default, deserialize_with = "null_as_empty", alias = "Gender")]
    pub gender: String,
    /// 缺失与 null 都视为没有评分
    #[serde(default, alias = "Rating Value")]
    pub rating_value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty", alias = "Main Accord 1")]
    pub main_accord: String,
    #[serde(default, deserialize_with = "null_as_empty", alias = "URL")]
    pub image_url: String,
}

impl PerfumeRecord {
    /// 评分，没有评分时返回 0.0
    pub fn rating(&self) -> f64 {
        self.rating_value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// 只读的香水目录
pub struct Catalog {
    records: Vec<PerfumeRecord>,
    /// 与 `records` 一一对应的小写名称，用于大小写无关的搜索
    lowercase_names: Vec<String>,
    by_id: HashMap<PerfumeId, usize>,
}

impl Catalog {
    /// 从 JSON 文件加载目录
    pub fn load(path: impl AsRef<Path>) -> ScentResult<Self> {
        let path = path.as_ref();
        info!("正在加载香水目录: {}", path.display());

        let data = std::fs::read(path).map_err(|e| ScentError::data_unavailable(path, e))?;
        let records: Vec<PerfumeRecord> =
            serde_json::from_slice(&data).map_err(|e| ScentError::data_unavailable(path, e))?;
        let catalog =
            Self::from_records(records).map_err(|e| ScentError::data_unavailable(path, e))?;

        info!("香水目录加载完成，共 {} 条记录", catalog.len());
        Ok(catalog)
    }

    /// 使用给定记录构建目录，会检查 ID 唯一且名称非空
    pub fn from_records(records: Vec<PerfumeRecord>) -> ScentResult<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if record.name.is_empty() {
                return Err(ScentError::Inconsistent(format!(
                    "perfume {} has empty name",
                    record.id
                )));
            }
            if by_id.insert(record.id, pos).is_some() {
                return Err(ScentError::Inconsistent(format!(
                    "duplicate perfume id {}",
                    record.id
                )));
            }
        }
        let lowercase_names = records.iter().map(|r| r.name.to_lowercase()).collect();
        Ok(Self { records, lowercase_names, by_id })
    }

    pub fn find_by_id(&self, id: PerfumeId) -> Option<&PerfumeRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    /// 按名称做大小写无关的子串搜索
    ///
    /// 结果保持目录原有顺序，最多返回 `limit` 条。
    ///
    /// # Arguments
    ///
    /// * `query` - 搜索关键字，至少 2 个字符
    /// * `limit` - 最大结果数量
    pub fn search_by_name(&self, query: &str, limit: usize) -> ScentResult<Vec<&PerfumeRecord>> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Err(ScentError::InvalidArgument(format!(
                "query must be at least {MIN_QUERY_CHARS} characters"
            )));
        }

        let needle = query.to_lowercase();
        Ok(self
            .records
            .iter()
            .zip(&self.lowercase_names)
            .filter(|(_, name)| name.contains(&needle))
            .map(|(record, _)| record)
            .take(limit)
            .collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
