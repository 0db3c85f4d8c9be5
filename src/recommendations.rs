use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::PerfumeId;
use crate::error::{ScentError, ScentResult};

/// 某款香水的离线推荐结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    #[serde(alias = "perfume_id")]
    pub perfume_id: PerfumeId,
    /// 按相关度从高到低排列
    #[serde(alias = "recommendations")]
    pub neighbor_ids: Vec<PerfumeId>,
    /// 与 `neighbor_ids` 一一对应，范围 [0, 1]
    pub scores: Vec<f64>,
}

impl RecommendationEntry {
    /// 按排名依次返回 `(邻居 ID, 分数)`
    pub fn ranked(&self) -> impl Iterator<Item = (PerfumeId, f64)> + '_ {
        self.neighbor_ids.iter().copied().zip(self.scores.iter().copied())
    }
}

/// 只读的推荐表
pub struct RecommendationStore {
    entries: HashMap<PerfumeId, RecommendationEntry>,
}

impl RecommendationStore {
    /// 从 JSON 文件加载推荐表
    pub fn load(path: impl AsRef<Path>) -> ScentResult<Self> {
        let path = path.as_ref();
        info!("正在加载推荐表: {}", path.display());

        let data = std::fs::read(path).map_err(|e| ScentError::data_unavailable(path, e))?;
        let entries: Vec<RecommendationEntry> =
            serde_json::from_slice(&data).map_err(|e| ScentError::data_unavailable(path, e))?;
        let store =
            Self::from_entries(entries).map_err(|e| ScentError::data_unavailable(path, e))?;

        info!("推荐表加载完成，共 {} 条记录", store.len());
        Ok(store)
    }

    /// 使用给定记录构建推荐表
    ///
    /// 同一 `perfume_id` 出现多次时只保留第一条。
    pub fn from_entries(entries: Vec<RecommendationEntry>) -> ScentResult<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.neighbor_ids.len() != entry.scores.len() {
                return Err(ScentError::Inconsistent(format!(
                    "perfume {}: {} neighbors but {} scores",
                    entry.perfume_id,
                    entry.neighbor_ids.len(),
                    entry.scores.len()
                )));
            }
            match map.entry(entry.perfume_id) {
                Entry::Occupied(_) => warn!("忽略重复的推荐记录: {}", entry.perfume_id),
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
        Ok(Self { entries: map })
    }

    pub fn find_by_perfume_id(&self, id: PerfumeId) -> Option<&RecommendationEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
