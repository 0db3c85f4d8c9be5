use std::sync::Arc;

use log::{debug, error};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{Catalog, DEFAULT_SEARCH_LIMIT, PerfumeId, PerfumeRecord, Year};
use crate::config::DataDir;
use crate::error::{ScentError, ScentResult};
use crate::recommendations::RecommendationStore;
use crate::vibes::{Vibe, derive_vibes};

/// 除 hero 之外最多返回的备选数量
pub const MAX_ALTERNATIVES: usize = 4;

/// 搜索结果
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SearchResult {
    pub id: PerfumeId,
    pub name: String,
    pub brand: String,
    /// `品牌 - 名称`
    pub full_name: String,
    /// 没有年份时为空字符串
    pub year: Year,
}

impl From<&PerfumeRecord> for SearchResult {
    fn from(record: &PerfumeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            brand: record.brand.clone(),
            full_name: format!("{} - {}", record.brand, record.name),
            year: record.year.clone().unwrap_or_default(),
        }
    }
}

/// 被查询的香水
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Seed {
    pub id: PerfumeId,
    pub name: String,
    pub brand: String,
}

/// 排名第一的推荐
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Hero {
    pub id: PerfumeId,
    pub name: String,
    pub brand: String,
    /// 匹配度百分比，0 到 100
    pub match_score: u8,
    #[schema(value_type = Vec<String>)]
    pub vibes: Vec<Vibe>,
    pub description: String,
    pub gender: String,
    /// 没有评分时为 0.0
    pub rating: f64,
    /// 原始链接，不做任何转换
    pub url: String,
}

/// 其余的备选推荐
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Alternative {
    pub id: PerfumeId,
    pub name: String,
    pub brand: String,
    pub match_score: u8,
    #[schema(value_type = Vec<String>)]
    pub vibes: Vec<Vibe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecommendationResponse {
    pub seed: Seed,
    /// 没有离线推荐结果时为 null
    pub hero: Option<Hero>,
    pub alternatives: Vec<Alternative>,
}

/// 将 [0, 1] 的分数转换为整数百分比，向零截断
pub fn match_score(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0) as u8
}

/// 查询服务
///
/// 持有两张只读表。任意一张加载失败时对应字段为 `None`，相关查询返回
/// [`ScentError::ServiceUnavailable`]。
#[derive(Clone)]
pub struct QueryService {
    catalog: Option<Arc<Catalog>>,
    recommendations: Option<Arc<RecommendationStore>>,
}

impl QueryService {
    pub fn new(
        catalog: Option<Arc<Catalog>>,
        recommendations: Option<Arc<RecommendationStore>>,
    ) -> Self {
        Self { catalog, recommendations }
    }

    /// 从数据目录加载两张表，加载失败只记录日志，不会中止
    pub fn load(data_dir: &DataDir) -> Self {
        let catalog = match Catalog::load(data_dir.catalog()) {
            Ok(catalog) => Some(Arc::new(catalog)),
            Err(e) => {
                error!("无法读取香水目录: {e}");
                None
            }
        };
        let recommendations = match RecommendationStore::load(data_dir.recommendations()) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                error!("无法读取推荐表: {e}");
                None
            }
        };
        Self::new(catalog, recommendations)
    }

    /// 两张表是否都已加载
    pub fn is_ready(&self) -> bool {
        self.catalog.is_some() && self.recommendations.is_some()
    }

    pub fn catalog(&self) -> ScentResult<&Catalog> {
        self.catalog.as_deref().ok_or(ScentError::ServiceUnavailable)
    }

    pub fn recommendations(&self) -> ScentResult<&RecommendationStore> {
        self.recommendations.as_deref().ok_or(ScentError::ServiceUnavailable)
    }

    /// 按名称搜索香水，最多返回 10 条
    pub fn search(&self, query: &str) -> ScentResult<Vec<SearchResult>> {
        let catalog = self.catalog()?;
        let records = catalog.search_by_name(query, DEFAULT_SEARCH_LIMIT)?;
        debug!("搜索 {query:?}: {} 条结果", records.len());
        Ok(records.into_iter().map(SearchResult::from).collect())
    }

    /// 获取某款香水的推荐结果
    pub fn recommend(&self, perfume_id: PerfumeId) -> ScentResult<RecommendationResponse> {
        let catalog = self.catalog()?;
        let recommendations = self.recommendations()?;

        let seed = catalog
            .find_by_id(perfume_id)
            .ok_or(ScentError::NotFound(perfume_id.0.into()))?;
        let seed = Seed { id: seed.id, name: seed.name.clone(), brand: seed.brand.clone() };

        let Some(entry) = recommendations.find_by_perfume_id(perfume_id) else {
            debug!("{perfume_id} 没有推荐结果");
            return Ok(RecommendationResponse { seed, hero: None, alternatives: vec![] });
        };

        let mut ranked = entry.ranked();
        let Some((hero_id, hero_score)) = ranked.next() else {
            return Ok(RecommendationResponse { seed, hero: None, alternatives: vec![] });
        };

        let record = resolve(catalog, hero_id)?;
        let hero = Hero {
            id: record.id,
            name: record.name.clone(),
            brand: record.brand.clone(),
            match_score: match_score(hero_score),
            vibes: derive_vibes(&record.main_accord),
            description: format!("Dominant notes of {}", record.main_accord),
            gender: record.gender.clone(),
            rating: record.rating(),
            url: record.image_url.clone(),
        };

        let alternatives = ranked
            .take(MAX_ALTERNATIVES)
            .map(|(id, score)| {
                resolve(catalog, id).map(|record| Alternative {
                    id: record.id,
                    name: record.name.clone(),
                    brand: record.brand.clone(),
                    match_score: match_score(score),
                    vibes: derive_vibes(&record.main_accord),
                })
            })
            .collect::<ScentResult<Vec<_>>>()?;

        Ok(RecommendationResponse { seed, hero: Some(hero), alternatives })
    }
}

fn resolve(catalog: &Catalog, id: PerfumeId) -> ScentResult<&PerfumeRecord> {
    catalog.find_by_id(id).ok_or_else(|| {
        ScentError::Inconsistent(format!("recommended perfume {id} is not in the catalog"))
    })
}
