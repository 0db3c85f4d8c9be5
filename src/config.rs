use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cli::*;

/// 香水目录的默认文件名
pub const CATALOG_FILE: &str = "perfume_metadata.json";
/// 推荐表的默认文件名
pub const RECOMMENDATIONS_FILE: &str = "perfume_recommendations.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "scentsearch", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    #[command(flatten)]
    pub data: DataOptions,
}

#[derive(Args, Debug, Clone)]
pub struct DataOptions {
    /// 数据目录
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub data_dir: DataDir,
    /// 香水目录文件名，相对于数据目录
    #[arg(long, value_name = "FILE", default_value = CATALOG_FILE)]
    pub catalog: String,
    /// 推荐表文件名，相对于数据目录
    #[arg(long, value_name = "FILE", default_value = RECOMMENDATIONS_FILE)]
    pub recommendations: String,
}

impl DataOptions {
    /// 合并文件名后的数据目录
    pub fn data_dir(&self) -> DataDir {
        DataDir {
            path: self.data_dir.path.clone(),
            catalog: self.catalog.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 启动 HTTP 推荐服务
    Server(ServerCommand),
    /// 按名称搜索香水
    Search(SearchCommand),
    /// 查看某款香水的推荐结果
    Recommend(RecommendCommand),
    /// 查看目录中的一条记录
    Show(ShowCommand),
}

/// 数据文件所在目录
#[derive(Debug, Clone)]
pub struct DataDir {
    path: PathBuf,
    catalog: String,
    recommendations: String,
}

impl DataDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: CATALOG_FILE.to_string(),
            recommendations: RECOMMENDATIONS_FILE.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// 返回香水目录文件的路径
    pub fn catalog(&self) -> PathBuf {
        self.path.join(&self.catalog)
    }

    /// 返回推荐表文件的路径
    pub fn recommendations(&self) -> PathBuf {
        self.path.join(&self.recommendations)
    }
}

impl FromStr for DataDir {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}
