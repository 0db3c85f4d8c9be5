use anyhow::Result;
use clap::Parser;

use crate::catalog::Catalog;
use crate::cli::SubCommandExtend;
use crate::config::{Opts, OutputFormat};
use crate::service::{QueryService, SearchResult};

#[derive(Parser, Debug, Clone)]
pub struct SearchCommand {
    /// 香水名称关键字，至少 2 个字符
    pub query: String,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for SearchCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        // 搜索只需要目录
        let catalog = Catalog::load(opts.data.data_dir().catalog())?;
        let service = QueryService::new(Some(catalog.into()), None);
        let result = service.search(&self.query)?;
        print_result(&result, self.output_format)
    }
}

fn print_result(result: &[SearchResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?)
        }
        OutputFormat::Table => {
            for r in result {
                println!("{}\t{}\t{}", r.id, r.full_name, r.year);
            }
        }
    }
    Ok(())
}
