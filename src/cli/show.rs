use anyhow::{Result, anyhow};
use clap::Parser;

use crate::catalog::{Catalog, PerfumeId};
use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::vibes::derive_vibes;

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// 香水 ID
    pub id: u32,
}

impl SubCommandExtend for ShowCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let catalog = Catalog::load(opts.data.data_dir().catalog())?;
        let record = catalog
            .find_by_id(PerfumeId(self.id))
            .ok_or_else(|| anyhow!("找不到香水: {}", self.id))?;

        let mut value = serde_json::to_value(record)?;
        value["vibes"] = serde_json::to_value(derive_vibes(&record.main_accord))?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}
