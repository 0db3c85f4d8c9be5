use anyhow::Result;
use clap::Parser;

use crate::catalog::PerfumeId;
use crate::cli::SubCommandExtend;
use crate::config::{Opts, OutputFormat};
use crate::service::{QueryService, RecommendationResponse};

#[derive(Parser, Debug, Clone)]
pub struct RecommendCommand {
    /// 香水 ID
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for RecommendCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let service = QueryService::load(&opts.data.data_dir());
        let response = service.recommend(PerfumeId::try_from(self.id)?)?;
        print_result(&response, self.output_format)
    }
}

fn print_result(response: &RecommendationResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?)
        }
        OutputFormat::Table => {
            let seed = &response.seed;
            println!("seed\t{}\t{} - {}", seed.id, seed.brand, seed.name);
            let Some(hero) = &response.hero else {
                println!("(no recommendations)");
                return Ok(());
            };
            println!(
                "hero\t{}\t{} - {}\t{}%\t{}",
                hero.id,
                hero.brand,
                hero.name,
                hero.match_score,
                join(&hero.vibes)
            );
            for alt in &response.alternatives {
                println!(
                    "alt\t{}\t{} - {}\t{}%\t{}",
                    alt.id,
                    alt.brand,
                    alt.name,
                    alt.match_score,
                    join(&alt.vibes)
                );
            }
        }
    }
    Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
